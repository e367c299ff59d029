//! # Vigenère Core
//!
//! The Vigenère cipher and a ciphertext-only attack on it based on English
//! letter statistics.
//!
//! ## Pipeline
//!
//! - **Normalize**: keep letters, upper-case them ([`Text::normalize`])
//! - **Key length**: average Index of Coincidence per candidate period
//!   ([`estimate_key_length`])
//! - **Key letters**: chi-squared match of every column against English
//!   ([`recover_key`])
//!
//! ## Usage
//!
//! ```rust
//! use vigenere_core::{decrypt, encrypt, Key, Text};
//!
//! let key = Key::parse("KEY")?;
//! let ciphertext = encrypt(&key, &Text::from("Hello, World"));
//! assert_eq!(ciphertext.to_string(), "RIJVSUYVJN");
//!
//! let plaintext = decrypt(&key, &ciphertext);
//! assert_eq!(plaintext.to_string(), "HELLOWORLD");
//! # Ok::<(), vigenere_core::VigenereError>(())
//! ```

pub mod cipher;
pub mod config;
pub mod error;
pub mod frequency;
pub mod io;
pub mod keylength;
pub mod letter;
pub mod recover;

pub use cipher::{decrypt, encrypt, transform, Direction};
pub use config::{Limits, IC_THRESHOLD, LINE_WIDTH, MAX_INPUT_BYTES, MAX_KEY_LENGTH};
pub use error::{Result, VigenereError};
pub use frequency::ENGLISH_FREQUENCIES;
pub use keylength::{average_ic_by_period, estimate_key_length, index_of_coincidence};
pub use letter::{Column, Key, Letter, Text};
pub use recover::{cryptanalyze, recover_key, ColumnScore, Cryptanalysis};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
