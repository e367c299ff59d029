//! Vigenère encryption and decryption

use std::fmt;

use crate::letter::{Key, Text};

/// Direction of the cipher transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// ciphertext = (plaintext + key) mod 26
    Encrypt,
    /// plaintext = (ciphertext - key + 26) mod 26
    Decrypt,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => write!(f, "encrypt"),
            Direction::Decrypt => write!(f, "decrypt"),
        }
    }
}

/// Applies the Vigenère cipher to a normalized text.
///
/// Key letters are consumed cyclically, one per text letter, whatever the
/// relative lengths of key and text.
///
/// # Arguments
///
/// * `direction` - Encrypt or decrypt.
/// * `key` - The validated cipher key.
/// * `text` - The normalized input text.
///
/// # Returns
///
/// A `Text` of the same length as `text`.
pub fn transform(direction: Direction, key: &Key, text: &Text) -> Text {
    text.iter()
        .zip(key.cycle())
        .map(|(letter, k)| match direction {
            Direction::Encrypt => letter.shift(k),
            Direction::Decrypt => letter.unshift(k),
        })
        .collect()
}

/// Encrypts `plaintext` with `key`
pub fn encrypt(key: &Key, plaintext: &Text) -> Text {
    transform(Direction::Encrypt, key, plaintext)
}

/// Decrypts `ciphertext` with `key`
pub fn decrypt(key: &Key, ciphertext: &Text) -> Text {
    transform(Direction::Decrypt, key, ciphertext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_hello_world() {
        let key = Key::parse("KEY").unwrap();
        let ciphertext = encrypt(&key, &Text::from("HELLOWORLD"));
        assert_eq!(ciphertext.to_string(), "RIJVSUYVJN");
    }

    #[test]
    fn test_decrypt_hello_world() {
        let key = Key::parse("KEY").unwrap();
        let plaintext = decrypt(&key, &Text::from("RIJVSUYVJN"));
        assert_eq!(plaintext.to_string(), "HELLOWORLD");
    }

    #[test]
    fn test_identity_key() {
        let key = Key::parse("AAAA").unwrap();
        let text = Text::from("ATTACKATDAWN");
        assert_eq!(encrypt(&key, &text), text);
    }

    #[test]
    fn test_key_longer_than_text() {
        let key = Key::parse("BCDEFGHIJ").unwrap();
        let ciphertext = encrypt(&key, &Text::from("AAA"));
        assert_eq!(ciphertext.to_string(), "BCD");
    }

    #[test]
    fn test_empty_text() {
        let key = Key::parse("KEY").unwrap();
        assert!(transform(Direction::Decrypt, &key, &Text::default()).is_empty());
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Encrypt.to_string(), "encrypt");
        assert_eq!(Direction::Decrypt.to_string(), "decrypt");
    }
}
