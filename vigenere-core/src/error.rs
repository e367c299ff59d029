//! Error types for cipher and cryptanalysis operations

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VigenereError {
    #[error("Invalid file size: {path} is {size} bytes (limit = {limit} bytes)")]
    InputTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    #[error("Failed to read {path}: {source}")]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid key ({0}); only upper-case letters A-Z, length 1 to 32")]
    InvalidKey(String),

    #[error("Invalid key length {0} (must be between 1 and 32)")]
    InvalidKeyLength(usize),
}

impl VigenereError {
    /// Process exit status for this error.
    ///
    /// Key errors are rejected with status 1; I/O failures use 3, leaving 2
    /// to clap's usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            VigenereError::InvalidKey(_) | VigenereError::InvalidKeyLength(_) => 1,
            VigenereError::InputTooLarge { .. }
            | VigenereError::InputUnreadable { .. }
            | VigenereError::OutputUnwritable { .. } => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, VigenereError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_errors_exit_with_one() {
        assert_eq!(VigenereError::InvalidKey("empty".to_string()).exit_code(), 1);
        assert_eq!(VigenereError::InvalidKeyLength(0).exit_code(), 1);
    }

    #[test]
    fn test_io_errors_exit_distinctly() {
        let err = VigenereError::InputTooLarge {
            path: PathBuf::from("big.txt"),
            size: 200_000,
            limit: 102_400,
        };
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("limit = 102400"));
    }
}
