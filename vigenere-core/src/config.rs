//! Limits shared by the cipher, the analysis and the file glue

use crate::error::{Result, VigenereError};

/// Maximum raw input size accepted from a file (100 KB)
pub const MAX_INPUT_BYTES: u64 = 100 * 1024;

/// Longest key accepted, and the largest period searched by the estimator
pub const MAX_KEY_LENGTH: usize = 32;

/// Letters per line when a text is written to a file
pub const LINE_WIDTH: usize = 64;

/// Average IC above which a period is accepted as the key length at once
pub const IC_THRESHOLD: f64 = 0.06;

/// Tunable limits for one run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    pub max_input_bytes: u64,
    pub max_key_length: usize,
    pub line_width: usize,
    pub ic_threshold: f64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_bytes: MAX_INPUT_BYTES,
            max_key_length: MAX_KEY_LENGTH,
            line_width: LINE_WIDTH,
            ic_threshold: IC_THRESHOLD,
        }
    }
}

impl Limits {
    /// Same limits with a different estimator bound
    ///
    /// The bound must lie in `[1, MAX_KEY_LENGTH]`.
    pub fn with_max_key_length(self, max_key_length: usize) -> Result<Self> {
        validate_key_length(max_key_length)?;
        Ok(Self {
            max_key_length,
            ..self
        })
    }
}

/// Validate a key length supplied from outside the library
pub fn validate_key_length(key_length: usize) -> Result<()> {
    if (1..=MAX_KEY_LENGTH).contains(&key_length) {
        Ok(())
    } else {
        Err(VigenereError::InvalidKeyLength(key_length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let limits = Limits::default();
        assert_eq!(limits.max_input_bytes, 102_400);
        assert_eq!(limits.max_key_length, 32);
        assert_eq!(limits.line_width, 64);
        assert_eq!(limits.ic_threshold, 0.06);
    }

    #[test]
    fn test_with_max_key_length() {
        let limits = Limits::default().with_max_key_length(10).unwrap();
        assert_eq!(limits.max_key_length, 10);

        assert!(matches!(
            Limits::default().with_max_key_length(0),
            Err(VigenereError::InvalidKeyLength(0))
        ));
        assert!(matches!(
            Limits::default().with_max_key_length(33),
            Err(VigenereError::InvalidKeyLength(33))
        ));
    }
}
