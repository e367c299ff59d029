//! Reading normalized text from files and writing fixed-width output

use std::fs;
use std::path::Path;

use crate::config::Limits;
use crate::error::{Result, VigenereError};
use crate::letter::Text;

/// Reads `path` and normalizes it to upper-case letters.
///
/// The file size is checked against `limits.max_input_bytes` before any data
/// is read.
pub fn read_text(path: &Path, limits: &Limits) -> Result<Text> {
    let unreadable = |source| VigenereError::InputUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let size = fs::metadata(path).map_err(unreadable)?.len();
    if size > limits.max_input_bytes {
        return Err(VigenereError::InputTooLarge {
            path: path.to_path_buf(),
            size,
            limit: limits.max_input_bytes,
        });
    }

    let raw = fs::read(path).map_err(unreadable)?;
    Ok(Text::normalize(raw))
}

/// Splits the text into lines of `width` letters, each ending in `\n`
///
/// The last line holds the remainder. An empty text gives an empty string.
pub fn wrap_lines(text: &Text, width: usize) -> String {
    let width = width.max(1);
    let letters = text.to_string();
    let mut wrapped = String::with_capacity(letters.len() + letters.len() / width + 1);

    for line in letters.as_bytes().chunks(width) {
        // chunks of an all-ASCII string are valid UTF-8
        wrapped.push_str(std::str::from_utf8(line).unwrap_or_default());
        wrapped.push('\n');
    }

    wrapped
}

/// Writes `text` to `path` wrapped at `width` letters per line
pub fn write_wrapped(path: &Path, text: &Text, width: usize) -> Result<()> {
    fs::write(path, wrap_lines(text, width)).map_err(|source| VigenereError::OutputUnwritable {
        path: path.to_path_buf(),
        source,
    })
}
