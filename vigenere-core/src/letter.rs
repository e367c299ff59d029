//! Letters, normalized texts, keys and column views

use std::fmt;
use std::str::FromStr;

use crate::config::MAX_KEY_LENGTH;
use crate::error::{Result, VigenereError};

/// Size of the working alphabet
pub const ALPHABET_SIZE: usize = 26;

/// A letter of the alphabet stored as its offset from `A` (0-25)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Letter(u8);

impl Letter {
    pub const A: Letter = Letter(0);

    /// Letter at `offset`, or `None` when the offset is outside 0-25
    pub const fn new(offset: u8) -> Option<Letter> {
        if (offset as usize) < ALPHABET_SIZE {
            Some(Letter(offset))
        } else {
            None
        }
    }

    /// Letter for an ASCII letter of either case
    pub fn from_ascii(byte: u8) -> Option<Letter> {
        if byte.is_ascii_alphabetic() {
            Some(Letter(byte.to_ascii_uppercase() - b'A'))
        } else {
            None
        }
    }

    /// Letter for an upper-case `A`-`Z` character only
    pub fn from_upper(c: char) -> Option<Letter> {
        if c.is_ascii_uppercase() {
            Some(Letter(c as u8 - b'A'))
        } else {
            None
        }
    }

    pub fn offset(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// (self + by) mod 26
    pub fn shift(self, by: Letter) -> Letter {
        Letter((self.0 + by.0) % ALPHABET_SIZE as u8)
    }

    /// (self - by + 26) mod 26
    pub fn unshift(self, by: Letter) -> Letter {
        Letter((self.0 + ALPHABET_SIZE as u8 - by.0) % ALPHABET_SIZE as u8)
    }

    /// All 26 letters in alphabetical order
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_SIZE as u8).map(Letter)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A normalized text: upper-case letters only, everything else removed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text(Vec<Letter>);

impl Text {
    /// Keep the ASCII letters of `raw`, upper-cased, and drop everything else
    ///
    /// Works on bytes so input that is not valid UTF-8 still normalizes;
    /// multi-byte sequences never contain ASCII letters.
    pub fn normalize(raw: impl AsRef<[u8]>) -> Text {
        Text(raw.as_ref().iter().filter_map(|&b| Letter::from_ascii(b)).collect())
    }

    pub fn letters(&self) -> &[Letter] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        self.0.iter().copied()
    }

    /// The letters at positions `residue, residue + period, ...`
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn column(&self, residue: usize, period: usize) -> Column<'_> {
        assert!(period > 0, "column period must be non-zero");
        Column {
            letters: &self.0,
            residue,
            period,
        }
    }

    /// All `period` columns in residue order
    pub fn columns(&self, period: usize) -> impl Iterator<Item = Column<'_>> {
        (0..period).map(move |residue| self.column(residue, period))
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.0.iter().map(|l| l.to_char()).collect();
        f.write_str(&s)
    }
}

impl FromIterator<Letter> for Text {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        Text(iter.into_iter().collect())
    }
}

impl From<&str> for Text {
    fn from(raw: &str) -> Self {
        Text::normalize(raw)
    }
}

/// Borrowed view of one residue class of a text
#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    letters: &'a [Letter],
    residue: usize,
    period: usize,
}

impl<'a> Column<'a> {
    pub fn len(&self) -> usize {
        if self.residue >= self.letters.len() {
            0
        } else {
            (self.letters.len() - self.residue - 1) / self.period + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Letter> + 'a {
        self.letters
            .iter()
            .skip(self.residue)
            .step_by(self.period)
            .copied()
    }
}

/// A validated cipher key: 1 to 32 upper-case letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(Vec<Letter>);

impl Key {
    /// Parse a raw key string
    ///
    /// Only `A`-`Z` is accepted; lower-case letters, digits and whitespace
    /// are rejected rather than normalized.
    pub fn parse(raw: &str) -> Result<Key> {
        let count = raw.chars().count();
        if count == 0 {
            return Err(VigenereError::InvalidKey("key is empty".to_string()));
        }
        if count > MAX_KEY_LENGTH {
            return Err(VigenereError::InvalidKey(format!(
                "key has {} characters",
                count
            )));
        }

        let letters = raw
            .chars()
            .map(|c| {
                Letter::from_upper(c).ok_or_else(|| {
                    VigenereError::InvalidKey(format!("unexpected character {:?}", c))
                })
            })
            .collect::<Result<Vec<Letter>>>()?;

        Ok(Key(letters))
    }

    /// Build a key from letters, checking the length bounds
    pub fn from_letters(letters: Vec<Letter>) -> Result<Key> {
        if letters.is_empty() || letters.len() > MAX_KEY_LENGTH {
            return Err(VigenereError::InvalidKeyLength(letters.len()));
        }
        Ok(Key(letters))
    }

    pub fn letters(&self) -> &[Letter] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a validated key
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Key letters repeated without end
    pub fn cycle(&self) -> impl Iterator<Item = Letter> + '_ {
        self.0.iter().copied().cycle()
    }
}

impl FromStr for Key {
    type Err = VigenereError;

    fn from_str(s: &str) -> Result<Self> {
        Key::parse(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.0.iter().map(|l| l.to_char()).collect();
        f.write_str(&s)
    }
}
