//! Key recovery by chi-squared frequency matching
//!
//! Once the key length is known every column is a Caesar cipher. Each column
//! is solved on its own by undoing all 26 shifts and keeping the one whose
//! letter distribution is closest to English.

use crate::config::{validate_key_length, Limits};
use crate::frequency::{letter_counts, ENGLISH_FREQUENCIES};
use crate::keylength::{average_ic_by_period, select_period};
use crate::letter::{Key, Letter, Text, ALPHABET_SIZE};
use crate::error::Result;

/// Best shift found for one column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnScore {
    /// Key letter that undoes the column's Caesar shift
    pub shift: Letter,
    /// Chi-squared statistic of the column decrypted with `shift`
    pub chi_squared: f64,
}

/// Result of a full ciphertext-only attack
#[derive(Debug, Clone, PartialEq)]
pub struct Cryptanalysis {
    pub key_length: usize,
    pub key: Key,
    /// Average IC per period, entry `i` for period `i + 1`; empty when the
    /// key length was supplied
    pub average_ics: Vec<f64>,
    /// One entry per key letter, in column order
    pub columns: Vec<ColumnScore>,
}

/// Chi-squared statistic for every candidate shift of a column.
///
/// Entry `s` scores the column decrypted with key letter `s`: for each letter
/// L the observed count of L after undoing the shift is compared with
/// `ENGLISH_FREQUENCIES[L] * n`. Undoing shift `s` maps ciphertext letter
/// `L + s` onto L, so the observed counts are the column counts rotated by `s`.
///
/// An empty column scores 0.0 for every shift.
pub fn chi_squared_scores(column: impl IntoIterator<Item = Letter>) -> [f64; ALPHABET_SIZE] {
    let counts = letter_counts(column);
    let n: u32 = counts.iter().sum();
    let mut scores = [0.0; ALPHABET_SIZE];

    if n == 0 {
        return scores;
    }

    for (shift, score) in scores.iter_mut().enumerate() {
        *score = ENGLISH_FREQUENCIES
            .iter()
            .enumerate()
            .map(|(letter, &frequency)| {
                let observed = counts[(letter + shift) % ALPHABET_SIZE] as f64;
                let expected = frequency * n as f64;
                (observed - expected).powi(2) / expected
            })
            .sum();
    }

    scores
}

/// Lowest score and its shift; the smallest shift wins ties
pub fn best_shift(scores: &[f64; ALPHABET_SIZE]) -> ColumnScore {
    let mut best = 0;

    for (shift, &score) in scores.iter().enumerate() {
        if score < scores[best] {
            best = shift;
        }
    }

    ColumnScore {
        shift: Letter::new(best as u8).unwrap_or(Letter::A),
        chi_squared: scores[best],
    }
}

/// Solves every column of `text` at period `key_length`
pub fn score_columns(text: &Text, key_length: usize) -> Result<Vec<ColumnScore>> {
    validate_key_length(key_length)?;

    Ok(text
        .columns(key_length)
        .map(|column| best_shift(&chi_squared_scores(column.iter())))
        .collect())
}

/// Recovers a key of `key_length` letters from `text`.
///
/// Columns longer than a few hundred letters recover reliably; short ones can
/// land on a neighbouring shift. A column with no letters (key longer than
/// the text) yields `A`.
pub fn recover_key(text: &Text, key_length: usize) -> Result<Key> {
    let columns = score_columns(text, key_length)?;
    Key::from_letters(columns.iter().map(|c| c.shift).collect())
}

/// Runs the whole attack: estimates the key length unless one is given,
/// then recovers the key.
pub fn cryptanalyze(text: &Text, key_length: Option<usize>, limits: &Limits) -> Result<Cryptanalysis> {
    let (key_length, average_ics) = match key_length {
        Some(length) => (length, Vec::new()),
        None => {
            let average_ics = average_ic_by_period(text, limits.max_key_length);
            (select_period(&average_ics, limits.ic_threshold), average_ics)
        }
    };

    let columns = score_columns(text, key_length)?;
    let key = Key::from_letters(columns.iter().map(|c| c.shift).collect())?;

    Ok(Cryptanalysis {
        key_length,
        key,
        average_ics,
        columns,
    })
}
