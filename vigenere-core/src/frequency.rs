//! Reference English letter frequencies and letter counting

use crate::letter::{Letter, ALPHABET_SIZE};

/// Relative frequency of each letter A-Z in English text
///
/// Every entry is strictly positive, so expected counts derived from it are
/// never zero for a non-empty sample.
pub const ENGLISH_FREQUENCIES: [f64; ALPHABET_SIZE] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094,
    0.06966, 0.00153, 0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929,
    0.00095, 0.05987, 0.06327, 0.09056, 0.02758, 0.00978, 0.02360, 0.00150,
    0.01974, 0.00074,
];

/// Reference frequency of a single letter
pub fn english_frequency(letter: Letter) -> f64 {
    ENGLISH_FREQUENCIES[letter.index()]
}

/// Counts how often each letter occurs.
///
/// # Arguments
///
/// * `letters` - The letters to count.
///
/// # Returns
///
/// An array of 26 counts for letters A-Z.
pub fn letter_counts(letters: impl IntoIterator<Item = Letter>) -> [u32; ALPHABET_SIZE] {
    let mut counts: [u32; ALPHABET_SIZE] = [0; ALPHABET_SIZE];

    for letter in letters {
        counts[letter.index()] += 1;
    }

    counts
}
