//! Key length estimation with the Index of Coincidence
//!
//! A column taken at the true key period is a single Caesar alphabet and keeps
//! the IC of natural language (about 0.065 for English); columns at a wrong
//! period mix alphabets and fall towards the uniform 1/26 (about 0.038).

use crate::config::IC_THRESHOLD;
use crate::frequency::letter_counts;
use crate::letter::{Letter, Text};

/// Calculates the Index of Coincidence (IC) of a sample.
///
/// IC = sum of count_i * (count_i - 1) / (n * (n - 1)), the probability that
/// two letters drawn without replacement are the same.
///
/// # Returns
///
/// The IC value, or 0.0 if the sample has fewer than 2 letters.
pub fn index_of_coincidence(letters: impl IntoIterator<Item = Letter>) -> f64 {
    let counts = letter_counts(letters);
    let total: u64 = counts.iter().map(|&c| c as u64).sum();

    if total < 2 {
        return 0.0;
    }

    let numerator: u64 = counts
        .iter()
        .map(|&c| c as u64 * (c as u64).saturating_sub(1))
        .sum();

    numerator as f64 / (total * (total - 1)) as f64
}

/// Mean IC over the `period` columns of `text`
///
/// Columns with fewer than two letters count as 0, and so does period 0.
pub fn average_ic(text: &Text, period: usize) -> f64 {
    if period == 0 {
        return 0.0;
    }

    let total: f64 = text
        .columns(period)
        .map(|column| index_of_coincidence(column.iter()))
        .sum();
    total / period as f64
}

/// Average IC for every period `1..=max_length`; entry `i` is period `i + 1`
pub fn average_ic_by_period(text: &Text, max_length: usize) -> Vec<f64> {
    (1..=max_length).map(|period| average_ic(text, period)).collect()
}

/// Picks a key length from per-period average ICs.
///
/// Periods are scanned in increasing order. The first one whose average IC
/// exceeds `threshold` is returned straight away; otherwise the period with
/// the highest average IC wins, the earliest on ties. Period 1 is the
/// starting candidate, so an empty profile also yields 1.
pub fn select_period(average_ics: &[f64], threshold: f64) -> usize {
    let mut best = 0;

    for (index, &ic) in average_ics.iter().enumerate() {
        if ic > threshold {
            return index + 1;
        }
        if ic > average_ics[best] {
            best = index;
        }
    }

    best + 1
}

/// Estimates the Vigenère key length of `text`, searching periods
/// `1..=max_length`.
///
/// The result lies in `[1, max(max_length, 1)]` for any input, including
/// texts shorter than the periods searched.
pub fn estimate_key_length(text: &Text, max_length: usize) -> usize {
    select_period(&average_ic_by_period(text, max_length), IC_THRESHOLD)
}
