// src/core/ranker.rs
use std::cmp::Ordering;

use crate::core::counter::FrequencyMap;
use crate::models::{CountBounds, WordCount};

/// Result of ranking a frequency map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    /// The top `min(N, distinct)` words, sorted alphabetically ignoring case.
    pub entries: Vec<WordCount>,
    /// Min/max over all distinct words, not only the selected ones.
    pub bounds: Option<CountBounds>,
}

/// Case-insensitive comparison, falling back to exact code point order so that
/// words differing only in case still sort deterministically.
#[inline]
#[must_use]
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

/// Orders by count descending. Equal counts fall back to alphabetical order.
#[inline]
#[must_use]
pub fn cmp_by_count(a: &WordCount, b: &WordCount) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| cmp_ignore_case(&a.word, &b.word))
}

/// Selects the `top` most frequent words and re-sorts them for display.
///
/// `top` is clamped to the number of distinct words.
#[inline]
#[must_use]
pub fn rank(frequencies: &FrequencyMap, top: usize) -> Ranking {
    let mut entries: Vec<WordCount> = frequencies
        .iter()
        .map(|(word, count)| WordCount::new(word, count))
        .collect();

    entries.sort_by(cmp_by_count);
    entries.truncate(top);
    entries.sort_by(|a, b| cmp_ignore_case(&a.word, &b.word));

    Ranking {
        entries,
        bounds: frequencies.bounds(),
    }
}
