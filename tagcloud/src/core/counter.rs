// src/core/counter.rs
use std::collections::HashMap;

use crate::models::CountBounds;

/// Occurrence count per distinct word. Keys are case-sensitive: "The" and
/// "the" are different words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: HashMap<String, u64>,
}

impl FrequencyMap {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, equal to the number of word tokens seen.
    #[inline]
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().fold(0_u64, |acc, &c| acc.saturating_add(c))
    }

    /// Global min/max over every distinct word, `None` for an empty map.
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Option<CountBounds> {
        CountBounds::from_counts(self.counts.values().copied())
    }

    /// Adds the counts of `other` into `self`.
    #[inline]
    pub fn merge(&mut self, other: Self) {
        for (word, count) in other.counts {
            let entry = self.counts.entry(word).or_insert(0);
            *entry = entry.saturating_add(count);
        }
    }

    /// Unordered view of every (word, count) pair.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }
}

impl<'a> FromIterator<&'a str> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        count_words(iter)
    }
}

/// Counts every word of the stream. No case folding or other normalisation.
#[inline]
pub fn count_words<'a>(words: impl IntoIterator<Item = &'a str>) -> FrequencyMap {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for word in words {
        if let Some(count) = counts.get_mut(word) {
            *count = count.saturating_add(1);
        } else {
            counts.insert(word.to_owned(), 1);
        }
    }
    FrequencyMap { counts }
}
