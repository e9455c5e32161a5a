// src/core/separators.rs
use std::collections::HashSet;

/// Characters that split words by default: whitespace and common punctuation.
pub const DEFAULT_SEPARATORS: &str = " \t\n\r,-.!?[]';:/()";

/// Fixed set of word-boundary characters. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: HashSet<char>,
}

impl SeparatorSet {
    /// Builds a set from every character of `chars`. Duplicates collapse.
    #[inline]
    #[must_use]
    pub fn new(chars: &str) -> Self {
        Self {
            chars: chars.chars().collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATORS)
    }
}
