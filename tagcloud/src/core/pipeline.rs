// src/core/pipeline.rs
use log::debug;

use crate::core::counter::{FrequencyMap, count_words};
use crate::core::ranker::rank;
use crate::core::scaler::FontScale;
use crate::core::separators::SeparatorSet;
use crate::core::tokenizer::words;
use crate::models::{CloudEntry, TagCloud};

/// Fully resolved parameters for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub separators: SeparatorSet,
    /// Number of words to show, clamped to the number of distinct words.
    pub top: usize,
    pub font_scale: FontScale,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            separators: SeparatorSet::default(),
            top: 10,
            font_scale: FontScale::default(),
        }
    }
}

/// Tokenizes `text`, counts its words and builds the cloud.
#[inline]
#[must_use]
pub fn generate(text: &str, title: &str, settings: &Settings) -> TagCloud {
    let frequencies = count_words(words(text, &settings.separators));
    debug!(
        "Counted {} words ({} distinct) in {title}",
        frequencies.total(),
        frequencies.len()
    );
    generate_from_counts(&frequencies, title, settings)
}

/// Ranks an already counted map and scales each selected word.
#[must_use]
pub fn generate_from_counts(frequencies: &FrequencyMap, title: &str, settings: &Settings) -> TagCloud {
    let ranking = rank(frequencies, settings.top);
    debug!(
        "Selected {} of {} distinct words (bounds {:?})",
        ranking.entries.len(),
        frequencies.len(),
        ranking.bounds
    );

    let entries = ranking.bounds.map_or_else(Vec::new, |bounds| {
        ranking
            .entries
            .into_iter()
            .map(|entry| CloudEntry {
                font_size: settings.font_scale.size_for(entry.count, bounds),
                word: entry.word,
                count: entry.count,
            })
            .collect()
    });

    TagCloud {
        title: title.to_owned(),
        entries,
        distinct_words: frequencies.len(),
        total_words: frequencies.total(),
    }
}
