// src/models/tag_cloud.rs

/// A selected word together with its scaled font size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudEntry {
    pub word: String,
    pub count: u64,
    pub font_size: u32,
}

/// The finished cloud, ready to be rendered. Entries are in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCloud {
    /// Name of the input shown in the header.
    pub title: String,
    pub entries: Vec<CloudEntry>,
    pub distinct_words: usize,
    pub total_words: u64,
}

impl TagCloud {
    /// Number of entries actually shown, i.e. N after clamping.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
