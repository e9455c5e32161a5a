// src/models/count_bounds.rs

/// Smallest and largest occurrence count across every distinct word of a
/// document, measured before the top-N cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountBounds {
    pub min: u64,
    pub max: u64,
}

impl CountBounds {
    #[inline]
    #[must_use]
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Folds a sequence of counts into bounds. `None` when there are no counts.
    #[inline]
    pub fn from_counts(counts: impl IntoIterator<Item = u64>) -> Option<Self> {
        counts.into_iter().fold(None, |bounds, count| {
            Some(bounds.map_or(Self::new(count, count), |b: Self| {
                Self::new(b.min.min(count), b.max.max(count))
            }))
        })
    }

    #[inline]
    #[must_use]
    pub const fn is_flat(&self) -> bool {
        self.min == self.max
    }
}
