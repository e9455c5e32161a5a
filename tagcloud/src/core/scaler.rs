// src/core/scaler.rs
use crate::error::{Result, TagCloudError};
use crate::models::CountBounds;

pub const DEFAULT_MIN_FONT: u32 = 11;
pub const DEFAULT_MAX_FONT: u32 = 48;

/// Linear mapping from occurrence counts onto a font-size range in points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontScale {
    min: u32,
    max: u32,
}

impl FontScale {
    /// # Errors
    ///
    /// Returns `InvalidFontRange` if `min > max`.
    #[inline]
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min > max {
            return Err(TagCloudError::InvalidFontRange { min, max });
        }
        Ok(Self { min, max })
    }

    #[inline]
    #[must_use]
    pub const fn min(&self) -> u32 {
        self.min
    }

    #[inline]
    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Font size for `count`, interpolated between `bounds.min` and
    /// `bounds.max` and truncated toward zero. Flat bounds give the minimum
    /// size. Counts outside the bounds are clamped.
    #[inline]
    #[must_use]
    pub fn size_for(&self, count: u64, bounds: CountBounds) -> u32 {
        if bounds.is_flat() {
            return self.min;
        }

        let span = bounds.max.saturating_sub(bounds.min);
        let offset = count.clamp(bounds.min, bounds.max).saturating_sub(bounds.min);
        let range = u64::from(self.max.saturating_sub(self.min));
        let scaled = range.saturating_mul(offset).checked_div(span).unwrap_or(0);

        self.min
            .saturating_add(u32::try_from(scaled).unwrap_or(u32::MAX))
            .min(self.max)
    }
}

impl Default for FontScale {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_FONT,
            max: DEFAULT_MAX_FONT,
        }
    }
}
