//! Document font-size distribution.
//!
//! Heading detection ranks a span's font size against the sizes seen on the
//! first pages of the document. The rank is a cheap proxy for "how large is
//! this text compared to body text".

use crate::layout::text_block::DEFAULT_FONT_SIZE;

/// Percentile reported when there is nothing to rank against.
pub const NEUTRAL_PERCENTILE: f32 = 0.5;

/// Font sizes sampled from a document. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSizeDistribution {
    sizes: Vec<f32>,
}

impl FontSizeDistribution {
    /// Build a distribution from sampled sizes.
    ///
    /// An empty sample falls back to a single [`DEFAULT_FONT_SIZE`].
    pub fn from_samples(sizes: Vec<f32>) -> Self {
        if sizes.is_empty() {
            Self {
                sizes: vec![DEFAULT_FONT_SIZE],
            }
        } else {
            Self { sizes }
        }
    }

    /// The sampled sizes in collection order.
    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    /// Fraction of sampled sizes that are `<= font_size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_outliner::layout::FontSizeDistribution;
    ///
    /// let dist = FontSizeDistribution::from_samples(vec![10.0, 12.0, 12.0, 24.0]);
    /// assert_eq!(dist.percentile(12.0), 0.75);
    /// ```
    pub fn percentile(&self, font_size: f32) -> f32 {
        percentile_of(&self.sizes, font_size)
    }
}

impl Default for FontSizeDistribution {
    fn default() -> Self {
        Self::from_samples(Vec::new())
    }
}

/// Fraction of `sizes` that are `<= font_size`, or [`NEUTRAL_PERCENTILE`]
/// for an empty slice.
pub fn percentile_of(sizes: &[f32], font_size: f32) -> f32 {
    if sizes.is_empty() {
        return NEUTRAL_PERCENTILE;
    }
    let at_or_below = sizes.iter().filter(|&&s| s <= font_size).count();
    at_or_below as f32 / sizes.len() as f32
}
