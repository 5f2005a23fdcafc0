//! Inferred document outline.
//!
//! Turns per-line heading decisions into a document outline: a title plus an
//! ordered, de-duplicated list of H1/H2/H3 headings with their pages.
//!
//! The entry point is [`OutlineExtractor::extract_outline`], which works on
//! any [`LayoutSource`](crate::document::LayoutSource).

mod dedup;
mod extractor;
mod noise;
mod title;

pub use dedup::dedup_headings;
pub use extractor::OutlineExtractor;
pub use noise::NoiseFilter;
pub use title::{extract_title, TitleSource};

use crate::layout::HeadingLevel;
use serde::{Deserialize, Serialize};

/// A detected heading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Heading {
    /// H1, H2 or H3
    pub level: HeadingLevel,
    /// Trimmed line text
    pub text: String,
    /// 1-based page number
    pub page: usize,
}

impl Heading {
    /// Create a heading.
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: usize) -> Self {
        Self {
            level,
            text: text.into(),
            page,
        }
    }
}

/// Title and headings of one document.
///
/// Serializes as `{"title": ..., "outline": [{"level", "text", "page"}, ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutlineResult {
    /// Document title
    pub title: String,
    /// Headings in document order
    pub outline: Vec<Heading>,
}
