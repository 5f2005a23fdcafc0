//! Feature extraction for heading classification.
//!
//! Visual features describe the representative span of a line (size, style,
//! casing, position on the page). Text features describe the line's trimmed
//! text (length, casing, numbering, bullets, heading vocabulary).

use crate::document::PageInfo;
use crate::layout::text_block::Span;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Three-level numbering such as "2.1.4"
    static ref RE_H3_NUMBERING: Regex = Regex::new(r"^\d+\.\d+\.\d+").unwrap();

    /// Two-level numbering such as "2.1"; also matches three-level numbering
    static ref RE_H2_NUMBERING: Regex = Regex::new(r"^\d+\.\d+").unwrap();

    /// "Chapter 3", "SECTION 12"
    static ref RE_H1_KEYWORD: Regex = Regex::new(r"(?i)^(chapter|section)\s+\d+").unwrap();

    /// "- item", "• item", "3) item", "b) item"
    static ref RE_BULLET: Regex = Regex::new(r"(?i)^(-|•|\d+\)|[a-z]\))\s+").unwrap();
}

/// Words that commonly appear in section headings.
pub const HEADING_WORDS: [&str; 10] = [
    "introduction",
    "summary",
    "conclusion",
    "contents",
    "overview",
    "abstract",
    "challenge",
    "mission",
    "objective",
    "result",
];

/// Lines shorter than this many characters count as short.
pub const SHORT_LINE_CHARS: usize = 80;

/// Visual features of a single span, normalized against its page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualFeatures {
    /// Font size in points
    pub font_size: f32,
    /// Bold flag set
    pub bold: bool,
    /// Italic flag set
    pub italic: bool,
    /// Text is entirely uppercase letters
    pub is_upper: bool,
    /// Share of uppercase characters, 0..=1
    pub caps_ratio: f32,
    /// Left edge as a fraction of page width
    pub left: f32,
    /// Span width as a fraction of page width
    pub width: f32,
    /// Top edge as a fraction of page height
    pub top: f32,
}

/// Textual features of a trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFeatures {
    /// Trimmed length in characters
    pub length: usize,
    /// Title-cased ("Project Overview")
    pub is_title: bool,
    /// Shorter than [`SHORT_LINE_CHARS`]
    pub is_short: bool,
    /// Ends with a colon
    pub ends_colon: bool,
    /// Starts with "chapter N" / "section N"
    pub h1_pattern: bool,
    /// Starts with two-level numbering
    pub h2_pattern: bool,
    /// Starts with three-level numbering
    pub h3_pattern: bool,
    /// Starts with a bullet or list marker
    pub bullet_list: bool,
    /// Contains one of [`HEADING_WORDS`]
    pub has_heading_word: bool,
}

/// Extracts classification features for spans on one page.
///
/// # Example
///
/// ```
/// use pdf_outliner::layout::{FeatureExtractor, Span};
///
/// let extractor = FeatureExtractor::new(612.0, 792.0);
/// let visual = extractor.extract_visual(&Span::new("OVERVIEW", 16.0));
/// assert!(visual.is_upper);
///
/// let text = FeatureExtractor::extract_text("2.1 Scope");
/// assert!(text.h2_pattern);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FeatureExtractor {
    page_width: f32,
    page_height: f32,
}

impl FeatureExtractor {
    /// Create a feature extractor for a page of the given size in points.
    pub fn new(page_width: f32, page_height: f32) -> Self {
        Self {
            page_width,
            page_height,
        }
    }

    /// Create a feature extractor for a page.
    pub fn for_page(page: &PageInfo) -> Self {
        Self::new(page.width, page.height)
    }

    /// Extract visual features of a span.
    ///
    /// Position ratios are 0 when the corresponding page dimension is 0.
    pub fn extract_visual(&self, span: &Span) -> VisualFeatures {
        let text = span.text.as_str();
        let total = text.chars().count();
        let upper = text.chars().filter(|c| c.is_uppercase()).count();
        let bbox = span.bbox;

        VisualFeatures {
            font_size: span.size,
            bold: span.is_bold(),
            italic: span.is_italic(),
            is_upper: is_all_upper_alpha(text),
            caps_ratio: upper as f32 / total.max(1) as f32,
            left: ratio(bbox.x0, self.page_width),
            width: ratio(bbox.width(), self.page_width),
            top: ratio(bbox.y0, self.page_height),
        }
    }

    /// Extract text features of a line.
    ///
    /// The text is trimmed first, so callers may pass raw line text.
    pub fn extract_text(text: &str) -> TextFeatures {
        let text = text.trim();
        let length = text.chars().count();
        let lower = text.to_lowercase();

        TextFeatures {
            length,
            is_title: is_title_case(text),
            is_short: length < SHORT_LINE_CHARS,
            ends_colon: text.ends_with(':'),
            h1_pattern: RE_H1_KEYWORD.is_match(text),
            h2_pattern: RE_H2_NUMBERING.is_match(text),
            h3_pattern: RE_H3_NUMBERING.is_match(text),
            bullet_list: RE_BULLET.is_match(text),
            has_heading_word: HEADING_WORDS.iter().any(|w| lower.contains(w)),
        }
    }
}

fn ratio(value: f32, extent: f32) -> f32 {
    if extent == 0.0 {
        0.0
    } else {
        value / extent
    }
}

/// Non-empty, alphabetic only, and no lowercase letters.
fn is_all_upper_alpha(text: &str) -> bool {
    !text.is_empty()
        && text.chars().all(char::is_alphabetic)
        && text.chars().any(char::is_uppercase)
        && !text.chars().any(char::is_lowercase)
}

/// Title case: every cased run starts with an uppercase letter followed by
/// lowercase letters, and at least one cased letter exists.
fn is_title_case(text: &str) -> bool {
    let mut cased = false;
    let mut previous_cased = false;

    for c in text.chars() {
        if c.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            cased = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            cased = true;
        } else {
            previous_cased = false;
        }
    }

    cased
}
