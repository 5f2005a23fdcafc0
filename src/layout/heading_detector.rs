//! Heading detection with an ordered rule cascade.
//!
//! Each line is reduced to [`Signals`] (visual features of its largest span,
//! text features of the line, and the span's font-size percentile within the
//! document). The signals are then checked against [`RULES`] top-down; the
//! first rule that matches decides the level and confidence.
//!
//! Explicit numbering and chapter keywords are trusted outright. Font size is
//! only trusted when a second cue agrees with it (bold, casing, brevity),
//! because size alone varies too much between documents.

use crate::document::PageInfo;
use crate::layout::feature_extractor::{FeatureExtractor, TextFeatures, VisualFeatures};
use crate::layout::font_sizes::FontSizeDistribution;
use crate::layout::text_block::Span;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// CJK chapter marker "第3章"
    static ref RE_CJK_CHAPTER: Regex = Regex::new(r"^第\d+章").unwrap();
}

/// Confidence reported when no rule matches.
pub const BODY_CONFIDENCE: f32 = 0.10;

/// Classification of a line in the document hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Top-level heading
    H1,
    /// Section heading
    H2,
    /// Subsection heading
    H3,
    /// Not a heading
    Body,
}

impl HeadingLevel {
    /// Get the hierarchy level as a number (0 = H1, ..., 3 = Body).
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_outliner::layout::HeadingLevel;
    ///
    /// assert_eq!(HeadingLevel::H1.hierarchy_level(), 0);
    /// assert_eq!(HeadingLevel::Body.hierarchy_level(), 3);
    /// ```
    pub fn hierarchy_level(&self) -> u8 {
        match self {
            HeadingLevel::H1 => 0,
            HeadingLevel::H2 => 1,
            HeadingLevel::H3 => 2,
            HeadingLevel::Body => 3,
        }
    }

    /// Check if this is a heading (H1, H2, or H3).
    pub fn is_heading(&self) -> bool {
        matches!(self, HeadingLevel::H1 | HeadingLevel::H2 | HeadingLevel::H3)
    }

    /// Outline label ("H1", "H2", "H3", "Body").
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "H1",
            HeadingLevel::H2 => "H2",
            HeadingLevel::H3 => "H3",
            HeadingLevel::Body => "Body",
        }
    }
}

impl std::fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the cascade looks at for one line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signals {
    /// Features of the line's representative span
    pub visual: VisualFeatures,
    /// Features of the line text
    pub text: TextFeatures,
    /// Share of sampled font sizes at or below this span's size
    pub percentile: f32,
    /// Line starts with a CJK chapter marker
    pub cjk_chapter: bool,
}

impl Signals {
    /// Compute signals for a line.
    pub fn compute(text: &str, span: &Span, page: &PageInfo, font_sizes: &FontSizeDistribution) -> Self {
        let visual = FeatureExtractor::for_page(page).extract_visual(span);
        Self {
            visual,
            text: FeatureExtractor::extract_text(text),
            percentile: font_sizes.percentile(visual.font_size),
            cjk_chapter: RE_CJK_CHAPTER.is_match(text.trim()),
        }
    }
}

/// How a matching rule scores its decision.
#[derive(Debug, Clone, Copy)]
pub enum Confidence {
    /// Always the same score
    Fixed(f32),
    /// `boosted` when the extra cue holds, `base` otherwise
    Boosted {
        /// Score without the cue
        base: f32,
        /// Score with the cue
        boosted: f32,
        /// The extra cue
        when: fn(&Signals) -> bool,
    },
}

impl Confidence {
    fn score(&self, signals: &Signals) -> f32 {
        match *self {
            Confidence::Fixed(c) => c,
            Confidence::Boosted {
                base,
                boosted,
                when,
            } => {
                if when(signals) {
                    boosted
                } else {
                    base
                }
            },
        }
    }
}

/// One step of the cascade.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Short identifier used in logs
    pub name: &'static str,
    /// Level assigned on match
    pub level: HeadingLevel,
    /// Score assigned on match
    pub confidence: Confidence,
    matches: fn(&Signals) -> bool,
}

impl Rule {
    /// Evaluate this rule alone.
    pub fn evaluate(&self, signals: &Signals) -> Option<Classification> {
        (self.matches)(signals).then(|| Classification {
            level: self.level,
            confidence: self.confidence.score(signals),
            rule: Some(self.name),
        })
    }
}

fn three_level_numbering(s: &Signals) -> bool {
    s.text.h3_pattern
}

fn two_level_numbering(s: &Signals) -> bool {
    s.text.h2_pattern
}

fn chapter_keyword(s: &Signals) -> bool {
    s.text.h1_pattern
}

fn cjk_chapter(s: &Signals) -> bool {
    s.cjk_chapter
}

fn largest_styled_short(s: &Signals) -> bool {
    s.percentile > 0.95 && (s.visual.bold || s.visual.is_upper) && s.text.is_short
}

fn large_uppercase_short(s: &Signals) -> bool {
    s.percentile > 0.90 && s.visual.is_upper && s.text.is_short
}

fn upper_band_bold_or_title(s: &Signals) -> bool {
    s.percentile > 0.75 && s.percentile <= 0.95 && (s.visual.bold || s.text.is_title)
}

// h2_pattern is always false here since two_level_numbering already matched
// those lines; only the vocabulary hit can boost.
fn heading_vocabulary(s: &Signals) -> bool {
    s.text.has_heading_word || s.text.h2_pattern
}

fn middle_band_emphasis(s: &Signals) -> bool {
    s.percentile > 0.50
        && s.percentile <= 0.80
        && (s.visual.bold || s.text.is_short || s.text.bullet_list)
}

/// The cascade, highest precedence first.
pub static RULES: [Rule; 8] = [
    Rule {
        name: "three-level-numbering",
        level: HeadingLevel::H3,
        confidence: Confidence::Fixed(0.90),
        matches: three_level_numbering,
    },
    Rule {
        name: "two-level-numbering",
        level: HeadingLevel::H2,
        confidence: Confidence::Fixed(0.85),
        matches: two_level_numbering,
    },
    Rule {
        name: "chapter-keyword",
        level: HeadingLevel::H1,
        confidence: Confidence::Fixed(0.95),
        matches: chapter_keyword,
    },
    Rule {
        name: "cjk-chapter",
        level: HeadingLevel::H1,
        confidence: Confidence::Fixed(0.92),
        matches: cjk_chapter,
    },
    Rule {
        name: "largest-styled-short",
        level: HeadingLevel::H1,
        confidence: Confidence::Fixed(0.85),
        matches: largest_styled_short,
    },
    Rule {
        name: "large-uppercase-short",
        level: HeadingLevel::H1,
        confidence: Confidence::Fixed(0.80),
        matches: large_uppercase_short,
    },
    Rule {
        name: "upper-band-bold-or-title",
        level: HeadingLevel::H2,
        confidence: Confidence::Boosted {
            base: 0.70,
            boosted: 0.78,
            when: heading_vocabulary,
        },
        matches: upper_band_bold_or_title,
    },
    Rule {
        name: "middle-band-emphasis",
        level: HeadingLevel::H3,
        confidence: Confidence::Fixed(0.65),
        matches: middle_band_emphasis,
    },
];

/// Result of classifying one line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Assigned level
    pub level: HeadingLevel,
    /// Heuristic score in 0..=1
    pub confidence: f32,
    /// Name of the rule that fired, `None` for the body fallback
    pub rule: Option<&'static str>,
}

impl Classification {
    /// The fallback when no rule matches.
    pub fn body() -> Self {
        Self {
            level: HeadingLevel::Body,
            confidence: BODY_CONFIDENCE,
            rule: None,
        }
    }
}

/// Rule-based heading classifier.
///
/// Stateless: the same inputs always produce the same classification.
///
/// # Example
///
/// ```
/// use pdf_outliner::document::PageInfo;
/// use pdf_outliner::layout::{FontSizeDistribution, HeadingClassifier, HeadingLevel, Span};
///
/// let classifier = HeadingClassifier::new();
/// let sizes = FontSizeDistribution::from_samples(vec![10.0, 10.0, 12.0, 24.0]);
/// let span = Span::new("1.2.3 Overview", 24.0);
/// let page = PageInfo::new(612.0, 792.0);
///
/// let result = classifier.classify("1.2.3 Overview", &span, &page, &sizes);
/// assert_eq!(result.level, HeadingLevel::H3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HeadingClassifier {
    rules: &'static [Rule],
}

impl Default for HeadingClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadingClassifier {
    /// Create a classifier using [`RULES`].
    pub fn new() -> Self {
        Self { rules: &RULES }
    }

    /// The cascade in evaluation order.
    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// Classify a line given its text and representative span.
    pub fn classify(
        &self,
        text: &str,
        span: &Span,
        page: &PageInfo,
        font_sizes: &FontSizeDistribution,
    ) -> Classification {
        self.classify_signals(&Signals::compute(text, span, page, font_sizes))
    }

    /// Run the cascade over precomputed signals.
    pub fn classify_signals(&self, signals: &Signals) -> Classification {
        self.rules
            .iter()
            .find_map(|rule| rule.evaluate(signals))
            .unwrap_or_else(Classification::body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::text_block::FontFlags;

    fn page() -> PageInfo {
        PageInfo::new(612.0, 792.0)
    }

    /// 20 samples: 16 at 10pt, 2 at 14pt, 1 at 18pt, 1 at 24pt.
    fn sizes() -> FontSizeDistribution {
        let mut v = vec![10.0; 16];
        v.extend([14.0, 14.0, 18.0, 24.0]);
        FontSizeDistribution::from_samples(v)
    }

    fn classify(text: &str, span: Span) -> Classification {
        HeadingClassifier::new().classify(text, &span, &page(), &sizes())
    }

    fn bold(text: &str, size: f32) -> Span {
        Span::new(text, size).with_flags(FontFlags::BOLD)
    }

    #[test]
    fn test_three_level_numbering_wins() {
        let result = classify("1.2.3 Overview", bold("1.2.3 Overview", 24.0));
        assert_eq!(result.level, HeadingLevel::H3);
        assert_eq!(result.confidence, 0.90);
        assert_eq!(result.rule, Some("three-level-numbering"));
    }

    #[test]
    fn test_two_level_numbering() {
        let result = classify("2.1 Scope", Span::new("2.1 Scope", 10.0));
        assert_eq!(result.level, HeadingLevel::H2);
        assert_eq!(result.confidence, 0.85);
    }

    #[test]
    fn test_chapter_keyword() {
        let result = classify("Chapter 4 Results", Span::new("Chapter 4 Results", 10.0));
        assert_eq!(result.level, HeadingLevel::H1);
        assert_eq!(result.confidence, 0.95);
    }

    #[test]
    fn test_cjk_chapter() {
        let result = classify("第3章 概要", Span::new("第3章 概要", 10.0));
        assert_eq!(result.level, HeadingLevel::H1);
        assert_eq!(result.confidence, 0.92);
    }

    #[test]
    fn test_largest_bold_short_is_h1() {
        // 24pt is the top of the sample: percentile 1.0
        let result = classify("Project Plan", bold("Project Plan", 24.0));
        assert_eq!(result.level, HeadingLevel::H1);
        assert_eq!(result.confidence, 0.85);
    }

    #[test]
    fn test_large_uppercase_is_h1() {
        // 18pt: 19 of 20 samples at or below, percentile 0.95
        let result = classify("BACKGROUND", Span::new("BACKGROUND", 18.0));
        assert_eq!(result.level, HeadingLevel::H1);
        assert_eq!(result.confidence, 0.80);
        assert_eq!(result.rule, Some("large-uppercase-short"));
    }

    #[test]
    fn test_upper_band_title_case() {
        let result = classify("Project Timeline", Span::new("Project Timeline", 18.0));
        assert_eq!(result.level, HeadingLevel::H2);
        assert_eq!(result.confidence, 0.70);
    }

    #[test]
    fn test_upper_band_heading_word_boost() {
        let result = classify("Mission Statement", Span::new("Mission Statement", 18.0));
        assert_eq!(result.level, HeadingLevel::H2);
        assert_eq!(result.confidence, 0.78);
    }

    #[test]
    fn test_middle_band_short_is_h3() {
        // 12pt: 3 of 5 samples at or below, percentile 0.6
        let dist = FontSizeDistribution::from_samples(vec![10.0, 10.0, 12.0, 14.0, 18.0]);
        let span = Span::new("plain words", 12.0);
        let result = HeadingClassifier::new().classify("plain words", &span, &page(), &dist);
        assert_eq!(result.level, HeadingLevel::H3);
        assert_eq!(result.confidence, 0.65);
    }

    #[test]
    fn test_body_text() {
        // Percentile 0.8 sits in the H3 band, so the line must be long
        let text = "body text ".repeat(9);
        let result = classify(text.trim(), Span::new(text.trim(), 10.0));
        assert_eq!(result, Classification::body());
    }

    #[test]
    fn test_empty_distribution_is_neutral() {
        let signals = Signals {
            percentile: crate::layout::font_sizes::percentile_of(&[], 30.0),
            ..Signals::compute("lower words", &Span::new("lower words", 30.0), &page(), &sizes())
        };
        // 0.5 is outside every size band
        assert_eq!(HeadingClassifier::new().classify_signals(&signals).level, HeadingLevel::Body);
    }

    #[test]
    fn test_rules_evaluate_in_isolation() {
        let signals = Signals::compute("2.1 Summary", &Span::new("2.1 Summary", 18.0), &page(), &sizes());
        assert!(RULES[0].evaluate(&signals).is_none());
        assert_eq!(RULES[1].evaluate(&signals).map(|c| c.level), Some(HeadingLevel::H2));
        // Lower-precedence rule would also fire, with the boosted score
        let upper_band = RULES[6].evaluate(&Signals {
            visual: VisualFeatures {
                bold: true,
                ..signals.visual
            },
            ..signals
        });
        assert_eq!(upper_band.map(|c| c.confidence), Some(0.78));
    }

    #[test]
    fn test_hierarchy_level() {
        assert_eq!(HeadingLevel::H1.hierarchy_level(), 0);
        assert_eq!(HeadingLevel::H2.hierarchy_level(), 1);
        assert_eq!(HeadingLevel::H3.hierarchy_level(), 2);
        assert_eq!(HeadingLevel::Body.hierarchy_level(), 3);
    }

    #[test]
    fn test_is_heading() {
        assert!(HeadingLevel::H1.is_heading());
        assert!(HeadingLevel::H3.is_heading());
        assert!(!HeadingLevel::Body.is_heading());
    }

    #[test]
    fn test_level_serializes_as_label() {
        assert_eq!(serde_json::to_string(&HeadingLevel::H2).unwrap(), "\"H2\"");
    }
}
