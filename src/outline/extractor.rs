//! Whole-document outline extraction.

use super::dedup::dedup_headings;
use super::noise::NoiseFilter;
use super::title::extract_title;
use super::{Heading, OutlineResult};
use crate::config::OutlineConfig;
use crate::document::{LayoutSource, PageInfo};
use crate::error::Result;
use crate::layout::{FontSizeDistribution, HeadingClassifier, Line};

/// Extracts a title and heading outline from a layout source.
///
/// The extractor holds only configuration; every document gets its own
/// font-size sample and heading list, so one extractor can serve many
/// documents (including from several threads).
///
/// # Example
///
/// ```
/// use pdf_outliner::document::{LayoutDocument, LayoutPage};
/// use pdf_outliner::layout::{HeadingLevel, Span};
/// use pdf_outliner::outline::OutlineExtractor;
///
/// let mut doc = LayoutDocument::new()
///     .with_page(LayoutPage::new(612.0, 792.0).with_line(vec![Span::new("Chapter 1 Introduction", 12.0)]))
///     .with_page(LayoutPage::new(612.0, 792.0).with_line(vec![Span::new("1.1 Background", 12.0)]));
///
/// let result = OutlineExtractor::new().extract_outline(&mut doc)?;
/// assert_eq!(result.outline.len(), 2);
/// assert_eq!(result.outline[0].level, HeadingLevel::H1);
/// assert_eq!(result.outline[1].page, 2);
/// # Ok::<(), pdf_outliner::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct OutlineExtractor {
    config: OutlineConfig,
    classifier: HeadingClassifier,
    noise: NoiseFilter,
}

impl Default for OutlineExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineExtractor {
    /// Create an extractor with default configuration.
    pub fn new() -> Self {
        Self::with_config(OutlineConfig::default())
    }

    /// Create an extractor with custom configuration.
    pub fn with_config(config: OutlineConfig) -> Self {
        Self {
            noise: NoiseFilter::new(&config),
            classifier: HeadingClassifier::new(),
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &OutlineConfig {
        &self.config
    }

    /// Extract the outline of a document.
    ///
    /// Samples font sizes from the leading pages, walks up to
    /// `page_limit` pages collecting headings, picks a title and removes
    /// duplicate headings.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails to deliver page data.
    pub fn extract_outline<S: LayoutSource + ?Sized>(&self, source: &mut S) -> Result<OutlineResult> {
        let page_count = source.page_count()?;
        let font_sizes = self.sample_font_sizes(source)?;

        let pages = page_count.min(self.config.page_limit);
        let mut headings = Vec::new();
        for page_index in 0..pages {
            headings.extend(self.headings_on_page(source, page_index, &font_sizes)?);
        }

        let (title, title_source) = extract_title(source, &self.config)?;
        let raw = headings.len();
        let outline = dedup_headings(headings);

        log::info!(
            "Outline: {} pages walked, {} headings ({} duplicates dropped), title from {:?}",
            pages,
            outline.len(),
            raw - outline.len(),
            title_source
        );

        Ok(OutlineResult { title, outline })
    }

    /// Collect span font sizes from the first `sample_pages` pages.
    pub fn sample_font_sizes<S: LayoutSource + ?Sized>(&self, source: &mut S) -> Result<FontSizeDistribution> {
        let pages = source.page_count()?.min(self.config.sample_pages);
        let mut sizes = Vec::new();
        for page_index in 0..pages {
            sizes.extend(source.page_spans(page_index)?.iter().map(|s| s.size));
        }
        log::debug!("Sampled {} font sizes from {} pages", sizes.len(), pages);
        Ok(FontSizeDistribution::from_samples(sizes))
    }

    /// Detect headings on one page. `page_index` is 0-based; the returned
    /// headings carry 1-based page numbers.
    pub fn headings_on_page<S: LayoutSource + ?Sized>(
        &self,
        source: &mut S,
        page_index: usize,
        font_sizes: &FontSizeDistribution,
    ) -> Result<Vec<Heading>> {
        let page = source.page_info(page_index)?;
        Ok(source
            .page_lines(page_index)?
            .iter()
            .filter_map(|line| self.classify_line(line, &page, page_index + 1, font_sizes))
            .collect())
    }

    /// Classify a single line, returning a heading if it qualifies.
    pub fn classify_line(
        &self,
        line: &Line,
        page: &PageInfo,
        page_number: usize,
        font_sizes: &FontSizeDistribution,
    ) -> Option<Heading> {
        let span = line.representative_span()?;
        let joined = line.text();
        let text = joined.trim();

        if self.noise.is_noise(text) {
            log::trace!("Page {}: skipping noise line {:?}", page_number, text);
            return None;
        }

        let decision = self.classifier.classify(text, span, page, font_sizes);
        if !decision.level.is_heading() || decision.confidence <= self.config.min_confidence {
            return None;
        }

        log::debug!(
            "Page {}: {} ({:.2}, {}) {:?}",
            page_number,
            decision.level,
            decision.confidence,
            decision.rule.unwrap_or("-"),
            text
        );
        Some(Heading::new(decision.level, text, page_number))
    }
}
