//! Document title selection.

use crate::config::OutlineConfig;
use crate::document::LayoutSource;
use crate::error::Result;

/// Where a title came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleSource {
    /// Document info dictionary
    Metadata,
    /// Largest span on the first page
    FirstPage,
    /// Configured fallback
    Fallback,
}

/// Pick the document title.
///
/// Prefers the metadata title when it is long enough. Otherwise takes the
/// first-page span with strictly the largest font size among spans with
/// enough text; earlier spans win ties. Falls back to
/// [`OutlineConfig::fallback_title`].
pub fn extract_title<S: LayoutSource + ?Sized>(
    source: &mut S,
    config: &OutlineConfig,
) -> Result<(String, TitleSource)> {
    if let Some(title) = source.metadata_title()? {
        let title = title.trim();
        if title.chars().count() > config.min_title_chars {
            return Ok((title.to_string(), TitleSource::Metadata));
        }
    }

    if source.page_count()? > 0 {
        let mut best: Option<(f32, String)> = None;
        for span in source.page_spans(0)? {
            let text = span.text.trim();
            if text.chars().count() <= config.min_title_chars {
                continue;
            }
            let largest = best.as_ref().map_or(0.0, |(size, _)| *size);
            if span.size > largest {
                best = Some((span.size, text.to_string()));
            }
        }
        if let Some((_, text)) = best {
            return Ok((text, TitleSource::FirstPage));
        }
    }

    Ok((config.fallback_title.clone(), TitleSource::Fallback))
}
