//! Configuration for outline extraction.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Outline extraction configuration.
///
/// Every field has a default, so a JSON config file only needs the values
/// it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    /// Maximum number of pages walked for headings.
    pub page_limit: usize,

    /// Number of leading pages sampled for the font-size distribution.
    pub sample_pages: usize,

    /// Headings must score strictly above this.
    pub min_confidence: f32,

    /// Lines with fewer trimmed characters are skipped.
    pub min_line_chars: usize,

    /// Title candidates need strictly more trimmed characters than this.
    pub min_title_chars: usize,

    /// Lower-cased lines that are never headings.
    pub boilerplate: Vec<String>,

    /// Title used when neither metadata nor the first page provide one.
    pub fallback_title: String,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            page_limit: 50,
            sample_pages: 5,
            min_confidence: 0.6,
            min_line_chars: 3,
            min_title_chars: 3,
            boilerplate: ["version 2014", "may 31, 2014", "international", "board"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            fallback_title: "Untitled Document".to_string(),
        }
    }

    /// Load configuration overrides from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that values are in range.
    pub fn validate(&self) -> Result<()> {
        if self.page_limit == 0 {
            return Err(Error::InvalidConfig("page_limit must be at least 1".to_string()));
        }
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(Error::InvalidConfig(format!(
                "min_confidence must be within [0, 1], got {}",
                self.min_confidence
            )));
        }
        Ok(())
    }

    /// Set the page limit.
    pub fn with_page_limit(mut self, page_limit: usize) -> Self {
        self.page_limit = page_limit;
        self
    }

    /// Set the number of sampled pages.
    pub fn with_sample_pages(mut self, sample_pages: usize) -> Self {
        self.sample_pages = sample_pages;
        self
    }

    /// Set the confidence threshold.
    pub fn with_min_confidence(mut self, min_confidence: f32) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    /// Replace the boilerplate list. Entries are lower-cased.
    pub fn with_boilerplate<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.boilerplate = entries
            .into_iter()
            .map(|s| s.as_ref().to_lowercase())
            .collect();
        self
    }
}
