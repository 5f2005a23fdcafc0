//! Lines that are never headings.

use crate::config::OutlineConfig;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    /// Leader dots, rules and bullet runs: "........", "----", "• • •"
    static ref RE_FILLER: Regex = Regex::new(r"^[.\-_•\s]+$").unwrap();
}

/// Rejects too-short lines, filler lines and known boilerplate.
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    min_chars: usize,
    boilerplate: HashSet<String>,
}

impl NoiseFilter {
    /// Build a filter from configuration.
    pub fn new(config: &OutlineConfig) -> Self {
        Self {
            min_chars: config.min_line_chars,
            boilerplate: config.boilerplate.iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    /// Check a trimmed line.
    pub fn is_noise(&self, text: &str) -> bool {
        text.chars().count() < self.min_chars
            || RE_FILLER.is_match(text)
            || self.boilerplate.contains(&text.to_lowercase())
    }
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::new(&OutlineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_lines() {
        let filter = NoiseFilter::default();
        assert!(filter.is_noise(""));
        assert!(filter.is_noise("ab"));
        assert!(!filter.is_noise("abc"));
    }

    #[test]
    fn test_filler_lines() {
        let filter = NoiseFilter::default();
        assert!(filter.is_noise("......"));
        assert!(filter.is_noise("- - - -"));
        assert!(filter.is_noise("___"));
        assert!(filter.is_noise("• • •"));
        assert!(!filter.is_noise("... and more"));
    }

    #[test]
    fn test_boilerplate_exact_match_only() {
        let filter = NoiseFilter::default();
        assert!(filter.is_noise("International"));
        assert!(filter.is_noise("BOARD"));
        assert!(filter.is_noise("May 31, 2014"));
        assert!(!filter.is_noise("International Standards"));
    }
}
