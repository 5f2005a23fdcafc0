//! Layout analysis for heading detection.
//!
//! This module provides the per-line building blocks of outline extraction:
//! - Span, line and block types delivered by a layout source
//! - Visual and textual feature extraction
//! - Document font-size distribution
//! - Rule-based heading classification

pub mod feature_extractor;
pub mod font_sizes;
pub mod heading_detector;
pub mod text_block;

// Re-export main types
pub use feature_extractor::{FeatureExtractor, TextFeatures, VisualFeatures};
pub use font_sizes::FontSizeDistribution;
pub use heading_detector::{Classification, HeadingClassifier, HeadingLevel, Rule, Signals, RULES};
pub use text_block::{group_spans_into_lines, Block, FontFlags, Line, Span};
