#![warn(missing_docs)]

//! # PDF Outliner
//!
//! Infers a document title and a three-level heading outline (H1/H2/H3 with
//! page numbers) from the text layout of a PDF.
//!
//! ## How it works
//!
//! - **Font sizes**: span sizes from the first pages form the document's
//!   size distribution; each line's size is ranked against it.
//! - **Features**: per line, visual features (size, bold, italic, case,
//!   position) and textual features (numbering patterns, heading words,
//!   length) are computed from its largest span.
//! - **Classification**: an ordered rule cascade assigns H1/H2/H3/Body with
//!   a confidence; the first matching rule wins.
//! - **Outline**: confident headings are collected page by page, noise and
//!   boilerplate are dropped and repeats on the same page removed.
//!
//! ## Inputs
//!
//! Anything implementing [`LayoutSource`] works. [`LayoutDocument`] reads
//! structured-blocks JSON dumps; with the `pdf` feature, `PdfOxideSource`
//! reads PDF files directly.
//!
//! ## Quick Start
//!
//! ```
//! use pdf_outliner::{LayoutDocument, OutlineExtractor};
//!
//! # fn main() -> pdf_outliner::Result<()> {
//! let mut doc = LayoutDocument::from_json_str(r#"{
//!     "metadata": {"title": "Field Guide"},
//!     "pages": [{"width": 612, "height": 792, "blocks": [
//!         {"lines": [{"spans": [{"text": "Chapter 1 Birds", "size": 12}]}]}
//!     ]}]
//! }"#)?;
//!
//! let result = OutlineExtractor::new().extract_outline(&mut doc)?;
//! assert_eq!(result.title, "Field Guide");
//! assert_eq!(result.outline[0].text, "Chapter 1 Birds");
//! # Ok(())
//! # }
//! ```

// Error handling
pub mod error;

// Core types
pub mod geometry;

// Per-line analysis
pub mod layout;

// Document access
pub mod document;

/// PDF backend built on `pdf_oxide`
#[cfg(feature = "pdf")]
pub mod pdf_backend;

// Outline assembly
pub mod config;
pub mod outline;

// File and directory processing
pub mod batch;

// Re-exports
pub use config::OutlineConfig;
pub use document::{LayoutDocument, LayoutSource, PageInfo};
pub use error::{Error, Result};
pub use layout::HeadingLevel;
pub use outline::{Heading, OutlineExtractor, OutlineResult};

#[cfg(feature = "pdf")]
pub use pdf_backend::PdfOxideSource;

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
