//! Error types for outline extraction.
//!
//! Classification itself never fails; errors come from reading layout
//! sources, loading configuration and writing results.

/// Result type alias for outline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting an outline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Layout or result JSON could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The PDF backend failed to open or decode a document
    #[error("PDF error: {0}")]
    Pdf(String),

    /// A page index past the end of the document was requested
    #[error("Page {index} out of range (document has {count} pages)")]
    PageOutOfRange {
        /// Requested 0-based page index
        index: usize,
        /// Number of pages in the document
        count: usize,
    },

    /// Input file type is not supported by this build
    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),

    /// Configuration value outside its valid range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
