//! Layout sources: the narrow view of a document the outline extractor needs.
//!
//! [`LayoutSource`] exposes page count, page geometry, text blocks per page
//! and the metadata title. [`LayoutDocument`] is an in-memory implementation
//! that also reads and writes the JSON form of that data:
//!
//! ```json
//! { "metadata": { "title": "Annual Report" },
//!   "pages": [ { "width": 612, "height": 792,
//!                "blocks": [ { "lines": [ { "spans": [
//!                  { "text": "Overview", "size": 18, "flags": 16, "bbox": [72, 90, 180, 108] }
//!                ] } ] } ] } ] }
//! ```

use crate::error::{Error, Result};
use crate::layout::text_block::{Block, Line, Span};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Page dimensions in points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PageInfo {
    /// Page width
    pub width: f32,
    /// Page height
    pub height: f32,
}

impl PageInfo {
    /// Create page info from width and height.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Read access to the text layout of a document.
///
/// Implemented by PDF backends and by [`LayoutDocument`]. Page indices are
/// 0-based.
pub trait LayoutSource {
    /// Number of pages.
    fn page_count(&mut self) -> Result<usize>;

    /// Dimensions of a page.
    fn page_info(&mut self, page_index: usize) -> Result<PageInfo>;

    /// Text blocks of a page in reading order.
    fn page_blocks(&mut self, page_index: usize) -> Result<Vec<Block>>;

    /// Title from document metadata, if any.
    fn metadata_title(&mut self) -> Result<Option<String>>;

    /// All lines of a page, flattened across blocks.
    fn page_lines(&mut self, page_index: usize) -> Result<Vec<Line>> {
        Ok(self
            .page_blocks(page_index)?
            .into_iter()
            .flat_map(|block| block.lines)
            .collect())
    }

    /// All spans of a page in reading order.
    fn page_spans(&mut self, page_index: usize) -> Result<Vec<Span>> {
        Ok(self
            .page_lines(page_index)?
            .into_iter()
            .flat_map(|line| line.spans)
            .collect())
    }
}

/// Characters for PDFDocEncoding codes 128..=158; 159 is undefined.
const PDFDOC_HIGH: [char; 31] = [
    '\u{2022}', '\u{2020}', '\u{2021}', '\u{2026}', '\u{2014}', '\u{2013}', '\u{0192}', '\u{2044}',
    '\u{2039}', '\u{203A}', '\u{2212}', '\u{2030}', '\u{201E}', '\u{201C}', '\u{201D}', '\u{2018}',
    '\u{2019}', '\u{201A}', '\u{2122}', '\u{FB01}', '\u{FB02}', '\u{0141}', '\u{0152}', '\u{0160}',
    '\u{0178}', '\u{017D}', '\u{0131}', '\u{0142}', '\u{0153}', '\u{0161}', '\u{017E}',
];

fn pdfdoc_char(code: u8) -> char {
    match code {
        128..=158 => PDFDOC_HIGH[usize::from(code - 128)],
        159 => char::REPLACEMENT_CHARACTER,
        // ASCII below, Latin-1 above
        _ => char::from(code),
    }
}

/// Decode a PDF text string.
///
/// Strings starting with the UTF-16BE byte order mark are decoded as
/// UTF-16; anything else is PDFDocEncoding, which agrees with Latin-1 except
/// for a block of typographic characters at 128..=159.
pub fn decode_text_string(bytes: &[u8]) -> String {
    match bytes {
        [0xFE, 0xFF, rest @ ..] => {
            let units: Vec<u16> = rest
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16_lossy(&units)
        },
        _ => bytes.iter().map(|&b| pdfdoc_char(b)).collect(),
    }
}

/// Document-level metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Title from the document info dictionary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// One page of a [`LayoutDocument`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutPage {
    /// Page width in points
    #[serde(default)]
    pub width: f32,
    /// Page height in points
    #[serde(default)]
    pub height: f32,
    /// Text blocks in reading order
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl LayoutPage {
    /// Create an empty page of the given size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            blocks: Vec::new(),
        }
    }

    /// Append a block holding a single line.
    pub fn with_line(mut self, spans: Vec<Span>) -> Self {
        self.blocks.push(Block::new(vec![Line::new(spans)]));
        self
    }

    /// Append a block.
    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }
}

/// A fully materialized document layout.
///
/// # Example
///
/// ```
/// use pdf_outliner::document::{LayoutDocument, LayoutPage, LayoutSource};
/// use pdf_outliner::layout::Span;
///
/// let mut doc = LayoutDocument::new()
///     .with_title("Quarterly Review")
///     .with_page(LayoutPage::new(612.0, 792.0).with_line(vec![Span::new("Overview", 18.0)]));
///
/// assert_eq!(doc.page_count().unwrap(), 1);
/// assert_eq!(doc.metadata_title().unwrap().as_deref(), Some("Quarterly Review"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    /// Document metadata
    #[serde(default)]
    pub metadata: DocumentMetadata,
    /// Pages in order
    #[serde(default)]
    pub pages: Vec<LayoutPage>,
}

impl LayoutDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the metadata title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.metadata.title = Some(title.into());
        self
    }

    /// Append a page.
    pub fn with_page(mut self, page: LayoutPage) -> Self {
        self.pages.push(page);
        self
    }

    /// Parse a layout document from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a layout document from a JSON file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    fn page(&self, page_index: usize) -> Result<&LayoutPage> {
        self.pages.get(page_index).ok_or(Error::PageOutOfRange {
            index: page_index,
            count: self.pages.len(),
        })
    }
}

impl LayoutSource for LayoutDocument {
    fn page_count(&mut self) -> Result<usize> {
        Ok(self.pages.len())
    }

    fn page_info(&mut self, page_index: usize) -> Result<PageInfo> {
        let page = self.page(page_index)?;
        Ok(PageInfo::new(page.width, page.height))
    }

    fn page_blocks(&mut self, page_index: usize) -> Result<Vec<Block>> {
        Ok(self.page(page_index)?.blocks.clone())
    }

    fn metadata_title(&mut self) -> Result<Option<String>> {
        Ok(self.metadata.title.clone())
    }
}
