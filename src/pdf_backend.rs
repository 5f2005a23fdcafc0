//! PDF files as a layout source, via `pdf_oxide`.
//!
//! Spans come from `pdf_oxide`'s span extraction in reading order and are
//! grouped into lines by vertical overlap. Bold and italic are mapped onto
//! [`FontFlags`] so the classifier sees the same bits a structured-blocks
//! dump would carry.

use crate::document::{decode_text_string, LayoutSource, PageInfo};
use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::layout::text_block::{group_spans_into_lines, Block, FontFlags, Span};
use pdf_oxide::object::Object;
use pdf_oxide::PdfDocument;
use std::path::Path;

fn pdf_error(err: pdf_oxide::Error) -> Error {
    Error::Pdf(err.to_string())
}

/// A PDF document opened with `pdf_oxide`.
pub struct PdfOxideSource {
    doc: PdfDocument,
}

impl std::fmt::Debug for PdfOxideSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfOxideSource").finish_non_exhaustive()
    }
}

impl PdfOxideSource {
    /// Open a PDF file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pdf`] if the file is missing or not a readable PDF.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let doc = PdfDocument::open(path.as_ref()).map_err(pdf_error)?;
        Ok(Self { doc })
    }

    fn convert_span(span: pdf_oxide::layout::TextSpan) -> Span {
        let mut flags = FontFlags::empty();
        if span.font_weight.is_bold() {
            flags |= FontFlags::BOLD;
        }
        if span.is_italic {
            flags |= FontFlags::ITALIC;
        }
        let b = span.bbox;
        Span {
            text: span.text,
            size: span.font_size,
            flags,
            bbox: Rect::from_origin(b.x, b.y, b.width, b.height),
        }
    }
}

impl LayoutSource for PdfOxideSource {
    fn page_count(&mut self) -> Result<usize> {
        self.doc.page_count().map_err(pdf_error)
    }

    fn page_info(&mut self, page_index: usize) -> Result<PageInfo> {
        let info = self.doc.get_page_info(page_index).map_err(pdf_error)?;
        let visible = info.crop_box.unwrap_or(info.media_box);
        Ok(PageInfo::new(visible.width.abs(), visible.height.abs()))
    }

    fn page_blocks(&mut self, page_index: usize) -> Result<Vec<Block>> {
        let spans = self.doc.extract_spans(page_index).map_err(pdf_error)?;
        let lines = group_spans_into_lines(spans.into_iter().map(Self::convert_span));
        log::trace!("Page {}: {} lines", page_index + 1, lines.len());
        Ok(vec![Block::new(lines)])
    }

    fn metadata_title(&mut self) -> Result<Option<String>> {
        // /Info is usually indirect but may be inlined in the trailer
        let info = match self.doc.trailer().as_dict().and_then(|d| d.get("Info")).cloned() {
            Some(Object::Reference(r)) => self.doc.load_object(r).map_err(pdf_error)?,
            Some(direct) => direct,
            None => return Ok(None),
        };
        Ok(title_from_info(&info))
    }
}

/// The `/Title` entry of a document info dictionary.
fn title_from_info(info: &Object) -> Option<String> {
    match info.as_dict()?.get("Title")? {
        Object::String(bytes) => Some(decode_text_string(bytes)),
        _ => None,
    }
}
