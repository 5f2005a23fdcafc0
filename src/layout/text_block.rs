//! Text spans, lines and blocks as delivered by a layout source.
//!
//! A [`Span`] is a run of text sharing one font. Spans are grouped into
//! visual [`Line`]s, and lines into [`Block`]s. Blocks without lines (images,
//! drawings) are kept so the shape matches the structured-blocks output of
//! common PDF text layers.

use crate::geometry::Rect;
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Font size assumed when a span does not report one.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

bitflags! {
    /// Font style flags attached to a span.
    ///
    /// Bit positions follow the common PDF text-layer convention, so raw
    /// integers from an external extractor can be used unchanged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FontFlags: u32 {
        /// Bit 0: superscripted text
        const SUPERSCRIPT = 1 << 0;
        /// Bit 1: italic
        const ITALIC = 1 << 1;
        /// Bit 2: serifed font
        const SERIFED = 1 << 2;
        /// Bit 3: monospaced font
        const MONOSPACED = 1 << 3;
        /// Bit 4: bold
        const BOLD = 1 << 4;
    }
}

impl Default for FontFlags {
    fn default() -> Self {
        FontFlags::empty()
    }
}

impl Serialize for FontFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for FontFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        // Unknown bits are kept; only BOLD and ITALIC are ever inspected.
        u32::deserialize(deserializer).map(FontFlags::from_bits_retain)
    }
}

fn default_font_size() -> f32 {
    DEFAULT_FONT_SIZE
}

/// A run of text rendered with a single font.
///
/// Every field is optional on the wire: a missing `size` becomes
/// [`DEFAULT_FONT_SIZE`], missing `flags` become empty and a missing `bbox`
/// is all zeros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// The text content
    #[serde(default)]
    pub text: String,
    /// Font size in points
    #[serde(default = "default_font_size")]
    pub size: f32,
    /// Font style flags
    #[serde(default)]
    pub flags: FontFlags,
    /// Bounding box in page coordinates
    #[serde(default)]
    pub bbox: Rect,
}

impl Span {
    /// Create a plain span with the given text and font size.
    pub fn new(text: impl Into<String>, size: f32) -> Self {
        Self {
            text: text.into(),
            size,
            flags: FontFlags::empty(),
            bbox: Rect::default(),
        }
    }

    /// Set the style flags.
    pub fn with_flags(mut self, flags: FontFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Set the bounding box.
    pub fn with_bbox(mut self, bbox: Rect) -> Self {
        self.bbox = bbox;
        self
    }

    /// Bold flag (bit 4).
    pub fn is_bold(&self) -> bool {
        self.flags.contains(FontFlags::BOLD)
    }

    /// Italic flag (bit 1).
    pub fn is_italic(&self) -> bool {
        self.flags.contains(FontFlags::ITALIC)
    }
}

/// One visual line of text made of one or more spans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Spans in reading order
    #[serde(default)]
    pub spans: Vec<Span>,
}

impl Line {
    /// Create a line from its spans.
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Concatenated text of all spans, untrimmed.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// The span with the largest font size.
    ///
    /// Ties go to the earliest span. Returns `None` for an empty line.
    pub fn representative_span(&self) -> Option<&Span> {
        self.spans
            .iter()
            .reduce(|best, span| if span.size > best.size { span } else { best })
    }
}

/// Group spans into lines, keeping extraction order.
///
/// A span joins the current line when its box shares a line with the
/// previous span's box; otherwise it starts a new line.
pub fn group_spans_into_lines(spans: impl IntoIterator<Item = Span>) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();
    for span in spans {
        let joins = lines
            .last()
            .and_then(|line| line.spans.last())
            .is_some_and(|prev| prev.bbox.shares_line_with(&span.bbox));
        match lines.last_mut() {
            Some(line) if joins => line.spans.push(span),
            _ => lines.push(Line::new(vec![span])),
        }
    }
    lines
}

/// A group of lines; image blocks carry none.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Lines in reading order
    #[serde(default)]
    pub lines: Vec<Line>,
}

impl Block {
    /// Create a block from its lines.
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_defaults_on_missing_fields() {
        let span: Span = serde_json::from_str(r#"{"text": "Hello"}"#).unwrap();
        assert_eq!(span.size, DEFAULT_FONT_SIZE);
        assert_eq!(span.flags, FontFlags::empty());
        assert_eq!(span.bbox, Rect::default());
    }

    #[test]
    fn test_flags_from_raw_bits() {
        let span: Span = serde_json::from_str(r#"{"text": "x", "flags": 20}"#).unwrap();
        assert!(span.is_bold());
        assert!(!span.is_italic());
        assert!(span.flags.contains(FontFlags::SERIFED));

        let span: Span = serde_json::from_str(r#"{"text": "x", "flags": 2}"#).unwrap();
        assert!(span.is_italic());
        assert!(!span.is_bold());
    }

    #[test]
    fn test_flags_keep_unknown_bits() {
        let flags: FontFlags = serde_json::from_str("96").unwrap();
        assert_eq!(flags.bits(), 96);
        assert_eq!(serde_json::to_string(&flags).unwrap(), "96");
    }

    #[test]
    fn test_line_text_concatenates_spans() {
        let line = Line::new(vec![Span::new("1.1 ", 12.0), Span::new("Background", 14.0)]);
        assert_eq!(line.text(), "1.1 Background");
    }

    #[test]
    fn test_representative_span_is_largest() {
        let line = Line::new(vec![
            Span::new("small", 10.0),
            Span::new("big", 18.0),
            Span::new("mid", 14.0),
        ]);
        assert_eq!(line.representative_span().unwrap().text, "big");
    }

    #[test]
    fn test_representative_span_tie_prefers_first() {
        let line = Line::new(vec![Span::new("first", 14.0), Span::new("second", 14.0)]);
        assert_eq!(line.representative_span().unwrap().text, "first");
    }

    #[test]
    fn test_representative_span_empty_line() {
        assert!(Line::default().representative_span().is_none());
    }

    #[test]
    fn test_group_spans_into_lines() {
        let spans = vec![
            Span::new("1.2 ", 12.0).with_bbox(Rect::new(72.0, 100.0, 90.0, 112.0)),
            Span::new("Scope", 14.0).with_bbox(Rect::new(92.0, 99.0, 140.0, 113.0)),
            Span::new("Body text", 10.0).with_bbox(Rect::new(72.0, 130.0, 200.0, 140.0)),
        ];
        let lines = group_spans_into_lines(spans);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "1.2 Scope");
        assert_eq!(lines[1].text(), "Body text");
        assert!(group_spans_into_lines(Vec::new()).is_empty());
    }

    #[test]
    fn test_block_without_lines() {
        let block: Block = serde_json::from_str(r#"{"type": 1}"#).unwrap();
        assert!(block.lines.is_empty());
    }
}
