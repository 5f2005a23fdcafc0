//! Geometric primitives for span layout.
//!
//! Coordinates follow the page-space convention of the layout source:
//! origin at the top-left, `y` growing downwards.

use serde::{Deserialize, Serialize};

/// A span bounding box as `(left, top, right, bottom)`.
///
/// Serialized as a four-element array, the shape layout dumps use.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Rect {
    /// Left edge
    pub x0: f32,
    /// Top edge
    pub y0: f32,
    /// Right edge
    pub x1: f32,
    /// Bottom edge
    pub y1: f32,
}

impl Rect {
    /// Create a rectangle from its four edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_outliner::geometry::Rect;
    ///
    /// let rect = Rect::new(10.0, 20.0, 110.0, 70.0);
    /// assert_eq!(rect.width(), 100.0);
    /// assert_eq!(rect.height(), 50.0);
    /// ```
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Create a rectangle from an origin and dimensions.
    pub fn from_origin(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Horizontal extent.
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Vertical extent.
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Vertical midpoint.
    pub fn center_y(&self) -> f32 {
        (self.y0 + self.y1) / 2.0
    }

    /// Check whether two boxes sit on the same visual line.
    ///
    /// True when either box's vertical midpoint falls inside the other's
    /// vertical extent. Degenerate (zero-height) boxes only match on an
    /// equal midpoint.
    pub fn shares_line_with(&self, other: &Rect) -> bool {
        let inside = |c: f32, r: &Rect| c >= r.y0.min(r.y1) && c <= r.y0.max(r.y1);
        inside(self.center_y(), other) || inside(other.center_y(), self)
    }
}

impl From<[f32; 4]> for Rect {
    fn from(b: [f32; 4]) -> Self {
        Self::new(b[0], b[1], b[2], b[3])
    }
}

impl From<Rect> for [f32; 4] {
    fn from(r: Rect) -> Self {
        [r.x0, r.y0, r.x1, r.y1]
    }
}
