//! Pixel geometry shared by the layout engine and the drawing surfaces.
//!
//! Coordinates are signed: projected client rectangles can start left of
//! or above their cell before clipping.

use serde::{Deserialize, Serialize};

/// A pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in pixels.
///
/// `width` and `height` are signed so that clipping arithmetic can go
/// negative; a rectangle with a non-positive side is [empty](Rect::is_empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Move the rectangle by `(dx, dy)`.
    pub fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// The rectangle shrunk by one pixel on the top/left edge, which is the
    /// area a fill leaves inside an outline drawn with the same origin.
    pub fn interior(self) -> Self {
        Self::new(self.x + 1, self.y + 1, self.width - 1, self.height - 1)
    }
}
