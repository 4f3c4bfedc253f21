//! Geometric primitives for region handling.
//!
//! Card detections are axis-aligned pixel rectangles, so unlike general OCR
//! geometry no polygon support is needed here.

use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in pixel space.
///
/// Coordinates follow the detector convention: `(x1, y1)` top-left,
/// `(x2, y2)` bottom-right, both in source-image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BBox {
    /// X-coordinate of the top-left corner.
    pub x1: i32,
    /// Y-coordinate of the top-left corner.
    pub y1: i32,
    /// X-coordinate of the bottom-right corner.
    pub x2: i32,
    /// Y-coordinate of the bottom-right corner.
    pub y2: i32,
}

impl BBox {
    /// Creates a new bounding box from corner coordinates.
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Creates a bounding box spanning a whole image.
    pub fn full_image(width: u32, height: u32) -> Self {
        Self {
            x1: 0,
            y1: 0,
            x2: width as i32,
            y2: height as i32,
        }
    }

    /// Width of the box (0 when degenerate).
    pub fn width(&self) -> i32 {
        (self.x2 - self.x1).max(0)
    }

    /// Height of the box (0 when degenerate).
    pub fn height(&self) -> i32 {
        (self.y2 - self.y1).max(0)
    }

    /// Returns true if the box has no area.
    pub fn is_empty(&self) -> bool {
        self.x2 <= self.x1 || self.y2 <= self.y1
    }

    /// Center of the box as `(cx, cy)`.
    pub fn center(&self) -> (f32, f32) {
        (
            (self.x1 + self.x2) as f32 / 2.0,
            (self.y1 + self.y2) as f32 / 2.0,
        )
    }

    /// Returns true if the point lies inside the box, inclusive on all four
    /// edges.
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        self.x1 as f32 <= x && x <= self.x2 as f32 && self.y1 as f32 <= y && y <= self.y2 as f32
    }
}
