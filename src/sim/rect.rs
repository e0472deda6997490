//! Axis-aligned bounding boxes
//!
//! Screen coordinates: x grows to the right, y grows downward, so `top < bottom`.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Square box around a circle
    pub fn around(cx: f32, cy: f32, radius: f32) -> Self {
        Self::new(cx - radius, cx + radius, cy - radius, cy + radius)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Move every edge inward by `margin`
    pub fn shrink(&self, margin: f32) -> Self {
        Self::new(
            self.left + margin,
            self.right - margin,
            self.top + margin,
            self.bottom - margin,
        )
    }

    /// Strict overlap: rectangles that only touch along an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right > other.left
            && self.left < other.right
            && self.bottom > other.top
            && self.top < other.bottom
    }
}
