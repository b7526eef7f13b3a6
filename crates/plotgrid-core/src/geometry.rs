// ABOUTME: Normalized geometry shared by the composer and its renderers.
// ABOUTME: Defines unit-square rectangles and per-side margins.

use serde::{Deserialize, Serialize};

/// Rectangle in normalized coordinates (0.0 to 1.0), origin at the top-left
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn full() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Shrink each side by the margin, in the same units as this rect.
    /// Opposing sides that overlap collapse to a zero-sized rect at the midpoint.
    pub fn inset(&self, margin: &Margin) -> Rect {
        let (x, width) = collapse(self.x + margin.left, self.width - margin.left - margin.right);
        let (y, height) = collapse(self.y + margin.top, self.height - margin.top - margin.bottom);
        Rect::new(x, y, width, height)
    }

    /// Map a rect expressed in this rect's local unit space into the parent space
    pub fn sub_rect(&self, local: Rect) -> Rect {
        Rect::new(
            self.x + local.x * self.width,
            self.y + local.y * self.height,
            local.width * self.width,
            local.height * self.height,
        )
    }

    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}

fn collapse(start: f32, len: f32) -> (f32, f32) {
    if len < 0.0 {
        (start + len / 2.0, 0.0)
    } else {
        (start, len)
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::full()
    }
}

/// Spacing around each cell, in the normalized units of the enclosing arrangement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Margin {
    pub const ZERO: Self = Self::uniform(0.0);

    pub const fn uniform(value: f32) -> Self {
        Self {
            left: value,
            right: value,
            top: value,
            bottom: value,
        }
    }

    pub const fn sides(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    pub fn as_array(&self) -> [f32; 4] {
        [self.left, self.right, self.top, self.bottom]
    }

    /// Every side must be finite, non-negative and below one half
    pub fn is_valid(&self) -> bool {
        self.as_array()
            .iter()
            .all(|side| side.is_finite() && *side >= 0.0 && *side < 0.5)
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::uniform(0.02)
    }
}

impl From<f32> for Margin {
    fn from(value: f32) -> Self {
        Self::uniform(value)
    }
}
