//! Axis-aligned rectangle geometry
//!
//! Screen-space convention: `y` grows downward, so `top() < bottom()`.
//! Position is mutable; size is fixed at construction and always positive.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// An axis-aligned bounding box in world units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RectDeserialize")]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    width: f32,
    height: f32,
}

impl Rect {
    /// Create a rect; width and height must be positive and finite.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Result<Self, SimError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(SimError::InvalidRect { width, height });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Top-left corner
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn set_left(&mut self, left: f32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.width;
    }

    pub fn set_top(&mut self, top: f32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.height;
    }

    /// Strict overlap test: rects that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Strict overlap of the horizontal extents only
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }

    /// Half-open point containment (left/top inclusive, right/bottom exclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}

/// Helper for deserializing a rect through the size check
#[derive(Deserialize)]
struct RectDeserialize {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl TryFrom<RectDeserialize> for Rect {
    type Error = SimError;

    fn try_from(r: RectDeserialize) -> Result<Self, Self::Error> {
        Self::new(r.x, r.y, r.width, r.height)
    }
}
