//! Rectangle type for world-space geometry
//!
//! Used for obstacles, the player hitbox, rose hitboxes and the goal zone.
//! Serde-derived because level files store their geometry as rectangles.

use macroquad::math::{vec2, Vec2};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle defined by top-left position and size
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Create from a top-left position and a size vector
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Center point
    pub fn center(&self) -> Vec2 {
        vec2(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Overlap test with strict inequalities: rectangles that merely
    /// share an edge do not overlap. Sliding movement stops with the
    /// player flush against an obstacle, so flush contact must not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}
