//! Smoothed follow camera with discrete zoom
//!
//! The camera keeps a focus target that eases toward the player center by
//! a fixed fraction per frame (exponential decay, deliberately not
//! dt-scaled: at a capped frame rate the fixed weight gives the intended
//! feel and keeps the math trivial). The target is then clamped so the
//! visible area never leaves the world, and zoom moves in discrete steps
//! driven by key-press edges.

use macroquad::camera::Camera2D;
use macroquad::math::{vec2, Vec2};

/// Per-frame interpolation weight toward the player center
pub const FOLLOW_SMOOTHING: f32 = 0.12;
/// Zoom change per key press
pub const ZOOM_STEP: f32 = 0.1;
pub const ZOOM_MIN: f32 = 0.6;
pub const ZOOM_MAX: f32 = 2.0;

/// Camera state: smoothed focus point and zoom scalar
#[derive(Debug, Clone, Copy)]
pub struct FollowCamera {
    pub target: Vec2,
    pub zoom: f32,
}

impl FollowCamera {
    /// Start centered on `target` at 1x zoom
    pub fn new(target: Vec2) -> Self {
        Self { target, zoom: 1.0 }
    }

    /// Ease the target toward the desired focus point
    pub fn follow(&mut self, desired: Vec2) {
        self.target += (desired - self.target) * FOLLOW_SMOOTHING;
    }

    /// Half of the visible world area at the current zoom
    pub fn half_extents(&self, screen_w: f32, screen_h: f32) -> Vec2 {
        vec2(screen_w * 0.5 / self.zoom, screen_h * 0.5 / self.zoom)
    }

    /// Clamp the target so the visible extents stay inside the world.
    /// When an axis of the view is wider than the world itself, the
    /// camera centers on the world along that axis instead: a clamp range
    /// with min above max has no valid answer.
    pub fn clamp_to_world(&mut self, world_w: f32, world_h: f32, screen_w: f32, screen_h: f32) {
        let half = self.half_extents(screen_w, screen_h);
        self.target.x = clamp_axis(self.target.x, half.x, world_w);
        self.target.y = clamp_axis(self.target.y, half.y, world_h);
    }

    /// Step zoom in (closer), clamped to the allowed range
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Step zoom out (wider), clamped to the allowed range
    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Build the macroquad camera for this frame's world-space pass.
    /// Zoom components must stay positive: the camera matrix already flips
    /// y for screen rendering, so a negative y zoom (as
    /// `Camera2D::from_display_rect` sets) would render the world upside
    /// down. The default offset keeps the target on the screen center.
    pub fn to_camera2d(&self, screen_w: f32, screen_h: f32) -> Camera2D {
        Camera2D {
            target: self.target,
            zoom: vec2(self.zoom * 2.0 / screen_w, self.zoom * 2.0 / screen_h),
            ..Default::default()
        }
    }
}

fn clamp_axis(t: f32, half: f32, world: f32) -> f32 {
    if half * 2.0 >= world {
        world * 0.5
    } else {
        t.clamp(half, world - half)
    }
}
