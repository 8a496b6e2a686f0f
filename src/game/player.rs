//! Player state and per-frame movement
//!
//! The player owns a top-left position and a size fixed at setup; its
//! rectangle is derived on demand. Movement goes through the collision
//! resolver and is then hard-clamped to the world bounds, so the world
//! edges act as invisible walls outside the obstacle list.

use macroquad::math::{vec2, Vec2};

use super::movement::resolve_movement;
use super::rect::Rect;
use crate::world::Level;

/// Movement speed in world units per second
pub const PLAYER_SPEED: f32 = 210.0;

/// Hitbox fraction of the sprite dimensions
const SPRITE_HITBOX_SCALE: f32 = 0.70;
/// Minimum hitbox edge, so a tiny sprite never yields a sliver hitbox
const MIN_HITBOX_EDGE: f32 = 18.0;
/// Hitbox when no player sprite is available
const FALLBACK_SIZE: Vec2 = Vec2::new(26.0, 26.0);

/// The player-controlled rectangle
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub pos: Vec2,
    size: Vec2,
}

impl Player {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Derive the hitbox size from the player sprite dimensions, or fall
    /// back to a fixed size when no sprite was loaded.
    pub fn size_from_sprite(sprite: Option<Vec2>) -> Vec2 {
        match sprite {
            Some(dims) => {
                let scaled = dims * SPRITE_HITBOX_SCALE;
                vec2(scaled.x.max(MIN_HITBOX_EDGE), scaled.y.max(MIN_HITBOX_EDGE))
            }
            None => FALLBACK_SIZE,
        }
    }

    /// Current hitbox rectangle
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Center of the hitbox (camera focus point)
    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }

    /// Move by `delta`, sliding along obstacles, then clamp to the world.
    pub fn apply_movement(&mut self, delta: Vec2, level: &Level) {
        self.pos = resolve_movement(self.pos, delta, self.size, &level.obstacles);
        self.pos.x = clamp_span(self.pos.x, level.width - self.size.x);
        self.pos.y = clamp_span(self.pos.y, level.height - self.size.y);
    }
}

/// Clamp to `[0, max]`. A world narrower than the player leaves no valid
/// span (`max` below zero, where `f32::clamp` would panic); pin to the
/// origin instead.
fn clamp_span(v: f32, max: f32) -> f32 {
    if max <= 0.0 {
        0.0
    } else {
        v.clamp(0.0, max)
    }
}
