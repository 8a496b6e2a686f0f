//! Keyboard input
//!
//! Turns raw key state into the per-frame `InputFrame` the game consumes:
//! a normalized movement direction (WASD / arrows) plus zoom step edges
//! (Q out, E in). Normalization is split into a pure function so the
//! diagonal-speed contract is testable without a window.

use macroquad::math::{vec2, Vec2};
use macroquad::prelude::{is_key_down, is_key_pressed, KeyCode};

use crate::game::InputFrame;

/// Read this frame's input from the keyboard
pub fn read_frame() -> InputFrame {
    let mut dir = vec2(0.0, 0.0);
    if is_key_down(KeyCode::D) || is_key_down(KeyCode::Right) {
        dir.x += 1.0;
    }
    if is_key_down(KeyCode::A) || is_key_down(KeyCode::Left) {
        dir.x -= 1.0;
    }
    if is_key_down(KeyCode::S) || is_key_down(KeyCode::Down) {
        dir.y += 1.0;
    }
    if is_key_down(KeyCode::W) || is_key_down(KeyCode::Up) {
        dir.y -= 1.0;
    }

    InputFrame {
        dir: normalize_direction(dir),
        zoom_in: is_key_pressed(KeyCode::E),
        zoom_out: is_key_pressed(KeyCode::Q),
    }
}

/// Scale a raw direction to unit length so diagonal movement is no faster
/// than cardinal movement. Zero-length and non-finite inputs resolve to
/// zero: no keys means no movement, and garbage never reaches the resolver.
pub fn normalize_direction(dir: Vec2) -> Vec2 {
    let len = dir.length();
    if len.is_finite() && len > 0.0 {
        dir / len
    } else {
        Vec2::ZERO
    }
}
