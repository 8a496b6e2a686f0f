//! Rose pickups and session progress
//!
//! Roses are collected by overlapping their fixed 18x18 hitbox with the
//! player rectangle. Collection is one-directional: `collected` flips
//! false to true exactly once and the counter only ever grows. The win
//! flag fires once all roses are collected and the player stands in the
//! goal zone, and stays set for the rest of the session.

use macroquad::math::Vec2;

use super::rect::Rect;

/// Pickup hitbox edge in world units, independent of the sprite size
pub const ROSE_HITBOX: f32 = 18.0;

/// A collectible rose
#[derive(Debug, Clone, Copy)]
pub struct Rose {
    pub pos: Vec2,
    pub collected: bool,
}

impl Rose {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            collected: false,
        }
    }

    /// Fixed-size pickup hitbox at the rose's world position
    pub fn hitbox(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, ROSE_HITBOX, ROSE_HITBOX)
    }
}

/// Session progress: collected count and the sticky win flag.
///
/// Fields are private so the monotonic invariants cannot be broken from
/// outside: the counter never decreases and `win` never reverts.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameState {
    roses_collected: usize,
    win: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roses_collected(&self) -> usize {
        self.roses_collected
    }

    pub fn win(&self) -> bool {
        self.win
    }

    /// Collect every uncollected rose the player overlaps. Each rose
    /// increments the counter at most once, no matter how many frames the
    /// overlap persists. Obstacle overlap plays no part here; a rose
    /// half-buried in a wall is still collectible.
    pub fn collect_roses(&mut self, player: &Rect, roses: &mut [Rose]) {
        for rose in roses.iter_mut() {
            if !rose.collected && player.overlaps(&rose.hitbox()) {
                rose.collected = true;
                self.roses_collected += 1;
            }
        }
    }

    /// Evaluate the win transition. Fires only while `win` is still false,
    /// every rose is collected and the player overlaps the goal zone.
    pub fn check_win(&mut self, player: &Rect, goal: &Rect, total_roses: usize) {
        if !self.win && self.roses_collected == total_roses && player.overlaps(goal) {
            self.win = true;
        }
    }
}
