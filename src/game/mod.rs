//! Core game logic
//!
//! Everything algorithmic lives here, free of rendering and window state:
//! - Rect: world-space geometry and the overlap test
//! - movement: axis-separated sliding collision against obstacles
//! - Player: position, derived hitbox, world-bounds clamp
//! - Rose/GameState: pickup collection and the win condition
//! - FollowCamera: smoothed follow target with discrete zoom
//! - Game: the session context, advanced once per frame
//!
//! The shell in `main.rs` feeds an `InputFrame` and a `dt` in, then renders
//! whatever state comes out. All modules are unit-tested headless.

pub mod camera;
pub mod movement;
pub mod player;
pub mod rect;
pub mod rose;
pub mod runtime;

pub use camera::FollowCamera;
pub use player::{Player, PLAYER_SPEED};
pub use rect::Rect;
pub use rose::{GameState, Rose, ROSE_HITBOX};
pub use runtime::{Game, InputFrame};
