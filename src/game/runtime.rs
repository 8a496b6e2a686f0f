//! Per-frame game update
//!
//! `Game` owns the whole session (level, player, roses, camera, progress)
//! and advances it one frame at a time. The pipeline order is fixed:
//! move and clamp the player, collect roses, evaluate the win, then update
//! the camera. Rendering reads the resulting state; nothing here draws.

use macroquad::math::Vec2;

use super::camera::FollowCamera;
use super::player::{Player, PLAYER_SPEED};
use super::rose::{GameState, Rose};
use crate::world::Level;

/// One frame's worth of input, resolved by the shell before the update
#[derive(Debug, Clone, Copy, Default)]
pub struct InputFrame {
    /// Normalized movement direction (length 1 or 0)
    pub dir: Vec2,
    /// Zoom-in key went down this frame
    pub zoom_in: bool,
    /// Zoom-out key went down this frame
    pub zoom_out: bool,
}

/// The running game session
pub struct Game {
    pub level: Level,
    pub player: Player,
    pub roses: Vec<Rose>,
    pub camera: FollowCamera,
    pub state: GameState,
}

impl Game {
    /// Build a session from a level and the player hitbox size
    pub fn new(level: Level, player_size: Vec2) -> Self {
        let player = Player::new(level.spawn_point(), player_size);
        let roses = level.rose_spawns().map(Rose::new).collect();
        let camera = FollowCamera::new(player.center());
        Self {
            level,
            player,
            roses,
            camera,
            state: GameState::new(),
        }
    }

    pub fn total_roses(&self) -> usize {
        self.roses.len()
    }

    /// Advance the session by one frame.
    ///
    /// `screen_w`/`screen_h` size the camera's visible extents; zoom steps
    /// are applied after the clamp so they show immediately and the clamp
    /// catches up next frame, matching the follow smoothing's one-frame lag.
    pub fn update(&mut self, input: &InputFrame, dt: f32, screen_w: f32, screen_h: f32) {
        let delta = input.dir * PLAYER_SPEED * dt;
        self.player.apply_movement(delta, &self.level);

        let player_rect = self.player.rect();
        self.state.collect_roses(&player_rect, &mut self.roses);
        self.state
            .check_win(&player_rect, &self.level.goal, self.roses.len());

        self.camera.follow(self.player.center());
        self.camera
            .clamp_to_world(self.level.width, self.level.height, screen_w, screen_h);
        if input.zoom_out {
            self.camera.zoom_out();
        }
        if input.zoom_in {
            self.camera.zoom_in();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::rect::Rect;
    use macroquad::math::vec2;

    const DT: f32 = 1.0 / 60.0;
    const SCREEN: (f32, f32) = (800.0, 450.0);

    fn tiny_level() -> Level {
        Level {
            name: "test".to_string(),
            width: 400.0,
            height: 200.0,
            player_spawn: (10.0, 10.0),
            obstacles: vec![Rect::new(150.0, 0.0, 20.0, 120.0)],
            roses: vec![(60.0, 10.0)],
            goal: Rect::new(300.0, 20.0, 60.0, 60.0),
            labels: vec![],
        }
    }

    fn run_frames(game: &mut Game, dir: Vec2, frames: usize) {
        let input = InputFrame {
            dir,
            ..Default::default()
        };
        for _ in 0..frames {
            game.update(&input, DT, SCREEN.0, SCREEN.1);
        }
    }

    #[test]
    fn test_full_session_to_win() {
        let mut game = Game::new(tiny_level(), vec2(20.0, 20.0));
        assert_eq!(game.total_roses(), 1);

        // Walk right over the rose, into the wall, and stop against it.
        run_frames(&mut game, vec2(1.0, 0.0), 120);
        assert_eq!(game.state.roses_collected(), 1);
        assert!(!game.state.win());
        assert!(game.player.pos.x < 150.0);
        let wall = game.level.obstacles[0];
        assert!(!game.player.rect().overlaps(&wall));

        // Duck under the wall, then climb back up into the goal zone.
        run_frames(&mut game, vec2(0.0, 1.0), 120);
        run_frames(&mut game, vec2(1.0, 0.0), 200);
        run_frames(&mut game, vec2(0.0, -1.0), 40);
        run_frames(&mut game, vec2(-1.0, 0.0), 10);
        assert!(game.player.rect().overlaps(&game.level.goal));
        assert!(game.state.win());

        // Walking away leaves the win flag set.
        run_frames(&mut game, vec2(0.0, 1.0), 60);
        assert!(game.state.win());
    }

    #[test]
    fn test_camera_tracks_player_and_stays_in_world() {
        let mut game = Game::new(tiny_level(), vec2(20.0, 20.0));
        run_frames(&mut game, vec2(0.0, 1.0), 90);

        let half = game.camera.half_extents(SCREEN.0, SCREEN.1);
        // The tiny level is smaller than the view, so the camera centers.
        assert!(half.x * 2.0 >= game.level.width);
        assert_eq!(game.camera.target, vec2(200.0, 100.0));
    }

    #[test]
    fn test_zoom_edges_apply_once_per_press() {
        let mut game = Game::new(tiny_level(), vec2(20.0, 20.0));
        let input = InputFrame {
            zoom_in: true,
            ..Default::default()
        };
        game.update(&input, DT, SCREEN.0, SCREEN.1);
        assert!((game.camera.zoom - 1.1).abs() < 0.001);

        // No edge this frame, zoom holds.
        game.update(&InputFrame::default(), DT, SCREEN.0, SCREEN.1);
        assert!((game.camera.zoom - 1.1).abs() < 0.001);
    }
}
