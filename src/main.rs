//! Roses de Sant Feliu - La Ruta Orgullosa
//!
//! Top-down exploration game: wander Sant Feliu, collect every rose, then
//! reach the carpa to complete the ruta. One continuous 2000x1200 world
//! with a smooth-follow camera.
//!
//! This file is frame-loop glue only: read input, advance the game one
//! frame, draw the result. All gameplay rules live in `game`.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod game;
mod input;
mod render;
mod world;

use macroquad::prelude::*;

use game::{Game, Player};
use render::Textures;
use world::Level;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Roses de Sant Feliu v{}", VERSION),
        window_width: 800,
        window_height: 450,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let level = match Level::bundled() {
        Ok(level) => level,
        Err(e) => {
            println!("Failed to load bundled level: {}", e);
            return;
        }
    };

    // Important: in web builds, assets must be packed next to the wasm
    let textures = Textures::load().await;

    let player_size =
        Player::size_from_sprite(textures.player.as_ref().map(|t| vec2(t.width(), t.height())));
    let mut game = Game::new(level, player_size);

    loop {
        let dt = get_frame_time();
        let frame = input::read_frame();
        game.update(&frame, dt, screen_width(), screen_height());

        clear_background(WHITE);

        set_camera(&game.camera.to_camera2d(screen_width(), screen_height()));
        render::draw_world(&game, &textures);

        set_default_camera();
        render::draw_hud(&game);

        next_frame().await;
    }
}
