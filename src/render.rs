//! Drawing
//!
//! Thin rendering pass over the game state. Every sprite has a primitive
//! fallback so the game stays playable when an asset fails to load: a blue
//! rectangle for the player, a pink circle for roses, an orange block for
//! the tent. No game logic lives here.

use macroquad::prelude::*;

use crate::game::{Game, ROSE_HITBOX};

const BACKGROUND: Color = Color::new(0.96, 0.96, 0.96, 1.0);
const OBSTACLE_GRAY: Color = Color::new(0.47, 0.47, 0.47, 1.0);

/// Place-name palette, cycled in level order
const LABEL_COLORS: [Color; 4] = [DARKBLUE, DARKPURPLE, DARKGREEN, MAROON];

fn label_color(index: usize) -> Color {
    LABEL_COLORS[index % LABEL_COLORS.len()]
}

/// Optional sprite set; any texture may be missing
pub struct Textures {
    pub player: Option<Texture2D>,
    pub rose: Option<Texture2D>,
    pub tent: Option<Texture2D>,
}

impl Textures {
    /// Load all sprites, falling back to primitives for any that fail.
    /// Web builds need the assets directory packed alongside the wasm.
    pub async fn load() -> Self {
        Self {
            player: load_optional("assets/player.png").await,
            rose: load_optional("assets/rose.png").await,
            tent: load_optional("assets/tent.png").await,
        }
    }
}

async fn load_optional(path: &str) -> Option<Texture2D> {
    match load_texture(path).await {
        Ok(tex) => Some(tex),
        Err(e) => {
            println!("No texture at {} ({}), using primitive fallback", path, e);
            None
        }
    }
}

/// Draw a texture centered on a world point, uniformly scaled
fn draw_texture_centered(tex: &Texture2D, center: Vec2, scale: f32, tint: Color) {
    let w = tex.width() * scale;
    let h = tex.height() * scale;
    draw_texture_ex(
        tex,
        center.x - w * 0.5,
        center.y - h * 0.5,
        tint,
        DrawTextureParams {
            dest_size: Some(vec2(w, h)),
            ..Default::default()
        },
    );
}

/// World-space pass: call between `set_camera` and `set_default_camera`
pub fn draw_world(game: &Game, textures: &Textures) {
    let level = &game.level;

    // Ground and world border
    draw_rectangle(0.0, 0.0, level.width, level.height, BACKGROUND);
    draw_rectangle_lines(0.0, 0.0, level.width, level.height, 2.0, LIGHTGRAY);

    // Place names
    for (i, label) in level.labels.iter().enumerate() {
        draw_text(&label.text, label.x, label.y, 20.0, label_color(i));
    }

    // Obstacles
    for obs in &level.obstacles {
        draw_rectangle(obs.x, obs.y, obs.w, obs.h, OBSTACLE_GRAY);
    }

    // Goal zone tint, outline and tent
    let goal = &level.goal;
    draw_rectangle(goal.x, goal.y, goal.w, goal.h, Color::new(1.0, 0.63, 0.0, 0.18));
    draw_rectangle_lines(goal.x, goal.y, goal.w, goal.h, 2.0, ORANGE);
    match &textures.tent {
        Some(tex) => draw_texture_centered(tex, level.goal_center(), 1.0, WHITE),
        None => {
            draw_rectangle(goal.x + 30.0, goal.y + 25.0, 100.0, 70.0, ORANGE);
            draw_text("CARPA", goal.x + 52.0, goal.y + 60.0, 16.0, MAROON);
        }
    }

    // Uncollected roses, scaled to the pickup hitbox width
    for rose in game.roses.iter().filter(|r| !r.collected) {
        match &textures.rose {
            Some(tex) => {
                let scale = ROSE_HITBOX / tex.width();
                let center = rose.hitbox().center();
                draw_texture_centered(tex, center, scale, WHITE);
            }
            None => {
                let center = rose.hitbox().center();
                draw_circle(center.x, center.y, ROSE_HITBOX * 0.5, PINK);
            }
        }
    }

    // Player
    let rect = game.player.rect();
    match &textures.player {
        Some(tex) => {
            let scale = rect.w / tex.width();
            draw_texture_centered(tex, rect.center(), scale, WHITE);
        }
        None => draw_rectangle(rect.x, rect.y, rect.w, rect.h, BLUE),
    }
}

/// Screen-space pass: HUD panel and the win overlay
pub fn draw_hud(game: &Game) {
    draw_rectangle(12.0, 12.0, 250.0, 62.0, Color::new(1.0, 1.0, 1.0, 0.92));
    draw_rectangle_lines(12.0, 12.0, 250.0, 62.0, 1.0, LIGHTGRAY);
    draw_text(&game.level.name, 22.0, 30.0, 16.0, BLACK);
    let counter = format!(
        "Roses: {} / {}",
        game.state.roses_collected(),
        game.total_roses()
    );
    draw_text(&counter, 22.0, 52.0, 18.0, BLACK);
    draw_text("Q/E: zoom", 22.0, 68.0, 12.0, GRAY);

    if game.state.win() {
        draw_rectangle(
            0.0,
            0.0,
            screen_width(),
            screen_height(),
            Color::new(0.0, 0.0, 0.0, 0.35),
        );
        draw_text("RUTA COMPLETADA!", 240.0, 210.0, 34.0, WHITE);
        draw_text("Orgullosament Santfeliuenc", 235.0, 250.0, 20.0, WHITE);
    }
}
