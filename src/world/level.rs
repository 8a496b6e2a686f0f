//! Level loading and validation
//!
//! Levels are RON files describing the static world layout. The bundled
//! level is embedded with `include_str!` so the layout is compiled-in
//! configuration, but it goes through the same parse-and-validate path a
//! file from disk would.

use macroquad::math::{vec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::game::Rect;

/// Validation limits to reject degenerate or runaway level data
pub mod limits {
    /// Maximum number of obstacle rectangles
    pub const MAX_OBSTACLES: usize = 256;
    /// Maximum number of rose spawn points
    pub const MAX_ROSES: usize = 64;
    /// Maximum number of place labels
    pub const MAX_LABELS: usize = 32;
    /// Maximum string length for names and labels
    pub const MAX_STRING_LEN: usize = 256;
    /// Maximum coordinate magnitude (prevents overflow issues)
    pub const MAX_COORD: f32 = 1_000_000.0;
}

/// Error type for level loading
#[derive(Debug)]
pub enum LevelError {
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<ron::error::SpannedError> for LevelError {
    fn from(e: ron::error::SpannedError) -> Self {
        LevelError::ParseError(e)
    }
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::ParseError(e) => write!(f, "Parse error: {}", e),
            LevelError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for LevelError {}

/// A world-space place name, drawn by the shell as background text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// Static world layout, fixed for the whole session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    pub width: f32,
    pub height: f32,
    pub player_spawn: (f32, f32),
    pub obstacles: Vec<Rect>,
    pub roses: Vec<(f32, f32)>,
    pub goal: Rect,
    pub labels: Vec<Label>,
}

impl Level {
    /// The layout bundled into the binary
    pub fn bundled() -> Result<Level, LevelError> {
        load_level_from_str(include_str!("../../assets/levels/ruta_orgullosa.ron"))
    }

    pub fn spawn_point(&self) -> Vec2 {
        vec2(self.player_spawn.0, self.player_spawn.1)
    }

    pub fn rose_spawns(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.roses.iter().map(|&(x, y)| vec2(x, y))
    }

    /// Center of the goal zone (tent sprite anchor)
    pub fn goal_center(&self) -> Vec2 {
        self.goal.center()
    }
}

/// Parse a level from RON and validate it
pub fn load_level_from_str(s: &str) -> Result<Level, LevelError> {
    let level: Level = ron::from_str(s)?;
    validate_level(&level).map_err(LevelError::ValidationError)?;
    Ok(level)
}

/// Check if a float is valid (not NaN or Inf, within coordinate limits)
fn is_valid_float(f: f32) -> bool {
    f.is_finite() && f.abs() <= limits::MAX_COORD
}

fn validate_point(x: f32, y: f32, context: &str) -> Result<(), String> {
    if !is_valid_float(x) || !is_valid_float(y) {
        return Err(format!("{}: invalid coordinate ({}, {})", context, x, y));
    }
    Ok(())
}

fn validate_rect(rect: &Rect, level: &Level, context: &str) -> Result<(), String> {
    for v in [rect.x, rect.y, rect.w, rect.h] {
        if !is_valid_float(v) {
            return Err(format!("{}: invalid value {}", context, v));
        }
    }
    if rect.w <= 0.0 || rect.h <= 0.0 {
        return Err(format!("{}: non-positive size {}x{}", context, rect.w, rect.h));
    }
    if rect.x < 0.0 || rect.y < 0.0 || rect.right() > level.width || rect.bottom() > level.height {
        return Err(format!("{}: outside world bounds", context));
    }
    Ok(())
}

fn validate_level(level: &Level) -> Result<(), String> {
    if level.name.len() > limits::MAX_STRING_LEN {
        return Err(format!(
            "name too long ({} > {})",
            level.name.len(),
            limits::MAX_STRING_LEN
        ));
    }
    if !is_valid_float(level.width)
        || !is_valid_float(level.height)
        || level.width <= 0.0
        || level.height <= 0.0
    {
        return Err(format!(
            "invalid world size {}x{}",
            level.width, level.height
        ));
    }

    if level.obstacles.len() > limits::MAX_OBSTACLES {
        return Err(format!(
            "too many obstacles ({} > {})",
            level.obstacles.len(),
            limits::MAX_OBSTACLES
        ));
    }
    if level.roses.len() > limits::MAX_ROSES {
        return Err(format!(
            "too many roses ({} > {})",
            level.roses.len(),
            limits::MAX_ROSES
        ));
    }
    if level.labels.len() > limits::MAX_LABELS {
        return Err(format!(
            "too many labels ({} > {})",
            level.labels.len(),
            limits::MAX_LABELS
        ));
    }

    validate_point(level.player_spawn.0, level.player_spawn.1, "player_spawn")?;
    for (i, obs) in level.obstacles.iter().enumerate() {
        validate_rect(obs, level, &format!("obstacle[{}]", i))?;
    }
    for (i, &(x, y)) in level.roses.iter().enumerate() {
        validate_point(x, y, &format!("rose[{}]", i))?;
    }
    validate_rect(&level.goal, level, "goal")?;
    for (i, label) in level.labels.iter().enumerate() {
        if label.text.len() > limits::MAX_STRING_LEN {
            return Err(format!("label[{}]: text too long", i));
        }
        validate_point(label.x, label.y, &format!("label[{}]", i))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_level_loads() {
        let level = Level::bundled().expect("bundled level must parse and validate");
        assert_eq!(level.width, 2000.0);
        assert_eq!(level.height, 1200.0);
        assert_eq!(level.obstacles.len(), 20);
        assert_eq!(level.roses.len(), 8);
        assert_eq!(level.labels.len(), 4);
        assert_eq!(level.player_spawn, (180.0, 220.0));
    }

    #[test]
    fn test_bundled_goal_center() {
        let level = Level::bundled().unwrap();
        let center = level.goal_center();
        assert!((center.x - 1800.0).abs() < 0.001);
        assert!((center.y - 520.0).abs() < 0.001);
    }

    fn minimal_ron(goal: &str, extra_obstacle: &str) -> String {
        format!(
            r#"(
                name: "t",
                width: 100.0,
                height: 100.0,
                player_spawn: (5.0, 5.0),
                obstacles: [{extra_obstacle}],
                roses: [(10.0, 10.0)],
                goal: {goal},
                labels: [],
            )"#
        )
    }

    #[test]
    fn test_minimal_level_is_valid() {
        let s = minimal_ron("(x: 50.0, y: 50.0, w: 20.0, h: 20.0)", "");
        assert!(load_level_from_str(&s).is_ok());
    }

    #[test]
    fn test_rejects_non_finite_coordinate() {
        let s = minimal_ron("(x: inf, y: 50.0, w: 20.0, h: 20.0)", "");
        match load_level_from_str(&s) {
            Err(LevelError::ValidationError(msg)) => assert!(msg.contains("goal")),
            other => panic!("expected validation error, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_rejects_goal_outside_world() {
        let s = minimal_ron("(x: 90.0, y: 90.0, w: 20.0, h: 20.0)", "");
        assert!(matches!(
            load_level_from_str(&s),
            Err(LevelError::ValidationError(_))
        ));
    }

    #[test]
    fn test_rejects_zero_size_obstacle() {
        let s = minimal_ron(
            "(x: 50.0, y: 50.0, w: 20.0, h: 20.0)",
            "(x: 10.0, y: 10.0, w: 0.0, h: 5.0)",
        );
        assert!(matches!(
            load_level_from_str(&s),
            Err(LevelError::ValidationError(_))
        ));
    }

    #[test]
    fn test_rejects_oversized_rose_list() {
        let roses: String = std::iter::repeat("(1.0, 1.0),")
            .take(limits::MAX_ROSES + 1)
            .collect();
        let s = format!(
            r#"(
                name: "t",
                width: 100.0,
                height: 100.0,
                player_spawn: (5.0, 5.0),
                obstacles: [],
                roses: [{roses}],
                goal: (x: 50.0, y: 50.0, w: 20.0, h: 20.0),
                labels: [],
            )"#
        );
        assert!(matches!(
            load_level_from_str(&s),
            Err(LevelError::ValidationError(_))
        ));
    }

    #[test]
    fn test_rejects_garbage_input() {
        assert!(matches!(
            load_level_from_str("not a level"),
            Err(LevelError::ParseError(_))
        ));
    }
}
