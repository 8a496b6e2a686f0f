//! Movement resolution against static obstacles
//!
//! Axis-separated sliding: the X component of a displacement is resolved
//! first, then the Y component from the already-updated position. Pressing
//! diagonally into a wall therefore slides along whichever axis is free.
//!
//! When the fully-displaced rectangle would overlap an obstacle, movement
//! advances in 1-unit steps up to the last free position instead of
//! computing an exact penetration depth. At these speeds and frame rates
//! the integer-unit stop is indistinguishable from a continuous sweep.
//!
//! Pure functions over value data; no state, no side effects.

use macroquad::math::Vec2;

use super::rect::Rect;

/// Does `rect` overlap any obstacle?
pub fn collides_any(rect: &Rect, obstacles: &[Rect]) -> bool {
    obstacles.iter().any(|obs| rect.overlaps(obs))
}

/// Resolve a desired displacement into an actual new position.
///
/// The returned position never overlaps an obstacle, assuming the starting
/// position did not. A zero delta or an empty obstacle list is a no-op.
pub fn resolve_movement(pos: Vec2, delta: Vec2, size: Vec2, obstacles: &[Rect]) -> Vec2 {
    let mut pos = pos;

    // X axis
    if delta.x != 0.0 {
        let next = Rect::new(pos.x + delta.x, pos.y, size.x, size.y);
        if !collides_any(&next, obstacles) {
            pos.x += delta.x;
        } else {
            let step = if delta.x > 0.0 { 1.0 } else { -1.0 };
            let mut remaining = delta.x;
            loop {
                let probe = Rect::new(pos.x + step, pos.y, size.x, size.y);
                if collides_any(&probe, obstacles) {
                    break;
                }
                pos.x += step;
                remaining -= step;
                if remaining.abs() < 1.0 {
                    break;
                }
            }
        }
    }

    // Y axis, from the position the X pass may have updated
    if delta.y != 0.0 {
        let next = Rect::new(pos.x, pos.y + delta.y, size.x, size.y);
        if !collides_any(&next, obstacles) {
            pos.y += delta.y;
        } else {
            let step = if delta.y > 0.0 { 1.0 } else { -1.0 };
            let mut remaining = delta.y;
            loop {
                let probe = Rect::new(pos.x, pos.y + step, size.x, size.y);
                if collides_any(&probe, obstacles) {
                    break;
                }
                pos.y += step;
                remaining -= step;
                if remaining.abs() < 1.0 {
                    break;
                }
            }
        }
    }

    pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::vec2;

    const SIZE: Vec2 = Vec2::new(10.0, 10.0);

    #[test]
    fn test_unobstructed_full_move() {
        let obstacles = [Rect::new(20.0, 0.0, 10.0, 10.0)];
        let pos = resolve_movement(vec2(0.0, 0.0), vec2(5.0, 0.0), SIZE, &obstacles);
        assert!((pos.x - 5.0).abs() < 0.001);
        assert!((pos.y - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_blocked_move_slides_to_contact() {
        // Moving 25 units right into an obstacle at x=20 stops flush
        // against it, one unit-step short of overlap.
        let obstacles = [Rect::new(20.0, 0.0, 10.0, 10.0)];
        let pos = resolve_movement(vec2(0.0, 0.0), vec2(25.0, 0.0), SIZE, &obstacles);
        assert!((pos.x - 10.0).abs() < 0.001);
        let player = Rect::from_pos_size(pos, SIZE);
        assert!(!collides_any(&player, &obstacles));
    }

    #[test]
    fn test_blocked_move_leftwards() {
        let obstacles = [Rect::new(0.0, 0.0, 10.0, 10.0)];
        let pos = resolve_movement(vec2(30.0, 0.0), vec2(-25.0, 0.0), SIZE, &obstacles);
        assert!((pos.x - 10.0).abs() < 0.001);
        let player = Rect::from_pos_size(pos, SIZE);
        assert!(!collides_any(&player, &obstacles));
    }

    #[test]
    fn test_diagonal_slides_along_wall() {
        // Tall wall to the right: X is blocked, Y slides through freely.
        let obstacles = [Rect::new(20.0, -100.0, 10.0, 200.0)];
        let pos = resolve_movement(vec2(0.0, 0.0), vec2(25.0, 5.0), SIZE, &obstacles);
        assert!((pos.x - 10.0).abs() < 0.001);
        assert!((pos.y - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_corner_resolves_x_before_y() {
        // Player flush against an obstacle's top-left corner, pushing
        // down-right: the X pass commits first (no overlap at the pre-move
        // y), then the Y pass is blocked. The mirrored order would stop X
        // instead.
        let obstacles = [Rect::new(20.0, 20.0, 10.0, 10.0)];
        let pos = resolve_movement(vec2(10.0, 10.0), vec2(5.0, 5.0), SIZE, &obstacles);
        assert!((pos.x - 15.0).abs() < 0.001);
        assert!((pos.y - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_zero_delta_is_noop() {
        let obstacles = [Rect::new(20.0, 0.0, 10.0, 10.0)];
        let pos = resolve_movement(vec2(3.0, 4.0), vec2(0.0, 0.0), SIZE, &obstacles);
        assert_eq!(pos, vec2(3.0, 4.0));
    }

    #[test]
    fn test_empty_obstacles_full_move() {
        let pos = resolve_movement(vec2(0.0, 0.0), vec2(100.0, -50.0), SIZE, &[]);
        assert_eq!(pos, vec2(100.0, -50.0));
    }

    #[test]
    fn test_never_penetrates_over_many_steps() {
        // Walk a fixed delta script through a cluttered area and check the
        // no-penetration invariant after every resolved step.
        let obstacles = [
            Rect::new(30.0, 0.0, 20.0, 40.0),
            Rect::new(0.0, 50.0, 80.0, 15.0),
            Rect::new(60.0, 10.0, 10.0, 30.0),
        ];
        let script = [
            vec2(12.0, 0.0),
            vec2(12.0, 12.0),
            vec2(0.0, 20.0),
            vec2(-7.0, 9.0),
            vec2(25.0, -3.0),
            vec2(3.5, 40.0),
            vec2(-60.0, -2.0),
            vec2(8.0, 8.0),
        ];
        let mut pos = vec2(0.0, 0.0);
        for delta in script {
            pos = resolve_movement(pos, delta, SIZE, &obstacles);
            let player = Rect::from_pos_size(pos, SIZE);
            assert!(
                !collides_any(&player, &obstacles),
                "player at {:?} penetrates an obstacle",
                pos
            );
        }
    }
}
