//! Next paddle-plane crossing estimate
//!
//! Predicts where the puck will cross a paddle's plane assuming both paddles
//! stay where they are: x-motion is linear (bouncing off the far paddle if the
//! puck is heading away), y-motion is a triangle wave between the walls.

use super::oscillation::{linear_oscillation, linear_oscillation_inverse};
use crate::sim::{Arena, Side};

/// When and where the puck next reaches a paddle's plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneCrossing {
    /// Seconds from now; 0 means "no estimate, hold position"
    pub when: f32,
    /// Puck centre y at the crossing
    pub y: f32,
}

/// Estimate the puck's next crossing of `side`'s paddle plane
///
/// The plane is the face of the paddle's radius-inflated box that looks into
/// the arena. If the puck is outside the span between the two planes, or not
/// moving in x, returns `when = 0` with the paddle's own centre y.
pub fn estimate_next_paddle_plane_crossing(arena: &Arena, side: Side) -> PlaneCrossing {
    let puck = arena.puck();
    let (centre, velocity) = (puck.centre, puck.velocity);
    let lhs_plane = arena.paddle_zone(Side::Left).max().x;
    let rhs_plane = arena.paddle_zone(Side::Right).min().x;

    if velocity.x == 0.0 || centre.x < lhs_plane || centre.x > rhs_plane {
        return PlaneCrossing {
            when: 0.0,
            y: arena.paddle(side).bounds.centre().y,
        };
    }

    let width = rhs_plane - lhs_plane;
    let dx = match (side, velocity.x > 0.0) {
        (Side::Left, false) => centre.x - lhs_plane,
        (Side::Right, true) => rhs_plane - centre.x,
        // heading away: via the opposite paddle
        (Side::Left, true) => rhs_plane - centre.x + width,
        (Side::Right, false) => centre.x - lhs_plane + width,
    };
    let when = dx / velocity.x.abs();

    let zone = arena.puck_zone();
    let (floor, range) = (zone.min().y, zone.height());
    let unfolded = linear_oscillation_inverse(range, centre.y - floor, velocity.y)
        + velocity.y.abs() * when;

    PlaneCrossing {
        when,
        y: floor + linear_oscillation(range, unfolded),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use glam::Vec2;

    fn arena_with_puck(centre: Vec2, velocity: Vec2) -> Arena {
        let mut arena = Arena::new(|| -> (f32, Vec2) { (240.0, Vec2::new(100.0, 0.0)) });
        arena.puck_mut().centre = centre;
        arena.puck_mut().velocity = velocity;
        arena
    }

    #[test]
    fn test_straight_approach() {
        let arena = arena_with_puck(Vec2::new(320.0, 240.0), Vec2::new(-100.0, 0.0));
        let crossing = estimate_next_paddle_plane_crossing(&arena, Side::Left);
        // lhs plane at 22 + 5
        assert!((crossing.when - 2.93).abs() < 1e-4);
        assert_eq!(crossing.y, 240.0);
    }

    #[test]
    fn test_folds_wall_bounce() {
        // 50 up to the wall at 465, then 50 back down
        let arena = arena_with_puck(Vec2::new(127.0, 415.0), Vec2::new(-100.0, 100.0));
        let crossing = estimate_next_paddle_plane_crossing(&arena, Side::Left);
        assert!((crossing.when - 1.0).abs() < 1e-5);
        assert!((crossing.y - 415.0).abs() < 1e-3);
    }

    #[test]
    fn test_heading_away_goes_via_far_paddle() {
        let arena = arena_with_puck(Vec2::new(320.0, 240.0), Vec2::new(100.0, 0.0));
        let crossing = estimate_next_paddle_plane_crossing(&arena, Side::Left);
        // 293 to the rhs plane at 613, then 586 back
        assert!((crossing.when - 8.79).abs() < 1e-3);
    }

    #[test]
    fn test_puck_behind_plane_holds_paddle() {
        let mut arena = arena_with_puck(Vec2::new(20.0, 100.0), Vec2::new(-100.0, 50.0));
        let raised = arena.lhs_paddle().bounds.with_y_extent(300.0, 40.0);
        arena.paddle_mut(Side::Left).bounds = raised;
        let crossing = estimate_next_paddle_plane_crossing(&arena, Side::Left);
        assert_eq!(crossing, PlaneCrossing { when: 0.0, y: 320.0 });

        arena.puck_mut().centre = Vec2::new(320.0, 100.0);
        arena.puck_mut().velocity = Vec2::new(0.0, 50.0);
        assert_eq!(estimate_next_paddle_plane_crossing(&arena, Side::Left).when, 0.0);
    }

    #[test]
    fn test_estimate_is_invariant_while_flying() {
        let mut arena = arena_with_puck(Vec2::new(320.0, 240.0), Vec2::new(-150.0, 220.0));
        let lhs = estimate_next_paddle_plane_crossing(&arena, Side::Left);
        let rhs = estimate_next_paddle_plane_crossing(&arena, Side::Right);
        assert!((lhs.when - 293.0 / 150.0).abs() < 1e-4);

        // several wall bounces, no paddle contact
        let mut elapsed = 0.0;
        for _ in 0..90 {
            arena.advance_time(SIM_DT);
            elapsed += SIM_DT;

            let lhs_now = estimate_next_paddle_plane_crossing(&arena, Side::Left);
            assert!((lhs_now.when + elapsed - lhs.when).abs() < 1e-3);
            assert!((lhs_now.y - lhs.y).abs() < 0.1, "{} vs {}", lhs_now.y, lhs.y);

            let rhs_now = estimate_next_paddle_plane_crossing(&arena, Side::Right);
            assert!((rhs_now.when + elapsed - rhs.when).abs() < 1e-3);
            assert!((rhs_now.y - rhs.y).abs() < 0.1, "{} vs {}", rhs_now.y, rhs.y);
        }
    }
}
