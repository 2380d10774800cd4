//! Swept collision search
//!
//! The tricky part of the simulation: given a time window `dt`, find the
//! earliest instant the moving puck touches any wall, goal line or paddle edge.
//! Every body is reduced to a point-versus-box problem by inflating paddles
//! (and deflating the arena) by the puck radius, so the puck centre travels a
//! straight ray and each box edge is a finite segment on an infinite line.

use glam::{Mat2, Vec2};

use super::geometry::{Box2, ParametrizedLine, Plane, transform, unit};
use super::state::{Arena, Side};
use crate::consts::EDGE_SLACK;

/// State change applied when the puck touches a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionEffect {
    ReflectX,
    ReflectY,
    /// Puck reached the left goal line; the right side scores
    GoalLeft,
    /// Puck reached the right goal line; the left side scores
    GoalRight,
}

impl CollisionEffect {
    /// The side credited with a goal, if this effect is one
    pub fn scorer(self) -> Option<Side> {
        match self {
            CollisionEffect::GoalLeft => Some(Side::Right),
            CollisionEffect::GoalRight => Some(Side::Left),
            _ => None,
        }
    }

    /// Velocity transform for reflections
    pub fn transform(self) -> Option<Mat2> {
        match self {
            CollisionEffect::ReflectX => Some(transform::FLIP_X),
            CollisionEffect::ReflectY => Some(transform::FLIP_Y),
            _ => None,
        }
    }
}

/// Which body a surface belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    Wall,
    GoalLine,
    Paddle(Side),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

/// One surface touched at the instant of a collision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub kind: SurfaceKind,
    /// Unit normal pointing into the region the puck centre may occupy
    pub normal: Vec2,
    pub effect: CollisionEffect,
}

/// The earliest qualifying intersection within a search window
#[derive(Debug, Clone, PartialEq)]
pub struct Collision {
    /// Time from the start of the window, in `[0, dt]`
    pub when: f32,
    /// Puck centre at the moment of contact
    pub point: Vec2,
    /// Every surface touched at `when`, in evaluation order
    pub contacts: Vec<Contact>,
}

impl Collision {
    pub fn has_effect(&self, effect: CollisionEffect) -> bool {
        self.contacts.iter().any(|c| c.effect == effect)
    }

    /// The side credited with a goal by this collision, if any
    pub fn scorer(&self) -> Option<Side> {
        self.contacts.iter().find_map(|c| c.effect.scorer())
    }

    /// Apply every tied effect to the arena
    ///
    /// Reflections are applied first, each only while the puck is still
    /// heading into its surface, so two tied surfaces on the same axis flip
    /// that component once. A goal is applied last and wins: the puck is
    /// respawned regardless of any tied reflection.
    pub fn apply(&self, arena: &mut Arena) {
        for contact in &self.contacts {
            if let Some(transform) = contact.effect.transform() {
                let puck = arena.puck_mut();
                if puck.velocity.dot(contact.normal) < 0.0 {
                    puck.velocity = transform * puck.velocity;
                }
            }
        }

        if let Some(scorer) = self.scorer() {
            arena.register_goal(scorer);
        }
    }
}

/// A finite box edge the puck centre can hit
#[derive(Debug, Clone, Copy)]
struct Surface {
    plane: Plane,
    axis: Axis,
    /// Edge position along `axis`
    coordinate: f32,
    normal: Vec2,
    extent: Box2,
    kind: SurfaceKind,
    effect: CollisionEffect,
}

impl Surface {
    /// Move `point` exactly onto this surface's line
    fn snap(&self, mut point: Vec2) -> Vec2 {
        match self.axis {
            Axis::X => point.x = self.coordinate,
            Axis::Y => point.y = self.coordinate,
        }
        point
    }

    fn contact(&self) -> Contact {
        Contact {
            kind: self.kind,
            normal: self.normal,
            effect: self.effect,
        }
    }
}

/// The four edges of `b` as (plane, axis, coordinate, outward normal),
/// ordered min-y, max-y, min-x, max-x
fn edges(b: &Box2) -> [(Plane, Axis, f32, Vec2); 4] {
    let (min, max) = (b.min(), b.max());
    [
        (Plane::through(min, min + unit::I), Axis::Y, min.y, -unit::J),
        (Plane::through(max, max + unit::I), Axis::Y, max.y, unit::J),
        (Plane::through(min, min + unit::J), Axis::X, min.x, -unit::I),
        (Plane::through(max, max + unit::J), Axis::X, max.x, unit::I),
    ]
}

/// Every candidate surface, in priority order: walls, goal lines, paddles
fn surfaces(zone: &Box2, lhs: &Box2, rhs: &Box2) -> Vec<Surface> {
    let mut surfaces = Vec::with_capacity(12);

    // the puck lives inside the arena, so arena normals point inward
    let arena_extent = zone.inflate(EDGE_SLACK);
    for (i, (plane, axis, coordinate, outward)) in edges(zone).into_iter().enumerate() {
        let (kind, effect) = match i {
            0 | 1 => (SurfaceKind::Wall, CollisionEffect::ReflectY),
            2 => (SurfaceKind::GoalLine, CollisionEffect::GoalLeft),
            _ => (SurfaceKind::GoalLine, CollisionEffect::GoalRight),
        };
        surfaces.push(Surface {
            plane,
            axis,
            coordinate,
            normal: -outward,
            extent: arena_extent,
            kind,
            effect,
        });
    }

    // and outside the paddles, so paddle normals point outward
    for (side, paddle) in [(Side::Left, lhs), (Side::Right, rhs)] {
        let extent = paddle.inflate(EDGE_SLACK);
        for (plane, axis, coordinate, outward) in edges(paddle) {
            let effect = match axis {
                Axis::X => CollisionEffect::ReflectX,
                Axis::Y => CollisionEffect::ReflectY,
            };
            surfaces.push(Surface {
                plane,
                axis,
                coordinate,
                normal: outward,
                extent,
                kind: SurfaceKind::Paddle(side),
                effect,
            });
        }
    }

    surfaces
}

/// Region between the paddles with no surface to hit, or `None` if the
/// paddles are placed such that no such region exists
fn open_field(zone: &Box2, lhs: &Box2, rhs: &Box2) -> Option<Box2> {
    let min = Vec2::new(lhs.max().x.max(zone.min().x), zone.min().y) + Vec2::ONE;
    let max = Vec2::new(rhs.min().x.min(zone.max().x), zone.max().y) - Vec2::ONE;
    let field = Box2::try_new(min, max)?;
    (!field.intersects(lhs) && !field.intersects(rhs)).then_some(field)
}

/// Find the earliest collision of the puck within `[0, dt]`
///
/// Returns `None` if the puck travels for the whole window untouched.
///
/// # Panics
/// Panics if the puck is not moving.
pub fn find_earliest_event(arena: &Arena, dt: f32) -> Option<Collision> {
    let puck = arena.puck();
    assert!(
        puck.velocity != Vec2::ZERO,
        "collision search requires a moving puck"
    );

    let zone = arena.puck_zone();
    let lhs = arena.paddle_zone(Side::Left);
    let rhs = arena.paddle_zone(Side::Right);

    // a trajectory contained in the open field cannot touch anything
    if let Some(field) = open_field(&zone, &lhs, &rhs) {
        let end = puck.centre + puck.velocity * dt;
        if field.contains(puck.centre) && field.contains(end) {
            return None;
        }
    }

    scan_surfaces(puck.centre, puck.velocity, dt, &zone, &lhs, &rhs)
}

fn scan_surfaces(
    centre: Vec2,
    velocity: Vec2,
    dt: f32,
    zone: &Box2,
    lhs: &Box2,
    rhs: &Box2,
) -> Option<Collision> {
    // parametrized by time: trajectory.point_at(t) is the centre after t seconds
    let trajectory = ParametrizedLine::new(centre, velocity);
    let mut earliest: Option<Collision> = None;

    for surface in surfaces(zone, lhs, rhs) {
        // only surfaces the puck is heading into; the rest lie behind it or
        // run parallel to it
        if velocity.dot(surface.normal) >= 0.0 {
            continue;
        }

        let when = trajectory.intersection_parameter(&surface.plane);
        if when.is_nan() || when < 0.0 || when > dt {
            continue;
        }

        // the edge is a segment, not an infinite line
        let point = surface.snap(trajectory.point_at(when));
        if !surface.extent.contains(point) {
            continue;
        }

        match earliest.as_mut() {
            Some(collision) if when > collision.when => continue,
            Some(collision) if when == collision.when => {
                collision.point = surface.snap(collision.point);
                collision.contacts.push(surface.contact());
                continue;
            }
            _ => {}
        }

        earliest = Some(Collision {
            when,
            point,
            contacts: vec![surface.contact()],
        });
    }

    debug_assert!(earliest.as_ref().is_none_or(|c| c.when <= dt));
    earliest
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// ±100 arena, radius 5 puck at the origin, tiny paddles out of the way
    fn test_arena() -> Arena {
        let mut arena = Arena::new(|| -> (f32, Vec2) { (0.0, Vec2::new(1.0, 0.0)) });
        arena.set_bounds(Box2::new(Vec2::splat(-100.0), Vec2::splat(100.0)));
        arena.puck_mut().centre = Vec2::ZERO;
        arena.puck_mut().radius = 5.0;
        let unit_box = Box2::new(Vec2::ZERO, Vec2::ONE);
        arena.paddle_mut(Side::Left).bounds = unit_box.translated(Vec2::new(-75.0, -90.0));
        arena.paddle_mut(Side::Right).bounds = unit_box.translated(Vec2::new(75.0, 90.0));
        arena
    }

    #[test]
    fn test_horizontal_and_vertical_collisions_with_arena() {
        let mut arena = test_arena();
        for x in [-1.0, 0.0, 1.0] {
            for y in [-1.0, 0.0, 1.0] {
                if x == 0.0 && y == 0.0 {
                    continue;
                }
                let velocity = Vec2::new(x, y);
                arena.puck_mut().velocity = velocity;

                assert!(
                    find_earliest_event(&arena, 94.0).is_none(),
                    "unexpected collision for {velocity}"
                );
                let collision = find_earliest_event(&arena, 96.0)
                    .unwrap_or_else(|| panic!("no collision for {velocity}"));
                assert!((collision.when - 95.0).abs() < 1e-4);
                assert!(collision.point.abs_diff_eq(velocity * 95.0, 1e-3));
            }
        }
    }

    #[test]
    fn test_corner_of_arena_composes_wall_and_goal() {
        let mut arena = test_arena();
        arena.puck_mut().velocity = Vec2::new(1.0, 1.0);
        let collision = find_earliest_event(&arena, 96.0).expect("collision");
        assert_eq!(collision.contacts.len(), 2);
        assert!(collision.has_effect(CollisionEffect::ReflectY));
        assert!(collision.has_effect(CollisionEffect::GoalRight));
        assert_eq!(collision.scorer(), Some(Side::Left));
        assert_eq!(collision.point, Vec2::new(95.0, 95.0));
    }

    #[test]
    fn test_paddle_face_hit() {
        let mut arena = test_arena();
        arena.paddle_mut(Side::Right).bounds =
            Box2::new(Vec2::new(50.0, -50.0), Vec2::new(60.0, 50.0));
        arena.puck_mut().velocity = Vec2::new(1.0, 0.0);

        assert!(find_earliest_event(&arena, 44.0).is_none());
        let collision = find_earliest_event(&arena, 46.0).expect("collision");
        assert_eq!(collision.when, 45.0);
        assert_eq!(collision.point, Vec2::new(45.0, 0.0));
        assert_eq!(collision.contacts.len(), 1);
        assert_eq!(collision.contacts[0].kind, SurfaceKind::Paddle(Side::Right));
        assert_eq!(collision.contacts[0].effect, CollisionEffect::ReflectX);
        assert_eq!(collision.contacts[0].normal, -unit::I);
    }

    #[test]
    fn test_paddle_corner_hit_is_a_tie() {
        let mut arena = test_arena();
        arena.paddle_mut(Side::Right).bounds =
            Box2::new(Vec2::new(50.0, -50.0), Vec2::new(60.0, 50.0));
        arena.puck_mut().centre = Vec2::new(35.0, -65.0);
        arena.puck_mut().velocity = Vec2::new(1.0, 1.0);

        let collision = find_earliest_event(&arena, 20.0).expect("collision");
        assert_eq!(collision.when, 10.0);
        assert_eq!(collision.point, Vec2::new(45.0, -55.0));
        assert!(collision.has_effect(CollisionEffect::ReflectX));
        assert!(collision.has_effect(CollisionEffect::ReflectY));
    }

    #[test]
    fn test_surfaces_behind_the_puck_are_ignored() {
        let mut arena = test_arena();
        arena.paddle_mut(Side::Right).bounds =
            Box2::new(Vec2::new(50.0, -50.0), Vec2::new(60.0, 50.0));
        // beyond the paddle, moving away from it
        arena.puck_mut().centre = Vec2::new(80.0, 0.0);
        arena.puck_mut().velocity = Vec2::new(1.0, 0.0);

        let collision = find_earliest_event(&arena, 100.0).expect("collision");
        assert_eq!(collision.when, 15.0);
        assert!(collision.has_effect(CollisionEffect::GoalRight));
    }

    #[test]
    fn test_grazing_an_edge_is_not_a_hit() {
        let mut arena = test_arena();
        arena.paddle_mut(Side::Right).bounds =
            Box2::new(Vec2::new(50.0, -50.0), Vec2::new(60.0, 50.0));
        // sliding exactly along the inflated top edge: parallel to it, then
        // touching the face only at its corner
        arena.puck_mut().centre = Vec2::new(0.0, -55.0);
        arena.puck_mut().velocity = Vec2::new(1.0, 0.0);

        let collision = find_earliest_event(&arena, 100.0).expect("collision");
        assert_eq!(collision.when, 45.0);
        assert_eq!(collision.contacts.len(), 1);
        assert_eq!(collision.contacts[0].effect, CollisionEffect::ReflectX);
    }

    #[test]
    fn test_collision_at_time_zero() {
        let mut arena = test_arena();
        arena.puck_mut().centre = Vec2::new(0.0, 95.0);
        arena.puck_mut().velocity = Vec2::new(3.0, 4.0);

        let collision = find_earliest_event(&arena, 1.0).expect("collision");
        assert_eq!(collision.when, 0.0);
        assert_eq!(collision.contacts[0].kind, SurfaceKind::Wall);

        // already reflected: moving away from the wall it sits on
        arena.puck_mut().velocity = Vec2::new(3.0, -4.0);
        assert!(find_earliest_event(&arena, 1.0).is_none());
    }

    #[test]
    fn test_apply_reflects_once_per_axis() {
        let mut arena = test_arena();
        arena.puck_mut().velocity = Vec2::new(2.0, -3.0);
        let collision = Collision {
            when: 0.0,
            point: Vec2::ZERO,
            contacts: vec![
                Contact {
                    kind: SurfaceKind::Wall,
                    normal: unit::J,
                    effect: CollisionEffect::ReflectY,
                },
                Contact {
                    kind: SurfaceKind::Paddle(Side::Left),
                    normal: unit::J,
                    effect: CollisionEffect::ReflectY,
                },
            ],
        };
        collision.apply(&mut arena);
        assert_eq!(arena.puck().velocity, Vec2::new(2.0, 3.0));
    }

    #[test]
    fn test_apply_goal_wins_over_reflection() {
        let mut arena = test_arena();
        arena.puck_mut().velocity = Vec2::new(1.0, 1.0);
        let collision = find_earliest_event(&arena, 96.0).expect("collision");
        collision.apply(&mut arena);
        assert_eq!(arena.lhs_score(), 1);
        assert_eq!(arena.rhs_score(), 0);
        // fresh launch from the injected launcher
        assert_eq!(arena.puck().velocity, Vec2::new(1.0, 0.0));
        assert_eq!(arena.puck().centre, Vec2::new(0.0, 0.0));
    }

    #[test]
    #[should_panic(expected = "moving puck")]
    fn test_stationary_puck_is_rejected() {
        let mut arena = test_arena();
        arena.puck_mut().velocity = Vec2::ZERO;
        let _ = find_earliest_event(&arena, 1.0);
    }

    #[test]
    fn test_open_field_requires_clear_space() {
        let zone = Box2::new(Vec2::splat(-95.0), Vec2::splat(95.0));
        let lhs = Box2::new(Vec2::new(-80.0, -10.0), Vec2::new(-70.0, 10.0));
        let rhs = Box2::new(Vec2::new(70.0, -10.0), Vec2::new(80.0, 10.0));
        let field = open_field(&zone, &lhs, &rhs).expect("field");
        assert_eq!(field.min(), Vec2::new(-69.0, -94.0));
        assert_eq!(field.max(), Vec2::new(69.0, 94.0));

        // paddles swapped over: nothing between them
        assert!(open_field(&zone, &rhs, &lhs).is_none());
    }

    proptest! {
        #[test]
        fn open_field_shortcut_matches_full_scan(
            x in 30.0f32..610.0,
            y in 15.0f32..465.0,
            vx in -300.0f32..300.0,
            vy in -300.0f32..300.0,
            dt in 0.0f32..2.0,
        ) {
            prop_assume!(vx != 0.0 || vy != 0.0);
            let mut arena = Arena::new(|| -> (f32, Vec2) { (240.0, Vec2::new(100.0, 50.0)) });
            arena.puck_mut().centre = Vec2::new(x, y);
            arena.puck_mut().velocity = Vec2::new(vx, vy);

            let zone = arena.puck_zone();
            let lhs = arena.paddle_zone(Side::Left);
            let rhs = arena.paddle_zone(Side::Right);
            let full = scan_surfaces(Vec2::new(x, y), Vec2::new(vx, vy), dt, &zone, &lhs, &rhs);
            prop_assert_eq!(find_earliest_event(&arena, dt), full);
        }
    }
}
