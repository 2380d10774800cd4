//! Event-driven time advance
//!
//! Advances the arena by an arbitrary `dt`, processing every collision in the
//! window in time order. Paddles move first for the whole window; the puck then
//! sweeps against the paddles' end-of-window positions.

use glam::Vec2;

use super::collision::{Collision, CollisionEffect, find_earliest_event};
use super::geometry::{reflect, unit};
use super::state::{Arena, Side};
use crate::consts::MAX_ZERO_TIME_EVENTS;

impl Arena {
    /// Earliest collision within `[0, dt]`, without mutating anything
    ///
    /// Returns `None` when the puck is stationary.
    pub fn next_collision(&self, dt: f32) -> Option<Collision> {
        if self.puck().velocity == Vec2::ZERO {
            return None;
        }
        find_earliest_event(self, dt)
    }

    /// Advance the simulation by `dt` seconds
    ///
    /// A non-positive `dt` is a no-op. Otherwise both paddles move (clamped to
    /// the arena) and the puck is swept through every collision in the window:
    /// reflections off walls and paddles, and goals, which credit the scoring
    /// side and respawn the puck.
    pub fn advance_time(&mut self, dt: f32) {
        if !(dt > 0.0) {
            return;
        }

        for side in [Side::Left, Side::Right] {
            let bounds = *self.bounds();
            let displacement = self.paddle_mut(side).advance_time(dt, &bounds);
            self.push_puck_out_of(side, displacement);
        }

        let mut remaining = dt;
        let mut zero_time_events = 0;

        while remaining > 0.0 && self.puck().velocity != Vec2::ZERO {
            let Some(collision) = find_earliest_event(self, remaining) else {
                let puck = self.puck_mut();
                puck.centre += puck.velocity * remaining;
                break;
            };

            log::trace!(
                "t+{:.6}: puck at {} touches {:?}",
                dt - remaining + collision.when,
                collision.point,
                collision.contacts
            );

            self.puck_mut().centre = collision.point;
            remaining -= collision.when;

            // every positive `when` is progress; only zero-time streaks can stall
            if collision.when == 0.0 {
                zero_time_events += 1;
            } else {
                zero_time_events = 0;
            }

            if zero_time_events > MAX_ZERO_TIME_EVENTS {
                self.unpin_puck(&collision);
                zero_time_events = 0;
                continue;
            }

            collision.apply(self);
        }
    }

    /// Stop the puck's motion along every axis it is pinned against
    ///
    /// Reached when the puck keeps colliding without time passing, e.g. when
    /// it is trapped in a gap no wider than itself between a paddle and a wall.
    /// A puck pinned on both axes is relaunched without crediting a goal.
    fn unpin_puck(&mut self, collision: &Collision) {
        log::warn!(
            "Puck pinned at {} after repeated collisions; stopping it against {:?}",
            collision.point,
            collision.contacts
        );

        if collision.scorer().is_some() {
            collision.apply(self);
            return;
        }

        let puck = self.puck_mut();
        for contact in &collision.contacts {
            match contact.effect {
                CollisionEffect::ReflectX => puck.velocity.x = 0.0,
                CollisionEffect::ReflectY => puck.velocity.y = 0.0,
                CollisionEffect::GoalLeft | CollisionEffect::GoalRight => {}
            }
        }

        if puck.velocity == Vec2::ZERO {
            log::warn!("Puck pinned on both axes; relaunching");
            self.respawn_puck();
        }
    }

    /// Restore the puck's exclusion from `side`'s paddle after the paddle moved
    ///
    /// A puck left strictly inside the paddle zone is carried to the zone's
    /// leading edge, or out through the face looking into the arena if the
    /// leading edge lies beyond the wall (or the paddle did not move).
    fn push_puck_out_of(&mut self, side: Side, displacement: f32) {
        let zone = self.paddle_zone(side);
        let free = self.puck_zone();
        let centre = self.puck().centre;
        if !zone.contains_strictly(centre) {
            return;
        }

        let carried = if displacement > 0.0 {
            Some((Vec2::new(centre.x, zone.max().y), unit::J))
        } else if displacement < 0.0 {
            Some((Vec2::new(centre.x, zone.min().y), -unit::J))
        } else {
            None
        };

        let (point, normal) = match carried {
            Some((point, normal)) if free.contains(point) => (point, normal),
            _ => match side {
                Side::Left => (Vec2::new(zone.max().x, centre.y), unit::I),
                Side::Right => (Vec2::new(zone.min().x, centre.y), -unit::I),
            },
        };

        log::debug!("{} paddle pushed puck from {centre} to {point}", side.as_str());

        let puck = self.puck_mut();
        puck.centre = point;
        if puck.velocity.dot(normal) < 0.0 {
            puck.velocity = reflect(puck.velocity, normal);
        }
    }
}
