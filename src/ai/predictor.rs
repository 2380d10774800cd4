//! AI paddle controller
//!
//! Steers a paddle towards the estimated crossing point plus a random aim
//! error. The error is drawn once per puck direction change, so a higher
//! spread makes a weaker opponent without making the paddle jitter.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::estimator::estimate_next_paddle_plane_crossing;
use super::z_scores::Z_SCORES;
use crate::consts::{AI_DEAD_ZONE, AI_MAX_PADDLE_SPEED, AI_SPEED_TOLERANCE, PADDLE_WALL_MARGIN};
use crate::settings::Settings;
use crate::sim::{Arena, Side};

/// Seeded AI controller for one paddle
#[derive(Debug, Clone)]
pub struct Predictor {
    rng: Pcg32,
    /// Scale of the aim error: one standard deviation, in arena units
    spread: f32,
    max_speed: f32,
    aim_offset: f32,
    /// Puck x-direction the current aim offset was drawn for
    heading: Option<bool>,
}

impl Predictor {
    pub fn new(rng: Pcg32, spread: f32, max_speed: f32) -> Self {
        Self {
            rng,
            spread: spread.max(0.0),
            max_speed,
            aim_offset: 0.0,
            heading: None,
        }
    }

    /// Controller whose aim error matches the configured skill
    pub fn from_settings(seed: u64, settings: &Settings, puck_radius: f32) -> Self {
        Self::new(
            Pcg32::seed_from_u64(seed),
            settings.ai_spread(puck_radius),
            AI_MAX_PADDLE_SPEED,
        )
    }

    #[inline]
    pub fn spread(&self) -> f32 {
        self.spread
    }

    #[inline]
    pub fn aim_offset(&self) -> f32 {
        self.aim_offset
    }

    /// Draw a normally distributed aim error by inverting the percentile table
    fn draw_aim_offset(&mut self) -> f32 {
        let z = Z_SCORES[self.rng.random_range(0..Z_SCORES.len())];
        let sign = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        sign * z * self.spread
    }

    /// Velocity to give `side`'s paddle, or `None` to leave it unchanged
    ///
    /// Call once per frame before advancing the arena. Returns `Some(0.0)` to
    /// stop a moving paddle when there is nothing to chase.
    pub fn paddle_speed(&mut self, arena: &Arena, side: Side) -> Option<f32> {
        let heading = arena.puck().velocity.x > 0.0;
        if self.heading != Some(heading) {
            self.heading = Some(heading);
            self.aim_offset = self.draw_aim_offset();
            log::trace!("{} AI aim offset {:.2}", side.as_str(), self.aim_offset);
        }

        let paddle = arena.paddle(side);
        let current = paddle.velocity.y;
        let crossing = estimate_next_paddle_plane_crossing(arena, side);
        if crossing.when <= 0.0 {
            return (current != 0.0).then_some(0.0);
        }

        // keep the target where the paddle centre can actually get to
        let bounds = arena.bounds();
        let half = paddle.height() / 2.0;
        let lowest = bounds.min().y + PADDLE_WALL_MARGIN + half;
        let highest = (bounds.max().y - PADDLE_WALL_MARGIN - half).max(lowest);
        let target = (crossing.y + self.aim_offset).clamp(lowest, highest);

        let gap = target - paddle.bounds.centre().y;
        let desired = if gap.abs() <= AI_DEAD_ZONE {
            0.0
        } else {
            (gap / crossing.when).clamp(-self.max_speed, self.max_speed)
        };

        let settled = if desired == 0.0 {
            current == 0.0
        } else {
            (desired - current).abs() <= AI_SPEED_TOLERANCE
        };
        (!settled).then_some(desired)
    }
}
