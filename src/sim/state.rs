//! Arena state and body types
//!
//! The arena is the sole owner of the puck and both paddles. External
//! controllers (human input, AI) only ever set paddle velocities between calls
//! to [`Arena::advance_time`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Box2;
use super::starter::{Launch, PuckLauncher};
use crate::consts::*;

/// RGBA colour bytes
pub type Colour = [u8; 4];

/// Which end of the arena a paddle (or goal) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// The puck
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Puck {
    pub centre: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub colour: Colour,
}

impl Default for Puck {
    fn default() -> Self {
        Self {
            centre: DEFAULT_ARENA_MIN + DEFAULT_ARENA_SIZE * 0.5,
            velocity: Vec2::ZERO,
            radius: PUCK_RADIUS,
            colour: [0, 255, 0, 255],
        }
    }
}

/// A paddle; moves vertically only
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub bounds: Box2,
    pub velocity: Vec2,
    pub colour: Colour,
}

impl Paddle {
    /// Default paddle for the given side of the default arena
    pub fn default_for(side: Side) -> Self {
        let x = match side {
            Side::Left => LHS_PADDLE_X,
            Side::Right => RHS_PADDLE_X,
        };
        let colour = match side {
            Side::Left => [0, 0, 255, 255],
            Side::Right => [255, 0, 0, 255],
        };
        Self {
            bounds: Box2::from_min_size(
                Vec2::new(x, PADDLE_DEFAULT_Y),
                Vec2::new(PADDLE_WIDTH, PADDLE_SIZE_DEFAULT),
            ),
            velocity: Vec2::ZERO,
            colour,
        }
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bounds.height()
    }

    /// Move at the paddle's own velocity for `dt`, clamped inside `arena`
    ///
    /// The paddle stops [`PADDLE_WALL_MARGIN`] short of the top and bottom
    /// walls; reaching either limit zeroes its velocity. Returns the vertical
    /// displacement actually applied.
    pub fn advance_time(&mut self, dt: f32, arena: &Box2) -> f32 {
        if self.velocity.y == 0.0 {
            return 0.0;
        }

        let height = self.height();
        let lowest = arena.min().y + PADDLE_WALL_MARGIN;
        let highest = arena.max().y - height - PADDLE_WALL_MARGIN;
        let wanted = self.bounds.min().y + self.velocity.y * dt;
        let min_y = wanted.clamp(lowest, highest.max(lowest));

        if min_y != wanted {
            log::debug!("paddle clamped at y={min_y}");
            self.velocity = Vec2::ZERO;
        }

        let displacement = min_y - self.bounds.min().y;
        self.bounds = self.bounds.with_y_extent(min_y, height);
        displacement
    }
}

/// The playing field: owns the puck, both paddles and the score
pub struct Arena {
    bounds: Box2,
    puck: Puck,
    lhs_paddle: Paddle,
    rhs_paddle: Paddle,
    lhs_score: u32,
    rhs_score: u32,
    launcher: Box<dyn PuckLauncher>,
}

impl std::fmt::Debug for Arena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arena")
            .field("bounds", &self.bounds)
            .field("puck", &self.puck)
            .field("lhs_paddle", &self.lhs_paddle)
            .field("rhs_paddle", &self.rhs_paddle)
            .field("lhs_score", &self.lhs_score)
            .field("rhs_score", &self.rhs_score)
            .finish_non_exhaustive()
    }
}

impl Arena {
    /// Create the default arena and spawn the puck from `launcher`
    pub fn new(launcher: impl PuckLauncher + 'static) -> Self {
        let mut arena = Self {
            bounds: Box2::from_min_size(DEFAULT_ARENA_MIN, DEFAULT_ARENA_SIZE),
            puck: Puck::default(),
            lhs_paddle: Paddle::default_for(Side::Left),
            rhs_paddle: Paddle::default_for(Side::Right),
            lhs_score: 0,
            rhs_score: 0,
            launcher: Box::new(launcher),
        };
        arena.respawn_puck();
        arena
    }

    #[inline]
    pub fn bounds(&self) -> &Box2 {
        &self.bounds
    }

    /// Replace the arena bounds (paddles and puck are left where they are)
    pub fn set_bounds(&mut self, bounds: Box2) {
        self.bounds = bounds;
    }

    #[inline]
    pub fn centre(&self) -> Vec2 {
        self.bounds.centre()
    }

    /// Region the puck centre must stay within: the arena deflated by the puck radius
    pub fn puck_zone(&self) -> Box2 {
        self.bounds.inflate(-self.puck.radius)
    }

    /// Region the puck centre must stay out of: `side`'s paddle inflated by the puck radius
    pub fn paddle_zone(&self, side: Side) -> Box2 {
        self.paddle(side).bounds.inflate(self.puck.radius)
    }

    #[inline]
    pub fn puck(&self) -> &Puck {
        &self.puck
    }

    #[inline]
    pub fn puck_mut(&mut self) -> &mut Puck {
        &mut self.puck
    }

    #[inline]
    pub fn lhs_paddle(&self) -> &Paddle {
        &self.lhs_paddle
    }

    #[inline]
    pub fn rhs_paddle(&self) -> &Paddle {
        &self.rhs_paddle
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.lhs_paddle,
            Side::Right => &self.rhs_paddle,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.lhs_paddle,
            Side::Right => &mut self.rhs_paddle,
        }
    }

    #[inline]
    pub fn lhs_score(&self) -> u32 {
        self.lhs_score
    }

    #[inline]
    pub fn rhs_score(&self) -> u32 {
        self.rhs_score
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.lhs_score,
            Side::Right => self.rhs_score,
        }
    }

    /// Zero both scores (an explicit user action; play never decrements a score)
    pub fn reset_scores(&mut self) {
        self.lhs_score = 0;
        self.rhs_score = 0;
    }

    /// The side that has reached `winning_score`, if any
    pub fn winner(&self, winning_score: u32) -> Option<Side> {
        if self.lhs_score >= winning_score {
            Some(Side::Left)
        } else if self.rhs_score >= winning_score {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn in_play(&self, winning_score: u32) -> bool {
        self.winner(winning_score).is_none()
    }

    /// Resize both paddles to `height`, re-centred on the arena's mid-line
    pub fn set_paddle_size(&mut self, height: f32) {
        let min_y = self.centre().y - height / 2.0;
        for side in [Side::Left, Side::Right] {
            let paddle = self.paddle_mut(side);
            paddle.bounds = paddle.bounds.with_y_extent(min_y, height);
        }
    }

    /// Credit a goal to `scorer`, then respawn the puck
    pub(crate) fn register_goal(&mut self, scorer: Side) {
        match scorer {
            Side::Left => self.lhs_score += 1,
            Side::Right => self.rhs_score += 1,
        }
        log::info!(
            "Goal for {}: {} - {}",
            scorer.as_str(),
            self.lhs_score,
            self.rhs_score
        );
        self.respawn_puck();
    }

    /// Place the puck on the arena mid-line with a freshly drawn launch
    pub fn respawn_puck(&mut self) {
        let Launch { y, velocity } = self.launcher.launch();
        let zone = self.puck_zone();
        let y = y.clamp(zone.min().y, zone.max().y);
        self.puck.centre = Vec2::new(self.centre().x, y);
        self.puck.velocity = velocity;
        log::debug!("Puck respawned at {} moving {}", self.puck.centre, velocity);
    }
}
