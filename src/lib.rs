//! Sweep Pong - a two-paddle arena with continuous collision detection
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, swept collisions, event loop)
//! - `ai`: Puck-crossing estimator and AI paddle controller
//! - `settings`: User-tunable configuration persisted as JSON

pub mod ai;
pub mod settings;
pub mod sim;

pub use ai::{PlaneCrossing, Predictor, estimate_next_paddle_plane_crossing};
pub use settings::{Settings, SettingsError};
pub use sim::{Arena, Box2, Collision, CollisionEffect, Paddle, Puck, Side, Starter};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep of the demo driver (60 Hz, one frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Default arena box: (10,10)-(630,470)
    pub const DEFAULT_ARENA_MIN: Vec2 = Vec2::new(10.0, 10.0);
    pub const DEFAULT_ARENA_SIZE: Vec2 = Vec2::new(620.0, 460.0);

    /// Puck defaults
    pub const PUCK_RADIUS: f32 = 5.0;

    /// Paddle defaults
    pub const LHS_PADDLE_X: f32 = 18.0;
    pub const RHS_PADDLE_X: f32 = 618.0;
    pub const PADDLE_WIDTH: f32 = 4.0;
    pub const PADDLE_DEFAULT_Y: f32 = 220.0;
    pub const PADDLE_SIZE_DEFAULT: f32 = 40.0;
    /// Gap kept between a paddle and the top/bottom walls
    pub const PADDLE_WALL_MARGIN: f32 = 1.0;

    /// Slack added to surface extents when testing a hit point, absorbing
    /// rounding on trajectories that pass a box corner
    pub const EDGE_SLACK: f32 = 1e-3;

    /// Consecutive zero-time collisions before the puck counts as pinned
    pub const MAX_ZERO_TIME_EVENTS: u32 = 8;

    /// AI paddle limits
    pub const AI_MAX_PADDLE_SPEED: f32 = 400.0;
    /// Distance from the target within which the AI holds still
    pub const AI_DEAD_ZONE: f32 = 1.0;
    /// Speed difference below which the AI leaves the paddle velocity alone
    pub const AI_SPEED_TOLERANCE: f32 = 5.0;
}
