//! Deterministic simulation module
//!
//! All gameplay physics lives here. This module must be pure and deterministic:
//! - Event-driven time advance, no fixed substeps
//! - Seeded launches only
//! - Stable surface evaluation order
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod starter;
pub mod state;
pub mod tick;

pub use collision::{Collision, CollisionEffect, Contact, SurfaceKind, find_earliest_event};
pub use geometry::{Box2, ParametrizedLine, Plane, reflect, transform, unit};
pub use starter::{Launch, PuckLauncher, Starter};
pub use state::{Arena, Colour, Paddle, Puck, Side};
