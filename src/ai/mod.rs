//! AI paddle control
//!
//! The controller reads the arena only through its public queries: it never
//! mutates the simulation, it returns a paddle velocity for the caller to set.

pub mod estimator;
pub mod oscillation;
pub mod predictor;
pub mod z_scores;

pub use estimator::{PlaneCrossing, estimate_next_paddle_plane_crossing};
pub use oscillation::{linear_oscillation, linear_oscillation_inverse};
pub use predictor::Predictor;
pub use z_scores::{Z_SCORES, z_score};
