//! Puck launch generation
//!
//! The arena asks a [`PuckLauncher`] for a spawn height and velocity whenever
//! the puck must (re)spawn. Launchers are injected so the simulation stays
//! deterministic for a given seed.

use std::f32::consts::PI;
use std::ops::Range;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::geometry::transform;

/// A freshly drawn spawn position (y only; x is always the arena mid-line) and velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Launch {
    pub y: f32,
    pub velocity: Vec2,
}

/// Source of puck launches
pub trait PuckLauncher {
    fn launch(&mut self) -> Launch;
}

impl<F> PuckLauncher for F
where
    F: FnMut() -> (f32, Vec2),
{
    fn launch(&mut self) -> Launch {
        let (y, velocity) = self();
        Launch { y, velocity }
    }
}

/// Seeded launcher drawing a random diagonal direction, speed and spawn height
#[derive(Debug, Clone)]
pub struct Starter {
    rng: Pcg32,
    /// Angle off the x axis (radians)
    pub theta: Range<f32>,
    pub speed: Range<f32>,
    pub spawn_y: Range<f32>,
}

impl Starter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            theta: PI / 8.0..PI * 3.0 / 8.0,
            speed: 150.0..250.0,
            spawn_y: 20.0..460.0,
        }
    }

    /// Restrict spawn heights to `spawn_y` (e.g. for a non-default arena)
    pub fn with_spawn_range(mut self, spawn_y: Range<f32>) -> Self {
        self.spawn_y = spawn_y;
        self
    }

    fn sign(&mut self) -> f32 {
        if self.rng.random_bool(0.5) { 1.0 } else { -1.0 }
    }
}

impl PuckLauncher for Starter {
    fn launch(&mut self) -> Launch {
        let theta = self.rng.random_range(self.theta.clone());
        let signs = Vec2::new(self.sign(), self.sign());
        let y = self.rng.random_range(self.spawn_y.clone());
        let speed = self.rng.random_range(self.speed.clone());
        let direction = transform::rot(theta) * Vec2::X;
        Launch {
            y,
            velocity: direction * signs * speed,
        }
    }
}
