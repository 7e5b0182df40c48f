//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! The engine draws random numbers only while placing boids and predators at
//! construction time; `tick()` itself is fully deterministic.  One `SmallRng`
//! seeded from `FlockConfig::seed` therefore fixes the whole trajectory.
//!
//! Draw order at construction is: every boid position, then every boid
//! velocity, then predators in configuration order.  Changing that order
//! changes every run, so keep it stable.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::wrap_coord;

/// Simulation-level RNG for construction-time placement.
///
/// Used only in single-threaded contexts, by the simulation builder.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// A point uniformly distributed over `[0, width) × [0, height)`.
    pub fn point_in(&mut self, width: f32, height: f32) -> Vec2 {
        let x: f32 = self.random();
        let y: f32 = self.random();
        // `x * width` can round up to `width` itself; fold it back into range.
        Vec2::new(wrap_coord(x * width, width), wrap_coord(y * height, height))
    }

    /// A vector with each axis uniform in `[-half_extent, half_extent)`.
    ///
    /// Returns `Vec2::ZERO` for a zero extent instead of sampling an empty
    /// range.
    pub fn symmetric_vec(&mut self, half_extent: f32) -> Vec2 {
        if half_extent <= 0.0 {
            return Vec2::ZERO;
        }
        let x: f32 = self.random();
        let y: f32 = self.random();
        Vec2::new(x - 0.5, y - 0.5) * (2.0 * half_extent)
    }
}
