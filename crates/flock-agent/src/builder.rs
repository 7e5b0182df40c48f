//! Fluent builder for a seeded [`FlockState`].
//!
//! # Usage
//!
//! ```rust
//! use flock_agent::FlockStateBuilder;
//! use flock_core::SimRng;
//!
//! let mut rng = SimRng::new(42);
//! let state = FlockStateBuilder::new(200, 158.0, 96.0)
//!     .initial_speed(2.0)
//!     .build(&mut rng)
//!     .unwrap();
//!
//! assert_eq!(state.len(), 200);
//! ```

use flock_core::{FlockError, FlockResult, SimRng, Vec2};

use crate::FlockState;

/// Fluent builder for [`FlockState`].
///
/// Positions default to a uniform scatter over the domain and velocities to
/// a uniform draw in `[-initial_speed, initial_speed)` per axis.  Either
/// array can be supplied explicitly instead; explicit arrays consume no
/// random numbers.
pub struct FlockStateBuilder {
    count:         usize,
    width:         f32,
    height:        f32,
    initial_speed: f32,
    positions:     Option<Vec<Vec2>>,
    velocities:    Option<Vec<Vec2>>,
}

impl FlockStateBuilder {
    /// Create a builder for `count` boids on a `width × height` domain.
    pub fn new(count: usize, width: f32, height: f32) -> Self {
        Self {
            count,
            width,
            height,
            initial_speed: 0.0,
            positions:     None,
            velocities:    None,
        }
    }

    /// Half-extent of the per-axis initial velocity draw.
    pub fn initial_speed(mut self, speed: f32) -> Self {
        self.initial_speed = speed;
        self
    }

    /// Supply explicit starting positions (must be length `count`).
    pub fn positions(mut self, positions: Vec<Vec2>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Supply explicit starting velocities (must be length `count`).
    pub fn velocities(mut self, velocities: Vec<Vec2>) -> Self {
        self.velocities = Some(velocities);
        self
    }

    /// Draw (or take) both arrays.
    ///
    /// Every random position is drawn before any random velocity.
    pub fn build(self, rng: &mut SimRng) -> FlockResult<FlockState> {
        let positions = match self.positions {
            Some(p) => {
                check_len("positions", self.count, p.len())?;
                p
            }
            None => (0..self.count)
                .map(|_| rng.point_in(self.width, self.height))
                .collect(),
        };

        let velocities = match self.velocities {
            Some(v) => {
                check_len("velocities", self.count, v.len())?;
                v
            }
            None => (0..self.count)
                .map(|_| rng.symmetric_vec(self.initial_speed))
                .collect(),
        };

        FlockState::from_parts(positions, velocities)
    }
}

fn check_len(what: &str, expected: usize, got: usize) -> FlockResult<()> {
    if expected == got {
        Ok(())
    } else {
        Err(FlockError::Config(format!(
            "{what} length {got} does not match agent count {expected}"
        )))
    }
}
