//! A single predator: position, velocity and the strategy steering it.

use flock_core::{PredatorConfig, Vec2};

use crate::heading::Heading;
use crate::strategy::{PursuitStrategy, Strategy};

/// Read-only summary handed to renderers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PredatorView {
    pub position: Vec2,
    pub heading:  Heading,
}

/// A predator moving inside the `[0, width] × [0, height]` rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct Predator {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Magnitude of the desired velocity handed back by the strategy.
    pub cruise_speed: f32,
    /// Blend factor `α ∈ [0, 1]` toward the desired velocity.
    pub smoothing: f32,
    pub strategy: Strategy,
}

impl Predator {
    pub fn new(position: Vec2, velocity: Vec2, cruise_speed: f32, smoothing: f32, strategy: Strategy) -> Self {
        Self { position, velocity, cruise_speed, smoothing, strategy }
    }

    /// Build a predator from a config that has passed
    /// [`FlockConfig::validate`](flock_core::FlockConfig::validate), at a
    /// resolved starting position and velocity.
    pub fn from_config(cfg: &PredatorConfig, position: Vec2, velocity: Vec2) -> Self {
        Self::new(
            position,
            velocity,
            cfg.cruise_speed,
            cfg.smoothing,
            Strategy::from_kind(cfg.strategy, cfg.range),
        )
    }

    /// Advance one tick against the flock snapshot.
    ///
    /// Returns `false` when the strategy found no target; position and
    /// velocity are then left untouched.
    pub fn update(&mut self, flock: &[Vec2], width: f32, height: f32) -> bool {
        let Some(desired) = self.strategy.desired_velocity(self.position, flock, self.cruise_speed) else {
            log::debug!("predator at {} holds: no target", self.position);
            return false;
        };
        let a = self.smoothing;
        self.velocity = self.velocity * (1.0 - a) + desired * a;
        self.position = (self.position + self.velocity).clamp(Vec2::ZERO, Vec2::new(width, height));
        true
    }

    #[inline]
    pub fn heading(&self) -> Heading {
        Heading::from_velocity(self.velocity)
    }

    /// Arrow glyph for the current heading, `'?'` when stationary.
    #[inline]
    pub fn direction_char(&self) -> char {
        self.heading().symbol()
    }

    pub fn view(&self) -> PredatorView {
        PredatorView { position: self.position, heading: self.heading() }
    }
}
