//! Rendering capability handed to [`Simulation::present`][crate::Simulation::present].

use flock_core::Vec2;
use flock_predator::PredatorView;

/// Sink for one presented frame.
///
/// The simulation calls the three methods in order, once each per frame:
/// `clear`, then `plot` with every boid position, then `render` with every
/// predator.  All methods default to no-ops so a renderer only overrides what
/// it draws.
///
/// # Example — boid counter
///
/// ```rust,ignore
/// struct Counter { frames: u64, boids: usize }
///
/// impl FlockRenderer for Counter {
///     fn plot(&mut self, points: &[Vec2]) {
///         self.frames += 1;
///         self.boids = points.len();
///     }
/// }
/// ```
pub trait FlockRenderer {
    /// Start a new frame.
    fn clear(&mut self) {}

    /// Draw boid positions.
    fn plot(&mut self, _points: &[Vec2]) {}

    /// Draw predators on top of the boids and finish the frame.
    fn render(&mut self, _predators: &[PredatorView]) {}
}

/// A [`FlockRenderer`] that draws nothing.  Use for headless runs.
pub struct NoopRenderer;

impl FlockRenderer for NoopRenderer {}
