//! Read-only simulation state passed to every steering evaluation.

use flock_core::Vec2;

/// A read-only snapshot of one tick's state.
///
/// Built once per tick by `flock-sim` and shared (immutably) across every
/// boid's steering evaluation.  All borrows live for the duration of that
/// tick's velocity phase; the simulation never mutates the arrays while a
/// snapshot is live.
#[derive(Clone, Copy)]
pub struct FlockSnapshot<'a> {
    /// Boid positions, indexed by agent.
    pub positions: &'a [Vec2],

    /// Boid velocities, indexed by agent.
    pub velocities: &'a [Vec2],

    /// Predator positions at the start of the tick.
    pub predators: &'a [Vec2],
}

impl<'a> FlockSnapshot<'a> {
    #[inline]
    pub fn new(positions: &'a [Vec2], velocities: &'a [Vec2], predators: &'a [Vec2]) -> Self {
        Self { positions, velocities, predators }
    }

    /// Number of boids in the snapshot.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
