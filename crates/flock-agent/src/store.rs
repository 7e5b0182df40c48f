//! Core flock storage: `FlockState`.
//!
//! # Layout
//!
//! Two parallel `Vec<Vec2>` arrays instead of a `Vec<Boid>`.  The per-tick
//! hot loop reads positions for every candidate neighbor but velocities only
//! for alignment, so keeping them apart keeps the position scan dense:
//!
//! ```ignore
//! let p = state.positions[i];  // O(1), cache-friendly
//! ```

use flock_core::{FlockError, FlockResult, Vec2};

/// Structure-of-Arrays storage for every boid.
///
/// Both `Vec`s always have the same length; a boid's index is its slot in
/// both.  Agents are never inserted or removed after construction.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlockState {
    pub positions:  Vec<Vec2>,
    pub velocities: Vec<Vec2>,
}

impl FlockState {
    /// Wrap pre-built arrays, checking that their lengths agree.
    pub fn from_parts(positions: Vec<Vec2>, velocities: Vec<Vec2>) -> FlockResult<Self> {
        if positions.len() != velocities.len() {
            return Err(FlockError::Config(format!(
                "{} positions but {} velocities",
                positions.len(),
                velocities.len()
            )));
        }
        Ok(Self { positions, velocities })
    }

    /// Number of boids.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// `true` if there are no boids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
