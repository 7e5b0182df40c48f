//! `flock-sim` — tick loop orchestrator for the flock simulation workspace.
//!
//! # Tick loop
//!
//! ```text
//! every tick:
//!   ① Index      — rebuild the uniform grid from current positions.
//!   ② Steering   — new velocity for every boid from the frozen snapshot
//!                  (parallel with the `parallel` feature).
//!   ③ Predators  — each predator moves against the same position snapshot.
//!   ④ Integrate  — positions += new velocities.
//!   ⑤ Boundary   — Wrap folds positions back into the domain;
//!                  CircularContain has no hard transform.
//!   ⑥ Commit     — new velocities replace the old; the tick counter advances.
//! ```
//!
//! A tick never fails: every runtime edge case (coincident boids, empty
//! neighborhoods, predators without a target) is handled by policy.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the steering pass on Rayon's thread pool.         |
//! | `fx-hash`  | FxHash for the spatial index cell map.                 |
//!
//! # Quick-start
//!
//! ```rust
//! use flock_core::FlockConfig;
//! use flock_sim::{NoopRenderer, SimBuilder};
//!
//! let mut sim = SimBuilder::new(FlockConfig::default()).build().unwrap();
//! sim.run_ticks(10, &mut NoopRenderer);
//! assert_eq!(sim.current_tick().0, 10);
//! ```

pub mod builder;
pub mod error;
pub mod renderer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use flock_predator::{Heading, PredatorView};
pub use renderer::{FlockRenderer, NoopRenderer};
pub use sim::Simulation;
