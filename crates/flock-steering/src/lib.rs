//! `flock-steering` — the per-boid velocity update.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`snapshot`]  | `FlockSnapshot<'a>` — read-only tick snapshot shared by all boids |
//! | [`rules`]     | `SteeringRules` — cohesion, alignment, separation, avoidance    |
//! | [`boundary`]  | `BoundaryPolicy` — `Wrap` or `CircularContain`                  |
//!
//! # Design notes
//!
//! [`SteeringRules::steer`] is a pure function of one boid's candidate list
//! and the frozen snapshot.  It never writes to the snapshot, so every boid
//! in a tick sees the same frame and the caller may evaluate boids in any
//! order, or in parallel, without changing the result.

pub mod boundary;
pub mod rules;
pub mod snapshot;


pub use boundary::BoundaryPolicy;
pub use rules::SteeringRules;
pub use snapshot::FlockSnapshot;
