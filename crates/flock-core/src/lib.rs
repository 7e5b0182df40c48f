//! `flock-core` — foundational types for the flock simulation workspace.
//!
//! Every other `flock-*` crate depends on this one.  It has no `flock-*`
//! dependencies and minimal external ones (`glam`, `rand`, `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`ids`]         | `PredatorId`                                              |
//! | [`time`]        | `Tick`                                                    |
//! | [`rng`]         | `SimRng` (seeded placement RNG)                           |
//! | [`config`]      | `FlockConfig`, `RuleConfig`, `BoundaryConfig`, predators  |
//! | [`error`]       | `FlockError`, `FlockResult`                               |
//! | [`math`]        | `EPSILON`, toroidal `wrap_coord`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod math;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    BoundaryConfig, FlockConfig, Placement, PredatorConfig, RuleConfig, StrategyKind,
};
pub use error::{FlockError, FlockResult};
pub use glam::Vec2;
pub use ids::PredatorId;
pub use math::{EPSILON, wrap_coord};
pub use rng::SimRng;
pub use time::Tick;

