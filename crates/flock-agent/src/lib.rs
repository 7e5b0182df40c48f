//! `flock-agent` — Structure-of-Arrays flock storage.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`store`]     | `FlockState` (parallel `positions` / `velocities` arrays) |
//! | [`builder`]   | `FlockStateBuilder` (seeded scatter or explicit arrays)   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `FlockState`.     |

pub mod builder;
pub mod store;


pub use builder::FlockStateBuilder;
pub use store::FlockState;
