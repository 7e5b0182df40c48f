//! `flock-predator` — predators that chase the flock.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                          |
//! |---------------|-------------------------------------------------------------------|
//! | [`strategy`]  | `PursuitStrategy` trait, `SectorVoting`, `NearestPursuit`, `Strategy` |
//! | [`agent`]     | `Predator` — smoothed motion toward the strategy's desired velocity |
//! | [`heading`]   | `Heading` — 8-way compass symbol for renderers                    |
//!
//! # Movement model
//!
//! Each tick a predator asks its strategy for a desired velocity given the
//! whole flock snapshot.  If the strategy has no target the predator holds
//! still for the tick.  Otherwise:
//!
//! ```text
//! vel = (1 − α)·vel + α·desired
//! pos = clamp(pos + vel, [0, width] × [0, height])
//! ```
//!
//! The smoothing step is shared by every strategy, so a predator never snaps
//! direction in a single tick.

pub mod agent;
pub mod heading;
pub mod strategy;


pub use agent::{Predator, PredatorView};
pub use heading::Heading;
pub use strategy::{NearestPursuit, PursuitStrategy, SectorVoting, Strategy};
