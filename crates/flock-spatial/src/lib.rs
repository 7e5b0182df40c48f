//! `flock-spatial` — uniform square-cell spatial index.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`grid`]    | `SpatialIndex`, `CellKey`                                   |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | Uses `rustc_hash::FxHashMap` for the cell map.             |

pub mod grid;


pub use grid::{CellKey, SpatialIndex};
