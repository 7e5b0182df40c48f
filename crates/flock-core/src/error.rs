//! Workspace error type.
//!
//! Sub-crates may define their own error enums and convert `FlockError` into
//! them via `#[from]`, the way `flock-sim` does with `SimError`.

use thiserror::Error;

/// The top-level error type for `flock-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FlockError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `flock-*` crates.
pub type FlockResult<T> = Result<T, FlockError>;
