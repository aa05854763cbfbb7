//! Grid-subsystem error type.

use thiserror::Error;

/// Errors produced by `cg-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    /// Invalid dimensions or entity counts at generation time.  Fatal —
    /// surfaced to the caller immediately, never absorbed.
    #[error("grid configuration error: {0}")]
    Config(String),

    /// Malformed ASCII grid art passed to `Grid::from_ascii`.
    #[error("grid parse error: {0}")]
    Parse(String),
}

pub type GridResult<T> = Result<T, GridError>;
