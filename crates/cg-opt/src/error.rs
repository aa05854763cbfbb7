//! Optimizer-subsystem error type.

use thiserror::Error;

/// Errors produced by `cg-opt`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptError {
    /// Invalid driver parameters (population size, mutation rate, …).
    #[error("optimizer configuration error: {0}")]
    Config(String),

    /// A mean was requested over zero fitness entries — the grid has no
    /// building that reaches any service.  Guarded before dividing; never
    /// a silent NaN.
    #[error("fitness map is empty: no building reaches an emergency service")]
    EmptyFitnessMap,
}

pub type OptResult<T> = Result<T, OptError>;
