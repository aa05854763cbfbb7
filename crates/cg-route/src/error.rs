//! Routing-subsystem error type.
//!
//! A failed route is an *expected* outcome, not a fault: the one-way policy
//! can genuinely strand a building.  Batch callers absorb these errors into
//! skip/continue logic; only `cg-grid`'s configuration errors are fatal.

use thiserror::Error;

use cg_core::Coord;

/// Errors produced by `cg-route`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    /// The frontier emptied without satisfying the goal test.
    #[error("no route from {from} to any goal")]
    NoRoute { from: Coord },

    /// The grid contains no emergency services at all.
    #[error("grid has no emergency services")]
    NoServices,
}

pub type RouteResult<T> = Result<T, RouteError>;
