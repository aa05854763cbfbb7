//! `cg-core` — foundational types for the `citygrid` intersection optimizer.
//!
//! This crate is a dependency of every other `cg-*` crate.  It intentionally
//! has no `cg-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`cell`]    | `Cell` — the grid cell vocabulary                   |
//! | [`coord`]   | `Coord`, Manhattan distance                         |
//! | [`heading`] | `Heading`, `SearchNode`                             |
//! | [`rng`]     | `RunRng` — the single seeded RNG handle per run     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.     |

pub mod cell;
pub mod coord;
pub mod heading;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use coord::Coord;
pub use heading::{Heading, SearchNode};
pub use rng::RunRng;
