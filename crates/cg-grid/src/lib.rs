//! `cg-grid` — the city grid model and everything that mutates it.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`grid`]     | `Grid` (row-major cell lattice), ASCII parse/render    |
//! | [`generate`] | `generate_border_grid`, `seed_intersections`           |
//! | [`moves`]    | `neighbors` — the one-way traversal policy             |
//! | [`mutate`]   | `generate_neighbor`, `normalize_intersections`         |
//! | [`error`]    | `GridError`, `GridResult<T>`                           |
//!
//! # The one-way street model
//!
//! Even rows hold buildings and emergency services; odd rows are one-way
//! horizontal corridors whose direction depends on how a vehicle entered
//! them.  Intersections are the only cells permitting turns.  The full
//! policy lives in [`moves::neighbors`].
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.         |

pub mod error;
pub mod generate;
pub mod grid;
pub mod moves;
pub mod mutate;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use generate::{generate_border_grid, seed_intersections};
pub use grid::Grid;
pub use moves::neighbors;
pub use mutate::{generate_neighbor, normalize_intersections};
