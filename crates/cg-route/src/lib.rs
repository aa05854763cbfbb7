//! `cg-route` — best-first routing over the `(position, heading)` state space.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`path`]   | `Path`, `AllPaths`                                        |
//! | [`router`] | `Router` trait, `AStarRouter`, step-cost model            |
//! | [`error`]  | `RouteError`, `RouteResult<T>`                            |
//!
//! # Why `(position, heading)`?
//!
//! The one-way street policy makes future traversal legality depend on the
//! direction a cell was entered with, so the same cell under two headings is
//! two distinct search nodes.  The heuristic is plain Manhattan distance of
//! the *positions* — headings are ignored, and every step costs at least 1,
//! so the heuristic never overestimates.

pub mod error;
pub mod path;
pub mod router;


pub use error::{RouteError, RouteResult};
pub use path::{AllPaths, Path};
pub use router::{AStarRouter, Router, path_cost, step_cost};
