//! `cg-opt` — optimization drivers over the city grid.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`fitness`]  | `FitnessWeights`, `fitness`, `mean_cost`                 |
//! | [`merge`]    | `best_path_retention` — per-building crossover           |
//! | [`hill`]     | `hill_climb`, `HillClimbConfig`                          |
//! | [`genetic`]  | `genetic_optimize`, `GeneticConfig`                      |
//! | [`observer`] | `SearchObserver`, `NoopObserver`                         |
//! | [`solution`] | `Solution` — the (grid, paths, score) result triple      |
//! | [`error`]    | `OptError`, `OptResult<T>`                               |
//!
//! # Search-over-search
//!
//! Both drivers repeat the same inner cycle: perturb the intersection
//! layout, re-route every building via [`cg_route::Router`], score the
//! result, and keep or discard.  Paths and fitness maps are always
//! recomputed from scratch after a grid changes — never patched
//! incrementally.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Rayon-parallel population evaluation in the genetic     |
//! |            | driver (the generation boundary remains a barrier).     |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.      |

pub mod error;
pub mod fitness;
pub mod genetic;
pub mod hill;
pub mod merge;
pub mod observer;
pub mod solution;


pub use error::{OptError, OptResult};
pub use fitness::{FitnessMap, FitnessWeights, fitness, mean_cost};
pub use genetic::{GeneticConfig, genetic_optimize};
pub use hill::{HillClimbConfig, hill_climb};
pub use merge::best_path_retention;
pub use observer::{NoopObserver, SearchObserver};
pub use solution::Solution;
