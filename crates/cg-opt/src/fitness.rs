//! Scoring a grid through its routed paths.

use rustc_hash::FxHashMap;

use cg_core::Coord;
use cg_grid::Grid;
use cg_route::Path;

use crate::{OptError, OptResult};

/// Per-building cost map, keyed by building position.  Lower is better.
pub type FitnessMap = FxHashMap<Coord, u32>;

/// Cost weights: `cost = path_penalty * node_count
///                     + intersection_penalty * interior_intersections_visited`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitnessWeights {
    pub path_penalty: u32,
    pub intersection_penalty: u32,
}

impl FitnessWeights {
    /// The standard weighting: every path node costs 1, every interior
    /// intersection crossed costs `height / 8` on top.
    pub fn for_grid(grid: &Grid) -> Self {
        FitnessWeights {
            path_penalty: 1,
            intersection_penalty: (grid.height() / 8) as u32,
        }
    }
}

/// Score every path against `grid`.
///
/// Intersections on the margin ring are free — only interior ones count,
/// since the optimizer can only move those.  A node visited twice (same
/// cell, two headings) is charged twice; the vehicle really does cross the
/// cell twice.
pub fn fitness(grid: &Grid, paths: &[Path], weights: FitnessWeights) -> FitnessMap {
    let mut scores = FitnessMap::default();
    for path in paths {
        let intersections = path
            .nodes
            .iter()
            .filter(|n| grid[n.pos].is_intersection() && !grid.is_margin(n.pos))
            .count() as u32;
        let cost =
            weights.path_penalty * path.len() as u32 + weights.intersection_penalty * intersections;
        scores.insert(path.building(), cost);
    }
    scores
}

/// Arithmetic mean of all per-building costs — the grid's scalar quality.
///
/// # Errors
///
/// [`OptError::EmptyFitnessMap`] when `map` has no entries.
pub fn mean_cost(map: &FitnessMap) -> OptResult<f64> {
    if map.is_empty() {
        return Err(OptError::EmptyFitnessMap);
    }
    Ok(map.values().map(|&c| c as f64).sum::<f64>() / map.len() as f64)
}
