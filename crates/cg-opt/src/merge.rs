//! The path-merge crossover: per-building best-path retention.

use rustc_hash::FxHashMap;

use cg_core::{Cell, Coord};
use cg_grid::Grid;
use cg_route::Path;

use crate::{FitnessWeights, fitness};

/// Combine two grids into a child that, per building, adopts whichever
/// parent's local road configuration yielded the cheaper path for that
/// building.
///
/// The child starts as a clone of `a` with every interior intersection
/// reset to road; each winning path then stamps its visited cell values
/// (from the winning parent) back in.  Ties favor `a`; a building missing
/// from one parent's path set counts as infinitely expensive there.
///
/// The child's interior intersection count is deliberately *not*
/// re-normalized here so the per-building cost guarantee stays intact —
/// both drivers run [`cg_grid::normalize_intersections`] on the child
/// before evaluating it.
pub fn best_path_retention(
    a: &Grid,
    b: &Grid,
    a_paths: &[Path],
    b_paths: &[Path],
    weights: FitnessWeights,
) -> Grid {
    let b_by_building: FxHashMap<Coord, &Path> =
        b_paths.iter().map(|p| (p.building(), p)).collect();

    // Clear the slate: the child is built purely from winning paths.
    let mut child = a.clone();
    for pos in child.interior_intersections() {
        child.set(pos, Cell::Road);
    }

    let a_scores = fitness(a, a_paths, weights);
    let b_scores = fitness(b, b_paths, weights);

    for a_path in a_paths {
        let building = a_path.building();
        let a_cost = a_scores.get(&building).copied().unwrap_or(u32::MAX);
        let b_cost = b_scores.get(&building).copied().unwrap_or(u32::MAX);

        let (source, winner): (&Grid, &Path) = if a_cost <= b_cost {
            (a, a_path)
        } else {
            (b, b_by_building[&building])
        };

        for node in &winner.nodes {
            child.set(node.pos, source[node.pos]);
        }
    }

    child
}
