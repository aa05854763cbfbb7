//! Neighbor generation: one structurally valid perturbation of a grid.
//!
//! Buildings, emergency services, and the margin intersections are never
//! touched; only interior Road ↔ Intersection flips happen here.  Every
//! produced neighbor is re-normalized to exactly
//! [`target_intersections`][Grid::target_intersections] interior
//! intersections so fitness comparisons stay meaningful (more or fewer
//! intersections trivially shifts cost).

use cg_core::{Cell, Coord, RunRng};

use crate::Grid;

/// Produce one mutated copy of `grid`.
///
/// Relocates a uniformly random interior intersection to a uniformly random
/// interior road cell on an odd row (the horizontal corridors), then
/// re-normalizes the interior intersection count.  The input grid is left
/// untouched — callers keep evaluating the parent while the neighbor is
/// scored.
pub fn generate_neighbor(grid: &Grid, rng: &mut RunRng) -> Grid {
    let mut next = grid.clone();

    let intersections = next.interior_intersections();
    if let Some(&from) = rng.choose(&intersections) {
        let targets: Vec<Coord> = next
            .interior_roads()
            .into_iter()
            .filter(|c| !c.on_even_row())
            .collect();
        if let Some(&to) = rng.choose(&targets) {
            next.set(from, Cell::Road);
            next.set(to, Cell::Intersection);
        }
    }

    normalize_intersections(&mut next, rng);
    next
}

/// Add or remove random interior intersections until the grid holds exactly
/// its target count (or no road cells remain to claim).
///
/// Exposed separately because the path-merge operator leaves the child
/// grid's count unnormalized by design; both optimization drivers run this
/// pass on merged children before evaluating them.
pub fn normalize_intersections(grid: &mut Grid, rng: &mut RunRng) {
    let target = grid.target_intersections();
    let mut intersections = grid.interior_intersections();

    if intersections.len() < target {
        let mut open = grid.interior_roads();
        while intersections.len() < target && !open.is_empty() {
            let i = rng.gen_range(0..open.len());
            let pos = open.swap_remove(i);
            grid.set(pos, Cell::Intersection);
            intersections.push(pos);
        }
    } else {
        while intersections.len() > target {
            let i = rng.gen_range(0..intersections.len());
            let pos = intersections.swap_remove(i);
            grid.set(pos, Cell::Road);
        }
    }
}
