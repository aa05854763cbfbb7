//! The one-way traversal policy: which cells are reachable one step away.
//!
//! # Direction-selection policy
//!
//! Evaluated in order of specificity:
//!
//! 1. Current cell is an intersection → all four directions.
//! 2. Even row entered vertically → keep going the same way (crossing a
//!    building corridor).
//! 3. Start heading (`None`) → up or down only; a building must first reach
//!    a horizontal road.
//! 4. Heading up or right → right only.
//! 5. Heading down or left → left only.
//! 6. Anything else → stuck.
//!
//! Rules 4 and 5 make the odd-row corridors one-way: entering from above
//! commits a vehicle rightward, entering from below commits it leftward,
//! and only an intersection can break the commitment.  Candidates that step
//! off the lattice are discarded.

use cg_core::{Heading, SearchNode};

use crate::Grid;

const ALL: &[Heading] = &Heading::ALL;
const UP_ONLY: &[Heading] = &[Heading::Up];
const DOWN_ONLY: &[Heading] = &[Heading::Down];
const VERTICAL: &[Heading] = &[Heading::Up, Heading::Down];
const RIGHT_ONLY: &[Heading] = &[Heading::Right];
const LEFT_ONLY: &[Heading] = &[Heading::Left];

/// The directions legal from `node` under the one-way policy, before bounds
/// filtering.
fn legal_headings(grid: &Grid, node: SearchNode) -> &'static [Heading] {
    if grid[node.pos].is_intersection() {
        return ALL;
    }
    match node.heading {
        Heading::Up if node.pos.on_even_row() => UP_ONLY,
        Heading::Down if node.pos.on_even_row() => DOWN_ONLY,
        Heading::None => VERTICAL,
        Heading::Up | Heading::Right => RIGHT_ONLY,
        Heading::Down | Heading::Left => LEFT_ONLY,
    }
}

/// All search nodes reachable one step from `node`.
///
/// Each neighbor's heading is the direction taken to reach it.  Never
/// returns a coordinate outside the grid.
pub fn neighbors(grid: &Grid, node: SearchNode) -> Vec<SearchNode> {
    let mut out = Vec::with_capacity(4);
    for &dir in legal_headings(grid, node) {
        let next = node.step(dir);
        if grid.in_bounds(next.pos) {
            out.push(next);
        }
    }
    out
}
