//! Routing trait and the default A* implementation.
//!
//! # Pluggability
//!
//! The optimization drivers in `cg-opt` call routing via the [`Router`]
//! trait, so alternative engines (bidirectional search, landmark heuristics)
//! can be swapped in without touching the drivers.  [`AStarRouter`] is the
//! default and the reference for all cost semantics.
//!
//! # Cost model
//!
//! Each transition costs 1, except leaving a *margin intersection* (an
//! intersection on the grid's outer ring), which costs
//! `max(1, height / 8)` — a toll modelling the delay of border crossings.
//! The clamp to ≥ 1 keeps the Manhattan heuristic admissible on small
//! grids, where an unclamped `height / 8` would be zero.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};

use cg_core::{Coord, Heading, SearchNode};
use cg_grid::{Grid, neighbors};

use crate::{AllPaths, Path, RouteError, RouteResult};

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so the genetic driver can evaluate
/// population members on Rayon worker threads.
pub trait Router: Send + Sync {
    /// Minimum-cost path from `from` (heading undecided) to the service at
    /// `goal`.  An emptied frontier is reported as
    /// [`RouteError::NoRoute`] — an expected outcome, not a fault.
    fn route(&self, grid: &Grid, from: Coord, goal: Coord) -> RouteResult<Path>;

    /// Best path from `building` to *any* emergency service in `grid`:
    /// one single-goal search per service, minimum node count wins.
    fn route_to_nearest_service(&self, grid: &Grid, building: Coord) -> RouteResult<Path> {
        let services = grid.services();
        if services.is_empty() {
            return Err(RouteError::NoServices);
        }
        let mut best: Option<Path> = None;
        for goal in services {
            if let Ok(path) = self.route(grid, building, goal) {
                if best.as_ref().is_none_or(|b| path.len() < b.len()) {
                    best = Some(path);
                }
            }
        }
        best.ok_or(RouteError::NoRoute { from: building })
    }

    /// Route every building to its nearest service.  Buildings with no
    /// reachable service are collected, not fatal; a grid with zero
    /// buildings yields an empty result.
    fn route_all(&self, grid: &Grid) -> AllPaths {
        let mut out = AllPaths::default();
        for building in grid.buildings() {
            match self.route_to_nearest_service(grid, building) {
                Ok(path) => out.paths.push(path),
                Err(_) => out.unreachable.push(building),
            }
        }
        out
    }
}

// ── Cost model ────────────────────────────────────────────────────────────────

/// Cost of the transition that *leaves* the cell at `pos`.
#[inline]
pub fn step_cost(grid: &Grid, pos: Coord) -> u32 {
    if grid[pos].is_intersection() && grid.is_margin(pos) {
        margin_toll(grid)
    } else {
        1
    }
}

/// The border-crossing toll, clamped so no step is ever cheaper than a
/// normal one.
#[inline]
fn margin_toll(grid: &Grid) -> u32 {
    ((grid.height() / 8) as u32).max(1)
}

/// Total cost of a path: the sum of [`step_cost`] over every node left
/// (all but the terminal one).
pub fn path_cost(grid: &Grid, path: &Path) -> u32 {
    path.nodes[..path.nodes.len().saturating_sub(1)]
        .iter()
        .map(|n| step_cost(grid, n.pos))
        .sum()
}

// ── Goal test ─────────────────────────────────────────────────────────────────

/// A node satisfies the goal for the service at `goal` when it shares the
/// service's column and either passes in the adjacent lane with the matching
/// heading, or sits on an intersection one row above or below the service.
pub(crate) fn reaches_service(grid: &Grid, node: SearchNode, goal: Coord) -> bool {
    node.pos.x == goal.x
        && ((node.pos.y + 1 == goal.y && node.heading == Heading::Right)
            || (node.pos.y - 1 == goal.y && node.heading == Heading::Left)
            || (grid[node.pos].is_intersection() && (node.pos.y - goal.y).abs() == 1))
}

// ── AStarRouter ───────────────────────────────────────────────────────────────

/// Best-first search keyed by `f = g + h` with `h` = Manhattan distance of
/// positions.
///
/// The heap entry's secondary key is the `SearchNode` itself, whose derived
/// `Ord` makes equal-`f` pops deterministic — two runs over the same grid
/// always return the same path.
pub struct AStarRouter;

impl Router for AStarRouter {
    fn route(&self, grid: &Grid, from: Coord, goal: Coord) -> RouteResult<Path> {
        astar(grid, SearchNode::start(from), goal)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

fn astar(grid: &Grid, start: SearchNode, goal: Coord) -> RouteResult<Path> {
    let mut g_costs: FxHashMap<SearchNode, u32> = FxHashMap::default();
    let mut came_from: FxHashMap<SearchNode, SearchNode> = FxHashMap::default();
    let mut closed: FxHashSet<SearchNode> = FxHashSet::default();

    // Min-heap: (f, node). Reverse makes BinaryHeap (max) behave as min-heap.
    let mut open: BinaryHeap<Reverse<(u32, SearchNode)>> = BinaryHeap::new();
    g_costs.insert(start, 0);
    open.push(Reverse((start.pos.manhattan(goal), start)));

    while let Some(Reverse((_, node))) = open.pop() {
        // First pop of a goal-satisfying node is optimal: the heuristic is
        // consistent (every step costs ≥ 1 and moves Manhattan distance by
        // at most 1).
        if reaches_service(grid, node, goal) {
            return Ok(reconstruct(&came_from, node));
        }
        if !closed.insert(node) {
            continue; // stale heap entry
        }

        let g = g_costs[&node];
        let leave = step_cost(grid, node.pos);

        for next in neighbors(grid, node) {
            if closed.contains(&next) {
                continue;
            }
            let tentative = g + leave;
            if g_costs.get(&next).is_none_or(|&best| tentative < best) {
                g_costs.insert(next, tentative);
                came_from.insert(next, node);
                open.push(Reverse((tentative + next.pos.manhattan(goal), next)));
            }
        }
    }

    Err(RouteError::NoRoute { from: start.pos })
}

fn reconstruct(came_from: &FxHashMap<SearchNode, SearchNode>, terminal: SearchNode) -> Path {
    let mut nodes = vec![terminal];
    let mut cur = terminal;
    while let Some(&prev) = came_from.get(&cur) {
        nodes.push(prev);
        cur = prev;
    }
    nodes.reverse();
    Path { nodes }
}
