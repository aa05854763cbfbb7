//! Route results: a single path and the per-grid batch outcome.

use std::fmt;

use cg_core::{Coord, SearchNode};

// ── Path ──────────────────────────────────────────────────────────────────────

/// An ordered walk from a building (heading `None`) to a node satisfying the
/// service goal test, both endpoints inclusive.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    /// Visited nodes, start to goal.  Never empty.
    pub nodes: Vec<SearchNode>,
}

impl Path {
    /// Node count — the length measure the multi-goal search minimizes and
    /// the fitness evaluator penalizes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The building this path starts from.
    #[inline]
    pub fn building(&self) -> Coord {
        self.nodes[0].pos
    }

    /// The terminal node adjacent to the reached service.
    #[inline]
    pub fn terminus(&self) -> SearchNode {
        self.nodes[self.nodes.len() - 1]
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for n in &self.nodes {
            if !first {
                write!(f, " -> ")?;
            }
            write!(f, "{}", n.pos)?;
            first = false;
        }
        Ok(())
    }
}

// ── AllPaths ──────────────────────────────────────────────────────────────────

/// Batch routing outcome for one grid: best path per reachable building,
/// plus the buildings that could not reach any service.
///
/// A partially unreachable grid is a normal, scoreable state — downstream
/// fitness evaluation simply sees a shorter path list.
#[derive(Clone, Debug, Default)]
pub struct AllPaths {
    pub paths: Vec<Path>,
    pub unreachable: Vec<Coord>,
}

impl AllPaths {
    /// `true` when every building found a route.
    pub fn is_complete(&self) -> bool {
        self.unreachable.is_empty()
    }
}
