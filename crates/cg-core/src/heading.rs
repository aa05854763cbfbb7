//! Travel headings and the `(position, heading)` search state.
//!
//! The heading a cell was *entered with* constrains where travel may continue,
//! so the routing state space is `(Coord, Heading)` pairs — the same cell
//! reached with a different heading is a distinct node.

use std::fmt;

use crate::Coord;

// ── Heading ───────────────────────────────────────────────────────────────────

/// Direction of travel used to enter the current cell.
///
/// `None` is only valid as the starting heading (a building has not moved
/// yet).  The derived `Ord` gives `SearchNode` a total order, which the
/// pathfinder's heap uses as a deterministic tie-break.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// The four real travel directions, in scan order.
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    /// Unit offset of one step in this heading.  `None` does not move.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::None => (0, 0),
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Heading::Up | Heading::Down)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Heading::None => "none",
            Heading::Up => "up",
            Heading::Down => "down",
            Heading::Left => "left",
            Heading::Right => "right",
        };
        f.write_str(s)
    }
}

// ── SearchNode ────────────────────────────────────────────────────────────────

/// One node of the routing state space: a position plus the heading it was
/// entered with.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchNode {
    pub pos: Coord,
    pub heading: Heading,
}

impl SearchNode {
    #[inline]
    pub const fn new(pos: Coord, heading: Heading) -> Self {
        SearchNode { pos, heading }
    }

    /// The starting node for a route query: heading not yet chosen.
    #[inline]
    pub const fn start(pos: Coord) -> Self {
        SearchNode { pos, heading: Heading::None }
    }

    /// The node one step away in direction `dir`, entered with that heading.
    #[inline]
    pub fn step(self, dir: Heading) -> SearchNode {
        let (dx, dy) = dir.delta();
        SearchNode {
            pos: Coord::new(self.pos.x + dx, self.pos.y + dy),
            heading: dir,
        }
    }
}

impl fmt::Display for SearchNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.pos, self.heading)
    }
}
