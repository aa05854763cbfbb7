//! Grid coordinates.
//!
//! Signed components so that one-step candidate moves can be formed without
//! wrap-around; bounds filtering happens in `cg-grid`.

use std::fmt;

/// A grid position.  `x` is the column, `y` the row; `(0, 0)` is the
/// top-left corner, `y` grows downward.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }

    /// Manhattan distance to `other` — the admissible routing heuristic
    /// (every legal move changes exactly one component by one).
    #[inline]
    pub fn manhattan(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// `true` when this position sits on an even row.  Even rows hold the
    /// buildings and services; odd rows are the horizontal road corridors.
    #[inline]
    pub fn on_even_row(self) -> bool {
        self.y % 2 == 0
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Coord { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
