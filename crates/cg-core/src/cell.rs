//! The grid cell vocabulary.

use std::fmt;

/// One cell of the city grid.
///
/// Buildings and emergency services are fixed at generation time and never
/// altered by mutation or crossover; only `Road` ↔ `Intersection` flips are
/// legal afterwards.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Plain one-way road segment.
    #[default]
    Road,
    /// A building that needs emergency coverage.
    Building,
    /// An emergency service (fire station, hospital, …) — a routing goal.
    EmergencyService,
    /// A cell permitting turns in any direction.
    Intersection,
}

impl Cell {
    /// `true` for cells that mutation may overwrite.
    #[inline]
    pub fn is_road(self) -> bool {
        self == Cell::Road
    }

    #[inline]
    pub fn is_intersection(self) -> bool {
        self == Cell::Intersection
    }

    /// The single-character form used by `Grid`'s ASCII rendering.
    pub fn glyph(self) -> char {
        match self {
            Cell::Road => '.',
            Cell::Building => 'B',
            Cell::EmergencyService => 'E',
            Cell::Intersection => '+',
        }
    }

    /// Inverse of [`glyph`][Cell::glyph].  Returns `None` for unknown chars.
    pub fn from_glyph(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Road),
            'B' => Some(Cell::Building),
            'E' => Some(Cell::EmergencyService),
            '+' => Some(Cell::Intersection),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
