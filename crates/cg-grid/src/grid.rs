//! The city grid: a fixed-shape, row-major lattice of [`Cell`]s.
//!
//! # Data layout
//!
//! Cells are stored in one `Vec<Cell>`, row-major: cell `(x, y)` lives at
//! index `y * width + x`.  The shape is immutable once constructed; only
//! cell values change.  Cloning a grid is a single memcpy-style `Vec`
//! clone, which the optimization drivers rely on (every mutation works on
//! a fresh clone so the parent stays evaluable).

use std::fmt;
use std::ops::Index;

use cg_core::{Cell, Coord};

use crate::{GridError, GridResult};

/// A `width × height` city grid.
///
/// Construct with [`Grid::new`] (all roads), [`Grid::from_ascii`], or the
/// generator in [`crate::generate`].
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// An all-road grid of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![Cell::Road; width * height],
        }
    }

    /// Parse ASCII grid art: one row per line, glyphs as in [`Cell::glyph`]
    /// (`.` road, `B` building, `E` emergency service, `+` intersection).
    /// Blank lines and per-line indentation are ignored so fixtures can be
    /// written inline in tests.
    pub fn from_ascii(art: &str) -> GridResult<Grid> {
        let rows: Vec<&str> = art.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if rows.is_empty() {
            return Err(GridError::Parse("no rows".into()));
        }
        let width = rows[0].chars().count();
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(GridError::Parse(format!(
                    "row {y} has {} cells, expected {width}",
                    row.chars().count()
                )));
            }
            for (x, c) in row.chars().enumerate() {
                let cell = Cell::from_glyph(c)
                    .ok_or_else(|| GridError::Parse(format!("unknown glyph {c:?} at ({x}, {y})")))?;
                cells.push(cell);
            }
        }
        Ok(Grid { width, height: rows.len(), cells })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `true` when `pos` lies within `[0, W) × [0, H)`.
    #[inline]
    pub fn in_bounds(&self, pos: Coord) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// `true` for cells on the outer margin (row 0, last row, column 0, or
    /// last column).  Generated grids keep these as intersections forever.
    #[inline]
    pub fn is_margin(&self, pos: Coord) -> bool {
        pos.x == 0
            || pos.y == 0
            || pos.x as usize == self.width - 1
            || pos.y as usize == self.height - 1
    }

    /// The interior intersection count every mutated grid is held to.
    #[inline]
    pub fn target_intersections(&self) -> usize {
        self.height + 1
    }

    // ── Cell access ───────────────────────────────────────────────────────

    #[inline]
    fn idx(&self, pos: Coord) -> usize {
        debug_assert!(self.in_bounds(pos), "{pos} out of bounds");
        pos.y as usize * self.width + pos.x as usize
    }

    /// The cell at `pos`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, pos: Coord) -> Option<Cell> {
        self.in_bounds(pos).then(|| self.cells[self.idx(pos)])
    }

    /// Overwrite the cell at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is out of bounds.
    #[inline]
    pub fn set(&mut self, pos: Coord, cell: Cell) {
        let i = self.idx(pos);
        self.cells[i] = cell;
    }

    // ── Scans ─────────────────────────────────────────────────────────────

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| Coord::new(x, y)))
    }

    /// Interior coordinates (excluding the margin) in row-major order.
    pub fn interior_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (1..self.height as i32 - 1)
            .flat_map(move |y| (1..self.width as i32 - 1).map(move |x| Coord::new(x, y)))
    }

    /// Row-major positions of all cells equal to `cell`.
    pub fn positions_of(&self, cell: Cell) -> Vec<Coord> {
        self.coords().filter(|&c| self[c] == cell).collect()
    }

    /// All building positions, row-major.
    pub fn buildings(&self) -> Vec<Coord> {
        self.positions_of(Cell::Building)
    }

    /// All emergency service positions, row-major.
    pub fn services(&self) -> Vec<Coord> {
        self.positions_of(Cell::EmergencyService)
    }

    /// Interior (non-margin) intersection positions, row-major.
    pub fn interior_intersections(&self) -> Vec<Coord> {
        self.interior_coords()
            .filter(|&c| self[c].is_intersection())
            .collect()
    }

    /// Interior road cells — the positions mutation may claim.
    pub fn interior_roads(&self) -> Vec<Coord> {
        self.interior_coords().filter(|&c| self[c].is_road()).collect()
    }
}

impl Index<Coord> for Grid {
    type Output = Cell;

    #[inline]
    fn index(&self, pos: Coord) -> &Cell {
        &self.cells[self.idx(pos)]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                write!(f, "{}", self.cells[y * self.width + x].glyph())?;
            }
            if y + 1 < self.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
