//! Grid generation and initial intersection seeding.

use cg_core::{Cell, Coord, RunRng};

use crate::{Grid, GridError, GridResult};

/// Generate a bordered city grid.
///
/// `width` and `height` are the *inner* dimensions; the returned grid is
/// `(width + 2) × (height + 2)` with a one-cell border of intersections on
/// all sides.  Buildings and emergency services are sampled without
/// replacement onto the inner odd rows (which become even rows of the
/// bordered grid — the rows the traversal policy treats as vertical
/// corridors); all other inner cells start as roads.
///
/// # Errors
///
/// [`GridError::Config`] when the entity count exceeds the available
/// odd-row cells, or when placing them would leave no room for roads.
pub fn generate_border_grid(
    width: usize,
    height: usize,
    num_buildings: usize,
    num_services: usize,
    rng: &mut RunRng,
) -> GridResult<Grid> {
    let entities = num_buildings + num_services;
    let total = width * height;
    if total <= entities {
        return Err(GridError::Config(format!(
            "{entities} entities do not fit a {width}x{height} grid with room for roads"
        )));
    }

    // Entity slots: inner odd rows only.
    let mut slots: Vec<(usize, usize)> = (0..height)
        .filter(|y| y % 2 != 0)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .collect();
    if slots.len() < entities {
        return Err(GridError::Config(format!(
            "need {entities} odd-row cells for buildings and services, only {} available",
            slots.len()
        )));
    }

    rng.shuffle(&mut slots);

    let mut grid = Grid::new(width + 2, height + 2);
    for pos in grid.coords().collect::<Vec<_>>() {
        if grid.is_margin(pos) {
            grid.set(pos, Cell::Intersection);
        }
    }
    for (i, &(x, y)) in slots[..entities].iter().enumerate() {
        let pos = Coord::new(x as i32 + 1, y as i32 + 1);
        let cell = if i < num_buildings { Cell::Building } else { Cell::EmergencyService };
        grid.set(pos, cell);
    }

    Ok(grid)
}

/// For every column that still has at least one road cell, convert exactly
/// one uniformly random such cell to an intersection.
///
/// Used both to seed the hill-climbing start state and to diversify each
/// member of the genetic driver's initial population.
pub fn seed_intersections(grid: &mut Grid, rng: &mut RunRng) {
    for x in 0..grid.width() as i32 {
        let open: Vec<Coord> = (0..grid.height() as i32)
            .map(|y| Coord::new(x, y))
            .filter(|&c| grid[c].is_road())
            .collect();
        if let Some(&pick) = rng.choose(&open) {
            grid.set(pick, Cell::Intersection);
        }
    }
}
