//! Shared demo scenario: a 17 × 17 bordered city.
//!
//! Inner dimensions are 15 × 15 with 7 buildings and 4 emergency services
//! sampled onto the vertical-corridor rows.  The grid carries border
//! intersections only; both drivers seed their own initial interior
//! intersections.

use anyhow::{Context, Result};

use cg_core::RunRng;
use cg_grid::{Grid, generate_border_grid};

pub const INNER_WIDTH: usize = 15;
pub const INNER_HEIGHT: usize = 15;
pub const BUILDINGS: usize = 7;
pub const SERVICES: usize = 4;

pub fn build_city(rng: &mut RunRng) -> Result<Grid> {
    generate_border_grid(INNER_WIDTH, INNER_HEIGHT, BUILDINGS, SERVICES, rng)
        .context("generating the demo city grid")
}
