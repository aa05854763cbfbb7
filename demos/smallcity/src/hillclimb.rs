//! smallcity hillclimb — greedy intersection optimization demo.
//!
//! Builds the shared 17 × 17 city, runs 200 hill-climbing iterations, and
//! prints every accepted improvement followed by the final layout and its
//! routed emergency-access paths.

mod scenario;

use anyhow::Result;

use cg_core::RunRng;
use cg_grid::Grid;
use cg_opt::{HillClimbConfig, SearchObserver, hill_climb};
use cg_route::{AStarRouter, Path};

use scenario::build_city;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:           u64   = 42;
const MAX_ITERATIONS: usize = 200;

// ── Progress reporting ────────────────────────────────────────────────────────

struct Progress;

impl SearchObserver for Progress {
    fn on_start(&mut self, _grid: &Grid, _paths: &[Path], score: f64) {
        println!("start: mean cost {score:.2}");
    }

    fn on_improved(&mut self, iteration: usize, _grid: &Grid, _paths: &[Path], score: f64) {
        println!("iteration {iteration:>4}: mean cost {score:.2}");
    }
}

fn main() -> Result<()> {
    let mut rng = RunRng::new(SEED);
    let city = build_city(&mut rng)?;
    println!("initial layout:\n{city}");

    let solution = hill_climb(
        &city,
        &AStarRouter,
        HillClimbConfig {
            max_iterations: MAX_ITERATIONS,
            weights: None,
        },
        &mut rng,
        &mut Progress,
    )?;

    println!("\nfinal layout (mean cost {:.2}):\n{}", solution.score, solution.grid);
    for path in &solution.paths {
        println!("{path}");
    }
    Ok(())
}
