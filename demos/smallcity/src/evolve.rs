//! smallcity evolve — genetic optimization demo.
//!
//! Builds the shared 17 × 17 city and evolves a population of 10 layouts
//! for 10 generations, printing per-generation statistics and the best
//! layout ever scored.

mod scenario;

use anyhow::Result;

use cg_core::RunRng;
use cg_grid::Grid;
use cg_opt::{GeneticConfig, SearchObserver, genetic_optimize};
use cg_route::{AStarRouter, Path};

use scenario::build_city;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:            u64   = 42;
const POPULATION_SIZE: usize = 10;
const GENERATIONS:     usize = 10;
const MUTATION_RATE:   f64   = 0.3;

// ── Progress reporting ────────────────────────────────────────────────────────

struct Progress;

impl SearchObserver for Progress {
    fn on_generation(&mut self, generation: usize, selected: usize, bred: usize, best: f64) {
        println!(
            "generation {generation:>3}: kept {selected}, bred {bred}, best mean cost {best:.2}"
        );
    }

    fn on_end(&mut self, _grid: &Grid, _paths: &[Path], score: f64) {
        println!("best ever: mean cost {score:.2}");
    }
}

fn main() -> Result<()> {
    let mut rng = RunRng::new(SEED);
    let city = build_city(&mut rng)?;
    println!("initial layout:\n{city}");

    // Independent stream for the driver so scenario tweaks don't shift its draws.
    let mut driver_rng = rng.child(1);
    let solution = genetic_optimize(
        &city,
        &AStarRouter,
        GeneticConfig {
            population_size: POPULATION_SIZE,
            generations: GENERATIONS,
            mutation_rate: MUTATION_RATE,
            ..GeneticConfig::default()
        },
        &mut driver_rng,
        &mut Progress,
    )?;

    println!("\nbest layout (mean cost {:.2}):\n{}", solution.score, solution.grid);
    for path in &solution.paths {
        println!("{path}");
    }
    Ok(())
}
