//! Generational genetic search over intersection layouts.

use cg_core::RunRng;
use cg_grid::{Grid, generate_neighbor, normalize_intersections, seed_intersections};
use cg_route::Router;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    FitnessWeights, OptError, OptResult, Solution, best_path_retention, fitness, mean_cost,
    observer::SearchObserver,
};

/// Genetic-driver parameters.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneticConfig {
    /// Grids seeded into generation zero and children bred per generation.
    pub population_size: usize,
    pub generations: usize,
    /// Per-grid probability of mutating a pool member, in `[0, 1]`.
    pub mutation_rate: f64,
    /// Survivors kept each generation (capped at the population size).
    pub selection_size: usize,
    /// Cost weights; `None` takes [`FitnessWeights::for_grid`].
    pub weights: Option<FitnessWeights>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        GeneticConfig {
            population_size: 10,
            generations: 10,
            mutation_rate: 0.3,
            selection_size: 6,
            weights: None,
        }
    }
}

impl GeneticConfig {
    fn validate(&self) -> OptResult<()> {
        if self.population_size < 2 {
            return Err(OptError::Config("population_size must be at least 2".into()));
        }
        if self.generations == 0 {
            return Err(OptError::Config("generations must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(OptError::Config(format!(
                "mutation_rate must lie in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.selection_size < 2 {
            return Err(OptError::Config("selection_size must be at least 2".into()));
        }
        Ok(())
    }
}

/// Run the genetic driver from `start`.
///
/// Generation zero is `population_size` copies of `start`, each
/// independently passed through [`seed_intersections`], so callers hand
/// in a border-only grid and every member gets its own random
/// intersection layout.  Each generation then scores the population, keeps the `selection_size`
/// cheapest survivors, breeds `population_size` children by merging random
/// distinct survivor pairs with [`best_path_retention`], and carries
/// survivors plus children forward, each mutated with probability
/// `mutation_rate`.  The best grid ever scored is retained outside the
/// population and returned, so a late bad generation cannot lose it.
///
/// Grids on which some building has no route score `+inf` and are never
/// selected or returned.
///
/// # Errors
///
/// [`OptError::Config`] for out-of-range parameters, and
/// [`OptError::EmptyFitnessMap`] when no generation ever produced a grid
/// with every building routable.
pub fn genetic_optimize<R: Router + ?Sized>(
    start: &Grid,
    router: &R,
    config: GeneticConfig,
    rng: &mut RunRng,
    observer: &mut dyn SearchObserver,
) -> OptResult<Solution> {
    config.validate()?;
    let weights = config.weights.unwrap_or_else(|| FitnessWeights::for_grid(start));

    let mut population: Vec<Grid> = Vec::with_capacity(config.population_size);
    while population.len() < config.population_size {
        let mut member = start.clone();
        seed_intersections(&mut member, rng);
        population.push(member);
    }

    let mut best_ever: Option<Solution> = None;

    for generation in 0..config.generations {
        let mut scored = evaluate(population, router, weights);
        scored.sort_by(|a, b| a.score.total_cmp(&b.score));
        scored.truncate(config.selection_size.min(scored.len()));

        let gen_best = &scored[0];
        if gen_best.score.is_finite()
            && best_ever.as_ref().is_none_or(|b| gen_best.score < b.score)
        {
            best_ever = Some(gen_best.clone());
        }
        let gen_best_score = gen_best.score;

        // Breeding samples only amongst the survivors; children are
        // re-normalized before they compete in the next generation.
        let mut bred: Vec<Grid> = Vec::with_capacity(config.population_size);
        for _ in 0..config.population_size {
            let (i, j) = sample_distinct_pair(scored.len(), rng);
            let mut child = best_path_retention(
                &scored[i].grid,
                &scored[j].grid,
                &scored[i].paths,
                &scored[j].paths,
                weights,
            );
            normalize_intersections(&mut child, rng);
            bred.push(child);
        }

        observer.on_generation(generation, scored.len(), bred.len(), gen_best_score);

        population = scored.into_iter().map(|s| s.grid).chain(bred).collect();
        for grid in &mut population {
            if rng.gen_bool(config.mutation_rate) {
                *grid = generate_neighbor(grid, rng);
            }
        }
    }

    let best = best_ever.ok_or(OptError::EmptyFitnessMap)?;
    observer.on_end(&best.grid, &best.paths, best.score);
    Ok(best)
}

/// Route and score every grid.  Unroutable grids score `+inf`.
fn evaluate<R: Router + ?Sized>(
    population: Vec<Grid>,
    router: &R,
    weights: FitnessWeights,
) -> Vec<Solution> {
    let score_one = |grid: Grid| {
        let routes = router.route_all(&grid);
        let score = if routes.is_complete() {
            mean_cost(&fitness(&grid, &routes.paths, weights)).unwrap_or(f64::INFINITY)
        } else {
            f64::INFINITY
        };
        Solution {
            grid,
            paths: routes.paths,
            score,
        }
    };

    #[cfg(feature = "parallel")]
    {
        population.into_par_iter().map(score_one).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        population.into_iter().map(score_one).collect()
    }
}

/// Two distinct indices in `0..n`.  Requires `n >= 2`.
fn sample_distinct_pair(n: usize, rng: &mut RunRng) -> (usize, usize) {
    let i = rng.gen_range(0..n);
    let mut j = rng.gen_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    (i, j)
}
