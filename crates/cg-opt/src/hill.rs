//! Greedy hill climbing with a path-merge step.

use cg_core::RunRng;
use cg_grid::{Grid, generate_neighbor, normalize_intersections, seed_intersections};
use cg_route::Router;

use crate::{
    FitnessWeights, OptError, OptResult, Solution, best_path_retention, fitness, mean_cost,
    observer::SearchObserver,
};

/// Hill-climbing parameters.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbConfig {
    /// Candidates generated before giving up on further improvement.
    pub max_iterations: usize,
    /// Cost weights; `None` takes [`FitnessWeights::for_grid`].
    pub weights: Option<FitnessWeights>,
}

impl Default for HillClimbConfig {
    fn default() -> Self {
        HillClimbConfig {
            max_iterations: 200,
            weights: None,
        }
    }
}

/// Run greedy hill climbing from `start`.
///
/// The driver owns its initialization: `start` is first passed through
/// [`seed_intersections`], adding one random intersection per open column,
/// and that seeded state is what `on_start` observes.  Callers hand in a
/// border-only grid straight from the generator.
///
/// Each iteration mutates the incumbent, routes the mutant, merges mutant
/// and incumbent via [`best_path_retention`], re-normalizes the merged
/// child's intersection count, and accepts the child only when its mean
/// per-building cost is strictly lower.  Candidates in which any building
/// loses its route are rejected outright.
///
/// # Errors
///
/// [`OptError::Config`] when `max_iterations` is zero, and
/// [`OptError::EmptyFitnessMap`] when no building on `start` reaches a
/// service (there is nothing to improve).
pub fn hill_climb<R: Router + ?Sized>(
    start: &Grid,
    router: &R,
    config: HillClimbConfig,
    rng: &mut RunRng,
    observer: &mut dyn SearchObserver,
) -> OptResult<Solution> {
    if config.max_iterations == 0 {
        return Err(OptError::Config("max_iterations must be at least 1".into()));
    }
    let weights = config.weights.unwrap_or_else(|| FitnessWeights::for_grid(start));

    let mut best_grid = start.clone();
    seed_intersections(&mut best_grid, rng);
    let mut best_paths = router.route_all(&best_grid).paths;
    let mut best_score = mean_cost(&fitness(&best_grid, &best_paths, weights))?;
    observer.on_start(&best_grid, &best_paths, best_score);

    for iteration in 0..config.max_iterations {
        let mutant = generate_neighbor(&best_grid, rng);
        let mutant_routes = router.route_all(&mutant);
        if !mutant_routes.is_complete() {
            continue;
        }

        let mut child = best_path_retention(
            &best_grid,
            &mutant,
            &best_paths,
            &mutant_routes.paths,
            weights,
        );
        normalize_intersections(&mut child, rng);

        // Normalization may have moved intersections off winning paths, so
        // the child is scored from a fresh routing pass.
        let child_routes = router.route_all(&child);
        if !child_routes.is_complete() {
            continue;
        }
        let Ok(child_score) = mean_cost(&fitness(&child, &child_routes.paths, weights)) else {
            continue;
        };

        if child_score < best_score {
            best_grid = child;
            best_paths = child_routes.paths;
            best_score = child_score;
            observer.on_improved(iteration, &best_grid, &best_paths, best_score);
        }
    }

    observer.on_end(&best_grid, &best_paths, best_score);
    Ok(Solution {
        grid: best_grid,
        paths: best_paths,
        score: best_score,
    })
}
