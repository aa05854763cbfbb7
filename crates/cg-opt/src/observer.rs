//! Driver observer trait for progress reporting and visualization hooks.

use cg_grid::Grid;
use cg_route::Path;

/// Callbacks invoked by the optimization drivers at key points.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Every argument is a read-only
/// snapshot: renderers that want to keep a grid must clone it, and the
/// drivers keep no reference to the observer's state — the optimizer runs
/// identically whether or not anything observes it.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SearchObserver for ProgressPrinter {
///     fn on_improved(&mut self, iteration: usize, _: &Grid, _: &[Path], score: f64) {
///         println!("iteration {iteration}: mean cost {score:.2}");
///     }
/// }
/// ```
pub trait SearchObserver {
    /// Called once with the evaluated initial state, before any iteration.
    fn on_start(&mut self, _grid: &Grid, _paths: &[Path], _score: f64) {}

    /// Hill climbing accepted a strictly better candidate.
    fn on_improved(&mut self, _iteration: usize, _grid: &Grid, _paths: &[Path], _score: f64) {}

    /// The genetic driver finished a generation: `selected` survivors kept,
    /// `bred` children produced, `best_score` the generation's best mean.
    fn on_generation(&mut self, _generation: usize, _selected: usize, _bred: usize, _best_score: f64) {
    }

    /// Called once with the final result before the driver returns.
    fn on_end(&mut self, _grid: &Grid, _paths: &[Path], _score: f64) {}
}

/// A [`SearchObserver`] that does nothing.  Use when you need to call a
/// driver but don't want progress callbacks.
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}
