//! The result triple both drivers return.

use cg_grid::Grid;
use cg_route::Path;

/// A scored grid: the layout, the best path per reachable building, and
/// the mean per-building cost.
#[derive(Clone, Debug)]
pub struct Solution {
    pub grid: Grid,
    pub paths: Vec<Path>,
    /// Mean per-building cost; lower is better.
    pub score: f64,
}
