//! Generation advance for standard B3/S23 Life.
//!
//! Every next-state cell is computed from the input snapshot only; the
//! result is written into a freshly allocated grid, never in place.

use super::{Grid, count_live_neighbors};

/// Result of advancing one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// The next generation.
    pub next: Grid,
    /// False iff `next` is cell-wise identical to the input (fixed point).
    pub changed: bool,
}

/// Birth/survival rule: B3/S23.
///
/// - alive with fewer than 2 or more than 3 neighbors dies
/// - dead with exactly 3 neighbors is born
/// - everything else keeps its state
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, n) if !(2..=3).contains(&n) => false,
        (false, 3) => true,
        (state, _) => state,
    }
}

/// Advance `grid` by one generation.
pub fn step(grid: &Grid) -> Step {
    let next = Grid::from_fn(grid.rows(), grid.cols(), |row, col| {
        next_state(grid.is_alive(row, col), count_live_neighbors(grid, row, col))
    });
    let changed = next != *grid;
    Step { next, changed }
}
