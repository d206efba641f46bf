//! Population statistics for monitoring a run.

use super::Grid;

/// Summary of a single generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridStats {
    pub live_cells: usize,
    pub total_cells: usize,
}

impl GridStats {
    /// Compute statistics from a grid.
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            live_cells: grid.live_count(),
            total_cells: grid.len(),
        }
    }
}
