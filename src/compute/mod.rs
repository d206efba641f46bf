//! Compute module - Grid, neighbor counting and generation advance.

mod evolver;
mod grid;
mod neighbors;
mod stats;

pub use evolver::*;
pub use grid::*;
pub use neighbors::*;
pub use stats::*;
