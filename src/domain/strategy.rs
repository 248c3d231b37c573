//! Selection between the serial and the rayon-parallel stepping paths.
//!
//! Both paths read generation N from an untouched grid and write N+1 into
//! a fresh buffer, so they always agree cell for cell.

use super::Grid;

/// Available evolution strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Cell-by-cell, single thread
    #[default]
    Serial,
    /// Rows spread over the rayon thread pool
    Parallel,
}

impl Strategy {
    /// Get all available strategies
    pub fn all() -> [Strategy; 2] {
        [Strategy::Serial, Strategy::Parallel]
    }

    /// Display name for the HUD
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Serial => "Serial",
            Strategy::Parallel => "Parallel",
        }
    }

    /// Compute the next generation of `grid` with this strategy
    pub fn advance(&self, grid: &Grid) -> Grid {
        match self {
            Strategy::Serial => grid.next_generation(),
            Strategy::Parallel => grid.next_generation_parallel(),
        }
    }
}
