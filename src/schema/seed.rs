//! Seed types for building the initial grid.

use std::fmt;
use std::str::FromStr;

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use super::{ConfigError, LifeConfig};
use crate::compute::Grid;

/// Complete seed specification for simulation initialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

/// How the first generation is populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// Every cell alive independently with probability `LifeConfig::density`.
    #[default]
    Random,
    /// A well-known pattern centered in the grid.
    Named { name: NamedPattern },
    /// Explicit live cells as (row, col); out-of-range cells are dropped.
    Custom { cells: Vec<(usize, usize)> },
}

/// Small classic patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamedPattern {
    Blinker,
    Block,
    Toad,
    Beacon,
    Glider,
    RPentomino,
}

impl NamedPattern {
    pub const ALL: [NamedPattern; 6] = [
        NamedPattern::Blinker,
        NamedPattern::Block,
        NamedPattern::Toad,
        NamedPattern::Beacon,
        NamedPattern::Glider,
        NamedPattern::RPentomino,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NamedPattern::Blinker => "blinker",
            NamedPattern::Block => "block",
            NamedPattern::Toad => "toad",
            NamedPattern::Beacon => "beacon",
            NamedPattern::Glider => "glider",
            NamedPattern::RPentomino => "r-pentomino",
        }
    }

    /// Live cells relative to the pattern's top-left corner.
    pub fn cells(self) -> &'static [(usize, usize)] {
        match self {
            NamedPattern::Blinker => &[(0, 0), (0, 1), (0, 2)],
            NamedPattern::Block => &[(0, 0), (0, 1), (1, 0), (1, 1)],
            NamedPattern::Toad => &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
            NamedPattern::Beacon => &[
                (0, 0),
                (0, 1),
                (1, 0),
                (1, 1),
                (2, 2),
                (2, 3),
                (3, 2),
                (3, 3),
            ],
            NamedPattern::Glider => &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
            NamedPattern::RPentomino => &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
        }
    }

    /// Bounding box as (height, width).
    pub fn extent(self) -> (usize, usize) {
        self.cells()
            .iter()
            .fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }
}

impl fmt::Display for NamedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|p| p.name()).collect();
                format!("unknown pattern '{s}' (expected one of: {})", known.join(", "))
            })
    }
}

impl Seed {
    /// Random fill at the configured density.
    pub fn random() -> Self {
        Self {
            pattern: Pattern::Random,
        }
    }

    /// A named pattern centered in the grid.
    pub fn named(name: NamedPattern) -> Self {
        Self {
            pattern: Pattern::Named { name },
        }
    }

    /// Generate the initial grid from this seed.
    ///
    /// Dimensions and density come from `config`, which is expected to be
    /// validated already.
    pub fn generate(&self, config: &LifeConfig) -> Result<Grid, ConfigError> {
        let (rows, cols) = (config.rows, config.cols);

        match &self.pattern {
            Pattern::Random => {
                let mut rng = match config.rng_seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                Ok(random_grid(rows, cols, config.density, &mut rng))
            }
            Pattern::Named { name } => {
                let (height, width) = name.extent();
                if height > rows || width > cols {
                    return Err(ConfigError::PatternTooLarge {
                        name: name.to_string(),
                        height,
                        width,
                        rows,
                        cols,
                    });
                }
                let top = (rows - height) / 2;
                let left = (cols - width) / 2;
                let cells: Vec<_> = name
                    .cells()
                    .iter()
                    .map(|&(r, c)| (top + r, left + c))
                    .collect();
                Ok(Grid::from_cells(rows, cols, &cells))
            }
            Pattern::Custom { cells } => Ok(Grid::from_cells(rows, cols, cells)),
        }
    }
}

/// Fill a grid with each cell alive independently with probability `density`.
pub fn random_grid<R: Rng + ?Sized>(rows: usize, cols: usize, density: f64, rng: &mut R) -> Grid {
    Grid::from_fn(rows, cols, |_, _| rng.gen_bool(density))
}
