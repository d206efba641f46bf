//! Configuration types for a Life run.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Upper bound on rows * cols.
pub const MAX_CELLS: usize = 1 << 24;

fn default_rows() -> usize {
    10
}

fn default_cols() -> usize {
    10
}

fn default_interval_ms() -> u64 {
    150
}

fn default_density() -> f64 {
    0.3
}

fn default_halt_on_stable() -> bool {
    true
}

/// Top-level run configuration.
///
/// Missing JSON fields fall back to the same values as [`Default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeConfig {
    /// Grid height in cells.
    #[serde(default = "default_rows")]
    pub rows: usize,
    /// Grid width in cells.
    #[serde(default = "default_cols")]
    pub cols: usize,
    /// Milliseconds between generations.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Probability of each cell starting alive under random seeding.
    #[serde(default = "default_density")]
    pub density: f64,
    /// RNG seed for reproducible random grids. `None` seeds from entropy.
    #[serde(default, alias = "seed")]
    pub rng_seed: Option<u64>,
    /// Stop ticking once a generation equals its predecessor.
    #[serde(default = "default_halt_on_stable")]
    pub halt_on_stable: bool,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            interval_ms: default_interval_ms(),
            density: default_density(),
            rng_seed: None,
            halt_on_stable: default_halt_on_stable(),
        }
    }
}

impl LifeConfig {
    /// Tick interval as a [`Duration`].
    #[inline]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Get total grid size (rows * cols), or `None` if it overflows.
    #[inline]
    pub fn grid_size(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cells = match self.grid_size() {
            Some(cells) if cells > 0 => cells,
            _ => {
                return Err(ConfigError::InvalidDimensions {
                    rows: self.rows,
                    cols: self.cols,
                });
            }
        };
        if cells > MAX_CELLS {
            return Err(ConfigError::GridTooLarge {
                rows: self.rows,
                cols: self.cols,
                max: MAX_CELLS,
            });
        }
        if self.interval_ms == 0 {
            return Err(ConfigError::InvalidInterval);
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::InvalidDensity(self.density));
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions must be positive and fit in memory (got {rows}x{cols})")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("Grid {rows}x{cols} exceeds the {max} cell limit")]
    GridTooLarge { rows: usize, cols: usize, max: usize },
    #[error("Tick interval must be positive")]
    InvalidInterval,
    #[error("Density must be within [0, 1] (got {0})")]
    InvalidDensity(f64),
    #[error("Pattern {name} ({height}x{width}) does not fit in a {rows}x{cols} grid")]
    PatternTooLarge {
        name: String,
        height: usize,
        width: usize,
        rows: usize,
        cols: usize,
    },
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = LifeConfig::default();
        assert_eq!(config.rows, 10);
        assert_eq!(config.cols, 10);
        assert_eq!(config.interval(), Duration::from_millis(150));
        assert!(config.halt_on_stable);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let config = LifeConfig {
            rows: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimensions { rows: 0, cols: 10 })
        ));

        let config = LifeConfig {
            cols: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_overflowing_dimensions_rejected() {
        let config = LifeConfig {
            rows: 1 << (usize::BITS / 2),
            cols: 1 << (usize::BITS / 2),
            ..Default::default()
        };
        assert_eq!(config.grid_size(), None);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimensions { .. })
        ));

        let config = LifeConfig {
            rows: usize::MAX,
            cols: 2,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_cell_limit() {
        let config = LifeConfig {
            rows: 10_000,
            cols: 10_000,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GridTooLarge { max: MAX_CELLS, .. })
        ));

        let config = LifeConfig {
            rows: 4096,
            cols: 4096,
            ..Default::default()
        };
        assert_eq!(config.grid_size(), Some(MAX_CELLS));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = LifeConfig {
            interval_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidInterval)
        ));
    }

    #[test]
    fn test_density_range() {
        for density in [-0.1, 1.5, f64::NAN] {
            let config = LifeConfig {
                density,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidDensity(_))
            ));
        }
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: LifeConfig = serde_json::from_str(r#"{"rows": 20}"#).unwrap();
        assert_eq!(config.rows, 20);
        assert_eq!(config.cols, 10);
        assert_eq!(config.interval_ms, 150);
        assert_eq!(config.rng_seed, None);
    }

    #[test]
    fn test_seed_key_alias() {
        let config: LifeConfig = serde_json::from_str(r#"{"seed": 9}"#).unwrap();
        assert_eq!(config.rng_seed, Some(9));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"rows": 4, "cols": 6, "interval_ms": 20, "rng_seed": 7}}"#
        )
        .unwrap();

        let config = LifeConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.rows, 4);
        assert_eq!(config.cols, 6);
        assert_eq!(config.interval_ms, 20);
        assert_eq!(config.rng_seed, Some(7));
    }

    #[test]
    fn test_from_json_file_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"interval_ms": 0}}"#).unwrap();
        assert!(matches!(
            LifeConfig::from_json_file(file.path()),
            Err(ConfigError::InvalidInterval)
        ));
    }

    #[test]
    fn test_from_json_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            LifeConfig::from_json_file(dir.path().join("missing.json")),
            Err(ConfigError::Io(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            LifeConfig::from_json_file(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
