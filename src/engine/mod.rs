//! Simulation engine - owns the current generation and drives it forward.
//!
//! [`SimulationEngine`] holds the `(grid, generation, state)` triple and
//! advances it one tick at a time. [`Scheduler`] runs those ticks on a fixed
//! wall-clock interval from a dedicated thread.

mod scheduler;

pub use scheduler::*;

use serde::{Deserialize, Serialize};

use crate::compute::{Grid, step};
use crate::schema::{ConfigError, LifeConfig, Seed};

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    #[default]
    NotStarted,
    Running,
    /// A generation equalled its predecessor. Terminal.
    Stabilized,
    /// Halted externally via `stop()` before stabilizing. Terminal.
    Stopped,
}

impl RunState {
    /// No tick can change the grid again.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, RunState::Stabilized | RunState::Stopped)
    }

    pub fn label(self) -> &'static str {
        match self {
            RunState::NotStarted => "not started",
            RunState::Running => "running",
            RunState::Stabilized => "stabilized",
            RunState::Stopped => "stopped",
        }
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The grid changed and the generation counter moved to `generation`.
    Advanced { generation: u64 },
    /// The grid reached a fixed point, but the run keeps ticking
    /// (`halt_on_stable == false`).
    Unchanged { generation: u64 },
    /// The grid reached a fixed point and the run is now over.
    Stabilized { generation: u64 },
    /// The run was already in a terminal state; nothing happened.
    Idle,
}

/// Point-in-time copy of the engine state for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub grid: Grid,
    pub generation: u64,
    pub state: RunState,
}

/// Owner of the simulation state.
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    grid: Grid,
    generation: u64,
    state: RunState,
    halt_on_stable: bool,
}

impl SimulationEngine {
    /// Validate `config`, seed the first generation and start running.
    pub fn new(config: &LifeConfig, seed: &Seed) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = seed.generate(config)?;
        log::debug!(
            "Seeded {}x{} grid with {} live cells",
            grid.rows(),
            grid.cols(),
            grid.live_count()
        );
        Ok(Self::from_grid(grid, config.halt_on_stable))
    }

    /// Start running from an explicit first generation.
    ///
    /// Degenerate grids are accepted here; they stabilize on the first tick.
    pub fn from_grid(grid: Grid, halt_on_stable: bool) -> Self {
        let mut engine = Self {
            grid,
            generation: 0,
            state: RunState::NotStarted,
            halt_on_stable,
        };
        engine.start();
        engine
    }

    fn start(&mut self) {
        if self.state == RunState::NotStarted {
            self.state = RunState::Running;
        }
    }

    /// Advance one generation, or detect that the grid is a fixed point.
    ///
    /// The grid and generation are only replaced when the step changed
    /// something; a fixed point never increments the generation.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != RunState::Running {
            return TickOutcome::Idle;
        }

        let result = step(&self.grid);
        if !result.changed {
            if self.halt_on_stable {
                self.state = RunState::Stabilized;
                log::info!("Stabilized after {} generations", self.generation);
                return TickOutcome::Stabilized {
                    generation: self.generation,
                };
            }
            return TickOutcome::Unchanged {
                generation: self.generation,
            };
        }

        self.grid = result.next;
        self.generation += 1;
        log::debug!(
            "Generation {}: {} live cells",
            self.generation,
            self.grid.live_count()
        );
        TickOutcome::Advanced {
            generation: self.generation,
        }
    }

    /// Halt a running simulation. Returns false if it had already ended.
    pub fn stop(&mut self) -> bool {
        if self.state.is_terminal() {
            return false;
        }
        self.state = RunState::Stopped;
        log::info!("Stopped at generation {}", self.generation);
        true
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid.clone(),
            generation: self.generation,
            state: self.state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::NamedPattern;

    fn blinker() -> Grid {
        Grid::from_cells(5, 5, &[(2, 1), (2, 2), (2, 3)])
    }

    fn block() -> Grid {
        Grid::from_cells(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)])
    }

    #[test]
    fn test_new_is_running_at_generation_zero() {
        let config = LifeConfig {
            rng_seed: Some(3),
            ..Default::default()
        };
        let engine = SimulationEngine::new(&config, &Seed::random()).unwrap();
        assert_eq!(engine.state(), RunState::Running);
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.grid().rows(), 10);
        assert_eq!(engine.grid().cols(), 10);
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = LifeConfig {
            interval_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            SimulationEngine::new(&config, &Seed::random()),
            Err(ConfigError::InvalidInterval)
        ));
    }

    #[test]
    fn test_new_rejects_overflowing_grid() {
        let config = LifeConfig {
            rows: 1 << (usize::BITS / 2),
            cols: 1 << (usize::BITS / 2),
            ..Default::default()
        };
        assert!(matches!(
            SimulationEngine::new(&config, &Seed::named(NamedPattern::Block)),
            Err(ConfigError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_generation_counts_changed_ticks() {
        let mut engine = SimulationEngine::from_grid(blinker(), true);
        for n in 1..=10 {
            assert_eq!(engine.tick(), TickOutcome::Advanced { generation: n });
            assert_eq!(engine.generation(), n);
            assert_eq!(engine.state(), RunState::Running);
        }
        assert_eq!(engine.grid(), &blinker());
    }

    #[test]
    fn test_still_life_stabilizes_on_first_tick() {
        let mut engine = SimulationEngine::from_grid(block(), true);
        assert_eq!(engine.tick(), TickOutcome::Stabilized { generation: 0 });
        assert_eq!(engine.state(), RunState::Stabilized);
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.grid(), &block());
    }

    #[test]
    fn test_generation_stops_at_stabilization() {
        // L-tromino becomes a block after one generation.
        let grid = Grid::from_cells(4, 4, &[(1, 1), (2, 1), (2, 2)]);
        let mut engine = SimulationEngine::from_grid(grid, true);

        assert_eq!(engine.tick(), TickOutcome::Advanced { generation: 1 });
        assert_eq!(engine.tick(), TickOutcome::Stabilized { generation: 1 });
        let frozen = engine.snapshot();

        for _ in 0..5 {
            assert_eq!(engine.tick(), TickOutcome::Idle);
        }
        assert_eq!(engine.snapshot(), frozen);
    }

    #[test]
    fn test_keep_running_on_fixed_point() {
        let mut engine = SimulationEngine::from_grid(block(), false);
        for _ in 0..3 {
            assert_eq!(engine.tick(), TickOutcome::Unchanged { generation: 0 });
        }
        assert_eq!(engine.state(), RunState::Running);
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_degenerate_grid_stabilizes_immediately() {
        let mut engine = SimulationEngine::from_grid(Grid::new(0, 0), true);
        assert_eq!(engine.tick(), TickOutcome::Stabilized { generation: 0 });
    }

    #[test]
    fn test_all_dead_stabilizes_immediately() {
        let config = LifeConfig {
            density: 0.0,
            ..Default::default()
        };
        let mut engine = SimulationEngine::new(&config, &Seed::random()).unwrap();
        assert_eq!(engine.tick(), TickOutcome::Stabilized { generation: 0 });
    }

    #[test]
    fn test_stop_freezes_state() {
        let mut engine = SimulationEngine::from_grid(blinker(), true);
        engine.tick();
        assert!(engine.stop());
        assert_eq!(engine.state(), RunState::Stopped);

        let frozen = engine.snapshot();
        assert_eq!(engine.tick(), TickOutcome::Idle);
        assert_eq!(engine.snapshot(), frozen);
        assert!(!engine.stop());
    }

    #[test]
    fn test_stop_after_stabilized_keeps_stabilized() {
        let mut engine = SimulationEngine::from_grid(block(), true);
        engine.tick();
        assert!(!engine.stop());
        assert_eq!(engine.state(), RunState::Stabilized);
    }

    #[test]
    fn test_named_seed() {
        let config = LifeConfig {
            rows: 5,
            cols: 5,
            ..Default::default()
        };
        let mut engine =
            SimulationEngine::new(&config, &Seed::named(NamedPattern::Blinker)).unwrap();
        engine.tick();
        assert_eq!(engine.grid().live_cells(), vec![(1, 2), (2, 2), (3, 2)]);
    }
}
