//! termlife - Conway's Game of Life on a bounded grid, ticking on a fixed
//! interval and halting once the pattern stops changing.
//!
//! # Architecture
//!
//! - `schema`: Configuration and seeding of the first generation
//! - `compute`: Grid, neighbor counting and the B3/S23 generation step
//! - `engine`: Owned simulation state and the fixed-interval scheduler
//! - `render`: Plain-text frames for the presentation layer
//!
//! # Example
//!
//! ```rust,no_run
//! use termlife::{LifeConfig, Scheduler, Seed, render::render_text};
//!
//! let config = LifeConfig::default();
//! let scheduler = Scheduler::from_config(&config, &Seed::random())?;
//!
//! std::thread::sleep(std::time::Duration::from_secs(2));
//! println!("{}", render_text(&scheduler.snapshot()));
//! # Ok::<(), termlife::ConfigError>(())
//! ```

pub mod compute;
pub mod engine;
pub mod render;
pub mod schema;

// Re-export commonly used types
pub use compute::{Grid, GridStats, Step, count_live_neighbors, step};
pub use engine::{RunState, Scheduler, SimulationEngine, Snapshot, TickOutcome};
pub use schema::{ConfigError, LifeConfig, NamedPattern, Pattern, Seed};
