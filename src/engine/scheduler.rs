//! Fixed-interval ticker that drives a [`SimulationEngine`].
//!
//! Ticks run on one background thread and are strictly sequential. The
//! engine sits behind a single mutex, so each tick replaces the
//! `(grid, generation, state)` triple as one unit and readers never observe
//! a half-applied update.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::{SimulationEngine, Snapshot, TickOutcome};
use crate::schema::{ConfigError, LifeConfig, Seed};

/// Callback invoked with the fresh state after every tick.
pub type TickObserver = Box<dyn FnMut(&Snapshot) + Send>;

/// Runs [`SimulationEngine::tick`] every `interval` until the run ends.
///
/// The ticker thread exits on its own once the engine reaches a terminal
/// state. [`Scheduler::stop`] ends it early; dropping the scheduler does
/// the same.
pub struct Scheduler {
    engine: Arc<Mutex<SimulationEngine>>,
    interval: Duration,
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Scheduler {
    /// Build an engine from `config` and `seed` and start ticking.
    pub fn from_config(config: &LifeConfig, seed: &Seed) -> Result<Self, ConfigError> {
        let engine = SimulationEngine::new(config, seed)?;
        Self::start(engine, config.interval())
    }

    /// Start ticking `engine` every `interval`.
    pub fn start(engine: SimulationEngine, interval: Duration) -> Result<Self, ConfigError> {
        Self::spawn(engine, interval, None)
    }

    /// Like [`Scheduler::start`], calling `observer` after each tick.
    pub fn with_observer<F>(
        engine: SimulationEngine,
        interval: Duration,
        observer: F,
    ) -> Result<Self, ConfigError>
    where
        F: FnMut(&Snapshot) + Send + 'static,
    {
        Self::spawn(engine, interval, Some(Box::new(observer)))
    }

    fn spawn(
        engine: SimulationEngine,
        interval: Duration,
        observer: Option<TickObserver>,
    ) -> Result<Self, ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::InvalidInterval);
        }

        let engine = Arc::new(Mutex::new(engine));
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let mut observer = observer;
                loop {
                    // Wait out the interval; a message or a dropped sender means stop.
                    match stop_rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => {}
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }

                    let (outcome, snapshot) = {
                        let mut engine = lock(&engine);
                        let outcome = engine.tick();
                        (outcome, observer.as_ref().map(|_| engine.snapshot()))
                    };

                    if let (Some(observer), Some(snapshot)) = (observer.as_mut(), snapshot) {
                        observer(&snapshot);
                    }

                    match outcome {
                        TickOutcome::Advanced { .. } | TickOutcome::Unchanged { .. } => {}
                        TickOutcome::Stabilized { .. } | TickOutcome::Idle => break,
                    }
                }
                log::debug!("Ticker thread exiting");
            })
        };

        log::info!("Scheduler started with {:?} interval", interval);

        Ok(Self {
            engine,
            interval,
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        })
    }

    /// Current `(grid, generation, state)`, copied under the lock.
    pub fn snapshot(&self) -> Snapshot {
        lock(&self.engine).snapshot()
    }

    /// Tick interval chosen at construction.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// True once the ticker thread has exited (terminal state or stopped).
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Halt the run. No tick fires after this returns.
    ///
    /// Safe to call repeatedly and after the run has stabilized.
    pub fn stop(&mut self) {
        lock(&self.engine).stop();

        // Dropping the sender wakes the ticker out of its wait.
        self.stop_tx.take();
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            log::warn!("Ticker thread panicked");
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Lock the engine, recovering the state if a tick panicked mid-update.
fn lock(engine: &Mutex<SimulationEngine>) -> MutexGuard<'_, SimulationEngine> {
    engine.lock().unwrap_or_else(PoisonError::into_inner)
}
