//! termlife CLI - Run Game of Life in the terminal until it stabilizes.

mod tui;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use clap::Parser;
use termlife::{
    ConfigError, LifeConfig, NamedPattern, Scheduler, Seed, SimulationEngine, render::render_text,
};

/// Conway's Game of Life, advancing on a fixed timer and halting once the
/// pattern stops changing.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of rows [default: 10]
    #[arg(long)]
    rows: Option<usize>,

    /// Number of columns [default: 10]
    #[arg(long)]
    cols: Option<usize>,

    /// Milliseconds between generations [default: 150]
    #[arg(long, value_name = "MS")]
    interval: Option<u64>,

    /// Probability of a cell starting alive in a random grid [default: 0.3]
    #[arg(long)]
    density: Option<f64>,

    /// RNG seed for a reproducible random grid
    #[arg(long)]
    seed: Option<u64>,

    /// Start from a named pattern instead of a random grid
    /// (blinker, block, toad, beacon, glider, r-pentomino)
    #[arg(long, value_name = "NAME")]
    pattern: Option<NamedPattern>,

    /// JSON configuration file. A sibling `<name>.seed.json` is used as the seed.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the effective configuration and seed as JSON, then exit
    #[arg(long)]
    print_config: bool,

    /// Keep ticking after the pattern stabilizes
    #[arg(long)]
    keep_running: bool,

    /// Exit as soon as the run ends instead of waiting for [q]
    #[arg(long)]
    exit_on_stable: bool,

    /// Print each generation as plain text instead of redrawing in place
    #[arg(long)]
    plain: bool,
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Error reading seed file {path}: {source}")]
    SeedFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Error parsing seed file {path}: {source}")]
    SeedParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = load_config(&args)?;
    let seed = load_seed(&args)?;

    if args.print_config {
        print_config(&config, &seed);
        return Ok(());
    }

    log::info!(
        "Starting {}x{} grid, {}ms interval",
        config.rows,
        config.cols,
        config.interval_ms
    );

    let engine = SimulationEngine::new(&config, &seed)?;
    let (tx, rx) = mpsc::channel();
    let scheduler = Scheduler::with_observer(engine, config.interval(), move |snapshot| {
        // The receiver only goes away when the UI is shutting down.
        let _ = tx.send(snapshot.clone());
    })?;

    if args.plain {
        println!("{}\n", render_text(&scheduler.snapshot()));
        // The channel closes when the ticker thread exits.
        for snapshot in rx {
            println!("{}\n", render_text(&snapshot));
        }
        return Ok(());
    }

    let last = tui::run(scheduler, rx, args.exit_on_stable)?;
    println!("{}", render_text(&last));
    Ok(())
}

/// Defaults, then the config file, then command-line overrides.
fn load_config(args: &Args) -> Result<LifeConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => LifeConfig::from_json_file(path)?,
        None => LifeConfig::default(),
    };

    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.cols = cols;
    }
    if let Some(interval) = args.interval {
        config.interval_ms = interval;
    }
    if let Some(density) = args.density {
        config.density = density;
    }
    if args.seed.is_some() {
        config.rng_seed = args.seed;
    }
    if args.keep_running {
        config.halt_on_stable = false;
    }

    config.validate()?;
    Ok(config)
}

fn load_seed(args: &Args) -> Result<Seed, AppError> {
    if let Some(name) = args.pattern {
        return Ok(Seed::named(name));
    }

    match args.config.as_deref().map(seed_path) {
        Some(path) if path.exists() => {
            let text = fs::read_to_string(&path).map_err(|source| AppError::SeedFile {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&text).map_err(|source| AppError::SeedParse { path, source })
        }
        _ => Ok(Seed::default()),
    }
}

fn seed_path(config_path: &Path) -> PathBuf {
    config_path.with_extension("seed.json")
}

fn print_config(config: &LifeConfig, seed: &Seed) {
    match (
        serde_json::to_string_pretty(config),
        serde_json::to_string_pretty(seed),
    ) {
        (Ok(config), Ok(seed)) => {
            println!("Configuration (config.json):");
            println!("{config}");
            println!();
            println!("Seed (config.seed.json):");
            println!("{seed}");
        }
        (Err(e), _) | (_, Err(e)) => eprintln!("Error serializing config: {e}"),
    }
}
