//! boids — a braille flock and its hawks, animated in the terminal.
//!
//! Every terminal character is a 2×4 braille dot cell, so an 80×24 terminal
//! shows a 158×96 unit domain (the last column is left free to avoid wrapping).
//! Predators are drawn as magenta arrows pointing where they fly.
//!
//! Keys: `q`, `Esc` or `Ctrl-C` quit.  Logs go to `debug.log` (see
//! `--log-file`) because the terminal is busy with the animation; the filter
//! comes from `RUST_LOG` and defaults to `info`.

mod screen;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use flock_core::{BoundaryConfig, FlockConfig, StrategyKind};
use flock_render::BrailleCanvas;
use flock_sim::SimBuilder;

use screen::Screen;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, ValueEnum)]
enum BoundaryArg {
    /// Toroidal wrap with a soft push off each edge.
    Wrap,
    /// Soft circular containment.
    Circle,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum StrategyArg {
    /// Chase the heaviest of eight bearing sectors.
    Sector,
    /// Chase the nearest boid.
    Nearest,
}

#[derive(Parser, Debug)]
#[command(name = "boids", version, about = "Braille boids with predators, in your terminal")]
struct Args {
    /// Number of boids (overrides the config).
    #[arg(long)]
    boids: Option<usize>,

    /// Target frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// RNG seed (overrides the config).
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many frames.
    #[arg(long)]
    frames: Option<u64>,

    /// Boundary policy.  Without `--config`, `circle` starts from the
    /// contained preset.
    #[arg(long, value_enum)]
    boundary: Option<BoundaryArg>,

    /// Pursuit strategy for every predator.
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    /// JSON flock configuration.  Missing fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write logs.
    #[arg(long, default_value = "debug.log")]
    log_file: PathBuf,

    /// Show the potential frame rate in the top-left corner.
    #[arg(long)]
    debug: bool,
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn load_config(args: &Args) -> Result<FlockConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open config {}", path.display()))?;
            serde_json::from_reader(file)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => match args.boundary {
            Some(BoundaryArg::Circle) => FlockConfig::contained(),
            _ => FlockConfig::default(),
        },
    };

    if args.config.is_some() {
        match args.boundary {
            Some(BoundaryArg::Wrap) => config.boundary = BoundaryConfig::default(),
            Some(BoundaryArg::Circle) => config.boundary = FlockConfig::contained().boundary,
            None => {}
        }
    }
    if let Some(strategy) = args.strategy {
        let kind = match strategy {
            StrategyArg::Sector => StrategyKind::SectorVoting,
            StrategyArg::Nearest => StrategyKind::NearestPursuit,
        };
        for predator in &mut config.predators {
            predator.strategy = kind;
        }
    }
    if let Some(n) = args.boids {
        config.agent_count = n;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    Ok(config)
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_file)?;

    let (cols, rows) = crossterm::terminal::size().context("failed to read terminal size")?;
    let width = f32::from(cols.saturating_sub(1)) * 2.0;
    let height = f32::from(rows) * 4.0;
    let config = load_config(&args)?.with_domain(width, height);
    log::info!("terminal {cols}×{rows} → domain {width}×{height}");

    let mut canvas = BrailleCanvas::new(config.width, config.height);
    let mut sim = SimBuilder::new(config).build().context("invalid flock configuration")?;

    let target_fps = f64::from(args.fps.max(1));
    let frame_time = Duration::from_secs_f64(1.0 / target_fps);
    let mut screen = Screen::enter(target_fps)?;
    let mut frame = 0u64;
    let mut potential_fps = None;

    loop {
        let start = Instant::now();
        if screen.quit_requested()? {
            break;
        }

        sim.step(&mut canvas);
        screen.draw(&canvas, potential_fps)?;
        frame += 1;
        if args.frames.is_some_and(|n| frame >= n) {
            break;
        }

        let busy = start.elapsed();
        if args.debug {
            potential_fps = Some(1.0 / busy.as_secs_f64().max(f64::EPSILON));
        }
        if let Some(rest) = frame_time.checked_sub(busy) {
            spin_sleep::sleep(rest);
        }
    }

    drop(screen);
    log::info!("stopped after {frame} frames at {}", sim.current_tick());
    Ok(())
}
