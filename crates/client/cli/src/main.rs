//! Terminal client entry point.
//!
//! Builds the corner-to-corner scenario from environment configuration, runs
//! one episode with the selected display surface and prints a summary.
mod config;
mod logging;
mod presentation;
mod report;

use std::io;

use anyhow::{Context, Result};
use gridworld_core::{
    EpisodeEngine, EpisodeReport, Grid, NoPacing, NoopRenderer, Pacer, Renderer, scenario,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use config::{CliConfig, DisplayMode};
use presentation::{PlainRenderer, SleepPacer, TuiRenderer};
use report::EpisodeSummary;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();

    let (_guard, log_file) = logging::setup_logging(config.log_dir.as_deref())?;
    for key in &config.rejected {
        tracing::warn!(key, "ignoring unparsable environment variable, using default");
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!(
        seed,
        width = config.sim.width,
        height = config.sim.height,
        num_steps = config.sim.num_steps,
        display = %config.display,
        "starting gridworld"
    );

    let mut grid = scenario::corner_to_corner(&config.sim).context("failed to build grid")?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let report = run(&config, &mut grid, &mut rng)?;
    tracing::info!(outcome = %report.outcome, ticks = report.ticks_simulated(), "episode finished");

    EpisodeSummary::new(seed, &report).write_to(&mut io::stdout().lock(), config.report)?;
    if config.display != DisplayMode::Headless {
        eprintln!("log: {}", log_file.display());
    }

    Ok(())
}

/// Runs the episode with the renderer and pacer matching the display mode.
///
/// The renderer is dropped before returning so the terminal is restored
/// before the summary is printed.
fn run(config: &CliConfig, grid: &mut Grid, rng: &mut ChaCha8Rng) -> Result<EpisodeReport> {
    let mut pacer: Box<dyn Pacer> = match config.display {
        DisplayMode::Headless => Box::new(NoPacing),
        DisplayMode::Tui | DisplayMode::Plain => Box::new(SleepPacer::new(config.pacing)),
    };
    let mut renderer: Box<dyn Renderer> = match config.display {
        DisplayMode::Tui => Box::new(TuiRenderer::new().context("failed to set up terminal")?),
        DisplayMode::Plain => Box::new(PlainRenderer::stdout()),
        DisplayMode::Headless => Box::new(NoopRenderer),
    };

    let report = EpisodeEngine::from_config(grid, &config.sim).run(
        config.sim.num_steps,
        rng,
        renderer.as_mut(),
        pacer.as_mut(),
    );

    Ok(report)
}
