use std::fs::File;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use space_garbage::assets::Assets;
use space_garbage::config::Config;
use space_garbage::display::Terminal;
use space_garbage::game::init_game;

// ── Logging ───────────────────────────────────────────────────────────────────

/// Logs go to a file when asked for; the terminal belongs to the game.
fn init_logging(config: &Config) -> anyhow::Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_logging(&config)?;

    // Load everything before touching the terminal so errors stay readable.
    let assets = Assets::load(&config.assets)
        .with_context(|| format!("failed to load assets from {}", config.assets.display()))?;

    let mut terminal = Terminal::open().context("cannot initialise the terminal")?;
    let (rows, columns) = terminal.size();
    let (mut world, mut scheduler) = init_game(&config, assets, rows as usize, columns as usize);

    scheduler.run(&mut world, &mut terminal, config.tick_period())?;
    drop(terminal);

    info!(year = world.clock.year(), "bye");
    Ok(())
}
