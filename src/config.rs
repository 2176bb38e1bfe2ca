//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::progression::START_YEAR;
use crate::tasks::YEAR_TICKS;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "space_garbage", about = "Dodge and shoot falling space garbage")]
pub struct Config {
    /// Directory holding `animations/` and `garbage/`.
    #[arg(long, default_value = "assets")]
    pub assets: PathBuf,

    /// Length of one tick in milliseconds.
    #[arg(long, default_value_t = 100)]
    pub tick_ms: u64,

    /// Number of twinkling stars.
    #[arg(long, default_value_t = 100)]
    pub stars: usize,

    #[arg(long, default_value_t = START_YEAR)]
    pub start_year: u32,

    /// Ticks per game year.
    #[arg(long, default_value_t = YEAR_TICKS)]
    pub year_ticks: u32,

    /// Seed for a reproducible game.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs here; the terminal itself is taken by the game.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::parse_from(["space_garbage"])
    }
}

impl Config {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
