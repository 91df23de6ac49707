use std::path::PathBuf;

use clap::Parser;

use crate::types::{DEFAULT_SAVE_PATH, GRID_SIZE, TICK_MS};

/// Health-valued Game of Life in the terminal.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Rule config file (six lines). A random rule is generated when omitted.
    pub config: Option<PathBuf>,

    /// Seed cells from a `[x,y]=hp` pattern file after randomizing.
    #[arg(long)]
    pub pattern: Option<PathBuf>,

    /// Grid width and height in cells.
    #[arg(long, default_value_t = GRID_SIZE)]
    pub size: usize,

    /// RNG seed for reproducible runs. Entropy is used when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds between generations.
    #[arg(long, default_value_t = TICK_MS)]
    pub tick_ms: u32,

    /// Where `s` writes the current rule.
    #[arg(long, default_value = DEFAULT_SAVE_PATH)]
    pub save_path: PathBuf,

    /// Print the rule config to stdout and exit.
    #[arg(long, default_value_t = false)]
    pub print_config: bool,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    pub fn log_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Warn)
    }

    /// Config file the reload key reads: the one given on the command line,
    /// otherwise the save path.
    pub fn reload_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(|| self.save_path.clone())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.size == 0 {
            anyhow::bail!("--size must be at least 1");
        }
        if self.size > i32::MAX as usize {
            anyhow::bail!("--size {} is too large", self.size);
        }
        Ok(())
    }
}
