use std::path::PathBuf;

use clap::Parser;
use coach_config::CoachConfig;

/// coach: exercise-driven tutoring chat in the terminal.
#[derive(Parser, Debug)]
#[command(name = "coach", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Exercise bank (JSON) override.
    #[arg(long)]
    pub exercises: Option<PathBuf>,

    /// Rules document override.
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Write a commented default config to the --config path (or ./coach.toml) and exit.
    #[arg(long)]
    pub init_config: bool,

    /// Print the effective config as TOML and exit.
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// Fold path overrides into the loaded config.
    pub fn apply_overrides(&self, config: &mut CoachConfig) {
        if let Some(ref path) = self.exercises {
            config.data.exercises_path = path.clone();
        }
        if let Some(ref path) = self.rules {
            config.data.rules_path = path.clone();
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
