//! CLI argument parsing for tzlag

use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use crate::config::Config;
use crate::pipeline::{LagMode, OutputFormat, RunOptions};

/// tzlag - time zone lag for every team in a game log
#[derive(Parser, Debug)]
#[command(
    name = "tzlag",
    author,
    version,
    about = "Calculate time zone lag for each team in a Retrosheet game log",
    long_about = "Calculate time zone lag for each team in a Retrosheet game log.\n\n\
                  FILE should be an uncompressed Retrosheet game log for a single season. \
                  Several files are read one after another. If no FILE is given, stdin is read."
)]
pub struct Cli {
    /// Game log files ("-" for stdin)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Use the home team's time zone rather than the park's.
    /// Do NOT use this: it only exists to show the discrepancies it causes.
    #[arg(long = "with-ht", alias = "with-home-team", conflicts_with = "legacy")]
    pub with_home_team: bool,

    /// Four-zone home-team calculation restricted to known teams, without park column
    #[arg(long)]
    pub legacy: bool,

    /// Add an entry on the completion date for suspended games
    #[arg(long)]
    pub spread_incomplete: bool,

    /// Output format (csv, json)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to config file
    #[arg(short, long, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,
}

impl Cli {
    /// Input paths; an empty list means stdin
    pub fn inputs(&self) -> Vec<PathBuf> {
        self.files.clone()
    }

    /// Command-line flags layered over the config file
    pub fn run_options(&self, config: &Config) -> RunOptions {
        let mode = if self.legacy {
            LagMode::Legacy
        } else if self.with_home_team {
            LagMode::HomeTeam
        } else {
            config.mode
        };

        let options = RunOptions {
            mode,
            format: self.format.unwrap_or(config.format),
            spread_incomplete: self.spread_incomplete || config.spread_incomplete,
        };
        debug!(?options, "Cli::run_options: resolved");
        options
    }
}
