//! tzlag - time zone lag calculator
//!
//! CLI entry point: game logs in, one lag row per team per game out.

use std::io::{self, BufWriter};

use clap::Parser;
use eyre::{Context, Result};
use tracing::{debug, info, warn};

use tzlag::cli::Cli;
use tzlag::config::Config;
use tzlag::{GameReader, LagMode, RunOutcome, run};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Determine log level with priority: CLI --log-level > config file > default (WARN)
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s);
                tracing::Level::WARN
            }
        },
        None => tracing::Level::WARN,
    };

    // stdout carries the lag table, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    debug!("Logging initialized (level: {:?})", level);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load log level from config file early (before full config load)
    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let options = cli.run_options(&config);
    let table = config.zone_table();

    match options.mode {
        LagMode::HomeTeam => warn!("Using home team time zones: results are for comparison only"),
        LagMode::Legacy => debug!("main: legacy four-zone mode"),
        LagMode::Venue => debug!("main: park time zones"),
    }

    let games = GameReader::from_paths(cli.inputs(), options.spread_incomplete);
    let out = BufWriter::new(io::stdout().lock());

    let summary = run(games, &table, &options, out).context("Failed to calculate lag")?;

    if summary.outcome == RunOutcome::Closed {
        debug!("main: output closed early, exiting cleanly");
    }
    info!(
        "Wrote {} records for {} teams over {} games",
        summary.records, summary.teams, summary.games
    );

    Ok(())
}
