use std::io::{self, BufWriter};
use std::path::Path;

use clap::Parser;
use eyre::{Context, Result};
use log::{debug, info};

use spread::cli::Cli;
use spread::{SpreadError, SpreadStats, reader_builder, spread_csv, writer_builder};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
    Ok(())
}

fn spread_path(path: &Path, writer: &mut csv::Writer<BufWriter<io::StdoutLock<'static>>>) -> Result<SpreadStats, SpreadError> {
    if path == Path::new("-") {
        spread_csv(reader_builder().from_reader(io::stdin().lock()), writer)
    } else {
        let reader = reader_builder().from_path(path)?;
        spread_csv(reader, writer)
    }
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let mut writer = writer_builder().from_writer(BufWriter::new(io::stdout().lock()));

    for path in cli.inputs() {
        debug!("spreading {}", path.display());
        match spread_path(&path, &mut writer) {
            Ok(stats) => info!("{}: {} rows, {} completion rows added", path.display(), stats.rows, stats.added),
            Err(e) if e.is_broken_pipe() => {
                debug!("stdout closed, stopping");
                return Ok(());
            }
            Err(e) => return Err(e).context(format!("Failed to spread {}", path.display())),
        }
    }

    Ok(())
}
