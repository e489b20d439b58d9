//! CLI argument parsing for spread-incomplete

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spread-incomplete")]
#[command(
    author,
    version,
    about = "Add a second entry for incomplete games in a Retrosheet log",
    long_about = None
)]
pub struct Cli {
    /// Game log files to read ("-" for stdin, stdin if none)
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Input paths, with stdin standing in when none were given
    pub fn inputs(&self) -> Vec<PathBuf> {
        if self.files.is_empty() {
            vec![PathBuf::from("-")]
        } else {
            self.files.clone()
        }
    }
}
