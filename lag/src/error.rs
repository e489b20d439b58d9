//! Lag error types

use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use spread::SpreadError;
use thiserror::Error;

use crate::domain::ZoneOffset;

/// Errors that can occur while reading games or tracking lag
///
/// None of these are transient: the same input always fails the same way.
#[derive(Debug, Error)]
pub enum LagError {
    #[error("Logs are not sorted by date: {team} played on {last_date}, then on {date}")]
    UnsortedLog {
        team: String,
        date: NaiveDate,
        last_date: NaiveDate,
    },

    #[error("Unknown venue: {venue}")]
    UnknownVenue { venue: String },

    #[error("Unknown team: {team}")]
    UnknownTeam { team: String },

    #[error("No venue for {matchup} on {date}")]
    MissingVenue { date: NaiveDate, matchup: String },

    #[error("Zone {zone} for {id} is not one of ET, CT, MT, PT")]
    UnsupportedZone { id: String, zone: ZoneOffset },

    #[error("Line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("Failed to open {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl LagError {
    /// Check if this is a chronological ordering violation
    pub fn is_ordering(&self) -> bool {
        matches!(self, LagError::UnsortedLog { .. })
    }

    /// Check if this is a zone lookup miss
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            LagError::UnknownVenue { .. }
                | LagError::UnknownTeam { .. }
                | LagError::MissingVenue { .. }
                | LagError::UnsupportedZone { .. }
        )
    }

    /// Check if the output was closed by the consumer
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            LagError::Io(e) => e.kind() == io::ErrorKind::BrokenPipe,
            LagError::Csv(e) => matches!(e.kind(), csv::ErrorKind::Io(err) if err.kind() == io::ErrorKind::BrokenPipe),
            _ => false,
        }
    }
}

impl From<SpreadError> for LagError {
    fn from(err: SpreadError) -> Self {
        match err {
            SpreadError::MalformedCompletion { line, info } => LagError::MalformedRow {
                line,
                reason: format!("completion info '{}' has no park part", info),
            },
            SpreadError::Csv(e) => LagError::Csv(e),
            SpreadError::Io(e) => LagError::Io(e),
        }
    }
}
