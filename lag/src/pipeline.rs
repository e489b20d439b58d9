//! Game log in, lag table out
//!
//! Wires a game stream through a [`RollingLagTracker`] into a
//! [`RecordSink`], choosing resolver and initial state from the [`LagMode`].

use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{Game, LagRecord};
use crate::error::LagError;
use crate::resolver::{ZoneResolver, ZoneTable};
use crate::sink::{CsvSink, JsonLinesSink, RecordSink};
use crate::tracker::{InitialState, RollingLagTracker};

/// Which zone each game counts for, and how teams start out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LagMode {
    /// Zone of the park, teams created on first appearance
    #[default]
    Venue,
    /// Zone of the home team's usual park (diagnostic only)
    HomeTeam,
    /// Home-team zones, four mainland zones, known teams only, no park column
    Legacy,
}

impl LagMode {
    /// Whether output carries the park column
    pub fn includes_venue(self) -> bool {
        self != LagMode::Legacy
    }

    pub fn initial_state(self, table: &ZoneTable) -> InitialState {
        match self {
            LagMode::Venue | LagMode::HomeTeam => InitialState::Lazy,
            LagMode::Legacy => InitialState::Prepopulated(table.team_ids()),
        }
    }
}

impl std::fmt::Display for LagMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Venue => write!(f, "venue"),
            Self::HomeTeam => write!(f, "home-team"),
            Self::Legacy => write!(f, "legacy"),
        }
    }
}

impl std::str::FromStr for LagMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "venue" | "park" => Ok(Self::Venue),
            "home-team" | "home_team" | "ht" => Ok(Self::HomeTeam),
            "legacy" => Ok(Self::Legacy),
            _ => Err(format!("Unknown lag mode: {}", s)),
        }
    }
}

/// Output format for lag records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" | "jsonl" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Settings for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub mode: LagMode,
    pub format: OutputFormat,
    /// Add completion rows for suspended games before tracking
    pub spread_incomplete: bool,
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every game was processed
    Completed,
    /// The consumer closed the output first
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub games: usize,
    pub records: usize,
    /// Teams that played at least one game
    pub teams: usize,
    pub outcome: RunOutcome,
}

/// Track lag over `games` and write every record to `out`
///
/// A closed output is not an error: the run stops and reports
/// [`RunOutcome::Closed`]. Any other failure ends the run with that error.
pub fn run<G, W>(games: G, table: &ZoneTable, options: &RunOptions, out: W) -> Result<RunSummary, LagError>
where
    G: IntoIterator<Item = Result<Game, LagError>>,
    W: Write,
{
    debug!(mode = %options.mode, format = ?options.format, "run: called");
    let include_venue = options.mode.includes_venue();

    match options.format {
        OutputFormat::Csv => run_with_sink(games, table, options.mode, CsvSink::new(out, include_venue)),
        OutputFormat::Json => run_with_sink(games, table, options.mode, JsonLinesSink::new(out, include_venue)),
    }
}

fn run_with_sink<G, S>(games: G, table: &ZoneTable, mode: LagMode, sink: S) -> Result<RunSummary, LagError>
where
    G: IntoIterator<Item = Result<Game, LagError>>,
    S: RecordSink,
{
    let initial = mode.initial_state(table);
    match mode {
        LagMode::Venue => drain(
            RollingLagTracker::with_initial_state(games, table.venue_resolver(), initial),
            sink,
        ),
        LagMode::HomeTeam => drain(
            RollingLagTracker::with_initial_state(games, table.home_team_resolver(), initial),
            sink,
        ),
        LagMode::Legacy => drain(
            RollingLagTracker::with_initial_state(games, table.home_team_resolver().continental_only(), initial),
            sink,
        ),
    }
}

/// Stop quietly on a closed output, propagate anything else
fn closed(result: Result<(), LagError>) -> Result<bool, LagError> {
    match result {
        Ok(()) => Ok(false),
        Err(e) if e.is_broken_pipe() => {
            debug!("output closed by consumer");
            Ok(true)
        }
        Err(e) => Err(e),
    }
}

fn drain<I, R, S>(mut tracker: RollingLagTracker<I, R>, mut sink: S) -> Result<RunSummary, LagError>
where
    I: Iterator<Item = Result<Game, LagError>>,
    R: ZoneResolver,
    S: RecordSink,
{
    let mut records = 0;
    let mut outcome = RunOutcome::Completed;

    if closed(sink.start())? {
        outcome = RunOutcome::Closed;
    } else {
        for record in tracker.by_ref() {
            let record: LagRecord = record?;
            if closed(sink.write_record(&record))? {
                outcome = RunOutcome::Closed;
                break;
            }
            records += 1;
        }
        if outcome == RunOutcome::Completed && closed(sink.finish())? {
            outcome = RunOutcome::Closed;
        }
    }

    let teams = tracker.teams();
    for (team, state) in teams.iter() {
        if let Some(state) = state {
            debug!(team, lag = state.last_lag, zone = %state.last_zone, last_date = %state.last_date, "final state");
        }
    }

    let summary = RunSummary {
        games: tracker.games_processed(),
        records,
        teams: teams.iter().filter(|(_, state)| state.is_some()).count(),
        outcome,
    };
    info!(
        games = summary.games,
        records = summary.records,
        teams = summary.teams,
        outcome = ?summary.outcome,
        "lag run finished"
    );
    Ok(summary)
}
