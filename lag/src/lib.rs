//! tzlag - rolling time zone lag across a season of games
//!
//! Every team carries a signed lag that grows by one for each time zone
//! crossed (positive going east, negative going west) and shrinks back
//! toward zero with each day spent without moving. Feeding a season's game
//! log through [`RollingLagTracker`] yields the lag of both teams in every
//! game.
//!
//! # Modules
//!
//! - [`recurrence`] - The lag recurrence itself
//! - [`tracker`] - Per-team fold over a date-ordered game stream
//! - [`resolver`] - Park-based and home-team-based zone lookup
//! - [`source`] - Retrosheet game log parsing
//! - [`sink`] - CSV and JSON lines output
//! - [`pipeline`] - Source to sink wiring used by the CLI
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use tzlag::{Game, ZoneTable, stream};
//!
//! let table = ZoneTable::builtin();
//! for record in stream(games, table.venue_resolver()) {
//!     let record = record?;
//!     println!("{} {} {}", record.date, record.team_id, record.lag);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod pipeline;
pub mod recurrence;
pub mod resolver;
pub mod sink;
pub mod source;
pub mod tables;
pub mod tracker;

// Re-export commonly used types
pub use config::Config;
pub use domain::{DATE_FORMAT, DoubleHeaderSlot, Game, LagRecord, ZoneOffset};
pub use error::LagError;
pub use pipeline::{LagMode, OutputFormat, RunOptions, RunOutcome, RunSummary, run};
pub use recurrence::{compute_lag, lag_between};
pub use resolver::{HomeTeamZones, VenueZones, ZoneResolver, ZoneTable};
pub use sink::{CsvSink, HEADERS, JsonLinesSink, RecordSink};
pub use source::{GameReader, RowSource, parse_row};
pub use tracker::{InitialState, RollingLagTracker, TeamLagState, stream};
