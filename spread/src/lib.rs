//! Spread - second entries for games completed on a later date
//!
//! Retrosheet game logs record a suspended game once, on the date it started,
//! with the completion date and park packed into field 13. Anything that
//! tracks where a team physically was on a given day needs the completion
//! too, so every such row is followed by a synthetic copy:
//!
//! ```text
//! "20000601","0",...,"20000602,BOS07,3,4,72",...,"CLE07",...
//! "20000602","I",...,"20000602,BOS07,3,4,72",...,"BOS07",...
//! ```
//!
//! The copy takes the completion date, slot code `I` and, when given, the
//! completion park. Everything else is left untouched.
//!
//! # Example
//!
//! ```ignore
//! use spread::{reader_builder, spread_csv, writer_builder};
//!
//! let reader = reader_builder().from_path("GL2000.TXT")?;
//! let mut writer = writer_builder().from_writer(std::io::stdout());
//! let stats = spread_csv(reader, &mut writer)?;
//! ```

pub mod cli;
mod spreader;

pub use spreader::{Spread, SpreadError, SpreadStats, completion_row, reader_builder, spread_csv, spread_records, writer_builder};

/// Field holding the game date (`YYYYMMDD`)
pub const DATE_FIELD: usize = 0;

/// Field holding the double-header slot code
pub const SLOT_FIELD: usize = 1;

/// Field holding the completion info (`"date,park,..."`)
pub const COMPLETION_FIELD: usize = 13;

/// Field holding the park id
pub const PARK_FIELD: usize = 16;

/// Slot code given to synthesized completion rows
pub const COMPLETION_SLOT: &str = "I";
