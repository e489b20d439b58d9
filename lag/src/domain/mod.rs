//! Domain types for tzlag
//!
//! Core domain types: Game (input), ZoneOffset, LagRecord (output).

mod game;
mod record;
mod zone;

pub use game::{DoubleHeaderSlot, Game};
pub use record::LagRecord;
pub use zone::ZoneOffset;

/// Date format used by game logs and lag output
pub const DATE_FORMAT: &str = "%Y%m%d";
