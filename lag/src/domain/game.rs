//! Game domain type
//!
//! One row of a season game log: who played whom, where, and on which day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Position of a game within a day's schedule between two teams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DoubleHeaderSlot {
    /// Only game of the day ("0")
    #[default]
    Single,
    /// First game of a double header ("1")
    First,
    /// Second game of a double header ("2")
    Second,
    /// Third game of a triple header ("3")
    Third,
    /// Completion of a game suspended on an earlier date ("I")
    Completion,
}

impl DoubleHeaderSlot {
    /// Code as written in game logs
    pub const fn code(self) -> &'static str {
        match self {
            Self::Single => "0",
            Self::First => "1",
            Self::Second => "2",
            Self::Third => "3",
            Self::Completion => "I",
        }
    }
}

impl std::fmt::Display for DoubleHeaderSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for DoubleHeaderSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Self::Single),
            "1" => Ok(Self::First),
            "2" => Ok(Self::Second),
            "3" => Ok(Self::Third),
            "I" | "i" => Ok(Self::Completion),
            _ => Err(format!("Unknown double header code: {}", s)),
        }
    }
}

impl TryFrom<String> for DoubleHeaderSlot {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DoubleHeaderSlot> for String {
    fn from(slot: DoubleHeaderSlot) -> Self {
        slot.code().to_string()
    }
}

/// A scheduled contest between two teams
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub date: NaiveDate,
    pub double_header_slot: DoubleHeaderSlot,
    pub visiting_team_id: String,
    /// Season-sequential game number for the visitor
    pub visiting_game_number: u32,
    pub home_team_id: String,
    /// Season-sequential game number for the home team
    pub home_game_number: u32,
    /// Park id; absent in logs without park data
    pub venue_id: Option<String>,
}

impl Game {
    /// Create a single game with no game numbers or venue
    pub fn new(date: NaiveDate, visiting_team_id: impl Into<String>, home_team_id: impl Into<String>) -> Self {
        Self {
            date,
            double_header_slot: DoubleHeaderSlot::Single,
            visiting_team_id: visiting_team_id.into(),
            visiting_game_number: 0,
            home_team_id: home_team_id.into(),
            home_game_number: 0,
            venue_id: None,
        }
    }

    pub fn with_slot(mut self, slot: DoubleHeaderSlot) -> Self {
        self.double_header_slot = slot;
        self
    }

    pub fn with_venue(mut self, venue_id: impl Into<String>) -> Self {
        self.venue_id = Some(venue_id.into());
        self
    }

    pub fn with_game_numbers(mut self, visiting: u32, home: u32) -> Self {
        self.visiting_game_number = visiting;
        self.home_game_number = home;
        self
    }

    /// "{visitor}@{home}"
    pub fn matchup(&self) -> String {
        format!("{}@{}", self.visiting_team_id, self.home_team_id)
    }

    /// Both participants, home team first
    pub fn teams(&self) -> [&str; 2] {
        [&self.home_team_id, &self.visiting_team_id]
    }
}
