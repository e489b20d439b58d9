//! LagRecord output type

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use super::{DATE_FORMAT, DoubleHeaderSlot, ZoneOffset};

/// Lag for one team in one game
///
/// Field names on the wire follow the historical column headers
/// (`game_tz`, `tz_shift`, `dbl_header`, `park`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LagRecord {
    #[serde(serialize_with = "serialize_date")]
    pub date: NaiveDate,
    #[serde(rename = "team")]
    pub team_id: String,
    /// Zone the game was played in
    #[serde(rename = "game_tz")]
    pub zone: ZoneOffset,
    pub lag: i64,
    /// "{visitor}@{home}"
    pub matchup: String,
    /// "{previous ordinal}->{ordinal}"
    #[serde(rename = "tz_shift")]
    pub zone_shift: String,
    pub days_delta: i64,
    #[serde(rename = "dbl_header")]
    pub double_header_slot: DoubleHeaderSlot,
    #[serde(rename = "park")]
    pub venue_id: Option<String>,
}

fn serialize_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format(DATE_FORMAT))
}

impl LagRecord {
    pub fn zone_label(&self) -> &'static str {
        self.zone.label()
    }

    /// Columns in output order, optionally ending with the park
    pub fn to_row(&self, include_venue: bool) -> Vec<String> {
        let mut row = vec![
            self.date.format(DATE_FORMAT).to_string(),
            self.team_id.clone(),
            self.zone_label().to_string(),
            self.lag.to_string(),
            self.matchup.clone(),
            self.zone_shift.clone(),
            self.days_delta.to_string(),
            self.double_header_slot.code().to_string(),
        ];
        if include_venue {
            row.push(self.venue_id.clone().unwrap_or_default());
        }
        row
    }
}
