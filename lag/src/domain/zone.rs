//! Time zone ordinals

use serde::{Deserialize, Serialize};

/// Relative time zone of a venue or team
///
/// Only the ordinal matters: lag is the difference between two ordinals, so
/// these are not UTC offsets. `Other` covers overseas parks (Tokyo, Sydney,
/// Honolulu) and only comes out of the venue table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ZoneOffset {
    Eastern,
    Central,
    Mountain,
    Pacific,
    Other,
}

impl ZoneOffset {
    /// The four mainland zones, east to west
    pub const CONTINENTAL: [ZoneOffset; 4] = [Self::Eastern, Self::Central, Self::Mountain, Self::Pacific];

    /// Ordinal used by the lag recurrence
    pub const fn ordinal(self) -> i64 {
        match self {
            Self::Eastern => 0,
            Self::Central => 1,
            Self::Mountain => 2,
            Self::Pacific => 3,
            Self::Other => 6,
        }
    }

    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Eastern),
            1 => Some(Self::Central),
            2 => Some(Self::Mountain),
            3 => Some(Self::Pacific),
            6 => Some(Self::Other),
            _ => None,
        }
    }

    /// Short label written to the output
    pub const fn label(self) -> &'static str {
        match self {
            Self::Eastern => "ET",
            Self::Central => "CT",
            Self::Mountain => "MT",
            Self::Pacific => "PT",
            Self::Other => "other",
        }
    }

    pub fn is_continental(self) -> bool {
        self != Self::Other
    }
}

impl std::fmt::Display for ZoneOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for ZoneOffset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "et" | "eastern" => Ok(Self::Eastern),
            "ct" | "central" => Ok(Self::Central),
            "mt" | "mountain" => Ok(Self::Mountain),
            "pt" | "pacific" => Ok(Self::Pacific),
            "other" => Ok(Self::Other),
            digits => digits
                .parse::<i64>()
                .ok()
                .and_then(Self::from_ordinal)
                .ok_or_else(|| format!("Unknown time zone: {}", s)),
        }
    }
}

impl TryFrom<String> for ZoneOffset {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ZoneOffset> for String {
    fn from(zone: ZoneOffset) -> Self {
        zone.label().to_string()
    }
}
