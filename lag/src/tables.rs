//! Built-in zone tables
//!
//! Park ids are Retrosheet park codes, team ids Retrosheet team codes.

use crate::domain::ZoneOffset::{self, Central, Eastern, Mountain, Other, Pacific};

/// Park id to zone
pub const VENUE_ZONES: &[(&str, ZoneOffset)] = &[
    ("ANA01", Pacific),
    ("ARL01", Central),
    ("ARL02", Central),
    ("ATL01", Eastern),
    ("ATL02", Eastern),
    ("BAL11", Eastern),
    ("BAL12", Eastern),
    ("BOS07", Eastern),
    ("CHI10", Central),
    ("CHI11", Central),
    ("CHI12", Central),
    ("CIN08", Eastern),
    ("CIN09", Eastern),
    ("CLE07", Eastern),
    ("CLE08", Eastern),
    ("DEN01", Mountain),
    ("DEN02", Mountain),
    ("DET04", Eastern),
    ("DET05", Eastern),
    ("HON01", Other),
    ("HOU02", Central),
    ("HOU03", Central),
    ("KAN06", Central),
    ("LAS01", Pacific),
    ("LBV01", Eastern),
    ("LOS03", Pacific),
    ("MIA01", Eastern),
    ("MIA02", Eastern),
    ("MIL05", Central),
    ("MIL06", Central),
    ("MIN03", Central),
    ("MIN04", Central),
    ("MNT01", Central),
    ("MON02", Eastern),
    ("NYC16", Eastern),
    ("NYC17", Eastern),
    ("NYC20", Eastern),
    ("NYC21", Eastern),
    ("OAK01", Pacific),
    ("PHI12", Eastern),
    ("PHI13", Eastern),
    ("PHO01", Pacific),
    ("PIT07", Eastern),
    ("PIT08", Eastern),
    ("SAN01", Pacific),
    ("SAN02", Pacific),
    ("SEA02", Pacific),
    ("SEA03", Pacific),
    ("SFO02", Pacific),
    ("SFO03", Pacific),
    ("SJU01", Eastern),
    ("STL09", Central),
    ("STL10", Central),
    ("STP01", Eastern),
    ("SYD01", Other),
    ("TOK01", Other),
    ("TOR02", Eastern),
    ("WAS10", Eastern),
    ("WAS11", Eastern),
];

/// Team id to the zone of its home park
pub const TEAM_ZONES: &[(&str, ZoneOffset)] = &[
    ("ANA", Pacific),
    ("ARI", Pacific),
    ("ATL", Eastern),
    ("BAL", Eastern),
    ("BOS", Eastern),
    ("CAL", Pacific),
    ("CHA", Central),
    ("CHN", Central),
    ("CIN", Eastern),
    ("CLE", Eastern),
    ("COL", Mountain),
    ("DET", Eastern),
    ("FLO", Eastern),
    ("HOU", Central),
    ("KCA", Central),
    ("LAN", Pacific),
    ("MIA", Eastern),
    ("MIL", Central),
    ("MIN", Central),
    ("MON", Eastern),
    ("NYA", Eastern),
    ("NYN", Eastern),
    ("OAK", Pacific),
    ("PHI", Eastern),
    ("PIT", Eastern),
    ("SDN", Pacific),
    ("SEA", Pacific),
    ("SFN", Pacific),
    ("SLN", Central),
    ("TBA", Eastern),
    ("TEX", Central),
    ("TOR", Eastern),
    ("WAS", Eastern),
];
