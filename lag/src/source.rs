//! Reading games from Retrosheet game logs
//!
//! Game logs are headerless CSV with one game per row. Only a handful of the
//! 161 fields matter here.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::StringRecord;
use tracing::debug;

use crate::domain::{DATE_FORMAT, DoubleHeaderSlot, Game};
use crate::error::LagError;

pub const DATE_FIELD: usize = 0;
pub const SLOT_FIELD: usize = 1;
pub const VISITING_TEAM_FIELD: usize = 3;
pub const VISITING_GAME_NUMBER_FIELD: usize = 5;
pub const HOME_TEAM_FIELD: usize = 6;
pub const HOME_GAME_NUMBER_FIELD: usize = 8;
pub const VENUE_FIELD: usize = 16;

const MIN_FIELDS: usize = HOME_GAME_NUMBER_FIELD + 1;

type Rows = Box<dyn Iterator<Item = Result<StringRecord, LagError>>>;

/// Parse one game-log row
///
/// `line` is only used for error messages.
pub fn parse_row(record: &StringRecord, line: u64) -> Result<Game, LagError> {
    let malformed = |reason: String| LagError::MalformedRow { line, reason };

    if record.len() < MIN_FIELDS {
        return Err(malformed(format!(
            "expected at least {} fields, found {}",
            MIN_FIELDS,
            record.len()
        )));
    }
    let field = |index: usize| record.get(index).map(str::trim).unwrap_or_default();

    let date = NaiveDate::parse_from_str(field(DATE_FIELD), DATE_FORMAT)
        .map_err(|e| malformed(format!("invalid date '{}': {}", field(DATE_FIELD), e)))?;
    let double_header_slot = field(SLOT_FIELD).parse::<DoubleHeaderSlot>().map_err(malformed)?;

    let team = |index: usize, side: &str| {
        let id = field(index);
        if id.is_empty() {
            Err(malformed(format!("missing {} team", side)))
        } else {
            Ok(id.to_string())
        }
    };
    let game_number = |index: usize, side: &str| {
        field(index)
            .parse::<u32>()
            .map_err(|_| malformed(format!("invalid {} game number '{}'", side, field(index))))
    };

    let venue_id = Some(field(VENUE_FIELD)).filter(|v| !v.is_empty()).map(str::to_string);

    Ok(Game {
        date,
        double_header_slot,
        visiting_team_id: team(VISITING_TEAM_FIELD, "visiting")?,
        visiting_game_number: game_number(VISITING_GAME_NUMBER_FIELD, "visiting")?,
        home_team_id: team(HOME_TEAM_FIELD, "home")?,
        home_game_number: game_number(HOME_GAME_NUMBER_FIELD, "home")?,
        venue_id,
    })
}

/// Raw rows from one or more logs, read one after another
pub struct RowSource {
    paths: VecDeque<PathBuf>,
    current: Option<Rows>,
    spread_incomplete: bool,
}

impl RowSource {
    /// Read the given paths in order; `-` reads stdin
    pub fn from_paths(paths: impl IntoIterator<Item = PathBuf>, spread_incomplete: bool) -> Self {
        Self {
            paths: paths.into_iter().collect(),
            current: None,
            spread_incomplete,
        }
    }

    /// Read a single in-memory or already-open log
    pub fn from_reader(reader: impl Read + 'static, spread_incomplete: bool) -> Self {
        Self {
            paths: VecDeque::new(),
            current: Some(open_rows(Box::new(reader), spread_incomplete)),
            spread_incomplete,
        }
    }

    fn open(&self, path: &Path) -> Result<Rows, LagError> {
        let input: Box<dyn Read> = if path == Path::new("-") {
            debug!("RowSource: reading stdin");
            Box::new(io::stdin())
        } else {
            debug!(path = %path.display(), "RowSource: opening log");
            let file = File::open(path).map_err(|source| LagError::Open {
                path: path.to_path_buf(),
                source,
            })?;
            Box::new(file)
        };
        Ok(open_rows(input, self.spread_incomplete))
    }
}

fn open_rows(input: Box<dyn Read>, spread_incomplete: bool) -> Rows {
    let records = spread::reader_builder().from_reader(input).into_records();
    if spread_incomplete {
        Box::new(spread::spread_records(records).map(|r| r.map_err(LagError::from)))
    } else {
        Box::new(records.map(|r| r.map_err(LagError::from)))
    }
}

impl Iterator for RowSource {
    type Item = Result<StringRecord, LagError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(rows) = self.current.as_mut() {
                match rows.next() {
                    Some(row) => return Some(row),
                    None => self.current = None,
                }
            }

            let path = self.paths.pop_front()?;
            match self.open(&path) {
                Ok(rows) => self.current = Some(rows),
                Err(e) => {
                    self.paths.clear();
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Games parsed from a stream of rows
pub struct GameReader<I> {
    rows: I,
    line: u64,
    failed: bool,
}

impl<I> GameReader<I>
where
    I: Iterator<Item = Result<StringRecord, LagError>>,
{
    pub fn new(rows: I) -> Self {
        Self {
            rows,
            line: 0,
            failed: false,
        }
    }
}

impl GameReader<RowSource> {
    /// Games from the given paths, or stdin if there are none
    pub fn from_paths(paths: Vec<PathBuf>, spread_incomplete: bool) -> Self {
        let paths = if paths.is_empty() { vec![PathBuf::from("-")] } else { paths };
        Self::new(RowSource::from_paths(paths, spread_incomplete))
    }

    pub fn from_reader(reader: impl Read + 'static, spread_incomplete: bool) -> Self {
        Self::new(RowSource::from_reader(reader, spread_incomplete))
    }
}

impl<I> Iterator for GameReader<I>
where
    I: Iterator<Item = Result<StringRecord, LagError>>,
{
    type Item = Result<Game, LagError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let result = self.rows.next()?.and_then(|record| {
            self.line += 1;
            let line = record.position().map(|p| p.line()).unwrap_or(self.line);
            parse_row(&record, line)
        });

        self.failed = result.is_err();
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOG: &str = "\
\"20000405\",\"0\",\"Wed\",\"SEA\",\"AL\",1,\"NYA\",\"AL\",1,2,3,51,\"D\",\"\",\"\",\"\",\"NYC16\"
\"20000406\",\"1\",\"Thu\",\"CIN\",\"NL\",1,\"COL\",\"NL\",2,4,5,54,\"N\",\"\",\"\",\"\",\"CIN08\"
";

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_parse_row() {
        let games: Vec<Game> = GameReader::from_reader(LOG.as_bytes(), false)
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(games.len(), 2);
        let game = &games[1];
        assert_eq!(game.date, NaiveDate::from_ymd_opt(2000, 4, 6).unwrap());
        assert_eq!(game.double_header_slot, DoubleHeaderSlot::First);
        assert_eq!(game.visiting_team_id, "CIN");
        assert_eq!(game.visiting_game_number, 1);
        assert_eq!(game.home_team_id, "COL");
        assert_eq!(game.home_game_number, 2);
        assert_eq!(game.venue_id.as_deref(), Some("CIN08"));
    }

    #[test]
    fn test_row_without_venue() {
        let row = record(&["20000405", "0", "Wed", "SEA", "AL", "1", "NYA", "AL", "1"]);
        let game = parse_row(&row, 1).unwrap();

        assert_eq!(game.venue_id, None);
        assert_eq!(game.matchup(), "SEA@NYA");
    }

    #[test]
    fn test_short_row_is_malformed() {
        let row = record(&["20000405", "0", "Wed", "SEA"]);
        let err = parse_row(&row, 4).unwrap_err();

        assert!(matches!(err, LagError::MalformedRow { line: 4, .. }));
        assert!(err.to_string().contains("at least 9 fields"));
    }

    #[test]
    fn test_bad_fields_are_malformed() {
        let bad_date = record(&["2000-04-05", "0", "", "SEA", "", "1", "NYA", "", "1"]);
        assert!(parse_row(&bad_date, 1).unwrap_err().to_string().contains("invalid date"));

        let bad_slot = record(&["20000405", "X", "", "SEA", "", "1", "NYA", "", "1"]);
        assert!(parse_row(&bad_slot, 1).unwrap_err().to_string().contains("double header"));

        let bad_number = record(&["20000405", "0", "", "SEA", "", "one", "NYA", "", "1"]);
        assert!(parse_row(&bad_number, 1).unwrap_err().to_string().contains("visiting game number"));

        let no_team = record(&["20000405", "0", "", "SEA", "", "1", "", "", "1"]);
        assert!(parse_row(&no_team, 1).unwrap_err().to_string().contains("missing home team"));
    }

    #[test]
    fn test_reader_stops_after_malformed_row() {
        let log = format!("{}bogus\n{}", LOG, LOG);
        let results: Vec<_> = GameReader::from_reader(std::io::Cursor::new(log), false).collect();

        assert_eq!(results.len(), 3);
        assert!(matches!(results[2], Err(LagError::MalformedRow { line: 3, .. })));
    }

    #[test]
    fn test_spread_incomplete_adds_completion_game() {
        let log = "\
20000601,0,Thu,CLE,AL,50,BOS,AL,51,3,3,54,N,\"20000602,NYC16\",,,BOS07
20000602,0,Fri,CLE,AL,51,BOS,AL,52,1,0,54,D,,,,BOS07
";
        let plain: Vec<Game> = GameReader::from_reader(log.as_bytes(), false)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(plain.len(), 2);

        let spread: Vec<Game> = GameReader::from_reader(log.as_bytes(), true)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(spread.len(), 3);
        assert_eq!(spread[1].double_header_slot, DoubleHeaderSlot::Completion);
        assert_eq!(spread[1].date, NaiveDate::from_ymd_opt(2000, 6, 2).unwrap());
        assert_eq!(spread[1].venue_id.as_deref(), Some("NYC16"));
    }

    #[test]
    fn test_files_are_read_in_order() {
        let temp = tempfile::TempDir::new().unwrap();
        let first = temp.path().join("first.txt");
        let second = temp.path().join("second.txt");
        std::fs::write(&first, LOG).unwrap();
        std::fs::write(&second, "20000407,0,Fri,SLN,NL,2,SEA,AL,3,1,2,54,N,,,,SEA03\n").unwrap();

        let games: Vec<Game> = GameReader::from_paths(vec![first, second], false)
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(games.len(), 3);
        assert_eq!(games[2].home_team_id, "SEA");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let missing = temp.path().join("missing.txt");

        let mut reader = GameReader::from_paths(vec![missing.clone()], false);
        let err = reader.next().unwrap().unwrap_err();

        assert!(matches!(err, LagError::Open { ref path, .. } if *path == missing));
        assert!(reader.next().is_none());
    }
}
