//! Completion-row spreading over CSV records

use std::io::{self, Read, Write};

use csv::StringRecord;
use log::debug;
use thiserror::Error;

use crate::{COMPLETION_FIELD, COMPLETION_SLOT, DATE_FIELD, PARK_FIELD, SLOT_FIELD};

/// Errors that can occur while spreading a game log
#[derive(Debug, Error)]
pub enum SpreadError {
    #[error("Line {line}: completion info '{info}' has no park part")]
    MalformedCompletion { line: u64, info: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl SpreadError {
    /// Check if the downstream reader went away while writing
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            SpreadError::Io(e) => e.kind() == io::ErrorKind::BrokenPipe,
            SpreadError::Csv(e) => matches!(e.kind(), csv::ErrorKind::Io(err) if err.kind() == io::ErrorKind::BrokenPipe),
            SpreadError::MalformedCompletion { .. } => false,
        }
    }
}

/// Counts reported after spreading a log
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpreadStats {
    /// Rows read from the input
    pub rows: usize,
    /// Synthetic completion rows added
    pub added: usize,
}

/// CSV reader settings for headerless Retrosheet logs
pub fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(false).flexible(true);
    builder
}

/// CSV writer settings matching [`reader_builder`]
///
/// Completion copies of short rows are longer than the row they follow.
pub fn writer_builder() -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder.flexible(true);
    builder
}

/// Build the completion copy of a row, if the row carries completion info
///
/// Rows too short to have a completion field are treated as complete games.
pub fn completion_row(record: &StringRecord, line: u64) -> Result<Option<StringRecord>, SpreadError> {
    let info = match record.get(COMPLETION_FIELD).map(str::trim) {
        Some(info) if !info.is_empty() => info,
        _ => return Ok(None),
    };

    let mut parts = info.split(',');
    let (date, park) = match (parts.next(), parts.next()) {
        (Some(date), Some(park)) => (date.trim(), park.trim()),
        _ => {
            return Err(SpreadError::MalformedCompletion {
                line,
                info: info.to_string(),
            });
        }
    };

    let mut fields: Vec<&str> = record.iter().collect();
    fields[DATE_FIELD] = date;
    fields[SLOT_FIELD] = COMPLETION_SLOT;
    if !park.is_empty() {
        if fields.len() <= PARK_FIELD {
            fields.resize(PARK_FIELD + 1, "");
        }
        fields[PARK_FIELD] = park;
    }

    let mut copy = StringRecord::from(fields);
    copy.set_position(record.position().cloned());
    debug!("line {}: spreading completion row to {} at {:?}", line, date, park);
    Ok(Some(copy))
}

/// Iterator adaptor that follows each row with its completion copy
pub struct Spread<I> {
    records: I,
    pending: Option<StringRecord>,
    line: u64,
    added: usize,
    failed: bool,
}

impl<I> Spread<I> {
    /// Completion copies yielded so far
    pub fn added(&self) -> usize {
        self.added
    }
}

impl<I> Iterator for Spread<I>
where
    I: Iterator<Item = Result<StringRecord, csv::Error>>,
{
    type Item = Result<StringRecord, SpreadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(copy) = self.pending.take() {
            self.added += 1;
            return Some(Ok(copy));
        }
        if self.failed {
            return None;
        }

        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => {
                self.failed = true;
                return Some(Err(e.into()));
            }
        };
        self.line += 1;
        let line = record.position().map(|p| p.line()).unwrap_or(self.line);

        match completion_row(&record, line) {
            Ok(copy) => {
                self.pending = copy;
                Some(Ok(record))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

/// Spread a stream of CSV records
///
/// The adaptor stops after the first error.
pub fn spread_records<I>(records: I) -> Spread<I::IntoIter>
where
    I: IntoIterator<Item = Result<StringRecord, csv::Error>>,
{
    Spread {
        records: records.into_iter(),
        pending: None,
        line: 0,
        added: 0,
        failed: false,
    }
}

/// Copy a whole log from `reader` to `writer`, spreading completion rows
pub fn spread_csv<R: Read, W: Write>(
    mut reader: csv::Reader<R>,
    writer: &mut csv::Writer<W>,
) -> Result<SpreadStats, SpreadError> {
    let mut records = spread_records(reader.records());
    let mut written = 0;

    for record in records.by_ref() {
        writer.write_record(&record?)?;
        written += 1;
    }
    writer.flush()?;

    let added = records.added();
    Ok(SpreadStats {
        rows: written - added,
        added,
    })
}
