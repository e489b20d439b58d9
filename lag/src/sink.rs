//! Writing lag records

use std::io::Write;

use serde_json::Value;

use crate::domain::LagRecord;
use crate::error::LagError;

/// Output columns, in order
pub const HEADERS: [&str; 9] = [
    "date",
    "team",
    "game_tz",
    "lag",
    "matchup",
    "tz_shift",
    "days_delta",
    "dbl_header",
    "park",
];

/// Consumer of lag records
pub trait RecordSink {
    /// Called once before the first record
    fn start(&mut self) -> Result<(), LagError>;

    fn write_record(&mut self, record: &LagRecord) -> Result<(), LagError>;

    /// Flush anything buffered
    fn finish(&mut self) -> Result<(), LagError>;
}

/// Comma-separated rows under a header row
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    include_venue: bool,
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W, include_venue: bool) -> Self {
        Self {
            writer: csv::WriterBuilder::new().has_headers(false).from_writer(writer),
            include_venue,
        }
    }

    fn columns(&self) -> usize {
        if self.include_venue { HEADERS.len() } else { HEADERS.len() - 1 }
    }

    /// Finish and hand back the underlying writer
    pub fn into_inner(self) -> Result<W, LagError> {
        self.writer
            .into_inner()
            .map_err(|e| LagError::Io(std::io::Error::new(e.error().kind(), e.error().to_string())))
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn start(&mut self) -> Result<(), LagError> {
        self.writer.write_record(&HEADERS[..self.columns()])?;
        Ok(())
    }

    fn write_record(&mut self, record: &LagRecord) -> Result<(), LagError> {
        self.writer.write_record(record.to_row(self.include_venue))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), LagError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// One JSON object per line
pub struct JsonLinesSink<W: Write> {
    writer: W,
    include_venue: bool,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W, include_venue: bool) -> Self {
        Self { writer, include_venue }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RecordSink for JsonLinesSink<W> {
    fn start(&mut self) -> Result<(), LagError> {
        Ok(())
    }

    fn write_record(&mut self, record: &LagRecord) -> Result<(), LagError> {
        let mut value = serde_json::to_value(record)?;
        if !self.include_venue
            && let Value::Object(fields) = &mut value
        {
            fields.remove("park");
        }

        // Serialize before writing so write failures surface as IO errors
        let mut line = serde_json::to_vec(&value)?;
        line.push(b'\n');
        self.writer.write_all(&line)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), LagError> {
        self.writer.flush()?;
        Ok(())
    }
}
