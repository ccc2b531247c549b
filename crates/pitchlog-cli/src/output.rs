//! JSON-lines output.

use crate::error::Result;
use pitchlog_extractor::{FieldRecord, TimeFormat};
use std::io::Write;

/// Writes one JSON object per line.
pub struct RecordWriter<W: Write> {
    out: W,
    time_format: TimeFormat,
    written: usize,
}

impl<W: Write> RecordWriter<W> {
    /// Create a new writer.
    pub fn new(out: W, time_format: TimeFormat) -> Self {
        Self {
            out,
            time_format,
            written: 0,
        }
    }

    /// Write a single record.
    pub fn write_record(&mut self, record: &FieldRecord) -> Result<()> {
        serde_json::to_writer(&mut self.out, &record.to_output(self.time_format))?;
        self.out.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    /// Number of records written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
