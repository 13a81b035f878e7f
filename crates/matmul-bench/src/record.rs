//! Trial records and CSV persistence.
//!
//! The CSV layout is one row per measured trial:
//! `Size,Method,Trial,Time(ms)` with millisecond values at two decimal
//! places.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Header line of the results file.
pub const CSV_HEADER: &str = "Size,Method,Trial,Time(ms)";

/// One measured trial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    /// Matrix dimension (`size x size` operands).
    pub size: usize,
    /// Strategy name.
    pub method: String,
    /// 1-based trial number.
    pub trial: u32,
    /// Elapsed wall-clock time in milliseconds.
    pub time_ms: f64,
}

impl TrialRecord {
    /// Build a record from a measured duration.
    #[must_use]
    pub fn new(size: usize, method: &str, trial: u32, elapsed: Duration) -> Self {
        Self {
            size,
            method: method.to_string(),
            trial,
            time_ms: elapsed.as_secs_f64() * 1000.0,
        }
    }

    fn csv_line(&self) -> String {
        format!("{},{},{},{:.2}", self.size, self.method, self.trial, self.time_ms)
    }
}

/// Create (or truncate) the results file and write the header.
pub fn init_csv(path: &Path) -> io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "{CSV_HEADER}")?;
    Ok(())
}

/// Append records to an existing results file.
pub fn append_csv(path: &Path, records: &[TrialRecord]) -> io::Result<()> {
    let file = OpenOptions::new().append(true).open(path)?;
    let mut out = BufWriter::new(file);
    for record in records {
        writeln!(out, "{}", record.csv_line())?;
    }
    out.flush()
}

/// Write a complete results file: header plus all records.
pub fn write_csv(path: &Path, records: &[TrialRecord]) -> io::Result<()> {
    init_csv(path)?;
    append_csv(path, records)
}
