//! Per-(size, method) summary of a sweep, persisted as JSON.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::record::TrialRecord;

/// Median timing for one (size, method) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodSummary {
    /// Matrix dimension.
    pub size: usize,
    /// Strategy name.
    pub method: String,
    /// Median trial time in milliseconds.
    pub median_ms: f64,
    /// Number of trials behind the median.
    pub trials: u32,
}

/// Collapse trial records into one summary per (size, method) pair,
/// preserving first-appearance order.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn summarize(records: &[TrialRecord]) -> Vec<MethodSummary> {
    let mut summaries: Vec<MethodSummary> = Vec::new();
    let mut groups: Vec<(usize, String, Vec<f64>)> = Vec::new();

    for record in records {
        match groups
            .iter_mut()
            .find(|(size, method, _)| *size == record.size && *method == record.method)
        {
            Some((_, _, times)) => times.push(record.time_ms),
            None => groups.push((record.size, record.method.clone(), vec![record.time_ms])),
        }
    }

    for (size, method, mut times) in groups {
        times.sort_by(f64::total_cmp);
        let mid = times.len() / 2;
        let median_ms = if times.len() % 2 == 1 {
            times[mid]
        } else {
            (times[mid - 1] + times[mid]) / 2.0
        };
        summaries.push(MethodSummary {
            size,
            method,
            median_ms,
            trials: times.len() as u32,
        });
    }
    summaries
}

/// Write summaries as pretty-printed JSON.
pub fn write_summary(path: &Path, summaries: &[MethodSummary]) -> io::Result<()> {
    let content = serde_json::to_string_pretty(summaries).map_err(io::Error::other)?;
    std::fs::write(path, content)
}
