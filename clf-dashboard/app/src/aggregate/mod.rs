//! Single-pass aggregation over parsed access log records.

pub mod counter;
pub mod rows;

pub use counter::FrequencyCounter;
pub use rows::{CountColumn, CountRow, DrillDown};

use crate::domain::LogRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregates backing the dashboard charts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    pub status_counts: BTreeMap<String, usize>,
    /// All client addresses, most frequent first.
    pub top_ips: Vec<(String, usize)>,
    /// All request paths, most frequent first.
    pub top_paths: Vec<(String, usize)>,
    /// Keyed by the two-digit hour of day, see [`LogRecord::hour`].
    pub requests_by_hour: BTreeMap<String, usize>,
    pub total_records: usize,
}

impl AggregateResult {
    pub fn is_empty(&self) -> bool {
        self.total_records == 0
    }

    /// The `n` most frequent client addresses.
    pub fn top_ips(&self, n: usize) -> &[(String, usize)] {
        &self.top_ips[..n.min(self.top_ips.len())]
    }

    /// The `n` most frequent paths.
    pub fn top_paths(&self, n: usize) -> &[(String, usize)] {
        &self.top_paths[..n.min(self.top_paths.len())]
    }
}

/// Compute every aggregate in one pass over `records`.
pub fn aggregate<'a, I>(records: I) -> AggregateResult
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    let mut status = FrequencyCounter::new();
    let mut ips = FrequencyCounter::new();
    let mut paths = FrequencyCounter::new();
    let mut hours = FrequencyCounter::new();
    let mut total_records = 0;

    for record in records {
        total_records += 1;
        status.increment(&record.status_code);
        ips.increment(&record.client_address);
        paths.increment(&record.path);
        hours.increment(record.hour());
    }

    AggregateResult {
        status_counts: status.into_map(),
        top_ips: ips.into_ranked(),
        top_paths: paths.into_ranked(),
        requests_by_hour: hours.into_map(),
        total_records,
    }
}
