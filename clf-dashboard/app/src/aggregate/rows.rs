use super::AggregateResult;
use crate::table::{SortDirection, SortSpec, TableError, TableRecord};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::str::FromStr;

/// One `(key, count)` line of an aggregate drill-down table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountRow {
    pub key: String,
    pub count: usize,
}

impl CountRow {
    pub fn new(key: impl Into<String>, count: usize) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountColumn {
    Key,
    Count,
}

impl FromStr for CountColumn {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "key" | "path" | "ip" | "code" | "hour" => Ok(CountColumn::Key),
            "count" => Ok(CountColumn::Count),
            _ => Err(TableError::UnknownColumn(s.to_string())),
        }
    }
}

impl TableRecord for CountRow {
    type Column = CountColumn;

    fn columns() -> &'static [CountColumn] {
        &[CountColumn::Key, CountColumn::Count]
    }

    fn cell(&self, column: CountColumn) -> Cow<'_, str> {
        match column {
            CountColumn::Key => Cow::Borrowed(&self.key),
            CountColumn::Count => Cow::Owned(self.count.to_string()),
        }
    }

    fn compare(&self, other: &Self, column: CountColumn) -> Ordering {
        match column {
            CountColumn::Key => self.key.cmp(&other.key),
            // Counts order numerically, not as text
            CountColumn::Count => self.count.cmp(&other.count),
        }
    }
}

/// The four drill-down tables shown under the dashboard charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DrillDown {
    Paths,
    Ips,
    Status,
    Hours,
}

impl DrillDown {
    pub fn rows(self, result: &AggregateResult) -> Vec<CountRow> {
        match self {
            DrillDown::Paths => pairs_to_rows(&result.top_paths),
            DrillDown::Ips => pairs_to_rows(&result.top_ips),
            DrillDown::Status => result
                .status_counts
                .iter()
                .map(|(code, &count)| CountRow::new(code.as_str(), count))
                .collect(),
            DrillDown::Hours => result
                .requests_by_hour
                .iter()
                .map(|(hour, &count)| CountRow::new(hour.as_str(), count))
                .collect(),
        }
    }

    /// Initial ordering: busiest first, except the hour table which reads chronologically.
    pub fn default_sort(self) -> SortSpec<CountColumn> {
        match self {
            DrillDown::Hours => SortSpec::new(CountColumn::Key, SortDirection::Ascending),
            _ => SortSpec::new(CountColumn::Count, SortDirection::Descending),
        }
    }

    /// Header for the key column.
    pub fn key_label(self) -> &'static str {
        match self {
            DrillDown::Paths => "path",
            DrillDown::Ips => "ip",
            DrillDown::Status => "code",
            DrillDown::Hours => "hour",
        }
    }
}

impl FromStr for DrillDown {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paths" => Ok(DrillDown::Paths),
            "ips" => Ok(DrillDown::Ips),
            "status" => Ok(DrillDown::Status),
            "hours" => Ok(DrillDown::Hours),
            _ => Err(TableError::UnknownTable(s.to_string())),
        }
    }
}

fn pairs_to_rows(pairs: &[(String, usize)]) -> Vec<CountRow> {
    pairs
        .iter()
        .map(|(key, count)| CountRow::new(key.as_str(), *count))
        .collect()
}
