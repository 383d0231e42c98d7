use serde::{Deserialize, Serialize};

/// Placeholder used for request-line tokens that are absent.
pub const MISSING_FIELD: &str = "-";

/// One parsed access log entry.
///
/// Every field is kept as text: status and size are compared and filtered by
/// exact string equality, and the timestamp is displayed exactly as logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    pub client_address: String,
    /// `"<date> <time>"`, e.g. `"10/Oct/2023 13:55:36"`.
    pub timestamp: String,
    pub method: String,
    pub path: String,
    pub protocol: String,
    pub status_code: String,
    pub size_bytes: String,
}

impl LogRecord {
    /// Hour component of the time of day, e.g. `"13"` for `"10/Oct/2023 13:55:36"`.
    ///
    /// The time is the last space-separated token, so a date containing spaces
    /// still buckets correctly. Returns `-` when the timestamp carries no time
    /// portion.
    pub fn hour(&self) -> &str {
        self.timestamp
            .rsplit_once(' ')
            .and_then(|(_, time)| time.split(':').next())
            .filter(|hour| !hour.is_empty())
            .unwrap_or(MISSING_FIELD)
    }
}

/// Result of running the parser over a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Parsed(LogRecord),
    Skipped(SkipReason),
}

impl ParseOutcome {
    pub fn into_record(self) -> Option<LogRecord> {
        match self {
            ParseOutcome::Parsed(record) => Some(record),
            ParseOutcome::Skipped(_) => None,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, ParseOutcome::Parsed(_))
    }
}

/// Why a line produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Empty or whitespace-only line (typically the trailing newline of a file).
    Blank,
    /// The line does not have the access log shape.
    NoMatch,
    /// The access log pattern could not be loaded.
    PatternUnavailable,
}

/// Line accounting for one parse run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseStats {
    pub total_lines: usize,
    pub parsed: usize,
    pub skipped: usize,
}
