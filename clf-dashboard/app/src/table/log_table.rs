use super::{FilterMode, TableError, TableRecord};
use crate::domain::LogRecord;
use serde::Serialize;
use std::borrow::Cow;
use std::str::FromStr;

/// Columns of the raw log viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogColumn {
    #[serde(rename = "ip")]
    ClientAddress,
    #[serde(rename = "date")]
    Timestamp,
    Method,
    Path,
    Protocol,
    #[serde(rename = "status")]
    StatusCode,
    #[serde(rename = "size")]
    SizeBytes,
}

impl LogColumn {
    pub const ALL: [LogColumn; 7] = [
        LogColumn::ClientAddress,
        LogColumn::Timestamp,
        LogColumn::Method,
        LogColumn::Path,
        LogColumn::Protocol,
        LogColumn::StatusCode,
        LogColumn::SizeBytes,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LogColumn::ClientAddress => "ip",
            LogColumn::Timestamp => "date",
            LogColumn::Method => "method",
            LogColumn::Path => "path",
            LogColumn::Protocol => "protocol",
            LogColumn::StatusCode => "status",
            LogColumn::SizeBytes => "size",
        }
    }
}

impl FromStr for LogColumn {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogColumn::ALL
            .into_iter()
            .find(|column| column.as_str() == s)
            .ok_or_else(|| TableError::UnknownColumn(s.to_string()))
    }
}

impl TableRecord for LogRecord {
    type Column = LogColumn;

    fn columns() -> &'static [LogColumn] {
        &LogColumn::ALL
    }

    fn cell(&self, column: LogColumn) -> Cow<'_, str> {
        Cow::Borrowed(match column {
            LogColumn::ClientAddress => self.client_address.as_str(),
            LogColumn::Timestamp => self.timestamp.as_str(),
            LogColumn::Method => self.method.as_str(),
            LogColumn::Path => self.path.as_str(),
            LogColumn::Protocol => self.protocol.as_str(),
            LogColumn::StatusCode => self.status_code.as_str(),
            LogColumn::SizeBytes => self.size_bytes.as_str(),
        })
    }

    /// Date and path are free-text boxes; the rest are dropdowns.
    fn filter_mode(column: LogColumn) -> FilterMode {
        match column {
            LogColumn::Timestamp | LogColumn::Path => FilterMode::Contains,
            _ => FilterMode::Exact,
        }
    }
}
