//! Domain layer for clf-dashboard.
//!
//! Contains the types shared across the parser, aggregation and table modules:
//! - `LogRecord`: one parsed access log line
//! - `ParseOutcome` / `SkipReason`: per-line parser result
//! - `ParseStats`: line accounting for a parse run

pub mod log_record;

pub use log_record::{LogRecord, MISSING_FIELD, ParseOutcome, ParseStats, SkipReason};
