//! Common Log Format access line parser.

use crate::domain::{LogRecord, MISSING_FIELD, ParseOutcome, ParseStats, SkipReason};
use crate::parser::generated::{VALIDATED_PATTERNS, pattern_index};

/// Best-effort parser for CLF / combined access lines.
///
/// Lines that do not match are skipped, never reported as errors, so a
/// truncated last line cannot abort a whole file.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClfParser;

impl ClfParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a single line.
    pub fn parse_line(&self, line: &str) -> ParseOutcome {
        if line.trim().is_empty() {
            return ParseOutcome::Skipped(SkipReason::Blank);
        }

        let captures = match VALIDATED_PATTERNS.captures(pattern_index::CLF_ACCESS, line) {
            Ok(Some(captures)) => captures,
            Ok(None) => return ParseOutcome::Skipped(SkipReason::NoMatch),
            Err(regex_error) => {
                tracing::error!("Access log pattern unavailable: {}", regex_error);
                return ParseOutcome::Skipped(SkipReason::PatternUnavailable);
            }
        };

        let group = |index: usize| captures.get(index).map_or("", |m| m.as_str());

        let mut request = group(3).split(' ');
        let method = token_or_missing(request.next());
        let path = token_or_missing(request.next());
        let protocol = token_or_missing(request.next());

        ParseOutcome::Parsed(LogRecord {
            client_address: group(1).to_string(),
            timestamp: join_timestamp(group(2)),
            method,
            path,
            protocol,
            status_code: group(4).to_string(),
            size_bytes: group(5).to_string(),
        })
    }

    /// Parse every line, keeping input order and dropping non-matching lines.
    pub fn parse<I, S>(&self, lines: I) -> Vec<LogRecord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.parse_with_stats(lines).0
    }

    /// Like [`ClfParser::parse`], also reporting how many lines were skipped.
    pub fn parse_with_stats<I, S>(&self, lines: I) -> (Vec<LogRecord>, ParseStats)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stats = ParseStats::default();
        let mut records = Vec::new();

        for (line_no, line) in lines.into_iter().enumerate() {
            stats.total_lines += 1;
            match self.parse_line(line.as_ref()) {
                ParseOutcome::Parsed(record) => {
                    stats.parsed += 1;
                    records.push(record);
                }
                ParseOutcome::Skipped(reason) => {
                    stats.skipped += 1;
                    if reason != SkipReason::Blank {
                        tracing::debug!(line = line_no + 1, ?reason, "Skipping access log line");
                    }
                }
            }
        }

        (records, stats)
    }
}

/// Parse `lines` with the default parser.
pub fn parse<I, S>(lines: I) -> Vec<LogRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ClfParser::new().parse(lines)
}

fn token_or_missing(token: Option<&str>) -> String {
    token
        .filter(|t| !t.is_empty())
        .unwrap_or(MISSING_FIELD)
        .to_string()
}

/// `"10/Oct/2023:13:55:36 -0700"` -> `"10/Oct/2023 13:55:36"`.
///
/// Splits on the first `:`; the time runs up to the first whitespace so the
/// UTC offset is dropped.
fn join_timestamp(raw: &str) -> String {
    match raw.split_once(':') {
        Some((date, rest)) => match rest.split_whitespace().next() {
            Some(time) => format!("{date} {time}"),
            None => date.to_string(),
        },
        None => raw.split_whitespace().next().unwrap_or("").to_string(),
    }
}
