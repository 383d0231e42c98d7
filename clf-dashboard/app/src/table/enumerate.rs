use super::{LogColumn, TableRecord};
use crate::domain::LogRecord;
use std::collections::BTreeSet;

/// Order of the method filter dropdown. Anything else follows alphabetically.
pub const METHOD_ORDER: [&str; 8] = [
    "GET", "POST", "PUT", "PATCH", "DELETE", "HEAD", "OPTIONS", "TRACE",
];

/// Distinct values of `column`, sorted ascending.
pub fn distinct_values<R: TableRecord>(records: &[R], column: R::Column) -> Vec<String> {
    records
        .iter()
        .map(|record| record.cell(column).into_owned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct request methods in [`METHOD_ORDER`], unknown methods appended
/// in lexicographic order.
pub fn distinct_methods(records: &[LogRecord]) -> Vec<String> {
    let mut methods = distinct_values(records, LogColumn::Method);
    // Known methods rank by position; unknown ones share the last rank and the
    // stable sort keeps them alphabetical.
    methods.sort_by_key(|method| {
        METHOD_ORDER
            .iter()
            .position(|known| *known == method.as_str())
            .unwrap_or(METHOD_ORDER.len())
    });
    methods
}
