//! Generic filter → sort → paginate pipeline shared by the log viewer and the
//! aggregate drill-down tables.

pub mod enumerate;
pub mod log_table;
pub mod record;
pub mod state;

pub use enumerate::{METHOD_ORDER, distinct_methods, distinct_values};
pub use log_table::LogColumn;
pub use record::{FilterMode, TableRecord};
pub use state::{SortDirection, SortSpec, TableViewState};

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Unknown table: {0}")]
    UnknownTable(String),
}

/// Pagination metadata for one computed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Rows of the current page plus the state they were computed from, with the
/// page clamped to the filtered row count.
#[derive(Debug)]
pub struct TablePage<'a, R: TableRecord> {
    pub rows: Vec<&'a R>,
    pub page: PageInfo,
    pub state: TableViewState<R::Column>,
}

/// Rows matching the search term and every column filter, in input order.
pub fn filter<'a, R: TableRecord>(
    records: &'a [R],
    search_term: &str,
    filters: &BTreeMap<R::Column, String>,
) -> Vec<&'a R> {
    let needle = search_term.to_lowercase();

    records
        .iter()
        .filter(|record| {
            needle.is_empty()
                || R::columns()
                    .iter()
                    .any(|&column| record.cell(column).to_lowercase().contains(&needle))
        })
        .filter(|record| {
            filters.iter().all(|(&column, value)| {
                if value.is_empty() {
                    return true;
                }
                let cell = record.cell(column);
                match R::filter_mode(column) {
                    FilterMode::Exact => cell == value.as_str(),
                    FilterMode::Contains => cell.contains(value.as_str()),
                }
            })
        })
        .collect()
}

/// Stable sort by one column. Equal keys keep their relative input order in
/// both directions.
pub fn sort<'a, R: TableRecord>(mut rows: Vec<&'a R>, spec: SortSpec<R::Column>) -> Vec<&'a R> {
    match spec.direction {
        SortDirection::Ascending => rows.sort_by(|a, b| a.compare(b, spec.column)),
        SortDirection::Descending => rows.sort_by(|a, b| b.compare(a, spec.column)),
    }
    rows
}

/// One-based page of `items`. Page 0, a zero page size, or a page past the
/// end all give an empty slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Run the full pipeline from the unfiltered `records`.
pub fn compute<'a, R: TableRecord>(
    records: &'a [R],
    state: &TableViewState<R::Column>,
) -> TablePage<'a, R> {
    let filtered = filter(records, state.search_term(), state.filters());
    let ordered = match state.sort() {
        Some(spec) => sort(filtered, spec),
        None => filtered,
    };

    let state = state.clamp(ordered.len());
    let current_page = state.current_page();
    let total_pages = state.total_pages(ordered.len());
    let page = PageInfo {
        current_page,
        total_pages,
        total_items: ordered.len(),
        items_per_page: state.items_per_page(),
        has_previous: current_page > 1,
        has_next: current_page * state.items_per_page() < ordered.len(),
    };

    TablePage {
        rows: paginate(&ordered, current_page, state.items_per_page()).to_vec(),
        page,
        state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[derive(Debug, PartialEq)]
    struct Row {
        name: &'static str,
        tag: &'static str,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Col {
        Name,
        Tag,
    }

    impl TableRecord for Row {
        type Column = Col;

        fn columns() -> &'static [Col] {
            &[Col::Name, Col::Tag]
        }

        fn cell(&self, column: Col) -> Cow<'_, str> {
            match column {
                Col::Name => Cow::Borrowed(self.name),
                Col::Tag => Cow::Borrowed(self.tag),
            }
        }

        fn filter_mode(column: Col) -> FilterMode {
            match column {
                Col::Name => FilterMode::Contains,
                Col::Tag => FilterMode::Exact,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "beta", tag: "x" },
            Row { name: "Alpha", tag: "y" },
            Row { name: "alphabet", tag: "x" },
            Row { name: "gamma", tag: "x" },
        ]
    }

    fn names(rows: &[&Row]) -> Vec<&'static str> {
        rows.iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let data = rows();
        let found = filter(&data, "ALPHA", &BTreeMap::new());
        assert_eq!(names(&found), vec!["Alpha", "alphabet"]);
    }

    #[test]
    fn test_filters_combine() {
        let data = rows();
        let filters: BTreeMap<Col, String> = [(Col::Tag, "x".to_string())].into_iter().collect();
        assert_eq!(names(&filter(&data, "", &filters)), vec!["beta", "alphabet", "gamma"]);

        let filters: BTreeMap<Col, String> = [
            (Col::Tag, "x".to_string()),
            (Col::Name, "alpha".to_string()),
        ]
        .into_iter()
        .collect();
        // Substring filter is case-sensitive
        assert_eq!(names(&filter(&data, "", &filters)), vec!["alphabet"]);
    }

    #[test]
    fn test_sort_is_stable_both_ways() {
        let data = rows();
        let all: Vec<&Row> = data.iter().collect();

        let asc = sort(all.clone(), SortSpec::new(Col::Tag, SortDirection::Ascending));
        assert_eq!(names(&asc), vec!["beta", "alphabet", "gamma", "Alpha"]);

        let desc = sort(all, SortSpec::new(Col::Tag, SortDirection::Descending));
        assert_eq!(names(&desc), vec!["Alpha", "beta", "alphabet", "gamma"]);
    }

    #[test]
    fn test_paginate_bounds() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(paginate(&items, 1, 2), &[1, 2]);
        assert_eq!(paginate(&items, 3, 2), &[5]);
        assert!(paginate(&items, 4, 2).is_empty());
        assert!(paginate(&items, 0, 2).is_empty());
        assert!(paginate(&items, 1, 0).is_empty());
        assert!(paginate(&items, usize::MAX, usize::MAX).is_empty());
    }

    #[test]
    fn test_compute_clamps_page() {
        let data = rows();
        let state = TableViewState::new(2).with_page(9);
        let page = compute(&data, &state);

        assert_eq!(page.page.current_page, 2);
        assert_eq!(page.page.total_pages, 2);
        assert!(page.page.has_previous);
        assert!(!page.page.has_next);
        assert_eq!(names(&page.rows), vec!["alphabet", "gamma"]);
        assert_eq!(page.state.current_page(), 2);
    }

    #[test]
    fn test_compute_empty_result() {
        let data = rows();
        let state = TableViewState::new(2).with_search_term("nothing matches");
        let page = compute(&data, &state);

        assert!(page.rows.is_empty());
        assert_eq!(page.page.current_page, 1);
        assert_eq!(page.page.total_pages, 1);
        assert!(!page.page.has_previous);
        assert!(!page.page.has_next);
    }
}
