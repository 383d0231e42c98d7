use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// How a per-column filter value is matched against a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Cell must equal the filter value.
    Exact,
    /// Cell must contain the filter value (case-sensitive).
    Contains,
}

/// A row type the table engine can filter, sort and page.
pub trait TableRecord {
    type Column: Copy + Ord + fmt::Debug + 'static;

    /// Every column, in display order.
    fn columns() -> &'static [Self::Column];

    /// Text shown in `column`; also what search and filters match against.
    fn cell(&self, column: Self::Column) -> Cow<'_, str>;

    fn filter_mode(_column: Self::Column) -> FilterMode {
        FilterMode::Exact
    }

    /// Ordering used when sorting by `column`. Lexicographic on the cell text
    /// unless a row type says otherwise.
    fn compare(&self, other: &Self, column: Self::Column) -> Ordering {
        self.cell(column).cmp(&other.cell(column))
    }
}
