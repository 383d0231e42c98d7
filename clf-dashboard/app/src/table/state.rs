use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortSpec<C> {
    pub column: C,
    pub direction: SortDirection,
}

impl<C> SortSpec<C> {
    pub fn new(column: C, direction: SortDirection) -> Self {
        Self { column, direction }
    }
}

/// Search, filter, sort and paging state of one table view.
///
/// Transitions return a new state. Changing the search term, a filter, the
/// sort or the page size sends the view back to page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableViewState<C: Ord> {
    search_term: String,
    filters: BTreeMap<C, String>,
    sort: Option<SortSpec<C>>,
    current_page: usize,
    items_per_page: usize,
}

impl<C: Ord + Copy> TableViewState<C> {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            search_term: String::new(),
            filters: BTreeMap::new(),
            sort: None,
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn filters(&self) -> &BTreeMap<C, String> {
        &self.filters
    }

    pub fn filter(&self, column: C) -> Option<&str> {
        self.filters.get(&column).map(String::as_str)
    }

    pub fn sort(&self) -> Option<SortSpec<C>> {
        self.sort
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Number of pages for `filtered_count` rows; never less than 1.
    pub fn total_pages(&self, filtered_count: usize) -> usize {
        filtered_count.div_ceil(self.items_per_page).max(1)
    }

    #[must_use]
    pub fn with_search_term(&self, term: impl Into<String>) -> Self {
        let term = term.into();
        if term == self.search_term {
            return self.clone();
        }
        Self {
            search_term: term,
            current_page: 1,
            ..self.clone()
        }
    }

    /// Set the filter for `column`; an empty value clears it.
    #[must_use]
    pub fn with_filter(&self, column: C, value: impl Into<String>) -> Self {
        let value = value.into();
        if self.filter(column).unwrap_or("") == value {
            return self.clone();
        }
        let mut filters = self.filters.clone();
        if value.is_empty() {
            filters.remove(&column);
        } else {
            filters.insert(column, value);
        }
        Self {
            filters,
            current_page: 1,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn clear_filters(&self) -> Self {
        if self.filters.is_empty() && self.search_term.is_empty() {
            return self.clone();
        }
        Self {
            search_term: String::new(),
            filters: BTreeMap::new(),
            current_page: 1,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_sort(&self, sort: Option<SortSpec<C>>) -> Self {
        if sort == self.sort {
            return self.clone();
        }
        Self {
            sort,
            current_page: 1,
            ..self.clone()
        }
    }

    /// Header-click behavior: ascending first, a second click on an ascending
    /// column flips it to descending.
    #[must_use]
    pub fn toggle_sort(&self, column: C) -> Self {
        let direction = match self.sort {
            Some(current)
                if current.column == column && current.direction == SortDirection::Ascending =>
            {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };
        self.with_sort(Some(SortSpec::new(column, direction)))
    }

    #[must_use]
    pub fn with_items_per_page(&self, items_per_page: usize) -> Self {
        Self {
            items_per_page: items_per_page.max(1),
            current_page: 1,
            ..self.clone()
        }
    }

    /// Requested page, not yet checked against a row count. Computing a view
    /// clamps it.
    #[must_use]
    pub fn with_page(&self, page: usize) -> Self {
        Self {
            current_page: page.max(1),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn go_to_page(&self, page: usize, filtered_count: usize) -> Self {
        self.with_page(page).clamp(filtered_count)
    }

    #[must_use]
    pub fn next_page(&self, filtered_count: usize) -> Self {
        self.go_to_page(self.current_page + 1, filtered_count)
    }

    #[must_use]
    pub fn previous_page(&self, filtered_count: usize) -> Self {
        self.go_to_page(self.current_page.saturating_sub(1), filtered_count)
    }

    /// Pull `current_page` into `[1, total_pages(filtered_count)]`.
    #[must_use]
    pub fn clamp(&self, filtered_count: usize) -> Self {
        Self {
            current_page: self
                .current_page
                .clamp(1, self.total_pages(filtered_count)),
            ..self.clone()
        }
    }
}
