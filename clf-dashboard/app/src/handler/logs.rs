use super::ApiError;
use crate::app::AppState;
use crate::domain::LogRecord;
use crate::table::{
    self, LogColumn, PageInfo, SortDirection, SortSpec, TableViewState, distinct_methods,
    distinct_values,
};
use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

/// Query string of the log search view. Empty values mean "no filter".
#[derive(Debug, Default, Deserialize)]
pub struct LogsQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub method: Option<String>,
    pub ip: Option<String>,
    pub date: Option<String>,
    pub path: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<SortDirection>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

impl LogsQuery {
    fn view_state(&self, items_per_page: usize) -> Result<TableViewState<LogColumn>, ApiError> {
        let mut state = TableViewState::new(items_per_page);

        if let Some(term) = &self.search {
            state = state.with_search_term(term.as_str());
        }

        let filters = [
            (LogColumn::StatusCode, &self.status),
            (LogColumn::Method, &self.method),
            (LogColumn::ClientAddress, &self.ip),
            (LogColumn::Timestamp, &self.date),
            (LogColumn::Path, &self.path),
        ];
        for (column, value) in filters {
            if let Some(value) = value {
                state = state.with_filter(column, value.as_str());
            }
        }

        if let Some(column) = &self.sort {
            let column: LogColumn = column.parse()?;
            state = state.with_sort(Some(SortSpec::new(
                column,
                self.direction.unwrap_or_default(),
            )));
        }

        Ok(state.with_page(self.page.unwrap_or(1)))
    }
}

/// Dropdown contents for the search view, drawn from the whole snapshot.
#[derive(Debug, Serialize)]
pub struct FilterOptions {
    pub statuses: Vec<String>,
    pub methods: Vec<String>,
    pub ips: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsResponse {
    pub rows: Vec<LogRecord>,
    pub page: PageInfo,
    pub filter_options: FilterOptions,
    pub using_sample_data: bool,
    pub warning: Option<String>,
}

/// Handler for GET /api/logs
pub async fn logs_handler(
    State(state): State<AppState>,
    Query(query): Query<LogsQuery>,
) -> Result<Json<LogsResponse>, ApiError> {
    let view = query.view_state(state.view.page_size(query.per_page))?;

    let snapshot = state.store().current();
    let records = &snapshot.records;
    let page = table::compute(records, &view);

    Ok(Json(LogsResponse {
        rows: page.rows.into_iter().cloned().collect(),
        page: page.page,
        filter_options: FilterOptions {
            statuses: distinct_values(records, LogColumn::StatusCode),
            methods: distinct_methods(records),
            ips: distinct_values(records, LogColumn::ClientAddress),
        },
        using_sample_data: snapshot.using_sample_data(),
        warning: snapshot.warning.clone(),
    }))
}
