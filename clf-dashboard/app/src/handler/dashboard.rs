use super::ApiError;
use crate::aggregate::{CountColumn, CountRow, DrillDown};
use crate::app::AppState;
use crate::domain::ParseStats;
use crate::snapshot::DataOrigin;
use crate::table::{self, PageInfo, SortDirection, SortSpec, TableViewState};
use axum::Json;
use axum::extract::{Path, Query, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub generation: u64,
    pub origin: DataOrigin,
    pub using_sample_data: bool,
    pub warning: Option<String>,
    pub loaded_at: DateTime<Utc>,
    pub stats: ParseStats,
    pub total_records: usize,
    pub status_counts: BTreeMap<String, usize>,
    pub top_ips: Vec<CountRow>,
    pub top_paths: Vec<CountRow>,
    pub requests_by_hour: BTreeMap<String, usize>,
}

/// Handler for GET /api/dashboard
pub async fn dashboard_handler(State(state): State<AppState>) -> Json<DashboardResponse> {
    let snapshot = state.store().current();
    let aggregates = &snapshot.aggregates;
    let top_n = state.view.top_n;

    let to_rows = |pairs: &[(String, usize)]| -> Vec<CountRow> {
        pairs
            .iter()
            .map(|(key, count)| CountRow::new(key.as_str(), *count))
            .collect()
    };

    Json(DashboardResponse {
        generation: snapshot.generation,
        origin: snapshot.origin,
        using_sample_data: snapshot.using_sample_data(),
        warning: snapshot.warning.clone(),
        loaded_at: snapshot.loaded_at,
        stats: snapshot.stats,
        total_records: aggregates.total_records,
        status_counts: aggregates.status_counts.clone(),
        top_ips: to_rows(aggregates.top_ips(top_n)),
        top_paths: to_rows(aggregates.top_paths(top_n)),
        requests_by_hour: aggregates.requests_by_hour.clone(),
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct DrillDownQuery {
    pub sort: Option<String>,
    pub direction: Option<SortDirection>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrillDownResponse {
    pub table: DrillDown,
    pub key_label: &'static str,
    pub sort: SortSpec<CountColumn>,
    pub rows: Vec<CountRow>,
    pub page: PageInfo,
}

/// Handler for GET /api/dashboard/{table}
pub async fn drill_down_handler(
    State(state): State<AppState>,
    Path(table): Path<String>,
    Query(query): Query<DrillDownQuery>,
) -> Result<Json<DrillDownResponse>, ApiError> {
    let table: DrillDown = table.parse()?;

    let default_sort = table.default_sort();
    let sort = match query.sort.as_deref() {
        Some(column) => SortSpec::new(
            column.parse::<CountColumn>()?,
            query.direction.unwrap_or(default_sort.direction),
        ),
        None => SortSpec::new(
            default_sort.column,
            query.direction.unwrap_or(default_sort.direction),
        ),
    };

    let snapshot = state.store().current();
    let rows = table.rows(&snapshot.aggregates);
    let view = TableViewState::new(state.view.page_size(query.per_page))
        .with_sort(Some(sort))
        .with_page(query.page.unwrap_or(1));
    let page = table::compute(&rows, &view);

    Ok(Json(DrillDownResponse {
        table,
        key_label: table.key_label(),
        sort,
        rows: page.rows.into_iter().cloned().collect(),
        page: page.page,
    }))
}
