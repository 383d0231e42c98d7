use crate::app::AppState;
use crate::domain::ParseStats;
use crate::snapshot::DataOrigin;
use axum::Json;
use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub generation: u64,
    pub origin: DataOrigin,
    pub using_sample_data: bool,
    pub warning: Option<String>,
    pub loaded_at: DateTime<Utc>,
    pub stats: ParseStats,
}

/// Handler for POST /api/refresh
pub async fn refresh_handler(State(state): State<AppState>) -> Json<RefreshResponse> {
    info!("Snapshot refresh requested");
    let snapshot = state.loader.load().await;

    Json(RefreshResponse {
        generation: snapshot.generation,
        origin: snapshot.origin,
        using_sample_data: snapshot.using_sample_data(),
        warning: snapshot.warning.clone(),
        loaded_at: snapshot.loaded_at,
        stats: snapshot.stats,
    })
}
