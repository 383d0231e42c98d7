use crate::app::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::{error, info};

/// Handler for GET /api/parselog
///
/// Returns the raw lines of the configured source. Unlike the dashboard
/// endpoints this never substitutes sample data.
pub async fn parselog_handler(State(state): State<AppState>) -> Response {
    match state.source.fetch_lines().await {
        Ok(lines) => {
            info!("Serving {} raw log lines", lines.len());
            Json(json!({ "logLines": lines })).into_response()
        }
        Err(e) => {
            error!("Error reading log file: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Error reading log file",
                    "details": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}
