use super::state::AppState;
use crate::handler::dashboard::{dashboard_handler, drill_down_handler};
use crate::handler::health::health_handler;
use crate::handler::logs::logs_handler;
use crate::handler::parselog::parselog_handler;
use crate::handler::refresh::refresh_handler;
use axum::Router;
use axum::routing::{get, post};

/// Build the dashboard HTTP router.
pub fn build_router(state: AppState) -> Router {
    let v1_health_router = Router::new().route("/v1/health", get(health_handler));

    let api_router = Router::new()
        .route("/api/parselog", get(parselog_handler))
        .route("/api/dashboard", get(dashboard_handler))
        .route("/api/dashboard/{table}", get(drill_down_handler))
        .route("/api/logs", get(logs_handler))
        .route("/api/refresh", post(refresh_handler))
        .with_state(state);

    Router::new().merge(v1_health_router).merge(api_router)
}
