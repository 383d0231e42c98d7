pub mod dashboard;
pub mod health;
pub mod logs;
pub mod parselog;
pub mod refresh;

use crate::table::TableError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Errors a request can end in, mapped onto HTTP status codes.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Table(#[from] TableError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Table(TableError::UnknownTable(_)) => StatusCode::NOT_FOUND,
            ApiError::Table(TableError::UnknownColumn(_)) => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
