use crate::db::StorageError;
use crate::ingest::SweepError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Sweep failed: {0}")]
    Sweep(#[from] SweepError),

    #[error("Database error: {0}")]
    Storage(#[from] StorageError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::Sweep(SweepError::Fetch { address, .. }) => {
                format!("Fetching portfolio for {} failed", address)
            }
            ApiError::Sweep(SweepError::Storage(_)) | ApiError::Storage(_) => {
                "Database error occurred".to_string()
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
