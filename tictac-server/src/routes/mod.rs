//! HTTP route handlers

pub mod analyze;
pub mod board;
pub mod game;
pub mod status;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tictac_core::InvalidMoveError;
use tokio::task::JoinError;

/// Request failure, rendered as `{"error": "..."}`
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<InvalidMoveError> for ApiError {
    fn from(err: InvalidMoveError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<JoinError> for ApiError {
    fn from(err: JoinError) -> Self {
        tracing::error!("engine task failed: {}", err);
        Self::internal("engine task failed")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
