use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::management::SongError;

/// Every failure a handler can report. Rendered as `{"detail": <message>}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Song(#[from] SongError),

    /// The request body or query string did not match the expected shape.
    #[error("{0}")]
    Validation(String),

    #[error("Not Found")]
    RouteNotFound,

    #[error("Method Not Allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Song(SongError::NotFound { .. }) | ApiError::RouteNotFound => {
                StatusCode::NOT_FOUND
            }
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
