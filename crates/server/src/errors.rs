use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use service::errors::ServiceError;
use tracing::{error, warn};

/// Error body returned on every failed request: `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiErrorBody { message: self.message })).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation { .. } | ServiceError::BadRequest(_) => {
                Self::new(StatusCode::BAD_REQUEST, e.to_string())
            }
            ServiceError::NotFound => Self::new(StatusCode::NOT_FOUND, e.to_string()),
            ServiceError::Db(msg) => {
                error!(error = %msg, "storage failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

/// A body that is missing or cannot be read as a record is reported as 415
/// before any field validation runs.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        warn!(error = %message, "rejected request body");
        Self::new(StatusCode::UNSUPPORTED_MEDIA_TYPE, message)
    }
}
