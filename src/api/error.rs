// src/api/error.rs
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::application::error::ApplicationError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Wrapper that maps application errors onto HTTP responses.
#[derive(Debug)]
pub struct ApiError(pub ApplicationError);

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// A blocking task that panicked or was cancelled.
    pub fn task_failure(err: tokio::task::JoinError) -> Self {
        Self(ApplicationError::Other(format!(
            "Blocking task failed: {}",
            err
        )))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ApplicationError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApplicationError::BookmarkExists => {
                (StatusCode::BAD_REQUEST, "Bookmark already exists".to_string())
            }
            ApplicationError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            ApplicationError::BookmarkNotFound(_) => {
                (StatusCode::NOT_FOUND, "Bookmark not found".to_string())
            }
            err => {
                error!("Internal error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response =
            ApiError(ApplicationError::Validation("Please provide a URL".to_string()))
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_duplicate_maps_to_bad_request() {
        let response = ApiError(ApplicationError::BookmarkExists).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unauthorized_maps_to_401() {
        let response =
            ApiError(ApplicationError::Unauthorized("Not authorized".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ApiError(ApplicationError::BookmarkNotFound(42)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_other_maps_to_500() {
        let response = ApiError(ApplicationError::Other("boom".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
