// src/api/auth.rs
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tracing::debug;

use crate::api::error::ApiError;
use crate::api::AppContext;
use crate::application::error::ApplicationError;
use crate::application::services::auth_service::AuthService;

const NO_TOKEN: &str = "Not authorized, no token";

/// The authenticated user behind a bearer token, resolved per request.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i32,
    pub email: String,
}

impl FromRequestParts<AppContext> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppContext,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::to_string)
            .ok_or_else(|| {
                debug!("Request without bearer token");
                ApiError(ApplicationError::Unauthorized(NO_TOKEN.to_string()))
            })?;

        let auth_service = state.auth_service.clone();
        let user = tokio::task::spawn_blocking(move || auth_service.authenticate(&token))
            .await
            .map_err(ApiError::task_failure)??;

        let id = user.id.ok_or_else(|| {
            ApiError(ApplicationError::Other(
                "Authenticated user has no id".to_string(),
            ))
        })?;

        Ok(AuthUser {
            id,
            email: user.email,
        })
    }
}
