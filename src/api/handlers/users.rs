// src/api/handlers/users.rs
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::api::error::{ApiError, ApiResult};
use crate::api::AppContext;
use crate::application::error::ApplicationError;
use crate::application::services::auth_service::{AuthService, AuthSession};

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl CredentialsRequest {
    fn parts(&self) -> (&str, &str) {
        (
            self.email.as_deref().unwrap_or(""),
            self.password.as_deref().unwrap_or(""),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub id: i32,
    pub email: String,
    pub token: String,
}

impl From<AuthSession> for AuthResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            id: session.user.id.unwrap_or_default(),
            email: session.user.email,
            token: session.token,
        }
    }
}

#[instrument(skip(context, request), level = "debug")]
pub async fn register(
    State(context): State<AppContext>,
    Json(request): Json<CredentialsRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let auth_service = context.auth_service.clone();
    let session = tokio::task::spawn_blocking(move || {
        let (email, password) = request.parts();
        auth_service.register(email, password)
    })
    .await
    .map_err(ApiError::task_failure)??;

    info!("Registered user: {}", session.user.email);
    Ok((StatusCode::CREATED, Json(session.into())))
}

#[instrument(skip(context, request), level = "debug")]
pub async fn login(
    State(context): State<AppContext>,
    Json(request): Json<CredentialsRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let auth_service = context.auth_service.clone();
    let session = tokio::task::spawn_blocking(move || {
        let (email, password) = request.parts();
        auth_service.login(email, password)
    })
    .await
    .map_err(ApiError::task_failure)??;

    Ok(Json(session.into()))
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[instrument(skip(context, headers), level = "debug")]
pub async fn logout(
    State(context): State<AppContext>,
    headers: HeaderMap,
) -> ApiResult<Json<MessageResponse>> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_string)
        .ok_or_else(|| {
            ApiError(ApplicationError::Unauthorized(
                "Not authorized, no token".to_string(),
            ))
        })?;

    let auth_service = context.auth_service.clone();
    tokio::task::spawn_blocking(move || auth_service.logout(&token))
        .await
        .map_err(ApiError::task_failure)??;

    Ok(Json(MessageResponse {
        message: "Logged out".to_string(),
    }))
}
