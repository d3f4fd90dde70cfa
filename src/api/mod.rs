// src/api/mod.rs
pub mod auth;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::json;

use crate::application::services::auth_service::AuthService;
use crate::application::services::bookmark_service::BookmarkService;
use crate::infrastructure::di::ServiceContainer;

/// Shared handler state, cloned per request.
#[derive(Clone)]
pub struct AppContext {
    pub bookmark_service: Arc<dyn BookmarkService>,
    pub auth_service: Arc<dyn AuthService>,
}

impl From<ServiceContainer> for AppContext {
    fn from(container: ServiceContainer) -> Self {
        Self {
            bookmark_service: container.bookmark_service,
            auth_service: container.auth_service,
        }
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub fn router(context: AppContext) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/users", post(handlers::users::register))
        .route("/api/users/login", post(handlers::users::login))
        .route("/api/users/logout", post(handlers::users::logout))
        .route(
            "/api/bookmarks",
            get(handlers::bookmarks::list).post(handlers::bookmarks::create),
        )
        .route("/api/bookmarks/{id}", delete(handlers::bookmarks::remove))
        .with_state(context)
}
