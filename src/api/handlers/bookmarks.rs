// src/api/handlers/bookmarks.rs
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::api::auth::AuthUser;
use crate::api::error::{ApiError, ApiResult};
use crate::api::AppContext;
use crate::application::services::bookmark_service::BookmarkService;
use crate::domain::bookmark::Bookmark;

#[derive(Debug, Deserialize)]
pub struct CreateBookmarkRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkResponse {
    pub id: i32,
    pub url: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl From<Bookmark> for BookmarkResponse {
    fn from(bookmark: Bookmark) -> Self {
        Self {
            id: bookmark.id.unwrap_or_default(),
            url: bookmark.url,
            title: bookmark.title,
            description: bookmark.description,
            favicon: bookmark.favicon,
            created_at: bookmark.created_at,
            updated_at: bookmark.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[instrument(skip(context), level = "debug")]
pub async fn list(
    State(context): State<AppContext>,
    user: AuthUser,
) -> ApiResult<Json<Vec<BookmarkResponse>>> {
    let bookmark_service = context.bookmark_service.clone();
    let bookmarks =
        tokio::task::spawn_blocking(move || bookmark_service.list_bookmarks(user.id))
            .await
            .map_err(ApiError::task_failure)??;

    Ok(Json(bookmarks.into_iter().map(Into::into).collect()))
}

#[instrument(skip(context, request), level = "debug")]
pub async fn create(
    State(context): State<AppContext>,
    user: AuthUser,
    Json(request): Json<CreateBookmarkRequest>,
) -> ApiResult<(StatusCode, Json<BookmarkResponse>)> {
    let bookmark_service = context.bookmark_service.clone();
    let bookmark = tokio::task::spawn_blocking(move || {
        let raw_url = request.url.as_deref().unwrap_or("");
        bookmark_service.create_bookmark(user.id, raw_url)
    })
    .await
    .map_err(ApiError::task_failure)??;

    info!("Created bookmark: {:?}", bookmark);
    Ok((StatusCode::CREATED, Json(bookmark.into())))
}

#[instrument(skip(context), level = "debug")]
pub async fn remove(
    State(context): State<AppContext>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<MessageResponse>> {
    let bookmark_service = context.bookmark_service.clone();
    tokio::task::spawn_blocking(move || bookmark_service.delete_bookmark(user.id, id))
        .await
        .map_err(ApiError::task_failure)??;

    info!("Deleted bookmark {} for user {}", id, user.id);
    Ok(Json(MessageResponse {
        message: "Bookmark removed".to_string(),
    }))
}
