// src/domain/bookmark.rs
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use std::fmt;

/// A stored (user, URL, title, description) record.
///
/// Bookmarks are created on successful metadata extraction and deleted by
/// their owner; there is no edit operation.
#[derive(Builder, Clone, PartialEq)]
#[builder(setter(into))]
pub struct Bookmark {
    #[builder(default)]
    pub id: Option<i32>,
    pub user_id: i32,
    pub url: String,
    pub title: String,
    pub description: String,
    #[builder(default)]
    pub favicon: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl Bookmark {
    pub fn new<S: AsRef<str>>(user_id: i32, url: S, title: S, description: S) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            user_id,
            url: url.as_ref().to_string(),
            title: title.as_ref().to_string(),
            description: description.as_ref().to_string(),
            favicon: None,
            created_at: Some(now),
            updated_at: now,
        }
    }

    /// Converts from storage format.
    #[allow(clippy::too_many_arguments)]
    pub fn from_storage(
        id: i32,
        user_id: i32,
        url: String,
        title: String,
        description: String,
        favicon: Option<String>,
        created_at: Option<DateTime<Utc>>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            user_id,
            url,
            title,
            description,
            favicon,
            created_at,
            updated_at,
        }
    }

    /// Set the ID (typically used after storage)
    pub fn set_id(&mut self, id: i32) {
        self.id = Some(id);
    }

    pub fn is_owned_by(&self, user_id: i32) -> bool {
        self.user_id == user_id
    }
}

impl fmt::Debug for Bookmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bookmark")
            .field("id", &self.id)
            .field("user_id", &self.user_id)
            .field("url", &self.url)
            .field("title", &self.title)
            .finish()
    }
}

/// Title and description scraped from a page, produced once per creation
/// request and never persisted on its own. Either field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl ExtractedMetadata {
    pub fn empty() -> Self {
        Self::default()
    }
}
