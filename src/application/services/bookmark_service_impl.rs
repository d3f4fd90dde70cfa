// src/application/services/bookmark_service_impl.rs
use std::sync::Arc;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::bookmark_service::BookmarkService;
use crate::domain::bookmark::{Bookmark, BookmarkBuilder};
use crate::domain::error::DomainError;
use crate::domain::repositories::bookmark_repository::BookmarkRepository;
use crate::domain::services::metadata::{MetadataFetcher, SummaryFetcher};
use crate::domain::services::text::{clean_reader_summary, trim_to_words, MAX_DESCRIPTION_WORDS};
use tracing::{debug, instrument, warn};
use url::Url;

const DEFAULT_DESCRIPTION: &str = "No description available";

#[derive(Debug)]
pub struct BookmarkServiceImpl<R: BookmarkRepository> {
    repository: Arc<R>,
    metadata_fetcher: Arc<dyn MetadataFetcher>,
    summary_fetcher: Arc<dyn SummaryFetcher>,
}

impl<R: BookmarkRepository> BookmarkServiceImpl<R> {
    pub fn new(
        repository: Arc<R>,
        metadata_fetcher: Arc<dyn MetadataFetcher>,
        summary_fetcher: Arc<dyn SummaryFetcher>,
    ) -> Self {
        Self {
            repository,
            metadata_fetcher,
            summary_fetcher,
        }
    }

    /// Pick the stored description: reader summary when available and
    /// non-empty after cleanup, otherwise the page's own (trimmed)
    /// description, otherwise a fixed placeholder.
    #[instrument(skip(self, native_description), level = "debug")]
    fn resolve_description(&self, url: &str, native_description: Option<&str>) -> String {
        let fallback = native_description
            .filter(|d| !d.is_empty())
            .map(|d| trim_to_words(d, MAX_DESCRIPTION_WORDS))
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

        match self.summary_fetcher.fetch_summary(url) {
            Ok(raw) => {
                let cleaned = clean_reader_summary(&raw);
                if cleaned.is_empty() {
                    debug!("Reader summary empty after cleanup, keeping fallback");
                    fallback
                } else {
                    trim_to_words(&cleaned, MAX_DESCRIPTION_WORDS)
                }
            }
            Err(e) => {
                warn!("Failed to fetch reader summary: {}", e);
                fallback
            }
        }
    }
}

/// Prefix bare URLs with https:// and validate via strict parsing.
pub fn normalize_url(raw_url: &str) -> ApplicationResult<String> {
    let trimmed = raw_url.trim();
    if trimmed.is_empty() {
        return Err(ApplicationError::Validation(
            "Please provide a URL".to_string(),
        ));
    }

    let candidate = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    Url::parse(&candidate).map_err(|_| {
        ApplicationError::Validation("Please provide a valid URL".to_string())
    })?;

    Ok(candidate)
}

impl<R: BookmarkRepository> BookmarkService for BookmarkServiceImpl<R> {
    #[instrument(skip(self), level = "debug", fields(url = %raw_url))]
    fn create_bookmark(&self, user_id: i32, raw_url: &str) -> ApplicationResult<Bookmark> {
        let url = normalize_url(raw_url)?;

        // Read-before-insert; racing requests for the same URL are not
        // transactionally guarded.
        if self.repository.get_by_user_and_url(user_id, &url)?.is_some() {
            return Err(ApplicationError::BookmarkExists);
        }

        debug!("Extracting metadata for URL: {}", url);
        let metadata = self.metadata_fetcher.fetch(&url);

        let description = self.resolve_description(&url, metadata.description.as_deref());
        let title = metadata
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| url.clone());

        let now = chrono::Utc::now();
        let mut bookmark = BookmarkBuilder::default()
            .user_id(user_id)
            .url(url.clone())
            .title(title)
            .description(description)
            .created_at(Some(now))
            .updated_at(now)
            .build()
            .map_err(DomainError::from)?;
        self.repository.add(&mut bookmark)?;

        debug!("Created bookmark: {:?}", bookmark);
        Ok(bookmark)
    }

    #[instrument(skip(self), level = "debug")]
    fn list_bookmarks(&self, user_id: i32) -> ApplicationResult<Vec<Bookmark>> {
        let bookmarks = self.repository.get_by_user(user_id)?;
        Ok(bookmarks)
    }

    #[instrument(skip(self), level = "debug")]
    fn delete_bookmark(&self, user_id: i32, id: i32) -> ApplicationResult<()> {
        let bookmark = self
            .repository
            .get_by_id(id)?
            .ok_or(ApplicationError::BookmarkNotFound(id))?;

        if !bookmark.is_owned_by(user_id) {
            return Err(ApplicationError::Unauthorized(
                "Not authorized to delete this bookmark".to_string(),
            ));
        }

        self.repository.delete(id)?;
        Ok(())
    }
}
