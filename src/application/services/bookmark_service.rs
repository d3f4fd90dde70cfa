// src/application/services/bookmark_service.rs
use crate::application::error::ApplicationResult;
use crate::domain::bookmark::Bookmark;

/// Application service for the bookmark lifecycle.
pub trait BookmarkService: Send + Sync {
    /// Create a bookmark from a raw user-supplied URL.
    ///
    /// Normalizes and validates the URL, refuses duplicates for the user,
    /// scrapes page metadata, enriches the description via the reader
    /// endpoint where possible, and persists the result.
    fn create_bookmark(&self, user_id: i32, raw_url: &str) -> ApplicationResult<Bookmark>;

    /// All bookmarks of a user, newest first.
    fn list_bookmarks(&self, user_id: i32) -> ApplicationResult<Vec<Bookmark>>;

    /// Delete a bookmark, enforcing ownership.
    fn delete_bookmark(&self, user_id: i32, id: i32) -> ApplicationResult<()>;
}
