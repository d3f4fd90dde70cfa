// src/domain/repositories/bookmark_repository.rs
use crate::domain::bookmark::Bookmark;
use crate::domain::error::DomainError;

/// Repository trait for bookmark persistence operations.
///
/// Methods speak in domain terms and hide the data access details so the
/// application layer can be tested against in-memory or temp-file stores.
pub trait BookmarkRepository: std::fmt::Debug + Send + Sync {
    /// Get a bookmark by its ID
    fn get_by_id(&self, id: i32) -> Result<Option<Bookmark>, DomainError>;

    /// Get all bookmarks of a user, newest first
    fn get_by_user(&self, user_id: i32) -> Result<Vec<Bookmark>, DomainError>;

    /// Look up a user's bookmark for an exact URL
    fn get_by_user_and_url(&self, user_id: i32, url: &str)
        -> Result<Option<Bookmark>, DomainError>;

    /// Add a new bookmark, assigning its ID
    fn add(&self, bookmark: &mut Bookmark) -> Result<(), DomainError>;

    /// Delete a bookmark by ID, returning whether a row was removed
    fn delete(&self, id: i32) -> Result<bool, DomainError>;
}
