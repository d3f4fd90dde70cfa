// src/infrastructure/di/service_container.rs
use std::sync::Arc;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::auth_service::AuthService;
use crate::application::services::auth_service_impl::AuthServiceImpl;
use crate::application::services::bookmark_service::BookmarkService;
use crate::application::services::bookmark_service_impl::BookmarkServiceImpl;
use crate::config::Settings;
use crate::domain::services::metadata::{MetadataFetcher, SummaryFetcher};
use crate::infrastructure::http::HttpMetadataFetcher;
use crate::infrastructure::reader::ReaderSummaryFetcher;
use crate::infrastructure::repositories::sqlite::bookmark_repository::SqliteBookmarkRepository;
use crate::infrastructure::repositories::sqlite::connection::{init_pool, ConnectionPool};
use crate::infrastructure::repositories::sqlite::user_repository::{
    SqliteSessionRepository, SqliteUserRepository,
};

/// Production service container - single source of truth for service creation
pub struct ServiceContainer {
    pub bookmark_service: Arc<dyn BookmarkService>,
    pub auth_service: Arc<dyn AuthService>,
}

impl ServiceContainer {
    /// Create all services with explicit dependency injection
    pub fn new(config: &Settings) -> ApplicationResult<Self> {
        let pool = init_pool(&config.db_url).map_err(|e| {
            ApplicationError::Other(format!("Failed to open database: {}", e))
        })?;

        let metadata_fetcher: Arc<dyn MetadataFetcher> = Arc::new(HttpMetadataFetcher);
        let summary_fetcher: Arc<dyn SummaryFetcher> =
            Arc::new(ReaderSummaryFetcher::new(&config.reader_base_url));

        Ok(Self::with_fetchers(pool, metadata_fetcher, summary_fetcher))
    }

    /// Wire services on an existing pool with caller-supplied fetchers.
    /// Tests use this to swap in stub fetchers.
    pub fn with_fetchers(
        pool: ConnectionPool,
        metadata_fetcher: Arc<dyn MetadataFetcher>,
        summary_fetcher: Arc<dyn SummaryFetcher>,
    ) -> Self {
        let bookmark_repository = Arc::new(SqliteBookmarkRepository::new(pool.clone()));
        let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
        let session_repository = Arc::new(SqliteSessionRepository::new(pool));

        let bookmark_service = Arc::new(BookmarkServiceImpl::new(
            bookmark_repository,
            metadata_fetcher,
            summary_fetcher,
        ));

        let auth_service = Arc::new(AuthServiceImpl::new(user_repository, session_repository));

        Self {
            bookmark_service,
            auth_service,
        }
    }
}

impl std::fmt::Debug for ServiceContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContainer")
            .field("bookmark_service", &"Arc<dyn BookmarkService>")
            .field("auth_service", &"Arc<dyn AuthService>")
            .finish()
    }
}
