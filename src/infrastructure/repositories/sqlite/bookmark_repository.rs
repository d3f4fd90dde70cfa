// src/infrastructure/repositories/sqlite/bookmark_repository.rs
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::sql_types::Integer;
use tracing::{debug, instrument};

use super::connection::{ConnectionPool, PooledConnection};
use super::error::{SqliteRepositoryError, SqliteResult};
use crate::domain::bookmark::Bookmark;
use crate::domain::error::DomainError;
use crate::domain::repositories::bookmark_repository::BookmarkRepository;
use crate::infrastructure::repositories::sqlite::model::{DbBookmark, NewBookmark};
use crate::infrastructure::repositories::sqlite::schema::bookmarks::dsl;

#[derive(Clone, Debug)]
pub struct SqliteBookmarkRepository {
    pool: ConnectionPool,
}

impl SqliteBookmarkRepository {
    /// Create a new SQLite repository with the provided connection pool
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }

    /// Get a connection from the pool
    #[instrument(skip_all, level = "trace")]
    pub fn get_connection(&self) -> SqliteResult<PooledConnection> {
        self.pool
            .get()
            .map_err(|e| SqliteRepositoryError::ConnectionPoolError(e.to_string()))
    }

    /// Convert a database model to a domain entity
    fn to_domain_model(db_bookmark: DbBookmark) -> Bookmark {
        let created_at =
            DateTime::<Utc>::from_naive_utc_and_offset(db_bookmark.created_ts, Utc);
        let updated_at =
            DateTime::<Utc>::from_naive_utc_and_offset(db_bookmark.last_update_ts, Utc);

        Bookmark::from_storage(
            db_bookmark.id,
            db_bookmark.user_id,
            db_bookmark.url,
            db_bookmark.title,
            db_bookmark.desc,
            db_bookmark.favicon,
            Some(created_at),
            updated_at,
        )
    }
}

impl BookmarkRepository for SqliteBookmarkRepository {
    #[instrument(skip_all, level = "debug")]
    fn get_by_id(&self, id: i32) -> Result<Option<Bookmark>, DomainError> {
        let mut conn = self.get_connection()?;

        let result = dsl::bookmarks
            .filter(dsl::id.eq(id))
            .first::<DbBookmark>(&mut conn)
            .optional()
            .map_err(SqliteRepositoryError::DatabaseError)?;

        Ok(result.map(Self::to_domain_model))
    }

    #[instrument(skip_all, level = "debug")]
    fn get_by_user(&self, user_id: i32) -> Result<Vec<Bookmark>, DomainError> {
        let mut conn = self.get_connection()?;

        let db_bookmarks = dsl::bookmarks
            .filter(dsl::user_id.eq(user_id))
            .order((dsl::created_ts.desc(), dsl::id.desc()))
            .load::<DbBookmark>(&mut conn)
            .map_err(SqliteRepositoryError::DatabaseError)?;

        Ok(db_bookmarks
            .into_iter()
            .map(Self::to_domain_model)
            .collect())
    }

    #[instrument(skip_all, level = "debug")]
    fn get_by_user_and_url(
        &self,
        user_id: i32,
        url: &str,
    ) -> Result<Option<Bookmark>, DomainError> {
        let mut conn = self.get_connection()?;

        let result = dsl::bookmarks
            .filter(dsl::user_id.eq(user_id))
            .filter(dsl::url.eq(url))
            .first::<DbBookmark>(&mut conn)
            .optional()
            .map_err(SqliteRepositoryError::DatabaseError)?;

        Ok(result.map(Self::to_domain_model))
    }

    #[instrument(skip_all, level = "debug")]
    fn add(&self, bookmark: &mut Bookmark) -> Result<(), DomainError> {
        let mut conn = self.get_connection()?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let created_ts = bookmark
                .created_at
                .unwrap_or_else(Utc::now)
                .naive_utc();
            let db_bookmark = NewBookmark {
                user_id: bookmark.user_id,
                url: bookmark.url.to_string(),
                title: bookmark.title.to_string(),
                desc: bookmark.description.to_string(),
                favicon: bookmark.favicon.clone(),
                created_ts,
                last_update_ts: bookmark.updated_at.naive_utc(),
            };
            debug!("Inserting bookmark: {:?}", db_bookmark);

            let result = diesel::insert_into(dsl::bookmarks)
                .values(&db_bookmark)
                .execute(conn)?;

            if result == 0 {
                return Err(diesel::result::Error::NotFound);
            }

            // Get the inserted ID
            let id = diesel::select(diesel::dsl::sql::<Integer>("last_insert_rowid()"))
                .get_result::<i32>(conn)?;

            bookmark.set_id(id);

            Ok(())
        })
        .map_err(SqliteRepositoryError::DatabaseError)?;

        Ok(())
    }

    #[instrument(skip_all, level = "debug")]
    fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let mut conn = self.get_connection()?;

        let result = diesel::delete(dsl::bookmarks.filter(dsl::id.eq(id)))
            .execute(&mut conn)
            .map_err(SqliteRepositoryError::DatabaseError)?;

        Ok(result > 0)
    }
}
