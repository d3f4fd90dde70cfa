// src/infrastructure/repositories/sqlite/error.rs
use diesel::result::Error as DieselError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SqliteRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DieselError),

    #[error("Connection pool error: {0}")]
    ConnectionPoolError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Migration error: {0}")]
    MigrationError(String),
}

pub type SqliteResult<T> = Result<T, SqliteRepositoryError>;

impl From<SqliteRepositoryError> for crate::domain::error::DomainError {
    fn from(err: SqliteRepositoryError) -> Self {
        use crate::domain::error::DomainError;
        match err {
            SqliteRepositoryError::DatabaseError(diesel_err) => match diesel_err {
                DieselError::NotFound => {
                    DomainError::BookmarkNotFound("Resource not found".to_string())
                }
                DieselError::DatabaseError(_, info) => DomainError::RepositoryError(format!(
                    "Database error: {}",
                    info.message()
                )),
                _ => DomainError::RepositoryError(format!("Database error: {}", diesel_err)),
            },
            SqliteRepositoryError::ConnectionPoolError(e) => {
                DomainError::RepositoryError(format!("Connection pool error: {}", e))
            }
            SqliteRepositoryError::IoError(e) => {
                DomainError::RepositoryError(format!("IO error: {}", e))
            }
            SqliteRepositoryError::MigrationError(e) => {
                DomainError::RepositoryError(format!("Migration error: {}", e))
            }
        }
    }
}
