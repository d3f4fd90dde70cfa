// src/infrastructure/repositories/sqlite/user_repository.rs
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::sql_types::Integer;
use tracing::instrument;

use super::connection::{ConnectionPool, PooledConnection};
use super::error::{SqliteRepositoryError, SqliteResult};
use crate::domain::error::DomainError;
use crate::domain::repositories::user_repository::{SessionRepository, UserRepository};
use crate::domain::user::User;
use crate::infrastructure::repositories::sqlite::model::{DbUser, NewSession, NewUser};
use crate::infrastructure::repositories::sqlite::schema::{sessions, users};

fn to_domain_user(db_user: DbUser) -> User {
    let created_at = DateTime::<Utc>::from_naive_utc_and_offset(db_user.created_ts, Utc);
    User::from_storage(
        db_user.id,
        db_user.email,
        db_user.password_hash,
        db_user.password_salt,
        Some(created_at),
    )
}

#[derive(Clone, Debug)]
pub struct SqliteUserRepository {
    pool: ConnectionPool,
}

impl SqliteUserRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }

    fn get_connection(&self) -> SqliteResult<PooledConnection> {
        self.pool
            .get()
            .map_err(|e| SqliteRepositoryError::ConnectionPoolError(e.to_string()))
    }
}

impl UserRepository for SqliteUserRepository {
    #[instrument(skip_all, level = "debug")]
    fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let mut conn = self.get_connection()?;

        let result = users::dsl::users
            .filter(users::dsl::email.eq(email))
            .first::<DbUser>(&mut conn)
            .optional()
            .map_err(SqliteRepositoryError::DatabaseError)?;

        Ok(result.map(to_domain_user))
    }

    #[instrument(skip_all, level = "debug")]
    fn add(&self, user: &mut User) -> Result<(), DomainError> {
        let mut conn = self.get_connection()?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let db_user = NewUser {
                email: user.email.to_string(),
                password_hash: user.password_hash.to_string(),
                password_salt: user.password_salt.to_string(),
                created_ts: user.created_at.unwrap_or_else(Utc::now).naive_utc(),
            };

            let result = diesel::insert_into(users::dsl::users)
                .values(&db_user)
                .execute(conn)?;

            if result == 0 {
                return Err(diesel::result::Error::NotFound);
            }

            let id = diesel::select(diesel::dsl::sql::<Integer>("last_insert_rowid()"))
                .get_result::<i32>(conn)?;

            user.set_id(id);

            Ok(())
        })
        .map_err(SqliteRepositoryError::DatabaseError)?;

        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct SqliteSessionRepository {
    pool: ConnectionPool,
}

impl SqliteSessionRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }

    fn get_connection(&self) -> SqliteResult<PooledConnection> {
        self.pool
            .get()
            .map_err(|e| SqliteRepositoryError::ConnectionPoolError(e.to_string()))
    }
}

impl SessionRepository for SqliteSessionRepository {
    #[instrument(skip_all, level = "debug")]
    fn add(&self, user_id: i32, token: &str) -> Result<(), DomainError> {
        let mut conn = self.get_connection()?;

        let session = NewSession {
            token: token.to_string(),
            user_id,
            created_ts: Utc::now().naive_utc(),
        };

        diesel::insert_into(sessions::dsl::sessions)
            .values(&session)
            .execute(&mut conn)
            .map_err(SqliteRepositoryError::DatabaseError)?;

        Ok(())
    }

    #[instrument(skip_all, level = "trace")]
    fn get_user_by_token(&self, token: &str) -> Result<Option<User>, DomainError> {
        let mut conn = self.get_connection()?;

        let result = sessions::dsl::sessions
            .inner_join(users::dsl::users)
            .filter(sessions::dsl::token.eq(token))
            .select(DbUser::as_select())
            .first::<DbUser>(&mut conn)
            .optional()
            .map_err(SqliteRepositoryError::DatabaseError)?;

        Ok(result.map(to_domain_user))
    }

    #[instrument(skip_all, level = "debug")]
    fn delete(&self, token: &str) -> Result<bool, DomainError> {
        let mut conn = self.get_connection()?;

        let result = diesel::delete(
            sessions::dsl::sessions.filter(sessions::dsl::token.eq(token)),
        )
        .execute(&mut conn)
        .map_err(SqliteRepositoryError::DatabaseError)?;

        Ok(result > 0)
    }
}
