// src/domain/repositories/user_repository.rs
use crate::domain::error::DomainError;
use crate::domain::user::User;

/// Repository trait for user accounts.
pub trait UserRepository: std::fmt::Debug + Send + Sync {
    /// Emails are stored lowercased; lookup expects a normalized address
    fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Add a new user, assigning its ID
    fn add(&self, user: &mut User) -> Result<(), DomainError>;
}

/// Repository trait for bearer-token sessions.
pub trait SessionRepository: std::fmt::Debug + Send + Sync {
    /// Record a freshly issued token for a user
    fn add(&self, user_id: i32, token: &str) -> Result<(), DomainError>;

    /// Resolve a token to its owning user
    fn get_user_by_token(&self, token: &str) -> Result<Option<User>, DomainError>;

    /// Invalidate a token, returning whether it existed
    fn delete(&self, token: &str) -> Result<bool, DomainError>;
}
