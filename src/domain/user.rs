// src/domain/user.rs
use crate::domain::error::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::fmt;

/// An account that owns bookmarks. Credentials are stored as a salted
/// password hash; the cleartext never leaves the auth service.
#[derive(Clone, PartialEq)]
pub struct User {
    pub id: Option<i32>,
    pub email: String,
    pub password_hash: String,
    pub password_salt: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(email: &str, password_hash: &str, password_salt: &str) -> DomainResult<Self> {
        let email = normalize_email(email)?;
        Ok(Self {
            id: None,
            email,
            password_hash: password_hash.to_string(),
            password_salt: password_salt.to_string(),
            created_at: Some(Utc::now()),
        })
    }

    pub fn from_storage(
        id: i32,
        email: String,
        password_hash: String,
        password_salt: String,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: Some(id),
            email,
            password_hash,
            password_salt,
            created_at,
        }
    }

    pub fn set_id(&mut self, id: i32) {
        self.id = Some(id);
    }
}

// Keep hashes out of log output.
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .finish()
    }
}

/// Lowercases and validates an email address. The check is deliberately
/// shallow: a non-empty local part and domain around a single '@'.
pub fn normalize_email(email: &str) -> DomainResult<String> {
    let email = email.trim().to_lowercase();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(email),
        _ => Err(DomainError::InvalidEmail(email)),
    }
}
