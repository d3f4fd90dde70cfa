// src/application/services/auth_service_impl.rs
use std::sync::Arc;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::auth_service::{AuthService, AuthSession};
use crate::domain::error::DomainError;
use crate::domain::repositories::user_repository::{SessionRepository, UserRepository};
use crate::domain::user::{normalize_email, User};
use sha2::{Digest, Sha256};
use tracing::{debug, instrument};
use uuid::Uuid;

const MIN_PASSWORD_LENGTH: usize = 8;
const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[derive(Debug)]
pub struct AuthServiceImpl {
    user_repository: Arc<dyn UserRepository>,
    session_repository: Arc<dyn SessionRepository>,
}

impl AuthServiceImpl {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        session_repository: Arc<dyn SessionRepository>,
    ) -> Self {
        Self {
            user_repository,
            session_repository,
        }
    }

    fn issue_session(&self, user: User) -> ApplicationResult<AuthSession> {
        let user_id = user.id.ok_or_else(|| {
            ApplicationError::Other("User record has no ID".to_string())
        })?;
        let token = Uuid::new_v4().simple().to_string();
        self.session_repository.add(user_id, &token)?;
        Ok(AuthSession { user, token })
    }
}

fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

impl AuthService for AuthServiceImpl {
    #[instrument(skip(self, password), level = "debug")]
    fn register(&self, email: &str, password: &str) -> ApplicationResult<AuthSession> {
        let email = normalize_email(email).map_err(|_| {
            ApplicationError::Validation("Please provide a valid email address".to_string())
        })?;

        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(ApplicationError::Validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        if self.user_repository.get_by_email(&email)?.is_some() {
            return Err(ApplicationError::Validation(
                "User already exists".to_string(),
            ));
        }

        let salt = Uuid::new_v4().simple().to_string();
        let hash = hash_password(password, &salt);
        let mut user = User::new(&email, &hash, &salt)
            .map_err(|e: DomainError| ApplicationError::Validation(e.to_string()))?;
        self.user_repository.add(&mut user)?;

        debug!("Registered user: {}", user.email);
        self.issue_session(user)
    }

    #[instrument(skip(self, password), level = "debug")]
    fn login(&self, email: &str, password: &str) -> ApplicationResult<AuthSession> {
        // One rejection shape for unknown email and bad password.
        let email = normalize_email(email)
            .map_err(|_| ApplicationError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        let user = self
            .user_repository
            .get_by_email(&email)?
            .ok_or_else(|| ApplicationError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        if hash_password(password, &user.password_salt) != user.password_hash {
            return Err(ApplicationError::Unauthorized(
                INVALID_CREDENTIALS.to_string(),
            ));
        }

        self.issue_session(user)
    }

    #[instrument(skip_all, level = "trace")]
    fn authenticate(&self, token: &str) -> ApplicationResult<User> {
        self.session_repository
            .get_user_by_token(token)?
            .ok_or_else(|| {
                ApplicationError::Unauthorized("Not authorized, token failed".to_string())
            })
    }

    #[instrument(skip_all, level = "debug")]
    fn logout(&self, token: &str) -> ApplicationResult<()> {
        self.session_repository.delete(token)?;
        Ok(())
    }
}
