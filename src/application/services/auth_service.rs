// src/application/services/auth_service.rs
use crate::application::error::ApplicationResult;
use crate::domain::user::User;

/// A user together with the bearer token issued for this login.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

/// Application service for accounts and bearer-token sessions.
pub trait AuthService: Send + Sync {
    /// Create an account and an initial session.
    fn register(&self, email: &str, password: &str) -> ApplicationResult<AuthSession>;

    /// Verify credentials and issue a session token.
    fn login(&self, email: &str, password: &str) -> ApplicationResult<AuthSession>;

    /// Resolve a bearer token to its user.
    fn authenticate(&self, token: &str) -> ApplicationResult<User>;

    /// Invalidate a session token.
    fn logout(&self, token: &str) -> ApplicationResult<()>;
}
