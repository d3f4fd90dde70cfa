pub mod auth_service;
pub mod auth_service_impl;
pub mod bookmark_service;
pub mod bookmark_service_impl;

pub use auth_service::{AuthService, AuthSession};
pub use auth_service_impl::AuthServiceImpl;
pub use bookmark_service::BookmarkService;
pub use bookmark_service_impl::BookmarkServiceImpl;
