pub mod bookmark;
pub mod error;
pub mod repositories;
pub mod services;
pub mod user;
