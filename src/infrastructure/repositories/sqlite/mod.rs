pub mod bookmark_repository;
pub mod connection;
pub mod error;
pub mod migration;
pub mod model;
pub mod schema;
pub mod user_repository;
