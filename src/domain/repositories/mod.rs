pub mod bookmark_repository;
pub mod user_repository;
