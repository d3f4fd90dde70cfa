pub mod metadata;
pub mod text;
