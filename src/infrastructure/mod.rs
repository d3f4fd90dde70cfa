pub mod di;
pub mod http;
pub mod reader;
pub mod repositories;
