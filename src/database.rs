//! Database module for persistent storage
//! Uses SQLite via sqlx for storing tags and the video library

mod models;
mod ops;
mod repository;
mod schema;

pub use models::*;
pub use repository::Database;
