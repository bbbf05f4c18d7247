/// Database module for medipal-db
///
/// Handles all database operations using MySQL and sqlx.
/// Implements connection pooling for performance.

pub mod connection;
pub mod models;
pub mod queries;

pub use connection::Database;
pub use models::*;
