/// Error types for medipal-db
///
/// This module defines all possible errors that can occur in the access layer.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for medipal-db operations
#[derive(Error, Debug)]
pub enum MedipalError {
    /// Database-related errors (connect, prepare, execute)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for medipal-db operations
pub type Result<T> = std::result::Result<T, MedipalError>;

/// Convert MedipalError to a user-friendly error message
impl MedipalError {
    pub fn user_message(&self) -> String {
        match self {
            MedipalError::Database(e) => {
                format!("Database operation failed. Details: {}", e)
            }
            MedipalError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
        }
    }
}
