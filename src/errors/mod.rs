//! Error handling utilities for the whispers application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::path::PathBuf;
use thiserror::Error;

/// Represents specific error cases that can occur during archive operations.
///
/// # Examples
///
/// ```
/// use whispers::errors::DatabaseError;
///
/// let error = DatabaseError::Corrupt("entry 7 has an unreadable date".to_string());
/// assert!(format!("{}", error).contains("entry 7"));
/// ```
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// SQLite database error.
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool error.
    #[error("Failed to get connection from pool: {0}")]
    Pool(#[from] r2d2::Error),

    /// A stored row could not be decoded.
    #[error("Archive contains an unreadable record: {0}")]
    Corrupt(String),
}

/// Represents all possible errors that can occur in the whispers application.
///
/// Recoverable variants (`Validation`, `InvalidMenuChoice`) are reported to the
/// user by the session controller, which then carries on. `StorageUnavailable`
/// is fatal and ends the program.
///
/// # Examples
///
/// ```
/// use whispers::errors::AppError;
///
/// let error = AppError::InvalidMenuChoice("7".to_string());
/// assert_eq!(format!("{}", error), "Invalid menu choice: '7'");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// The archive file could not be created or opened.
    #[error("Archive unavailable at {path}: {source}. Check that the directory exists and is writable.")]
    StorageUnavailable {
        /// Path of the archive file
        path: PathBuf,
        /// The underlying database error
        #[source]
        source: DatabaseError,
    },

    /// User input that cannot be stored, such as empty entry content.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Menu input other than one of the numbered options.
    #[error("Invalid menu choice: '{0}'")]
    InvalidMenuChoice(String),

    /// Errors related to configuration validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from the terminal.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors from archive operations after it has been opened.
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

impl AppError {
    /// Returns `true` for errors the session can report and continue from.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::InvalidMenuChoice(_) | AppError::Database(_)
        )
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        AppError::Database(DatabaseError::Sqlite(err))
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Database(DatabaseError::Pool(err))
    }
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use whispers::errors::{AppResult, AppError};
///
/// fn might_fail(content: &str) -> AppResult<&str> {
///     if content.is_empty() {
///         return Err(AppError::Validation("Entry content cannot be empty".to_string()));
///     }
///     Ok(content)
/// }
///
/// assert!(might_fail("").is_err());
/// ```
pub type AppResult<T> = Result<T, AppError>;
