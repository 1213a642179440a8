//! Configuration for the whispers application.
//!
//! Whispers reads no settings from the environment: the archive lives in
//! `whispers.db` in the working directory and the quote list is fixed. The
//! `Config` struct still exists so that both can be supplied explicitly, which
//! is how tests point the application at a temporary archive.

use crate::constants::{DEFAULT_ARCHIVE_FILE, DEFAULT_QUOTES};
use crate::errors::{AppError, AppResult};
use std::fmt;
use std::path::{Path, PathBuf};

/// Configuration for the whispers application.
///
/// # Examples
///
/// ```
/// use whispers::Config;
///
/// let config = Config::default();
/// assert_eq!(config.quotes.len(), 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, PartialEq)]
pub struct Config {
    /// Path of the SQLite archive file.
    pub archive_path: PathBuf,

    /// Quotes shown after an entry is saved. Never empty once validated.
    pub quotes: Vec<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("archive_path", &"[REDACTED_PATH]")
            .field("quotes", &self.quotes.len())
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            archive_path: PathBuf::from(DEFAULT_ARCHIVE_FILE),
            quotes: DEFAULT_QUOTES.iter().map(|q| q.to_string()).collect(),
        }
    }
}

impl Config {
    /// Returns the default configuration with a different archive file.
    ///
    /// ```
    /// use whispers::Config;
    /// use std::path::Path;
    ///
    /// let config = Config::with_archive_path("/tmp/journal.db");
    /// assert_eq!(config.archive_path, Path::new("/tmp/journal.db"));
    /// ```
    pub fn with_archive_path(path: impl AsRef<Path>) -> Self {
        Config {
            archive_path: path.as_ref().to_path_buf(),
            ..Config::default()
        }
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The archive path is empty
    /// - The quote list is empty
    /// - Any quote is blank
    pub fn validate(&self) -> AppResult<()> {
        if self.archive_path.as_os_str().is_empty() {
            return Err(AppError::Config("Archive path is empty".to_string()));
        }

        if self.quotes.is_empty() {
            return Err(AppError::Config("Quote list is empty".to_string()));
        }

        if let Some(idx) = self.quotes.iter().position(|q| q.trim().is_empty()) {
            return Err(AppError::Config(format!("Quote {} is blank", idx + 1)));
        }

        Ok(())
    }
}
