//! Constants used throughout the application.
//!
//! This module contains all constants used in the Whispers application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "whispers";
/// Banner printed when an interactive session starts.
pub const APP_BANNER: &str = "Whispers - A Personal Archive";

// Storage
/// Default archive file, relative to the working directory.
pub const DEFAULT_ARCHIVE_FILE: &str = "whispers.db";
/// Maximum number of pooled connections to the archive file.
pub const ARCHIVE_POOL_SIZE: u32 = 4;
/// Timestamp format for entry dates. Lexicographic order matches chronological order.
pub const ENTRY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Quotes
/// Quotes shown after an entry is saved.
pub const DEFAULT_QUOTES: [&str; 5] = [
    "Every memory preserved is a life remembered.",
    "The act of recording is the act of honoring.",
    "In small moments, entire worlds are hidden.",
    "Words hold the weight of time.",
    "To remember is to live twice.",
];

// Menu & Prompts
/// Menu lines printed at every `MenuWait`.
pub const MENU_LINES: [&str; 5] = [
    "Menu:",
    "1. Write a new entry",
    "2. Read a random entry",
    "3. Search entries",
    "4. Exit",
];
/// Prompt for the menu choice.
pub const MENU_PROMPT: &str = "Choose (1-4): ";
/// Header for the writing screen.
pub const WRITE_HEADER: &str = "--- New Entry ---";
/// Prompt for entry content.
pub const WRITE_PROMPT: &str = "Enter your journal entry:";
/// Confirmation after a successful append.
pub const WRITE_CONFIRMATION: &str = "Entry saved successfully.";
/// Header for a randomly selected entry.
pub const RANDOM_HEADER: &str = "--- Random Entry ---";
/// Shown when the archive holds no entries.
pub const NO_ENTRIES_MESSAGE: &str = "No entries found. Start writing to build your archive.";
/// Prompt for a search keyword.
pub const SEARCH_PROMPT: &str = "Enter a keyword to search for: ";
/// Shown when a search has no results.
pub const NO_MATCHES_MESSAGE: &str = "No matching entries found.";
/// Separator printed after each search result.
pub const RESULT_SEPARATOR: &str = "---";
/// Shown for anything other than 1-4 at the menu.
pub const INVALID_CHOICE_MESSAGE: &str = "Invalid choice. Please select 1-4.";
/// Farewell printed on exit.
pub const FAREWELL_MESSAGE: &str = "Exiting Whispers. Your words are preserved.";

// Logging Configuration
/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "whispers";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
