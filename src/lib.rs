/*!
# Whispers

Whispers is a small personal archive for the terminal. It lets you append
timestamped journal entries to a local SQLite file, read one back at random,
and search entries by keyword.

## Core Features

- Write a new entry (confirmed with a short quote)
- Read a random entry from the archive
- Search entries by case-sensitive keyword

## Architecture

- `db`: The archive store (SQLite behind an r2d2 pool)
- `session`: The interactive menu loop
- `random`: Pluggable randomness for quote and entry selection
- `config`: Archive path and quote list
- `errors`: Error handling infrastructure
- `constants`: Fixed strings and formats

## Usage Example

```rust,no_run
use whispers::{ArchiveStore, Config, SessionController, ThreadRandom};
use std::io;

fn main() -> whispers::AppResult<()> {
    let config = Config::default();
    config.validate()?;

    let archive = ArchiveStore::open(&config.archive_path)?;
    let mut session = SessionController::new(
        archive,
        config.quotes.clone(),
        io::stdin().lock(),
        io::stdout(),
        ThreadRandom,
    );
    session.run()
}
```
*/

/// Configuration for the archive location and quotes
pub mod config;
/// Constants used throughout the application
pub mod constants;
/// The archive store
pub mod db;
/// Error types and utilities for error handling
pub mod errors;
/// Random selection sources
pub mod random;
/// The interactive menu loop
pub mod session;

// Re-export important types for convenience
pub use config::Config;
pub use db::{ArchiveStore, Entry};
pub use errors::{AppError, AppResult};
pub use random::{RandomSource, SequenceRandom, ThreadRandom};
pub use session::{MenuChoice, SessionController, SessionState};
