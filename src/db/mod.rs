//! The journal archive: a SQLite file holding every entry.
//!
//! `ArchiveStore` owns a small r2d2 pool. Every operation checks out a
//! connection for its own duration only; the guard returns it to the pool on
//! every exit path.
//!
//! # Module Structure
//!
//! - `schema`: Table definitions and schema initialization
//! - `entries`: Entry insert and query operations
//!
//! # Example
//!
//! ```no_run
//! use whispers::db::ArchiveStore;
//! use std::path::Path;
//!
//! let archive = ArchiveStore::open(Path::new("whispers.db"))?;
//! archive.initialize()?;
//! let entry = archive.append("Hello world")?;
//! assert_eq!(archive.fetch_matching("world")?, vec![entry]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod entries;
pub mod schema;

pub use entries::Entry;

use crate::constants::ARCHIVE_POOL_SIZE;
use crate::errors::{AppError, AppResult, DatabaseError};
use chrono::{Local, NaiveDateTime};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Type alias for a pooled SQLite connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// How long to wait for a pooled connection or a locked file.
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to the durable entry collection.
pub struct ArchiveStore {
    pool: Pool<SqliteConnectionManager>,
    path: Option<PathBuf>,
}

impl std::fmt::Debug for ArchiveStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArchiveStore")
            .field("in_memory", &self.path.is_none())
            .field("connections", &self.pool.state().connections)
            .finish()
    }
}

impl ArchiveStore {
    /// Opens or creates the archive file at `path`.
    ///
    /// The file is opened and checked once before the pool is built, so a path that cannot
    /// be opened is reported immediately.
    ///
    /// # Errors
    ///
    /// Returns `AppError::StorageUnavailable` if:
    /// - The file cannot be created or opened
    /// - The file exists but is not a SQLite database
    /// - The connection pool cannot be initialized
    pub fn open(path: &Path) -> AppResult<Self> {
        debug!("Opening archive at: {:?}", path);

        let unavailable = |source: DatabaseError| AppError::StorageUnavailable {
            path: path.to_path_buf(),
            source,
        };

        check_readable(path).map_err(unavailable)?;

        let manager = SqliteConnectionManager::file(path);
        let pool = Pool::builder()
            .max_size(ARCHIVE_POOL_SIZE)
            .connection_timeout(CONNECTION_TIMEOUT)
            .connection_customizer(Box::new(ArchivePragmas))
            .build(manager)
            .map_err(|e| unavailable(DatabaseError::Pool(e)))?;

        info!("Archive opened successfully");
        Ok(ArchiveStore {
            pool,
            path: Some(path.to_path_buf()),
        })
    }

    /// Opens a private in-memory archive.
    ///
    /// The pool holds exactly one connection that never expires, since every
    /// in-memory connection is a separate database.
    ///
    /// # Errors
    ///
    /// Returns `AppError::StorageUnavailable` if the pool cannot be built.
    pub fn open_in_memory() -> AppResult<Self> {
        let manager = SqliteConnectionManager::memory();
        let pool = Pool::builder()
            .max_size(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connection_timeout(CONNECTION_TIMEOUT)
            .connection_customizer(Box::new(ArchivePragmas))
            .build(manager)
            .map_err(|e| AppError::StorageUnavailable {
                path: PathBuf::from(":memory:"),
                source: DatabaseError::Pool(e),
            })?;

        Ok(ArchiveStore { pool, path: None })
    }

    /// The archive file path, or `None` for an in-memory archive.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Gets a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns an error if no connection becomes available in time.
    pub fn get_conn(&self) -> AppResult<PooledConnection> {
        self.pool
            .get()
            .map_err(|e| DatabaseError::Pool(e).into())
    }

    /// Ensures the entry table exists.
    ///
    /// This is idempotent and safe to call on every startup.
    ///
    /// # Errors
    ///
    /// Returns an error if schema creation fails.
    pub fn initialize(&self) -> AppResult<()> {
        let conn = self.get_conn()?;
        schema::create_tables(&conn)?;
        info!("Archive schema initialized");
        Ok(())
    }

    /// Appends an entry stamped with the current local time.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if `content` is empty,
    /// or a database error if the insert fails.
    pub fn append(&self, content: &str) -> AppResult<Entry> {
        self.append_at(content, Local::now().naive_local())
    }

    /// Appends an entry with an explicit timestamp.
    ///
    /// # Errors
    ///
    /// Same as [`ArchiveStore::append`].
    pub fn append_at(&self, content: &str, timestamp: NaiveDateTime) -> AppResult<Entry> {
        if content.is_empty() {
            return Err(AppError::Validation(
                "Entry content cannot be empty".to_string(),
            ));
        }

        let conn = self.get_conn()?;
        let entry = entries::insert_entry(&conn, timestamp, content)?;
        info!("Appended entry {}", entry.id);
        Ok(entry)
    }

    /// Returns all entries in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn fetch_all(&self) -> AppResult<Vec<Entry>> {
        let conn = self.get_conn()?;
        entries::list_entries(&conn)
    }

    /// Returns entries whose content contains `keyword` (case-sensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn fetch_matching(&self, keyword: &str) -> AppResult<Vec<Entry>> {
        let conn = self.get_conn()?;
        entries::find_entries_containing(&conn, keyword)
    }

    /// Number of stored entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count(&self) -> AppResult<usize> {
        let conn = self.get_conn()?;
        entries::count_entries(&conn)
    }
}

/// Opens the file directly and reads the schema header, which fails for
/// missing directories and for files that are not SQLite databases.
fn check_readable(path: &Path) -> Result<(), DatabaseError> {
    let conn = Connection::open(path)?;
    conn.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| {
        row.get::<_, i64>(0)
    })?;
    Ok(())
}

/// Connection customizer applied to every pooled connection.
#[derive(Debug)]
struct ArchivePragmas;

impl r2d2::CustomizeConnection<Connection, rusqlite::Error> for ArchivePragmas {
    fn on_acquire(&self, conn: &mut Connection) -> Result<(), rusqlite::Error> {
        conn.busy_timeout(CONNECTION_TIMEOUT)?;
        // FULL: an append is on disk before it is reported as saved.
        conn.pragma_update(None, "synchronous", 2)?;
        Ok(())
    }

    fn on_release(&self, _conn: Connection) {}
}
