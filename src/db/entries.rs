//! Entry insert and query operations.
//!
//! These functions work on a borrowed connection; `ArchiveStore` decides how
//! long a connection is held.

use crate::constants::ENTRY_DATE_FORMAT;
use crate::errors::{AppResult, DatabaseError};
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, Row};
use std::fmt;
use tracing::debug;

/// One journal record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: i64,
    pub date: NaiveDateTime,
    pub content: String,
}

impl Entry {
    /// The entry date in its stored text form.
    pub fn date_string(&self) -> String {
        self.date.format(ENTRY_DATE_FORMAT).to_string()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date: {}\n\n{}", self.date_string(), self.content)
    }
}

/// Inserts a new entry and returns it with its assigned id.
///
/// The timestamp is stored at second precision, so the returned entry carries
/// the date exactly as it will be read back later.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_entry(conn: &Connection, date: NaiveDateTime, content: &str) -> AppResult<Entry> {
    let date_str = date.format(ENTRY_DATE_FORMAT).to_string();
    debug!("Inserting entry dated {} ({} bytes)", date_str, content.len());

    conn.execute(
        "INSERT INTO entries (date, content) VALUES (?1, ?2)",
        params![date_str, content],
    )
    .map_err(DatabaseError::Sqlite)?;

    let id = conn.last_insert_rowid();
    debug!("Entry inserted with id {}", id);

    Ok(Entry {
        id,
        date: parse_date(&date_str, id)?,
        content: content.to_string(),
    })
}

/// Returns every entry in insertion order.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row cannot be decoded.
pub fn list_entries(conn: &Connection) -> AppResult<Vec<Entry>> {
    debug!("Listing all entries");

    let mut stmt = conn
        .prepare("SELECT id, date, content FROM entries ORDER BY id ASC")
        .map_err(DatabaseError::Sqlite)?;

    let rows = stmt.query_map([], read_row).map_err(DatabaseError::Sqlite)?;
    collect_entries(rows)
}

/// Returns entries whose content contains `keyword`, in insertion order.
///
/// Matching is a case-sensitive substring test via `instr`, so `%` and `_`
/// are ordinary characters. An empty keyword matches every entry.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row cannot be decoded.
pub fn find_entries_containing(conn: &Connection, keyword: &str) -> AppResult<Vec<Entry>> {
    debug!("Searching entries for a {}-byte keyword", keyword.len());

    let mut stmt = conn
        .prepare(
            r#"
            SELECT id, date, content
            FROM entries
            WHERE instr(content, ?1) > 0
            ORDER BY id ASC
            "#,
        )
        .map_err(DatabaseError::Sqlite)?;

    let rows = stmt
        .query_map(params![keyword], read_row)
        .map_err(DatabaseError::Sqlite)?;
    collect_entries(rows)
}

/// Counts stored entries.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_entries(conn: &Connection) -> AppResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))
        .map_err(DatabaseError::Sqlite)?;
    Ok(count as usize)
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<Entry> {
    let date_str: String = row.get(1)?;
    let date = NaiveDateTime::parse_from_str(&date_str, ENTRY_DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Entry {
        id: row.get(0)?,
        date,
        content: row.get(2)?,
    })
}

fn collect_entries(
    rows: impl Iterator<Item = rusqlite::Result<Entry>>,
) -> AppResult<Vec<Entry>> {
    let mut entries = Vec::new();
    for row in rows {
        let entry = row.map_err(|e| match e {
            rusqlite::Error::FromSqlConversionFailure(col, _, source) => {
                DatabaseError::Corrupt(format!("column {}: {}", col, source))
            }
            other => DatabaseError::Sqlite(other),
        })?;
        entries.push(entry);
    }
    debug!("Fetched {} entries", entries.len());
    Ok(entries)
}

fn parse_date(date_str: &str, id: i64) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(date_str, ENTRY_DATE_FORMAT).map_err(|e| {
        DatabaseError::Corrupt(format!("entry {} date '{}': {}", id, date_str, e)).into()
    })
}
