//! Schema and connection setup.
//!
//! The on-disk layout is a single table:
//!
//! ```sql
//! CREATE TABLE dict (key TEXT PRIMARY KEY, value BLOB)
//! ```
//!
//! Nothing else is written to the file. In particular the journal mode is
//! left at SQLite's default so other tools can keep opening the store.

use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::time::Duration;

/// Name of the key/value table.
pub const TABLE_NAME: &str = "dict";

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS dict (key TEXT PRIMARY KEY, value BLOB)
"#;

/// Longest busy timeout SQLite accepts (`i32::MAX` milliseconds, about 24.8 days).
pub const MAX_BUSY_TIMEOUT: Duration = Duration::from_millis(i32::MAX as u64);

/// Apply per-connection settings.
///
/// `timeout` bounds how long SQLite retries a locked database before
/// reporting `SQLITE_BUSY`. Longer timeouts are capped at [`MAX_BUSY_TIMEOUT`].
pub fn apply_pragmas(conn: &Connection, timeout: Duration) -> rusqlite::Result<()> {
    conn.busy_timeout(timeout.min(MAX_BUSY_TIMEOUT))
}

/// Open an existing store without write access.
///
/// Fails rather than creating the file when it does not exist.
pub fn open_read_only(path: &Path, timeout: Duration) -> rusqlite::Result<Connection> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    apply_pragmas(&conn, timeout)?;
    Ok(conn)
}

/// Open a store for writing, creating the file if needed.
pub fn open_read_write(path: &Path, timeout: Duration) -> rusqlite::Result<Connection> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    apply_pragmas(&conn, timeout)?;
    Ok(conn)
}

/// Create the `dict` table if it does not exist.
pub fn initialize_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(CREATE_TABLE)
}

/// Check whether the `dict` table has been created.
pub fn table_exists(conn: &Connection) -> rusqlite::Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [TABLE_NAME],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_schema_creation() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(!table_exists(&conn).unwrap());

        initialize_schema(&conn).unwrap();
        assert!(table_exists(&conn).unwrap());

        let columns: Vec<(String, String, i64)> = conn
            .prepare("SELECT name, type, pk FROM pragma_table_info('dict') ORDER BY cid")
            .unwrap()
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(
            columns,
            vec![
                ("key".to_string(), "TEXT".to_string(), 1),
                ("value".to_string(), "BLOB".to_string(), 0),
            ]
        );
    }

    #[test]
    fn test_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();
        initialize_schema(&conn).unwrap();
        assert!(table_exists(&conn).unwrap());
    }

    #[test]
    fn test_oversized_timeout_is_capped() {
        let conn = Connection::open_in_memory().unwrap();
        apply_pragmas(&conn, Duration::from_secs(30 * 24 * 3600)).unwrap();
        apply_pragmas(&conn, Duration::MAX).unwrap();

        let busy_ms: i64 = conn
            .query_row("PRAGMA busy_timeout", [], |row| row.get(0))
            .unwrap();
        assert_eq!(busy_ms, i64::from(i32::MAX));
    }

    #[test]
    fn test_read_only_open_does_not_create() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("absent.db");

        assert!(open_read_only(&db_path, Duration::from_millis(10)).is_err());
        assert!(!db_path.exists());
    }

    #[test]
    fn test_read_write_open_creates() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("fresh.db");

        let conn = open_read_write(&db_path, Duration::from_millis(10)).unwrap();
        initialize_schema(&conn).unwrap();
        drop(conn);
        assert!(db_path.exists());
    }
}
