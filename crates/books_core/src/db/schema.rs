//! Schema bootstrap for the `books` table.

use crate::db::DbResult;
use rusqlite::Connection;

/// Name of the only table managed by core.
pub const BOOKS_TABLE: &str = "books";

const BOOKS_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY,
    title TEXT,
    author TEXT
);";

/// Creates the `books` table when it is missing.
///
/// Safe to run against a database that already holds rows. The statement runs
/// in autocommit mode, so the table is durable once this returns.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(BOOKS_TABLE_SQL)?;
    Ok(())
}
