//! Book repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide upsert/get/delete/list over the `books` table.
//! - Materialize rows into fresh `Book` values on every read.
//!
//! # Invariants
//! - Every mutation is committed before the call returns.
//! - `NotFound` renders exactly as `Book with id {id} not found`.
//! - Rows with NULL descriptive fields are rejected instead of masked.

use crate::db::DbError;
use crate::model::book::{Book, BookId};
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};

const BOOK_SELECT_SQL: &str = "SELECT id, title, author FROM books";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for book persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(BookId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "Book with id {id} not found"),
            Self::InvalidData(message) => write!(f, "invalid persisted book data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Which branch an upsert took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertAction {
    Inserted,
    Updated,
}

impl UpsertAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inserted => "insert",
            Self::Updated => "update",
        }
    }
}

/// Repository interface for book operations.
pub trait BookRepository {
    fn upsert_book(&self, book_id: BookId, title: &str, author: &str) -> RepoResult<UpsertAction>;
    fn get_book(&self, book_id: BookId) -> RepoResult<Book>;
    fn delete_book(&self, book_id: BookId) -> RepoResult<()>;
    fn list_books(&self) -> RepoResult<Vec<Book>>;
}

/// SQLite-backed book repository borrowing an open connection.
pub struct SqliteBookRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBookRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl BookRepository for SqliteBookRepository<'_> {
    /// Inserts or updates the row keyed by `book_id`.
    ///
    /// The existence check and the write share one `IMMEDIATE` transaction,
    /// so the write lock is held from the check until commit.
    fn upsert_book(&self, book_id: BookId, title: &str, author: &str) -> RepoResult<UpsertAction> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;

        let exists = tx
            .query_row("SELECT id FROM books WHERE id = ?1;", [book_id], |row| {
                row.get::<_, BookId>(0)
            })
            .optional()?
            .is_some();

        let action = if exists {
            tx.execute(
                "UPDATE books
                 SET
                    title = ?1,
                    author = ?2
                 WHERE id = ?3;",
                params![title, author, book_id],
            )?;
            UpsertAction::Updated
        } else {
            tx.execute(
                "INSERT INTO books (id, title, author) VALUES (?1, ?2, ?3);",
                params![book_id, title, author],
            )?;
            UpsertAction::Inserted
        };

        tx.commit()?;
        Ok(action)
    }

    fn get_book(&self, book_id: BookId) -> RepoResult<Book> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOK_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([book_id])?;
        match rows.next()? {
            Some(row) => parse_book_row(row),
            None => Err(RepoError::NotFound(book_id)),
        }
    }

    fn delete_book(&self, book_id: BookId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM books WHERE id = ?1;", [book_id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(book_id));
        }

        Ok(())
    }

    fn list_books(&self) -> RepoResult<Vec<Book>> {
        let mut stmt = self.conn.prepare(&format!("{BOOK_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut books = Vec::new();

        while let Some(row) = rows.next()? {
            books.push(parse_book_row(row)?);
        }

        Ok(books)
    }
}

fn parse_book_row(row: &Row<'_>) -> RepoResult<Book> {
    let book_id: BookId = row.get("id")?;
    let title = row.get::<_, Option<String>>("title")?.ok_or_else(|| {
        RepoError::InvalidData(format!("NULL title for id {book_id} in books.title"))
    })?;
    let author = row.get::<_, Option<String>>("author")?.ok_or_else(|| {
        RepoError::InvalidData(format!("NULL author for id {book_id} in books.author"))
    })?;

    Ok(Book {
        book_id,
        title,
        author,
    })
}
