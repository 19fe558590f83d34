//! Books store owning a single SQLite connection.
//!
//! # Responsibility
//! - Open the backing database and ensure the schema on construction.
//! - Route every operation through the repository over one connection.
//!
//! # Invariants
//! - One connection per store; stores never share state.
//! - Calls are blocking and must not overlap (single-writer use).
//! - The caller releases the connection with `close()` (or by dropping).

use crate::db::{open_db, open_db_in_memory, DbError};
use crate::model::book::{Book, BookId};
use crate::repo::book_repo::{BookRepository, RepoError, RepoResult, SqliteBookRepository};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;

/// Persistent store for `Book` records.
pub struct BooksDb {
    conn: Connection,
}

impl BooksDb {
    /// Opens the database at `path`, creating the file and `books` table if
    /// they are missing. Existing rows are preserved.
    pub fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        let conn = open_db(path)?;
        Ok(Self { conn })
    }

    /// Opens a store over a private in-memory database.
    pub fn open_in_memory() -> RepoResult<Self> {
        let conn = open_db_in_memory()?;
        Ok(Self { conn })
    }

    /// Inserts the book, or overwrites title and author when `book_id` exists.
    ///
    /// Any strings are accepted verbatim, including empty ones.
    pub fn upsert(&self, book_id: BookId, title: &str, author: &str) -> RepoResult<()> {
        match self.repo().upsert_book(book_id, title, author) {
            Ok(action) => {
                info!(
                    "event=book_upsert module=store status=ok book_id={book_id} action={}",
                    action.as_str()
                );
                Ok(())
            }
            Err(err) => {
                error!("event=book_upsert module=store status=error book_id={book_id} error={err}");
                Err(err)
            }
        }
    }

    /// Loads one book by id.
    ///
    /// # Errors
    /// - `RepoError::NotFound` when no row has this id.
    pub fn get_by_id(&self, book_id: BookId) -> RepoResult<Book> {
        let result = self.repo().get_book(book_id);
        log_outcome("book_get", book_id, &result);
        result
    }

    /// Deletes one book by id.
    ///
    /// # Errors
    /// - `RepoError::NotFound` when the delete affected no rows.
    pub fn delete(&self, book_id: BookId) -> RepoResult<()> {
        let result = self.repo().delete_book(book_id);
        log_outcome("book_delete", book_id, &result);
        result
    }

    /// Returns every stored book in the engine's default row order.
    pub fn list_all(&self) -> RepoResult<Vec<Book>> {
        let books = self.repo().list_books().map_err(|err| {
            error!("event=book_list module=store status=error error={err}");
            err
        })?;
        info!(
            "event=book_list module=store status=ok count={}",
            books.len()
        );
        Ok(books)
    }

    /// Closes the underlying connection, reporting any engine error.
    pub fn close(self) -> RepoResult<()> {
        self.conn.close().map_err(|(_, err)| {
            error!("event=db_close module=store status=error error={err}");
            RepoError::Db(DbError::Sqlite(err))
        })?;
        info!("event=db_close module=store status=ok");
        Ok(())
    }

    fn repo(&self) -> SqliteBookRepository<'_> {
        SqliteBookRepository::new(&self.conn)
    }
}

fn log_outcome<T>(event: &str, book_id: BookId, result: &RepoResult<T>) {
    match result {
        Ok(_) => info!("event={event} module=store status=ok book_id={book_id}"),
        Err(RepoError::NotFound(_)) => {
            info!("event={event} module=store status=not_found book_id={book_id}")
        }
        Err(err) => error!("event={event} module=store status=error book_id={book_id} error={err}"),
    }
}
