//! Core persistence for the books catalogue.
//! One entity kind (`Book`) stored in a single SQLite table.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::{Book, BookId};
pub use repo::book_repo::{
    BookRepository, RepoError, RepoResult, SqliteBookRepository, UpsertAction,
};
pub use service::books_db::BooksDb;
