//! Book value object.
//!
//! # Responsibility
//! - Hold identity plus descriptive fields for one catalogued book.
//! - Provide value equality and the `"{title} by {author}"` rendering.
//!
//! # Invariants
//! - `book_id` is the primary key and is never generated by core.
//! - `title` and `author` are stored verbatim; empty values are allowed.

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt::{Display, Formatter};

/// Primary key of a book row. Supplied by the caller, never auto-assigned.
pub type BookId = i64;

/// One catalogued book.
///
/// Two books are equal iff id, title and author all match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
}

impl Book {
    /// Builds a book from positional fields without validation.
    pub fn new(book_id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            book_id,
            title: title.into(),
            author: author.into(),
        }
    }

    /// Compares against a value of unknown type.
    ///
    /// Returns `false` when `other` is not a `Book`.
    pub fn equals_any(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Book>()
            .is_some_and(|book| book == self)
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}
