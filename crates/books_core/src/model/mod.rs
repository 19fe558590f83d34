//! Domain model for catalogued books.
//!
//! # Responsibility
//! - Define the value objects handed out by the persistence layer.
//!
//! # Invariants
//! - Every book is identified by a caller-supplied `BookId`.
//! - Values are materialized fresh on each read and never cached.

pub mod book;
