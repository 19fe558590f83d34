//! Store facade consumed by library callers.
//!
//! # Responsibility
//! - Own the SQLite connection for its whole lifetime.
//! - Expose upsert/get/delete/list without leaking SQL details.

pub mod books_db;
