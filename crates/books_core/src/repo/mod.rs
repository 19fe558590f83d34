//! Repository layer for book persistence.
//!
//! # Responsibility
//! - Define the data access contract for books.
//! - Keep SQL details out of the store facade.
//!
//! # Invariants
//! - Missing ids surface as `RepoError::NotFound`, never as an empty success.

pub mod book_repo;
