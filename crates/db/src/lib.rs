//! `db` crate — pure persistence layer for the lightbnb schema.
//!
//! Provides a connection pool, typed row structs, the listing search query
//! builder, and repository functions for every table in the schema.
//! No business logic lives here.

pub mod error;
pub mod models;
pub mod pool;
pub mod repository;
pub mod search;

pub use error::DbError;
pub use pool::DbPool;
pub use search::{FilterOptions, DEFAULT_RESULT_LIMIT};

#[cfg(test)]
mod search_tests;
