//! Record store layer for book persistence

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::{
    models::{Book, BookFields, BookId},
    services::query::BookFilter,
};

pub use memory::InMemoryBookStore;
pub use postgres::PgBookStore;

/// Failures a record store can report
#[derive(Error, Debug)]
pub enum StoreError {
    /// Field-level violations, in field order
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store error: {0}")]
    Other(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence capability over book records.
///
/// Listings are ordered by title ascending, ties broken by id, for both the
/// count and the rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// One window of matching rows plus the total number of matches
    async fn find_and_count(
        &self,
        filter: &BookFilter,
        offset: u64,
        limit: u64,
    ) -> StoreResult<(Vec<Book>, u64)>;

    /// Fetch by id; a missing record is `Ok(None)`
    async fn get(&self, id: BookId) -> StoreResult<Option<Book>>;

    async fn create(&self, fields: &BookFields) -> StoreResult<Book>;

    /// Replace the editable fields; `NotFound` if the record has vanished
    async fn update(&self, id: BookId, fields: &BookFields) -> StoreResult<Book>;

    /// `NotFound` if the record has vanished
    async fn delete(&self, id: BookId) -> StoreResult<()>;

    /// Check the store is reachable
    async fn ping(&self) -> StoreResult<()>;
}
