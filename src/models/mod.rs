//! Data models for Bookshelf

pub mod book;
pub mod view;

// Re-export commonly used types
pub use book::{Book, BookFields, BookId, DraftBook};
pub use view::{BookForm, CatalogPage, FormOutcome, Rendered};
