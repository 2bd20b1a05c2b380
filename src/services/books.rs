//! Book create/update/delete service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::parse_book_id, Book, BookFields, BookForm, BookId, DraftBook, FormOutcome,
    },
    repository::{BookStore, StoreError},
};

/// Where successful writes send the browser
pub const CATALOG_ROOT: &str = "/books";

#[derive(Clone)]
pub struct BooksService {
    store: Arc<dyn BookStore>,
}

impl BooksService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    /// Blank new-book form
    pub fn new_form(&self) -> BookForm {
        BookForm::new_book(DraftBook::default(), Vec::new())
    }

    pub async fn create(&self, fields: BookFields) -> AppResult<FormOutcome> {
        match self.store.create(&fields).await {
            Ok(book) => {
                tracing::info!("Created book id={} title={:?}", book.id, book.title);
                Ok(FormOutcome::Redirect(CATALOG_ROOT.to_string()))
            }
            Err(StoreError::Validation(errors)) => {
                tracing::warn!("New book rejected: {}", errors.join(", "));
                Ok(FormOutcome::Redisplay(BookForm::new_book(
                    DraftBook::from(fields),
                    errors,
                )))
            }
            Err(other) => Err(other.into()),
        }
    }

    /// Update form for an existing book
    pub async fn edit_form(&self, raw_id: &str) -> AppResult<BookForm> {
        let book = self.existing(raw_id).await?;
        Ok(BookForm::update_book(DraftBook::from(book), Vec::new()))
    }

    pub async fn update(&self, raw_id: &str, fields: BookFields) -> AppResult<FormOutcome> {
        let id = self.existing(raw_id).await?.id;
        match self.store.update(id, &fields).await {
            Ok(book) => {
                tracing::info!("Updated book id={}", book.id);
                Ok(FormOutcome::Redirect(CATALOG_ROOT.to_string()))
            }
            Err(StoreError::Validation(errors)) => {
                tracing::warn!("Update of book id={} rejected: {}", id, errors.join(", "));
                Ok(FormOutcome::Redisplay(BookForm::update_book(
                    DraftBook::for_record(id, fields),
                    errors,
                )))
            }
            Err(StoreError::NotFound) => Err(not_found(id)),
            Err(other) => Err(other.into()),
        }
    }

    /// Remove a book. Confirmation is the form's job.
    pub async fn delete(&self, raw_id: &str) -> AppResult<String> {
        let id = self.existing(raw_id).await?.id;
        match self.store.delete(id).await {
            Ok(()) => {
                tracing::info!("Deleted book id={}", id);
                Ok(CATALOG_ROOT.to_string())
            }
            Err(StoreError::NotFound) => Err(not_found(id)),
            Err(other) => Err(other.into()),
        }
    }

    async fn existing(&self, raw_id: &str) -> AppResult<Book> {
        let id = parse_book_id(raw_id).ok_or_else(|| {
            tracing::warn!("No book can have id {:?}", raw_id);
            AppError::RecordNotFound(raw_id.to_string())
        })?;
        self.store.get(id).await?.ok_or_else(|| {
            tracing::warn!("Book id={} does not exist", id);
            not_found(id)
        })
    }
}

fn not_found(id: BookId) -> AppError {
    AppError::RecordNotFound(id.to_string())
}
