//! In-process book store

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{BookStore, StoreError, StoreResult};
use crate::{
    models::{Book, BookFields, BookId},
    services::query::BookFilter,
};

#[derive(Default)]
struct Shelf {
    books: BTreeMap<BookId, Book>,
    last_id: BookId,
}

/// Book store held in memory; ids are assigned sequentially from 1.
#[derive(Default)]
pub struct InMemoryBookStore {
    shelf: RwLock<Shelf>,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.shelf.read().await.books.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl BookStore for InMemoryBookStore {
    async fn find_and_count(
        &self,
        filter: &BookFilter,
        offset: u64,
        limit: u64,
    ) -> StoreResult<(Vec<Book>, u64)> {
        let shelf = self.shelf.read().await;
        let mut matching: Vec<&Book> = shelf.books.values().filter(|b| filter.matches(b)).collect();
        // BTreeMap yields id order, so the stable sort breaks title ties by id
        matching.sort_by(|a, b| a.title.cmp(&b.title));

        let total = matching.len() as u64;
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        let rows = matching.into_iter().skip(offset).take(limit).cloned().collect();
        Ok((rows, total))
    }

    async fn get(&self, id: BookId) -> StoreResult<Option<Book>> {
        Ok(self.shelf.read().await.books.get(&id).cloned())
    }

    async fn create(&self, fields: &BookFields) -> StoreResult<Book> {
        fields.check().map_err(StoreError::Validation)?;

        let mut shelf = self.shelf.write().await;
        let id = shelf
            .last_id
            .checked_add(1)
            .ok_or_else(|| StoreError::Other("Book id space exhausted".to_string()))?;
        let now = Utc::now();
        let book = Book {
            id,
            title: fields.title.clone(),
            author: fields.author.clone(),
            genre: fields.genre.clone(),
            year: fields.year.clone(),
            created_at: Some(now),
            updated_at: Some(now),
        };
        shelf.last_id = id;
        shelf.books.insert(id, book.clone());
        Ok(book)
    }

    async fn update(&self, id: BookId, fields: &BookFields) -> StoreResult<Book> {
        fields.check().map_err(StoreError::Validation)?;

        let mut shelf = self.shelf.write().await;
        let book = shelf.books.get_mut(&id).ok_or(StoreError::NotFound)?;
        book.title = fields.title.clone();
        book.author = fields.author.clone();
        book.genre = fields.genre.clone();
        book.year = fields.year.clone();
        book.updated_at = Some(Utc::now());
        Ok(book.clone())
    }

    async fn delete(&self, id: BookId) -> StoreResult<()> {
        self.shelf
            .write()
            .await
            .books
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
