//! Business logic services

pub mod books;
pub mod catalog;
pub mod pagination;
pub mod query;

use std::sync::Arc;

use crate::repository::BookStore;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub books: books::BooksService,
    store: Arc<dyn BookStore>,
}

impl Services {
    /// Create all services over the given record store
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self {
            catalog: catalog::CatalogService::new(store.clone()),
            books: books::BooksService::new(store.clone()),
            store,
        }
    }

    /// Whether the record store answers
    pub async fn store_ready(&self) -> bool {
        match self.store.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Record store not ready: {}", e);
                false
            }
        }
    }
}
