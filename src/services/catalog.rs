//! Catalog listing and search service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::CatalogPage,
    repository::BookStore,
};

use super::{
    pagination::{compute_offset, compute_total_pages, is_page_out_of_range, parse_page_token, PAGE_SIZE},
    query::{build_search_predicate, encode_path, normalize_search_term, BookFilter},
};

/// Where the bare collection route sends the browser
pub const CATALOG_FIRST_PAGE: &str = "/books/catalog/1";
pub const CATALOG_PAGINATION_URL: &str = "/books/catalog/";

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn BookStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    /// One page of the full catalog
    pub async fn list_catalog(&self, page_token: &str) -> AppResult<CatalogPage> {
        self.page(page_token, BookFilter::All, CATALOG_PAGINATION_URL.to_string(), None)
            .await
    }

    /// One page of the books matching `term`
    pub async fn search_catalog(&self, term: &str, page_token: &str) -> AppResult<CatalogPage> {
        let predicate = build_search_predicate(term);
        let pagination_url = encode_path(&["books", "search", predicate.term()], true);
        let query = Some(predicate.term().to_string());
        self.page(page_token, BookFilter::Matching(predicate), pagination_url, query)
            .await
    }

    async fn page(
        &self,
        page_token: &str,
        filter: BookFilter,
        pagination_url: String,
        query: Option<String>,
    ) -> AppResult<CatalogPage> {
        let page = parse_page_token(page_token).inspect_err(|_| {
            tracing::warn!("Rejected page token {:?}", page_token);
        })?;

        // Count and rows are two reads; a concurrent write between them can
        // make the range check disagree with the rows returned.
        let (books, count) = self
            .store
            .find_and_count(&filter, compute_offset(page, PAGE_SIZE), PAGE_SIZE)
            .await?;

        let pages = compute_total_pages(count, PAGE_SIZE);
        if is_page_out_of_range(page, pages) {
            tracing::warn!("Page {} requested, only {} available", page, pages);
            return Err(AppError::PageOutOfRange { page, pages });
        }

        tracing::debug!("Catalog page {}/{}: {} of {} books", page, pages, books.len(), count);

        Ok(CatalogPage {
            title: "Books",
            books,
            pages,
            active_page: page,
            pagination_url,
            query,
        })
    }
}

/// Target of the bare collection route
pub fn redirect_to_catalog() -> String {
    CATALOG_FIRST_PAGE.to_string()
}

/// Canonical first-page search path for a submitted term
pub fn redirect_to_search(raw_term: Option<&str>) -> String {
    let term = normalize_search_term(raw_term);
    encode_path(&["books", "search", &term, "1"], false)
}
