//! HTTP handlers and routing for Bookshelf

pub mod books;
pub mod health;

use axum::{
    http::Uri,
    response::Redirect,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{error::AppError, services::books::CATALOG_ROOT, AppState};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let books = Router::new()
        .route("/books", get(books::index))
        .route("/books/", get(books::index))
        .route("/books/catalog/:page", get(books::list_catalog))
        .route("/books/search", get(books::search))
        .route("/books/search/:query/:page", get(books::search_catalog))
        .route("/books/new", get(books::new_form).post(books::create_book))
        .route("/books/:id", get(books::edit_form).post(books::update_book))
        .route("/books/:id/delete", post(books::delete_book));

    Router::new()
        .route("/", get(|| async { Redirect::to(CATALOG_ROOT) }))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .merge(books)
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
