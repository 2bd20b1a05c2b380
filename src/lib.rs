//! Bookshelf catalog manager
//!
//! Server-rendered book inventory: paginated catalog, substring search, and
//! create/update/delete forms that keep user input across a failed submit.
//! Templates live outside this crate; handlers hand them a view name plus
//! its render context.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}
