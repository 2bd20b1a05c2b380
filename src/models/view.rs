//! Render contexts handed to the template renderer

use serde::Serialize;

use super::book::{Book, DraftBook};

pub const CATALOG_VIEW: &str = "books";
pub const NEW_BOOK_VIEW: &str = "books/new-book";
pub const UPDATE_BOOK_VIEW: &str = "books/update-book";
pub const NOT_FOUND_VIEW: &str = "books/page-not-found";
pub const ERROR_VIEW: &str = "error";

/// One page of the catalog or of a search
#[derive(Debug, Clone, Serialize)]
pub struct CatalogPage {
    pub title: &'static str,
    pub books: Vec<Book>,
    pub pages: u64,
    #[serde(rename = "activePage")]
    pub active_page: u64,
    #[serde(rename = "paginationURL")]
    pub pagination_url: String,
    /// Search term, absent for the plain catalog
    pub query: Option<String>,
}

/// New or update book form
#[derive(Debug, Clone, Serialize)]
pub struct BookForm {
    #[serde(skip)]
    pub view: &'static str,
    pub title: &'static str,
    pub book: DraftBook,
    pub errors: Vec<String>,
}

impl BookForm {
    pub fn new_book(book: DraftBook, errors: Vec<String>) -> Self {
        Self {
            view: NEW_BOOK_VIEW,
            title: "New Book",
            book,
            errors,
        }
    }

    pub fn update_book(book: DraftBook, errors: Vec<String>) -> Self {
        Self {
            view: UPDATE_BOOK_VIEW,
            title: "Update Book",
            book,
            errors,
        }
    }
}

/// Result of a write: either go elsewhere or show the form again
#[derive(Debug, Clone)]
pub enum FormOutcome {
    Redirect(String),
    Redisplay(BookForm),
}

/// Document passed to the renderer: template name plus its context
#[derive(Debug, Serialize)]
pub struct Rendered<T: Serialize> {
    pub view: &'static str,
    pub context: T,
}
