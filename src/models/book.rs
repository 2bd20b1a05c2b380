//! Book model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationErrors};

/// Store-assigned book identifier
pub type BookId = i32;

/// Persisted book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    /// Publication year, kept as entered
    pub year: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Submitted book form fields (create and update bodies)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct BookFields {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    pub genre: Option<String>,
    pub year: Option<String>,
}

impl BookFields {
    /// Fields in the order their validation messages are reported
    const FIELD_ORDER: [&'static str; 4] = ["title", "author", "genre", "year"];

    /// Validate and flatten any violations into ordered messages
    pub fn check(&self) -> Result<(), Vec<String>> {
        self.validate().map_err(|errors| validation_messages(&errors))
    }
}

fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let by_field = errors.field_errors();
    BookFields::FIELD_ORDER
        .iter()
        .filter_map(|field| by_field.get(*field).map(|errs| (*field, errs)))
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect()
}

/// Unpersisted book used to (re)populate a form.
///
/// Carries an id only when redisplaying the update form, so the form keeps
/// posting to the right record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DraftBook {
    pub id: Option<BookId>,
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub year: Option<String>,
}

impl DraftBook {
    /// Draft for the update form, pinned to an existing record
    pub fn for_record(id: BookId, fields: BookFields) -> Self {
        Self {
            id: Some(id),
            ..Self::from(fields)
        }
    }
}

impl From<BookFields> for DraftBook {
    fn from(fields: BookFields) -> Self {
        Self {
            id: None,
            title: fields.title,
            author: fields.author,
            genre: fields.genre,
            year: fields.year,
        }
    }
}

impl From<Book> for DraftBook {
    fn from(book: Book) -> Self {
        Self {
            id: Some(book.id),
            title: book.title,
            author: book.author,
            genre: book.genre,
            year: book.year,
        }
    }
}

/// Parse a path segment into a book id; anything else names no record.
pub fn parse_book_id(raw: &str) -> Option<BookId> {
    raw.parse::<BookId>().ok().filter(|id| *id > 0)
}
