//! PostgreSQL book store

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres};

use super::{BookStore, StoreError, StoreResult};
use crate::{
    models::{Book, BookFields, BookId},
    services::query::BookFilter,
};

const SEARCH_CONDITION: &str = r#"
    title LIKE $1 ESCAPE '\' OR author LIKE $1 ESCAPE '\'
    OR genre LIKE $1 ESCAPE '\' OR year LIKE $1 ESCAPE '\'
"#;

#[derive(Clone)]
pub struct PgBookStore {
    pool: Pool<Postgres>,
}

impl PgBookStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Apply embedded schema migrations
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

/// Clamp a window bound to what PostgreSQL accepts; past `i64::MAX` no rows
/// exist anyway, so the count still decides whether the page is in range.
fn sql_bound(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn find_and_count(
        &self,
        filter: &BookFilter,
        offset: u64,
        limit: u64,
    ) -> StoreResult<(Vec<Book>, u64)> {
        let (where_clause, pattern) = match filter {
            BookFilter::All => (String::new(), None),
            BookFilter::Matching(predicate) => (
                format!("WHERE {}", SEARCH_CONDITION),
                Some(predicate.like_pattern()),
            ),
        };

        let count_query = format!("SELECT COUNT(*) FROM books {}", where_clause);
        let mut count = sqlx::query_scalar::<_, i64>(&count_query);
        if let Some(ref p) = pattern {
            count = count.bind(p);
        }
        let total = count.fetch_one(&self.pool).await?;

        let (limit_idx, offset_idx) = if pattern.is_some() { (2, 3) } else { (1, 2) };
        let select_query = format!(
            r#"
            SELECT id, title, author, genre, year, created_at, updated_at
            FROM books
            {}
            ORDER BY title ASC, id ASC
            LIMIT ${} OFFSET ${}
            "#,
            where_clause, limit_idx, offset_idx
        );
        let mut select = sqlx::query_as::<_, Book>(&select_query);
        if let Some(ref p) = pattern {
            select = select.bind(p);
        }
        let rows = select
            .bind(sql_bound(limit))
            .bind(sql_bound(offset))
            .fetch_all(&self.pool)
            .await?;

        Ok((rows, u64::try_from(total).unwrap_or(0)))
    }

    async fn get(&self, id: BookId) -> StoreResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, genre, year, created_at, updated_at FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(book)
    }

    async fn create(&self, fields: &BookFields) -> StoreResult<Book> {
        fields.check().map_err(StoreError::Validation)?;

        let now = Utc::now();
        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, genre, year, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING id, title, author, genre, year, created_at, updated_at
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.author)
        .bind(&fields.genre)
        .bind(&fields.year)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(book)
    }

    async fn update(&self, id: BookId, fields: &BookFields) -> StoreResult<Book> {
        fields.check().map_err(StoreError::Validation)?;

        sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = $1, author = $2, genre = $3, year = $4, updated_at = $5
            WHERE id = $6
            RETURNING id, title, author, genre, year, created_at, updated_at
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.author)
        .bind(&fields.genre)
        .bind(&fields.year)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: BookId) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
