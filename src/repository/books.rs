//! Books repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookFields},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List one page of books
    pub async fn list(&self, limit: i64, offset: i64) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT * FROM books ORDER BY created_time LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }

    /// Count all books
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Create a new book; the store assigns timestamps and the version token
    pub async fn create(&self, fields: &BookFields) -> AppResult<Book> {
        let book = sqlx::query_as::<_, Book>(
            "INSERT INTO books (id, title, subtitle, publish_date) VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&fields.title)
        .bind(&fields.subtitle)
        .bind(fields.publish_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(book)
    }

    /// Update a book, returning the refreshed record
    pub async fn update(&self, id: Uuid, fields: &BookFields) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            "UPDATE books SET title = $1, subtitle = $2, publish_date = $3 WHERE id = $4 RETURNING *",
        )
        .bind(&fields.title)
        .bind(&fields.subtitle)
        .bind(fields.publish_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Delete a book. Idempotent: the affected row count is not inspected,
    /// so deleting an absent record succeeds.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
