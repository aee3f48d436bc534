//! Book catalog service

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::book::{Book, BookFields},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List one page of books plus the total count
    pub async fn list(&self, limit: i64, offset: i64) -> AppResult<(Vec<Book>, i64)> {
        let books = self.repository.books.list(limit, offset).await?;
        let total = self.repository.books.count().await?;
        Ok((books, total))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    pub async fn create(&self, fields: &BookFields) -> AppResult<Book> {
        self.repository.books.create(fields).await
    }

    pub async fn update(&self, id: Uuid, fields: &BookFields) -> AppResult<Book> {
        self.repository.books.update(id, fields).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.books.delete(id).await
    }
}
