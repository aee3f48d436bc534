//! Repository layer for database operations

pub mod book_loans;
pub mod books;
pub mod members;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub books: books::BooksRepository,
    pub members: members::MembersRepository,
    pub book_loans: book_loans::BookLoansRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: books::BooksRepository::new(pool.clone()),
            members: members::MembersRepository::new(pool.clone()),
            book_loans: book_loans::BookLoansRepository::new(pool.clone()),
            pool,
        }
    }
}
