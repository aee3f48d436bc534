//! Book loans repository

use sqlx::postgres::PgRow;
use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::Book,
        book_loan::{BookLoan, BookLoanDetails, BookLoanFields, UpdateBookLoanRequest},
        member::Member,
    },
};

const DETAILS_SELECT: &str = r#"
    SELECT l.id, l.loan_time, l.due_date, l.returned_time,
           l.last_modified_time, l.version,
           m.id AS borrower_id, m.given_name AS borrower_given_name,
           m.surname AS borrower_surname, m.created_time AS borrower_created_time,
           m.last_modified_time AS borrower_last_modified_time, m.version AS borrower_version,
           b.id AS lent_id, b.title AS lent_title, b.subtitle AS lent_subtitle,
           b.publish_date AS lent_publish_date, b.created_time AS lent_created_time,
           b.last_modified_time AS lent_last_modified_time, b.version AS lent_version
    FROM book_loans l
    LEFT JOIN members m ON m.id = l.member_id
    LEFT JOIN books b ON b.id = l.book_id
"#;

#[derive(Clone)]
pub struct BookLoansRepository {
    pool: Pool<Postgres>,
}

impl BookLoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List one page of loans with borrower and book embedded
    pub async fn list_details(&self, limit: i64, offset: i64) -> AppResult<Vec<BookLoanDetails>> {
        let rows = sqlx::query(&format!(
            "{} ORDER BY l.loan_time LIMIT $1 OFFSET $2",
            DETAILS_SELECT
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(details_from_row).collect())
    }

    /// Count all loans
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM book_loans")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Get loan by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<BookLoan> {
        sqlx::query_as::<_, BookLoan>("SELECT * FROM book_loans WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Loan {} not found", id)))
    }

    /// Get loan by ID with borrower and book embedded
    pub async fn get_details(&self, id: Uuid) -> AppResult<BookLoanDetails> {
        let row = sqlx::query(&format!("{} WHERE l.id = $1", DETAILS_SELECT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Loan {} not found", id)))?;

        Ok(details_from_row(&row))
    }

    /// Get loans for a member, optionally outstanding (un-returned) only
    pub async fn list_by_member(
        &self,
        member_id: Uuid,
        outstanding_only: bool,
    ) -> AppResult<Vec<BookLoan>> {
        let loans = if outstanding_only {
            sqlx::query_as::<_, BookLoan>(
                "SELECT * FROM book_loans WHERE member_id = $1 AND returned_time IS NULL",
            )
            .bind(member_id)
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, BookLoan>("SELECT * FROM book_loans WHERE member_id = $1")
                .bind(member_id)
                .fetch_all(&self.pool)
                .await?
        };
        Ok(loans)
    }

    /// Get loans of a book, optionally outstanding (un-returned) only
    pub async fn list_by_book(
        &self,
        book_id: Uuid,
        outstanding_only: bool,
    ) -> AppResult<Vec<BookLoan>> {
        let loans = if outstanding_only {
            sqlx::query_as::<_, BookLoan>(
                "SELECT * FROM book_loans WHERE book_id = $1 AND returned_time IS NULL",
            )
            .bind(book_id)
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, BookLoan>("SELECT * FROM book_loans WHERE book_id = $1")
                .bind(book_id)
                .fetch_all(&self.pool)
                .await?
        };
        Ok(loans)
    }

    /// Create a new loan; the store assigns the loan time, last-modified
    /// timestamp and version token
    pub async fn create(&self, fields: &BookLoanFields) -> AppResult<BookLoan> {
        let loan = sqlx::query_as::<_, BookLoan>(
            "INSERT INTO book_loans (id, member_id, book_id, due_date) VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(fields.member_id)
        .bind(fields.book_id)
        .bind(fields.due_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(loan)
    }

    /// Update a loan, returning the refreshed record
    pub async fn update(&self, id: Uuid, request: &UpdateBookLoanRequest) -> AppResult<BookLoan> {
        sqlx::query_as::<_, BookLoan>(
            r#"
            UPDATE book_loans
            SET member_id = $1, book_id = $2, due_date = $3, returned_time = $4
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(request.fields.member_id)
        .bind(request.fields.book_id)
        .bind(request.fields.due_date)
        .bind(request.returned_time)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Loan {} not found", id)))
    }
}

/// Assemble a details record from a joined row; joined columns are null when
/// the referenced member or book has since been deleted
fn details_from_row(row: &PgRow) -> BookLoanDetails {
    let borrower = row
        .get::<Option<Uuid>, _>("borrower_id")
        .map(|member_id| Member {
            id: member_id,
            given_name: row.get("borrower_given_name"),
            surname: row.get("borrower_surname"),
            created_time: row.get("borrower_created_time"),
            last_modified_time: row.get("borrower_last_modified_time"),
            version: row.get("borrower_version"),
        });

    let lent = row.get::<Option<Uuid>, _>("lent_id").map(|book_id| Book {
        id: book_id,
        title: row.get("lent_title"),
        subtitle: row.get("lent_subtitle"),
        publish_date: row.get("lent_publish_date"),
        created_time: row.get("lent_created_time"),
        last_modified_time: row.get("lent_last_modified_time"),
        version: row.get("lent_version"),
    });

    BookLoanDetails {
        id: row.get("id"),
        borrower,
        lent,
        loan_time: row.get("loan_time"),
        due_date: row.get("due_date"),
        returned_time: row.get("returned_time"),
        last_modified_time: row.get("last_modified_time"),
        version: row.get("version"),
    }
}
