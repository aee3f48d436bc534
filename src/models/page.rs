//! Paginated response envelope

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::book::Book;
use super::book_loan::BookLoanDetails;
use super::member::Member;

/// Paginated envelope returned by list endpoints
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[aliases(BookPage = Page<Book>, MemberPage = Page<Member>, BookLoanPage = Page<BookLoanDetails>)]
pub struct Page<T> {
    /// Total number of records across all pages
    pub total_items: i64,
    pub current_page: i64,
    pub page_size: i64,
    pub items: Vec<T>,
}

/// Pagination query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    /// Page number, starting at 1 (default: 1)
    pub page: Option<i64>,
    /// Records per page (default: 20)
    pub page_size: Option<i64>,
}

impl PageQuery {
    /// Page number clamped to a sane range so the offset arithmetic below
    /// cannot overflow for absurd but parseable values
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).clamp(1, 1_000_000_000)
    }

    pub fn page_size(&self) -> i64 {
        self.page_size.unwrap_or(20).clamp(1, 500)
    }

    pub fn limit(&self) -> i64 {
        self.page_size()
    }

    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.page_size()
    }
}

impl<T> Page<T> {
    /// Build an envelope from a fetched page of records and the total count
    pub fn new(items: Vec<T>, total_items: i64, query: &PageQuery) -> Self {
        Self {
            total_items,
            current_page: query.page(),
            page_size: query.page_size(),
            items,
        }
    }
}
