//! Data models for Biblion

pub mod book;
pub mod book_loan;
pub mod member;
pub mod page;

// Re-export commonly used types
pub use book::Book;
pub use book_loan::{BookLoan, BookLoanDetails};
pub use member::Member;
pub use page::{Page, PageQuery};
