//! Loan management service

use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::book_loan::{BookLoan, BookLoanDetails, CreateBookLoanRequest, UpdateBookLoanRequest},
    repository::Repository,
    services::loan_policy::{CheckOutPermission, LoanPolicyService},
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
    policy: LoanPolicyService,
}

impl LoansService {
    pub fn new(repository: Repository, policy: LoanPolicyService) -> Self {
        Self { repository, policy }
    }

    /// List one page of loans plus the total count
    pub async fn list(&self, limit: i64, offset: i64) -> AppResult<(Vec<BookLoanDetails>, i64)> {
        let loans = self.repository.book_loans.list_details(limit, offset).await?;
        let total = self.repository.book_loans.count().await?;
        Ok((loans, total))
    }

    /// Get a loan with borrower and book embedded
    pub async fn get_details(&self, id: Uuid) -> AppResult<BookLoanDetails> {
        self.repository.book_loans.get_details(id).await
    }

    /// Get loans for a member, optionally outstanding only
    pub async fn list_by_member(
        &self,
        member_id: Uuid,
        outstanding_only: bool,
    ) -> AppResult<Vec<BookLoan>> {
        self.repository.members.get_by_id(member_id).await?;
        self.repository
            .book_loans
            .list_by_member(member_id, outstanding_only)
            .await
    }

    /// Get loans of a book, optionally outstanding only
    pub async fn list_by_book(
        &self,
        book_id: Uuid,
        outstanding_only: bool,
    ) -> AppResult<Vec<BookLoan>> {
        self.repository.books.get_by_id(book_id).await?;
        self.repository
            .book_loans
            .list_by_book(book_id, outstanding_only)
            .await
    }

    /// Check out a book: validate the request, enforce the borrowing policy,
    /// then persist the loan
    pub async fn checkout(&self, request: CreateBookLoanRequest) -> AppResult<BookLoan> {
        let member_id = request
            .fields
            .member_id
            .ok_or_else(|| AppError::Validation("memberId is required".to_string()))?;
        let book_id = request
            .fields
            .book_id
            .ok_or_else(|| AppError::Validation("bookId is required".to_string()))?;

        // Verify the referenced records exist before consulting the policy
        self.repository.members.get_by_id(member_id).await?;
        self.repository.books.get_by_id(book_id).await?;

        if request.fields.due_date.date_naive() < Utc::now().date_naive() {
            return Err(AppError::Validation(
                "dueDate must not precede the loan date".to_string(),
            ));
        }

        match self.policy.check_out_permission(member_id).await? {
            CheckOutPermission::Allowed => {}
            CheckOutPermission::HasOverdue => {
                return Err(AppError::BusinessRule(
                    ErrorCode::HasOverdueLoans,
                    format!("Member {} has overdue loans", member_id),
                ));
            }
            CheckOutPermission::MaximumReached => {
                return Err(AppError::BusinessRule(
                    ErrorCode::MaxLoansReached,
                    format!("Member {} has reached the outstanding loan limit", member_id),
                ));
            }
        }

        self.repository.book_loans.create(&request.fields).await
    }

    /// Update a loan. A loan transitions from outstanding to returned exactly
    /// once: altering an already-set returned time is rejected.
    pub async fn update(&self, id: Uuid, request: UpdateBookLoanRequest) -> AppResult<BookLoan> {
        let existing = self.repository.book_loans.get_by_id(id).await?;

        if let Some(returned) = existing.returned_time {
            if request.returned_time != Some(returned) {
                return Err(AppError::BusinessRule(
                    ErrorCode::AlreadyReturned,
                    format!("Loan {} has already been returned", id),
                ));
            }
        }

        self.repository.book_loans.update(id, &request).await
    }
}
