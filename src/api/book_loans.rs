//! Book loan endpoints

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderName, StatusCode},
    Json,
};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        book_loan::{BookLoan, BookLoanDetails, CreateBookLoanRequest, UpdateBookLoanRequest},
        page::{BookLoanPage, Page, PageQuery},
    },
};

/// List loans with pagination, borrower and book embedded
#[utoipa::path(
    get,
    path = "/book-loans",
    tag = "loans",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of loans", body = BookLoanPage)
    )
)]
pub async fn list_book_loans(
    State(state): State<crate::AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<Page<BookLoanDetails>>> {
    let (loans, total) = state
        .services
        .loans
        .list(query.limit(), query.offset())
        .await?;
    Ok(Json(Page::new(loans, total, &query)))
}

/// Get loan by ID
#[utoipa::path(
    get,
    path = "/book-loans/{id}",
    tag = "loans",
    params(("id" = Uuid, Path, description = "Loan ID")),
    responses(
        (status = 200, description = "Loan record", body = BookLoanDetails),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn get_book_loan(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<BookLoanDetails>> {
    let loan = state.services.loans.get_details(id).await?;
    Ok(Json(loan))
}

/// Check out a book. The borrowing policy is enforced here: a member at the
/// outstanding-loan limit or with overdue loans is rejected with 409.
#[utoipa::path(
    post,
    path = "/book-loans",
    tag = "loans",
    request_body = CreateBookLoanRequest,
    responses(
        (status = 201, description = "Loan created", body = BookLoan),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Member or book not found"),
        (status = 409, description = "Member has overdue loans or has reached the loan limit")
    )
)]
pub async fn create_book_loan(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateBookLoanRequest>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<BookLoan>)> {
    let loan = state.services.loans.checkout(request).await?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/book-loans/{}", loan.id))],
        Json(loan),
    ))
}

/// Update a loan; setting `returnedTime` closes it
#[utoipa::path(
    put,
    path = "/book-loans/{id}",
    tag = "loans",
    params(("id" = Uuid, Path, description = "Loan ID")),
    request_body = UpdateBookLoanRequest,
    responses(
        (status = 200, description = "Loan updated", body = BookLoan),
        (status = 400, description = "Path id does not match body id"),
        (status = 404, description = "Loan not found"),
        (status = 409, description = "Loan already returned")
    )
)]
pub async fn update_book_loan(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateBookLoanRequest>,
) -> AppResult<Json<BookLoan>> {
    if id != request.id {
        return Err(AppError::Validation(
            "The id in the request path must match the id in the body".to_string(),
        ));
    }
    let loan = state.services.loans.update(id, request).await?;
    Ok(Json(loan))
}
