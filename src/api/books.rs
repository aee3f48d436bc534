//! Book endpoints

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderName, StatusCode},
    Json,
};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, CreateBookRequest, UpdateBookRequest},
        book_loan::BookLoan,
        page::{BookPage, Page, PageQuery},
    },
};

use super::LoanFilterQuery;

/// List books with pagination
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of books", body = BookPage)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<Page<Book>>> {
    let (books, total) = state
        .services
        .books
        .list(query.limit(), query.offset())
        .await?;
    Ok(Json(Page::new(books, total, &query)))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = Uuid, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book record", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_by_id(id).await?;
    Ok(Json(book))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBookRequest,
    responses(
        (status = 201, description = "Book created", body = Book)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateBookRequest>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<Book>)> {
    let book = state.services.books.create(&request.fields).await?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/books/{}", book.id))],
        Json(book),
    ))
}

/// Update a book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = Uuid, Path, description = "Book ID")),
    request_body = UpdateBookRequest,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Path id does not match body id"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateBookRequest>,
) -> AppResult<Json<Book>> {
    if id != request.id {
        return Err(AppError::Validation(
            "The id in the request path must match the id in the body".to_string(),
        ));
    }
    let book = state.services.books.update(id, &request.fields).await?;
    Ok(Json(book))
}

/// Delete a book. Returns 204 whether or not the record existed.
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = Uuid, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.books.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get loans of a book
#[utoipa::path(
    get,
    path = "/books/{id}/loans",
    tag = "loans",
    params(
        ("id" = Uuid, Path, description = "Book ID"),
        LoanFilterQuery
    ),
    responses(
        (status = 200, description = "Loans of the book", body = Vec<BookLoan>),
        (status = 404, description = "Book not found")
    )
)]
pub async fn list_loans_of_book(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<LoanFilterQuery>,
) -> AppResult<Json<Vec<BookLoan>>> {
    let loans = state
        .services
        .loans
        .list_by_book(id, query.outstanding_only.unwrap_or(false))
        .await?;
    Ok(Json(loans))
}
