//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{book_loans, books, health, members};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Biblion API",
        version = "0.1.0",
        description = "Library Lending Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        books::list_loans_of_book,
        // Members
        members::list_members,
        members::get_member,
        members::create_member,
        members::update_member,
        members::delete_member,
        members::list_member_loans,
        members::check_out_permission,
        // Loans
        book_loans::list_book_loans,
        book_loans::get_book_loan,
        book_loans::create_book_loan,
        book_loans::update_book_loan,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::BookFields,
            crate::models::book::CreateBookRequest,
            crate::models::book::UpdateBookRequest,
            // Members
            crate::models::member::Member,
            crate::models::member::MemberFields,
            crate::models::member::CreateMemberRequest,
            crate::models::member::UpdateMemberRequest,
            // Loans
            crate::models::book_loan::BookLoan,
            crate::models::book_loan::BookLoanDetails,
            crate::models::book_loan::BookLoanFields,
            crate::models::book_loan::CreateBookLoanRequest,
            crate::models::book_loan::UpdateBookLoanRequest,
            crate::services::loan_policy::CheckOutPermission,
            // Pages
            crate::models::page::BookPage,
            crate::models::page::MemberPage,
            crate::models::page::BookLoanPage,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog management"),
        (name = "members", description = "Library member management"),
        (name = "loans", description = "Book loan management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
