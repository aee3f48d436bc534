//! API handlers for Biblion REST endpoints

pub mod book_loans;
pub mod books;
pub mod health;
pub mod members;
pub mod openapi;

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Query parameters for loan listings scoped to a member or book
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoanFilterQuery {
    /// Restrict to outstanding (un-returned) loans (default: false)
    pub outstanding_only: Option<bool>,
}
