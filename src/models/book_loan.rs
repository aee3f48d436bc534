//! Book loan model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::book::Book;
use super::member::Member;

/// Book loan record from the database.
///
/// `member_id` and `book_id` are semantically required but nullable: deleting
/// a referenced member or book leaves the loan with a dangling null reference.
/// `returned_time` null means the loan is outstanding.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookLoan {
    pub id: Uuid,
    pub member_id: Option<Uuid>,
    pub book_id: Option<Uuid>,
    pub loan_time: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub returned_time: Option<DateTime<Utc>>,
    pub last_modified_time: DateTime<Utc>,
    /// Opaque concurrency token, regenerated by the store on every write
    #[serde_as(as = "Base64")]
    #[schema(value_type = String, format = Byte)]
    pub version: Vec<u8>,
}

/// Book loan with the borrower and lent book embedded for display
#[serde_as]
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookLoanDetails {
    pub id: Uuid,
    pub borrower: Option<Member>,
    pub lent: Option<Book>,
    pub loan_time: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub returned_time: Option<DateTime<Utc>>,
    pub last_modified_time: DateTime<Utc>,
    #[serde_as(as = "Base64")]
    #[schema(value_type = String, format = Byte)]
    pub version: Vec<u8>,
}

/// Client-writable loan fields, shared by create and update requests
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookLoanFields {
    pub member_id: Option<Uuid>,
    pub book_id: Option<Uuid>,
    pub due_date: DateTime<Utc>,
}

/// Create loan (checkout) request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookLoanRequest {
    #[serde(flatten)]
    pub fields: BookLoanFields,
}

/// Update loan request; `returned_time` is set here when closing the loan
#[serde_as]
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookLoanRequest {
    pub id: Uuid,
    #[serde_as(as = "Option<Base64>")]
    #[schema(value_type = Option<String>, format = Byte)]
    pub version: Option<Vec<u8>>,
    pub returned_time: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub fields: BookLoanFields,
}
