//! Book model and request types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Book record from the database
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: Uuid,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub publish_date: Option<NaiveDate>,
    pub created_time: DateTime<Utc>,
    pub last_modified_time: DateTime<Utc>,
    /// Opaque concurrency token, regenerated by the store on every write
    #[serde_as(as = "Base64")]
    #[schema(value_type = String, format = Byte)]
    pub version: Vec<u8>,
}

/// Client-writable book fields, shared by create and update requests
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookFields {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub publish_date: Option<NaiveDate>,
}

/// Create book request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    #[serde(flatten)]
    pub fields: BookFields,
}

/// Update book request: the target identifier plus the round-tripped
/// version token wrapped around the writable field set
#[serde_as]
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookRequest {
    pub id: Uuid,
    #[serde_as(as = "Option<Base64>")]
    #[schema(value_type = Option<String>, format = Byte)]
    pub version: Option<Vec<u8>>,
    #[serde(flatten)]
    pub fields: BookFields,
}
