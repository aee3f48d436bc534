//! Member model and request types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Library member record from the database
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: Uuid,
    pub given_name: Option<String>,
    pub surname: Option<String>,
    pub created_time: DateTime<Utc>,
    pub last_modified_time: DateTime<Utc>,
    /// Opaque concurrency token, regenerated by the store on every write
    #[serde_as(as = "Base64")]
    #[schema(value_type = String, format = Byte)]
    pub version: Vec<u8>,
}

/// Client-writable member fields, shared by create and update requests
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberFields {
    pub given_name: Option<String>,
    pub surname: Option<String>,
}

/// Create member request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    #[serde(flatten)]
    pub fields: MemberFields,
}

/// Update member request
#[serde_as]
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberRequest {
    pub id: Uuid,
    #[serde_as(as = "Option<Base64>")]
    #[schema(value_type = Option<String>, format = Byte)]
    pub version: Option<Vec<u8>>,
    #[serde(flatten)]
    pub fields: MemberFields,
}
