//! Member endpoints

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderName, StatusCode},
    Json,
};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        book_loan::BookLoan,
        member::{CreateMemberRequest, Member, UpdateMemberRequest},
        page::{MemberPage, Page, PageQuery},
    },
    services::loan_policy::CheckOutPermission,
};

use super::LoanFilterQuery;

/// List members with pagination
#[utoipa::path(
    get,
    path = "/members",
    tag = "members",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of members", body = MemberPage)
    )
)]
pub async fn list_members(
    State(state): State<crate::AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<Page<Member>>> {
    let (members, total) = state
        .services
        .members
        .list(query.limit(), query.offset())
        .await?;
    Ok(Json(Page::new(members, total, &query)))
}

/// Get member by ID
#[utoipa::path(
    get,
    path = "/members/{id}",
    tag = "members",
    params(("id" = Uuid, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member record", body = Member),
        (status = 404, description = "Member not found")
    )
)]
pub async fn get_member(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Member>> {
    let member = state.services.members.get_by_id(id).await?;
    Ok(Json(member))
}

/// Create a member
#[utoipa::path(
    post,
    path = "/members",
    tag = "members",
    request_body = CreateMemberRequest,
    responses(
        (status = 201, description = "Member created", body = Member)
    )
)]
pub async fn create_member(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateMemberRequest>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<Member>)> {
    let member = state.services.members.create(&request.fields).await?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/members/{}", member.id))],
        Json(member),
    ))
}

/// Update a member
#[utoipa::path(
    put,
    path = "/members/{id}",
    tag = "members",
    params(("id" = Uuid, Path, description = "Member ID")),
    request_body = UpdateMemberRequest,
    responses(
        (status = 200, description = "Member updated", body = Member),
        (status = 400, description = "Path id does not match body id"),
        (status = 404, description = "Member not found")
    )
)]
pub async fn update_member(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateMemberRequest>,
) -> AppResult<Json<Member>> {
    if id != request.id {
        return Err(AppError::Validation(
            "The id in the request path must match the id in the body".to_string(),
        ));
    }
    let member = state.services.members.update(id, &request.fields).await?;
    Ok(Json(member))
}

/// Delete a member. Returns 204 whether or not the record existed; any
/// existing loans keep a null borrower reference.
#[utoipa::path(
    delete,
    path = "/members/{id}",
    tag = "members",
    params(("id" = Uuid, Path, description = "Member ID")),
    responses(
        (status = 204, description = "Member deleted")
    )
)]
pub async fn delete_member(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.members.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get loans for a member
#[utoipa::path(
    get,
    path = "/members/{id}/loans",
    tag = "loans",
    params(
        ("id" = Uuid, Path, description = "Member ID"),
        LoanFilterQuery
    ),
    responses(
        (status = 200, description = "Member's loans", body = Vec<BookLoan>),
        (status = 404, description = "Member not found")
    )
)]
pub async fn list_member_loans(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<LoanFilterQuery>,
) -> AppResult<Json<Vec<BookLoan>>> {
    let loans = state
        .services
        .loans
        .list_by_member(id, query.outstanding_only.unwrap_or(false))
        .await?;
    Ok(Json(loans))
}

/// Get a member's checkout permission verdict
#[utoipa::path(
    get,
    path = "/members/{id}/check-out-permission",
    tag = "loans",
    params(("id" = Uuid, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Checkout permission status", body = CheckOutPermission)
    )
)]
pub async fn check_out_permission(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<CheckOutPermission>> {
    let permission = state.services.loan_policy.check_out_permission(id).await?;
    Ok(Json(permission))
}
