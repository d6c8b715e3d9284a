use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, MessageDto},
        plan::{InviteDto, PlanUserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::plan_user::PlanMember,
        service::plan_user::PlanUserService,
        state::AppState,
    },
};

/// Tag for grouping plan membership endpoints in OpenAPI documentation
pub static PLAN_USER_TAG: &str = "plan-user";

/// List the members and pending invitations of a plan.
#[utoipa::path(
    get,
    path = "/api/plans/{plan_id}/users",
    tag = PLAN_USER_TAG,
    params(("plan_id" = i32, Path, description = "Plan ID")),
    responses(
        (status = 200, description = "Plan members", body = ApiResponse<Vec<PlanUserDto>>),
        (status = 403, description = "Caller is not a member of the plan", body = MessageDto),
        (status = 404, description = "Plan not found", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn get_plan_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(plan_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::PlanMember(plan_id)])
        .await?;

    let members = PlanUserService::new(&state.db).list(plan_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Plan members retrieved",
            members
                .into_iter()
                .map(PlanMember::into_dto)
                .collect::<Vec<_>>(),
        )),
    ))
}

/// Invite a user to a plan.
///
/// # Access Control
/// - `PlanOwner` - Only the owner can invite
///
/// # Returns
/// - `201 Created` - Invitation sent
/// - `403 Forbidden` - Caller does not own the plan
/// - `404 Not Found` - Plan or invitee not found
/// - `409 Conflict` - Invitee already a member or already invited
#[utoipa::path(
    post,
    path = "/api/plans/{plan_id}/invite",
    tag = PLAN_USER_TAG,
    params(("plan_id" = i32, Path, description = "Plan ID")),
    request_body = InviteDto,
    responses(
        (status = 201, description = "Invitation sent", body = MessageDto),
        (status = 403, description = "Caller does not own the plan", body = MessageDto),
        (status = 404, description = "Plan or invitee not found", body = MessageDto),
        (status = 409, description = "Already a member or already invited", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn invite(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(plan_id): Path<i32>,
    Json(payload): Json<InviteDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::PlanOwner(plan_id)])
        .await?;

    PlanUserService::new(&state.db)
        .invite(plan_id, payload.user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(MessageDto::ok("Invitation sent"))))
}

#[utoipa::path(
    post,
    path = "/api/plans/{plan_id}/accept",
    tag = PLAN_USER_TAG,
    params(("plan_id" = i32, Path, description = "Plan ID")),
    responses(
        (status = 200, description = "Invitation accepted", body = MessageDto),
        (status = 404, description = "No invitation to this plan", body = MessageDto),
        (status = 409, description = "Invitation already answered", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn accept(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(plan_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    PlanUserService::new(&state.db)
        .accept(plan_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Invitation accepted"))))
}

#[utoipa::path(
    post,
    path = "/api/plans/{plan_id}/reject",
    tag = PLAN_USER_TAG,
    params(("plan_id" = i32, Path, description = "Plan ID")),
    responses(
        (status = 200, description = "Invitation rejected", body = MessageDto),
        (status = 404, description = "No invitation to this plan", body = MessageDto),
        (status = 409, description = "Invitation already answered", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn reject(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(plan_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    PlanUserService::new(&state.db)
        .reject(plan_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Invitation rejected"))))
}

/// Remove a member from a plan, or leave it.
///
/// The owner may remove any other member; everyone else may only remove themselves.
#[utoipa::path(
    delete,
    path = "/api/plans/{plan_id}/users/{user_id}",
    tag = PLAN_USER_TAG,
    params(
        ("plan_id" = i32, Path, description = "Plan ID"),
        ("user_id" = i32, Path, description = "User to remove")
    ),
    responses(
        (status = 200, description = "Member removed", body = MessageDto),
        (status = 403, description = "Target is the owner or caller may not remove them", body = MessageDto),
        (status = 404, description = "Plan not found or user not a member", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn remove_plan_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((plan_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    PlanUserService::new(&state.db)
        .remove(plan_id, &caller, user_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Member removed"))))
}
