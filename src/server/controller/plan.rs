use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ApiResponse, MessageDto},
        plan::{CreatePlanDto, PlanDetailDto, PlanDto, PlanListDto, UpdatePlanDto},
    },
    server::{
        controller::user::plan_list,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::plan::{CreatePlanParams, UpdatePlanParams},
        service::plan::PlanService,
        state::AppState,
    },
};

/// Tag for grouping plan endpoints in OpenAPI documentation
pub static PLAN_TAG: &str = "plan";

#[derive(Deserialize, IntoParams)]
pub struct KeywordQuery {
    /// Case-sensitive substring of the plan title.
    pub keyword: Option<String>,
}

/// Create a new plan owned by the caller.
///
/// The caller becomes the plan's first accepted member.
///
/// # Returns
/// - `201 Created` - Plan created
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/plans",
    tag = PLAN_TAG,
    request_body = CreatePlanDto,
    responses(
        (status = 201, description = "Plan created", body = ApiResponse<PlanDto>),
        (status = 401, description = "User not authenticated", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn create_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePlanDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let plan = PlanService::new(&state.db)
        .create(CreatePlanParams::from_dto(user.id, payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Plan created", plan.into_dto())),
    ))
}

/// List public plans with their like and bookmark counts.
///
/// Open to anonymous visitors.
#[utoipa::path(
    get,
    path = "/api/plans/public",
    tag = PLAN_TAG,
    params(KeywordQuery),
    responses(
        (status = 200, description = "Public plans", body = ApiResponse<Vec<PlanListDto>>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_public_plans(
    State(state): State<AppState>,
    Query(query): Query<KeywordQuery>,
) -> Result<impl IntoResponse, AppError> {
    let plans = PlanService::new(&state.db)
        .list_public(query.keyword.as_deref())
        .await?;

    Ok(plan_list("Public plans retrieved", plans))
}

/// Get a plan with its schedules, members, comments and counters.
///
/// Private plans are reported as missing to anyone but their accepted members.
#[utoipa::path(
    get,
    path = "/api/plans/{plan_id}",
    tag = PLAN_TAG,
    params(("plan_id" = i32, Path, description = "Plan ID")),
    responses(
        (status = 200, description = "Plan detail", body = ApiResponse<PlanDetailDto>),
        (status = 401, description = "User not authenticated", body = MessageDto),
        (status = 404, description = "Plan not found or not visible", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn get_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(plan_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let detail = PlanService::new(&state.db)
        .get_detail(plan_id, user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Plan retrieved", detail.into_dto())),
    ))
}

/// Update a plan.
///
/// # Access Control
/// - `PlanMember` - Only accepted members can edit the plan
#[utoipa::path(
    put,
    path = "/api/plans/{plan_id}",
    tag = PLAN_TAG,
    params(("plan_id" = i32, Path, description = "Plan ID")),
    request_body = UpdatePlanDto,
    responses(
        (status = 200, description = "Plan updated", body = ApiResponse<PlanDto>),
        (status = 403, description = "Caller is not a member of the plan", body = MessageDto),
        (status = 404, description = "Plan not found", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn update_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(plan_id): Path<i32>,
    Json(payload): Json<UpdatePlanDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::PlanMember(plan_id)])
        .await?;

    let plan = PlanService::new(&state.db)
        .update(UpdatePlanParams::from_dto(plan_id, payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Plan updated", plan.into_dto())),
    ))
}

/// Delete a plan with everything attached to it.
///
/// # Access Control
/// - `PlanOwner` - Only the owner can delete the plan
#[utoipa::path(
    delete,
    path = "/api/plans/{plan_id}",
    tag = PLAN_TAG,
    params(("plan_id" = i32, Path, description = "Plan ID")),
    responses(
        (status = 200, description = "Plan deleted", body = MessageDto),
        (status = 403, description = "Caller does not own the plan", body = MessageDto),
        (status = 404, description = "Plan not found", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn delete_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(plan_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::PlanOwner(plan_id)])
        .await?;

    PlanService::new(&state.db).delete(plan_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Plan deleted"))))
}

/// Copy a visible plan and its schedules into a private plan owned by the caller.
#[utoipa::path(
    post,
    path = "/api/plans/{plan_id}/copy",
    tag = PLAN_TAG,
    params(("plan_id" = i32, Path, description = "Plan ID to copy")),
    responses(
        (status = 201, description = "Plan copied", body = ApiResponse<PlanDto>),
        (status = 401, description = "User not authenticated", body = MessageDto),
        (status = 404, description = "Plan not found or not visible", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn copy_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(plan_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let copy = PlanService::new(&state.db).copy(plan_id, user.id).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Plan copied", copy.into_dto())),
    ))
}
