use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, MessageDto},
        plan::{CreateScheduleDto, ScheduleDto, UpdateScheduleDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::schedule::{Schedule, ScheduleParams},
        service::schedule::ScheduleService,
        state::AppState,
    },
};

/// Tag for grouping schedule endpoints in OpenAPI documentation
pub static SCHEDULE_TAG: &str = "schedule";

// Every schedule endpoint requires accepted membership of the plan.

#[utoipa::path(
    get,
    path = "/api/plans/{plan_id}/schedules",
    tag = SCHEDULE_TAG,
    params(("plan_id" = i32, Path, description = "Plan ID")),
    responses(
        (status = 200, description = "Schedules ordered by day and time", body = ApiResponse<Vec<ScheduleDto>>),
        (status = 403, description = "Caller is not a member of the plan", body = MessageDto),
        (status = 404, description = "Plan not found", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn get_schedules(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(plan_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::PlanMember(plan_id)])
        .await?;

    let schedules = ScheduleService::new(&state.db).list(plan_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Schedules retrieved",
            schedules
                .into_iter()
                .map(Schedule::into_dto)
                .collect::<Vec<_>>(),
        )),
    ))
}

#[utoipa::path(
    post,
    path = "/api/plans/{plan_id}/schedules",
    tag = SCHEDULE_TAG,
    params(("plan_id" = i32, Path, description = "Plan ID")),
    request_body = CreateScheduleDto,
    responses(
        (status = 201, description = "Schedule created", body = ApiResponse<ScheduleDto>),
        (status = 400, description = "Invalid day or budget", body = MessageDto),
        (status = 403, description = "Caller is not a member of the plan", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn create_schedule(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(plan_id): Path<i32>,
    Json(payload): Json<CreateScheduleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::PlanMember(plan_id)])
        .await?;

    let schedule = ScheduleService::new(&state.db)
        .create(ScheduleParams::from_create_dto(plan_id, payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Schedule created", schedule.into_dto())),
    ))
}

#[utoipa::path(
    put,
    path = "/api/plans/{plan_id}/schedules/{schedule_id}",
    tag = SCHEDULE_TAG,
    params(
        ("plan_id" = i32, Path, description = "Plan ID"),
        ("schedule_id" = i32, Path, description = "Schedule ID")
    ),
    request_body = UpdateScheduleDto,
    responses(
        (status = 200, description = "Schedule updated", body = ApiResponse<ScheduleDto>),
        (status = 400, description = "Invalid day or budget", body = MessageDto),
        (status = 403, description = "Caller is not a member of the plan", body = MessageDto),
        (status = 404, description = "Schedule not found in this plan", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn update_schedule(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((plan_id, schedule_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateScheduleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::PlanMember(plan_id)])
        .await?;

    let schedule = ScheduleService::new(&state.db)
        .update(schedule_id, ScheduleParams::from_update_dto(plan_id, payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Schedule updated", schedule.into_dto())),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/plans/{plan_id}/schedules/{schedule_id}",
    tag = SCHEDULE_TAG,
    params(
        ("plan_id" = i32, Path, description = "Plan ID"),
        ("schedule_id" = i32, Path, description = "Schedule ID")
    ),
    responses(
        (status = 200, description = "Schedule deleted", body = MessageDto),
        (status = 403, description = "Caller is not a member of the plan", body = MessageDto),
        (status = 404, description = "Schedule not found in this plan", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn delete_schedule(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((plan_id, schedule_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::PlanMember(plan_id)])
        .await?;

    ScheduleService::new(&state.db)
        .delete(plan_id, schedule_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Schedule deleted"))))
}
