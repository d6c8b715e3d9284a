use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        alarm::AlarmDto,
        api::{ApiResponse, CountDto, MessageDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::alarm::Alarm,
        service::alarm::AlarmService, state::AppState,
    },
};

/// Tag for grouping alarm endpoints in OpenAPI documentation
pub static ALARM_TAG: &str = "alarm";

#[utoipa::path(
    get,
    path = "/api/alarms",
    tag = ALARM_TAG,
    responses(
        (status = 200, description = "Alarms of the caller, newest first", body = ApiResponse<Vec<AlarmDto>>),
        (status = 401, description = "User not authenticated", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn get_alarms(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let alarms = AlarmService::new(&state.db).list(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Alarms retrieved",
            alarms
                .into_iter()
                .map(Alarm::into_dto)
                .collect::<Vec<_>>(),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/alarms/unchecked-count",
    tag = ALARM_TAG,
    responses(
        (status = 200, description = "Number of unchecked alarms", body = ApiResponse<CountDto>),
        (status = 401, description = "User not authenticated", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn get_unchecked_count(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let count = AlarmService::new(&state.db)
        .count_unchecked(user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Unchecked alarms counted", CountDto { count })),
    ))
}

#[utoipa::path(
    put,
    path = "/api/alarms/{alarm_id}/check",
    tag = ALARM_TAG,
    params(("alarm_id" = i32, Path, description = "Alarm ID")),
    responses(
        (status = 200, description = "Alarm checked", body = ApiResponse<AlarmDto>),
        (status = 403, description = "Alarm belongs to another user", body = MessageDto),
        (status = 404, description = "Alarm not found", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn check_alarm(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(alarm_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let alarm = AlarmService::new(&state.db)
        .check(alarm_id, user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Alarm checked", alarm.into_dto())),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/alarms/{alarm_id}",
    tag = ALARM_TAG,
    params(("alarm_id" = i32, Path, description = "Alarm ID")),
    responses(
        (status = 200, description = "Alarm deleted", body = MessageDto),
        (status = 403, description = "Alarm belongs to another user", body = MessageDto),
        (status = 404, description = "Alarm not found", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn delete_alarm(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(alarm_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    AlarmService::new(&state.db)
        .delete(alarm_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Alarm deleted"))))
}
