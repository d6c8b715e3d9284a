use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::MessageDto,
    server::{
        error::AppError, middleware::auth::AuthGuard, service::like::LikeService,
        state::AppState,
    },
};

/// Tag for grouping like endpoints in OpenAPI documentation
pub static LIKE_TAG: &str = "like";

#[utoipa::path(
    post,
    path = "/api/plans/{plan_id}/like",
    tag = LIKE_TAG,
    params(("plan_id" = i32, Path, description = "Plan ID")),
    responses(
        (status = 201, description = "Plan liked", body = MessageDto),
        (status = 404, description = "Plan not found", body = MessageDto),
        (status = 409, description = "Plan already liked", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn add_like(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(plan_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    LikeService::new(&state.db).add(user.id, plan_id).await?;

    Ok((StatusCode::CREATED, Json(MessageDto::ok("Plan liked"))))
}

#[utoipa::path(
    delete,
    path = "/api/plans/{plan_id}/like",
    tag = LIKE_TAG,
    params(("plan_id" = i32, Path, description = "Plan ID")),
    responses(
        (status = 200, description = "Like removed", body = MessageDto),
        (status = 404, description = "Plan was not liked", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn remove_like(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(plan_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    LikeService::new(&state.db).remove(user.id, plan_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Like removed"))))
}
