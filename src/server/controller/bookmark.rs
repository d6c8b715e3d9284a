use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::MessageDto,
    server::{
        error::AppError, middleware::auth::AuthGuard, service::bookmark::BookmarkService,
        state::AppState,
    },
};

/// Tag for grouping bookmark endpoints in OpenAPI documentation
pub static BOOKMARK_TAG: &str = "bookmark";

#[utoipa::path(
    post,
    path = "/api/plans/{plan_id}/bookmark",
    tag = BOOKMARK_TAG,
    params(("plan_id" = i32, Path, description = "Plan ID")),
    responses(
        (status = 201, description = "Plan bookmarked", body = MessageDto),
        (status = 404, description = "Plan not found", body = MessageDto),
        (status = 409, description = "Plan already bookmarked", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn add_bookmark(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(plan_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    BookmarkService::new(&state.db).add(user.id, plan_id).await?;

    Ok((StatusCode::CREATED, Json(MessageDto::ok("Plan bookmarked"))))
}

#[utoipa::path(
    delete,
    path = "/api/plans/{plan_id}/bookmark",
    tag = BOOKMARK_TAG,
    params(("plan_id" = i32, Path, description = "Plan ID")),
    responses(
        (status = 200, description = "Bookmark removed", body = MessageDto),
        (status = 404, description = "Plan was not bookmarked", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn remove_bookmark(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(plan_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    BookmarkService::new(&state.db).remove(user.id, plan_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Bookmark removed"))))
}
