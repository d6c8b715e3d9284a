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
        plan::PlanListDto,
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{plan::PlanSummary, user::User},
        service::{plan::PlanService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

#[derive(Deserialize, IntoParams)]
pub struct RecentQuery {
    /// Only return the three most recent entries.
    #[serde(default)]
    pub recent: bool,
}

/// List every account, used by the invite picker.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = ApiResponse<Vec<UserDto>>),
        (status = 401, description = "User not authenticated", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn get_all_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let users = UserService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Users retrieved",
            users.into_iter().map(User::into_dto).collect::<Vec<_>>(),
        )),
    ))
}

/// Delete the caller's own account with everything it owns.
#[utoipa::path(
    delete,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Account deleted", body = MessageDto),
        (status = 401, description = "User not authenticated", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn delete_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    UserService::new(&state.db).delete(user.id).await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Account deleted"))))
}

/// Delete any account.
///
/// # Access Control
/// - `Admin` - Only admins can delete other accounts
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Account deleted", body = MessageDto),
        (status = 403, description = "Caller is not an admin", body = MessageDto),
        (status = 404, description = "User not found", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db).delete(user_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Account deleted"))))
}

/// List the plans the caller owns or has joined.
#[utoipa::path(
    get,
    path = "/api/users/me/plans",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Plans of the caller", body = ApiResponse<Vec<PlanListDto>>),
        (status = 401, description = "User not authenticated", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn get_my_plans(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let plans = PlanService::new(&state.db).list_user_plans(user.id).await?;

    Ok(plan_list("Plans retrieved", plans))
}

#[utoipa::path(
    get,
    path = "/api/users/me/bookmarks",
    tag = USER_TAG,
    params(RecentQuery),
    responses(
        (status = 200, description = "Bookmarked plans, newest first", body = ApiResponse<Vec<PlanListDto>>),
        (status = 401, description = "User not authenticated", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn get_my_bookmarks(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<RecentQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let plans = PlanService::new(&state.db)
        .list_bookmarked(user.id, query.recent)
        .await?;

    Ok(plan_list("Bookmarked plans retrieved", plans))
}

#[utoipa::path(
    get,
    path = "/api/users/me/likes",
    tag = USER_TAG,
    params(RecentQuery),
    responses(
        (status = 200, description = "Liked plans, newest first", body = ApiResponse<Vec<PlanListDto>>),
        (status = 401, description = "User not authenticated", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn get_my_likes(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<RecentQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let plans = PlanService::new(&state.db)
        .list_liked(user.id, query.recent)
        .await?;

    Ok(plan_list("Liked plans retrieved", plans))
}

pub(super) fn plan_list(message: &str, plans: Vec<PlanSummary>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse::ok(
            message,
            plans
                .into_iter()
                .map(PlanSummary::into_dto)
                .collect::<Vec<_>>(),
        )),
    )
}
