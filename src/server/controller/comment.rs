use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, MessageDto},
        comment::{CommentDto, CommentRequestDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::comment::Comment,
        service::comment::CommentService, state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

#[utoipa::path(
    get,
    path = "/api/plans/{plan_id}/comments",
    tag = COMMENT_TAG,
    params(("plan_id" = i32, Path, description = "Plan ID")),
    responses(
        (status = 200, description = "Comments, oldest first", body = ApiResponse<Vec<CommentDto>>),
        (status = 404, description = "Plan not found or not visible", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(plan_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let comments = CommentService::new(&state.db)
        .list(plan_id, user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Comments retrieved",
            comments
                .into_iter()
                .map(Comment::into_dto)
                .collect::<Vec<_>>(),
        )),
    ))
}

#[utoipa::path(
    post,
    path = "/api/plans/{plan_id}/comments",
    tag = COMMENT_TAG,
    params(("plan_id" = i32, Path, description = "Plan ID")),
    request_body = CommentRequestDto,
    responses(
        (status = 201, description = "Comment posted", body = ApiResponse<CommentDto>),
        (status = 400, description = "Empty comment", body = MessageDto),
        (status = 404, description = "Plan not found or not visible", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(plan_id): Path<i32>,
    Json(payload): Json<CommentRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let comment = CommentService::new(&state.db)
        .create(user.id, plan_id, payload.content)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Comment posted", comment.into_dto())),
    ))
}

/// Edit a comment. Only its author may edit it.
#[utoipa::path(
    put,
    path = "/api/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(("comment_id" = i32, Path, description = "Comment ID")),
    request_body = CommentRequestDto,
    responses(
        (status = 200, description = "Comment updated", body = ApiResponse<CommentDto>),
        (status = 403, description = "Caller is not the author", body = MessageDto),
        (status = 404, description = "Comment not found", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(comment_id): Path<i32>,
    Json(payload): Json<CommentRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let comment = CommentService::new(&state.db)
        .update(comment_id, &user, payload.content)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Comment updated", comment.into_dto())),
    ))
}

/// Delete a comment. Its author and admins may delete it.
#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(("comment_id" = i32, Path, description = "Comment ID")),
    responses(
        (status = 200, description = "Comment deleted", body = MessageDto),
        (status = 403, description = "Caller is not the author", body = MessageDto),
        (status = 404, description = "Comment not found", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(comment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    CommentService::new(&state.db)
        .delete(comment_id, &user)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Comment deleted"))))
}
