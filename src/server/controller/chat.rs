use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, MessageDto},
        chat::{ChatMessageDto, ChatRoomDto, ChatRoomUserDto, CreateChatRoomDto, SendMessageDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::chat::{ChatMessage, ChatRoom, ChatRoomMember},
        service::chat::ChatService,
        state::AppState,
    },
};

/// Tag for grouping chat endpoints in OpenAPI documentation
pub static CHAT_TAG: &str = "chat";

/// Create a chat room for a plan. The caller joins it as its creator.
///
/// # Access Control
/// - `PlanMember` - Only accepted members of the plan can create rooms
#[utoipa::path(
    post,
    path = "/api/plans/{plan_id}/chat-rooms",
    tag = CHAT_TAG,
    params(("plan_id" = i32, Path, description = "Plan ID")),
    request_body = CreateChatRoomDto,
    responses(
        (status = 201, description = "Room created", body = ApiResponse<ChatRoomDto>),
        (status = 400, description = "Empty room name", body = MessageDto),
        (status = 403, description = "Caller is not a member of the plan", body = MessageDto),
        (status = 404, description = "Plan not found", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn create_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(plan_id): Path<i32>,
    Json(payload): Json<CreateChatRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::PlanMember(plan_id)])
        .await?;

    let room = ChatService::new(&state.db)
        .create_room(plan_id, user.id, payload.room_name)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Chat room created", room.into_dto())),
    ))
}

/// List the rooms the caller belongs to, newest first.
#[utoipa::path(
    get,
    path = "/api/chat/rooms",
    tag = CHAT_TAG,
    responses(
        (status = 200, description = "Rooms of the caller", body = ApiResponse<Vec<ChatRoomDto>>),
        (status = 401, description = "User not authenticated", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn get_rooms(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let rooms = ChatService::new(&state.db).list_rooms(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Chat rooms retrieved",
            rooms
                .into_iter()
                .map(ChatRoom::into_dto)
                .collect::<Vec<_>>(),
        )),
    ))
}

/// Delete a room with its members and messages. Only its creator may delete it.
#[utoipa::path(
    delete,
    path = "/api/chat/rooms/{room_id}",
    tag = CHAT_TAG,
    params(("room_id" = i32, Path, description = "Chat room ID")),
    responses(
        (status = 200, description = "Room deleted", body = MessageDto),
        (status = 403, description = "Caller did not create the room", body = MessageDto),
        (status = 404, description = "Room not found", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn delete_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(room_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    ChatService::new(&state.db)
        .delete_room(room_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Chat room deleted"))))
}

#[utoipa::path(
    post,
    path = "/api/chat/rooms/{room_id}/join",
    tag = CHAT_TAG,
    params(("room_id" = i32, Path, description = "Chat room ID")),
    responses(
        (status = 200, description = "Joined the room", body = ApiResponse<ChatRoomDto>),
        (status = 403, description = "Caller is not a member of the room's plan", body = MessageDto),
        (status = 404, description = "Room not found", body = MessageDto),
        (status = 409, description = "Already in the room", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn join_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(room_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let room = ChatService::new(&state.db).join(room_id, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Joined chat room", room.into_dto())),
    ))
}

/// Leave a room. The room is deleted when its last member leaves.
#[utoipa::path(
    post,
    path = "/api/chat/rooms/{room_id}/leave",
    tag = CHAT_TAG,
    params(("room_id" = i32, Path, description = "Chat room ID")),
    responses(
        (status = 200, description = "Left the room", body = MessageDto),
        (status = 404, description = "Room not found or caller not in it", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn leave_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(room_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    ChatService::new(&state.db).leave(room_id, user.id).await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Left chat room"))))
}

#[utoipa::path(
    get,
    path = "/api/chat/rooms/{room_id}/users",
    tag = CHAT_TAG,
    params(("room_id" = i32, Path, description = "Chat room ID")),
    responses(
        (status = 200, description = "Room members", body = ApiResponse<Vec<ChatRoomUserDto>>),
        (status = 403, description = "Caller is not in the room", body = MessageDto),
        (status = 404, description = "Room not found", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn get_room_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(room_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let members = ChatService::new(&state.db)
        .members(room_id, user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Chat room members retrieved",
            members
                .into_iter()
                .map(ChatRoomMember::into_dto)
                .collect::<Vec<_>>(),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/chat/rooms/{room_id}/messages",
    tag = CHAT_TAG,
    params(("room_id" = i32, Path, description = "Chat room ID")),
    responses(
        (status = 200, description = "Messages, oldest first", body = ApiResponse<Vec<ChatMessageDto>>),
        (status = 403, description = "Caller is not in the room", body = MessageDto),
        (status = 404, description = "Room not found", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn get_messages(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(room_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let messages = ChatService::new(&state.db)
        .messages(room_id, user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Messages retrieved",
            messages
                .into_iter()
                .map(ChatMessage::into_dto)
                .collect::<Vec<_>>(),
        )),
    ))
}

#[utoipa::path(
    post,
    path = "/api/chat/rooms/{room_id}/messages",
    tag = CHAT_TAG,
    params(("room_id" = i32, Path, description = "Chat room ID")),
    request_body = SendMessageDto,
    responses(
        (status = 201, description = "Message sent", body = ApiResponse<ChatMessageDto>),
        (status = 400, description = "Empty message", body = MessageDto),
        (status = 403, description = "Caller is not in the room", body = MessageDto),
        (status = 404, description = "Room not found", body = MessageDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn send_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(room_id): Path<i32>,
    Json(payload): Json<SendMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let message = ChatService::new(&state.db)
        .send(room_id, user.id, payload.content)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Message sent", message.into_dto())),
    ))
}
