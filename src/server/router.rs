use std::borrow::BorrowMut;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        alarm::{self, ALARM_TAG},
        auth::{self, AUTH_TAG},
        bookmark::{self, BOOKMARK_TAG},
        chat::{self, CHAT_TAG},
        comment::{self, COMMENT_TAG},
        like::{self, LIKE_TAG},
        plan::{self, PLAN_TAG},
        plan_user::{self, PLAN_USER_TAG},
        schedule::{self, SCHEDULE_TAG},
        user::{self, USER_TAG},
    },
    error::{config::ConfigError, AppError},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "todotravel", description = "Travel plan sharing API"),
    modifiers(&Security),
    tags(
        (name = AUTH_TAG, description = "Sign up, login, tokens and OAuth2"),
        (name = USER_TAG, description = "Accounts and per-user plan listings"),
        (name = PLAN_TAG, description = "Plans"),
        (name = SCHEDULE_TAG, description = "Plan itineraries"),
        (name = PLAN_USER_TAG, description = "Plan membership and invitations"),
        (name = COMMENT_TAG, description = "Plan comments"),
        (name = LIKE_TAG, description = "Plan likes"),
        (name = BOOKMARK_TAG, description = "Plan bookmarks"),
        (name = CHAT_TAG, description = "Plan chat rooms"),
        (name = ALARM_TAG, description = "Notifications"),
    ),
    paths(
        auth::signup,
        auth::login,
        auth::logout,
        auth::refresh,
        auth::check_username,
        auth::check_email,
        auth::check_nickname,
        auth::find_username,
        auth::find_password,
        auth::oauth_authorize,
        auth::oauth_callback,
        auth::oauth_signup,
        auth::oauth_login,
        auth::oauth_additional_info,
        user::get_all_users,
        user::delete_me,
        user::delete_user,
        user::get_my_plans,
        user::get_my_bookmarks,
        user::get_my_likes,
        plan::create_plan,
        plan::get_public_plans,
        plan::get_plan,
        plan::update_plan,
        plan::delete_plan,
        plan::copy_plan,
        schedule::get_schedules,
        schedule::create_schedule,
        schedule::update_schedule,
        schedule::delete_schedule,
        plan_user::get_plan_users,
        plan_user::invite,
        plan_user::accept,
        plan_user::reject,
        plan_user::remove_plan_user,
        comment::get_comments,
        comment::create_comment,
        comment::update_comment,
        comment::delete_comment,
        like::add_like,
        like::remove_like,
        bookmark::add_bookmark,
        bookmark::remove_bookmark,
        chat::create_room,
        chat::get_rooms,
        chat::delete_room,
        chat::join_room,
        chat::leave_room,
        chat::get_room_users,
        chat::get_messages,
        chat::send_message,
        alarm::get_alarms,
        alarm::get_unchecked_count,
        alarm::check_alarm,
        alarm::delete_alarm,
    )
)]
pub struct ApiDoc;

struct Security;

impl Modify for Security {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.borrow_mut() {
            let scheme = HttpBuilder::new()
                .scheme(HttpAuthScheme::Bearer)
                .bearer_format("JWT")
                .build();

            components.add_security_scheme("BearerAuth", SecurityScheme::Http(scheme))
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/refresh", post(auth::refresh))
        .route("/api/auth/check-username", post(auth::check_username))
        .route("/api/auth/check-email", post(auth::check_email))
        .route("/api/auth/check-nickname", post(auth::check_nickname))
        .route("/api/auth/find-username", post(auth::find_username))
        .route("/api/auth/find-password", post(auth::find_password))
        .route("/api/auth/oauth2/authorize", get(auth::oauth_authorize))
        .route("/api/auth/oauth2/callback", get(auth::oauth_callback))
        .route("/api/auth/oauth2/signup", get(auth::oauth_signup))
        .route("/api/auth/oauth2/login", get(auth::oauth_login))
        .route(
            "/api/auth/oauth2/additional-info",
            post(auth::oauth_additional_info),
        )
        .route("/api/users", get(user::get_all_users))
        .route("/api/users/me", delete(user::delete_me))
        .route("/api/users/me/plans", get(user::get_my_plans))
        .route("/api/users/me/bookmarks", get(user::get_my_bookmarks))
        .route("/api/users/me/likes", get(user::get_my_likes))
        .route("/api/users/{user_id}", delete(user::delete_user))
        .route("/api/plans", post(plan::create_plan))
        .route("/api/plans/public", get(plan::get_public_plans))
        .route(
            "/api/plans/{plan_id}",
            get(plan::get_plan)
                .put(plan::update_plan)
                .delete(plan::delete_plan),
        )
        .route("/api/plans/{plan_id}/copy", post(plan::copy_plan))
        .route(
            "/api/plans/{plan_id}/schedules",
            get(schedule::get_schedules).post(schedule::create_schedule),
        )
        .route(
            "/api/plans/{plan_id}/schedules/{schedule_id}",
            put(schedule::update_schedule).delete(schedule::delete_schedule),
        )
        .route("/api/plans/{plan_id}/users", get(plan_user::get_plan_users))
        .route(
            "/api/plans/{plan_id}/users/{user_id}",
            delete(plan_user::remove_plan_user),
        )
        .route("/api/plans/{plan_id}/invite", post(plan_user::invite))
        .route("/api/plans/{plan_id}/accept", post(plan_user::accept))
        .route("/api/plans/{plan_id}/reject", post(plan_user::reject))
        .route(
            "/api/plans/{plan_id}/comments",
            get(comment::get_comments).post(comment::create_comment),
        )
        .route(
            "/api/comments/{comment_id}",
            put(comment::update_comment).delete(comment::delete_comment),
        )
        .route(
            "/api/plans/{plan_id}/like",
            post(like::add_like).delete(like::remove_like),
        )
        .route(
            "/api/plans/{plan_id}/bookmark",
            post(bookmark::add_bookmark).delete(bookmark::remove_bookmark),
        )
        .route("/api/plans/{plan_id}/chat-rooms", post(chat::create_room))
        .route("/api/chat/rooms", get(chat::get_rooms))
        .route("/api/chat/rooms/{room_id}", delete(chat::delete_room))
        .route("/api/chat/rooms/{room_id}/join", post(chat::join_room))
        .route("/api/chat/rooms/{room_id}/leave", post(chat::leave_room))
        .route("/api/chat/rooms/{room_id}/users", get(chat::get_room_users))
        .route(
            "/api/chat/rooms/{room_id}/messages",
            get(chat::get_messages).post(chat::send_message),
        )
        .route("/api/alarms", get(alarm::get_alarms))
        .route(
            "/api/alarms/unchecked-count",
            get(alarm::get_unchecked_count),
        )
        .route("/api/alarms/{alarm_id}/check", put(alarm::check_alarm))
        .route("/api/alarms/{alarm_id}", delete(alarm::delete_alarm))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}

/// Allows the frontend origin to call the API with credentials, so the refresh cookie
/// is sent along.
pub fn cors_layer(frontend_url: &str) -> Result<CorsLayer, AppError> {
    let origin = HeaderValue::from_str(frontend_url.trim_end_matches('/')).map_err(|_| {
        ConfigError::InvalidEnvVar {
            name: "FRONTEND_URL".to_string(),
            value: frontend_url.to_string(),
        }
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true))
}
