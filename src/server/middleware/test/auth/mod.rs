use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Duration;
use sea_orm::EntityTrait;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    model::user::User,
    service::token::JwtTokenizer,
};
use test_utils::{builder::TestBuilder, factory};

mod require;
mod require_plan;

fn tokenizer() -> JwtTokenizer {
    JwtTokenizer::new(
        "access-secret-for-tests-minimum-32-chars",
        "refresh-secret-for-tests-minimum-32-chars",
        Duration::minutes(30),
        Duration::days(7),
    )
}

/// Builds request headers carrying an access token for the user.
fn headers_for(jwt: &JwtTokenizer, user: &entity::user::Model) -> HeaderMap {
    let issued = jwt
        .create_access_token(&User::from_entity(user.clone()))
        .unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", issued.token)).unwrap(),
    );
    headers
}
