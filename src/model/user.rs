use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignUpDto {
    pub username: String,
    pub email: String,
    pub password: String,
    pub nickname: String,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

/// Body returned after a successful login.
///
/// The refresh token is never part of the body, it travels in the `refreshToken` cookie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LoginResponseDto {
    pub user_id: i32,
    pub nickname: String,
    pub role: String,
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AccessTokenDto {
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FindUsernameDto {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UsernameDto {
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FindPasswordDto {
    pub username: String,
    pub email: String,
}

/// Temporary password issued by a password reset. Mail delivery is not wired up, so
/// it is handed back directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TempPasswordDto {
    pub temp_password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub nickname: String,
    pub name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Account created through OAuth2 that still needs its profile completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OAuthPendingUserDto {
    pub user_id: i32,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OAuthAdditionalInfoDto {
    /// Signed token received on the OAuth2 redirect.
    pub token: String,
    pub nickname: String,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
}
