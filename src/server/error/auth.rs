use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::MessageDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Username unknown or password mismatch during login.
    ///
    /// Both cases share one variant so the response does not reveal which part was wrong.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Request carries no bearer token where one is required.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token signature, structure or kind is invalid.
    #[error("Invalid token")]
    InvalidToken,

    /// Token was valid but its expiry has passed.
    #[error("Token has expired")]
    ExpiredToken,

    /// Refresh cookie does not match the token persisted for the user.
    #[error("Refresh token for user {0} does not match the stored token")]
    RefreshTokenMismatch(i32),

    /// Token subject refers to a user that no longer exists.
    #[error("User {0} not found in database")]
    UserNotInDatabase(i32),

    /// Authenticated user lacks the required permission.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Description of the missing permission, logged but not returned
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The state in the callback URL does not match the token stored in the session.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Authorization code exchange with the OAuth2 provider failed.
    #[error("OAuth2 code exchange failed: {0}")]
    OAuthExchange(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `InvalidCredentials` / `MissingToken` / `InvalidToken` / `ExpiredToken` /
///   `RefreshTokenMismatch` / `UserNotInDatabase` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
/// - `CsrfValidationFailed` → 400 Bad Request
/// - `OAuthExchange` → 500 Internal Server Error
///
/// Errors are logged at debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid username or password"),
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Authentication required"),
            Self::InvalidToken | Self::RefreshTokenMismatch(_) | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Invalid token")
            }
            Self::ExpiredToken => (StatusCode::UNAUTHORIZED, "Token has expired"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied"),
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
            Self::OAuthExchange(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "There was an issue logging you in, please try again.",
            ),
        };

        (status, Json(MessageDto::error(message))).into_response()
    }
}
