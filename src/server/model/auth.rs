//! Results of authentication operations.

use crate::{model::user::LoginResponseDto, server::model::user::User};

/// Tokens issued for a user after a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: User,
    pub access_token: String,
    /// Persisted server side and handed to the client as the `refreshToken` cookie.
    pub refresh_token: String,
}

impl LoginResult {
    pub fn into_dto(self) -> LoginResponseDto {
        LoginResponseDto {
            user_id: self.user.id,
            nickname: self.user.nickname,
            role: self.user.role.as_str().to_string(),
            access_token: self.access_token,
        }
    }
}

/// Where the OAuth2 callback sends the browser next.
#[derive(Debug, Clone, PartialEq)]
pub enum OAuthOutcome {
    /// Account was created by this callback and needs its profile completed.
    NewUser { token: String },
    /// Account already existed and can log in directly.
    ExistingUser { token: String },
}

impl OAuthOutcome {
    /// Builds the frontend URL carrying the hand-off token.
    pub fn redirect_url(&self, frontend_url: &str) -> String {
        let base = frontend_url.trim_end_matches('/');
        match self {
            OAuthOutcome::NewUser { token } => format!("{}/oauth2/signup?token={}", base, token),
            OAuthOutcome::ExistingUser { token } => {
                format!("{}/oauth2/login?token={}", base, token)
            }
        }
    }
}
