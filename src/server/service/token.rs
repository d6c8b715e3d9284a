//! JWT issuance and verification.
//!
//! Three kinds of HS256 tokens are issued:
//! - **access**: short-lived bearer token, subject is the user ID
//! - **refresh**: long-lived token kept in the `refreshToken` cookie and persisted per user
//! - **oauth**: ten-minute hand-off token given to the frontend after the OAuth2 callback,
//!   subject is the provider email
//!
//! Access and OAuth2 tokens are signed with the access secret; refresh tokens with their
//! own secret so a leaked access secret cannot mint refresh tokens. The `typ` claim keeps
//! one kind from being accepted in place of another.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::server::{
    config::Config,
    error::{auth::AuthError, internal::InternalError, AppError},
    model::user::User,
};

const OAUTH_TOKEN_MINUTES: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
    OAuth,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub typ: TokenKind,
    pub exp: i64,
    pub iat: i64,
}

/// A signed token together with its expiry.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

struct Keys {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
}

#[derive(Clone)]
pub struct JwtTokenizer {
    keys: Arc<Keys>,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl JwtTokenizer {
    pub fn new(
        access_secret: &str,
        refresh_secret: &str,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Self {
        Self {
            keys: Arc::new(Keys {
                access_encoding: EncodingKey::from_secret(access_secret.as_bytes()),
                access_decoding: DecodingKey::from_secret(access_secret.as_bytes()),
                refresh_encoding: EncodingKey::from_secret(refresh_secret.as_bytes()),
                refresh_decoding: DecodingKey::from_secret(refresh_secret.as_bytes()),
            }),
            access_ttl,
            refresh_ttl,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.jwt_access_secret,
            &config.jwt_refresh_secret,
            Duration::minutes(config.access_token_minutes),
            Duration::days(config.refresh_token_days),
        )
    }

    pub fn refresh_ttl(&self) -> Duration {
        self.refresh_ttl
    }

    pub fn create_access_token(&self, user: &User) -> Result<IssuedToken, AppError> {
        self.sign(
            user.id.to_string(),
            Some(user.role.as_str().to_string()),
            TokenKind::Access,
            self.access_ttl,
        )
    }

    pub fn create_refresh_token(&self, user: &User) -> Result<IssuedToken, AppError> {
        self.sign(
            user.id.to_string(),
            None,
            TokenKind::Refresh,
            self.refresh_ttl,
        )
    }

    pub fn create_oauth_token(&self, email: &str) -> Result<IssuedToken, AppError> {
        self.sign(
            email.to_string(),
            None,
            TokenKind::OAuth,
            Duration::minutes(OAUTH_TOKEN_MINUTES),
        )
    }

    /// Verifies an access token and returns the user ID it was issued for.
    pub fn parse_access_token(&self, token: &str) -> Result<i32, AuthError> {
        let claims = self.verify(token, TokenKind::Access)?;
        claims.sub.parse().map_err(|_| AuthError::InvalidToken)
    }

    /// Verifies a refresh token and returns the user ID it was issued for.
    pub fn parse_refresh_token(&self, token: &str) -> Result<i32, AuthError> {
        let claims = self.verify(token, TokenKind::Refresh)?;
        claims.sub.parse().map_err(|_| AuthError::InvalidToken)
    }

    /// Verifies an OAuth2 hand-off token and returns the email it carries.
    pub fn parse_oauth_token(&self, token: &str) -> Result<String, AuthError> {
        Ok(self.verify(token, TokenKind::OAuth)?.sub)
    }

    fn sign(
        &self,
        sub: String,
        role: Option<String>,
        typ: TokenKind,
        ttl: Duration,
    ) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let expires_at = now + ttl;
        let claims = Claims {
            sub,
            role,
            typ,
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let key = match typ {
            TokenKind::Refresh => &self.keys.refresh_encoding,
            TokenKind::Access | TokenKind::OAuth => &self.keys.access_encoding,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, key)
            .map_err(InternalError::TokenEncoding)?;

        Ok(IssuedToken { token, expires_at })
    }

    fn verify(&self, token: &str, expected: TokenKind) -> Result<Claims, AuthError> {
        let key = match expected {
            TokenKind::Refresh => &self.keys.refresh_decoding,
            TokenKind::Access | TokenKind::OAuth => &self.keys.access_decoding,
        };

        let data = decode::<Claims>(token, key, &Validation::new(Algorithm::HS256)).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                _ => AuthError::InvalidToken,
            },
        )?;

        if data.claims.typ != expected {
            return Err(AuthError::InvalidToken);
        }

        Ok(data.claims)
    }
}
