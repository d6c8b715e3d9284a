use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub jwt_access_secret: String,
    pub jwt_refresh_secret: String,
    pub access_token_minutes: i64,
    pub refresh_token_days: i64,

    pub oauth_client_id: String,
    pub oauth_client_secret: String,
    pub oauth_redirect_url: String,
    pub oauth_auth_url: String,
    pub oauth_token_url: String,
    pub oauth_userinfo_url: String,

    /// Origin of the web frontend, used for CORS and OAuth2 redirects.
    pub frontend_url: String,
    /// Sets the `Secure` attribute on the refresh-token cookie.
    pub cookie_secure: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS", "0.0.0.0:8080"),
            jwt_access_secret: required("JWT_ACCESS_SECRET")?,
            jwt_refresh_secret: required("JWT_REFRESH_SECRET")?,
            access_token_minutes: parsed("ACCESS_TOKEN_MINUTES", 30)?,
            refresh_token_days: parsed("REFRESH_TOKEN_DAYS", 7)?,
            oauth_client_id: required("OAUTH_CLIENT_ID")?,
            oauth_client_secret: required("OAUTH_CLIENT_SECRET")?,
            oauth_redirect_url: required("OAUTH_REDIRECT_URL")?,
            oauth_auth_url: optional("OAUTH_AUTH_URL", GOOGLE_AUTH_URL),
            oauth_token_url: optional("OAUTH_TOKEN_URL", GOOGLE_TOKEN_URL),
            oauth_userinfo_url: optional("OAUTH_USERINFO_URL", GOOGLE_USERINFO_URL),
            frontend_url: required("FRONTEND_URL")?,
            cookie_secure: parsed("COOKIE_SECURE", false)?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parsed<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
