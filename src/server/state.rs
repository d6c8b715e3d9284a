//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request handler
//! through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - HTTP client for the OAuth2 provider
//! - OAuth2 client for social login
//! - JWT tokenizer holding the signing keys
//! - Application configuration

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{config::Config, service::token::JwtTokenizer};

/// Type alias for the OAuth2 client with authorization and token endpoints set.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `OAuth2Client` is designed to be cloned
/// - `JwtTokenizer` keeps its keys behind an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for the OAuth2 token exchange and profile lookup.
    ///
    /// Configured without redirects to prevent SSRF vulnerabilities.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the social login flow.
    pub oauth_client: OAuth2Client,

    /// Issues and verifies access, refresh and OAuth2 hand-off tokens.
    pub jwt: JwtTokenizer,

    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `oauth_client` - OAuth2 client for social login
    /// - `jwt` - Token issuer configured with the signing secrets
    /// - `config` - Application configuration
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        jwt: JwtTokenizer,
        config: Config,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            jwt,
            config: Arc::new(config),
        }
    }
}
