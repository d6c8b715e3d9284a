use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{internal::InternalError, AppError},
    state::OAuth2Client,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions only carry the OAuth2 CSRF state between the authorize redirect and
/// the provider callback, so they expire after a short period of inactivity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(10)));

    Ok(session)
}

/// Builds the HTTP client used for OAuth2 requests.
///
/// Redirects are disabled as recommended by the `oauth2` crate to prevent SSRF.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client from the configured provider endpoints.
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let client = BasicClient::new(ClientId::new(config.oauth_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.oauth_client_secret.clone()))
        .set_auth_uri(AuthUrl::new(config.oauth_auth_url.clone()).map_err(|source| {
            InternalError::InvalidUrl {
                value: config.oauth_auth_url.clone(),
                source,
            }
        })?)
        .set_token_uri(
            TokenUrl::new(config.oauth_token_url.clone()).map_err(|source| {
                InternalError::InvalidUrl {
                    value: config.oauth_token_url.clone(),
                    source,
                }
            })?,
        )
        .set_redirect_uri(
            RedirectUrl::new(config.oauth_redirect_url.clone()).map_err(|source| {
                InternalError::InvalidUrl {
                    value: config.oauth_redirect_url.clone(),
                    source,
                }
            })?,
        );

    Ok(client)
}
