mod model;
mod server;

use crate::server::{
    config::Config,
    error::AppError,
    logging::init_logging,
    router::{cors_layer, router},
    scheduler::refresh_token_cleanup,
    service::token::JwtTokenizer,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;
    let jwt = JwtTokenizer::from_config(&config);

    let scheduler_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = refresh_token_cleanup::start_scheduler(scheduler_db).await {
            tracing::error!("Refresh token cleanup scheduler error: {}", e);
        }
    });

    let cors = cors_layer(&config.frontend_url)?;
    let bind_address = config.bind_address.clone();

    let app = router()
        .with_state(AppState::new(db, http_client, oauth_client, jwt, config))
        .layer(session)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Listening on {}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
