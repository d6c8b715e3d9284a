use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{data::refresh_token::RefreshTokenRepository, error::AppError};

/// Starts the refresh token cleanup scheduler
///
/// Runs at the top of every hour and removes refresh tokens whose expiry has passed.
/// Tokens are also replaced on login and removed on logout, so this only clears out
/// sessions that were abandoned without logging out.
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = purge_expired_tokens(&db).await {
                tracing::error!("Error purging expired refresh tokens: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Refresh token cleanup scheduler started");

    Ok(())
}

/// Deletes every expired refresh token, returning how many were removed.
pub async fn purge_expired_tokens(db: &DatabaseConnection) -> Result<u64, AppError> {
    let removed = RefreshTokenRepository::new(db)
        .delete_expired(Utc::now())
        .await?;

    if removed > 0 {
        tracing::debug!("Removed {} expired refresh tokens", removed);
    }

    Ok(removed)
}
