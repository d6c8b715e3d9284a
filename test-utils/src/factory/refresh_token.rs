//! Refresh token factory.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Persists a refresh token for a user expiring in seven days.
pub async fn create_refresh_token(
    db: &DatabaseConnection,
    user_id: i32,
    token: impl Into<String>,
) -> Result<entity::refresh_token::Model, DbErr> {
    create_refresh_token_expiring(db, user_id, token, Utc::now() + Duration::days(7)).await
}

/// Persists a refresh token for a user with an explicit expiry.
pub async fn create_refresh_token_expiring(
    db: &DatabaseConnection,
    user_id: i32,
    token: impl Into<String>,
    expires_at: DateTime<Utc>,
) -> Result<entity::refresh_token::Model, DbErr> {
    entity::refresh_token::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        token: ActiveValue::Set(token.into()),
        expires_at: ActiveValue::Set(expires_at),
        ..Default::default()
    }
    .insert(db)
    .await
}
