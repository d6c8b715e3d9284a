//! Refresh token repository.
//!
//! Each user owns at most one refresh token row; issuing a new token replaces the
//! previous one through an upsert on `user_id`.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter,
};

pub struct RefreshTokenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RefreshTokenRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores the user's refresh token, replacing any previous one.
    pub async fn upsert(
        &self,
        user_id: i32,
        token: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        let model = entity::refresh_token::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            token: ActiveValue::Set(token),
            expires_at: ActiveValue::Set(expires_at),
            ..Default::default()
        };

        entity::prelude::RefreshToken::insert(model)
            .on_conflict(
                OnConflict::column(entity::refresh_token::Column::UserId)
                    .update_columns([
                        entity::refresh_token::Column::Token,
                        entity::refresh_token::Column::ExpiresAt,
                    ])
                    .to_owned(),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::refresh_token::Model>, DbErr> {
        entity::prelude::RefreshToken::find()
            .filter(entity::refresh_token::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::RefreshToken::delete_many()
            .filter(entity::refresh_token::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every token that expired before `now`, returning how many were removed.
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::RefreshToken::delete_many()
            .filter(entity::refresh_token::Column::ExpiresAt.lt(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
