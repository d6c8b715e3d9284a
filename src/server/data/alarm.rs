//! Alarm repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::alarm::{Alarm, AlarmRequest};

pub struct AlarmRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AlarmRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, request: AlarmRequest) -> Result<Alarm, DbErr> {
        let entity = entity::alarm::ActiveModel {
            user_id: ActiveValue::Set(request.user_id),
            content: ActiveValue::Set(request.content),
            is_checked: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Alarm::from_entity(entity))
    }

    pub async fn find_by_id(&self, alarm_id: i32) -> Result<Option<Alarm>, DbErr> {
        let entity = entity::prelude::Alarm::find_by_id(alarm_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Alarm::from_entity))
    }

    /// Gets a user's alarms, newest first.
    pub async fn find_by_user(&self, user_id: i32) -> Result<Vec<Alarm>, DbErr> {
        let entities = entity::prelude::Alarm::find()
            .filter(entity::alarm::Column::UserId.eq(user_id))
            .order_by_desc(entity::alarm::Column::CreatedAt)
            .order_by_desc(entity::alarm::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Alarm::from_entity).collect())
    }

    pub async fn count_unchecked(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Alarm::find()
            .filter(entity::alarm::Column::UserId.eq(user_id))
            .filter(entity::alarm::Column::IsChecked.eq(false))
            .count(self.db)
            .await
    }

    pub async fn mark_checked(&self, alarm_id: i32) -> Result<Alarm, DbErr> {
        let entity = entity::alarm::ActiveModel {
            id: ActiveValue::Unchanged(alarm_id),
            is_checked: ActiveValue::Set(true),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Alarm::from_entity(entity))
    }

    pub async fn delete(&self, alarm_id: i32) -> Result<(), DbErr> {
        entity::prelude::Alarm::delete_by_id(alarm_id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Alarm::delete_many()
            .filter(entity::alarm::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
