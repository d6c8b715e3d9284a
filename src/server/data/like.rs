//! Plan like repository.
//!
//! A user holds at most one like per plan, enforced by a unique index on
//! `(user_id, plan_id)`.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct LikeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LikeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i32, plan_id: i32) -> Result<(), DbErr> {
        entity::like::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            plan_id: ActiveValue::Set(plan_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn exists(&self, user_id: i32, plan_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Like::find()
            .filter(entity::like::Column::UserId.eq(user_id))
            .filter(entity::like::Column::PlanId.eq(plan_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn count_by_plan(&self, plan_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Like::find()
            .filter(entity::like::Column::PlanId.eq(plan_id))
            .count(self.db)
            .await
    }

    /// Gets the IDs of the plans a user marked, most recent first.
    ///
    /// # Arguments
    /// - `user_id` - User whose likes to read
    /// - `limit` - Maximum number of IDs, `None` for all
    pub async fn find_plan_ids_by_user(
        &self,
        user_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<i32>, DbErr> {
        let mut query = entity::prelude::Like::find()
            .filter(entity::like::Column::UserId.eq(user_id))
            .order_by_desc(entity::like::Column::CreatedAt)
            .order_by_desc(entity::like::Column::Id);

        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        let rows = query.all(self.db).await?;

        Ok(rows.into_iter().map(|r| r.plan_id).collect())
    }

    /// Removes a user's like from a plan.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - The user had not marked the plan
    pub async fn delete(&self, user_id: i32, plan_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Like::delete_many()
            .filter(entity::like::Column::UserId.eq(user_id))
            .filter(entity::like::Column::PlanId.eq(plan_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete_by_plan(&self, plan_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Like::delete_many()
            .filter(entity::like::Column::PlanId.eq(plan_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Like::delete_many()
            .filter(entity::like::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
