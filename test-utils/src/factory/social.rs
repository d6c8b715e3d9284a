//! Like and bookmark factories.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Records that `user_id` likes `plan_id`.
pub async fn create_like(
    db: &DatabaseConnection,
    user_id: i32,
    plan_id: i32,
) -> Result<entity::like::Model, DbErr> {
    entity::like::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        plan_id: ActiveValue::Set(plan_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Records that `user_id` bookmarked `plan_id`.
pub async fn create_bookmark(
    db: &DatabaseConnection,
    user_id: i32,
    plan_id: i32,
) -> Result<entity::bookmark::Model, DbErr> {
    entity::bookmark::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        plan_id: ActiveValue::Set(plan_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
