//! Comment factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a comment by `user_id` on `plan_id` with generated content.
pub async fn create_comment(
    db: &DatabaseConnection,
    user_id: i32,
    plan_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    let now = Utc::now();
    entity::comment::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        plan_id: ActiveValue::Set(plan_id),
        content: ActiveValue::Set(format!("Comment {}", next_id())),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
