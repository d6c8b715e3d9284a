//! Alarm factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an unchecked alarm for a user.
pub async fn create_alarm(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::alarm::Model, DbErr> {
    create_alarm_with_status(db, user_id, false).await
}

/// Creates an alarm for a user with the given checked state.
pub async fn create_alarm_with_status(
    db: &DatabaseConnection,
    user_id: i32,
    is_checked: bool,
) -> Result<entity::alarm::Model, DbErr> {
    entity::alarm::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        content: ActiveValue::Set(format!("Alarm {}", next_id())),
        is_checked: ActiveValue::Set(is_checked),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
