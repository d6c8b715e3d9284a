//! Chat room, membership and message factories.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a chat room for a plan dated now.
pub async fn create_chat_room(
    db: &DatabaseConnection,
    plan_id: i32,
) -> Result<entity::chat_room::Model, DbErr> {
    create_chat_room_at(db, plan_id, Utc::now()).await
}

/// Creates a chat room for a plan with an explicit room date.
pub async fn create_chat_room_at(
    db: &DatabaseConnection,
    plan_id: i32,
    room_date: DateTime<Utc>,
) -> Result<entity::chat_room::Model, DbErr> {
    entity::chat_room::ActiveModel {
        plan_id: ActiveValue::Set(plan_id),
        room_name: ActiveValue::Set(format!("Room {}", next_id())),
        room_date: ActiveValue::Set(room_date),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Adds a user to a chat room.
pub async fn create_chat_room_user(
    db: &DatabaseConnection,
    room_id: i32,
    user_id: i32,
) -> Result<entity::chat_room_user::Model, DbErr> {
    entity::chat_room_user::ActiveModel {
        room_id: ActiveValue::Set(room_id),
        user_id: ActiveValue::Set(user_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Posts a message with generated content to a chat room.
pub async fn create_chat_message(
    db: &DatabaseConnection,
    room_id: i32,
    user_id: i32,
) -> Result<entity::chat_message::Model, DbErr> {
    entity::chat_message::ActiveModel {
        room_id: ActiveValue::Set(room_id),
        user_id: ActiveValue::Set(user_id),
        content: ActiveValue::Set(format!("Message {}", next_id())),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
