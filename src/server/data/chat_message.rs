//! Chat message repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::chat::ChatMessage;

pub struct ChatMessageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ChatMessageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        room_id: i32,
        user_id: i32,
        content: String,
    ) -> Result<ChatMessage, DbErr> {
        let entity = entity::chat_message::ActiveModel {
            room_id: ActiveValue::Set(room_id),
            user_id: ActiveValue::Set(user_id),
            content: ActiveValue::Set(content),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let author = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(ChatMessage::from_entity(entity, author))
    }

    /// Gets a room's message history in the order it was sent.
    pub async fn find_by_room(&self, room_id: i32) -> Result<Vec<ChatMessage>, DbErr> {
        let rows = entity::prelude::ChatMessage::find()
            .filter(entity::chat_message::Column::RoomId.eq(room_id))
            .order_by_asc(entity::chat_message::Column::CreatedAt)
            .order_by_asc(entity::chat_message::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(message, author)| ChatMessage::from_entity(message, author))
            .collect())
    }

    pub async fn delete_by_room(&self, room_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ChatMessage::delete_many()
            .filter(entity::chat_message::Column::RoomId.eq(room_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ChatMessage::delete_many()
            .filter(entity::chat_message::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
