//! Chat room and message models.

use chrono::{DateTime, Utc};

use crate::model::chat::{ChatMessageDto, ChatRoomDto, ChatRoomUserDto};

#[derive(Debug, Clone, PartialEq)]
pub struct ChatRoom {
    pub id: i32,
    pub plan_id: i32,
    pub room_name: String,
    pub room_date: DateTime<Utc>,
}

impl ChatRoom {
    pub fn into_dto(self) -> ChatRoomDto {
        ChatRoomDto {
            id: self.id,
            plan_id: self.plan_id,
            room_name: self.room_name,
            room_date: self.room_date,
        }
    }

    pub fn from_entity(entity: entity::chat_room::Model) -> Self {
        Self {
            id: entity.id,
            plan_id: entity.plan_id,
            room_name: entity.room_name,
            room_date: entity.room_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatRoomMember {
    pub user_id: i32,
    pub nickname: String,
}

impl ChatRoomMember {
    pub fn into_dto(self) -> ChatRoomUserDto {
        ChatRoomUserDto {
            user_id: self.user_id,
            nickname: self.nickname,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: i32,
    pub room_id: i32,
    pub user_id: i32,
    pub nickname: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn into_dto(self) -> ChatMessageDto {
        ChatMessageDto {
            id: self.id,
            room_id: self.room_id,
            user_id: self.user_id,
            nickname: self.nickname,
            content: self.content,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(
        entity: entity::chat_message::Model,
        author: Option<entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            room_id: entity.room_id,
            user_id: entity.user_id,
            nickname: author.map(|u| u.nickname).unwrap_or_default(),
            content: entity.content,
            created_at: entity.created_at,
        }
    }
}
