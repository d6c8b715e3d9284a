use chrono::{DateTime, Utc};

use crate::model::comment::CommentDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub user_id: i32,
    pub nickname: String,
    pub plan_id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            user_id: self.user_id,
            nickname: self.nickname,
            plan_id: self.plan_id,
            content: self.content,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts a comment row joined with its author.
    ///
    /// The nickname is empty when the author row is missing.
    pub fn from_entity(
        entity: entity::comment::Model,
        author: Option<entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            nickname: author.map(|u| u.nickname).unwrap_or_default(),
            plan_id: entity.plan_id,
            content: entity.content,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
