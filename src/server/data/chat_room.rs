//! Chat room repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::chat::ChatRoom;

pub struct ChatRoomRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ChatRoomRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, plan_id: i32, room_name: String) -> Result<ChatRoom, DbErr> {
        let entity = entity::chat_room::ActiveModel {
            plan_id: ActiveValue::Set(plan_id),
            room_name: ActiveValue::Set(room_name),
            room_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ChatRoom::from_entity(entity))
    }

    pub async fn find_by_id(&self, room_id: i32) -> Result<Option<ChatRoom>, DbErr> {
        let entity = entity::prelude::ChatRoom::find_by_id(room_id)
            .one(self.db)
            .await?;

        Ok(entity.map(ChatRoom::from_entity))
    }

    pub async fn find_by_plan(&self, plan_id: i32) -> Result<Vec<ChatRoom>, DbErr> {
        let entities = entity::prelude::ChatRoom::find()
            .filter(entity::chat_room::Column::PlanId.eq(plan_id))
            .order_by_asc(entity::chat_room::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ChatRoom::from_entity).collect())
    }

    /// Gets the rooms a user belongs to, newest room first.
    pub async fn find_by_user(&self, user_id: i32) -> Result<Vec<ChatRoom>, DbErr> {
        let entities = entity::prelude::ChatRoom::find()
            .join(
                JoinType::InnerJoin,
                entity::chat_room::Relation::ChatRoomUser.def(),
            )
            .filter(entity::chat_room_user::Column::UserId.eq(user_id))
            .order_by_desc(entity::chat_room::Column::RoomDate)
            .order_by_desc(entity::chat_room::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ChatRoom::from_entity).collect())
    }

    pub async fn delete(&self, room_id: i32) -> Result<(), DbErr> {
        entity::prelude::ChatRoom::delete_by_id(room_id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
