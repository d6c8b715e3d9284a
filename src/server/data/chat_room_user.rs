//! Chat room membership repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::chat::ChatRoomMember;

pub struct ChatRoomUserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ChatRoomUserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, room_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::chat_room_user::ActiveModel {
            room_id: ActiveValue::Set(room_id),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn exists(&self, room_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ChatRoomUser::find()
            .filter(entity::chat_room_user::Column::RoomId.eq(room_id))
            .filter(entity::chat_room_user::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the user who joined a room first, treated as the room's creator.
    pub async fn find_first_user(&self, room_id: i32) -> Result<Option<i32>, DbErr> {
        let entity = entity::prelude::ChatRoomUser::find()
            .filter(entity::chat_room_user::Column::RoomId.eq(room_id))
            .order_by_asc(entity::chat_room_user::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(|e| e.user_id))
    }

    pub async fn find_members(&self, room_id: i32) -> Result<Vec<ChatRoomMember>, DbErr> {
        let rows = entity::prelude::ChatRoomUser::find()
            .filter(entity::chat_room_user::Column::RoomId.eq(room_id))
            .order_by_asc(entity::chat_room_user::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(member, user)| ChatRoomMember {
                user_id: member.user_id,
                nickname: user.map(|u| u.nickname).unwrap_or_default(),
            })
            .collect())
    }

    pub async fn count_by_room(&self, room_id: i32) -> Result<u64, DbErr> {
        entity::prelude::ChatRoomUser::find()
            .filter(entity::chat_room_user::Column::RoomId.eq(room_id))
            .count(self.db)
            .await
    }

    /// # Returns
    /// - `Ok(true)` - The user left the room
    /// - `Ok(false)` - The user was not in the room
    pub async fn delete(&self, room_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ChatRoomUser::delete_many()
            .filter(entity::chat_room_user::Column::RoomId.eq(room_id))
            .filter(entity::chat_room_user::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete_by_room(&self, room_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ChatRoomUser::delete_many()
            .filter(entity::chat_room_user::Column::RoomId.eq(room_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ChatRoomUser::delete_many()
            .filter(entity::chat_room_user::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
