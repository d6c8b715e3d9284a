//! Plan chat rooms and their message history.
//!
//! Rooms belong to a plan and only its accepted members may create or join them.
//! The first user in a room is its creator and the only one allowed to delete it.
//! A room is removed together with its history when its last member leaves.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        chat_message::ChatMessageRepository, chat_room::ChatRoomRepository,
        chat_room_user::ChatRoomUserRepository, plan_user::PlanUserRepository,
    },
    error::AppError,
    model::chat::{ChatMessage, ChatRoom, ChatRoomMember},
};

pub struct ChatService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChatService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a room for a plan with the creator as its first member.
    pub async fn create_room(
        &self,
        plan_id: i32,
        creator_id: i32,
        room_name: String,
    ) -> Result<ChatRoom, AppError> {
        let room_name = room_name.trim().to_string();
        if room_name.is_empty() {
            return Err(AppError::BadRequest(
                "Room name must not be empty".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        let room = ChatRoomRepository::new(&txn)
            .create(plan_id, room_name)
            .await?;
        ChatRoomUserRepository::new(&txn)
            .create(room.id, creator_id)
            .await?;
        txn.commit().await?;

        Ok(room)
    }

    pub async fn list_rooms(&self, user_id: i32) -> Result<Vec<ChatRoom>, AppError> {
        Ok(ChatRoomRepository::new(self.db).find_by_user(user_id).await?)
    }

    /// Deletes a room with its members and messages. Only the creator may delete it.
    pub async fn delete_room(&self, room_id: i32, caller_id: i32) -> Result<(), AppError> {
        self.find_room(room_id).await?;

        let creator = ChatRoomUserRepository::new(self.db)
            .find_first_user(room_id)
            .await?;
        if creator != Some(caller_id) {
            return Err(AppError::Forbidden(
                "Only the room creator can delete the room".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        delete_room_tree(&txn, room_id).await?;
        txn.commit().await?;

        tracing::info!("User {} deleted chat room {}", caller_id, room_id);

        Ok(())
    }

    /// Adds an accepted plan member to one of the plan's rooms.
    pub async fn join(&self, room_id: i32, user_id: i32) -> Result<ChatRoom, AppError> {
        let room = self.find_room(room_id).await?;

        if !PlanUserRepository::new(self.db)
            .is_accepted_member(room.plan_id, user_id)
            .await?
        {
            return Err(AppError::Forbidden(
                "Only plan members can join its chat rooms".to_string(),
            ));
        }

        let repo = ChatRoomUserRepository::new(self.db);
        if repo.exists(room_id, user_id).await? {
            return Err(AppError::Conflict(
                "Already a member of this room".to_string(),
            ));
        }
        repo.create(room_id, user_id).await?;

        Ok(room)
    }

    /// Leaves a room, deleting it when nobody is left.
    pub async fn leave(&self, room_id: i32, user_id: i32) -> Result<(), AppError> {
        self.find_room(room_id).await?;

        let txn = self.db.begin().await?;
        if !ChatRoomUserRepository::new(&txn)
            .exists(room_id, user_id)
            .await?
        {
            return Err(AppError::NotFound(
                "Not a member of this room".to_string(),
            ));
        }
        leave_room(&txn, room_id, user_id).await?;
        txn.commit().await?;

        Ok(())
    }

    pub async fn members(
        &self,
        room_id: i32,
        caller_id: i32,
    ) -> Result<Vec<ChatRoomMember>, AppError> {
        self.ensure_member(room_id, caller_id).await?;

        Ok(ChatRoomUserRepository::new(self.db)
            .find_members(room_id)
            .await?)
    }

    pub async fn messages(
        &self,
        room_id: i32,
        caller_id: i32,
    ) -> Result<Vec<ChatMessage>, AppError> {
        self.ensure_member(room_id, caller_id).await?;

        Ok(ChatMessageRepository::new(self.db)
            .find_by_room(room_id)
            .await?)
    }

    pub async fn send(
        &self,
        room_id: i32,
        sender_id: i32,
        content: String,
    ) -> Result<ChatMessage, AppError> {
        if content.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Message must not be empty".to_string(),
            ));
        }
        self.ensure_member(room_id, sender_id).await?;

        Ok(ChatMessageRepository::new(self.db)
            .create(room_id, sender_id, content)
            .await?)
    }

    async fn find_room(&self, room_id: i32) -> Result<ChatRoom, AppError> {
        ChatRoomRepository::new(self.db)
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Chat room {} not found", room_id)))
    }

    async fn ensure_member(&self, room_id: i32, user_id: i32) -> Result<(), AppError> {
        self.find_room(room_id).await?;

        if !ChatRoomUserRepository::new(self.db)
            .exists(room_id, user_id)
            .await?
        {
            return Err(AppError::Forbidden(
                "Not a member of this room".to_string(),
            ));
        }

        Ok(())
    }
}

/// Removes a user from a room and deletes the room if it became empty.
pub(crate) async fn leave_room<C: ConnectionTrait>(
    db: &C,
    room_id: i32,
    user_id: i32,
) -> Result<(), AppError> {
    let repo = ChatRoomUserRepository::new(db);
    repo.delete(room_id, user_id).await?;

    if repo.count_by_room(room_id).await? == 0 {
        delete_room_tree(db, room_id).await?;
        tracing::debug!("Deleted empty chat room {}", room_id);
    }

    Ok(())
}

/// Deletes a room after its messages and members.
pub(crate) async fn delete_room_tree<C: ConnectionTrait>(db: &C, room_id: i32) -> Result<(), AppError> {
    ChatMessageRepository::new(db).delete_by_room(room_id).await?;
    ChatRoomUserRepository::new(db)
        .delete_by_room(room_id)
        .await?;
    ChatRoomRepository::new(db).delete(room_id).await?;

    Ok(())
}
