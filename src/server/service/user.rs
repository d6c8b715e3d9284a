//! Account listing and deletion.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        alarm::AlarmRepository, bookmark::BookmarkRepository, chat_message::ChatMessageRepository,
        chat_room::ChatRoomRepository, chat_room_user::ChatRoomUserRepository,
        comment::CommentRepository, like::LikeRepository, plan::PlanRepository,
        plan_user::PlanUserRepository, refresh_token::RefreshTokenRepository,
        user::UserRepository,
    },
    error::AppError,
    model::user::User,
    service::{chat::delete_room_tree, plan::delete_plan_tree},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Deletes an account and every row that belongs to it in one transaction.
    ///
    /// Plans owned by the user are deleted with all their children. In other plans the
    /// user's memberships, comments, likes, bookmarks, chat memberships and messages are
    /// removed; chat rooms left without members are deleted.
    ///
    /// # Returns
    /// - `Ok(())` - Account deleted
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn delete(&self, user_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);
        if user_repo.find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        }

        for plan in PlanRepository::new(&txn).find_by_owner(user_id).await? {
            delete_plan_tree(&txn, plan.id).await?;
        }

        let rooms = ChatRoomRepository::new(&txn).find_by_user(user_id).await?;
        let room_user_repo = ChatRoomUserRepository::new(&txn);
        room_user_repo.delete_by_user(user_id).await?;
        ChatMessageRepository::new(&txn)
            .delete_by_user(user_id)
            .await?;
        for room in rooms {
            if room_user_repo.count_by_room(room.id).await? == 0 {
                delete_room_tree(&txn, room.id).await?;
            }
        }

        RefreshTokenRepository::new(&txn)
            .delete_by_user(user_id)
            .await?;
        AlarmRepository::new(&txn).delete_by_user(user_id).await?;
        LikeRepository::new(&txn).delete_by_user(user_id).await?;
        BookmarkRepository::new(&txn).delete_by_user(user_id).await?;
        CommentRepository::new(&txn).delete_by_user(user_id).await?;
        PlanUserRepository::new(&txn).delete_by_user(user_id).await?;
        user_repo.delete(user_id).await?;

        txn.commit().await?;

        tracing::info!("Deleted user {}", user_id);

        Ok(())
    }
}
