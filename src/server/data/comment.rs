//! Comment data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::comment::Comment;

pub struct CommentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        plan_id: i32,
        content: String,
    ) -> Result<Comment, DbErr> {
        let now = Utc::now();
        let entity = entity::comment::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            plan_id: ActiveValue::Set(plan_id),
            content: ActiveValue::Set(content),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.with_author(entity).await
    }

    pub async fn find_by_id(&self, comment_id: i32) -> Result<Option<Comment>, DbErr> {
        let row = entity::prelude::Comment::find_by_id(comment_id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(row.map(|(comment, author)| Comment::from_entity(comment, author)))
    }

    /// Gets the comments of a plan oldest first.
    pub async fn find_by_plan(&self, plan_id: i32) -> Result<Vec<Comment>, DbErr> {
        let rows = entity::prelude::Comment::find()
            .filter(entity::comment::Column::PlanId.eq(plan_id))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(comment, author)| Comment::from_entity(comment, author))
            .collect())
    }

    /// Replaces the content of a comment and bumps its update time.
    pub async fn update(&self, comment_id: i32, content: String) -> Result<Comment, DbErr> {
        let entity = entity::comment::ActiveModel {
            id: ActiveValue::Unchanged(comment_id),
            content: ActiveValue::Set(content),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        self.with_author(entity).await
    }

    pub async fn delete(&self, comment_id: i32) -> Result<(), DbErr> {
        entity::prelude::Comment::delete_by_id(comment_id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete_by_plan(&self, plan_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::PlanId.eq(plan_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn with_author(&self, entity: entity::comment::Model) -> Result<Comment, DbErr> {
        let author = entity::prelude::User::find_by_id(entity.user_id)
            .one(self.db)
            .await?;

        Ok(Comment::from_entity(entity, author))
    }
}
