use sea_orm::DatabaseConnection;

use crate::server::{
    data::comment::CommentRepository,
    error::AppError,
    model::{comment::Comment, user::User},
    service::plan::PlanService,
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, plan_id: i32, viewer_id: i32) -> Result<Vec<Comment>, AppError> {
        PlanService::new(self.db)
            .get_visible(plan_id, viewer_id)
            .await?;

        Ok(CommentRepository::new(self.db).find_by_plan(plan_id).await?)
    }

    /// Posts a comment on a plan the author can see.
    pub async fn create(
        &self,
        author_id: i32,
        plan_id: i32,
        content: String,
    ) -> Result<Comment, AppError> {
        let content = validate_content(content)?;
        PlanService::new(self.db)
            .get_visible(plan_id, author_id)
            .await?;

        Ok(CommentRepository::new(self.db)
            .create(author_id, plan_id, content)
            .await?)
    }

    /// Replaces the content of a comment. Only its author may edit it.
    pub async fn update(
        &self,
        comment_id: i32,
        caller: &User,
        content: String,
    ) -> Result<Comment, AppError> {
        let content = validate_content(content)?;
        let comment = self.find(comment_id).await?;

        if comment.user_id != caller.id {
            return Err(AppError::Forbidden(
                "Only the author can edit a comment".to_string(),
            ));
        }

        Ok(CommentRepository::new(self.db)
            .update(comment_id, content)
            .await?)
    }

    /// Deletes a comment. Its author and admins may delete it.
    pub async fn delete(&self, comment_id: i32, caller: &User) -> Result<(), AppError> {
        let comment = self.find(comment_id).await?;

        if comment.user_id != caller.id && !caller.is_admin() {
            return Err(AppError::Forbidden(
                "Only the author can delete a comment".to_string(),
            ));
        }

        Ok(CommentRepository::new(self.db).delete(comment_id).await?)
    }

    async fn find(&self, comment_id: i32) -> Result<Comment, AppError> {
        CommentRepository::new(self.db)
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Comment {} not found", comment_id)))
    }
}

fn validate_content(content: String) -> Result<String, AppError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(
            "Comment content must not be empty".to_string(),
        ));
    }

    Ok(trimmed.to_string())
}
