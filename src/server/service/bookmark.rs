use sea_orm::DatabaseConnection;

use crate::server::{data::bookmark::BookmarkRepository, error::AppError, service::plan::PlanService};

pub struct BookmarkService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookmarkService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a plan as bookmarked by the user.
    ///
    /// # Returns
    /// - `Ok(())` - Bookmark recorded
    /// - `Err(AppError::NotFound)` - Plan does not exist or is private to its members
    /// - `Err(AppError::Conflict)` - User already bookmarked the plan
    pub async fn add(&self, user_id: i32, plan_id: i32) -> Result<(), AppError> {
        PlanService::new(self.db).get_visible(plan_id, user_id).await?;

        let repo = BookmarkRepository::new(self.db);
        if repo.exists(user_id, plan_id).await? {
            return Err(AppError::Conflict(format!(
                "Plan {} is already bookmarked",
                plan_id
            )));
        }

        repo.create(user_id, plan_id).await?;

        Ok(())
    }

    pub async fn remove(&self, user_id: i32, plan_id: i32) -> Result<(), AppError> {
        if !BookmarkRepository::new(self.db)
            .delete(user_id, plan_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Plan {} is not bookmarked",
                plan_id
            )));
        }

        Ok(())
    }

    pub async fn count(&self, plan_id: i32) -> Result<u64, AppError> {
        Ok(BookmarkRepository::new(self.db).count_by_plan(plan_id).await?)
    }
}
