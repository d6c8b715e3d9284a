use sea_orm::DatabaseConnection;

use crate::server::{data::like::LikeRepository, error::AppError, service::plan::PlanService};

pub struct LikeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LikeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a plan as liked by the user.
    ///
    /// # Returns
    /// - `Ok(())` - Like recorded
    /// - `Err(AppError::NotFound)` - Plan does not exist or is private to its members
    /// - `Err(AppError::Conflict)` - User already liked the plan
    pub async fn add(&self, user_id: i32, plan_id: i32) -> Result<(), AppError> {
        PlanService::new(self.db).get_visible(plan_id, user_id).await?;

        let repo = LikeRepository::new(self.db);
        if repo.exists(user_id, plan_id).await? {
            return Err(AppError::Conflict(format!(
                "Plan {} is already liked",
                plan_id
            )));
        }

        repo.create(user_id, plan_id).await?;

        Ok(())
    }

    pub async fn remove(&self, user_id: i32, plan_id: i32) -> Result<(), AppError> {
        if !LikeRepository::new(self.db)
            .delete(user_id, plan_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Plan {} is not liked",
                plan_id
            )));
        }

        Ok(())
    }

    pub async fn count(&self, plan_id: i32) -> Result<u64, AppError> {
        Ok(LikeRepository::new(self.db).count_by_plan(plan_id).await?)
    }
}
