use sea_orm::DatabaseConnection;

use crate::server::{
    data::alarm::AlarmRepository,
    error::AppError,
    model::alarm::{Alarm, AlarmRequest},
};

pub struct AlarmService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlarmService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, request: AlarmRequest) -> Result<Alarm, AppError> {
        Ok(AlarmRepository::new(self.db).create(request).await?)
    }

    /// Creates an alarm without letting a failure reach the caller.
    ///
    /// Used for notifications that follow an already committed change.
    pub async fn notify(&self, request: AlarmRequest) {
        let user_id = request.user_id;

        if let Err(e) = self.create(request).await {
            tracing::warn!("Failed to create alarm for user {}: {}", user_id, e);
        }
    }

    pub async fn list(&self, user_id: i32) -> Result<Vec<Alarm>, AppError> {
        Ok(AlarmRepository::new(self.db).find_by_user(user_id).await?)
    }

    pub async fn count_unchecked(&self, user_id: i32) -> Result<u64, AppError> {
        Ok(AlarmRepository::new(self.db)
            .count_unchecked(user_id)
            .await?)
    }

    /// Marks one of the user's alarms as read.
    ///
    /// # Returns
    /// - `Ok(Alarm)` - The checked alarm
    /// - `Err(AppError::NotFound)` - No alarm with that ID
    /// - `Err(AppError::Forbidden)` - The alarm belongs to another user
    pub async fn check(&self, alarm_id: i32, user_id: i32) -> Result<Alarm, AppError> {
        self.find_owned(alarm_id, user_id).await?;

        Ok(AlarmRepository::new(self.db).mark_checked(alarm_id).await?)
    }

    pub async fn delete(&self, alarm_id: i32, user_id: i32) -> Result<(), AppError> {
        self.find_owned(alarm_id, user_id).await?;

        Ok(AlarmRepository::new(self.db).delete(alarm_id).await?)
    }

    async fn find_owned(&self, alarm_id: i32, user_id: i32) -> Result<Alarm, AppError> {
        let alarm = AlarmRepository::new(self.db)
            .find_by_id(alarm_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Alarm not found".to_string()))?;

        if alarm.user_id != user_id {
            return Err(AppError::Forbidden(
                "Alarm belongs to another user".to_string(),
            ));
        }

        Ok(alarm)
    }
}
