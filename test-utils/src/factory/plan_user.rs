//! Plan membership factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating plan membership rows.
///
/// Defaults to `PENDING` status, matching a fresh invitation.
pub struct PlanUserFactory<'a> {
    db: &'a DatabaseConnection,
    plan_id: i32,
    user_id: i32,
    status: String,
}

impl<'a> PlanUserFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, plan_id: i32, user_id: i32) -> Self {
        Self {
            db,
            plan_id,
            user_id,
            status: "PENDING".to_string(),
        }
    }

    /// Sets the membership status (`ACCEPTED`, `PENDING` or `DECLINED`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::plan_user::Model, DbErr> {
        entity::plan_user::ActiveModel {
            plan_id: ActiveValue::Set(self.plan_id),
            user_id: ActiveValue::Set(self.user_id),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Adds a user to a plan as an accepted member.
pub async fn create_member(
    db: &DatabaseConnection,
    plan_id: i32,
    user_id: i32,
) -> Result<entity::plan_user::Model, DbErr> {
    PlanUserFactory::new(db, plan_id, user_id)
        .status("ACCEPTED")
        .build()
        .await
}

/// Adds a pending invitation for a user to a plan.
pub async fn create_invitation(
    db: &DatabaseConnection,
    plan_id: i32,
    user_id: i32,
) -> Result<entity::plan_user::Model, DbErr> {
    PlanUserFactory::new(db, plan_id, user_id).build().await
}
