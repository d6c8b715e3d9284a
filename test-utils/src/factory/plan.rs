//! Plan factory for creating test plan entities.
//!
//! The factory only inserts the plan row. Use
//! [`create_plan_with_owner`](crate::factory::helpers::create_plan_with_owner) when the
//! owner's membership row is needed as well.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test plans with customizable fields.
pub struct PlanFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    title: String,
    location: String,
    description: Option<String>,
    start_date: NaiveDate,
    end_date: NaiveDate,
    total_budget: i64,
    is_public: bool,
    status: bool,
}

impl<'a> PlanFactory<'a> {
    /// Creates a new PlanFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Plan {id}"`
    /// - location: `"Seoul"`
    /// - dates: 2024-07-01 to 2024-07-03
    /// - total_budget: `100000`
    /// - is_public: `true`
    /// - status: `false`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            title: format!("Plan {}", id),
            location: "Seoul".to_string(),
            description: Some(format!("Description {}", id)),
            start_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap_or_default(),
            end_date: NaiveDate::from_ymd_opt(2024, 7, 3).unwrap_or_default(),
            total_budget: 100_000,
            is_public: true,
            status: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn total_budget(mut self, total_budget: i64) -> Self {
        self.total_budget = total_budget;
        self
    }

    pub fn is_public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    pub fn status(mut self, status: bool) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the plan entity into the database.
    pub async fn build(self) -> Result<entity::plan::Model, DbErr> {
        entity::plan::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            location: ActiveValue::Set(self.location),
            description: ActiveValue::Set(self.description),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            total_budget: ActiveValue::Set(self.total_budget),
            is_public: ActiveValue::Set(self.is_public),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a public plan with default values for the given owner.
pub async fn create_plan(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::plan::Model, DbErr> {
    PlanFactory::new(db, user_id).build().await
}

/// Creates a private plan with default values for the given owner.
pub async fn create_private_plan(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::plan::Model, DbErr> {
    PlanFactory::new(db, user_id).is_public(false).build().await
}
