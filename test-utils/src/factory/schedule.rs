//! Schedule factory.
//!
//! Schedules always reference a location, so the factory inserts one alongside
//! each schedule unless an existing location id is supplied.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating schedule rows with their location.
pub struct ScheduleFactory<'a> {
    db: &'a DatabaseConnection,
    plan_id: i32,
    travel_day_count: i32,
    description: Option<String>,
    status: bool,
    location_id: Option<i32>,
}

impl<'a> ScheduleFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, plan_id: i32) -> Self {
        Self {
            db,
            plan_id,
            travel_day_count: 1,
            description: Some(format!("Stop {}", next_id())),
            status: false,
            location_id: None,
        }
    }

    pub fn travel_day_count(mut self, day: i32) -> Self {
        self.travel_day_count = day;
        self
    }

    pub fn status(mut self, status: bool) -> Self {
        self.status = status;
        self
    }

    /// Reuses an existing location instead of inserting a new one.
    pub fn location_id(mut self, location_id: i32) -> Self {
        self.location_id = Some(location_id);
        self
    }

    pub async fn build(self) -> Result<entity::schedule::Model, DbErr> {
        let location_id = match self.location_id {
            Some(id) => id,
            None => create_location(self.db).await?.id,
        };

        entity::schedule::ActiveModel {
            plan_id: ActiveValue::Set(self.plan_id),
            status: ActiveValue::Set(self.status),
            travel_day_count: ActiveValue::Set(self.travel_day_count),
            description: ActiveValue::Set(self.description),
            travel_time: ActiveValue::Set(None),
            location_id: ActiveValue::Set(location_id),
            vehicle_id: ActiveValue::Set(None),
            budget_id: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Inserts a location with a unique name.
pub async fn create_location(db: &DatabaseConnection) -> Result<entity::location::Model, DbErr> {
    entity::location::ActiveModel {
        name: ActiveValue::Set(format!("Location {}", next_id())),
        latitude: ActiveValue::Set(37.5665),
        longitude: ActiveValue::Set(126.978),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a day-one schedule for a plan.
pub async fn create_schedule(
    db: &DatabaseConnection,
    plan_id: i32,
) -> Result<entity::schedule::Model, DbErr> {
    ScheduleFactory::new(db, plan_id).build().await
}
