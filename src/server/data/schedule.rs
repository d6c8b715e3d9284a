//! Schedule data repository.
//!
//! A schedule row references its own location row plus optional vehicle and budget
//! rows. The repository creates, replaces and deletes those sub-rows together with
//! the schedule so callers only deal with the resolved `Schedule` model.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::schedule::{Location, Schedule, ScheduleParams};

pub struct ScheduleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ScheduleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a schedule with its location and optional vehicle and budget rows.
    pub async fn create(&self, params: ScheduleParams) -> Result<Schedule, DbErr> {
        let location = self.insert_location(params.location).await?;
        let vehicle = self.insert_vehicle(params.vehicle).await?;
        let budget = self.insert_budget(params.budget).await?;

        let entity = entity::schedule::ActiveModel {
            plan_id: ActiveValue::Set(params.plan_id),
            status: ActiveValue::Set(params.status),
            travel_day_count: ActiveValue::Set(params.travel_day_count),
            description: ActiveValue::Set(params.description),
            travel_time: ActiveValue::Set(params.travel_time),
            location_id: ActiveValue::Set(location.id),
            vehicle_id: ActiveValue::Set(vehicle.as_ref().map(|v| v.id)),
            budget_id: ActiveValue::Set(budget.as_ref().map(|b| b.id)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Schedule::from_entity(entity, location, vehicle, budget))
    }

    pub async fn find_by_id(&self, schedule_id: i32) -> Result<Option<Schedule>, DbErr> {
        let Some(entity) = entity::prelude::Schedule::find_by_id(schedule_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(self.resolve(entity).await?))
    }

    /// Gets the schedules of a plan ordered by day, time of day and insertion.
    pub async fn find_by_plan(&self, plan_id: i32) -> Result<Vec<Schedule>, DbErr> {
        let entities = entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::PlanId.eq(plan_id))
            .order_by_asc(entity::schedule::Column::TravelDayCount)
            .order_by_asc(entity::schedule::Column::TravelTime)
            .order_by_asc(entity::schedule::Column::Id)
            .all(self.db)
            .await?;

        let mut schedules = Vec::with_capacity(entities.len());
        for entity in entities {
            schedules.push(self.resolve(entity).await?);
        }

        Ok(schedules)
    }

    /// Replaces the fields of a schedule.
    ///
    /// The location row is updated in place. Vehicle and budget rows are replaced by
    /// new rows and the previous ones deleted.
    pub async fn update(&self, schedule_id: i32, params: ScheduleParams) -> Result<Schedule, DbErr> {
        let existing = entity::prelude::Schedule::find_by_id(schedule_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Schedule with id {} not found",
                schedule_id
            )))?;

        let location = entity::location::ActiveModel {
            id: ActiveValue::Unchanged(existing.location_id),
            name: ActiveValue::Set(params.location.name),
            latitude: ActiveValue::Set(params.location.latitude),
            longitude: ActiveValue::Set(params.location.longitude),
        }
        .update(self.db)
        .await?;
        let vehicle = self.insert_vehicle(params.vehicle).await?;
        let budget = self.insert_budget(params.budget).await?;

        let entity = entity::schedule::ActiveModel {
            id: ActiveValue::Unchanged(schedule_id),
            status: ActiveValue::Set(params.status),
            travel_day_count: ActiveValue::Set(params.travel_day_count),
            description: ActiveValue::Set(params.description),
            travel_time: ActiveValue::Set(params.travel_time),
            vehicle_id: ActiveValue::Set(vehicle.as_ref().map(|v| v.id)),
            budget_id: ActiveValue::Set(budget.as_ref().map(|b| b.id)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        self.delete_extras(existing.vehicle_id, existing.budget_id)
            .await?;

        Ok(Schedule::from_entity(entity, location, vehicle, budget))
    }

    /// Deletes a schedule and its location, vehicle and budget rows.
    ///
    /// # Returns
    /// - `Ok(true)` - Schedule deleted
    /// - `Ok(false)` - No schedule with that ID
    pub async fn delete(&self, schedule_id: i32) -> Result<bool, DbErr> {
        let Some(existing) = entity::prelude::Schedule::find_by_id(schedule_id)
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        entity::prelude::Schedule::delete_by_id(existing.id)
            .exec(self.db)
            .await?;
        entity::prelude::Location::delete_by_id(existing.location_id)
            .exec(self.db)
            .await?;
        self.delete_extras(existing.vehicle_id, existing.budget_id)
            .await?;

        Ok(true)
    }

    /// Deletes every schedule of a plan with their sub-rows.
    pub async fn delete_by_plan(&self, plan_id: i32) -> Result<u64, DbErr> {
        let ids: Vec<i32> = entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::PlanId.eq(plan_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|s| s.id)
            .collect();

        let mut deleted = 0;
        for id in ids {
            if self.delete(id).await? {
                deleted += 1;
            }
        }

        Ok(deleted)
    }

    async fn resolve(&self, entity: entity::schedule::Model) -> Result<Schedule, DbErr> {
        let location = entity::prelude::Location::find_by_id(entity.location_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Location with id {} not found for schedule {}",
                entity.location_id, entity.id
            )))?;

        let vehicle = match entity.vehicle_id {
            Some(id) => entity::prelude::Vehicle::find_by_id(id).one(self.db).await?,
            None => None,
        };
        let budget = match entity.budget_id {
            Some(id) => entity::prelude::Budget::find_by_id(id).one(self.db).await?,
            None => None,
        };

        Ok(Schedule::from_entity(entity, location, vehicle, budget))
    }

    async fn insert_location(&self, location: Location) -> Result<entity::location::Model, DbErr> {
        entity::location::ActiveModel {
            name: ActiveValue::Set(location.name),
            latitude: ActiveValue::Set(location.latitude),
            longitude: ActiveValue::Set(location.longitude),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    async fn insert_vehicle(
        &self,
        vehicle: Option<String>,
    ) -> Result<Option<entity::vehicle::Model>, DbErr> {
        let Some(vehicle) = vehicle else {
            return Ok(None);
        };

        let entity = entity::vehicle::ActiveModel {
            vehicle: ActiveValue::Set(vehicle),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Some(entity))
    }

    async fn insert_budget(&self, amount: Option<i64>) -> Result<Option<entity::budget::Model>, DbErr> {
        let Some(amount) = amount else {
            return Ok(None);
        };

        let entity = entity::budget::ActiveModel {
            amount: ActiveValue::Set(amount),
            description: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Some(entity))
    }

    async fn delete_extras(
        &self,
        vehicle_id: Option<i32>,
        budget_id: Option<i32>,
    ) -> Result<(), DbErr> {
        if let Some(id) = vehicle_id {
            entity::prelude::Vehicle::delete_by_id(id)
                .exec(self.db)
                .await?;
        }
        if let Some(id) = budget_id {
            entity::prelude::Budget::delete_by_id(id)
                .exec(self.db)
                .await?;
        }

        Ok(())
    }
}
