//! Schedule domain models and parameters.

use chrono::NaiveTime;

use crate::model::plan::{CreateScheduleDto, LocationDto, ScheduleDto, UpdateScheduleDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn from_dto(dto: LocationDto) -> Self {
        Self {
            name: dto.name,
            latitude: dto.latitude,
            longitude: dto.longitude,
        }
    }

    pub fn into_dto(self) -> LocationDto {
        LocationDto {
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    pub fn from_entity(entity: entity::location::Model) -> Self {
        Self {
            name: entity.name,
            latitude: entity.latitude,
            longitude: entity.longitude,
        }
    }
}

/// One entry of a plan's itinerary with its location, vehicle and budget resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub id: i32,
    pub plan_id: i32,
    pub status: bool,
    pub travel_day_count: i32,
    pub description: Option<String>,
    pub travel_time: Option<NaiveTime>,
    pub location: Location,
    pub vehicle: Option<String>,
    pub budget: Option<i64>,
}

impl Schedule {
    pub fn into_dto(self) -> ScheduleDto {
        ScheduleDto {
            id: self.id,
            plan_id: self.plan_id,
            status: self.status,
            travel_day_count: self.travel_day_count,
            description: self.description,
            travel_time: self.travel_time,
            location: self.location.into_dto(),
            vehicle: self.vehicle,
            budget: self.budget,
        }
    }

    pub fn from_entity(
        entity: entity::schedule::Model,
        location: entity::location::Model,
        vehicle: Option<entity::vehicle::Model>,
        budget: Option<entity::budget::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            plan_id: entity.plan_id,
            status: entity.status,
            travel_day_count: entity.travel_day_count,
            description: entity.description,
            travel_time: entity.travel_time,
            location: Location::from_entity(location),
            vehicle: vehicle.map(|v| v.vehicle),
            budget: budget.map(|b| b.amount),
        }
    }
}

/// Fields of a schedule row, shared by create, update and plan copy.
#[derive(Debug, Clone)]
pub struct ScheduleParams {
    pub plan_id: i32,
    pub status: bool,
    pub travel_day_count: i32,
    pub description: Option<String>,
    pub travel_time: Option<NaiveTime>,
    pub location: Location,
    pub vehicle: Option<String>,
    pub budget: Option<i64>,
}

impl ScheduleParams {
    pub fn from_create_dto(plan_id: i32, dto: CreateScheduleDto) -> Self {
        Self {
            plan_id,
            status: false,
            travel_day_count: dto.travel_day_count,
            description: dto.description,
            travel_time: dto.travel_time,
            location: Location::from_dto(dto.location),
            vehicle: dto.vehicle,
            budget: dto.budget,
        }
    }

    pub fn from_update_dto(plan_id: i32, dto: UpdateScheduleDto) -> Self {
        Self {
            plan_id,
            status: dto.status,
            travel_day_count: dto.travel_day_count,
            description: dto.description,
            travel_time: dto.travel_time,
            location: Location::from_dto(dto.location),
            vehicle: dto.vehicle,
            budget: dto.budget,
        }
    }

    /// Copies a schedule into another plan.
    ///
    /// The copy keeps the day, description, time and location but starts unchecked
    /// and without vehicle or budget.
    pub fn copy_of(source: &Schedule, plan_id: i32) -> Self {
        Self {
            plan_id,
            status: false,
            travel_day_count: source.travel_day_count,
            description: source.description.clone(),
            travel_time: source.travel_time,
            location: source.location.clone(),
            vehicle: None,
            budget: None,
        }
    }
}
