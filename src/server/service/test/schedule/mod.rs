use crate::server::{
    error::AppError,
    model::schedule::{Location, ScheduleParams},
    service::schedule::ScheduleService,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;

fn params(plan_id: i32) -> ScheduleParams {
    ScheduleParams {
        plan_id,
        status: false,
        travel_day_count: 1,
        description: Some("Sunrise peak".to_string()),
        travel_time: None,
        location: Location {
            name: "Seongsan Ilchulbong".to_string(),
            latitude: 33.458,
            longitude: 126.942,
        },
        vehicle: Some("Car".to_string()),
        budget: Some(5_000),
    }
}
