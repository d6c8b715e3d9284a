use crate::server::{
    data::plan::PlanRepository,
    model::plan::{CreatePlanParams, UpdatePlanParams},
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_member;
mod update;
