use crate::server::{
    error::AppError,
    model::{
        plan::{CreatePlanParams, UpdatePlanParams},
        plan_user::PlanUserStatus,
    },
    service::plan::PlanService,
};
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod copy;
mod create;
mod list;
