use crate::server::{
    error::AppError,
    model::{plan_user::PlanUserStatus, user::User},
    service::plan_user::PlanUserService,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod accept;
mod invite;
