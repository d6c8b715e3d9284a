use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::comment::CommentDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePlanDto {
    pub title: String,
    pub location: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_budget: i64,
    pub is_public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdatePlanDto {
    pub title: String,
    pub location: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_budget: i64,
    pub is_public: bool,
    pub status: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanDto {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub location: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_budget: i64,
    pub is_public: bool,
    pub status: bool,
    pub created_at: DateTime<Utc>,
}

/// Row of a plan listing (public search, bookmarks, likes, own plans).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanListDto {
    pub id: i32,
    pub title: String,
    pub location: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub bookmark_count: u64,
    pub like_count: u64,
    pub nickname: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanDetailDto {
    pub plan: PlanDto,
    pub owner_nickname: String,
    pub schedules: Vec<ScheduleDto>,
    pub members: Vec<PlanUserDto>,
    pub comments: Vec<CommentDto>,
    pub like_count: u64,
    pub bookmark_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationDto {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScheduleDto {
    pub id: i32,
    pub plan_id: i32,
    pub status: bool,
    pub travel_day_count: i32,
    pub description: Option<String>,
    pub travel_time: Option<NaiveTime>,
    pub location: LocationDto,
    pub vehicle: Option<String>,
    pub budget: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateScheduleDto {
    pub travel_day_count: i32,
    pub description: Option<String>,
    pub travel_time: Option<NaiveTime>,
    pub location: LocationDto,
    pub vehicle: Option<String>,
    pub budget: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateScheduleDto {
    pub status: bool,
    pub travel_day_count: i32,
    pub description: Option<String>,
    pub travel_time: Option<NaiveTime>,
    pub location: LocationDto,
    pub vehicle: Option<String>,
    pub budget: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanUserDto {
    pub id: i32,
    pub plan_id: i32,
    pub user_id: i32,
    pub nickname: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InviteDto {
    pub user_id: i32,
}
