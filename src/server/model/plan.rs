//! Plan domain models and parameters.
//!
//! A plan is the aggregate root of a trip: it owns its schedules and memberships, and
//! is annotated by comments, likes and bookmarks.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::plan::{CreatePlanDto, PlanDetailDto, PlanDto, PlanListDto, UpdatePlanDto},
    server::model::{comment::Comment, plan_user::PlanMember, schedule::Schedule},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub id: i32,
    /// Owner of the plan.
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

impl Plan {
    pub fn into_dto(self) -> PlanDto {
        PlanDto {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            location: self.location,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            total_budget: self.total_budget,
            is_public: self.is_public,
            status: self.status,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::plan::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            location: entity.location,
            description: entity.description,
            start_date: entity.start_date,
            end_date: entity.end_date,
            total_budget: entity.total_budget,
            is_public: entity.is_public,
            status: entity.status,
            created_at: entity.created_at,
        }
    }
}

/// Plan projected for listings with its counters and owner nickname.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanSummary {
    pub plan: Plan,
    pub bookmark_count: u64,
    pub like_count: u64,
    pub nickname: String,
}

impl PlanSummary {
    pub fn into_dto(self) -> PlanListDto {
        PlanListDto {
            id: self.plan.id,
            title: self.plan.title,
            location: self.plan.location,
            description: self.plan.description,
            start_date: self.plan.start_date,
            end_date: self.plan.end_date,
            bookmark_count: self.bookmark_count,
            like_count: self.like_count,
            nickname: self.nickname,
        }
    }
}

/// Full view of a plan with every child collection.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanDetail {
    pub plan: Plan,
    pub owner_nickname: String,
    pub schedules: Vec<Schedule>,
    pub members: Vec<PlanMember>,
    pub comments: Vec<Comment>,
    pub like_count: u64,
    pub bookmark_count: u64,
}

impl PlanDetail {
    pub fn into_dto(self) -> PlanDetailDto {
        PlanDetailDto {
            plan: self.plan.into_dto(),
            owner_nickname: self.owner_nickname,
            schedules: self.schedules.into_iter().map(Schedule::into_dto).collect(),
            members: self.members.into_iter().map(PlanMember::into_dto).collect(),
            comments: self.comments.into_iter().map(Comment::into_dto).collect(),
            like_count: self.like_count,
            bookmark_count: self.bookmark_count,
        }
    }
}

/// Fields of a new plan row.
#[derive(Debug, Clone)]
pub struct CreatePlanParams {
    pub user_id: i32,
    pub title: String,
    pub location: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_budget: i64,
    pub is_public: bool,
    pub status: bool,
}

impl CreatePlanParams {
    pub fn from_dto(user_id: i32, dto: CreatePlanDto) -> Self {
        Self {
            user_id,
            title: dto.title,
            location: dto.location,
            description: dto.description,
            start_date: dto.start_date,
            end_date: dto.end_date,
            total_budget: dto.total_budget,
            is_public: dto.is_public,
            status: false,
        }
    }

    /// Builds the fields of a private, unfinished copy of `source` owned by `user_id`.
    pub fn copy_of(source: &Plan, user_id: i32) -> Self {
        Self {
            user_id,
            title: source.title.clone(),
            location: source.location.clone(),
            description: source.description.clone(),
            start_date: source.start_date,
            end_date: source.end_date,
            total_budget: source.total_budget,
            is_public: false,
            status: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdatePlanParams {
    pub id: i32,
    pub title: String,
    pub location: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_budget: i64,
    pub is_public: bool,
    pub status: bool,
}

impl UpdatePlanParams {
    pub fn from_dto(id: i32, dto: UpdatePlanDto) -> Self {
        Self {
            id,
            title: dto.title,
            location: dto.location,
            description: dto.description,
            start_date: dto.start_date,
            end_date: dto.end_date,
            total_budget: dto.total_budget,
            is_public: dto.is_public,
            status: dto.status,
        }
    }
}
