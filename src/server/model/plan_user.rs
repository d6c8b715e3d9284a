//! Plan membership models.

use crate::model::plan::PlanUserDto;

/// Lifecycle of a membership row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanUserStatus {
    Accepted,
    Pending,
    Declined,
}

impl PlanUserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanUserStatus::Accepted => "ACCEPTED",
            PlanUserStatus::Pending => "PENDING",
            PlanUserStatus::Declined => "DECLINED",
        }
    }

    /// Reads a stored status; unrecognized values are treated as pending.
    pub fn from_db(value: &str) -> Self {
        match value {
            "ACCEPTED" => PlanUserStatus::Accepted,
            "DECLINED" => PlanUserStatus::Declined,
            _ => PlanUserStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanUser {
    pub id: i32,
    pub plan_id: i32,
    pub user_id: i32,
    pub status: PlanUserStatus,
}

impl PlanUser {
    pub fn from_entity(entity: entity::plan_user::Model) -> Self {
        Self {
            id: entity.id,
            plan_id: entity.plan_id,
            user_id: entity.user_id,
            status: PlanUserStatus::from_db(&entity.status),
        }
    }
}

/// Membership joined with the member's nickname for display.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanMember {
    pub membership: PlanUser,
    pub nickname: String,
}

impl PlanMember {
    pub fn into_dto(self) -> PlanUserDto {
        PlanUserDto {
            id: self.membership.id,
            plan_id: self.membership.plan_id,
            user_id: self.membership.user_id,
            nickname: self.nickname,
            status: self.membership.status.as_str().to_string(),
        }
    }
}
