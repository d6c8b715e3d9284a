use chrono::{DateTime, Utc};

use crate::model::alarm::AlarmDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Alarm {
    pub id: i32,
    pub user_id: i32,
    pub content: String,
    pub is_checked: bool,
    pub created_at: DateTime<Utc>,
}

impl Alarm {
    pub fn into_dto(self) -> AlarmDto {
        AlarmDto {
            id: self.id,
            content: self.content,
            is_checked: self.is_checked,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::alarm::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            content: entity.content,
            is_checked: entity.is_checked,
            created_at: entity.created_at,
        }
    }
}

/// Notification to deliver to a single recipient.
#[derive(Debug, Clone, PartialEq)]
pub struct AlarmRequest {
    pub user_id: i32,
    pub content: String,
}

impl AlarmRequest {
    /// Notification sent to a plan's owner after the plan is edited.
    pub fn plan_updated(owner_id: i32, title: &str) -> Self {
        Self {
            user_id: owner_id,
            content: format!("[{}] plan has been updated.", title),
        }
    }

    /// Notification sent to a user invited to a plan.
    pub fn plan_invitation(invitee_id: i32, title: &str) -> Self {
        Self {
            user_id: invitee_id,
            content: format!("You have been invited to [{}].", title),
        }
    }
}
