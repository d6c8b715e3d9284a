use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AlarmDto {
    pub id: i32,
    pub content: String,
    pub is_checked: bool,
    pub created_at: DateTime<Utc>,
}
