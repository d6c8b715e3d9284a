//! Factory methods for creating test data.
//!
//! Each entity has a factory module with a `create_*` convenience function for quick
//! default creation, and a `Factory` builder where tests need to customize fields.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let (owner, plan) = factory::create_plan_with_owner(&db).await?;
//!     let guest = factory::create_user(&db).await?;
//!     factory::create_invitation(&db, plan.id, guest.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let plan = factory::plan::PlanFactory::new(&db, owner.id)
//!     .title("Jeju road trip")
//!     .is_public(false)
//!     .build()
//!     .await?;
//! ```

pub mod alarm;
pub mod chat;
pub mod comment;
pub mod helpers;
pub mod plan;
pub mod plan_user;
pub mod refresh_token;
pub mod schedule;
pub mod social;
pub mod user;

pub use alarm::{create_alarm, create_alarm_with_status};
pub use chat::{create_chat_message, create_chat_room, create_chat_room_at, create_chat_room_user};
pub use comment::create_comment;
pub use helpers::{create_plan_for_owner, create_plan_with_owner};
pub use plan::{create_plan, create_private_plan};
pub use plan_user::{create_invitation, create_member};
pub use refresh_token::{create_refresh_token, create_refresh_token_expiring};
pub use schedule::{create_location, create_schedule};
pub use social::{create_bookmark, create_like};
pub use user::{create_admin, create_user};
