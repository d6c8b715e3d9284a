//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They enforce the business rules that go beyond a single permission check, run
//! multi-step writes inside one database transaction and convert repository errors
//! into `AppError` with `?`.
//!
//! Services borrow the database connection and are created per request:
//!
//! ```rust,ignore
//! let plan = PlanService::new(&state.db).create(params).await?;
//! ```

pub mod alarm;
pub mod auth;
pub mod bookmark;
pub mod chat;
pub mod comment;
pub mod like;
pub mod password;
pub mod plan;
pub mod plan_user;
pub mod schedule;
pub mod token;
pub mod user;

#[cfg(test)]
mod test;
