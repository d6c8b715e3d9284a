//! Domain models and operation parameter types.
//!
//! Repositories convert SeaORM entity models into these types at the data boundary,
//! and controllers convert them into transport DTOs. Parameter types carry the input of
//! a single service operation.

pub mod alarm;
pub mod auth;
pub mod chat;
pub mod comment;
pub mod plan;
pub mod plan_user;
pub mod schedule;
pub mod user;
