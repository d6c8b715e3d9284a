//! HTTP handlers.
//!
//! Each handler authenticates the caller through `AuthGuard`, converts the request DTO
//! into service parameters, calls one service method and wraps the result in the
//! `{success, message, data}` envelope.

pub mod alarm;
pub mod auth;
pub mod bookmark;
pub mod chat;
pub mod comment;
pub mod like;
pub mod plan;
pub mod plan_user;
pub mod schedule;
pub mod user;
