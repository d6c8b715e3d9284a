//! Transport shapes exchanged with API clients.

pub mod alarm;
pub mod api;
pub mod chat;
pub mod comment;
pub mod plan;
pub mod user;
