//! SeaORM entity definitions for the todotravel schema.
//!
//! Each module mirrors one table created by the `migration` crate. Child rows are
//! removed by explicit repository deletes, so relations declare no cascading actions.

pub mod prelude;

pub mod alarm;
pub mod bookmark;
pub mod budget;
pub mod chat_message;
pub mod chat_room;
pub mod chat_room_user;
pub mod comment;
pub mod like;
pub mod location;
pub mod plan;
pub mod plan_user;
pub mod refresh_token;
pub mod schedule;
pub mod user;
pub mod vehicle;
