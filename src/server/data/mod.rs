//! Database repository layer for all domain entities.
//!
//! Each repository wraps a SeaORM connection and performs the CRUD operations for one
//! entity, converting entity models into domain models at the boundary. Repositories are
//! generic over `ConnectionTrait` so services can run them against the pool or inside a
//! transaction. Child rows are always removed explicitly since the schema declares no
//! cascading deletes.

pub mod alarm;
pub mod bookmark;
pub mod chat_message;
pub mod chat_room;
pub mod chat_room_user;
pub mod comment;
pub mod like;
pub mod plan;
pub mod plan_user;
pub mod refresh_token;
pub mod schedule;
pub mod user;
