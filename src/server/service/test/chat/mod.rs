use crate::server::{error::AppError, service::chat::ChatService};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod membership;
mod message;
