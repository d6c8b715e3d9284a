use crate::server::data::{bookmark::BookmarkRepository, like::LikeRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod bookmark;
mod like;
