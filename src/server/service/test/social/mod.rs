use crate::server::{
    error::AppError,
    model::user::User,
    service::{bookmark::BookmarkService, comment::CommentService, like::LikeService},
};
use test_utils::{builder::TestBuilder, factory};

mod bookmark;
mod like;
