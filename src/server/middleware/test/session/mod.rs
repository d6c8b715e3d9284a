use crate::server::{error::AppError, middleware::session::CsrfSession};
use test_utils::builder::TestBuilder;
