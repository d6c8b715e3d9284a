use chrono::Duration;

use crate::server::service::token::JwtTokenizer;

mod auth;
mod chat;
mod plan;
mod plan_user;
mod schedule;
mod social;
mod user;

/// Tokenizer with fixed test secrets.
fn test_tokenizer() -> JwtTokenizer {
    JwtTokenizer::new(
        "access-secret-for-tests-minimum-32-chars",
        "refresh-secret-for-tests-minimum-32-chars",
        Duration::minutes(30),
        Duration::days(7),
    )
}
