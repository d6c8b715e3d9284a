use crate::server::{
    error::{auth::AuthError, AppError},
    model::{
        auth::OAuthOutcome,
        user::{AdditionalInfoParams, SignUpParams},
    },
    service::{
        auth::{
            oauth::{OAuthService, ProviderProfile},
            AuthService,
        },
        password::hash_password,
    },
    startup::setup_oauth_client,
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use super::test_tokenizer;

mod login;
mod refresh;
mod signup;

fn auth_tables() -> TestBuilder {
    TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::RefreshToken)
}

/// Creates a user whose password is `secret123`.
async fn create_user_with_password(
    db: &DatabaseConnection,
    username: &str,
) -> Result<entity::user::Model, AppError> {
    let hash = hash_password("secret123")?;

    Ok(factory::user::UserFactory::new(db)
        .username(username)
        .password(hash)
        .build()
        .await?)
}
