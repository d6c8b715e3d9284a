//! User data repository for database operations.
//!
//! Provides the `UserRepository` for managing account records, including the lookups
//! used by signup validation, login and account recovery.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParams, UpdateProfileParams, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            nickname: ActiveValue::Set(params.nickname),
            password: ActiveValue::Set(params.password_hash),
            name: ActiveValue::Set(params.name),
            birth_date: ActiveValue::Set(params.birth_date),
            gender: ActiveValue::Set(params.gender),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            provider: ActiveValue::Set(params.provider),
            provider_id: ActiveValue::Set(params.provider_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds the account registered with both the given real name and email.
    pub async fn find_by_name_and_email(
        &self,
        name: &str,
        email: &str,
    ) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Name.eq(name))
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn exists_by_username(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn exists_by_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn exists_by_nickname(&self, nickname: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Nickname.eq(nickname))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets every user ordered by nickname.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Nickname)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Overwrites the profile fields filled in after an OAuth2 signup.
    pub async fn update_profile(&self, params: UpdateProfileParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            id: ActiveValue::Unchanged(params.user_id),
            nickname: ActiveValue::Set(params.nickname),
            name: ActiveValue::Set(params.name),
            birth_date: ActiveValue::Set(params.birth_date),
            gender: ActiveValue::Set(params.gender),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Replaces the stored password hash of a user.
    pub async fn update_password(&self, user_id: i32, password_hash: String) -> Result<(), DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Unchanged(user_id),
            password: ActiveValue::Set(Some(password_hash)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Deletes a user row. Dependent rows must already be gone.
    pub async fn delete(&self, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
