//! User domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::user::{OAuthAdditionalInfoDto, SignUpDto, UserDto};

/// Authorization role stored on each account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "ROLE_USER",
            Role::Admin => "ROLE_ADMIN",
        }
    }

    /// Reads a stored role, treating anything unrecognized as a regular user.
    pub fn from_db(value: &str) -> Self {
        match value {
            "ROLE_ADMIN" => Role::Admin,
            _ => Role::User,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub nickname: String,
    /// Argon2 PHC string, `None` for accounts created through OAuth2.
    pub password_hash: Option<String>,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub role: Role,
    pub provider: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            nickname: self.nickname,
            name: self.name,
            role: self.role.as_str().to_string(),
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            nickname: entity.nickname,
            password_hash: entity.password,
            name: entity.name,
            birth_date: entity.birth_date,
            gender: entity.gender,
            role: Role::from_db(&entity.role),
            provider: entity.provider,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for inserting a new account.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub nickname: String,
    pub password_hash: Option<String>,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub role: Role,
    pub provider: Option<String>,
    pub provider_id: Option<String>,
}

/// Raw signup input; the password is hashed by the auth service before storage.
#[derive(Debug, Clone)]
pub struct SignUpParams {
    pub username: String,
    pub email: String,
    pub password: String,
    pub nickname: String,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
}

impl SignUpParams {
    pub fn from_dto(dto: SignUpDto) -> Self {
        Self {
            username: dto.username,
            email: dto.email,
            password: dto.password,
            nickname: dto.nickname,
            name: dto.name,
            birth_date: dto.birth_date,
            gender: dto.gender,
        }
    }
}

/// Profile fields completed after an OAuth2 signup.
#[derive(Debug, Clone)]
pub struct UpdateProfileParams {
    pub user_id: i32,
    pub nickname: String,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
}

/// Profile completion submitted with the OAuth2 hand-off token.
#[derive(Debug, Clone)]
pub struct AdditionalInfoParams {
    pub token: String,
    pub nickname: String,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
}

impl AdditionalInfoParams {
    pub fn from_dto(dto: OAuthAdditionalInfoDto) -> Self {
        Self {
            token: dto.token,
            nickname: dto.nickname,
            name: dto.name,
            birth_date: dto.birth_date,
            gender: dto.gender,
        }
    }
}
