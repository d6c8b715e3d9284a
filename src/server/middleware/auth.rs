use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{plan::PlanRepository, plan_user::PlanUserRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::User,
    service::token::JwtTokenizer,
};

pub enum Permission {
    Admin,
    /// Accepted member of the plan with the given ID.
    PlanMember(i32),
    PlanOwner(i32),
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtTokenizer,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtTokenizer, headers: &'a HeaderMap) -> Self {
        Self { db, jwt, headers }
    }

    /// Authenticates the bearer token and checks every permission in order.
    ///
    /// Admins pass plan permission checks without being members.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding all permissions
    /// - `Err(AuthError::MissingToken)` - No bearer token in the request
    /// - `Err(AuthError::InvalidToken | ExpiredToken)` - Token failed verification
    /// - `Err(AuthError::UserNotInDatabase)` - Token subject no longer exists
    /// - `Err(AppError::NotFound)` - A plan named by a permission does not exist
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let user_id = self.jwt.parse_access_token(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an admin operation without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::PlanMember(plan_id) => {
                    self.find_plan(*plan_id).await?;

                    if user.is_admin() {
                        continue;
                    }

                    if !PlanUserRepository::new(self.db)
                        .is_accepted_member(*plan_id, user_id)
                        .await?
                    {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!("User is not an accepted member of plan {}", plan_id),
                        )
                        .into());
                    }
                }
                Permission::PlanOwner(plan_id) => {
                    let owner_id = self.find_plan(*plan_id).await?;

                    if !user.is_admin() && owner_id != user_id {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!("User does not own plan {}", plan_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Returns the owner of the plan.
    async fn find_plan(&self, plan_id: i32) -> Result<i32, AppError> {
        PlanRepository::new(self.db)
            .find_by_id(plan_id)
            .await?
            .map(|plan| plan.user_id)
            .ok_or_else(|| AppError::NotFound(format!("Plan {} not found", plan_id)))
    }
}
