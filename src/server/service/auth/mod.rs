//! Local account authentication and token issuance.
//!
//! Login issues an access token returned in the response body and a refresh token
//! that is persisted (one row per user) and handed to the client as a cookie by the
//! controller. The OAuth2 social login flow lives in [`oauth`] and reuses
//! [`AuthService::issue_tokens`] once the account is known.

pub mod oauth;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{refresh_token::RefreshTokenRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        auth::LoginResult,
        user::{CreateUserParams, Role, SignUpParams, User},
    },
    service::{
        password::{hash_password, temp_password, verify_password},
        token::{IssuedToken, JwtTokenizer},
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtTokenizer,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtTokenizer) -> Self {
        Self { db, jwt }
    }

    /// Registers a local account with the `ROLE_USER` role.
    ///
    /// # Returns
    /// - `Ok(User)` - Created account
    /// - `Err(AppError::Conflict)` - Username, email or nickname already taken
    /// - `Err(AppError::InternalErr)` - Password hashing failed
    pub async fn signup(&self, params: SignUpParams) -> Result<User, AppError> {
        self.check_username(&params.username).await?;
        self.check_email(&params.email).await?;
        self.check_nickname(&params.nickname).await?;

        let password_hash = hash_password(&params.password)?;

        let user = UserRepository::new(self.db)
            .create(CreateUserParams {
                username: params.username,
                email: params.email,
                nickname: params.nickname,
                password_hash: Some(password_hash),
                name: params.name,
                birth_date: params.birth_date,
                gender: params.gender,
                role: Role::User,
                provider: None,
                provider_id: None,
            })
            .await?;

        tracing::info!("Registered user {} ({})", user.id, user.username);

        Ok(user)
    }

    /// Validates username and password and issues a token pair.
    ///
    /// Unknown usernames, accounts without a local password and wrong passwords all
    /// fail with the same error so the response does not reveal which part was wrong.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResult, AppError> {
        let Some(user) = UserRepository::new(self.db)
            .find_by_username(username)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let Some(stored_hash) = user.password_hash.as_deref() else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, stored_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        self.issue_tokens(user).await
    }

    /// Issues an access token and a refresh token, replacing the user's stored refresh token.
    pub async fn issue_tokens(&self, user: User) -> Result<LoginResult, AppError> {
        let access = self.jwt.create_access_token(&user)?;
        let refresh = self.jwt.create_refresh_token(&user)?;

        RefreshTokenRepository::new(self.db)
            .upsert(user.id, refresh.token.clone(), refresh.expires_at)
            .await?;

        Ok(LoginResult {
            user,
            access_token: access.token,
            refresh_token: refresh.token,
        })
    }

    /// Deletes the server-side refresh token of the bearer, if one can be identified.
    ///
    /// A missing or unparseable bearer token is logged and ignored; logout always
    /// succeeds so the controller can clear the cookie.
    pub async fn logout(&self, bearer: Option<&str>) -> Result<(), AppError> {
        let Some(token) = bearer else {
            return Ok(());
        };

        match self.jwt.parse_access_token(token) {
            Ok(user_id) => {
                RefreshTokenRepository::new(self.db)
                    .delete_by_user(user_id)
                    .await?;
                tracing::debug!("Revoked refresh token of user {}", user_id);
            }
            Err(e) => tracing::warn!("Ignoring bearer token on logout: {}", e),
        }

        Ok(())
    }

    /// Issues a new access token for a refresh token that matches the stored one.
    ///
    /// # Returns
    /// - `Ok(IssuedToken)` - New access token
    /// - `Err(AuthError::InvalidToken | ExpiredToken)` - Refresh token failed verification
    /// - `Err(AuthError::RefreshTokenMismatch)` - Token is not the one stored for the user
    /// - `Err(AuthError::UserNotInDatabase)` - User was deleted
    pub async fn refresh(&self, refresh_token: &str) -> Result<IssuedToken, AppError> {
        let user_id = self.jwt.parse_refresh_token(refresh_token)?;

        let stored = RefreshTokenRepository::new(self.db)
            .find_by_user(user_id)
            .await?;

        match stored {
            Some(stored) if stored.token == refresh_token && stored.expires_at > Utc::now() => {}
            _ => return Err(AuthError::RefreshTokenMismatch(user_id).into()),
        }

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        self.jwt.create_access_token(&user)
    }

    pub async fn check_username(&self, username: &str) -> Result<(), AppError> {
        if UserRepository::new(self.db)
            .exists_by_username(username)
            .await?
        {
            return Err(AppError::Conflict("Username is already in use".to_string()));
        }

        Ok(())
    }

    pub async fn check_email(&self, email: &str) -> Result<(), AppError> {
        if UserRepository::new(self.db).exists_by_email(email).await? {
            return Err(AppError::Conflict("Email is already in use".to_string()));
        }

        Ok(())
    }

    pub async fn check_nickname(&self, nickname: &str) -> Result<(), AppError> {
        if UserRepository::new(self.db)
            .exists_by_nickname(nickname)
            .await?
        {
            return Err(AppError::Conflict("Nickname is already in use".to_string()));
        }

        Ok(())
    }

    /// Looks up the username registered for a name and email pair.
    pub async fn find_username(&self, name: &str, email: &str) -> Result<String, AppError> {
        UserRepository::new(self.db)
            .find_by_name_and_email(name, email)
            .await?
            .map(|user| user.username)
            .ok_or_else(|| AppError::NotFound("No account matches that name and email".to_string()))
    }

    /// Resets the password of a local account to a fresh temporary one.
    ///
    /// The username and email must belong to the same account. The stored refresh
    /// token is revoked so sessions opened with the old password end.
    ///
    /// # Returns
    /// - `Ok(String)` - The temporary password in plain text
    /// - `Err(AppError::NotFound)` - No account matches the username and email
    /// - `Err(AppError::BadRequest)` - Account signs in through OAuth2 only
    pub async fn reset_password(&self, username: &str, email: &str) -> Result<String, AppError> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .find_by_username(username)
            .await?
            .filter(|user| user.email == email)
            .ok_or_else(|| {
                AppError::NotFound("No account matches that username and email".to_string())
            })?;

        if user.password_hash.is_none() {
            return Err(AppError::BadRequest(
                "Account signs in through a social provider".to_string(),
            ));
        }

        let password = temp_password();
        user_repo
            .update_password(user.id, hash_password(&password)?)
            .await?;
        RefreshTokenRepository::new(self.db)
            .delete_by_user(user.id)
            .await?;

        tracing::info!("Issued a temporary password for user {}", user.id);

        Ok(password)
    }
}
