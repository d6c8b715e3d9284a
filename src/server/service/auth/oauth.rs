//! OAuth2 social login.
//!
//! The callback exchanges the authorization code, reads the provider profile and
//! redirects the browser to the frontend with a short-lived hand-off token whose
//! subject is the account email. Accounts seen for the first time are created as
//! placeholders with a generated nickname and must complete their profile through
//! [`OAuthService::complete_signup`] before the first login.

use oauth2::{AuthorizationCode, CsrfToken, Scope, TokenResponse};
use rand::{distr::Alphanumeric, Rng};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        auth::{LoginResult, OAuthOutcome},
        user::{AdditionalInfoParams, CreateUserParams, Role, UpdateProfileParams, User},
    },
    service::{auth::AuthService, token::JwtTokenizer},
    state::OAuth2Client,
};

const PROVIDER: &str = "google";
/// Nicknames of accounts still waiting for their profile start with this.
const PLACEHOLDER_NICKNAME_PREFIX: &str = "traveler_";

/// Subset of the OpenID Connect userinfo response.
#[derive(Debug, Deserialize)]
pub struct ProviderProfile {
    pub sub: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

pub struct OAuthService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
    jwt: &'a JwtTokenizer,
    userinfo_url: &'a str,
}

impl<'a> OAuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        jwt: &'a JwtTokenizer,
        userinfo_url: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            jwt,
            userinfo_url,
        }
    }

    /// Builds the provider consent URL with a fresh CSRF state.
    pub fn authorize_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .url()
    }

    /// Completes the provider round trip and decides where the browser goes next.
    ///
    /// # Returns
    /// - `Ok(OAuthOutcome::NewUser)` - Placeholder account created, profile must be completed
    /// - `Ok(OAuthOutcome::ExistingUser)` - Account already existed
    /// - `Err(AuthError::OAuthExchange)` - Code exchange failed
    /// - `Err(AppError::ReqwestErr)` - Profile request failed
    pub async fn callback(&self, authorization_code: String) -> Result<OAuthOutcome, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::OAuthExchange(e.to_string()))?;

        let profile = self
            .http_client
            .get(self.userinfo_url)
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<ProviderProfile>()
            .await?;

        self.resolve_profile(profile).await
    }

    /// Maps a provider profile to an account, creating a placeholder when none exists.
    pub async fn resolve_profile(&self, profile: ProviderProfile) -> Result<OAuthOutcome, AppError> {
        let user_repo = UserRepository::new(self.db);
        let token = self.jwt.create_oauth_token(&profile.email)?.token;

        if user_repo.find_by_email(&profile.email).await?.is_some() {
            return Ok(OAuthOutcome::ExistingUser { token });
        }

        let nickname = loop {
            let candidate = random_nickname();
            if !user_repo.exists_by_nickname(&candidate).await? {
                break candidate;
            }
        };

        let name = profile
            .name
            .clone()
            .unwrap_or_else(|| profile.email.split('@').next().unwrap_or_default().to_string());

        let user = user_repo
            .create(CreateUserParams {
                username: format!("{}_{}", PROVIDER, profile.sub),
                email: profile.email,
                nickname,
                password_hash: None,
                name,
                birth_date: None,
                gender: None,
                role: Role::User,
                provider: Some(PROVIDER.to_string()),
                provider_id: Some(profile.sub),
            })
            .await?;

        tracing::info!("Created OAuth2 account {} pending profile completion", user.id);

        Ok(OAuthOutcome::NewUser { token })
    }

    /// Returns the account a hand-off token refers to.
    pub async fn pending_user(&self, token: &str) -> Result<User, AppError> {
        let email = self.jwt.parse_oauth_token(token)?;

        UserRepository::new(self.db)
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound("No account registered for this email".to_string()))
    }

    /// Logs in the account a hand-off token refers to.
    pub async fn login(&self, token: &str) -> Result<LoginResult, AppError> {
        let user = self.pending_user(token).await?;

        AuthService::new(self.db, self.jwt).issue_tokens(user).await
    }

    /// Fills in the profile of a placeholder account and logs it in.
    ///
    /// Only accounts created by the OAuth2 callback that still carry their generated
    /// nickname qualify, so a hand-off token for a completed account cannot rewrite it.
    ///
    /// # Returns
    /// - `Ok(LoginResult)` - Profile saved and tokens issued
    /// - `Err(AppError::Conflict)` - Profile already completed, or nickname taken by another account
    /// - `Err(AppError::BadRequest)` - Nickname uses the reserved placeholder prefix
    /// - `Err(AuthError::InvalidToken | ExpiredToken)` - Hand-off token rejected
    pub async fn complete_signup(
        &self,
        params: AdditionalInfoParams,
    ) -> Result<LoginResult, AppError> {
        let user = self.pending_user(&params.token).await?;
        let user_repo = UserRepository::new(self.db);

        if !is_placeholder(&user) {
            return Err(AppError::Conflict("Profile is already completed".to_string()));
        }

        if params.nickname.starts_with(PLACEHOLDER_NICKNAME_PREFIX) {
            return Err(AppError::BadRequest(format!(
                "Nickname must not start with '{}'",
                PLACEHOLDER_NICKNAME_PREFIX
            )));
        }

        if params.nickname != user.nickname && user_repo.exists_by_nickname(&params.nickname).await?
        {
            return Err(AppError::Conflict("Nickname is already in use".to_string()));
        }

        let updated = user_repo
            .update_profile(UpdateProfileParams {
                user_id: user.id,
                nickname: params.nickname,
                name: params.name,
                birth_date: params.birth_date,
                gender: params.gender,
            })
            .await?;

        AuthService::new(self.db, self.jwt)
            .issue_tokens(updated)
            .await
    }
}

fn is_placeholder(user: &User) -> bool {
    user.provider.is_some() && user.nickname.starts_with(PLACEHOLDER_NICKNAME_PREFIX)
}

fn random_nickname() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();

    format!("{}{}", PLACEHOLDER_NICKNAME_PREFIX, suffix)
}
