use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect},
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ApiResponse, MessageDto},
        user::{
            AccessTokenDto, FindPasswordDto, FindUsernameDto, LoginDto, LoginResponseDto,
            OAuthAdditionalInfoDto, OAuthPendingUserDto, SignUpDto, TempPasswordDto, UserDto,
            UsernameDto,
        },
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::{auth::bearer_token, session::CsrfSession},
        model::{
            auth::LoginResult,
            user::{AdditionalInfoParams, SignUpParams},
        },
        service::{
            auth::{oauth::OAuthService, AuthService},
            token::JwtTokenizer,
        },
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Name of the HTTP-only cookie carrying the refresh token.
pub const REFRESH_COOKIE: &str = "refreshToken";

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for access tokens
#[derive(Deserialize)]
pub struct CallbackParams {
    pub state: String,
    pub code: String,
}

#[derive(Deserialize, IntoParams)]
pub struct UsernameQuery {
    pub username: String,
}

#[derive(Deserialize, IntoParams)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Deserialize, IntoParams)]
pub struct NicknameQuery {
    pub nickname: String,
}

#[derive(Deserialize, IntoParams)]
pub struct TokenQuery {
    /// Hand-off token from the OAuth2 callback redirect.
    pub token: String,
}

/// Register a new account.
///
/// # Returns
/// - `201 Created` - Account created
/// - `409 Conflict` - Username, email or nickname already in use
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = SignUpDto,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<UserDto>),
        (status = 409, description = "Username, email or nickname already in use", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignUpDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt);

    let user = service.signup(SignUpParams::from_dto(payload)).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Sign up completed", user.into_dto())),
    ))
}

/// Log in with username and password.
///
/// Issues an access token in the body and a refresh token in the `refreshToken`
/// cookie. The refresh token is also persisted so it can be revoked on logout.
///
/// # Returns
/// - `200 OK` - Logged in
/// - `401 Unauthorized` - Unknown username or wrong password
/// - `500 Internal Server Error` - Database or signing error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = ApiResponse<LoginResponseDto>),
        (status = 401, description = "Invalid username or password", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt);

    let result = service.login(&payload.username, &payload.password).await?;

    Ok(logged_in(
        &state.jwt,
        state.config.cookie_secure,
        jar,
        result,
        "Login succeeded",
    ))
}

/// Log out and revoke the refresh token.
///
/// The cookie is always cleared. When a valid bearer token is present the stored
/// refresh token of its user is deleted as well.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt);

    service.logout(bearer_token(&headers)).await?;

    Ok(logged_out(state.config.cookie_secure, jar))
}

/// Issue a new access token from the refresh cookie.
///
/// # Returns
/// - `200 OK` - New access token
/// - `401 Unauthorized` - Cookie missing, invalid, expired or revoked
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Access token reissued", body = ApiResponse<AccessTokenDto>),
        (status = 401, description = "Refresh token missing, invalid or revoked", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let Some(cookie) = jar.get(REFRESH_COOKIE) else {
        return Err(AuthError::MissingToken.into());
    };

    let issued = AuthService::new(&state.db, &state.jwt)
        .refresh(cookie.value())
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Access token reissued",
            AccessTokenDto {
                access_token: issued.token,
            },
        )),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/check-username",
    tag = AUTH_TAG,
    params(UsernameQuery),
    responses(
        (status = 200, description = "Username is available", body = MessageDto),
        (status = 409, description = "Username already in use", body = MessageDto)
    ),
)]
pub async fn check_username(
    State(state): State<AppState>,
    Query(query): Query<UsernameQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &state.jwt)
        .check_username(&query.username)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Username is available"))))
}

#[utoipa::path(
    post,
    path = "/api/auth/check-email",
    tag = AUTH_TAG,
    params(EmailQuery),
    responses(
        (status = 200, description = "Email is available", body = MessageDto),
        (status = 409, description = "Email already in use", body = MessageDto)
    ),
)]
pub async fn check_email(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &state.jwt)
        .check_email(&query.email)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Email is available"))))
}

#[utoipa::path(
    post,
    path = "/api/auth/check-nickname",
    tag = AUTH_TAG,
    params(NicknameQuery),
    responses(
        (status = 200, description = "Nickname is available", body = MessageDto),
        (status = 409, description = "Nickname already in use", body = MessageDto)
    ),
)]
pub async fn check_nickname(
    State(state): State<AppState>,
    Query(query): Query<NicknameQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &state.jwt)
        .check_nickname(&query.nickname)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Nickname is available"))))
}

/// Look up a username by name and email.
#[utoipa::path(
    post,
    path = "/api/auth/find-username",
    tag = AUTH_TAG,
    request_body = FindUsernameDto,
    responses(
        (status = 200, description = "Username found", body = ApiResponse<UsernameDto>),
        (status = 404, description = "No account matches", body = MessageDto)
    ),
)]
pub async fn find_username(
    State(state): State<AppState>,
    Json(payload): Json<FindUsernameDto>,
) -> Result<impl IntoResponse, AppError> {
    let username = AuthService::new(&state.db, &state.jwt)
        .find_username(&payload.name, &payload.email)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Username found", UsernameDto { username })),
    ))
}

/// Reset a forgotten password to a temporary one.
///
/// # Returns
/// - `200 OK` - Temporary password issued, refresh token revoked
/// - `400 Bad Request` - Account has no local password
/// - `404 Not Found` - No account matches the username and email
#[utoipa::path(
    post,
    path = "/api/auth/find-password",
    tag = AUTH_TAG,
    request_body = FindPasswordDto,
    responses(
        (status = 200, description = "Temporary password issued", body = ApiResponse<TempPasswordDto>),
        (status = 400, description = "Account has no local password", body = MessageDto),
        (status = 404, description = "No account matches", body = MessageDto)
    ),
)]
pub async fn find_password(
    State(state): State<AppState>,
    Json(payload): Json<FindPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let temp_password = AuthService::new(&state.db, &state.jwt)
        .reset_password(&payload.username, &payload.email)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Temporary password issued",
            TempPasswordDto { temp_password },
        )),
    ))
}

/// Redirect to the OAuth2 provider.
///
/// Stores a random CSRF state in the session; the callback rejects any request whose
/// state does not match it.
#[utoipa::path(
    get,
    path = "/api/auth/oauth2/authorize",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the provider consent page")
    ),
)]
pub async fn oauth_authorize(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let (url, csrf_token) = oauth_service(&state).authorize_url();

    CsrfSession::new(&session)
        .set_csrf_state(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Complete the provider round trip and redirect to the frontend.
///
/// New accounts are sent to `/oauth2/signup`, existing ones to `/oauth2/login`, both
/// with a short-lived hand-off token in the query string.
///
/// # Returns
/// - `307 Temporary Redirect` - Redirect to the frontend
/// - `400 Bad Request` - CSRF state mismatch
/// - `500 Internal Server Error` - Code exchange or profile lookup failed
#[utoipa::path(
    get,
    path = "/api/auth/oauth2/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state issued by the authorize redirect"),
        ("code" = String, Query, description = "Authorization code from the provider")
    ),
    responses(
        (status = 307, description = "Redirect to the frontend"),
        (status = 400, description = "CSRF state mismatch", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn oauth_callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    validate_csrf(&session, &params.0.state).await?;

    let outcome = oauth_service(&state).callback(params.0.code).await?;

    Ok(Redirect::temporary(
        &outcome.redirect_url(&state.config.frontend_url),
    ))
}

/// Resolve the account a hand-off token refers to, for the profile completion form.
#[utoipa::path(
    get,
    path = "/api/auth/oauth2/signup",
    tag = AUTH_TAG,
    params(TokenQuery),
    responses(
        (status = 200, description = "Pending account", body = ApiResponse<OAuthPendingUserDto>),
        (status = 401, description = "Token invalid or expired", body = MessageDto),
        (status = 404, description = "No account for the token's email", body = MessageDto)
    ),
)]
pub async fn oauth_signup(
    State(state): State<AppState>,
    Query(query): Query<TokenQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = oauth_service(&state).pending_user(&query.token).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Additional information required",
            OAuthPendingUserDto {
                user_id: user.id,
                email: user.email,
            },
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/auth/oauth2/login",
    tag = AUTH_TAG,
    params(TokenQuery),
    responses(
        (status = 200, description = "Logged in", body = ApiResponse<LoginResponseDto>),
        (status = 401, description = "Token invalid or expired", body = MessageDto),
        (status = 404, description = "No account for the token's email", body = MessageDto)
    ),
)]
pub async fn oauth_login(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<TokenQuery>,
) -> Result<impl IntoResponse, AppError> {
    let result = oauth_service(&state).login(&query.token).await?;

    Ok(logged_in(
        &state.jwt,
        state.config.cookie_secure,
        jar,
        result,
        "Login succeeded",
    ))
}

/// Fill in the profile of an account created through OAuth2 and log it in.
#[utoipa::path(
    post,
    path = "/api/auth/oauth2/additional-info",
    tag = AUTH_TAG,
    request_body = OAuthAdditionalInfoDto,
    responses(
        (status = 200, description = "Profile completed and logged in", body = ApiResponse<LoginResponseDto>),
        (status = 401, description = "Token invalid or expired", body = MessageDto),
        (status = 409, description = "Nickname already in use", body = MessageDto)
    ),
)]
pub async fn oauth_additional_info(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<OAuthAdditionalInfoDto>,
) -> Result<impl IntoResponse, AppError> {
    let result = oauth_service(&state)
        .complete_signup(AdditionalInfoParams::from_dto(payload))
        .await?;

    Ok(logged_in(
        &state.jwt,
        state.config.cookie_secure,
        jar,
        result,
        "Sign up completed",
    ))
}

fn oauth_service(state: &AppState) -> OAuthService<'_> {
    OAuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.jwt,
        &state.config.oauth_userinfo_url,
    )
}

/// Sets the refresh cookie and renders the login body.
fn logged_in(
    jwt: &JwtTokenizer,
    cookie_secure: bool,
    jar: CookieJar,
    result: LoginResult,
    message: &str,
) -> impl IntoResponse {
    let max_age = time::Duration::seconds(jwt.refresh_ttl().num_seconds());
    let cookie = refresh_cookie(result.refresh_token.clone(), cookie_secure, max_age);

    (
        StatusCode::OK,
        jar.add(cookie),
        Json(ApiResponse::ok(message, result.into_dto())),
    )
}

/// Expires the refresh cookie and renders the logout body.
fn logged_out(cookie_secure: bool, jar: CookieJar) -> impl IntoResponse {
    let expired = refresh_cookie(String::new(), cookie_secure, time::Duration::ZERO);

    (
        StatusCode::OK,
        jar.add(expired),
        Json(MessageDto::ok("Logout succeeded")),
    )
}

/// Builds the refresh cookie. Logout must match the login attributes to replace it.
fn refresh_cookie(value: String, secure: bool, max_age: time::Duration) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE, value))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(max_age)
        .build()
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_csrf_state().await?;

    if let Some(state) = stored_state {
        if state == csrf_state {
            return Ok(());
        }
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}
