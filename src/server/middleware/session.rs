//! Typed access to the OAuth2 state kept in the session.
//!
//! The session only carries the CSRF token between the authorize redirect and the
//! provider callback; authentication itself is stateless and uses bearer tokens.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_OAUTH_CSRF_STATE: &str = "oauth:csrf_state";

/// CSRF protection session management.
///
/// Handles CSRF token storage and validation for OAuth flows. Tokens are stored
/// during login initiation and validated during the OAuth callback.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the CSRF state sent to the provider.
    ///
    /// # Returns
    /// - `Ok(())` - State successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_csrf_state(&self, state: String) -> Result<(), AppError> {
        self.session.insert(SESSION_OAUTH_CSRF_STATE, state).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF state so each one is accepted only once.
    ///
    /// # Returns
    /// - `Ok(Some(state))` - State was found and removed
    /// - `Ok(None)` - No state in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_csrf_state(&self) -> Result<Option<String>, AppError> {
        let state = self.session.remove(SESSION_OAUTH_CSRF_STATE).await?;
        Ok(state)
    }
}
