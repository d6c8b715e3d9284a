use thiserror::Error;

/// Internal issues indicating unexpected behavior or misconfiguration.
///
/// Every variant results in a 500 Internal Server Error with a generic message
/// returned to the client.
#[derive(Error, Debug)]
pub enum InternalError {
    /// A configured URL could not be parsed.
    #[error("Failed to parse URL '{value}': {source}")]
    InvalidUrl {
        /// The URL string that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: url::ParseError,
    },

    /// Argon2 failed to hash a password or to read a stored hash.
    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    /// A JWT could not be signed.
    #[error("Failed to encode token: {0}")]
    TokenEncoding(#[source] jsonwebtoken::errors::Error),
}
