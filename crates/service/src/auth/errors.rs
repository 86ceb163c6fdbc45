use thiserror::Error;

/// Business errors for auth workflows
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("username already exists")]
    Conflict,
    #[error("secret code invalid")]
    InvalidSecretCode,
    #[error("invalid credentials")]
    Unauthorized,
    #[error("invalid or expired token")]
    InvalidToken,
    #[error("user not found")]
    UnknownUser,
    #[error("hashing error: {0}")]
    HashError(String),
    #[error("token error: {0}")]
    TokenError(String),
    #[error("repository error: {0}")]
    Repository(String),
}

impl AuthError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::Validation(_) => 1001,
            AuthError::Conflict => 1002,
            AuthError::InvalidSecretCode => 1003,
            AuthError::Unauthorized => 1004,
            AuthError::InvalidToken => 1005,
            AuthError::UnknownUser => 1006,
            AuthError::HashError(_) => 1101,
            AuthError::TokenError(_) => 1102,
            AuthError::Repository(_) => 1200,
        }
    }

    /// Whether the caller failed to authenticate (as opposed to a server fault).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AuthError::InvalidSecretCode | AuthError::Unauthorized | AuthError::InvalidToken | AuthError::UnknownUser)
    }
}
