use thiserror::Error;

/// Business errors for auth workflows
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("Email already exists. Please choose another.")]
    Conflict,
    #[error("User not found.")]
    NotFound,
    #[error("Invalid credentials.")]
    BadCredentials,
    #[error("Unauthorized")]
    MissingToken,
    #[error("Forbidden")]
    InvalidToken,
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
            AuthError::NotFound => 1003,
            AuthError::BadCredentials => 1004,
            AuthError::MissingToken => 1005,
            AuthError::InvalidToken => 1006,
            AuthError::HashError(_) => 1101,
            AuthError::TokenError(_) => 1102,
            AuthError::Repository(_) => 1200,
        }
    }
}

impl From<models::errors::ModelError> for AuthError {
    fn from(e: models::errors::ModelError) -> Self {
        use models::errors::ModelError;
        match e {
            ModelError::Validation(msg) => AuthError::Validation(msg),
            ModelError::Conflict(_) => AuthError::Conflict,
            ModelError::Db(msg) => AuthError::Repository(msg),
        }
    }
}
