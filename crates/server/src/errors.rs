use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::errors::ModelError;
use service::auth::errors::AuthError;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Error response rendered as `{ "error": title, "message": detail }`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: String,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: impl Into<String>, detail: Option<String>) -> Self {
        Self { status, title: title.into(), detail }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(detail.into()))
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", Some(detail.into()))
    }

    /// Log the cause and hide it from the client.
    pub fn internal(cause: impl std::fmt::Display) -> Self {
        error!(err = %cause, "request failed");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some("Internal server error".into()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let message = self.detail.unwrap_or_else(|| self.title.clone());
        (self.status, Json(serde_json::json!({"error": self.title, "message": message}))).into_response()
    }
}

impl From<AuthError> for JsonApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Validation(msg) => Self::bad_request(msg),
            AuthError::Conflict | AuthError::BadCredentials => Self::bad_request(e.to_string()),
            AuthError::NotFound => Self::not_found(e.to_string()),
            AuthError::MissingToken => Self::new(StatusCode::UNAUTHORIZED, "Unauthorized", None),
            AuthError::InvalidToken => Self::new(StatusCode::FORBIDDEN, "Forbidden", None),
            AuthError::HashError(_) | AuthError::TokenError(_) | AuthError::Repository(_) => Self::internal(e),
        }
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) | ServiceError::Model(ModelError::Validation(msg)) => Self::bad_request(msg),
            ServiceError::Conflict(msg) => Self::bad_request(msg),
            ServiceError::Model(ModelError::Conflict(_)) => Self::bad_request("Conflict"),
            ServiceError::NotFound(msg) => Self::not_found(msg),
            ServiceError::SeedFile(_) | ServiceError::Model(ModelError::Db(_)) => Self::internal(e),
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("seed failed: {0}")]
    Seed(#[from] ServiceError),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_errors_map_to_documented_statuses() {
        let cases = [
            (AuthError::Conflict, StatusCode::BAD_REQUEST),
            (AuthError::BadCredentials, StatusCode::BAD_REQUEST),
            (AuthError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (AuthError::NotFound, StatusCode::NOT_FOUND),
            (AuthError::MissingToken, StatusCode::UNAUTHORIZED),
            (AuthError::InvalidToken, StatusCode::FORBIDDEN),
            (AuthError::Repository("down".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from(err).status, status);
        }
    }

    #[test]
    fn internal_detail_is_not_leaked() {
        let e = JsonApiError::from(ServiceError::Model(ModelError::Db("connection refused at 10.0.0.5".into())));
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!e.detail.unwrap_or_default().contains("10.0.0.5"));
    }
}
