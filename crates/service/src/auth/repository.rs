use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{AuthUser, Credentials, NewUser};
use super::errors::AuthError;

/// Repository abstraction for auth-related persistence.
///
/// The in-memory implementation lives in `crate::storage::memory`.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Exact, case-sensitive email match.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthError>;
    /// Persist user and credentials together; `AuthError::Conflict` if the email is taken.
    async fn create_user(&self, user: NewUser) -> Result<AuthUser, AuthError>;
    async fn get_credentials(&self, user_id: Uuid) -> Result<Option<Credentials>, AuthError>;
}
