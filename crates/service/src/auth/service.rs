use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::crypto::{Argon2Hasher, Hasher, JwtSigner, TokenSigner};
use super::domain::{AuthSession, AuthUser, LoginInput, NewUser, RegisterInput};
use super::errors::AuthError;
use super::repository::AuthRepository;

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl: chrono::Duration,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self { jwt_secret: jwt_secret.into(), token_ttl: chrono::Duration::hours(1) }
    }
}

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository + ?Sized> {
    repo: Arc<R>,
    hasher: Arc<dyn Hasher>,
    signer: Arc<dyn TokenSigner>,
}

impl<R: AuthRepository + ?Sized> AuthService<R> {
    pub fn new(repo: Arc<R>, hasher: Arc<dyn Hasher>, signer: Arc<dyn TokenSigner>) -> Self {
        Self { repo, hasher, signer }
    }

    /// Argon2 hashing and HS256 tokens built from `cfg`.
    pub fn from_config(repo: Arc<R>, cfg: &AuthConfig) -> Self {
        Self::new(repo, Arc::new(Argon2Hasher::default()), Arc::new(JwtSigner::new(&cfg.jwt_secret, cfg.token_ttl)))
    }

    /// Register a new user with a hashed password.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{AuthConfig, AuthService};
    /// use service::auth::domain::RegisterInput;
    /// use service::storage::memory::MemoryStore;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MemoryStore::default());
    /// let svc = AuthService::from_config(repo, &AuthConfig::new("secret"));
    /// let input = RegisterInput { name: "Ana".into(), email: "ana@example.com".into(), password: "Secret123".into() };
    /// let user = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(user.email, "ana@example.com");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: RegisterInput) -> Result<AuthUser, AuthError> {
        models::user::validate_name(&input.name)?;
        models::user::validate_email(&input.email)?;
        if input.password.is_empty() {
            return Err(AuthError::Validation("password required".into()));
        }
        if let Some(existing) = self.repo.find_user_by_email(&input.email).await? {
            debug!(user_id = %existing.id, "email already registered");
            return Err(AuthError::Conflict);
        }

        let hasher = Arc::clone(&self.hasher);
        let password = input.password;
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::HashError(e.to_string()))??;

        let user = self
            .repo
            .create_user(NewUser {
                email: input.email,
                name: input.name,
                password_hash,
                password_algorithm: self.hasher.algorithm().to_string(),
            })
            .await?;
        info!(user_id = %user.id, email = %user.email, "user_registered");
        Ok(user)
    }

    /// Verify credentials and issue a bearer token.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{AuthConfig, AuthService};
    /// use service::auth::domain::{RegisterInput, LoginInput};
    /// use service::storage::memory::MemoryStore;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MemoryStore::default());
    /// let svc = AuthService::from_config(repo, &AuthConfig::new("secret"));
    /// let _ = tokio_test::block_on(svc.register(RegisterInput { name: "N".into(), email: "u@e.com".into(), password: "Passw0rd".into() }));
    /// let session = tokio_test::block_on(svc.login(LoginInput { email: "u@e.com".into(), password: "Passw0rd".into() })).unwrap();
    /// assert_eq!(session.user.email, "u@e.com");
    /// assert_eq!(svc.authenticate(Some(&format!("Bearer {}", session.token))).unwrap(), session.user.id);
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let user = self
            .repo
            .find_user_by_email(&input.email)
            .await?
            .ok_or(AuthError::NotFound)?;

        let cred = self
            .repo
            .get_credentials(user.id)
            .await?
            .ok_or(AuthError::BadCredentials)?;

        let hasher = Arc::clone(&self.hasher);
        let password = input.password;
        let matches = tokio::task::spawn_blocking(move || hasher.verify(&password, &cred.password_hash))
            .await
            .map_err(|e| AuthError::HashError(e.to_string()))??;
        if !matches {
            debug!(user_id = %user.id, "password mismatch");
            return Err(AuthError::BadCredentials);
        }

        let token = self.signer.issue(user.id)?;
        info!(user_id = %user.id, "user_logged_in");
        Ok(AuthSession { user, token })
    }

    /// Resolve an `Authorization` header value to the user id it carries.
    pub fn authenticate(&self, authorization: Option<&str>) -> Result<Uuid, AuthError> {
        let token = bearer_token(authorization)?;
        self.signer.verify(token)
    }
}

/// Extract the token from `Bearer <token>`. No header or no token is
/// `MissingToken`; any other scheme is `InvalidToken`.
pub fn bearer_token(authorization: Option<&str>) -> Result<&str, AuthError> {
    let raw = authorization.map(str::trim).filter(|h| !h.is_empty()).ok_or(AuthError::MissingToken)?;
    let (scheme, token) = raw.split_once(' ').ok_or(AuthError::MissingToken)?;
    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::InvalidToken);
    }
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;

    fn svc() -> AuthService<MemoryStore> {
        let hasher = Argon2Hasher::with_params(1024, 1, 1).unwrap();
        AuthService::new(Arc::new(MemoryStore::default()), Arc::new(hasher), Arc::new(JwtSigner::hourly("test-secret")))
    }

    fn register_input(email: &str, password: &str) -> RegisterInput {
        RegisterInput { name: "Tester".into(), email: email.into(), password: password.into() }
    }

    #[tokio::test]
    async fn register_then_login_issues_token() {
        let svc = svc();
        let user = svc.register(register_input("a@b.com", "S3curePass!")).await.unwrap();
        let session = svc.login(LoginInput { email: "a@b.com".into(), password: "S3curePass!".into() }).await.unwrap();
        assert_eq!(session.user, user);
        assert_eq!(svc.authenticate(Some(&format!("Bearer {}", session.token))).unwrap(), user.id);
    }

    #[tokio::test]
    async fn duplicate_email_is_conflict_regardless_of_other_fields() {
        let svc = svc();
        svc.register(register_input("dup@b.com", "first")).await.unwrap();
        let again = RegisterInput { name: "Someone Else".into(), email: "dup@b.com".into(), password: "different".into() };
        assert!(matches!(svc.register(again).await, Err(AuthError::Conflict)));
    }

    #[tokio::test]
    async fn email_match_is_case_sensitive() {
        let svc = svc();
        svc.register(register_input("Case@b.com", "pw")).await.unwrap();
        svc.register(register_input("case@b.com", "pw")).await.unwrap();
        let res = svc.login(LoginInput { email: "CASE@b.com".into(), password: "pw".into() }).await;
        assert!(matches!(res, Err(AuthError::NotFound)));
    }

    #[tokio::test]
    async fn wrong_password_never_yields_token() {
        let svc = svc();
        svc.register(register_input("w@b.com", "right")).await.unwrap();
        for attempt in ["wrong", "Right", "right ", ""] {
            let res = svc.login(LoginInput { email: "w@b.com".into(), password: attempt.into() }).await;
            assert!(matches!(res, Err(AuthError::BadCredentials)), "attempt {attempt:?}");
        }
    }

    #[tokio::test]
    async fn unknown_email_is_not_found() {
        let res = svc().login(LoginInput { email: "nobody@b.com".into(), password: "x".into() }).await;
        assert!(matches!(res, Err(AuthError::NotFound)));
    }

    #[tokio::test]
    async fn invalid_registration_rejected() {
        let svc = svc();
        assert!(matches!(svc.register(register_input("no-at-sign", "pw")).await, Err(AuthError::Validation(_))));
        assert!(matches!(svc.register(register_input("x@y.z", "")).await, Err(AuthError::Validation(_))));
        let blank = RegisterInput { name: "  ".into(), email: "x@y.z".into(), password: "pw".into() };
        assert!(matches!(svc.register(blank).await, Err(AuthError::Validation(_))));
    }

    #[test]
    fn bearer_header_parsing() {
        assert!(matches!(bearer_token(None), Err(AuthError::MissingToken)));
        assert!(matches!(bearer_token(Some("")), Err(AuthError::MissingToken)));
        assert!(matches!(bearer_token(Some("Bearer")), Err(AuthError::MissingToken)));
        assert!(matches!(bearer_token(Some("Bearer   ")), Err(AuthError::MissingToken)));
        assert!(matches!(bearer_token(Some("Basic abc")), Err(AuthError::InvalidToken)));
        assert_eq!(bearer_token(Some("Bearer abc.def")).unwrap(), "abc.def");
        assert_eq!(bearer_token(Some("bearer abc")).unwrap(), "abc");
    }

    #[test]
    fn tampered_token_is_invalid() {
        let svc = svc();
        assert!(matches!(svc.authenticate(Some("Bearer not.a.jwt")), Err(AuthError::InvalidToken)));
    }
}
