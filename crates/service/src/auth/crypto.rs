//! Password hashing and token signing capabilities.
//!
//! Both primitives come from audited crates (`argon2`, `jsonwebtoken`); this
//! module only adapts them to the shapes the auth workflow needs.

use argon2::{
    password_hash::{self, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, PasswordHash, Version,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm as JwtAlgorithm, DecodingKey, EncodingKey, Header as JwtHeader, Validation};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::AuthError;

/// Salted one-way password hashing.
pub trait Hasher: Send + Sync {
    /// Name stored next to each hash.
    fn algorithm(&self) -> &'static str;
    /// Hash with a fresh random salt.
    fn hash(&self, password: &str) -> Result<String, AuthError>;
    /// Constant-time comparison of `password` against a stored hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Stateless bearer-token issuance and validation.
pub trait TokenSigner: Send + Sync {
    fn issue(&self, user_id: Uuid) -> Result<String, AuthError>;
    fn verify(&self, token: &str) -> Result<Uuid, AuthError>;
}

/// Argon2id with a per-hash random salt, PHC string output.
#[derive(Clone, Default)]
pub struct Argon2Hasher {
    argon: Argon2<'static>,
}

impl Argon2Hasher {
    /// Custom cost parameters (memory KiB, iterations, lanes).
    pub fn with_params(m_cost: u32, t_cost: u32, p_cost: u32) -> Result<Self, AuthError> {
        let params = Params::new(m_cost, t_cost, p_cost, None).map_err(|e| AuthError::HashError(e.to_string()))?;
        Ok(Self { argon: Argon2::new(Algorithm::Argon2id, Version::V0x13, params) })
    }
}

impl Hasher for Argon2Hasher {
    fn algorithm(&self) -> &'static str { "argon2" }

    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        Ok(self
            .argon
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashError(e.to_string()))?
            .to_string())
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(hash).map_err(|e| AuthError::HashError(e.to_string()))?;
        match self.argon.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthError::HashError(e.to_string())),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// HS256 JWT carrying the user id as `sub`.
#[derive(Clone)]
pub struct JwtSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl JwtSigner {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// One-hour tokens.
    pub fn hourly(secret: &str) -> Self { Self::new(secret, Duration::hours(1)) }

    fn validation() -> Validation {
        let mut validation = Validation::new(JwtAlgorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation
    }
}

impl TokenSigner for JwtSigner {
    fn issue(&self, user_id: Uuid) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AuthError::TokenError(format!("token ttl {}s overflows the expiry timestamp", self.ttl.num_seconds())))?;
        let claims = Claims { sub: user_id.to_string(), iat: now.timestamp(), exp: exp.timestamp() };
        encode(&JwtHeader::default(), &claims, &self.encoding).map_err(|e| AuthError::TokenError(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<Uuid, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &Self::validation()).map_err(|e| {
            tracing::debug!(err = %e, "token validation failed");
            AuthError::InvalidToken
        })?;
        Uuid::parse_str(&data.claims.sub).map_err(|_| AuthError::InvalidToken)
    }
}
