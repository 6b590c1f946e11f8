//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Registration, login and bearer-token authentication live here, behind
//! the `Hasher` and `TokenSigner` capabilities so the primitives can be
//! swapped without touching the workflow.

pub mod crypto;
pub mod domain;
pub mod errors;
pub mod repo;
pub mod repository;
pub mod service;

pub use crypto::{Argon2Hasher, Hasher, JwtSigner, TokenSigner};
pub use service::{AuthConfig, AuthService};
