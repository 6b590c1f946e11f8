//! Service layer: business rules on top of the `models` crate.
//! - Repository traits with SeaORM and in-memory implementations.
//! - Framework-independent services returning typed errors.

pub mod errors;
pub mod auth;
pub mod locations;
pub mod favorites;
pub mod seed;
pub mod storage;
#[cfg(test)]
pub mod test_support;
