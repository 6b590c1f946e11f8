//! Out-of-band location seeding. There is no HTTP path that creates
//! locations; a JSON array of locations is loaded at startup instead.

use std::path::Path;

use models::location::NewLocation;
use tracing::{info, warn};

use crate::errors::ServiceError;
use crate::locations::repository::LocationRepository;

/// Read a JSON array of locations (same field names as the wire format).
pub async fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<NewLocation>, ServiceError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| ServiceError::SeedFile(format!("cannot read seed file {}: {}", path.display(), e)))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ServiceError::SeedFile(format!("invalid seed file {}: {}", path.display(), e)))
}

/// Insert `items` only when the store holds no locations yet. Entries that
/// fail validation are skipped with a warning. Returns how many were inserted.
pub async fn seed_if_empty<R: LocationRepository + ?Sized>(repo: &R, items: Vec<NewLocation>) -> Result<usize, ServiceError> {
    if repo.count().await? > 0 {
        info!("location store already populated, skipping seed");
        return Ok(0);
    }
    let mut inserted = 0;
    for item in items {
        let title = item.title.clone();
        match repo.insert(item).await {
            Ok(_) => inserted += 1,
            Err(ServiceError::Model(models::errors::ModelError::Validation(msg))) => {
                warn!(%title, %msg, "skipping invalid seed location");
            }
            Err(e) => return Err(e),
        }
    }
    info!(inserted, "locations_seeded");
    Ok(inserted)
}
