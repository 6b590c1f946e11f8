use std::collections::HashMap;
use std::sync::Arc;

use common::types::Location;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::favorites::repository::FavoriteRepository;
use crate::locations::repository::LocationRepository;

/// Favorites of an authenticated user. Location existence is checked on
/// insert only; references that go stale later are dropped on read.
pub struct FavoriteService<F: FavoriteRepository + ?Sized, L: LocationRepository + ?Sized> {
    favorites: Arc<F>,
    locations: Arc<L>,
}

impl<F: FavoriteRepository + ?Sized, L: LocationRepository + ?Sized> FavoriteService<F, L> {
    pub fn new(favorites: Arc<F>, locations: Arc<L>) -> Self { Self { favorites, locations } }

    async fn ensure_user(&self, user_id: Uuid) -> Result<(), ServiceError> {
        if self.favorites.user_exists(user_id).await? {
            Ok(())
        } else {
            Err(ServiceError::not_found("User"))
        }
    }

    /// Favorite locations in the order they were added.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Location>, ServiceError> {
        self.ensure_user(user_id).await?;
        let ids = self.favorites.location_ids(user_id).await?;
        let mut found: HashMap<Uuid, Location> = self
            .locations
            .find_many(&ids)
            .await?
            .into_iter()
            .map(|l| (l.id, l))
            .collect();
        let ordered: Vec<Location> = ids.iter().filter_map(|id| found.remove(id)).collect();
        if ordered.len() < ids.len() {
            debug!(stale = ids.len() - ordered.len(), "skipping favorites of deleted locations");
        }
        Ok(ordered)
    }

    #[instrument(skip(self), fields(user_id = %user_id, location_id = %location_id))]
    pub async fn add(&self, user_id: Uuid, location_id: Uuid) -> Result<(), ServiceError> {
        self.ensure_user(user_id).await?;
        if !self.locations.exists(location_id).await? {
            return Err(ServiceError::not_found("Location"));
        }
        if !self.favorites.add(user_id, location_id).await? {
            return Err(ServiceError::Conflict("Location already in favorites".into()));
        }
        info!("favorite_added");
        Ok(())
    }

    /// Removing a location that is not a favorite succeeds.
    #[instrument(skip(self), fields(user_id = %user_id, location_id = %location_id))]
    pub async fn remove(&self, user_id: Uuid, location_id: Uuid) -> Result<(), ServiceError> {
        self.ensure_user(user_id).await?;
        let removed = self.favorites.remove(user_id, location_id).await?;
        info!(removed, "favorite_removed");
        Ok(())
    }
}
