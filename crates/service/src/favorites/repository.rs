use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Per-user ordered set of favorite location references.
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn user_exists(&self, user_id: Uuid) -> Result<bool, ServiceError>;
    /// Referenced location ids in insertion order.
    async fn location_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, ServiceError>;
    /// Atomic insert-if-absent; `false` when already present.
    async fn add(&self, user_id: Uuid, location_id: Uuid) -> Result<bool, ServiceError>;
    /// `false` when there was nothing to remove.
    async fn remove(&self, user_id: Uuid, location_id: Uuid) -> Result<bool, ServiceError>;
}

pub struct SeaOrmFavoriteRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl FavoriteRepository for SeaOrmFavoriteRepository {
    async fn user_exists(&self, user_id: Uuid) -> Result<bool, ServiceError> {
        Ok(models::user::exists(&self.db, user_id).await?)
    }

    async fn location_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, ServiceError> {
        Ok(models::favorite::location_ids(&self.db, user_id).await?)
    }

    async fn add(&self, user_id: Uuid, location_id: Uuid) -> Result<bool, ServiceError> {
        Ok(models::favorite::insert_if_absent(&self.db, user_id, location_id).await?)
    }

    async fn remove(&self, user_id: Uuid, location_id: Uuid) -> Result<bool, ServiceError> {
        Ok(models::favorite::remove(&self.db, user_id, location_id).await? > 0)
    }
}
