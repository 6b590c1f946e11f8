use async_trait::async_trait;
use common::types::{Location, Vote, VoteCounts};
use models::location::NewLocation;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::errors::ServiceError;

#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// All locations ordered by title, then id.
    async fn list(&self) -> Result<Vec<Location>, ServiceError>;
    /// Locations with the given ids, in no particular order; unknown ids are skipped.
    async fn find_many(&self, ids: &[Uuid]) -> Result<Vec<Location>, ServiceError>;
    async fn exists(&self, id: Uuid) -> Result<bool, ServiceError>;
    /// Atomically bump one counter; `None` when the location does not exist.
    async fn increment(&self, id: Uuid, vote: Vote) -> Result<Option<VoteCounts>, ServiceError>;
    async fn insert(&self, input: NewLocation) -> Result<Location, ServiceError>;
    async fn count(&self) -> Result<u64, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmLocationRepository {
    pub db: DatabaseConnection,
}

fn non_negative(v: i64) -> u64 {
    u64::try_from(v).unwrap_or(0)
}

pub(crate) fn to_location(m: models::location::Model) -> Location {
    let types = m.type_list();
    Location {
        id: m.id,
        src: m.src,
        url: m.url,
        title: m.title,
        description: m.description,
        type_icon: m.type_icon,
        types,
        latitude: m.latitude,
        longitude: m.longitude,
        likes: non_negative(m.likes),
        dislikes: non_negative(m.dislikes),
    }
}

#[async_trait]
impl LocationRepository for SeaOrmLocationRepository {
    async fn list(&self) -> Result<Vec<Location>, ServiceError> {
        let rows = models::location::list(&self.db).await?;
        Ok(rows.into_iter().map(to_location).collect())
    }

    async fn find_many(&self, ids: &[Uuid]) -> Result<Vec<Location>, ServiceError> {
        let rows = models::location::find_many(&self.db, ids).await?;
        Ok(rows.into_iter().map(to_location).collect())
    }

    async fn exists(&self, id: Uuid) -> Result<bool, ServiceError> {
        Ok(!models::location::find_many(&self.db, &[id]).await?.is_empty())
    }

    async fn increment(&self, id: Uuid, vote: Vote) -> Result<Option<VoteCounts>, ServiceError> {
        let column = match vote {
            Vote::Like => models::location::Column::Likes,
            Vote::Dislike => models::location::Column::Dislikes,
        };
        let updated = models::location::increment_counter(&self.db, id, column).await?;
        Ok(updated.map(|m| VoteCounts { likes: non_negative(m.likes), dislikes: non_negative(m.dislikes) }))
    }

    async fn insert(&self, input: NewLocation) -> Result<Location, ServiceError> {
        Ok(to_location(models::location::create(&self.db, &input).await?))
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(models::location::count(&self.db).await?)
    }
}
