use std::sync::Arc;

use common::types::{Location, Vote, VoteCounts};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::locations::repository::LocationRepository;

/// Location listing and voting.
pub struct LocationService<R: LocationRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: LocationRepository + ?Sized> LocationService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<Location>, ServiceError> { self.repo.list().await }

    pub async fn like(&self, id: Uuid) -> Result<VoteCounts, ServiceError> { self.vote(id, Vote::Like).await }

    pub async fn dislike(&self, id: Uuid) -> Result<VoteCounts, ServiceError> { self.vote(id, Vote::Dislike).await }

    /// Increment one counter and return both counters as stored afterwards.
    #[instrument(skip(self), fields(location_id = %id, vote = vote.as_path()))]
    pub async fn vote(&self, id: Uuid, vote: Vote) -> Result<VoteCounts, ServiceError> {
        let counts = self
            .repo
            .increment(id, vote)
            .await?
            .ok_or_else(|| ServiceError::not_found("Location"))?;
        info!(likes = counts.likes, dislikes = counts.dislikes, "location_voted");
        Ok(counts)
    }
}
