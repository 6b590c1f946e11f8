use common::types::{Location, Vote, VoteCounts};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::{ApiClient, ClientError};
use crate::controller::FilterController;
use crate::store::LocationBook;

/// Page-level glue: loads locations, routes votes and favorites through the
/// API and keeps the book and the controller in step.
#[derive(Debug)]
pub struct LocationsApp {
    api: ApiClient,
    book: LocationBook,
    controller: FilterController,
}

impl LocationsApp {
    pub fn new(api: ApiClient) -> Self {
        Self { api, book: LocationBook::default(), controller: FilterController::default() }
    }

    /// Fetch every location and re-apply the current filters.
    /// Returns how many locations were loaded; a failed fetch loads none.
    pub async fn load(&mut self) -> usize {
        let locations = self.api.fetch_locations().await;
        let count = locations.len();
        self.book.replace_all(locations.clone());
        self.controller.set_locations(locations);
        info!(count, "locations loaded");
        count
    }

    pub async fn like(&mut self, id: Uuid) -> Result<VoteCounts, ClientError> { self.vote(id, Vote::Like).await }

    pub async fn dislike(&mut self, id: Uuid) -> Result<VoteCounts, ClientError> { self.vote(id, Vote::Dislike).await }

    /// Apply the server's counters, not a local increment.
    pub async fn vote(&mut self, id: Uuid, vote: Vote) -> Result<VoteCounts, ClientError> {
        let counts = self.api.vote(id, vote).await.map_err(|e| {
            error!(location_id = %id, err = %e, "vote failed");
            e
        })?;
        self.book.apply_votes(id, counts);
        self.controller.apply_votes(id, counts);
        Ok(counts)
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), ClientError> {
        self.api.login(email, password).await
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<(), ClientError> {
        self.api.register(name, email, password).await
    }

    pub async fn save_favorite(&self, id: Uuid) -> Result<String, ClientError> {
        self.api.save_favorite(id).await
    }

    pub async fn remove_favorite(&self, id: Uuid) -> Result<String, ClientError> {
        self.api.remove_favorite(id).await
    }

    pub async fn favorites(&self) -> Result<Vec<Location>, ClientError> {
        self.api.favorites().await
    }

    pub fn book(&self) -> &LocationBook { &self.book }

    pub fn controller(&self) -> &FilterController { &self.controller }

    pub fn controller_mut(&mut self) -> &mut FilterController { &mut self.controller }

    pub fn api(&self) -> &ApiClient { &self.api }
}
