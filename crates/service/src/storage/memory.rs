use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::types::{Location, Vote, VoteCounts};
use models::location::NewLocation;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::auth::domain::{AuthUser, Credentials, NewUser};
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;
use crate::errors::ServiceError;
use crate::favorites::repository::FavoriteRepository;
use crate::locations::repository::LocationRepository;

#[derive(Default)]
struct Inner {
    users: HashMap<Uuid, AuthUser>,
    emails: HashMap<String, Uuid>,
    credentials: HashMap<Uuid, Credentials>,
    locations: HashMap<Uuid, Location>,
    favorites: HashMap<Uuid, Vec<Uuid>>,
}

/// In-process store implementing every repository trait.
///
/// One lock guards all tables, so each repository call is atomic.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    /// Drop a location without touching favorites that point at it.
    pub async fn remove_location(&self, id: Uuid) -> bool {
        self.inner.write().await.locations.remove(&id).is_some()
    }
}

#[async_trait]
impl AuthRepository for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthError> {
        let inner = self.inner.read().await;
        Ok(inner.emails.get(email).and_then(|id| inner.users.get(id)).cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<AuthUser, AuthError> {
        let mut inner = self.inner.write().await;
        if inner.emails.contains_key(&user.email) {
            return Err(AuthError::Conflict);
        }
        let created = AuthUser { id: Uuid::new_v4(), email: user.email, name: user.name };
        inner.emails.insert(created.email.clone(), created.id);
        inner.credentials.insert(
            created.id,
            Credentials { user_id: created.id, password_hash: user.password_hash, password_algorithm: user.password_algorithm },
        );
        inner.users.insert(created.id, created.clone());
        Ok(created)
    }

    async fn get_credentials(&self, user_id: Uuid) -> Result<Option<Credentials>, AuthError> {
        Ok(self.inner.read().await.credentials.get(&user_id).cloned())
    }
}

#[async_trait]
impl LocationRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<Location>, ServiceError> {
        let inner = self.inner.read().await;
        let mut all: Vec<Location> = inner.locations.values().cloned().collect();
        all.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
        Ok(all)
    }

    async fn find_many(&self, ids: &[Uuid]) -> Result<Vec<Location>, ServiceError> {
        let inner = self.inner.read().await;
        Ok(ids.iter().filter_map(|id| inner.locations.get(id)).cloned().collect())
    }

    async fn exists(&self, id: Uuid) -> Result<bool, ServiceError> {
        Ok(self.inner.read().await.locations.contains_key(&id))
    }

    async fn increment(&self, id: Uuid, vote: Vote) -> Result<Option<VoteCounts>, ServiceError> {
        let mut inner = self.inner.write().await;
        Ok(inner.locations.get_mut(&id).map(|loc| {
            let counts = vote.apply(loc.counts());
            loc.likes = counts.likes;
            loc.dislikes = counts.dislikes;
            counts
        }))
    }

    async fn insert(&self, input: NewLocation) -> Result<Location, ServiceError> {
        models::location::validate(&input)?;
        let loc = Location {
            id: Uuid::new_v4(),
            src: input.src,
            url: input.url,
            title: input.title,
            description: input.description,
            type_icon: input.type_icon,
            types: input.types,
            latitude: input.latitude,
            longitude: input.longitude,
            likes: input.likes,
            dislikes: input.dislikes,
        };
        self.inner.write().await.locations.insert(loc.id, loc.clone());
        Ok(loc)
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(self.inner.read().await.locations.len() as u64)
    }
}

#[async_trait]
impl FavoriteRepository for MemoryStore {
    async fn user_exists(&self, user_id: Uuid) -> Result<bool, ServiceError> {
        Ok(self.inner.read().await.users.contains_key(&user_id))
    }

    async fn location_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, ServiceError> {
        Ok(self.inner.read().await.favorites.get(&user_id).cloned().unwrap_or_default())
    }

    async fn add(&self, user_id: Uuid, location_id: Uuid) -> Result<bool, ServiceError> {
        let mut inner = self.inner.write().await;
        let list = inner.favorites.entry(user_id).or_default();
        if list.contains(&location_id) {
            return Ok(false);
        }
        list.push(location_id);
        Ok(true)
    }

    async fn remove(&self, user_id: Uuid, location_id: Uuid) -> Result<bool, ServiceError> {
        let mut inner = self.inner.write().await;
        let Some(list) = inner.favorites.get_mut(&user_id) else { return Ok(false) };
        let before = list.len();
        list.retain(|id| *id != location_id);
        Ok(list.len() < before)
    }
}
