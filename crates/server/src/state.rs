use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::auth::repo::seaorm::SeaOrmAuthRepository;
use service::auth::repository::AuthRepository;
use service::auth::{AuthConfig, AuthService};
use service::favorites::{FavoriteRepository, FavoriteService, SeaOrmFavoriteRepository};
use service::locations::{LocationRepository, LocationService, SeaOrmLocationRepository};
use service::storage::memory::MemoryStore;

pub type DynAuthService = AuthService<dyn AuthRepository>;
pub type DynLocationService = LocationService<dyn LocationRepository>;
pub type DynFavoriteService = FavoriteService<dyn FavoriteRepository, dyn LocationRepository>;

/// Shared handler state: services over type-erased repositories.
#[derive(Clone)]
pub struct ServerState {
    pub auth: Arc<DynAuthService>,
    pub locations: Arc<DynLocationService>,
    pub favorites: Arc<DynFavoriteService>,
    /// Kept so the seeding step can reach the same store the handlers use.
    pub location_repo: Arc<dyn LocationRepository>,
}

impl ServerState {
    pub fn new(
        auth_repo: Arc<dyn AuthRepository>,
        location_repo: Arc<dyn LocationRepository>,
        favorite_repo: Arc<dyn FavoriteRepository>,
        auth: &AuthConfig,
    ) -> Self {
        Self::with_auth(Arc::new(AuthService::from_config(auth_repo, auth)), location_repo, favorite_repo)
    }

    /// State with a pre-built auth service (custom hasher or signer).
    pub fn with_auth(
        auth: Arc<DynAuthService>,
        location_repo: Arc<dyn LocationRepository>,
        favorite_repo: Arc<dyn FavoriteRepository>,
    ) -> Self {
        Self {
            auth,
            locations: Arc::new(LocationService::new(Arc::clone(&location_repo))),
            favorites: Arc::new(FavoriteService::new(favorite_repo, Arc::clone(&location_repo))),
            location_repo,
        }
    }

    pub fn postgres(db: DatabaseConnection, auth: &AuthConfig) -> Self {
        Self::new(
            Arc::new(SeaOrmAuthRepository { db: db.clone() }),
            Arc::new(SeaOrmLocationRepository { db: db.clone() }),
            Arc::new(SeaOrmFavoriteRepository { db }),
            auth,
        )
    }

    pub fn in_memory(store: MemoryStore, auth: &AuthConfig) -> Self {
        let store = Arc::new(store);
        Self::new(store.clone(), store.clone(), store, auth)
    }
}
