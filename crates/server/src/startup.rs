use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::{AppConfig, StorageBackend};
use dotenvy::dotenv;
use migration::MigratorTrait;
use service::auth::AuthConfig;
use service::storage::memory::MemoryStore;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

pub fn auth_config(cfg: &AppConfig) -> Result<AuthConfig, StartupError> {
    let token_ttl = i64::try_from(cfg.auth.token_ttl_secs)
        .ok()
        .and_then(chrono::Duration::try_seconds)
        .ok_or_else(|| StartupError::InvalidConfig(format!("auth.token_ttl_secs out of range: {}", cfg.auth.token_ttl_secs)))?;
    Ok(AuthConfig { jwt_secret: cfg.auth.jwt_secret.clone(), token_ttl })
}

/// Connect the configured backend. Postgres is migrated before use.
pub async fn build_state(cfg: &AppConfig) -> Result<ServerState, StartupError> {
    let auth = auth_config(cfg)?;
    let state = match cfg.storage.backend {
        StorageBackend::Postgres => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            migration::Migrator::up(&db, None)
                .await
                .map_err(|e| StartupError::Any(anyhow::anyhow!("migrate up: {}", e)))?;
            info!("database migrated");
            ServerState::postgres(db, &auth)
        }
        StorageBackend::Memory => {
            warn!("using in-memory storage; data is lost on restart");
            ServerState::in_memory(MemoryStore::default(), &auth)
        }
    };
    if let Some(path) = &cfg.storage.seed_path {
        let items = service::seed::load_seed_file(path).await?;
        service::seed::seed_if_empty(state.location_repo.as_ref(), items).await?;
    }
    Ok(state)
}

pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

/// Load config, then serve until the process is stopped.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();
    let cfg = AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    run_with_config(cfg).await
}

pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let app = build_app(state);

    let addr = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, backend = ?cfg.storage.backend, "starting server");
    axum::serve(listener, app).await?;
    Ok(())
}
