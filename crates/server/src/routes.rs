pub mod auth;
pub mod favorites;
pub mod locations;

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use uuid::Uuid;

use common::types::Health;

use crate::errors::JsonApiError;
use crate::openapi::ApiDoc;
use crate::state::ServerState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Ids in paths that do not parse reference nothing.
pub(crate) fn parse_id(raw: &str, entity: &str) -> Result<Uuid, JsonApiError> {
    Uuid::parse_str(raw).map_err(|_| JsonApiError::not_found(format!("{} not found", entity)))
}

/// Build the full application router: public routes plus bearer-protected favorites.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/locations", get(locations::list))
        .route("/locations/:id/like", post(locations::like))
        .route("/locations/:id/dislike", post(locations::dislike))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login));

    let protected = Router::new()
        .route("/favorites", get(favorites::list))
        .route("/favorites/:id", post(favorites::add).delete(favorites::remove))
        .route_layer(middleware::from_fn_with_state(state.clone(), crate::auth::require_bearer));

    public
        .merge(protected)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
