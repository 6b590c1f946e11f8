use axum::extract::{Path, State};
use axum::{Extension, Json};
use common::types::{Location, MessageResponse};

use crate::auth::AuthenticatedUser;
use crate::errors::JsonApiError;
use crate::routes::parse_id;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/favorites", tag = "favorites",
    responses(
        (status = 200, description = "Favorite locations in the order they were added", body = [crate::openapi::LocationDoc]),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Invalid or expired token"),
        (status = 404, description = "User not found")
    )
)]
pub async fn list(State(state): State<ServerState>, Extension(user): Extension<AuthenticatedUser>) -> Result<Json<Vec<Location>>, JsonApiError> {
    Ok(Json(state.favorites.list(user.0).await?))
}

#[utoipa::path(
    post, path = "/favorites/{id}", tag = "favorites",
    params(("id" = String, Path, description = "Location id")),
    responses(
        (status = 200, description = "Saved", body = crate::openapi::MessageResponseDoc),
        (status = 400, description = "Already in favorites"),
        (status = 404, description = "User or location not found")
    )
)]
pub async fn add(
    State(state): State<ServerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    let location_id = parse_id(&id, "Location")?;
    state.favorites.add(user.0, location_id).await?;
    Ok(Json(MessageResponse::new("Location saved to favorites")))
}

#[utoipa::path(
    delete, path = "/favorites/{id}", tag = "favorites",
    params(("id" = String, Path, description = "Location id")),
    responses(
        (status = 200, description = "Removed (or was not a favorite)", body = crate::openapi::MessageResponseDoc),
        (status = 404, description = "User not found or malformed id")
    )
)]
pub async fn remove(
    State(state): State<ServerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    let location_id = parse_id(&id, "Location")?;
    state.favorites.remove(user.0, location_id).await?;
    Ok(Json(MessageResponse::new("Location removed from favorites")))
}
