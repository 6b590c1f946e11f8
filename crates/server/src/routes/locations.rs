use axum::extract::{Path, State};
use axum::Json;
use common::types::{Location, Vote, VoteCounts};

use crate::errors::JsonApiError;
use crate::routes::parse_id;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/locations", tag = "locations",
    responses(
        (status = 200, description = "All locations", body = [crate::openapi::LocationDoc]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Location>>, JsonApiError> {
    Ok(Json(state.locations.list().await?))
}

async fn vote(state: ServerState, raw_id: &str, vote: Vote) -> Result<Json<VoteCounts>, JsonApiError> {
    let id = parse_id(raw_id, "Location")?;
    Ok(Json(state.locations.vote(id, vote).await?))
}

#[utoipa::path(
    post, path = "/locations/{id}/like", tag = "locations",
    params(("id" = String, Path, description = "Location id")),
    responses(
        (status = 200, description = "Counters after the vote", body = crate::openapi::VoteCountsDoc),
        (status = 404, description = "Location not found")
    )
)]
pub async fn like(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<VoteCounts>, JsonApiError> {
    vote(state, &id, Vote::Like).await
}

#[utoipa::path(
    post, path = "/locations/{id}/dislike", tag = "locations",
    params(("id" = String, Path, description = "Location id")),
    responses(
        (status = 200, description = "Counters after the vote", body = crate::openapi::VoteCountsDoc),
        (status = 404, description = "Location not found")
    )
)]
pub async fn dislike(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<VoteCounts>, JsonApiError> {
    vote(state, &id, Vote::Dislike).await
}
