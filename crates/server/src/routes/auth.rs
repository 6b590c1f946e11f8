use axum::extract::State;
use axum::response::Redirect;
use axum::Json;
use common::types::TokenResponse;
use service::auth::domain::{LoginInput, RegisterInput};

use crate::errors::JsonApiError;
use crate::extract::JsonOrForm;
use crate::state::ServerState;

#[utoipa::path(
    post, path = "/register", tag = "auth",
    request_body(content = crate::openapi::RegisterRequest, content_type = "application/json"),
    responses(
        (status = 303, description = "Registered, redirect to /login"),
        (status = 400, description = "Invalid input or email already exists"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn register(State(state): State<ServerState>, JsonOrForm(input): JsonOrForm<RegisterInput>) -> Result<Redirect, JsonApiError> {
    state.auth.register(input).await?;
    Ok(Redirect::to("/login"))
}

#[utoipa::path(
    post, path = "/login", tag = "auth",
    request_body(content = crate::openapi::LoginRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "Bearer token", body = crate::openapi::TokenResponseDoc),
        (status = 400, description = "Invalid credentials"),
        (status = 404, description = "User not found")
    )
)]
pub async fn login(State(state): State<ServerState>, JsonOrForm(input): JsonOrForm<LoginInput>) -> Result<Json<TokenResponse>, JsonApiError> {
    let session = state.auth.login(input).await?;
    Ok(Json(TokenResponse { token: session.token }))
}
