use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::errors::JsonApiError;
use crate::state::ServerState;

/// Id of the caller, inserted into request extensions by [`require_bearer`].
#[derive(Clone, Copy, Debug)]
pub struct AuthenticatedUser(pub Uuid);

/// Route middleware for protected routes: validates `Authorization: Bearer <token>`.
/// Missing token is 401, anything invalid or expired is 403.
pub async fn require_bearer(State(state): State<ServerState>, mut req: Request, next: Next) -> Result<Response, JsonApiError> {
    let header = req.headers().get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    let user_id = state.auth.authenticate(header).map_err(|e| {
        tracing::warn!(path = %req.uri().path(), err = %e, "bearer authentication failed");
        JsonApiError::from(e)
    })?;
    req.extensions_mut().insert(AuthenticatedUser(user_id));
    Ok(next.run(req).await)
}
