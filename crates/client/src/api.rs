//! HTTP client for the locations API.

use common::types::{Location, MessageResponse, TokenResponse, Vote, VoteCounts};
use reqwest::{redirect::Policy, Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error, instrument};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("{message} (status {status})")]
    Api { status: u16, message: String },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("You need to log in first")]
    NotLoggedIn,
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: String,
}

/// API client holding the bearer token after a successful login.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// `base_url` without a trailing slash, e.g. `http://127.0.0.1:3000`.
    /// Redirects are not followed so registration can observe its 303.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder()
            .redirect(Policy::none())
            .build()
            .map_err(|e| ClientError::Request(e.to_string()))?;
        Ok(Self { client, base_url: base_url.into().trim_end_matches('/').to_string(), token: None })
    }

    pub fn token(&self) -> Option<&str> { self.token.as_deref() }

    pub fn set_token(&mut self, token: Option<String>) { self.token = token; }

    pub fn is_logged_in(&self) -> bool { self.token.is_some() }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(&self) -> Result<&str, ClientError> {
        self.token.as_deref().ok_or(ClientError::NotLoggedIn)
    }

    /// All locations; on any failure the error is logged and the list is empty.
    pub async fn fetch_locations(&self) -> Vec<Location> {
        match self.try_fetch_locations().await {
            Ok(list) => list,
            Err(e) => {
                error!(err = %e, "failed to fetch locations");
                Vec::new()
            }
        }
    }

    pub async fn try_fetch_locations(&self) -> Result<Vec<Location>, ClientError> {
        let resp = self.client.get(self.url("/locations")).send().await.map_err(request_err)?;
        json_or_error(resp).await
    }

    pub async fn like(&self, id: Uuid) -> Result<VoteCounts, ClientError> { self.vote(id, Vote::Like).await }

    pub async fn dislike(&self, id: Uuid) -> Result<VoteCounts, ClientError> { self.vote(id, Vote::Dislike).await }

    #[instrument(skip(self), fields(location_id = %id))]
    pub async fn vote(&self, id: Uuid, vote: Vote) -> Result<VoteCounts, ClientError> {
        let resp = self
            .client
            .post(self.url(&format!("/locations/{}/{}", id, vote.as_path())))
            .send()
            .await
            .map_err(request_err)?;
        json_or_error(resp).await
    }

    /// Succeeds when the server answers with its redirect to the login page.
    #[instrument(skip(self, password))]
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<(), ClientError> {
        let body = serde_json::json!({"name": name, "email": email, "password": password});
        let resp = self.client.post(self.url("/register")).json(&body).send().await.map_err(request_err)?;
        if resp.status().is_redirection() || resp.status().is_success() {
            debug!("registered");
            return Ok(());
        }
        Err(api_error(resp).await)
    }

    /// Store the issued token for later favorite calls.
    #[instrument(skip(self, password))]
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), ClientError> {
        let body = serde_json::json!({"email": email, "password": password});
        let resp = self.client.post(self.url("/login")).json(&body).send().await.map_err(request_err)?;
        let TokenResponse { token }: TokenResponse = json_or_error(resp).await?;
        self.token = Some(token);
        Ok(())
    }

    pub fn logout(&mut self) { self.token = None; }

    pub async fn favorites(&self) -> Result<Vec<Location>, ClientError> {
        let resp = self
            .client
            .get(self.url("/favorites"))
            .bearer_auth(self.bearer()?)
            .send()
            .await
            .map_err(request_err)?;
        json_or_error(resp).await
    }

    pub async fn save_favorite(&self, id: Uuid) -> Result<String, ClientError> {
        let resp = self
            .client
            .post(self.url(&format!("/favorites/{}", id)))
            .bearer_auth(self.bearer()?)
            .send()
            .await
            .map_err(request_err)?;
        let MessageResponse { message }: MessageResponse = json_or_error(resp).await?;
        Ok(message)
    }

    pub async fn remove_favorite(&self, id: Uuid) -> Result<String, ClientError> {
        let resp = self
            .client
            .delete(self.url(&format!("/favorites/{}", id)))
            .bearer_auth(self.bearer()?)
            .send()
            .await
            .map_err(request_err)?;
        let MessageResponse { message }: MessageResponse = json_or_error(resp).await?;
        Ok(message)
    }
}

fn request_err(e: reqwest::Error) -> ClientError {
    ClientError::Request(e.to_string())
}

async fn json_or_error<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    if !resp.status().is_success() {
        return Err(api_error(resp).await);
    }
    resp.json::<T>().await.map_err(|e| ClientError::Decode(e.to_string()))
}

/// Server message from `{error, message}`, or the status reason when the body is not JSON.
async fn api_error(resp: Response) -> ClientError {
    let status = resp.status();
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status.canonical_reason().unwrap_or("request failed").to_string(),
    };
    ClientError::Api { status: status.as_u16(), message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let c = ApiClient::new("http://localhost:3000/").unwrap();
        assert_eq!(c.url("/locations"), "http://localhost:3000/locations");
    }

    #[test]
    fn debug_hides_token() {
        let mut c = ApiClient::new("http://localhost").unwrap();
        c.set_token(Some("secret-token".into()));
        assert!(!format!("{:?}", c).contains("secret-token"));
    }

    #[tokio::test]
    async fn favorites_need_login() {
        let c = ApiClient::new("http://127.0.0.1:9").unwrap();
        assert!(matches!(c.favorites().await, Err(ClientError::NotLoggedIn)));
        assert!(matches!(c.save_favorite(Uuid::new_v4()).await, Err(ClientError::NotLoggedIn)));
        assert!(matches!(c.remove_favorite(Uuid::new_v4()).await, Err(ClientError::NotLoggedIn)));
    }

    #[tokio::test]
    async fn unreachable_server_degrades_to_empty_list() {
        // port 9 (discard) is closed on test machines
        let c = ApiClient::new("http://127.0.0.1:9").unwrap();
        assert!(c.fetch_locations().await.is_empty());
        assert!(matches!(c.try_fetch_locations().await, Err(ClientError::Request(_))));
    }
}
