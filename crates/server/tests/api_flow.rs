use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use service::auth::repository::AuthRepository;
use service::auth::{Argon2Hasher, AuthService, JwtSigner, TokenSigner};
use service::locations::LocationRepository;
use service::storage::memory::MemoryStore;
use tower::ServiceExt;
use uuid::Uuid;

use server::state::ServerState;

const SECRET: &str = "test-secret";

struct TestApp {
    app: Router,
    store: Arc<MemoryStore>,
    location_id: Uuid,
}

fn new_location(title: &str) -> models::location::NewLocation {
    models::location::NewLocation {
        title: title.into(),
        description: "desc".into(),
        src: "img/x.jpg".into(),
        url: None,
        type_icon: "Cultura".into(),
        types: vec!["Cultura".into()],
        latitude: 38.71,
        longitude: -9.14,
        likes: 3,
        dislikes: 1,
    }
}

async fn build_app() -> anyhow::Result<TestApp> {
    let store = Arc::new(MemoryStore::default());
    let loc = store.insert(new_location("Castelo")).await?;
    let auth_repo: Arc<dyn AuthRepository> = store.clone();
    let auth = Arc::new(AuthService::new(
        auth_repo,
        Arc::new(Argon2Hasher::with_params(1024, 1, 1)?),
        Arc::new(JwtSigner::hourly(SECRET)),
    ));
    let state = ServerState::with_auth(auth, store.clone(), store.clone());
    Ok(TestApp { app: server::startup::build_app(state), store, location_id: loc.id })
}

fn json_request(method: &str, uri: &str, body: Value) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body)?))?)
}

fn authed(method: &str, uri: &str, token: &str) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())?)
}

async fn body_json(resp: axum::response::Response) -> anyhow::Result<Value> {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

async fn register_and_login(app: &Router, email: &str) -> anyhow::Result<String> {
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/register", json!({"name": "Tester", "email": email, "password": "S3curePass!"}))?)
        .await?;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login");

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/login", json!({"email": email, "password": "S3curePass!"}))?)
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await?;
    Ok(body["token"].as_str().unwrap().to_string())
}

#[tokio::test]
async fn health_and_openapi() -> anyhow::Result<()> {
    let t = build_app().await?;
    let resp = t.app.clone().oneshot(Request::get("/health").body(Body::empty())?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await?, json!({"status": "ok"}));

    let resp = t.app.oneshot(Request::get("/api-docs/openapi.json").body(Body::empty())?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let doc = body_json(resp).await?;
    assert!(doc["paths"]["/favorites/{id}"].is_object());
    Ok(())
}

#[tokio::test]
async fn list_and_vote() -> anyhow::Result<()> {
    let t = build_app().await?;
    let resp = t.app.clone().oneshot(Request::get("/locations").body(Body::empty())?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let list = body_json(resp).await?;
    assert_eq!(list[0]["typeicon"], "Cultura");
    assert_eq!(list[0]["likes"], 3);

    let uri = format!("/locations/{}/like", t.location_id);
    let resp = t.app.clone().oneshot(Request::post(&uri).body(Body::empty())?).await?;
    assert_eq!(body_json(resp).await?, json!({"likes": 4, "dislikes": 1}));
    let resp = t.app.clone().oneshot(Request::post(&uri).body(Body::empty())?).await?;
    assert_eq!(body_json(resp).await?, json!({"likes": 5, "dislikes": 1}));

    let uri = format!("/locations/{}/dislike", t.location_id);
    let resp = t.app.clone().oneshot(Request::post(&uri).body(Body::empty())?).await?;
    assert_eq!(body_json(resp).await?, json!({"likes": 5, "dislikes": 2}));

    let uri = format!("/locations/{}/like", Uuid::new_v4());
    let resp = t.app.clone().oneshot(Request::post(&uri).body(Body::empty())?).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await?;
    assert_eq!(body["message"], "Location not found");

    let resp = t.app.oneshot(Request::post("/locations/not-a-uuid/like").body(Body::empty())?).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn register_errors() -> anyhow::Result<()> {
    let t = build_app().await?;
    register_and_login(&t.app, "dup@example.com").await?;

    let resp = t
        .app
        .clone()
        .oneshot(json_request("POST", "/register", json!({"name": "Other", "email": "dup@example.com", "password": "x"}))?)
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await?;
    assert_eq!(body["message"], "Email already exists. Please choose another.");

    let resp = t.app.clone().oneshot(json_request("POST", "/register", json!({"email": "a@b.c"}))?).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = t
        .app
        .oneshot(
            Request::post("/register")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))?,
        )
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn form_encoded_registration_and_login() -> anyhow::Result<()> {
    let t = build_app().await?;
    let form = |uri: &str, body: &'static str| {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
    };
    let resp = t.app.clone().oneshot(form("/register", "name=Ana&email=ana%40example.com&password=pw123")?).await?;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let resp = t.app.oneshot(form("/login", "email=ana%40example.com&password=pw123")?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_json(resp).await?["token"].is_string());
    Ok(())
}

#[tokio::test]
async fn login_errors() -> anyhow::Result<()> {
    let t = build_app().await?;
    register_and_login(&t.app, "user@example.com").await?;

    let resp = t
        .app
        .clone()
        .oneshot(json_request("POST", "/login", json!({"email": "user@example.com", "password": "wrong"}))?)
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await?["message"], "Invalid credentials.");

    let resp = t
        .app
        .oneshot(json_request("POST", "/login", json!({"email": "ghost@example.com", "password": "x"}))?)
        .await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await?["message"], "User not found.");
    Ok(())
}

#[tokio::test]
async fn favorites_require_valid_bearer() -> anyhow::Result<()> {
    let t = build_app().await?;

    let resp = t.app.clone().oneshot(Request::get("/favorites").body(Body::empty())?).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = t
        .app
        .clone()
        .oneshot(Request::get("/favorites").header(header::AUTHORIZATION, "Bearer ").body(Body::empty())?)
        .await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = t.app.clone().oneshot(authed("GET", "/favorites", "garbage")?).await?;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = t
        .app
        .clone()
        .oneshot(Request::get("/favorites").header(header::AUTHORIZATION, "Basic dXNlcjpwdw==").body(Body::empty())?)
        .await?;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let expired = JwtSigner::new(SECRET, chrono::Duration::seconds(-10)).issue(Uuid::new_v4())?;
    let resp = t.app.clone().oneshot(authed("GET", "/favorites", &expired)?).await?;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // valid signature, user no longer exists
    let orphan = JwtSigner::hourly(SECRET).issue(Uuid::new_v4())?;
    let resp = t.app.oneshot(authed("GET", "/favorites", &orphan)?).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn favorites_lifecycle() -> anyhow::Result<()> {
    let t = build_app().await?;
    let token = register_and_login(&t.app, "fav@example.com").await?;
    let uri = format!("/favorites/{}", t.location_id);

    let resp = t.app.clone().oneshot(authed("POST", &uri, &token)?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await?["message"], "Location saved to favorites");

    let resp = t.app.clone().oneshot(authed("POST", &uri, &token)?).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await?["message"], "Location already in favorites");

    let missing = format!("/favorites/{}", Uuid::new_v4());
    let resp = t.app.clone().oneshot(authed("POST", &missing, &token)?).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    for method in ["POST", "DELETE"] {
        let resp = t.app.clone().oneshot(authed(method, "/favorites/not-a-uuid", &token)?).await?;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{method} with malformed id");
        assert_eq!(body_json(resp).await?["message"], "Location not found");
    }

    let resp = t.app.clone().oneshot(authed("GET", "/favorites", &token)?).await?;
    let list = body_json(resp).await?;
    assert_eq!(list.as_array().map(Vec::len), Some(1));
    assert_eq!(list[0]["id"], t.location_id.to_string());

    let resp = t.app.clone().oneshot(authed("DELETE", &uri, &token)?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = t.app.clone().oneshot(authed("DELETE", &uri, &token)?).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = t.app.oneshot(authed("GET", "/favorites", &token)?).await?;
    assert_eq!(body_json(resp).await?, json!([]));
    Ok(())
}

#[tokio::test]
async fn deleted_location_drops_out_of_favorites() -> anyhow::Result<()> {
    let t = build_app().await?;
    let token = register_and_login(&t.app, "stale@example.com").await?;
    let uri = format!("/favorites/{}", t.location_id);
    t.app.clone().oneshot(authed("POST", &uri, &token)?).await?;
    t.store.remove_location(t.location_id).await;

    let resp = t.app.oneshot(authed("GET", "/favorites", &token)?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await?, json!([]));
    Ok(())
}
