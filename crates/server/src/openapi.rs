//! OpenAPI document served at `/api-docs/openapi.json`.

use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct RegisterRequest { pub name: String, pub email: String, pub password: String }

#[derive(ToSchema)]
pub struct LoginRequest { pub email: String, pub password: String }

#[derive(ToSchema)]
pub struct TokenResponseDoc { pub token: String }

#[derive(ToSchema)]
pub struct MessageResponseDoc { pub message: String }

#[derive(ToSchema)]
pub struct VoteCountsDoc { pub likes: u64, pub dislikes: u64 }

#[derive(ToSchema)]
pub struct LocationDoc {
    pub id: Uuid,
    pub src: String,
    pub url: Option<String>,
    pub title: String,
    pub description: String,
    /// Category icon tag, e.g. `Natureza`
    pub typeicon: String,
    pub types: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub likes: u64,
    pub dislikes: u64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::locations::list,
        crate::routes::locations::like,
        crate::routes::locations::dislike,
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::favorites::list,
        crate::routes::favorites::add,
        crate::routes::favorites::remove,
    ),
    components(
        schemas(
            HealthResponse,
            RegisterRequest,
            LoginRequest,
            TokenResponseDoc,
            MessageResponseDoc,
            VoteCountsDoc,
            LocationDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "locations"),
        (name = "auth"),
        (name = "favorites")
    )
)]
pub struct ApiDoc;
