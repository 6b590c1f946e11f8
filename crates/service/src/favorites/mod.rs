pub mod repository;
pub mod service;

pub use repository::{FavoriteRepository, SeaOrmFavoriteRepository};
pub use service::FavoriteService;
