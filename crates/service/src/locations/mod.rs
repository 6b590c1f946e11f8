pub mod repository;
pub mod service;

pub use repository::{LocationRepository, SeaOrmLocationRepository};
pub use service::LocationService;
