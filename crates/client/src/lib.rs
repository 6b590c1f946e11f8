//! Client tier for the locations API.
//!
//! `api` talks HTTP, `store` keeps the fetched locations, and the rest turns
//! a location list plus filter facets into map and grid rendering inputs.

pub mod api;
pub mod app;
pub mod controller;
pub mod filter;
pub mod geo;
pub mod store;
pub mod view;

pub use api::{ApiClient, ClientError};
pub use app::LocationsApp;
pub use controller::FilterController;
pub use filter::{Category, FilterCriteria};
pub use geo::{distance_km, Coordinates};
