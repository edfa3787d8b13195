//! # HTTP Server Module
//!
//! Axum server exposing the world dataset.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /cities` - Full city listing
//! - `GET /cities/{cityName}` - City by exact name
//! - `GET /countries/{countryName}` - Country by exact name, capital embedded
//! - `POST /addcity` - Insert a city

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;
pub mod world_routes;

pub use config::HttpServerConfig;
pub use errors::ApiError;
pub use server::HttpServer;
