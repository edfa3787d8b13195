//! World HTTP Routes
//!
//! Endpoints for city and country lookups plus city insertion. Each handler
//! is a single stateless request/response cycle: bind input, run one query
//! (two for the country endpoint), map the outcome to a status code and a
//! JSON body.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::store::{self, City, CountryProfile, NewCity, StoreError, WorldStore};

use super::errors::ApiError;

// ==================
// Shared State
// ==================

/// World state shared across handlers
pub struct WorldState {
    pub store: Arc<dyn WorldStore>,
}

impl WorldState {
    pub fn new(store: Arc<dyn WorldStore>) -> Self {
        Self { store }
    }
}

// ==================
// World Routes
// ==================

/// Create world routes
pub fn world_routes(state: Arc<WorldState>) -> Router {
    Router::new()
        .route("/cities", get(list_cities_handler))
        .route("/cities/{cityName}", get(get_city_handler))
        .route("/countries/{countryName}", get(get_country_handler))
        .route("/addcity", post(add_city_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_cities_handler(
    State(state): State<Arc<WorldState>>,
) -> Result<Json<Vec<City>>, ApiError> {
    let cities = state
        .store
        .list_cities()
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(cities))
}

async fn get_city_handler(
    State(state): State<Arc<WorldState>>,
    Path(city_name): Path<String>,
) -> Result<Json<City>, ApiError> {
    match state.store.find_city_by_name(&city_name).await {
        Ok(city) => Ok(Json(city)),
        Err(StoreError::NotFound { .. }) => Err(ApiError::CityNotFound(city_name)),
        Err(err) => Err(ApiError::Internal(err.to_string())),
    }
}

async fn get_country_handler(
    State(state): State<Arc<WorldState>>,
    Path(country_name): Path<String>,
) -> Result<Json<CountryProfile>, ApiError> {
    match store::country_profile(state.store.as_ref(), &country_name).await {
        Ok(profile) => Ok(Json(profile)),
        Err(StoreError::NotFound { .. }) => Err(ApiError::CountryNotFound(country_name)),
        Err(err) => Err(ApiError::Internal(err.to_string())),
    }
}

async fn add_city_handler(
    State(state): State<Arc<WorldState>>,
    payload: Result<Json<NewCity>, JsonRejection>,
) -> Result<Json<City>, ApiError> {
    // Map the extractor rejection ourselves so type mismatches come back
    // as 400 rather than axum's default 422.
    let Json(new_city) = payload.map_err(|rej| ApiError::InvalidBody(rej.body_text()))?;

    let city = state
        .store
        .insert_city(new_city)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    // 200 with the echoed row, not 201.
    Ok(Json(city))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_world_state_creation() {
        let state = WorldState::new(Arc::new(MemoryStore::new()));
        let _router = world_routes(Arc::new(state));
    }
}
