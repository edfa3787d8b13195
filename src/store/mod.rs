//! # World Store
//!
//! Data access for the `city` and `country` tables. The [`WorldStore`] trait
//! is the seam between HTTP handlers and the backing store: the production
//! implementation runs parameterized queries over a MySQL pool, while tests
//! use an in-memory store.
//!
//! Every operation is stateless per call; a handler acquires store access
//! only for the duration of its one or two queries.

pub mod errors;
pub mod memory;
pub mod mysql;
pub mod types;

use async_trait::async_trait;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use mysql::{DbConfig, MySqlStore};
pub use types::{City, Country, CountryProfile, NewCity};

/// Read/write access to the world dataset.
///
/// Lookups are exact-match; case folding is decided by the backing store's
/// collation. `list_cities` is unbounded and never fails on an empty table.
#[async_trait]
pub trait WorldStore: Send + Sync {
    async fn find_city_by_name(&self, name: &str) -> StoreResult<City>;

    /// Lookup by identifier, used only for capital resolution.
    async fn find_city_by_id(&self, id: i32) -> StoreResult<City>;

    async fn list_cities(&self) -> StoreResult<Vec<City>>;

    async fn find_country_by_name(&self, name: &str) -> StoreResult<Country>;

    /// Insert a city and echo it back. Implementations may or may not read
    /// back the server-assigned identifier.
    async fn insert_city(&self, city: NewCity) -> StoreResult<City>;
}

/// Fetch a country and resolve its capital reference.
///
/// The country lookup propagates errors as usual. The capital lookup never
/// does: a zero reference, a dangling reference, or a backend failure all
/// yield `capital_city: None` and the country is still returned.
pub async fn country_profile(store: &dyn WorldStore, name: &str) -> StoreResult<CountryProfile> {
    let country = store.find_country_by_name(name).await?;
    let capital_city = resolve_capital(store, &country).await;
    Ok(CountryProfile {
        country,
        capital_city,
    })
}

async fn resolve_capital(store: &dyn WorldStore, country: &Country) -> Option<City> {
    if country.capital == 0 {
        return None;
    }

    match store.find_city_by_id(country.capital).await {
        Ok(city) => Some(city),
        Err(err) => {
            tracing::warn!(
                country = %country.code,
                capital = country.capital,
                error = %err,
                "capital did not resolve"
            );
            None
        }
    }
}
