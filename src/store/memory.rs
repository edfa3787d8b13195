//! In-memory world store
//!
//! Used by tests; the production store is [`MySqlStore`](super::MySqlStore).

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use super::errors::{StoreError, StoreResult};
use super::types::{City, Country, NewCity};
use super::WorldStore;

/// In-memory store backed by plain vectors.
///
/// Name matching folds ASCII case, approximating the case-insensitive
/// collation the MySQL store runs with.
pub struct MemoryStore {
    cities: RwLock<Vec<City>>,
    countries: RwLock<Vec<Country>>,
    next_id: AtomicI32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            cities: RwLock::new(Vec::new()),
            countries: RwLock::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }

    /// Seed a city, keeping the identifier counter ahead of seeded IDs.
    pub fn add_city(&self, city: City) -> StoreResult<()> {
        self.next_id.fetch_max(city.id + 1, Ordering::SeqCst);
        self.cities
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?
            .push(city);
        Ok(())
    }

    pub fn add_country(&self, country: Country) -> StoreResult<()> {
        self.countries
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?
            .push(country);
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WorldStore for MemoryStore {
    async fn find_city_by_name(&self, name: &str) -> StoreResult<City> {
        let cities = self
            .cities
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;

        cities
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .cloned()
            .ok_or_else(|| StoreError::not_found("city", name))
    }

    async fn find_city_by_id(&self, id: i32) -> StoreResult<City> {
        let cities = self
            .cities
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;

        cities
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("city", id.to_string()))
    }

    async fn list_cities(&self) -> StoreResult<Vec<City>> {
        let cities = self
            .cities
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;

        Ok(cities.clone())
    }

    async fn find_country_by_name(&self, name: &str) -> StoreResult<Country> {
        let countries = self
            .countries
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;

        countries
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .cloned()
            .ok_or_else(|| StoreError::not_found("country", name))
    }

    async fn insert_city(&self, city: NewCity) -> StoreResult<City> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let city = city.into_city(id);

        self.cities
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?
            .push(city.clone());

        Ok(city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_city(name: &str) -> NewCity {
        NewCity {
            name: name.to_string(),
            country_code: "ZZZ".to_string(),
            district: "Test".to_string(),
            population: 100,
        }
    }

    #[tokio::test]
    async fn test_insert_then_find_by_name() {
        let store = MemoryStore::new();

        let inserted = store.insert_city(new_city("Testville")).await.unwrap();
        assert!(inserted.id > 0);

        let found = store.find_city_by_name("Testville").await.unwrap();
        assert_eq!(found, inserted);
    }

    #[tokio::test]
    async fn test_find_is_case_insensitive() {
        let store = MemoryStore::new();
        store.insert_city(new_city("Testville")).await.unwrap();

        let found = store.find_city_by_name("TESTVILLE").await.unwrap();
        assert_eq!(found.name, "Testville");
    }

    #[tokio::test]
    async fn test_missing_city_is_not_found() {
        let store = MemoryStore::new();

        let err = store.find_city_by_name("Atlantis").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_list_cities_empty_then_populated() {
        let store = MemoryStore::new();
        assert!(store.list_cities().await.unwrap().is_empty());

        store.insert_city(new_city("A")).await.unwrap();
        store.insert_city(new_city("B")).await.unwrap();
        assert_eq!(store.list_cities().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_seeded_ids_do_not_collide_with_inserts() {
        let store = MemoryStore::new();
        store
            .add_city(City {
                id: 40,
                name: "Seeded".to_string(),
                country_code: "ZZZ".to_string(),
                district: "Test".to_string(),
                population: 1,
            })
            .unwrap();

        let inserted = store.insert_city(new_city("Fresh")).await.unwrap();
        assert!(inserted.id > 40);
    }
}
