//! MySQL world store
//!
//! Runs parameterized queries over a lazily-built connection pool. Rows are
//! mapped onto record structs by explicit per-column functions so the
//! boundary between wire format and storage format stays visible.

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::Row;

use super::errors::{StoreError, StoreResult};
use super::types::{City, Country, NewCity};
use super::WorldStore;

/// Collation the original dataset ships with; comparisons are
/// case-insensitive and accent-insensitive under it.
const COLLATION: &str = "utf8mb4_unicode_ci";

/// Connection settings, read from the environment.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database: String,
    /// Session timezone offset applied to every pooled connection
    /// (default: JST).
    pub timezone: String,
}

impl DbConfig {
    /// Read `DB_USERNAME`, `DB_PASSWORD`, `DB_HOSTNAME`, `DB_PORT`,
    /// `DB_DATABASE` and optionally `DB_TIMEZONE`.
    pub fn from_env() -> StoreResult<Self> {
        let port = require("DB_PORT")?
            .parse::<u16>()
            .map_err(|e| StoreError::config(format!("DB_PORT is not a port number: {}", e)))?;

        Ok(Self {
            username: require("DB_USERNAME")?,
            password: require("DB_PASSWORD")?,
            host: require("DB_HOSTNAME")?,
            port,
            database: require("DB_DATABASE")?,
            timezone: std::env::var("DB_TIMEZONE").unwrap_or_else(|_| "+09:00".to_string()),
        })
    }
}

fn require(name: &'static str) -> StoreResult<String> {
    std::env::var(name).map_err(|_| StoreError::config(format!("{} is not set", name)))
}

/// World store backed by a MySQL pool.
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    /// Build the pool and verify connectivity with an initial connection.
    pub async fn connect(config: &DbConfig) -> StoreResult<Self> {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.username)
            .password(&config.password)
            .database(&config.database)
            .collation(COLLATION);

        let timezone = config.timezone.clone();
        let pool = MySqlPoolOptions::new()
            .max_connections(10)
            .after_connect(move |conn, _meta| {
                let timezone = timezone.clone();
                Box::pin(async move {
                    sqlx::query("SET time_zone = ?")
                        .bind(timezone)
                        .execute(conn)
                        .await?;
                    Ok(())
                })
            })
            .connect_with(options)
            .await
            .map_err(StoreError::backend)?;

        tracing::info!(host = %config.host, database = %config.database, "connected");

        Ok(Self { pool })
    }
}

#[async_trait]
impl WorldStore for MySqlStore {
    async fn find_city_by_name(&self, name: &str) -> StoreResult<City> {
        let row = sqlx::query(
            "SELECT ID, Name, CountryCode, District, Population FROM city WHERE Name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        match row {
            Some(row) => city_from_row(&row),
            None => Err(StoreError::not_found("city", name)),
        }
    }

    async fn find_city_by_id(&self, id: i32) -> StoreResult<City> {
        let row = sqlx::query(
            "SELECT ID, Name, CountryCode, District, Population FROM city WHERE ID = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        match row {
            Some(row) => city_from_row(&row),
            None => Err(StoreError::not_found("city", id.to_string())),
        }
    }

    async fn list_cities(&self) -> StoreResult<Vec<City>> {
        let rows = sqlx::query("SELECT ID, Name, CountryCode, District, Population FROM city")
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::backend)?;

        rows.iter().map(city_from_row).collect()
    }

    async fn find_country_by_name(&self, name: &str) -> StoreResult<Country> {
        let row = sqlx::query(
            "SELECT Code, Name, Continent, Region, SurfaceArea, IndepYear, Population, \
             LifeExpectancy, GNP, GNPOld, LocalName, GovernmentForm, HeadOfState, Capital, \
             Code2 FROM country WHERE Name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        match row {
            Some(row) => country_from_row(&row),
            None => Err(StoreError::not_found("country", name)),
        }
    }

    async fn insert_city(&self, city: NewCity) -> StoreResult<City> {
        sqlx::query("INSERT INTO city (Name, CountryCode, District, Population) VALUES (?, ?, ?, ?)")
            .bind(&city.name)
            .bind(&city.country_code)
            .bind(&city.district)
            .bind(city.population)
            .execute(&self.pool)
            .await
            .map_err(StoreError::backend)?;

        // Echo the submitted fields; the auto-increment ID is not read back.
        Ok(city.into_city(0))
    }
}

fn city_from_row(row: &MySqlRow) -> StoreResult<City> {
    let city = City {
        id: row.try_get("ID").map_err(StoreError::backend)?,
        name: row.try_get("Name").map_err(StoreError::backend)?,
        country_code: row.try_get("CountryCode").map_err(StoreError::backend)?,
        district: row.try_get("District").map_err(StoreError::backend)?,
        population: row.try_get("Population").map_err(StoreError::backend)?,
    };
    Ok(city)
}

fn country_from_row(row: &MySqlRow) -> StoreResult<Country> {
    let country = Country {
        code: row.try_get("Code").map_err(StoreError::backend)?,
        name: row.try_get("Name").map_err(StoreError::backend)?,
        continent: row.try_get("Continent").map_err(StoreError::backend)?,
        region: row.try_get("Region").map_err(StoreError::backend)?,
        surface_area: row.try_get("SurfaceArea").map_err(StoreError::backend)?,
        indep_year: row.try_get("IndepYear").map_err(StoreError::backend)?,
        population: row.try_get("Population").map_err(StoreError::backend)?,
        life_expectancy: row.try_get("LifeExpectancy").map_err(StoreError::backend)?,
        gnp: row.try_get("GNP").map_err(StoreError::backend)?,
        gnp_old: row.try_get("GNPOld").map_err(StoreError::backend)?,
        local_name: row.try_get("LocalName").map_err(StoreError::backend)?,
        government_form: row.try_get("GovernmentForm").map_err(StoreError::backend)?,
        head_of_state: row
            .try_get::<Option<String>, _>("HeadOfState")
            .map_err(StoreError::backend)?
            .unwrap_or_default(),
        // NULL and 0 both mean "no capital on record".
        capital: row
            .try_get::<Option<i32>, _>("Capital")
            .map_err(StoreError::backend)?
            .unwrap_or(0),
        code2: row.try_get("Code2").map_err(StoreError::backend)?,
    };
    Ok(country)
}
