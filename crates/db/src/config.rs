//! # Store Configuration
//!
//! Chooses and opens a booking store backend from environment variables.
//!
//! ## Environment Variables
//!
//! - `BOOKING_STORE`: `memory`, `json` or `postgres` (default: `json`)
//! - `BOOKING_STORE_PATH`: JSON file used by the `json` backend
//!   (default: `booking-store.json`)
//! - `DATABASE_URL`: PostgreSQL connection string (required for `postgres`)
//! - `LOG_LEVEL`: Logging level (default: `info`)

use std::{env, fmt, path::PathBuf, str::FromStr};

use eyre::{Result, WrapErr, eyre};
use tracing::{Level, info};

use crate::{
    create_pool,
    schema::initialize_database,
    store::{BookingStore, JsonFileBookingStore, MemoryBookingStore, PgBookingStore},
};

pub const DEFAULT_STORE_PATH: &str = "booking-store.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    Memory,
    #[default]
    JsonFile,
    Postgres,
}

impl FromStr for StoreBackend {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "json" | "file" => Ok(Self::JsonFile),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            other => Err(eyre!("Unknown BOOKING_STORE backend: {}", other)),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Memory => "memory",
            Self::JsonFile => "json",
            Self::Postgres => "postgres",
        })
    }
}

/// Where bookings live and how loudly to log
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,

    /// File backing the `json` backend
    pub store_path: PathBuf,

    /// PostgreSQL connection string, required by the `postgres` backend
    pub database_url: Option<String>,

    pub log_level: Level,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            database_url: None,
            log_level: Level::INFO,
        }
    }
}

impl StoreConfig {
    /// Loads the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads the configuration through `lookup`, which maps a variable name
    /// to its value
    ///
    /// # Errors
    ///
    /// - `BOOKING_STORE` names an unknown backend
    /// - `BOOKING_STORE=postgres` without `DATABASE_URL`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let backend = match lookup("BOOKING_STORE") {
            Some(value) => value.parse().wrap_err("Invalid BOOKING_STORE value")?,
            None => StoreBackend::default(),
        };

        let store_path = lookup("BOOKING_STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH));

        let database_url = lookup("DATABASE_URL");
        if backend == StoreBackend::Postgres && database_url.is_none() {
            return Err(eyre!(
                "DATABASE_URL environment variable must be set for the postgres backend"
            ));
        }

        let log_level = match lookup("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string())
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        Ok(Self {
            backend,
            store_path,
            database_url,
            log_level,
        })
    }

    /// Opens the configured backend
    ///
    /// The `postgres` backend connects and creates the schema if needed.
    pub async fn open(&self) -> Result<Box<dyn BookingStore>> {
        info!("Opening {} booking store", self.backend);

        let store: Box<dyn BookingStore> = match self.backend {
            StoreBackend::Memory => Box::new(MemoryBookingStore::new()),
            StoreBackend::JsonFile => Box::new(JsonFileBookingStore::open(&self.store_path).await?),
            StoreBackend::Postgres => {
                let database_url = self
                    .database_url
                    .as_deref()
                    .ok_or_else(|| eyre!("DATABASE_URL must be set for the postgres backend"))?;
                let pool = create_pool(database_url).await?;
                initialize_database(&pool).await?;
                Box::new(PgBookingStore::new(pool))
            }
        };

        Ok(store)
    }
}
