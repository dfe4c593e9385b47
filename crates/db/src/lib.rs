//! # Slotbook Store
//!
//! Durable booking state for the presentation booking engine.
//!
//! - [`store`] defines the [`BookingStore`](store::BookingStore) collaborator
//!   and its in-memory, JSON file and PostgreSQL backends
//! - [`session`] pairs a store with the transient slot selection of one client
//! - [`config`] picks and opens a backend from the environment

pub mod config;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod session;
pub mod store;

pub mod mock;

use eyre::{Result, WrapErr};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

/// Pool behind the `postgres` booking store
pub type DbPool = Pool<Postgres>;

const MAX_CONNECTIONS: u32 = 5;

/// Connects to the booking database
pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await
        .wrap_err("Failed to connect to the booking database")?;

    tracing::debug!("Booking database pool ready");
    Ok(pool)
}
