use color_eyre::eyre::{Result, eyre};
use dotenv::dotenv;
use slotbook_db::{
    config::StoreConfig, create_pool, repositories::booking::list_bookings,
    schema::initialize_database,
};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();

    // BOOKING_STORE may name any backend here; only DATABASE_URL matters
    let config = StoreConfig::from_env()?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let database_url = config
        .database_url
        .as_deref()
        .ok_or_else(|| eyre!("DATABASE_URL environment variable must be set"))?;

    info!("Connecting to database");
    let pool = create_pool(database_url).await?;

    initialize_database(&pool).await?;
    let existing = list_bookings(&pool).await?;
    info!(
        "Bookings table ready with {} existing bookings",
        existing.len()
    );

    Ok(())
}
