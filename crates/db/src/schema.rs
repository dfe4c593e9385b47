use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Insertion order is kept through the position sequence
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            code VARCHAR(64) PRIMARY KEY,
            position BIGSERIAL NOT NULL,
            name VARCHAR(255) NOT NULL,
            student_number VARCHAR(255) NOT NULL,
            company VARCHAR(255) NULL,
            notes TEXT NULL,
            slot VARCHAR(64) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_bookings_slot ON bookings(slot)",
        "CREATE INDEX IF NOT EXISTS idx_bookings_position ON bookings(position)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
