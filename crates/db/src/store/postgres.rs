use async_trait::async_trait;
use slotbook_core::{
    errors::{BookingError, BookingResult},
    models::booking::Booking,
};
use tracing::info;

use super::BookingStore;
use crate::{DbPool, repositories::booking as repo};

/// Bookings kept in the PostgreSQL `bookings` table
///
/// The schema must exist; see [`crate::schema::initialize_database`].
#[derive(Debug, Clone)]
pub struct PgBookingStore {
    pool: DbPool,
}

impl PgBookingStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn list(&self) -> BookingResult<Vec<Booking>> {
        let rows = repo::list_bookings(&self.pool).await?;
        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn add(&self, booking: Booking) -> BookingResult<()> {
        let Some(row) = repo::create_booking(&self.pool, &booking).await? else {
            return Err(BookingError::DuplicateCode(booking.code));
        };
        info!("Stored booking {} for slot {}", row.code, row.slot);
        Ok(())
    }

    async fn remove(&self, code: &str) -> BookingResult<bool> {
        Ok(repo::delete_booking_by_code(&self.pool, code).await?)
    }

    async fn replace(&self, code: &str, booking: Booking) -> BookingResult<bool> {
        if booking.code != code
            && repo::get_booking_by_code(&self.pool, &booking.code)
                .await?
                .is_some()
        {
            return Err(BookingError::DuplicateCode(booking.code));
        }

        Ok(repo::replace_booking(&self.pool, code, &booking).await?)
    }

    async fn get(&self, code: &str) -> BookingResult<Option<Booking>> {
        let row = repo::get_booking_by_code(&self.pool, code).await?;
        Ok(row.map(Booking::from))
    }
}
