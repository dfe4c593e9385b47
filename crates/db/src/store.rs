//! # Booking Store
//!
//! The durable side of booking: an ordered collection of confirmed bookings
//! keyed by their unique `code`. The engine in `slotbook-core` only ever reads
//! this collection; sessions append, remove and replace through it.
//!
//! Three backends are provided:
//!
//! - [`MemoryBookingStore`] keeps bookings for the lifetime of the process
//! - [`JsonFileBookingStore`] mirrors every change to a JSON file, so bookings
//!   survive restarts
//! - [`PgBookingStore`] keeps bookings in a PostgreSQL `bookings` table

mod json_file;
mod memory;
mod postgres;

pub use json_file::{JsonFileBookingStore, PersistedBookings};
pub use memory::MemoryBookingStore;
pub use postgres::PgBookingStore;

use std::sync::Arc;

use async_trait::async_trait;
use slotbook_core::{errors::BookingResult, models::booking::Booking};

/// Ordered, code-keyed collection of confirmed bookings
///
/// Implementations keep `code` unique and preserve insertion order;
/// `replace` keeps the replaced booking's position.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Every booking, in insertion order
    async fn list(&self) -> BookingResult<Vec<Booking>>;

    /// Appends a booking
    ///
    /// Fails with `BookingError::DuplicateCode` when the code is taken.
    async fn add(&self, booking: Booking) -> BookingResult<()>;

    /// Removes the booking with `code`; `false` if there was none
    async fn remove(&self, code: &str) -> BookingResult<bool>;

    /// Swaps the booking with `code` for `booking`; `false` if there was none
    ///
    /// Fails with `BookingError::DuplicateCode` when `booking.code` belongs to
    /// another booking.
    async fn replace(&self, code: &str, booking: Booking) -> BookingResult<bool>;

    async fn get(&self, code: &str) -> BookingResult<Option<Booking>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .find(|booking| booking.code == code))
    }
}

#[async_trait]
impl<T: BookingStore + ?Sized> BookingStore for Box<T> {
    async fn list(&self) -> BookingResult<Vec<Booking>> {
        (**self).list().await
    }

    async fn add(&self, booking: Booking) -> BookingResult<()> {
        (**self).add(booking).await
    }

    async fn remove(&self, code: &str) -> BookingResult<bool> {
        (**self).remove(code).await
    }

    async fn replace(&self, code: &str, booking: Booking) -> BookingResult<bool> {
        (**self).replace(code, booking).await
    }

    async fn get(&self, code: &str) -> BookingResult<Option<Booking>> {
        (**self).get(code).await
    }
}

#[async_trait]
impl<T: BookingStore + ?Sized> BookingStore for Arc<T> {
    async fn list(&self) -> BookingResult<Vec<Booking>> {
        (**self).list().await
    }

    async fn add(&self, booking: Booking) -> BookingResult<()> {
        (**self).add(booking).await
    }

    async fn remove(&self, code: &str) -> BookingResult<bool> {
        (**self).remove(code).await
    }

    async fn replace(&self, code: &str, booking: Booking) -> BookingResult<bool> {
        (**self).replace(code, booking).await
    }

    async fn get(&self, code: &str) -> BookingResult<Option<Booking>> {
        (**self).get(code).await
    }
}
