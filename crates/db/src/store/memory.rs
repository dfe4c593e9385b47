use async_trait::async_trait;
use slotbook_core::{
    errors::{BookingError, BookingResult},
    models::booking::Booking,
};
use tokio::sync::RwLock;
use tracing::debug;

use super::BookingStore;

/// Bookings held in process memory
#[derive(Debug, Default)]
pub struct MemoryBookingStore {
    bookings: RwLock<Vec<Booking>>,
}

impl MemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        Self {
            bookings: RwLock::new(bookings),
        }
    }
}

pub(super) fn append(bookings: &mut Vec<Booking>, booking: Booking) -> BookingResult<()> {
    if bookings.iter().any(|existing| existing.code == booking.code) {
        return Err(BookingError::DuplicateCode(booking.code));
    }
    bookings.push(booking);
    Ok(())
}

pub(super) fn remove_by_code(bookings: &mut Vec<Booking>, code: &str) -> bool {
    let before = bookings.len();
    bookings.retain(|booking| booking.code != code);
    bookings.len() != before
}

pub(super) fn replace_by_code(
    bookings: &mut [Booking],
    code: &str,
    booking: Booking,
) -> BookingResult<bool> {
    let Some(index) = bookings.iter().position(|existing| existing.code == code) else {
        return Ok(false);
    };

    let collides = bookings
        .iter()
        .enumerate()
        .any(|(i, existing)| i != index && existing.code == booking.code);
    if collides {
        return Err(BookingError::DuplicateCode(booking.code));
    }

    bookings[index] = booking;
    Ok(true)
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn list(&self) -> BookingResult<Vec<Booking>> {
        Ok(self.bookings.read().await.clone())
    }

    async fn add(&self, booking: Booking) -> BookingResult<()> {
        debug!("Adding booking {} for slot {}", booking.code, booking.slot);
        append(&mut *self.bookings.write().await, booking)
    }

    async fn remove(&self, code: &str) -> BookingResult<bool> {
        debug!("Removing booking {}", code);
        Ok(remove_by_code(&mut *self.bookings.write().await, code))
    }

    async fn replace(&self, code: &str, booking: Booking) -> BookingResult<bool> {
        debug!("Replacing booking {} with {}", code, booking.code);
        replace_by_code(&mut self.bookings.write().await, code, booking)
    }
}
