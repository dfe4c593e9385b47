//! # Booking Session
//!
//! What one client works with while booking: the shared, durable
//! [`BookingStore`] plus a transient [`Selection`] of the slot the student is
//! looking at. Only the store survives a restart; the selection lives and
//! dies with the session.
//!
//! Confirming a booking runs both engine checks against the store's current
//! contents before anything is written:
//!
//! 1. A slot must be selected and the required fields filled in
//! 2. The slot must pass `validate_slot_timing`
//! 3. The slot must pass `is_slot_available` (upcoming and not taken)
//! 4. A fresh unique code is generated and the booking appended
//!
//! Two clients racing for the same slot are not arbitrated here.

use slotbook_core::{
    AvailabilityEngine,
    errors::{BookingError, BookingResult},
    generate_time_slots,
    models::{
        booking::{Booking, BookingDetails},
        time_slot::TimeSlot,
    },
    slots::SlotPolicy,
    time::{Clock, SystemClock},
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::store::BookingStore;

/// Length of generated booking codes
const CODE_LENGTH: usize = 8;

/// Transient, per-client selection state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub selected_slot: Option<TimeSlot>,
    /// Set while the booking form for the selected slot is open
    pub is_booking: bool,
}

pub struct BookingSession<S, C = SystemClock> {
    store: S,
    engine: AvailabilityEngine<C>,
    policy: SlotPolicy,
    selection: Selection,
}

impl<S: BookingStore> BookingSession<S> {
    /// Session against the local wall clock
    pub fn with_system_clock(store: S) -> Self {
        Self::new(store, SystemClock)
    }
}

impl<S: BookingStore, C: Clock> BookingSession<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self {
            store,
            engine: AvailabilityEngine::new(clock),
            policy: SlotPolicy::PRESENTATIONS,
            selection: Selection::default(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn engine(&self) -> &AvailabilityEngine<C> {
        &self.engine
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn select_slot(&mut self, slot: TimeSlot) {
        debug!("Selected slot {}", slot.key());
        self.selection = Selection {
            selected_slot: Some(slot),
            is_booking: true,
        };
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::default();
    }

    pub async fn bookings(&self) -> BookingResult<Vec<Booking>> {
        self.store.list().await
    }

    /// Every slot of the period with `is_available` reflecting the store right now
    pub async fn available_slots(&self) -> BookingResult<Vec<TimeSlot>> {
        let bookings = self.store.list().await?;
        Ok(self
            .engine
            .available_slots(&generate_time_slots(), &bookings))
    }

    /// First slot that can still be booked, if any
    pub async fn next_bookable_slot(&self) -> BookingResult<Option<TimeSlot>> {
        let bookings = self.store.list().await?;
        let slots = generate_time_slots();
        Ok(self.engine.next_bookable_slot(&slots, &bookings).cloned())
    }

    /// Books the selected slot for `details`
    ///
    /// On success the booking is stored and the selection cleared. On failure
    /// nothing is written and the selection is kept so the student can retry.
    pub async fn confirm_booking(&mut self, details: BookingDetails) -> BookingResult<Booking> {
        let slot = self
            .selection
            .selected_slot
            .clone()
            .ok_or_else(|| BookingError::Validation("No slot selected".to_string()))?;

        if details.name.trim().is_empty() {
            return Err(BookingError::Validation("Name is required".to_string()));
        }
        if details.student_number.trim().is_empty() {
            return Err(BookingError::Validation(
                "Student number is required".to_string(),
            ));
        }

        if !self.policy.validate(&slot) {
            return Err(BookingError::Validation(format!(
                "{} {}-{} is not a presentation slot",
                slot.date, slot.start_time, slot.end_time
            )));
        }

        let bookings = self.store.list().await?;
        if !self.engine.is_slot_available(&slot, &bookings) {
            return Err(BookingError::SlotUnavailable(slot.key()));
        }

        let code = unique_code(&bookings);
        let booking = Booking::for_slot(details, &slot, code);
        self.store.add(booking.clone()).await?;

        info!("Booked slot {} under code {}", booking.slot, booking.code);
        self.clear_selection();
        Ok(booking)
    }

    pub async fn cancel_booking(&self, code: &str) -> BookingResult<()> {
        if !self.store.remove(code).await? {
            return Err(BookingError::NotFound(code.to_string()));
        }
        info!("Cancelled booking {}", code);
        Ok(())
    }

    /// Replaces the booking stored under `code`
    ///
    /// Moving to a different slot is held to the same rules as a new booking:
    /// the target slot must be well formed and free. The booking being
    /// replaced does not block its own slot.
    pub async fn modify_booking(&self, code: &str, booking: Booking) -> BookingResult<()> {
        let bookings = self.store.list().await?;
        let current = bookings
            .iter()
            .find(|existing| existing.code == code)
            .ok_or_else(|| BookingError::NotFound(code.to_string()))?;

        if current.slot != booking.slot {
            let slot = self
                .policy
                .slot_for_key(&booking.slot)
                .filter(|slot| self.policy.validate(slot))
                .ok_or_else(|| {
                    BookingError::Validation(format!(
                        "{} is not a presentation slot",
                        booking.slot
                    ))
                })?;

            let others: Vec<Booking> = bookings
                .iter()
                .filter(|existing| existing.code != code)
                .cloned()
                .collect();
            if !self.engine.is_slot_available(&slot, &others) {
                return Err(BookingError::SlotUnavailable(slot.key()));
            }
        }

        let new_code = booking.code.clone();
        if !self.store.replace(code, booking).await? {
            return Err(BookingError::NotFound(code.to_string()));
        }
        info!("Modified booking {} (now {})", code, new_code);
        Ok(())
    }
}

/// Short upper-case code not used by any of `bookings`
fn unique_code(bookings: &[Booking]) -> String {
    loop {
        let code = Uuid::new_v4().simple().to_string()[..CODE_LENGTH].to_uppercase();
        if !bookings.iter().any(|booking| booking.code == code) {
            return code;
        }
    }
}
