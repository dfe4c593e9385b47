//! # Availability & Validation
//!
//! Two independent checks decide whether a student may take a slot:
//!
//! - **Validity** (`validate_slot_timing`) is structural: eligible date, exact
//!   slot length, inside a session window. It does not depend on time or state.
//! - **Availability** (`AvailabilityEngine::is_slot_available`) is run-time:
//!   the slot must start after "now" and no booking may hold its key.
//!
//! Callers use both. Neither check ever fails; anything that cannot be parsed
//! is simply rejected.

use std::fmt;

use crate::models::{booking::Booking, time_slot::TimeSlot};
use crate::time::{Clock, SystemClock, format_long_date, slot_instant};

pub use crate::slots::validate_slot_timing;

/// Why a slot can or cannot be booked right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    Open,
    Taken,
    /// Already started, whether or not anyone booked it
    Past,
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Open => "open",
            Self::Taken => "taken",
            Self::Past => "past",
        })
    }
}

/// Answers availability questions against an injected clock
#[derive(Debug, Clone, Default)]
pub struct AvailabilityEngine<C = SystemClock> {
    clock: C,
}

impl<C: Clock> AvailabilityEngine<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Whether the slot starts strictly after the current instant
    ///
    /// A slot starting exactly now has already begun. Unparseable dates or
    /// times count as past.
    pub fn is_upcoming(&self, slot: &TimeSlot) -> bool {
        slot_instant(&slot.date, &slot.start_time)
            .is_some_and(|start| start > self.clock.now())
    }

    /// Whether `slot` can be booked right now
    ///
    /// Unavailable when it is not upcoming, or when any booking's slot key
    /// equals this slot's key. `bookings` is only read.
    pub fn is_slot_available(&self, slot: &TimeSlot, bookings: &[Booking]) -> bool {
        if !self.is_upcoming(slot) {
            return false;
        }

        let key = slot.key();
        !bookings.iter().any(|booking| booking.slot == key)
    }

    /// Same verdict as [`is_slot_available`](Self::is_slot_available), with
    /// past slots told apart from booked ones
    pub fn slot_status(&self, slot: &TimeSlot, bookings: &[Booking]) -> SlotStatus {
        if !self.is_upcoming(slot) {
            SlotStatus::Past
        } else if self.is_slot_available(slot, bookings) {
            SlotStatus::Open
        } else {
            SlotStatus::Taken
        }
    }

    /// First upcoming slot whose `is_available` flag is set
    ///
    /// This trusts the advisory flag. Freshly generated slots always carry
    /// `true`, so on its own this ignores existing bookings; use
    /// [`next_bookable_slot`](Self::next_bookable_slot) when bookings matter.
    pub fn next_available_slot<'a>(&self, slots: &'a [TimeSlot]) -> Option<&'a TimeSlot> {
        slots
            .iter()
            .find(|slot| self.is_upcoming(slot) && slot.is_available)
    }

    /// First slot that passes `is_slot_available` against `bookings`
    pub fn next_bookable_slot<'a>(
        &self,
        slots: &'a [TimeSlot],
        bookings: &[Booking],
    ) -> Option<&'a TimeSlot> {
        slots
            .iter()
            .find(|slot| self.is_slot_available(slot, bookings))
    }

    /// Copies of `slots` with `is_available` recomputed against `bookings`
    pub fn available_slots(&self, slots: &[TimeSlot], bookings: &[Booking]) -> Vec<TimeSlot> {
        slots
            .iter()
            .map(|slot| TimeSlot {
                is_available: self.is_slot_available(slot, bookings),
                ..slot.clone()
            })
            .collect()
    }
}

/// Human-readable label, e.g. `Saturday, January 25, 2025 - 10:10`
///
/// Pure formatting. A date that does not parse is shown as-is.
pub fn format_slot_display(slot: &TimeSlot) -> String {
    let date = format_long_date(&slot.date).unwrap_or_else(|| slot.date.clone());
    format!("{} - {}", date, slot.start_time)
}
