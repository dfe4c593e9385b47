//! # Slotbook Core
//!
//! The slot generation and availability engine behind presentation booking.
//!
//! - [`slots`] derives every bookable 20 minute slot from fixed dates and
//!   session windows
//! - [`availability`] decides whether a slot is well formed and whether it can
//!   still be booked given the current bookings
//! - [`key`] owns the `"<date> - <startTime>"` string that joins bookings to slots
//! - [`time`] wraps the calendar arithmetic and the injectable clock
//!
//! Everything in this crate is synchronous and side-effect free. Storing
//! bookings is left to the caller (see the `slotbook-db` crate).

pub mod availability;
pub mod errors;
pub mod key;
pub mod models;
pub mod slots;
pub mod time;

pub use availability::{AvailabilityEngine, SlotStatus, format_slot_display, validate_slot_timing};
pub use slots::generate_time_slots;
