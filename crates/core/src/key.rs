//! # Booking Key
//!
//! A booking refers to its slot through a plain string of the form
//! `"<date> - <startTime>"`, e.g. `"2025-01-25 - 10:10"`. Both the writer
//! (booking creation) and the reader (availability checks) go through the
//! two functions in this module, so the separator can only drift in one place.

/// Separator between the date and the start time inside a booking key
pub const KEY_SEPARATOR: &str = " - ";

/// Builds the booking key for a slot's date and start time
///
/// # Example
///
/// ```
/// use slotbook_core::key::booking_key;
///
/// assert_eq!(booking_key("2025-01-25", "10:10"), "2025-01-25 - 10:10");
/// ```
pub fn booking_key(date: &str, start_time: &str) -> String {
    format!("{date}{KEY_SEPARATOR}{start_time}")
}

/// Splits a booking key back into `(date, start_time)`
///
/// Returns `None` when the separator is missing or either half is empty.
pub fn parse_booking_key(key: &str) -> Option<(&str, &str)> {
    let (date, start_time) = key.split_once(KEY_SEPARATOR)?;
    if date.is_empty() || start_time.is_empty() {
        return None;
    }
    Some((date, start_time))
}
