use serde::{Deserialize, Serialize};

use crate::key::booking_key;

/// A bookable interval on one presentation date
///
/// Dates and times are kept in their textual form (`2025-01-25`, `10:10`)
/// because slots also arrive from user selections and stored data, where
/// they may be malformed. The engine rejects what it cannot parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    /// Advisory flag set when the slot is generated. Real-time availability
    /// comes from `AvailabilityEngine::is_slot_available`.
    pub is_available: bool,
}

impl TimeSlot {
    pub fn new(
        date: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            is_available: true,
        }
    }

    /// Booking key joining this slot to the bookings that reference it
    pub fn key(&self) -> String {
        booking_key(&self.date, &self.start_time)
    }
}
