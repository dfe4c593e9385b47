use serde::{Deserialize, Serialize};

use crate::key::parse_booking_key;
use crate::models::time_slot::TimeSlot;

/// A confirmed reservation of one slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub name: String,
    pub student_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Booking key of the reserved slot, `"<date> - <startTime>"`
    pub slot: String,
    /// Unique identifier used to cancel or modify the booking
    pub code: String,
}

/// Fields a student fills in before a slot and code are attached
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    pub name: String,
    pub student_number: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Booking {
    /// Snapshots `details` against `slot` under the given code
    pub fn for_slot(details: BookingDetails, slot: &TimeSlot, code: impl Into<String>) -> Self {
        Self {
            name: details.name,
            student_number: details.student_number,
            company: details.company,
            notes: details.notes,
            slot: slot.key(),
            code: code.into(),
        }
    }

    /// Date and start time encoded in the slot key, if it is well formed
    pub fn slot_parts(&self) -> Option<(&str, &str)> {
        parse_booking_key(&self.slot)
    }
}
