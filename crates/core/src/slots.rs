//! # Slot Generation
//!
//! Every bookable slot of the booking period is derived from a handful of
//! constants: the presentation dates, a morning and an afternoon window, the
//! slot length and the break between slots. Nothing here is stored; the full
//! list is recomputed whenever it is needed.
//!
//! ## Algorithm
//!
//! For each date (in order), for each window (morning, then afternoon):
//!
//! 1. Put a cursor on the window's first slot time
//! 2. While `cursor + SLOT_DURATION` is at or before the window end, emit
//!    `[cursor, cursor + SLOT_DURATION)` and advance the cursor by the cadence
//!    (`SLOT_DURATION + BREAK_DURATION`)
//!
//! A trailing slot that would run past the window end is never emitted.

use crate::key::parse_booking_key;
use crate::models::time_slot::TimeSlot;
use crate::time::{canonical_minute_of_day, format_minutes};

/// Presentation dates, two per weekend over three weekends
pub const PRESENTATION_DATES: [&str; 6] = [
    "2025-01-25",
    "2025-01-26",
    "2025-02-01",
    "2025-02-02",
    "2025-02-08",
    "2025-02-09",
];

/// Length of one presentation, in minutes
pub const SLOT_DURATION: u32 = 20;

/// Changeover between presentations, in minutes
pub const BREAK_DURATION: u32 = 5;

/// Distance between consecutive slot starts, in minutes
pub const SLOT_CADENCE: u32 = SLOT_DURATION + BREAK_DURATION;

/// A daily session during which slots are handed out
///
/// Times are minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionWindow {
    pub name: &'static str,
    /// When the room opens; slots start a little later, at `first_slot`
    pub opens: u32,
    pub first_slot: u32,
    pub ends: u32,
}

pub const MORNING: SessionWindow = SessionWindow {
    name: "morning",
    opens: 10 * 60,
    first_slot: 10 * 60 + 10,
    ends: 13 * 60,
};

pub const AFTERNOON: SessionWindow = SessionWindow {
    name: "afternoon",
    opens: 14 * 60,
    first_slot: 14 * 60 + 10,
    ends: 17 * 60,
};

impl SessionWindow {
    /// Start minutes of every slot that fits inside this window
    pub fn slot_starts(&self, duration: u32, cadence: u32) -> impl Iterator<Item = u32> {
        let ends = self.ends;
        std::iter::successors(Some(self.first_slot), move |start| Some(start + cadence))
            .take_while(move |start| start + duration <= ends)
    }

    /// Whether `[start, end)` (minutes since midnight) lies inside the window
    pub fn contains(&self, start: u32, end: u32) -> bool {
        start >= self.first_slot && end <= self.ends
    }
}

/// The fixed rules the booking period is generated and validated against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPolicy {
    pub dates: &'static [&'static str],
    pub windows: &'static [SessionWindow],
    pub slot_duration: u32,
    pub break_duration: u32,
}

impl Default for SlotPolicy {
    fn default() -> Self {
        Self::PRESENTATIONS
    }
}

impl SlotPolicy {
    /// The presentation schedule: six dates, morning and afternoon sessions,
    /// 20 minute slots with 5 minute breaks
    pub const PRESENTATIONS: SlotPolicy = SlotPolicy {
        dates: &PRESENTATION_DATES,
        windows: &[MORNING, AFTERNOON],
        slot_duration: SLOT_DURATION,
        break_duration: BREAK_DURATION,
    };

    pub fn cadence(&self) -> u32 {
        self.slot_duration + self.break_duration
    }

    pub fn is_eligible_date(&self, date: &str) -> bool {
        self.dates.iter().any(|eligible| *eligible == date)
    }

    /// Slots of one date inside one window, in chronological order
    pub fn slots_in_window(&self, date: &str, window: &SessionWindow) -> Vec<TimeSlot> {
        window
            .slot_starts(self.slot_duration, self.cadence())
            .map(|start| {
                TimeSlot::new(
                    date,
                    format_minutes(start),
                    format_minutes(start + self.slot_duration),
                )
            })
            .collect()
    }

    /// Every slot of the booking period, grouped by date then by window
    pub fn generate(&self) -> Vec<TimeSlot> {
        self.dates
            .iter()
            .flat_map(move |date| {
                self.windows
                    .iter()
                    .flat_map(move |window| self.slots_in_window(date, window))
            })
            .collect()
    }

    /// Rebuilds the slot a booking key points at
    ///
    /// The end time is derived from the slot duration. Keys whose start time
    /// is not written as `HH:MM` are refused. The result is not validated;
    /// run it through [`validate`](Self::validate).
    pub fn slot_for_key(&self, key: &str) -> Option<TimeSlot> {
        let (date, start_time) = parse_booking_key(key)?;
        let start = canonical_minute_of_day(start_time)?;
        Some(TimeSlot::new(
            date,
            format_minutes(start),
            format_minutes(start + self.slot_duration),
        ))
    }

    /// Structural check of a slot against this policy
    ///
    /// The date must be eligible, the slot must last exactly one slot
    /// duration, and it must lie inside one of the windows. Times that do not
    /// parse, or are not zero-padded `HH:MM`, are rejected so that the slot's
    /// booking key matches the key of any equal slot.
    pub fn validate(&self, slot: &TimeSlot) -> bool {
        if !self.is_eligible_date(&slot.date) {
            return false;
        }

        let (Some(start), Some(end)) = (
            canonical_minute_of_day(&slot.start_time),
            canonical_minute_of_day(&slot.end_time),
        ) else {
            return false;
        };

        if end.checked_sub(start) != Some(self.slot_duration) {
            return false;
        }

        self.windows.iter().any(|window| window.contains(start, end))
    }
}

/// Every bookable slot of the presentation period
///
/// Pure and deterministic: two calls return identical sequences.
pub fn generate_time_slots() -> Vec<TimeSlot> {
    SlotPolicy::PRESENTATIONS.generate()
}

/// Whether a slot is well formed under the presentation policy
pub fn validate_slot_timing(slot: &TimeSlot) -> bool {
    SlotPolicy::PRESENTATIONS.validate(slot)
}
