use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use slotbook_core::models::booking::Booking;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub code: String,
    pub name: String,
    pub student_number: String,
    pub company: Option<String>,
    pub notes: Option<String>,
    pub slot: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbBooking> for Booking {
    fn from(row: DbBooking) -> Self {
        Booking {
            name: row.name,
            student_number: row.student_number,
            company: row.company,
            notes: row.notes,
            slot: row.slot,
            code: row.code,
        }
    }
}
