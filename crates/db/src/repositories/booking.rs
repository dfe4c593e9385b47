use crate::models::DbBooking;
use chrono::Utc;
use eyre::Result;
use slotbook_core::models::booking::Booking;
use sqlx::{Pool, Postgres};

/// Inserts a booking, or returns `None` when its code is already taken
pub async fn create_booking(pool: &Pool<Postgres>, booking: &Booking) -> Result<Option<DbBooking>> {
    let now = Utc::now();

    tracing::debug!("Creating booking: code={}, slot={}", booking.code, booking.slot);

    let row = sqlx::query_as::<_, DbBooking>(
        r#"
        INSERT INTO bookings (code, name, student_number, company, notes, slot, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ON CONFLICT (code) DO NOTHING
        RETURNING code, name, student_number, company, notes, slot, created_at
        "#,
    )
    .bind(&booking.code)
    .bind(&booking.name)
    .bind(&booking.student_number)
    .bind(&booking.company)
    .bind(&booking.notes)
    .bind(&booking.slot)
    .bind(now)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn get_booking_by_code(pool: &Pool<Postgres>, code: &str) -> Result<Option<DbBooking>> {
    let row = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT code, name, student_number, company, notes, slot, created_at
        FROM bookings
        WHERE code = $1
        "#,
    )
    .bind(code)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn list_bookings(pool: &Pool<Postgres>) -> Result<Vec<DbBooking>> {
    let rows = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT code, name, student_number, company, notes, slot, created_at
        FROM bookings
        ORDER BY position ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Overwrites the booking stored under `code`, keeping its position
///
/// Returns `false` when no booking has that code.
pub async fn replace_booking(pool: &Pool<Postgres>, code: &str, booking: &Booking) -> Result<bool> {
    tracing::debug!("Replacing booking: code={}, new_code={}", code, booking.code);

    let result = sqlx::query(
        r#"
        UPDATE bookings
        SET code = $2, name = $3, student_number = $4, company = $5, notes = $6, slot = $7
        WHERE code = $1
        "#,
    )
    .bind(code)
    .bind(&booking.code)
    .bind(&booking.name)
    .bind(&booking.student_number)
    .bind(&booking.company)
    .bind(&booking.notes)
    .bind(&booking.slot)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Returns `false` when no booking has that code
pub async fn delete_booking_by_code(pool: &Pool<Postgres>, code: &str) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM bookings
        WHERE code = $1
        "#,
    )
    .bind(code)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
