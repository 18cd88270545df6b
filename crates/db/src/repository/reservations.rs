//! Reservation lookup operations.

use sqlx::PgPool;

use crate::models::GuestReservationRow;
use crate::search::{DEFAULT_RESULT_LIMIT, PROPERTY_COLUMNS};
use crate::DbError;

/// Fetch a guest's reservations joined with each reserved property's listing
/// data, soonest start date first.
///
/// Grouping by both the property and the reservation keeps the review
/// aggregate per property while still projecting reservation columns.
pub async fn reservations_for_guest(
    pool: &PgPool,
    guest_id: i32,
    limit: Option<i64>,
) -> Result<Vec<GuestReservationRow>, DbError> {
    let sql = format!(
        "SELECT reservations.id AS reservation_id, \
         reservations.start_date, reservations.end_date, \
         {PROPERTY_COLUMNS}, \
         avg(property_reviews.rating)::double precision AS average_rating\n\
         FROM reservations\n\
         JOIN properties ON reservations.property_id = properties.id\n\
         JOIN property_reviews ON properties.id = property_reviews.property_id\n\
         WHERE reservations.guest_id = $1\n\
         GROUP BY properties.id, reservations.id\n\
         ORDER BY reservations.start_date\n\
         LIMIT $2"
    );

    let rows = sqlx::query_as::<_, GuestReservationRow>(&sql)
        .bind(guest_id)
        .bind(limit.unwrap_or(DEFAULT_RESULT_LIMIT))
        .fetch_all(pool)
        .await?;

    Ok(rows)
}
