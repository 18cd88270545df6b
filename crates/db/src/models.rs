//! Row structs that map 1-to-1 onto database tables and query projections.
//!
//! These are *persistence* models — they carry no domain behaviour.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// users
// ---------------------------------------------------------------------------

/// A persisted user row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Fields required to insert a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// properties (+ review aggregate projection)
// ---------------------------------------------------------------------------

/// A property row enriched with its aggregate review rating — the projection
/// returned by the listing search and the reservation lookup.
///
/// `average_rating` is `None` for properties without any review rows.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PropertyListingRow {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub cover_photo_url: String,
    pub thumbnail_photo_url: String,
    /// Nightly cost in minor currency units (cents).
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub active: bool,
    pub province: String,
    pub city: String,
    pub country: String,
    pub street: String,
    pub post_code: String,
    pub average_rating: Option<f64>,
}

/// Fields required to insert a new property.
///
/// `active` is not accepted from the caller; new listings are always inserted
/// active.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub cover_photo_url: String,
    pub thumbnail_photo_url: String,
    /// Nightly cost in minor currency units (cents).
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub province: String,
    pub city: String,
    pub country: String,
    pub street: String,
    pub post_code: String,
}

// ---------------------------------------------------------------------------
// reservations
// ---------------------------------------------------------------------------

/// A guest's reservation joined with the reserved property's listing data.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GuestReservationRow {
    pub reservation_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: PropertyListingRow,
}
