//! Property listing search and creation operations.

use sqlx::PgPool;
use tracing::debug;

use crate::models::{NewProperty, PropertyListingRow};
use crate::search::{build_listing_query, FilterOptions, QueryParam};
use crate::DbError;

/// Search property listings matching the given filters.
///
/// Statement construction is delegated to [`build_listing_query`]; this
/// function only binds the produced parameters and executes. Results are
/// ordered by ascending nightly cost and capped at `limit` rows
/// ([`crate::DEFAULT_RESULT_LIMIT`] when `None`).
pub async fn search_properties(
    pool: &PgPool,
    options: &FilterOptions,
    limit: Option<i64>,
) -> Result<Vec<PropertyListingRow>, DbError> {
    let built = build_listing_query(options, limit);
    debug!(sql = %built.sql, params = built.params.len(), "executing listing search");

    let mut query = sqlx::query_as::<_, PropertyListingRow>(&built.sql);
    for param in &built.params {
        query = match param {
            QueryParam::Text(s) => query.bind(s.as_str()),
            QueryParam::Int(i) => query.bind(*i),
            QueryParam::Float(f) => query.bind(*f),
        };
    }

    let rows = query.fetch_all(pool).await?;
    Ok(rows)
}

/// Insert a new property and return the generated id.
///
/// New listings are always inserted active.
pub async fn create_property(pool: &PgPool, property: &NewProperty) -> Result<i32, DbError> {
    let id = sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO properties
            (owner_id, title, description, cover_photo_url, thumbnail_photo_url,
             cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
             active, province, city, country, street, post_code)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
        RETURNING id
        "#,
    )
    .bind(property.owner_id)
    .bind(&property.title)
    .bind(&property.description)
    .bind(&property.cover_photo_url)
    .bind(&property.thumbnail_photo_url)
    .bind(property.cost_per_night)
    .bind(property.parking_spaces)
    .bind(property.number_of_bathrooms)
    .bind(property.number_of_bedrooms)
    .bind(true)
    .bind(&property.province)
    .bind(&property.city)
    .bind(&property.country)
    .bind(&property.street)
    .bind(&property.post_code)
    .fetch_one(pool)
    .await?;

    Ok(id)
}
