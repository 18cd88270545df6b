//! Listing search query builder.
//!
//! Assembles the parameterized statement for the property-listing lookup from
//! an open set of optional filters. Construction is pure: the builder collects
//! an ordered list of (fragment, parameter) pairs and renders the statement
//! once at the end, so a placeholder's index always equals its parameter's
//! 1-based position and skipped filters never shift the numbering of later
//! ones. Execution lives in `repository::properties`.

use serde::Deserialize;

/// Result cap applied when the caller does not supply one.
pub const DEFAULT_RESULT_LIMIT: i64 = 10;

/// Every `properties` column, shared by all statements that project a
/// [`crate::models::PropertyListingRow`].
pub(crate) const PROPERTY_COLUMNS: &str = "\
properties.id, properties.owner_id, properties.title, properties.description, \
properties.cover_photo_url, properties.thumbnail_photo_url, \
properties.cost_per_night, properties.parking_spaces, \
properties.number_of_bathrooms, properties.number_of_bedrooms, \
properties.active, properties.province, properties.city, \
properties.country, properties.street, properties.post_code";

/// Optional search constraints accepted by the listing lookup.
///
/// Every field is optional; an absent field applies no constraint. Prices are
/// in major currency units (dollars) and are scaled to minor units before
/// binding.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterOptions {
    pub city: Option<String>,
    pub owner_id: Option<i64>,
    pub minimum_price_per_night: Option<f64>,
    pub maximum_price_per_night: Option<f64>,
    pub minimum_rating: Option<f64>,
}

/// A scalar bound to one positional placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryParam {
    Text(String),
    Int(i64),
    Float(f64),
}

/// A rendered statement plus its parameters, in placeholder order.
#[derive(Debug, Clone)]
pub struct BuiltQuery {
    pub sql: String,
    pub params: Vec<QueryParam>,
}

/// Convert a price in major currency units to minor units (cents).
fn to_cents(major: f64) -> i64 {
    (major * 100.0).round() as i64
}

/// Build the listing search statement for the given filters.
///
/// The statement selects all property columns plus the average review rating,
/// grouped by property, ordered by ascending nightly cost, capped at `limit`
/// rows ([`DEFAULT_RESULT_LIMIT`] when `None`).
///
/// WHERE-eligible filters are applied in fixed order (city, owner, minimum
/// price, maximum price); the first present one opens the `WHERE` clause and
/// later ones chain with `AND`. `minimum_rating` filters post-aggregation via
/// `HAVING` (strictly greater), so its placeholder always follows the WHERE
/// placeholders. The limit is always the final parameter.
pub fn build_listing_query(options: &FilterOptions, limit: Option<i64>) -> BuiltQuery {
    let mut conditions: Vec<(&str, QueryParam)> = Vec::new();

    if let Some(city) = &options.city {
        conditions.push(("city LIKE", QueryParam::Text(format!("%{city}%"))));
    }
    if let Some(owner_id) = options.owner_id {
        conditions.push(("owner_id =", QueryParam::Int(owner_id)));
    }
    if let Some(minimum) = options.minimum_price_per_night {
        conditions.push(("cost_per_night >=", QueryParam::Int(to_cents(minimum))));
    }
    if let Some(maximum) = options.maximum_price_per_night {
        conditions.push(("cost_per_night <=", QueryParam::Int(to_cents(maximum))));
    }

    let mut sql = format!(
        "SELECT {PROPERTY_COLUMNS}, \
         avg(property_reviews.rating)::double precision AS average_rating\n\
         FROM properties\n\
         JOIN property_reviews ON properties.id = property_reviews.property_id\n"
    );
    let mut params: Vec<QueryParam> = Vec::with_capacity(conditions.len() + 2);

    for (fragment, param) in conditions {
        let keyword = if params.is_empty() { "WHERE" } else { "AND" };
        params.push(param);
        sql.push_str(&format!("{keyword} {fragment} ${}\n", params.len()));
    }

    sql.push_str("GROUP BY properties.id\n");

    if let Some(rating) = options.minimum_rating {
        params.push(QueryParam::Float(rating));
        sql.push_str(&format!(
            "HAVING avg(property_reviews.rating) > ${}\n",
            params.len()
        ));
    }

    params.push(QueryParam::Int(limit.unwrap_or(DEFAULT_RESULT_LIMIT)));
    sql.push_str(&format!("ORDER BY cost_per_night\nLIMIT ${}", params.len()));

    BuiltQuery { sql, params }
}
