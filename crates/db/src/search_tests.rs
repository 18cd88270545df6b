//! Unit tests for the listing search query builder.
//!
//! The builder is pure (it only assembles a statement and a parameter list),
//! so everything here runs without a Postgres connection. Execution against a
//! live database is exercised through the CLI.

use crate::search::{build_listing_query, FilterOptions, QueryParam, DEFAULT_RESULT_LIMIT};

fn no_filters() -> FilterOptions {
    FilterOptions::default()
}

// ============================================================
// Base statement shape
// ============================================================

#[test]
fn no_filters_yields_no_where_clause_and_default_limit() {
    let built = build_listing_query(&no_filters(), None);

    assert!(!built.sql.contains("WHERE"));
    assert!(!built.sql.contains("HAVING"));
    assert!(built.sql.contains("GROUP BY properties.id"));
    assert!(built.sql.contains("ORDER BY cost_per_night"));
    assert!(built.sql.contains("LIMIT $1"));
    assert_eq!(built.params, vec![QueryParam::Int(DEFAULT_RESULT_LIMIT)]);
}

#[test]
fn explicit_limit_overrides_default() {
    let built = build_listing_query(&no_filters(), Some(3));
    assert_eq!(built.params, vec![QueryParam::Int(3)]);
}

#[test]
fn clauses_render_in_statement_order() {
    let options = FilterOptions {
        city: Some("Toronto".into()),
        minimum_rating: Some(3.0),
        ..Default::default()
    };
    let built = build_listing_query(&options, None);

    let where_at = built.sql.find("WHERE").unwrap();
    let group_at = built.sql.find("GROUP BY").unwrap();
    let having_at = built.sql.find("HAVING").unwrap();
    let order_at = built.sql.find("ORDER BY").unwrap();
    let limit_at = built.sql.find("LIMIT").unwrap();

    assert!(where_at < group_at);
    assert!(group_at < having_at);
    assert!(having_at < order_at);
    assert!(order_at < limit_at);
}

// ============================================================
// Individual filters
// ============================================================

#[test]
fn city_filter_binds_wrapped_substring_pattern() {
    let options = FilterOptions {
        city: Some("van".into()),
        ..Default::default()
    };
    let built = build_listing_query(&options, Some(5));

    assert!(built.sql.contains("WHERE city LIKE $1"));
    assert!(built.sql.contains("LIMIT $2"));
    assert_eq!(
        built.params,
        vec![QueryParam::Text("%van%".into()), QueryParam::Int(5)]
    );
}

#[test]
fn owner_filter_matches_by_equality() {
    let options = FilterOptions {
        owner_id: Some(42),
        ..Default::default()
    };
    let built = build_listing_query(&options, None);

    assert!(built.sql.contains("WHERE owner_id = $1"));
    assert_eq!(
        built.params,
        vec![QueryParam::Int(42), QueryParam::Int(DEFAULT_RESULT_LIMIT)]
    );
}

#[test]
fn price_filters_are_scaled_to_cents() {
    let options = FilterOptions {
        minimum_price_per_night: Some(12.34),
        maximum_price_per_night: Some(0.5),
        ..Default::default()
    };
    let built = build_listing_query(&options, None);

    assert!(built.sql.contains("WHERE cost_per_night >= $1"));
    assert!(built.sql.contains("AND cost_per_night <= $2"));
    assert_eq!(built.params[0], QueryParam::Int(1234));
    assert_eq!(built.params[1], QueryParam::Int(50));
}

#[test]
fn rating_filter_alone_uses_having_without_where() {
    let options = FilterOptions {
        minimum_rating: Some(4.5),
        ..Default::default()
    };
    let built = build_listing_query(&options, None);

    assert!(!built.sql.contains("WHERE"));
    assert!(built.sql.contains("HAVING avg(property_reviews.rating) > $1"));
    assert!(built.sql.contains("LIMIT $2"));
    assert_eq!(
        built.params,
        vec![
            QueryParam::Float(4.5),
            QueryParam::Int(DEFAULT_RESULT_LIMIT),
        ]
    );
}

// ============================================================
// Placeholder numbering across filter combinations
// ============================================================

#[test]
fn prices_and_rating_bind_contiguous_placeholders() {
    let options = FilterOptions {
        minimum_price_per_night: Some(50.0),
        maximum_price_per_night: Some(150.0),
        minimum_rating: Some(4.0),
        ..Default::default()
    };
    let built = build_listing_query(&options, Some(10));

    assert!(built.sql.contains("WHERE cost_per_night >= $1"));
    assert!(built.sql.contains("AND cost_per_night <= $2"));
    assert!(built.sql.contains("HAVING avg(property_reviews.rating) > $3"));
    assert!(built.sql.contains("LIMIT $4"));
    assert_eq!(
        built.params,
        vec![
            QueryParam::Int(5000),
            QueryParam::Int(15000),
            QueryParam::Float(4.0),
            QueryParam::Int(10),
        ]
    );
}

#[test]
fn all_where_filters_chain_with_and_in_fixed_order() {
    let options = FilterOptions {
        city: Some("Montreal".into()),
        owner_id: Some(7),
        minimum_price_per_night: Some(80.0),
        maximum_price_per_night: Some(200.0),
        minimum_rating: None,
    };
    let built = build_listing_query(&options, Some(20));

    assert!(built.sql.contains("WHERE city LIKE $1"));
    assert!(built.sql.contains("AND owner_id = $2"));
    assert!(built.sql.contains("AND cost_per_night >= $3"));
    assert!(built.sql.contains("AND cost_per_night <= $4"));
    assert!(built.sql.contains("LIMIT $5"));
    assert_eq!(built.params.len(), 5);
}

#[test]
fn skipped_filters_do_not_reserve_placeholders() {
    // owner_id is second in the fixed order, but with city absent it must
    // open the WHERE clause as $1.
    let options = FilterOptions {
        owner_id: Some(9),
        maximum_price_per_night: Some(100.0),
        ..Default::default()
    };
    let built = build_listing_query(&options, None);

    assert!(built.sql.contains("WHERE owner_id = $1"));
    assert!(built.sql.contains("AND cost_per_night <= $2"));
    assert!(!built.sql.contains("$4"));
    assert_eq!(
        built.params,
        vec![
            QueryParam::Int(9),
            QueryParam::Int(10_000),
            QueryParam::Int(DEFAULT_RESULT_LIMIT),
        ]
    );
}

#[test]
fn rating_placeholder_always_follows_where_placeholders() {
    let options = FilterOptions {
        city: Some("Halifax".into()),
        owner_id: Some(1),
        minimum_price_per_night: Some(10.0),
        maximum_price_per_night: Some(90.0),
        minimum_rating: Some(2.0),
    };
    let built = build_listing_query(&options, Some(15));

    assert!(built.sql.contains("HAVING avg(property_reviews.rating) > $5"));
    assert!(built.sql.contains("LIMIT $6"));
    assert_eq!(built.params[4], QueryParam::Float(2.0));
    assert_eq!(built.params[5], QueryParam::Int(15));
}

#[test]
fn placeholder_count_always_matches_parameter_count() {
    let combos = [
        FilterOptions::default(),
        FilterOptions {
            city: Some("a".into()),
            ..Default::default()
        },
        FilterOptions {
            city: Some("a".into()),
            minimum_rating: Some(1.0),
            ..Default::default()
        },
        FilterOptions {
            city: Some("a".into()),
            owner_id: Some(1),
            minimum_price_per_night: Some(1.0),
            maximum_price_per_night: Some(2.0),
            minimum_rating: Some(3.0),
        },
    ];

    for options in &combos {
        let built = build_listing_query(options, None);
        for n in 1..=built.params.len() {
            assert!(
                built.sql.contains(&format!("${n}")),
                "missing placeholder ${n} in: {}",
                built.sql
            );
        }
        assert!(!built.sql.contains(&format!("${}", built.params.len() + 1)));
    }
}

// ============================================================
// FilterOptions deserialization
// ============================================================

#[test]
fn filter_options_deserialize_with_absent_fields() {
    let options: FilterOptions = serde_json::from_str(r#"{"city": "van"}"#).unwrap();
    assert_eq!(options.city.as_deref(), Some("van"));
    assert!(options.owner_id.is_none());
    assert!(options.minimum_price_per_night.is_none());
    assert!(options.maximum_price_per_night.is_none());
    assert!(options.minimum_rating.is_none());
}

#[test]
fn filter_options_reject_non_numeric_owner_id() {
    let result = serde_json::from_str::<FilterOptions>(r#"{"owner_id": "abc"}"#);
    assert!(result.is_err());
}
