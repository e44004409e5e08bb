//! HTTP-level integration tests for suite and floor endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the
//! router without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, seed_floor, seed_suite};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Suite list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_is_empty_before_seeding(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/suites").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_returns_seeded_floor_in_unit_order(pool: PgPool) {
    seed_floor(&pool, 17).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/suites").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 14);

    let units: Vec<i64> = data
        .iter()
        .map(|s| s["unit_number"].as_i64().unwrap())
        .collect();
    assert_eq!(units, (1..=14).collect::<Vec<i64>>());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_filters_by_tier_and_status(pool: PgPool) {
    seed_floor(&pool, 17).await;

    // Units 2, 9, 12 are >= 80 sqm.
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/suites?tier=premium").await;
    let json = body_json(response).await;
    let units: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["unit_number"].as_i64().unwrap())
        .collect();
    assert_eq!(units, vec![2, 9, 12]);

    // Units 11-13 were seeded reserved.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/suites?status=reserved").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_rejects_unknown_tier(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/suites?tier=penthouse").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Suite detail
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_detail_recomputes_derived_fields(pool: PgPool) {
    seed_suite(&pool, 17, 2, "available", Some(1_240_000.0)).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/suites/17/2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let suite = &json["data"];
    assert_eq!(suite["tier"], "premium");
    assert_eq!(suite["tier_label"], "Premium Suite");
    assert_eq!(suite["price_display"], "$1,240,000");
    assert_eq!(suite["price_display_short"], "$1.2M");
    assert_eq!(suite["orientation"]["short"], "NE");
    assert_eq!(suite["lockoff"], true);
    // Stored informational columns are never echoed.
    assert!(suite.get("suite_type").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unpriced_detail_fails_closed(pool: PgPool) {
    seed_suite(&pool, 17, 13, "available", None).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/suites/17/13").await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["price_display"], "Contact for Pricing");
    assert_eq!(json["data"]["tier"], "executive");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_detail_for_missing_suite_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/suites/17/2").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Similar suites
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_similar_is_deterministic_and_available_only(pool: PgPool) {
    seed_suite(&pool, 17, 2, "available", None).await; // 85.15, reference
    seed_suite(&pool, 17, 9, "available", None).await; // 85.25
    seed_suite(&pool, 18, 2, "sold", None).await; // excluded: sold
    seed_suite(&pool, 18, 9, "available", None).await; // 85.25
    seed_suite(&pool, 19, 13, "available", None).await; // 46.2, too far

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/suites/17/2/similar?tolerance=5&limit=10").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let keys: Vec<(i64, i64)> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| {
            (
                s["floor"].as_i64().unwrap(),
                s["unit_number"].as_i64().unwrap(),
            )
        })
        .collect();
    assert_eq!(keys, vec![(17, 9), (18, 9)]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_similar_validates_parameters(pool: PgPool) {
    seed_suite(&pool, 17, 2, "available", None).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/suites/17/2/similar?tolerance=0").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/suites/17/2/similar?limit=500").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Floors
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_floor_list_covers_configured_range(pool: PgPool) {
    seed_floor(&pool, 17).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/floors").await;
    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();

    // Standard profile: floors 15-25.
    assert_eq!(data.len(), 11);
    assert_eq!(data[0]["floor"], 15);
    assert_eq!(data[0]["category"], "amenity");
    assert_eq!(data[0]["stats"]["total"], 0);

    let floor_17 = data.iter().find(|f| f["floor"] == 17).unwrap();
    assert_eq!(floor_17["category"], "residential");
    assert_eq!(floor_17["stats"]["total"], 14);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_floor_stats_partition_the_floor(pool: PgPool) {
    seed_floor(&pool, 17).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/floors/17/stats").await;
    let json = body_json(response).await;
    let stats = &json["data"];

    assert_eq!(stats["total"], 14);
    assert_eq!(stats["available"], 10);
    assert_eq!(stats["reserved"], 3);
    assert_eq!(stats["sold"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_amenity_floor_suites_is_empty_not_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/floors/16/suites").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// Unit catalogue
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unit_catalogue_list_and_detail(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/units").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 14);

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/units/9").await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["size_sqm"], 85.25);
    assert_eq!(json["data"]["lockoff"], true);
    assert_eq!(json["data"]["compass"]["short"], "W");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/units/99").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
