//! HTTP-level integration tests for geometry endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Facade bands
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_facade_lists_all_bands_in_floor_order(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/geometry/facade").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let bands = json["data"].as_array().unwrap();
    assert_eq!(bands.len(), 11);
    assert_eq!(bands[0]["floor"], 15);
    assert_eq!(bands[10]["floor"], 25);

    // Higher floors sit strictly higher on the image.
    let tops: Vec<f64> = bands
        .iter()
        .map(|b| b["region"]["top"].as_f64().unwrap())
        .collect();
    for pair in tops.windows(2) {
        assert!(pair[1] < pair[0]);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_facade_band_for_one_floor(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/geometry/facade/25").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["region"]["kind"], "rect");
    assert_eq!(json["data"]["region"]["top"], 22.4);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_facade_band_for_unknown_floor_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/geometry/facade/3").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Focus point
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_focus_point_centers_a_known_floor(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/geometry/facade/25/focus?zoom=2.5").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["x"], 0.0);
    // Band center 24.8: (50 - 24.8) * 1.5 = 37.8.
    let y = json["data"]["y"].as_f64().unwrap();
    assert!((y - 37.8).abs() < 1e-9);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_focus_point_for_unknown_floor_is_origin_not_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/geometry/facade/99/focus?zoom=2.5").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["x"], 0.0);
    assert_eq!(json["data"]["y"], 0.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_focus_rejects_zoom_below_one(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/geometry/facade/25/focus?zoom=0.5").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Floor-plan outlines
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_plan_outline_with_compass_label(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/geometry/plan/2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["region"]["kind"], "polygon");
    assert!(data["region"]["points"].as_array().unwrap().len() >= 3);
    assert_eq!(data["label"]["short"], "NE");
    assert!(data["center_y"].as_f64().unwrap() > 0.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_plan_outline_for_unknown_unit_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/geometry/plan/99").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
