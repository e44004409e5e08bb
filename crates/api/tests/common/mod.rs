//! Shared helpers for API integration tests.
//!
//! Builds the real application router (same middleware stack as the
//! production binary) over a `#[sqlx::test]`-provided pool, plus small
//! request/seeding conveniences.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use vistamar_api::config::ServerConfig;
use vistamar_api::router::build_app_router;
use vistamar_api::state::AppState;
use vistamar_core::building::BuildingConfig;
use vistamar_core::catalogue::UnitCatalogue;
use vistamar_core::classify::suite_tier;
use vistamar_core::geometry::GeometryConfig;
use vistamar_db::models::suite::{CreateSuite, SuiteRecord};
use vistamar_db::repositories::SuiteRepo;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        building_profile: "standard".to_string(),
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool and the standard building profile.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let building = BuildingConfig::standard();
    let catalogue = UnitCatalogue::standard().expect("valid catalogue");
    let geometry = GeometryConfig::standard(&building).expect("valid geometry");

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        building: Arc::new(building),
        catalogue: Arc::new(catalogue),
        geometry: Arc::new(geometry),
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

/// Insert one suite using the catalogue size for its unit number.
#[allow(dead_code)]
pub async fn seed_suite(
    pool: &PgPool,
    floor: i32,
    unit_number: i32,
    status: &str,
    price_usd: Option<f64>,
) -> SuiteRecord {
    let catalogue = UnitCatalogue::standard().expect("valid catalogue");
    let size_sqm = catalogue
        .get(unit_number)
        .map(|u| u.size_sqm)
        .expect("unit in catalogue");
    SuiteRepo::create(
        pool,
        &CreateSuite {
            floor,
            unit_number,
            size_sqm,
            suite_type: suite_tier(size_sqm).as_str().to_string(),
            status: Some(status.to_string()),
            price_usd,
            price_display: None,
        },
    )
    .await
    .expect("seed suite")
}

/// Seed one full floor: units 1-10 available, 11-13 reserved, 14 sold.
#[allow(dead_code)]
pub async fn seed_floor(pool: &PgPool, floor: i32) {
    for unit in 1..=14 {
        let status = match unit {
            1..=10 => "available",
            11..=13 => "reserved",
            _ => "sold",
        };
        seed_suite(pool, floor, unit, status, None).await;
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::PATCH)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
