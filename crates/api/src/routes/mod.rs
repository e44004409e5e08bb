//! Route table assembly.

use axum::Router;

use crate::state::AppState;

pub mod admin;
pub mod floors;
pub mod geometry;
pub mod health;
pub mod suites;
pub mod units;

/// All routes mounted under `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/suites", suites::router())
        .nest("/floors", floors::router())
        .nest("/units", units::router())
        .nest("/geometry", geometry::router())
        .nest("/admin", admin::router())
}
