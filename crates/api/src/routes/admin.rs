//! Route definitions for administrative updates.
//!
//! ```text
//! PATCH /suites/{floor}/{unit_number}/status  -> update_status
//! PATCH /suites/{floor}/{unit_number}/price   -> update_price
//! ```

use axum::routing::patch;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/suites/{floor}/{unit_number}/status",
            patch(admin::update_status),
        )
        .route(
            "/suites/{floor}/{unit_number}/price",
            patch(admin::update_price),
        )
}
