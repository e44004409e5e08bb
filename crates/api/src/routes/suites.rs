//! Route definitions for suite resources.
//!
//! ```text
//! GET /                                  -> list (filters: floor, tier, status)
//! GET /{floor}/{unit_number}             -> get_by_identity
//! GET /{floor}/{unit_number}/similar     -> similar
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::suites;
use crate::state::AppState;

/// Routes mounted at `/suites`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(suites::list))
        .route("/{floor}/{unit_number}", get(suites::get_by_identity))
        .route("/{floor}/{unit_number}/similar", get(suites::similar))
}
