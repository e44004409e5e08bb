//! Route definitions for geometry lookups.
//!
//! ```text
//! GET /facade                    -> facade_all
//! GET /facade/{floor}            -> facade_by_floor
//! GET /facade/{floor}/focus      -> focus (query: zoom)
//! GET /plan/{unit_number}        -> plan_by_unit
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::geometry;
use crate::state::AppState;

/// Routes mounted at `/geometry`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/facade", get(geometry::facade_all))
        .route("/facade/{floor}", get(geometry::facade_by_floor))
        .route("/facade/{floor}/focus", get(geometry::focus))
        .route("/plan/{unit_number}", get(geometry::plan_by_unit))
}
