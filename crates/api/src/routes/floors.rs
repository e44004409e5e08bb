//! Route definitions for floor resources.
//!
//! ```text
//! GET /                    -> list
//! GET /{floor}/suites      -> suites
//! GET /{floor}/stats       -> stats
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::floors;
use crate::state::AppState;

/// Routes mounted at `/floors`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(floors::list))
        .route("/{floor}/suites", get(floors::suites))
        .route("/{floor}/stats", get(floors::stats))
}
