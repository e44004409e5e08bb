//! Route definitions for the unit catalogue.
//!
//! ```text
//! GET /                  -> list
//! GET /{unit_number}     -> get_by_number
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::units;
use crate::state::AppState;

/// Routes mounted at `/units`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(units::list))
        .route("/{unit_number}", get(units::get_by_number))
}
