//! Handlers for floor summaries and per-floor suite listings.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use vistamar_core::inventory::FloorStats;

use crate::error::AppResult;
use crate::handlers::suites::{load_inventory, SuiteView};
use crate::response::DataResponse;
use crate::state::AppState;

/// One floor of the tower with its availability counts.
#[derive(Debug, Serialize)]
pub struct FloorView {
    pub floor: i32,
    /// `residential` or `amenity`.
    pub category: &'static str,
    pub stats: FloorStats,
}

/// GET /floors
///
/// Every floor in the configured range, ascending, with live counts.
/// Amenity floors report all-zero stats.
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<FloorView>>>> {
    let inventory = load_inventory(&state).await?;
    let views: Vec<FloorView> = state
        .building
        .floors()
        .map(|floor| FloorView {
            floor,
            category: if state.building.is_amenity(floor) {
                "amenity"
            } else {
                "residential"
            },
            stats: inventory.floor_stats(floor),
        })
        .collect();
    Ok(Json(DataResponse { data: views }))
}

/// GET /floors/{floor}/suites
///
/// Suites on one floor, ascending by unit number. Floors without suites
/// (amenity, unknown, unseeded) yield an empty list, not an error.
pub async fn suites(
    State(state): State<AppState>,
    Path(floor): Path<i32>,
) -> AppResult<Json<DataResponse<Vec<SuiteView>>>> {
    let inventory = load_inventory(&state).await?;
    let views: Vec<SuiteView> = inventory
        .suites_by_floor(floor)
        .iter()
        .map(SuiteView::from)
        .collect();
    Ok(Json(DataResponse { data: views }))
}

/// GET /floors/{floor}/stats
///
/// Availability counts for one floor; zeros when the floor has no
/// suites.
pub async fn stats(
    State(state): State<AppState>,
    Path(floor): Path<i32>,
) -> AppResult<Json<DataResponse<FloorStats>>> {
    let inventory = load_inventory(&state).await?;
    Ok(Json(DataResponse {
        data: inventory.floor_stats(floor),
    }))
}
