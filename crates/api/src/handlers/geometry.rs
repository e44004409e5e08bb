//! Handlers for facade and floor-plan geometry lookups.
//!
//! The facade viewer treats an unknown floor as "no pan" rather than an
//! error, so the focus endpoint always answers 200; the region lookups
//! are plain 404s.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use vistamar_core::classify::{compass_label, CompassLabel};
use vistamar_core::geometry::{region_center_y, Point, Region};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Default zoom multiplier for the focus endpoint.
const DEFAULT_FOCUS_ZOOM: f64 = 2.5;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct FocusQuery {
    /// Zoom multiplier (default: 2.5, must be >= 1).
    pub zoom: Option<f64>,
}

/// One clickable band on the facade image.
#[derive(Debug, Serialize)]
pub struct FacadeBandView {
    pub floor: i32,
    pub region: Region,
}

/// One unit outline on the floor-plan image.
#[derive(Debug, Serialize)]
pub struct PlanRegionView {
    pub unit_number: i32,
    pub region: Region,
    /// Vertical midpoint for label placement.
    pub center_y: f64,
    pub label: CompassLabel,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /geometry/facade
///
/// All facade bands, ascending by floor.
pub async fn facade_all(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<FacadeBandView>>>> {
    let bands: Vec<FacadeBandView> = state
        .geometry
        .facade_regions()
        .map(|(floor, region)| FacadeBandView {
            floor,
            region: region.clone(),
        })
        .collect();
    Ok(Json(DataResponse { data: bands }))
}

/// GET /geometry/facade/{floor}
pub async fn facade_by_floor(
    State(state): State<AppState>,
    Path(floor): Path<i32>,
) -> AppResult<Json<DataResponse<FacadeBandView>>> {
    let region = state
        .geometry
        .facade_region(floor)
        .ok_or_else(|| AppError::NotFound(format!("Floor {floor} has no facade band")))?;
    Ok(Json(DataResponse {
        data: FacadeBandView {
            floor,
            region: region.clone(),
        },
    }))
}

/// GET /geometry/facade/{floor}/focus
///
/// Pan offset that centers a floor's band at the given zoom. Unknown
/// floors yield `{0, 0}` -- the viewer degrades to an unpanned view.
pub async fn focus(
    State(state): State<AppState>,
    Path(floor): Path<i32>,
    Query(query): Query<FocusQuery>,
) -> AppResult<Json<DataResponse<Point>>> {
    let zoom = query.zoom.unwrap_or(DEFAULT_FOCUS_ZOOM);
    if !zoom.is_finite() || zoom < 1.0 {
        return Err(AppError::BadRequest(
            "zoom must be a finite number >= 1".to_string(),
        ));
    }
    Ok(Json(DataResponse {
        data: state.geometry.focus_point_for_floor(floor, zoom),
    }))
}

/// GET /geometry/plan/{unit_number}
pub async fn plan_by_unit(
    State(state): State<AppState>,
    Path(unit_number): Path<i32>,
) -> AppResult<Json<DataResponse<PlanRegionView>>> {
    let region = state.geometry.plan_region(unit_number).ok_or_else(|| {
        AppError::NotFound(format!("Unit {unit_number} has no floor-plan outline"))
    })?;
    Ok(Json(DataResponse {
        data: PlanRegionView {
            unit_number,
            region: region.clone(),
            center_y: region_center_y(region),
            label: compass_label(&state.catalogue, unit_number),
        },
    }))
}
