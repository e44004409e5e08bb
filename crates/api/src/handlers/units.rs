//! Handlers for the static architectural unit catalogue.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use vistamar_core::catalogue::UnitInfo;
use vistamar_core::classify::{compass_label, suite_tier, CompassLabel, SuiteTier};

use crate::error::{AppError, AppResult};
use crate::handlers::suites::OrientationView;
use crate::response::DataResponse;
use crate::state::AppState;

/// Catalogue entry with its derived tier.
#[derive(Debug, Serialize)]
pub struct UnitView {
    pub unit_number: i32,
    pub size_sqm: f64,
    pub tier: SuiteTier,
    pub lockoff: bool,
    pub orientation: OrientationView,
    pub plan_sheet: &'static str,
}

impl From<&UnitInfo> for UnitView {
    fn from(info: &UnitInfo) -> Self {
        Self {
            unit_number: info.unit_number,
            size_sqm: info.size_sqm,
            tier: suite_tier(info.size_sqm),
            lockoff: info.lockoff,
            orientation: info.orientation.into(),
            plan_sheet: info.plan_sheet,
        }
    }
}

/// Catalogue entry plus its floor-plan compass label.
#[derive(Debug, Serialize)]
pub struct UnitDetailView {
    #[serde(flatten)]
    pub unit: UnitView,
    pub compass: CompassLabel,
}

/// GET /units
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<UnitView>>>> {
    let views: Vec<UnitView> = state.catalogue.list().iter().map(UnitView::from).collect();
    Ok(Json(DataResponse { data: views }))
}

/// GET /units/{unit_number}
pub async fn get_by_number(
    State(state): State<AppState>,
    Path(unit_number): Path<i32>,
) -> AppResult<Json<DataResponse<UnitDetailView>>> {
    let info = state
        .catalogue
        .get(unit_number)
        .ok_or_else(|| AppError::NotFound(format!("Unit {unit_number} not found")))?;
    Ok(Json(DataResponse {
        data: UnitDetailView {
            unit: UnitView::from(info),
            compass: compass_label(&state.catalogue, unit_number),
        },
    }))
}
