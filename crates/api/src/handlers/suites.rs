//! Handlers for suite listing, detail, and the similar-suites query.
//!
//! Every response recomputes derived fields (tier, price strings,
//! orientation) through the domain core -- the stored `suite_type` and
//! `price_display` columns are never echoed back.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use vistamar_core::catalogue::Orientation;
use vistamar_core::classify::SuiteTier;
use vistamar_core::inventory::SuiteInventory;
use vistamar_core::suite::{Suite, SuiteStatus};
use vistamar_core::types::DbId;
use vistamar_db::models::suite::SuiteRecord;
use vistamar_db::repositories::SuiteRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Ceiling on the similar-suites result size.
const MAX_SIMILAR_LIMIT: usize = 50;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for the suite list endpoint.
#[derive(Debug, Deserialize)]
pub struct SuiteListQuery {
    pub floor: Option<i32>,
    /// Derived tier filter: `executive`, `deluxe`, or `premium`.
    pub tier: Option<String>,
    pub status: Option<String>,
}

/// Query parameters for the similar-suites endpoint.
#[derive(Debug, Deserialize)]
pub struct SimilarQuery {
    /// Size tolerance in sqm (default: 10.0).
    pub tolerance: Option<f64>,
    /// Maximum results (default: 3, capped at 50).
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct OrientationView {
    pub full: &'static str,
    pub short: &'static str,
}

impl From<Orientation> for OrientationView {
    fn from(orientation: Orientation) -> Self {
        Self {
            full: orientation.full_name(),
            short: orientation.short_code(),
        }
    }
}

/// A suite with all derived presentation fields materialized.
#[derive(Debug, Serialize)]
pub struct SuiteView {
    pub id: DbId,
    pub floor: i32,
    pub unit_number: i32,
    pub size_sqm: f64,
    pub tier: SuiteTier,
    pub tier_label: &'static str,
    pub status: SuiteStatus,
    pub price_usd: Option<f64>,
    pub price_display: String,
    pub price_display_short: String,
    pub orientation: OrientationView,
    pub lockoff: bool,
}

impl From<&Suite> for SuiteView {
    fn from(suite: &Suite) -> Self {
        let tier = suite.tier();
        Self {
            id: suite.id,
            floor: suite.floor,
            unit_number: suite.unit_number,
            size_sqm: suite.size_sqm,
            tier,
            tier_label: tier.label(),
            status: suite.status,
            price_usd: suite.price_usd,
            price_display: suite.price_display(),
            price_display_short: suite.price_display_short(),
            orientation: suite.orientation.into(),
            lockoff: suite.lockoff,
        }
    }
}

// ---------------------------------------------------------------------------
// Shared assembly helpers
// ---------------------------------------------------------------------------

/// Fetch all suite rows and assemble the validated in-memory inventory.
pub(crate) async fn load_inventory(state: &AppState) -> AppResult<SuiteInventory> {
    let records = SuiteRepo::list(&state.pool).await?;
    let rows = records
        .iter()
        .map(SuiteRecord::to_input)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SuiteInventory::from_rows(
        &state.building,
        &state.catalogue,
        rows,
    )?)
}

/// Assemble a single domain suite from one row.
pub(crate) fn suite_from_record(state: &AppState, record: &SuiteRecord) -> AppResult<Suite> {
    let input = record.to_input()?;
    let info = state.catalogue.get(input.unit_number).ok_or_else(|| {
        AppError::InternalError(format!(
            "Suite row {} references unknown unit number {}",
            record.id, record.unit_number
        ))
    })?;
    Ok(Suite::from_input(input, info))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /suites
///
/// List suites, optionally filtered by floor, derived tier, and status.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<SuiteListQuery>,
) -> AppResult<Json<DataResponse<Vec<SuiteView>>>> {
    let tier_filter: Option<SuiteTier> = match &query.tier {
        Some(raw) => Some(raw.parse().map_err(AppError::BadRequest)?),
        None => None,
    };
    let status_filter: Option<SuiteStatus> = match &query.status {
        Some(raw) => Some(raw.parse().map_err(AppError::BadRequest)?),
        None => None,
    };

    let inventory = load_inventory(&state).await?;
    let base: &[Suite] = match query.floor {
        Some(floor) => inventory.suites_by_floor(floor),
        None => inventory.suites(),
    };

    let views: Vec<SuiteView> = base
        .iter()
        .filter(|s| tier_filter.map_or(true, |t| s.tier() == t))
        .filter(|s| status_filter.map_or(true, |st| s.status == st))
        .map(SuiteView::from)
        .collect();

    Ok(Json(DataResponse { data: views }))
}

/// GET /suites/{floor}/{unit_number}
pub async fn get_by_identity(
    State(state): State<AppState>,
    Path((floor, unit_number)): Path<(i32, i32)>,
) -> AppResult<Json<DataResponse<SuiteView>>> {
    let record = SuiteRepo::find_by_floor_unit(&state.pool, floor, unit_number)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Suite {floor}/{unit_number} not found")))?;
    let suite = suite_from_record(&state, &record)?;
    Ok(Json(DataResponse {
        data: SuiteView::from(&suite),
    }))
}

/// GET /suites/{floor}/{unit_number}/similar
///
/// Available suites close in size to the reference, deterministic order.
pub async fn similar(
    State(state): State<AppState>,
    Path((floor, unit_number)): Path<(i32, i32)>,
    Query(query): Query<SimilarQuery>,
) -> AppResult<Json<DataResponse<Vec<SuiteView>>>> {
    let tolerance = query.tolerance.unwrap_or(10.0);
    if !tolerance.is_finite() || tolerance <= 0.0 {
        return Err(AppError::BadRequest(
            "tolerance must be a positive number of sqm".to_string(),
        ));
    }
    let limit = query.limit.unwrap_or(3);
    if !(1..=MAX_SIMILAR_LIMIT).contains(&limit) {
        return Err(AppError::BadRequest(format!(
            "limit must be between 1 and {MAX_SIMILAR_LIMIT}"
        )));
    }

    let inventory = load_inventory(&state).await?;
    let reference = inventory
        .get(floor, unit_number)
        .ok_or_else(|| AppError::NotFound(format!("Suite {floor}/{unit_number} not found")))?;

    let views: Vec<SuiteView> = inventory
        .similar_suites(reference, tolerance, limit)
        .into_iter()
        .map(SuiteView::from)
        .collect();

    Ok(Json(DataResponse { data: views }))
}
