//! Administrative handlers: the only write path into the inventory.
//!
//! Status and price are the two fields that change after seeding.
//! Transitions are unconstrained in direction -- releasing a reservation
//! back to available is a legitimate move.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use vistamar_core::classify::format_price_usd;
use vistamar_core::suite::SuiteStatus;
use vistamar_db::repositories::SuiteRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::suites::{suite_from_record, SuiteView};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for the status update endpoint.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Request body for the price update endpoint. `null` clears the price,
/// putting the suite back to "Contact for Pricing".
#[derive(Debug, Deserialize)]
pub struct UpdatePriceRequest {
    pub price_usd: Option<f64>,
}

/// PATCH /admin/suites/{floor}/{unit_number}/status
pub async fn update_status(
    State(state): State<AppState>,
    Path((floor, unit_number)): Path<(i32, i32)>,
    Json(input): Json<UpdateStatusRequest>,
) -> AppResult<Json<DataResponse<SuiteView>>> {
    let status: SuiteStatus = input.status.parse().map_err(AppError::BadRequest)?;

    let record = SuiteRepo::update_status(&state.pool, floor, unit_number, status.as_str())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Suite {floor}/{unit_number} not found")))?;

    let suite = suite_from_record(&state, &record)?;
    Ok(Json(DataResponse {
        data: SuiteView::from(&suite),
    }))
}

/// PATCH /admin/suites/{floor}/{unit_number}/price
pub async fn update_price(
    State(state): State<AppState>,
    Path((floor, unit_number)): Path<(i32, i32)>,
    Json(input): Json<UpdatePriceRequest>,
) -> AppResult<Json<DataResponse<SuiteView>>> {
    if let Some(price) = input.price_usd {
        if !price.is_finite() || price <= 0.0 {
            return Err(AppError::BadRequest(
                "price_usd must be a positive number or null".to_string(),
            ));
        }
    }

    // Keep the stored display string in step for external table readers.
    let price_display = input.price_usd.map(|p| format_price_usd(Some(p)));

    let record = SuiteRepo::update_price(
        &state.pool,
        floor,
        unit_number,
        input.price_usd,
        price_display.as_deref(),
    )
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Suite {floor}/{unit_number} not found")))?;

    let suite = suite_from_record(&state, &record)?;
    Ok(Json(DataResponse {
        data: SuiteView::from(&suite),
    }))
}
