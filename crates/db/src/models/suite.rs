//! Suite row model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vistamar_core::error::CoreError;
use vistamar_core::suite::SuiteInput;
use vistamar_core::types::{DbId, Timestamp};

/// A suite row from the `suites` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SuiteRecord {
    pub id: DbId,
    pub floor: i32,
    pub unit_number: i32,
    pub size_sqm: f64,
    /// Informational copy; the domain core derives the tier from size.
    pub suite_type: String,
    pub status: String,
    pub price_usd: Option<f64>,
    /// Informational copy; the domain core formats prices itself.
    pub price_display: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl SuiteRecord {
    /// Convert to the domain core's raw-row contract. Fails on a status
    /// string outside the checked enum (schema drift).
    pub fn to_input(&self) -> Result<SuiteInput, CoreError> {
        let status = self
            .status
            .parse()
            .map_err(CoreError::Validation)?;
        Ok(SuiteInput {
            id: self.id,
            floor: self.floor,
            unit_number: self.unit_number,
            size_sqm: self.size_sqm,
            status,
            price_usd: self.price_usd,
        })
    }
}

/// DTO for inserting a suite (seed path).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSuite {
    pub floor: i32,
    pub unit_number: i32,
    pub size_sqm: f64,
    pub suite_type: String,
    /// Defaults to `available` if omitted.
    pub status: Option<String>,
    pub price_usd: Option<f64>,
    pub price_display: Option<String>,
}
