//! Read-only query surface over the in-memory suite collection.
//!
//! Built from already-materialized rows plus the static catalogue. All
//! queries are deterministic: suites are held sorted by (floor, unit)
//! and nothing is mutated after construction.

use std::collections::HashSet;

use serde::Serialize;

use crate::building::BuildingConfig;
use crate::catalogue::UnitCatalogue;
use crate::classify::SuiteTier;
use crate::error::CoreError;
use crate::suite::{Suite, SuiteInput, SuiteStatus};

/// Per-floor availability counts. `available + reserved + sold == total`
/// by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FloorStats {
    pub total: usize,
    pub available: usize,
    pub reserved: usize,
    pub sold: usize,
}

/// The assembled, validated suite collection.
#[derive(Debug, Clone)]
pub struct SuiteInventory {
    building: BuildingConfig,
    suites: Vec<Suite>,
}

impl SuiteInventory {
    /// Assemble an inventory from raw rows.
    ///
    /// Validated eagerly: floors must be residential and in range, unit
    /// numbers must exist in the catalogue, sizes must be positive, and
    /// `(floor, unit_number)` must be globally unique. A duplicate pair
    /// is a [`CoreError::Conflict`]; everything else is a
    /// [`CoreError::Validation`].
    pub fn from_rows(
        building: &BuildingConfig,
        catalogue: &UnitCatalogue,
        rows: Vec<SuiteInput>,
    ) -> Result<Self, CoreError> {
        building.validate()?;
        if catalogue.len() != building.units_per_floor as usize {
            return Err(CoreError::Configuration(format!(
                "Catalogue holds {} units but the building expects {} per floor",
                catalogue.len(),
                building.units_per_floor
            )));
        }

        let mut seen: HashSet<(i32, i32)> = HashSet::with_capacity(rows.len());
        let mut suites = Vec::with_capacity(rows.len());

        for row in rows {
            if !building.contains_floor(row.floor) {
                return Err(CoreError::Validation(format!(
                    "Suite {}/{} is outside the floor range {}..={}",
                    row.floor, row.unit_number, building.floor_min, building.floor_max
                )));
            }
            if building.is_amenity(row.floor) {
                return Err(CoreError::Validation(format!(
                    "Floor {} is an amenity level and carries no suites",
                    row.floor
                )));
            }
            let info = catalogue.get(row.unit_number).ok_or_else(|| {
                CoreError::Validation(format!(
                    "Unit number {} is not in the catalogue (1..={})",
                    row.unit_number,
                    catalogue.len()
                ))
            })?;
            if !row.size_sqm.is_finite() || row.size_sqm <= 0.0 {
                return Err(CoreError::Validation(format!(
                    "Suite {}/{} has a non-positive size: {}",
                    row.floor, row.unit_number, row.size_sqm
                )));
            }
            if !seen.insert((row.floor, row.unit_number)) {
                return Err(CoreError::Conflict(format!(
                    "Duplicate suite {}/{}",
                    row.floor, row.unit_number
                )));
            }
            suites.push(Suite::from_input(row, info));
        }

        suites.sort_by_key(|s| (s.floor, s.unit_number));

        Ok(Self {
            building: building.clone(),
            suites,
        })
    }

    pub fn building(&self) -> &BuildingConfig {
        &self.building
    }

    /// All suites, sorted by (floor, unit number).
    pub fn suites(&self) -> &[Suite] {
        &self.suites
    }

    pub fn len(&self) -> usize {
        self.suites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }

    /// One suite by identity.
    pub fn get(&self, floor: i32, unit_number: i32) -> Option<&Suite> {
        self.suites
            .binary_search_by_key(&(floor, unit_number), |s| (s.floor, s.unit_number))
            .ok()
            .map(|idx| &self.suites[idx])
    }

    /// Suites on one floor, ascending by unit number. Empty for floors
    /// without suites -- amenity, unknown, or simply unseeded.
    pub fn suites_by_floor(&self, floor: i32) -> &[Suite] {
        let start = self
            .suites
            .partition_point(|s| (s.floor, s.unit_number) < (floor, i32::MIN));
        let end = self.suites.partition_point(|s| s.floor <= floor);
        &self.suites[start..end]
    }

    /// Suites whose derived tier matches, in (floor, unit) order.
    pub fn suites_by_tier(&self, tier: SuiteTier) -> Vec<&Suite> {
        self.suites.iter().filter(|s| s.tier() == tier).collect()
    }

    /// Availability counts for one floor. Zeros for floors without
    /// suites.
    pub fn floor_stats(&self, floor: i32) -> FloorStats {
        let mut stats = FloorStats::default();
        for suite in self.suites_by_floor(floor) {
            stats.total += 1;
            match suite.status {
                SuiteStatus::Available => stats.available += 1,
                SuiteStatus::Reserved => stats.reserved += 1,
                SuiteStatus::Sold => stats.sold += 1,
            }
        }
        stats
    }

    /// Available suites within `size_tolerance` sqm of the reference,
    /// excluding the reference itself, in (floor, unit) order, truncated
    /// to `limit`. Deterministic -- no sampling.
    pub fn similar_suites(
        &self,
        reference: &Suite,
        size_tolerance: f64,
        limit: usize,
    ) -> Vec<&Suite> {
        self.suites
            .iter()
            .filter(|s| (s.floor, s.unit_number) != (reference.floor, reference.unit_number))
            .filter(|s| s.status == SuiteStatus::Available)
            .filter(|s| (s.size_sqm - reference.size_sqm).abs() < size_tolerance)
            .take(limit)
            .collect()
    }
}
