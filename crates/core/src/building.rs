//! Building configuration: floor range, units per floor, amenity levels.
//!
//! Constructed once at startup and passed by reference to everything that
//! needs it -- there is no global table. The two shipped profiles mirror
//! the two sales configurations of the tower.

use serde::Serialize;

use crate::error::CoreError;

/// Static shape of the tower: which floors exist, which carry suites,
/// and how many units each residential floor holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildingConfig {
    /// Lowest floor with a facade band (inclusive).
    pub floor_min: i32,
    /// Highest floor with a facade band (inclusive).
    pub floor_max: i32,
    /// Sellable units on each residential floor.
    pub units_per_floor: i32,
    /// Floors inside the range that carry no suites (lobby, spa, club).
    pub amenity_floors: Vec<i32>,
}

impl BuildingConfig {
    /// Full sales configuration: floors 15–25, residential 17–25,
    /// 14 units per floor -- 126 suites.
    pub fn standard() -> Self {
        Self {
            floor_min: 15,
            floor_max: 25,
            units_per_floor: 14,
            amenity_floors: vec![15, 16],
        }
    }

    /// Reduced launch configuration: residential 17–23 -- 98 suites.
    pub fn compact() -> Self {
        Self {
            floor_min: 15,
            floor_max: 23,
            units_per_floor: 14,
            amenity_floors: vec![15, 16],
        }
    }

    /// Resolve a profile name (`standard`, `compact`) from configuration.
    pub fn from_profile(name: &str) -> Result<Self, CoreError> {
        match name {
            "standard" => Ok(Self::standard()),
            "compact" => Ok(Self::compact()),
            other => Err(CoreError::Configuration(format!(
                "Unknown building profile: {other}"
            ))),
        }
    }

    /// Check structural invariants. Violations are data-authoring
    /// mistakes and must abort startup.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.floor_min > self.floor_max {
            return Err(CoreError::Configuration(format!(
                "Floor range is empty: {}..={}",
                self.floor_min, self.floor_max
            )));
        }
        if self.units_per_floor <= 0 {
            return Err(CoreError::Configuration(format!(
                "units_per_floor must be positive, got {}",
                self.units_per_floor
            )));
        }
        for &floor in &self.amenity_floors {
            if !self.contains_floor(floor) {
                return Err(CoreError::Configuration(format!(
                    "Amenity floor {floor} is outside the range {}..={}",
                    self.floor_min, self.floor_max
                )));
            }
        }
        if self.residential_floors().next().is_none() {
            return Err(CoreError::Configuration(
                "Building has no residential floors".to_string(),
            ));
        }
        Ok(())
    }

    pub fn contains_floor(&self, floor: i32) -> bool {
        (self.floor_min..=self.floor_max).contains(&floor)
    }

    pub fn is_amenity(&self, floor: i32) -> bool {
        self.contains_floor(floor) && self.amenity_floors.contains(&floor)
    }

    pub fn is_residential(&self, floor: i32) -> bool {
        self.contains_floor(floor) && !self.amenity_floors.contains(&floor)
    }

    /// All floors in the configured range, ascending.
    pub fn floors(&self) -> std::ops::RangeInclusive<i32> {
        self.floor_min..=self.floor_max
    }

    /// Floors carrying suites, ascending.
    pub fn residential_floors(&self) -> impl Iterator<Item = i32> + '_ {
        self.floors().filter(|&f| self.is_residential(f))
    }

    /// Total sellable units across all residential floors.
    pub fn total_units(&self) -> usize {
        self.residential_floors().count() * self.units_per_floor as usize
    }
}
