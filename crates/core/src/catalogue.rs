//! Architectural unit catalogue.
//!
//! The authoritative per-unit-number facts from the architectural
//! schedule -- size, lockoff capability, orientation, source sheet.
//! Every residential floor reuses the same schedule, so the table is
//! keyed by unit number alone. Immutable after construction.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Compass orientation of a unit's primary exposure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Orientation {
    pub fn full_name(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::NorthEast => "Northeast",
            Self::East => "East",
            Self::SouthEast => "Southeast",
            Self::South => "South",
            Self::SouthWest => "Southwest",
            Self::West => "West",
            Self::NorthWest => "Northwest",
        }
    }

    pub fn short_code(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::West => "W",
            Self::NorthWest => "NW",
        }
    }
}

/// Static facts for one unit number, identical on every residential floor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitInfo {
    pub unit_number: i32,
    pub size_sqm: f64,
    /// Whether the unit can be subdivided into two rentable sections.
    pub lockoff: bool,
    pub orientation: Orientation,
    /// Architectural sheet the dimensions were taken from.
    pub plan_sheet: &'static str,
}

/// The per-floor unit schedule, ordered by unit number.
#[derive(Debug, Clone)]
pub struct UnitCatalogue {
    units: Vec<UnitInfo>,
}

impl UnitCatalogue {
    /// Build a catalogue, enforcing the table invariants: unit numbers
    /// dense and ascending from 1, all sizes positive and finite.
    pub fn new(units: Vec<UnitInfo>) -> Result<Self, CoreError> {
        if units.is_empty() {
            return Err(CoreError::Configuration(
                "Unit catalogue is empty".to_string(),
            ));
        }
        for (idx, unit) in units.iter().enumerate() {
            let expected = idx as i32 + 1;
            if unit.unit_number != expected {
                return Err(CoreError::Configuration(format!(
                    "Unit numbers must be dense and ascending from 1: \
                     expected {expected}, found {}",
                    unit.unit_number
                )));
            }
            if !unit.size_sqm.is_finite() || unit.size_sqm <= 0.0 {
                return Err(CoreError::Configuration(format!(
                    "Unit {} has a non-positive size: {}",
                    unit.unit_number, unit.size_sqm
                )));
            }
        }
        Ok(Self { units })
    }

    /// The shipped 14-unit schedule (sheets A-201 through A-205).
    pub fn standard() -> Result<Self, CoreError> {
        use Orientation::*;

        let entry = |unit_number, size_sqm, lockoff, orientation, plan_sheet| UnitInfo {
            unit_number,
            size_sqm,
            lockoff,
            orientation,
            plan_sheet,
        };

        Self::new(vec![
            entry(1, 52.40, false, North, "A-201"),
            entry(2, 85.15, true, NorthEast, "A-201"),
            entry(3, 48.30, false, East, "A-202"),
            entry(4, 61.20, false, East, "A-202"),
            entry(5, 66.80, false, SouthEast, "A-202"),
            entry(6, 55.00, false, South, "A-203"),
            entry(7, 72.50, false, South, "A-203"),
            entry(8, 49.90, false, SouthWest, "A-203"),
            entry(9, 85.25, true, West, "A-204"),
            entry(10, 58.60, false, West, "A-204"),
            entry(11, 64.10, false, NorthWest, "A-204"),
            entry(12, 81.40, true, North, "A-205"),
            entry(13, 46.20, false, North, "A-205"),
            entry(14, 68.90, false, North, "A-205"),
        ])
    }

    /// Look up one unit. Returns `None` for out-of-range numbers -- the
    /// caller decides whether that is a 404 or a fallback.
    pub fn get(&self, unit_number: i32) -> Option<&UnitInfo> {
        if unit_number < 1 {
            return None;
        }
        self.units.get(unit_number as usize - 1)
    }

    /// All units, ascending by unit number.
    pub fn list(&self) -> &[UnitInfo] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
