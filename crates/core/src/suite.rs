//! Suite domain type and the raw-row contract handed in by the
//! persistence layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalogue::{Orientation, UnitInfo};
use crate::classify::{format_price_short, format_price_usd, suite_tier, SuiteTier};
use crate::types::DbId;

/// Sales status of one suite. Transitions are externally triggered
/// (administrative action) and unconstrained in direction -- a
/// reservation can be released back to available. This core only reads
/// the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuiteStatus {
    Available,
    Reserved,
    Sold,
}

impl SuiteStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Reserved => "reserved",
            Self::Sold => "sold",
        }
    }
}

impl fmt::Display for SuiteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SuiteStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("available") {
            Ok(Self::Available)
        } else if s.eq_ignore_ascii_case("reserved") {
            Ok(Self::Reserved)
        } else if s.eq_ignore_ascii_case("sold") {
            Ok(Self::Sold)
        } else {
            Err(format!("Unknown suite status: {s}"))
        }
    }
}

/// One raw suite row as materialized by the data-fetching layer.
///
/// The stored `suite_type` and `price_display` columns are deliberately
/// absent: they are informational copies that this core recomputes from
/// `size_sqm` and `price_usd`.
#[derive(Debug, Clone, PartialEq)]
pub struct SuiteInput {
    pub id: DbId,
    pub floor: i32,
    pub unit_number: i32,
    pub size_sqm: f64,
    pub status: SuiteStatus,
    pub price_usd: Option<f64>,
}

/// A fully assembled suite: the live row merged with the catalogue's
/// architectural facts. Tier and price strings are computed on read,
/// never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suite {
    pub id: DbId,
    pub floor: i32,
    pub unit_number: i32,
    pub size_sqm: f64,
    pub status: SuiteStatus,
    pub price_usd: Option<f64>,
    pub orientation: Orientation,
    pub lockoff: bool,
}

impl Suite {
    /// Merge a raw row with its catalogue entry.
    pub fn from_input(input: SuiteInput, info: &UnitInfo) -> Self {
        Self {
            id: input.id,
            floor: input.floor,
            unit_number: input.unit_number,
            size_sqm: input.size_sqm,
            status: input.status,
            price_usd: input.price_usd,
            orientation: info.orientation,
            lockoff: info.lockoff,
        }
    }

    pub fn tier(&self) -> SuiteTier {
        suite_tier(self.size_sqm)
    }

    pub fn price_display(&self) -> String {
        format_price_usd(self.price_usd)
    }

    pub fn price_display_short(&self) -> String {
        format_price_short(self.price_usd)
    }
}
