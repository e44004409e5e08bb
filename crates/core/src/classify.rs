//! Derived presentational fields: suite tier, price strings, compass labels.
//!
//! This module is the only place tier thresholds and price formatting
//! live -- the source data's stored `suite_type` and `price_display`
//! columns are informational and are recomputed here on every read so
//! stored and derived values cannot drift.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalogue::{Orientation, UnitCatalogue};
use crate::geometry::Point;

/// Sizes at or above this classify as Premium.
pub const PREMIUM_MIN_SQM: f64 = 80.0;

/// Sizes at or above this (and below Premium) classify as Deluxe.
pub const DELUXE_MIN_SQM: f64 = 65.0;

/// Rendered wherever a price is absent or unusable.
pub const CONTACT_FOR_PRICING: &str = "Contact for Pricing";

/// Marketing tier, derived from size alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuiteTier {
    Executive,
    Deluxe,
    Premium,
}

impl SuiteTier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Executive => "executive",
            Self::Deluxe => "deluxe",
            Self::Premium => "premium",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Executive => "Executive Suite",
            Self::Deluxe => "Deluxe Suite",
            Self::Premium => "Premium Suite",
        }
    }
}

impl fmt::Display for SuiteTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SuiteTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("executive") {
            Ok(Self::Executive)
        } else if s.eq_ignore_ascii_case("deluxe") {
            Ok(Self::Deluxe)
        } else if s.eq_ignore_ascii_case("premium") {
            Ok(Self::Premium)
        } else {
            Err(format!("Unknown suite tier: {s}"))
        }
    }
}

/// Classify a size into a tier. "At least" semantics: exactly 80.0 is
/// Premium, exactly 65.0 is Deluxe.
///
/// Total over every f64 input: non-positive and non-finite sizes clamp
/// to Executive rather than propagating garbage (the source data only
/// guarantees positivity by convention).
pub fn suite_tier(size_sqm: f64) -> SuiteTier {
    if size_sqm >= PREMIUM_MIN_SQM {
        SuiteTier::Premium
    } else if size_sqm >= DELUXE_MIN_SQM {
        SuiteTier::Deluxe
    } else {
        SuiteTier::Executive
    }
}

/// Full currency rendering: `$1,350,000`. Fails closed to
/// [`CONTACT_FOR_PRICING`] on absent, non-positive, or non-finite input.
pub fn format_price_usd(amount_usd: Option<f64>) -> String {
    match usable_amount(amount_usd) {
        Some(amount) => format!("${}", group_thousands(amount.round() as u64)),
        None => CONTACT_FOR_PRICING.to_string(),
    }
}

/// Abbreviated rendering for dense overlays: `$595K`, `$1.2M`. Same
/// fail-closed contract as [`format_price_usd`].
pub fn format_price_short(amount_usd: Option<f64>) -> String {
    let Some(amount) = usable_amount(amount_usd) else {
        return CONTACT_FOR_PRICING.to_string();
    };
    if amount >= 1_000_000.0 {
        let millions = format!("{:.1}", amount / 1_000_000.0);
        let millions = millions.strip_suffix(".0").unwrap_or(&millions);
        format!("${millions}M")
    } else if amount >= 1_000.0 {
        format!("${}K", (amount / 1_000.0).round() as u64)
    } else {
        format!("${}", amount.round() as u64)
    }
}

fn usable_amount(amount_usd: Option<f64>) -> Option<f64> {
    amount_usd.filter(|a| a.is_finite() && *a > 0.0)
}

fn group_thousands(mut value: u64) -> String {
    let mut groups = Vec::new();
    loop {
        let group = value % 1_000;
        value /= 1_000;
        if value == 0 {
            groups.push(group.to_string());
            break;
        }
        groups.push(format!("{group:03}"));
    }
    groups.reverse();
    groups.join(",")
}

/// View-direction label for one unit, placed on the floor-plan overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompassLabel {
    pub full: &'static str,
    pub short: &'static str,
    /// Anchor in plan-percent space.
    pub position: Point,
}

/// Compass label for a unit number. Total over all inputs: unmapped unit
/// numbers fall back to a neutral, centered "City" label rather than
/// failing the overlay.
pub fn compass_label(catalogue: &UnitCatalogue, unit_number: i32) -> CompassLabel {
    match catalogue.get(unit_number) {
        Some(info) => CompassLabel {
            full: info.orientation.full_name(),
            short: info.orientation.short_code(),
            position: label_anchor(info.orientation),
        },
        None => CompassLabel {
            full: "City",
            short: "C",
            position: Point { x: 50.0, y: 50.0 },
        },
    }
}

/// Fixed label anchor per compass point, plan-percent space.
fn label_anchor(orientation: Orientation) -> Point {
    let (x, y) = match orientation {
        Orientation::North => (50.0, 10.0),
        Orientation::NorthEast => (86.0, 14.0),
        Orientation::East => (90.0, 50.0),
        Orientation::SouthEast => (86.0, 86.0),
        Orientation::South => (50.0, 90.0),
        Orientation::SouthWest => (14.0, 86.0),
        Orientation::West => (10.0, 50.0),
        Orientation::NorthWest => (14.0, 14.0),
    };
    Point { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(suite_tier(80.00), SuiteTier::Premium);
        assert_eq!(suite_tier(79.99), SuiteTier::Deluxe);
        assert_eq!(suite_tier(65.00), SuiteTier::Deluxe);
        assert_eq!(suite_tier(64.99), SuiteTier::Executive);
    }

    #[test]
    fn tier_is_total_over_garbage_sizes() {
        assert_eq!(suite_tier(0.0), SuiteTier::Executive);
        assert_eq!(suite_tier(-12.5), SuiteTier::Executive);
        assert_eq!(suite_tier(f64::NAN), SuiteTier::Executive);
        assert_eq!(suite_tier(f64::INFINITY), SuiteTier::Premium);
    }

    #[test]
    fn full_price_formatting() {
        assert_eq!(format_price_usd(Some(1_350_000.0)), "$1,350,000");
        assert_eq!(format_price_usd(Some(595_000.0)), "$595,000");
        assert_eq!(format_price_usd(Some(980.0)), "$980");
    }

    #[test]
    fn short_price_formatting() {
        assert_eq!(format_price_short(Some(595_000.0)), "$595K");
        assert_eq!(format_price_short(Some(1_200_000.0)), "$1.2M");
        assert_eq!(format_price_short(Some(2_000_000.0)), "$2M");
        assert_eq!(format_price_short(Some(850.0)), "$850");
    }

    #[test]
    fn missing_or_garbage_prices_fail_closed() {
        assert_eq!(format_price_short(None), CONTACT_FOR_PRICING);
        assert_eq!(format_price_usd(None), CONTACT_FOR_PRICING);
        assert_eq!(format_price_usd(Some(-5.0)), CONTACT_FOR_PRICING);
        assert_eq!(format_price_usd(Some(0.0)), CONTACT_FOR_PRICING);
        assert_eq!(format_price_usd(Some(f64::NAN)), CONTACT_FOR_PRICING);
        assert_eq!(format_price_short(Some(f64::INFINITY)), CONTACT_FOR_PRICING);
    }

    #[test]
    fn tier_parses_case_insensitively() {
        assert_eq!("Premium".parse::<SuiteTier>().unwrap(), SuiteTier::Premium);
        assert_eq!("deluxe".parse::<SuiteTier>().unwrap(), SuiteTier::Deluxe);
        assert!("penthouse".parse::<SuiteTier>().is_err());
    }

    #[test]
    fn compass_label_for_mapped_unit() {
        let catalogue = UnitCatalogue::standard().unwrap();
        let label = compass_label(&catalogue, 2);
        assert_eq!(label.full, "Northeast");
        assert_eq!(label.short, "NE");
        assert_eq!(label.position, Point { x: 86.0, y: 14.0 });
    }

    #[test]
    fn compass_label_falls_back_to_city() {
        let catalogue = UnitCatalogue::standard().unwrap();
        for unit in [0, -1, 99] {
            let label = compass_label(&catalogue, unit);
            assert_eq!(label.full, "City");
            assert_eq!(label.short, "C");
            assert_eq!(label.position, Point { x: 50.0, y: 50.0 });
        }
    }
}
