//! Facade and floor-plan geometry tables.
//!
//! Two independent images back the sales UI: the building facade photo
//! (floor bands in image-relative percent) and the shared residential
//! floor plan (unit polygons in pixel space). Both tables are data, not
//! code, and every invariant is checked when the table is built -- a
//! miscalibrated band must abort startup, not silently render a wrong
//! overlay.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::building::BuildingConfig;
use crate::error::CoreError;

/// Tolerance for contiguity checks between stacked facade bands.
const BAND_EPSILON: f64 = 1e-3;

/// A 2-D point. Percent or pixel space depending on the owning table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A visual region on one of the two images.
///
/// Facade bands are axis-aligned rectangles in percent space; floor-plan
/// unit outlines are closed polygons in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Region {
    Rect {
        top: f64,
        left: f64,
        width: f64,
        height: f64,
    },
    Polygon {
        points: Vec<Point>,
    },
}

/// Vertical midpoint of a region, used for label placement and focus
/// computation. Rect: `top + height / 2`. Polygon: midpoint between the
/// min and max vertex Y.
pub fn region_center_y(region: &Region) -> f64 {
    match region {
        Region::Rect { top, height, .. } => top + height / 2.0,
        Region::Polygon { points } => {
            let min = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
            let max = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
            (min + max) / 2.0
        }
    }
}

/// Geometric center of a region. Rect: box center. Polygon: vertex mean.
pub fn region_centroid(region: &Region) -> Point {
    match region {
        Region::Rect {
            top,
            left,
            width,
            height,
        } => Point {
            x: left + width / 2.0,
            y: top + height / 2.0,
        },
        Region::Polygon { points } => {
            let n = points.len() as f64;
            Point {
                x: points.iter().map(|p| p.x).sum::<f64>() / n,
                y: points.iter().map(|p| p.y).sum::<f64>() / n,
            }
        }
    }
}

/// Hit test. Rect: bounds check. Polygon: even-odd ray cast.
pub fn point_in_region(region: &Region, point: Point) -> bool {
    match region {
        Region::Rect {
            top,
            left,
            width,
            height,
        } => {
            point.x >= *left
                && point.x <= left + width
                && point.y >= *top
                && point.y <= top + height
        }
        Region::Polygon { points } => point_in_polygon(points, point),
    }
}

fn point_in_polygon(points: &[Point], p: Point) -> bool {
    if points.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (a, b) = (points[i], points[j]);
        if (a.y > p.y) != (b.y > p.y)
            && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

// ---------------------------------------------------------------------------
// Calibration data
// ---------------------------------------------------------------------------

// Facade bands, percent space. One band per floor, stacked bottom-up:
// higher floor, smaller top offset. Calibrated against the marketing
// facade photo.
const FACADE_BAND_LEFT: f64 = 24.0;
const FACADE_BAND_WIDTH: f64 = 52.0;
const FACADE_BAND_HEIGHT: f64 = 4.8;

const FACADE_BAND_TOPS: &[(i32, f64)] = &[
    (15, 70.4),
    (16, 65.6),
    (17, 60.8),
    (18, 56.0),
    (19, 51.2),
    (20, 46.4),
    (21, 41.6),
    (22, 36.8),
    (23, 32.0),
    (24, 27.2),
    (25, 22.4),
];

/// Pixel dimensions of the shared residential floor-plan image.
const PLAN_EXTENT: (f64, f64) = (1200.0, 800.0);

/// Viewport vertical center in facade percent space.
const VIEWPORT_CENTER_Y: f64 = 50.0;

/// Unit outlines on the floor-plan image, pixel space. The ring of units
/// wraps the central core (stairs, lifts, corridor); corner suites 2 and
/// 9 carry a chamfered edge from the tower's cut corners.
fn plan_outlines() -> BTreeMap<i32, Region> {
    let quad = |x1: f64, y1: f64, x2: f64, y2: f64| Region::Polygon {
        points: vec![
            Point { x: x1, y: y1 },
            Point { x: x2, y: y1 },
            Point { x: x2, y: y2 },
            Point { x: x1, y: y2 },
        ],
    };

    let mut plan = BTreeMap::new();
    // North edge, west to east.
    plan.insert(12, quad(60.0, 40.0, 270.0, 290.0));
    plan.insert(13, quad(280.0, 40.0, 480.0, 290.0));
    plan.insert(14, quad(490.0, 40.0, 690.0, 290.0));
    plan.insert(1, quad(700.0, 40.0, 900.0, 290.0));
    plan.insert(
        2,
        Region::Polygon {
            points: vec![
                Point { x: 910.0, y: 40.0 },
                Point { x: 1100.0, y: 40.0 },
                Point { x: 1140.0, y: 80.0 },
                Point { x: 1140.0, y: 290.0 },
                Point { x: 910.0, y: 290.0 },
            ],
        },
    );
    // East edge, top to bottom.
    plan.insert(3, quad(910.0, 300.0, 1140.0, 450.0));
    plan.insert(4, quad(910.0, 460.0, 1140.0, 610.0));
    plan.insert(5, quad(910.0, 620.0, 1140.0, 760.0));
    // South edge, east to west.
    plan.insert(6, quad(640.0, 510.0, 900.0, 760.0));
    plan.insert(7, quad(350.0, 510.0, 630.0, 760.0));
    plan.insert(8, quad(60.0, 510.0, 340.0, 760.0));
    // West edge, bottom to top.
    plan.insert(
        9,
        Region::Polygon {
            points: vec![
                Point { x: 60.0, y: 435.0 },
                Point { x: 300.0, y: 435.0 },
                Point { x: 300.0, y: 500.0 },
                Point { x: 110.0, y: 500.0 },
                Point { x: 60.0, y: 450.0 },
            ],
        },
    );
    plan.insert(10, quad(60.0, 370.0, 300.0, 430.0));
    plan.insert(11, quad(60.0, 300.0, 300.0, 365.0));
    plan
}

// ---------------------------------------------------------------------------
// GeometryConfig
// ---------------------------------------------------------------------------

/// Validated facade and floor-plan lookup tables.
///
/// Built once at startup; all query methods are pure and total over
/// their fallbacks.
#[derive(Debug, Clone)]
pub struct GeometryConfig {
    facade: BTreeMap<i32, Region>,
    plan: BTreeMap<i32, Region>,
    plan_extent: (f64, f64),
    viewport_center_y: f64,
}

impl GeometryConfig {
    /// Build and validate a geometry table set.
    ///
    /// Fails fast on any calibration defect: a floor without a band,
    /// bands out of order or non-contiguous, regions outside image
    /// bounds, a missing or overlapping unit outline.
    pub fn new(
        facade: BTreeMap<i32, Region>,
        plan: BTreeMap<i32, Region>,
        plan_extent: (f64, f64),
        viewport_center_y: f64,
        building: &BuildingConfig,
    ) -> Result<Self, CoreError> {
        let config = Self {
            facade,
            plan,
            plan_extent,
            viewport_center_y,
        };
        config.validate_facade(building)?;
        config.validate_plan(building)?;
        Ok(config)
    }

    /// The shipped calibration for the given building profile.
    pub fn standard(building: &BuildingConfig) -> Result<Self, CoreError> {
        let facade: BTreeMap<i32, Region> = FACADE_BAND_TOPS
            .iter()
            .filter(|(floor, _)| building.contains_floor(*floor))
            .map(|&(floor, top)| {
                (
                    floor,
                    Region::Rect {
                        top,
                        left: FACADE_BAND_LEFT,
                        width: FACADE_BAND_WIDTH,
                        height: FACADE_BAND_HEIGHT,
                    },
                )
            })
            .collect();

        Self::new(
            facade,
            plan_outlines(),
            PLAN_EXTENT,
            VIEWPORT_CENTER_Y,
            building,
        )
    }

    fn validate_facade(&self, building: &BuildingConfig) -> Result<(), CoreError> {
        for floor in building.floors() {
            let region = self.facade.get(&floor).ok_or_else(|| {
                CoreError::Configuration(format!("Floor {floor} has no facade band"))
            })?;
            let Region::Rect {
                top,
                left,
                width,
                height,
            } = region
            else {
                return Err(CoreError::Configuration(format!(
                    "Facade band for floor {floor} must be a rectangle"
                )));
            };
            if *top < 0.0 || *left < 0.0 || top + height > 100.0 || left + width > 100.0 {
                return Err(CoreError::Configuration(format!(
                    "Facade band for floor {floor} lies outside the image"
                )));
            }
        }

        // Bands must stack: a higher floor sits strictly above its
        // neighbour, and the bottom of each band meets the top of the
        // band below it.
        for floor in building.floors().skip(1) {
            let below = &self.facade[&(floor - 1)];
            let above = &self.facade[&floor];
            let (Region::Rect { top: top_below, .. }, Region::Rect { top, height, .. }) =
                (below, above)
            else {
                unreachable!("facade bands validated as rectangles above");
            };
            if top >= top_below {
                return Err(CoreError::Configuration(format!(
                    "Facade bands out of order: floor {floor} does not sit \
                     above floor {}",
                    floor - 1
                )));
            }
            if (top + height - top_below).abs() > BAND_EPSILON {
                return Err(CoreError::Configuration(format!(
                    "Facade bands for floors {} and {floor} are not contiguous",
                    floor - 1
                )));
            }
        }
        Ok(())
    }

    fn validate_plan(&self, building: &BuildingConfig) -> Result<(), CoreError> {
        let (max_x, max_y) = self.plan_extent;
        for unit in 1..=building.units_per_floor {
            let region = self.plan.get(&unit).ok_or_else(|| {
                CoreError::Configuration(format!("Unit {unit} has no floor-plan outline"))
            })?;
            let Region::Polygon { points } = region else {
                return Err(CoreError::Configuration(format!(
                    "Floor-plan outline for unit {unit} must be a polygon"
                )));
            };
            if points.len() < 3 {
                return Err(CoreError::Configuration(format!(
                    "Floor-plan outline for unit {unit} has fewer than 3 vertices"
                )));
            }
            for p in points {
                if p.x < 0.0 || p.y < 0.0 || p.x > max_x || p.y > max_y {
                    return Err(CoreError::Configuration(format!(
                        "Floor-plan outline for unit {unit} leaves the image bounds"
                    )));
                }
            }
        }

        // No outline may claim the heart of another unit.
        for (&a, region_a) in &self.plan {
            let centroid = region_centroid(region_a);
            for (&b, region_b) in &self.plan {
                if a != b && point_in_region(region_b, centroid) {
                    return Err(CoreError::Configuration(format!(
                        "Floor-plan outlines for units {a} and {b} overlap"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Facade band for one floor. `None` for floors without a band.
    pub fn facade_region(&self, floor: i32) -> Option<&Region> {
        self.facade.get(&floor)
    }

    /// All facade bands, ascending by floor.
    pub fn facade_regions(&self) -> impl Iterator<Item = (i32, &Region)> {
        self.facade.iter().map(|(&floor, region)| (floor, region))
    }

    /// Floor-plan outline for one unit number (shared across floors).
    pub fn plan_region(&self, unit_number: i32) -> Option<&Region> {
        self.plan.get(&unit_number)
    }

    /// Pixel dimensions of the floor-plan image.
    pub fn plan_extent(&self) -> (f64, f64) {
        self.plan_extent
    }

    /// Pan offset that brings a floor's band to the vertical center of
    /// the viewport at the given zoom multiplier.
    ///
    /// Unknown floors return `{0, 0}` -- the facade viewer degrades to an
    /// unpanned view rather than failing.
    pub fn focus_point_for_floor(&self, floor: i32, zoom: f64) -> Point {
        match self.facade.get(&floor) {
            Some(region) => Point {
                x: 0.0,
                y: (self.viewport_center_y - region_center_y(region)) * (zoom - 1.0),
            },
            None => Point { x: 0.0, y: 0.0 },
        }
    }
}
