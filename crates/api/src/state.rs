use std::sync::Arc;

use vistamar_core::building::BuildingConfig;
use vistamar_core::catalogue::UnitCatalogue;
use vistamar_core::geometry::GeometryConfig;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// The domain tables are built and validated once at startup and never
/// mutated afterwards, so the whole struct is cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: vistamar_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Tower shape: floor range, amenity levels, units per floor.
    pub building: Arc<BuildingConfig>,
    /// Architectural unit schedule.
    pub catalogue: Arc<UnitCatalogue>,
    /// Validated facade/floor-plan calibration.
    pub geometry: Arc<GeometryConfig>,
}
