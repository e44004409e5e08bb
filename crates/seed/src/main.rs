//! `vistamar-seed` -- administrative seeding tool.
//!
//! Materializes the architectural schedule into the `suites` table:
//! every residential floor crossed with every catalogue unit, priced at
//! launch rates. Idempotent -- re-running refreshes architectural facts
//! via the `(floor, unit_number)` upsert but never overwrites a price
//! or status an administrator has since changed.
//!
//! # Environment variables
//!
//! | Variable           | Required | Default    | Description                          |
//! |--------------------|----------|------------|--------------------------------------|
//! | `DATABASE_URL`     | yes      | --         | Postgres connection string           |
//! | `BUILDING_PROFILE` | no       | `standard` | `standard` (126) or `compact` (98)   |

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vistamar_core::building::BuildingConfig;
use vistamar_core::catalogue::UnitCatalogue;
use vistamar_core::classify::{format_price_usd, suite_tier};
use vistamar_db::models::suite::CreateSuite;
use vistamar_db::repositories::SuiteRepo;

/// Launch rate for the lowest residential floor, USD per sqm.
const BASE_RATE_PER_SQM: f64 = 5_200.0;

/// Rate increase per floor of elevation, USD per sqm.
const RATE_STEP_PER_FLOOR: f64 = 150.0;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vistamar_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let profile = std::env::var("BUILDING_PROFILE").unwrap_or_else(|_| "standard".into());

    let building = BuildingConfig::from_profile(&profile)?;
    building.validate()?;
    let catalogue = UnitCatalogue::standard()?;

    tracing::info!(
        profile = %profile,
        floors = building.residential_floors().count(),
        units_per_floor = catalogue.len(),
        "Seeding suite schedule"
    );

    let pool = vistamar_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    vistamar_db::health_check(&pool)
        .await
        .context("Database health check failed")?;
    vistamar_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let first_residential = building
        .residential_floors()
        .next()
        .expect("validated building has residential floors");

    let mut seeded = 0usize;
    for floor in building.residential_floors() {
        for unit in catalogue.list() {
            let price = launch_price(floor, first_residential, unit.size_sqm);
            let input = CreateSuite {
                floor,
                unit_number: unit.unit_number,
                size_sqm: unit.size_sqm,
                suite_type: suite_tier(unit.size_sqm).as_str().to_string(),
                status: None,
                price_usd: Some(price),
                price_display: Some(format_price_usd(Some(price))),
            };
            SuiteRepo::upsert(&pool, &input)
                .await
                .with_context(|| format!("Failed to seed suite {floor}/{}", unit.unit_number))?;
            seeded += 1;
        }
    }

    let total = SuiteRepo::count(&pool).await?;
    tracing::info!(seeded, total, "Seed complete");
    Ok(())
}

/// Launch price: per-sqm rate grows with elevation, rounded to the
/// nearest $1,000.
fn launch_price(floor: i32, first_residential: i32, size_sqm: f64) -> f64 {
    let rate = BASE_RATE_PER_SQM + RATE_STEP_PER_FLOOR * f64::from(floor - first_residential);
    (size_sqm * rate / 1_000.0).round() * 1_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_price_rounds_to_thousands() {
        let price = launch_price(17, 17, 52.4);
        // 52.4 * 5200 = 272,480 -> 272,000.
        assert_eq!(price, 272_000.0);
        assert_eq!(price % 1_000.0, 0.0);
    }

    #[test]
    fn launch_price_grows_with_elevation() {
        let low = launch_price(17, 17, 85.15);
        let high = launch_price(25, 17, 85.15);
        assert!(high > low);
        // Eight floors of elevation at 150 USD/sqm.
        assert!((high - low - (85.15 * 150.0 * 8.0)).abs() <= 1_000.0);
    }
}
