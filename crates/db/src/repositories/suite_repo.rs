//! Repository for the `suites` table.

use sqlx::PgPool;
use vistamar_core::types::DbId;

use crate::models::suite::{CreateSuite, SuiteRecord};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, floor, unit_number, size_sqm, suite_type, status, \
                       price_usd, price_display, created_at, updated_at";

/// Provides read and administrative write operations for suites.
pub struct SuiteRepo;

impl SuiteRepo {
    /// Insert a new suite, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `available`.
    pub async fn create(pool: &PgPool, input: &CreateSuite) -> Result<SuiteRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO suites (floor, unit_number, size_sqm, suite_type, status, price_usd, price_display)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'available'), $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SuiteRecord>(&query)
            .bind(input.floor)
            .bind(input.unit_number)
            .bind(input.size_sqm)
            .bind(&input.suite_type)
            .bind(&input.status)
            .bind(input.price_usd)
            .bind(&input.price_display)
            .fetch_one(pool)
            .await
    }

    /// Insert or refresh a suite on its `(floor, unit_number)` identity.
    ///
    /// The seed path: architectural facts (size, type) are always
    /// brought up to date, but a price or status an administrator has
    /// since set is preserved -- the incoming values only fill NULLs and
    /// the status is left untouched entirely.
    pub async fn upsert(pool: &PgPool, input: &CreateSuite) -> Result<SuiteRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO suites (floor, unit_number, size_sqm, suite_type, status, price_usd, price_display)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'available'), $6, $7)
             ON CONFLICT ON CONSTRAINT uq_suites_floor_unit DO UPDATE SET
                size_sqm = EXCLUDED.size_sqm,
                suite_type = EXCLUDED.suite_type,
                price_usd = COALESCE(suites.price_usd, EXCLUDED.price_usd),
                price_display = COALESCE(suites.price_display, EXCLUDED.price_display),
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SuiteRecord>(&query)
            .bind(input.floor)
            .bind(input.unit_number)
            .bind(input.size_sqm)
            .bind(&input.suite_type)
            .bind(&input.status)
            .bind(input.price_usd)
            .bind(&input.price_display)
            .fetch_one(pool)
            .await
    }

    /// Find a suite by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SuiteRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM suites WHERE id = $1");
        sqlx::query_as::<_, SuiteRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a suite by its domain identity.
    pub async fn find_by_floor_unit(
        pool: &PgPool,
        floor: i32,
        unit_number: i32,
    ) -> Result<Option<SuiteRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM suites WHERE floor = $1 AND unit_number = $2");
        sqlx::query_as::<_, SuiteRecord>(&query)
            .bind(floor)
            .bind(unit_number)
            .fetch_optional(pool)
            .await
    }

    /// List all suites in (floor, unit_number) order.
    pub async fn list(pool: &PgPool) -> Result<Vec<SuiteRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM suites ORDER BY floor, unit_number");
        sqlx::query_as::<_, SuiteRecord>(&query).fetch_all(pool).await
    }

    /// List the suites on one floor, ascending by unit number.
    pub async fn list_by_floor(
        pool: &PgPool,
        floor: i32,
    ) -> Result<Vec<SuiteRecord>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM suites WHERE floor = $1 ORDER BY unit_number");
        sqlx::query_as::<_, SuiteRecord>(&query)
            .bind(floor)
            .fetch_all(pool)
            .await
    }

    /// Set the sales status of one suite.
    ///
    /// Returns `None` if the suite does not exist. The status string is
    /// validated by the caller and by the table's CHECK constraint.
    pub async fn update_status(
        pool: &PgPool,
        floor: i32,
        unit_number: i32,
        status: &str,
    ) -> Result<Option<SuiteRecord>, sqlx::Error> {
        let query = format!(
            "UPDATE suites SET status = $3, updated_at = NOW()
             WHERE floor = $1 AND unit_number = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SuiteRecord>(&query)
            .bind(floor)
            .bind(unit_number)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Set (or clear) the price of one suite. `price_display` is kept in
    /// step for external readers of the table.
    pub async fn update_price(
        pool: &PgPool,
        floor: i32,
        unit_number: i32,
        price_usd: Option<f64>,
        price_display: Option<&str>,
    ) -> Result<Option<SuiteRecord>, sqlx::Error> {
        let query = format!(
            "UPDATE suites SET price_usd = $3, price_display = $4, updated_at = NOW()
             WHERE floor = $1 AND unit_number = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SuiteRecord>(&query)
            .bind(floor)
            .bind(unit_number)
            .bind(price_usd)
            .bind(price_display)
            .fetch_optional(pool)
            .await
    }

    /// Total number of suite rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM suites")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
