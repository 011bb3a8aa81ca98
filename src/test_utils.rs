//! Shared test utilities.
//!
//! This module provides helpers for setting up in-memory test databases and for
//! creating listings with sensible defaults.

use crate::{
    core::car::{self, NewCar},
    entities::{self, CarStatus},
    errors::Result,
};
use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output through the test harness.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    init_test_tracing();
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Fixed point in time that test listings are dated from.
#[must_use]
pub fn base_time() -> DateTime<Utc> {
    DateTime::from_timestamp(1_704_067_200, 0).unwrap_or_default()
}

/// Listing attributes with sensible defaults.
///
/// # Defaults
/// * `city`: "Boston"
/// * `year`: 2018
/// * `body_style`: "Sedan"
/// * `transmission`: "Automatic"
/// * `price`: 12000.0
/// * `description`: "Test listing"
#[must_use]
pub fn sample_car(model: &str) -> NewCar {
    NewCar {
        model: model.to_string(),
        city: "Boston".to_string(),
        year: 2018,
        body_style: "Sedan".to_string(),
        transmission: "Automatic".to_string(),
        price: 12_000.0,
        description: "Test listing".to_string(),
    }
}

/// Submits a listing through the regular creation path, so it starts `Pending`.
pub async fn create_test_car(db: &DatabaseConnection, model: &str) -> Result<entities::car::Model> {
    car::create_car(db, sample_car(model)).await
}

/// Inserts a default listing with the given status, created `minutes` after
/// [`base_time`]. Larger `minutes` means newer.
pub async fn create_custom_car(
    db: &DatabaseConnection,
    model: &str,
    status: CarStatus,
    minutes: i64,
) -> Result<entities::car::Model> {
    insert_car_at(db, sample_car(model), status, minutes).await
}

/// Inserts `new_car` with the given status, created `minutes` after [`base_time`].
pub async fn insert_car_at(
    db: &DatabaseConnection,
    new_car: NewCar,
    status: CarStatus,
    minutes: i64,
) -> Result<entities::car::Model> {
    car::insert_car(db, new_car, status, base_time() + Duration::minutes(minutes)).await
}
