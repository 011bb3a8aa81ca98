//! Car business logic - Creating listings and looking them up by identifier.
//!
//! Listings always enter the system as `Pending`; only the moderation module
//! changes their status afterwards.

use crate::{
    config::settings::CarConfig,
    entities::{Car, CarStatus, car},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{Set, prelude::*};
use serde::Deserialize;
use tracing::{debug, info, instrument};

/// Attributes supplied by whoever submits a listing.
///
/// Identifier, status and creation date are assigned by the store.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NewCar {
    /// Model name
    pub model: String,
    /// City where the car is offered
    pub city: String,
    /// Model year
    pub year: i32,
    /// Body style
    pub body_style: String,
    /// Transmission type
    pub transmission: String,
    /// Asking price
    pub price: f64,
    /// Free-text description
    #[serde(default)]
    pub description: String,
}

fn validate(new_car: &NewCar) -> Result<()> {
    if new_car.model.trim().is_empty() {
        return Err(Error::Validation {
            message: "Car model cannot be empty".to_string(),
        });
    }
    if !new_car.price.is_finite() || new_car.price < 0.0 {
        return Err(Error::Validation {
            message: format!("Invalid price: {}", new_car.price),
        });
    }
    Ok(())
}

/// Submits a new listing. The car starts out `Pending` with `created_date` set to now.
///
/// Text fields are trimmed before they are stored.
///
/// # Errors
/// Returns `Error::Validation` if the model is blank or the price is negative or
/// not finite, and `Error::Database` if the insert fails.
#[instrument(skip(db))]
pub async fn create_car<C>(db: &C, new_car: NewCar) -> Result<car::Model>
where
    C: ConnectionTrait,
{
    validate(&new_car)?;
    let created = insert_car(db, new_car, CarStatus::Pending, Utc::now()).await?;
    info!("Created pending car listing {} ({})", created.id, created.model);
    Ok(created)
}

/// Inserts a listing with an explicit status and creation date.
///
/// Used by seeding, which may load already-moderated listings, and by tests that
/// need control over ordering.
pub(crate) async fn insert_car<C>(
    db: &C,
    new_car: NewCar,
    status: CarStatus,
    created_date: DateTimeUtc,
) -> Result<car::Model>
where
    C: ConnectionTrait,
{
    let car = car::ActiveModel {
        model: Set(new_car.model.trim().to_string()),
        city: Set(new_car.city.trim().to_string()),
        year: Set(new_car.year),
        body_style: Set(new_car.body_style.trim().to_string()),
        transmission: Set(new_car.transmission.trim().to_string()),
        price: Set(new_car.price),
        description: Set(new_car.description.trim().to_string()),
        status: Set(status),
        created_date: Set(created_date),
        ..Default::default()
    };
    car.insert(db).await.map_err(Into::into)
}

/// Finds a listing by its identifier, regardless of status.
pub async fn get_car_by_id<C>(db: &C, car_id: i64) -> Result<Option<car::Model>>
where
    C: ConnectionTrait,
{
    Car::find_by_id(car_id).one(db).await.map_err(Into::into)
}

/// Loads the listing shown on a detail page.
///
/// `raw_id` is the path segment as received; anything that is not the identifier
/// of an existing car is reported as not found.
///
/// # Errors
/// Returns `Error::CarNotFound` for a non-numeric or unknown identifier.
#[instrument(skip(db))]
pub async fn get_car<C>(db: &C, raw_id: &str) -> Result<car::Model>
where
    C: ConnectionTrait,
{
    let not_found = || Error::CarNotFound {
        id: raw_id.to_string(),
    };
    let car_id: i64 = raw_id.trim().parse().map_err(|_| not_found())?;
    get_car_by_id(db, car_id).await?.ok_or_else(not_found)
}

/// Seeds listings from configuration when the `cars` table is empty.
///
/// Returns the number of listings inserted (zero when the table already had rows).
///
/// # Errors
/// Returns `Error::Validation` if a configured listing is invalid; nothing after
/// the invalid entry is inserted.
#[instrument(skip_all, fields(configured = seeds.len()))]
pub async fn seed_cars<C>(db: &C, seeds: &[CarConfig]) -> Result<u64>
where
    C: ConnectionTrait,
{
    let existing = Car::find().count(db).await?;
    if existing > 0 {
        debug!("Skipping seed: {} listings already stored", existing);
        return Ok(0);
    }

    let mut inserted = 0;
    for seed in seeds {
        validate(&seed.car)?;
        insert_car(db, seed.car.clone(), seed.status, Utc::now()).await?;
        inserted += 1;
    }
    info!("Seeded {} car listings from configuration", inserted);
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_car_validation() -> Result<()> {
        let db = setup_test_db().await?;

        let mut blank_model = sample_car("Civic");
        blank_model.model = "   ".to_string();
        let result = create_car(&db, blank_model).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { message: _ }));

        let mut negative = sample_car("Civic");
        negative.price = -1.0;
        let result = create_car(&db, negative).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { message: _ }));

        let mut not_finite = sample_car("Civic");
        not_finite.price = f64::NAN;
        let result = create_car(&db, not_finite).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { message: _ }));

        assert_eq!(Car::find().count(&db).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_car_starts_pending() -> Result<()> {
        let db = setup_test_db().await?;

        let mut submitted = sample_car("  Civic ");
        submitted.description = " Leather seats ".to_string();
        let car = create_car(&db, submitted).await?;

        assert_eq!(car.model, "Civic");
        assert_eq!(car.description, "Leather seats");
        assert_eq!(car.status, CarStatus::Pending);
        assert_eq!(car.price, 12_000.0);

        let stored = Car::find_by_id(car.id).one(&db).await?.unwrap();
        assert_eq!(stored, car);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_car_returns_full_attributes() -> Result<()> {
        let db = setup_test_db().await?;
        let car = create_custom_car(&db, "Corolla", CarStatus::Rejected, 3).await?;

        let found = get_car(&db, &car.id.to_string()).await?;
        assert_eq!(found, car);
        assert_eq!(found.status, CarStatus::Rejected);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_car_not_found() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_car(&db, "Civic").await?;

        let missing = get_car(&db, "999").await;
        assert!(matches!(missing.unwrap_err(), Error::CarNotFound { id } if id == "999"));

        let garbage = get_car(&db, "abc").await;
        assert!(matches!(garbage.unwrap_err(), Error::CarNotFound { id: _ }));
        Ok(())
    }

    #[tokio::test]
    async fn test_seed_cars_only_into_empty_table() -> Result<()> {
        let db = setup_test_db().await?;
        let seeds = vec![
            CarConfig {
                car: sample_car("Civic"),
                status: CarStatus::Approved,
            },
            CarConfig {
                car: sample_car("Golf"),
                status: CarStatus::Pending,
            },
        ];

        assert_eq!(seed_cars(&db, &seeds).await?, 2);
        assert_eq!(seed_cars(&db, &seeds).await?, 0);

        let approved = Car::find()
            .filter(car::Column::Status.eq(CarStatus::Approved))
            .all(&db)
            .await?;
        assert_eq!(approved.len(), 1);
        assert_eq!(approved[0].model, "Civic");
        Ok(())
    }
}
