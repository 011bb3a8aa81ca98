//! Staff moderation of submitted listings.
//!
//! Pending cars are listed for review and moved to `Approved` or `Rejected`
//! one at a time. Access control happens before any of this runs.

use crate::{
    entities::{Car, CarStatus, car},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::{debug, info, instrument};

/// Decision submitted from the moderation form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModerationAction {
    /// Publish the listing
    Approve,
    /// Turn the listing down
    Reject,
}

impl ModerationAction {
    /// Parses the `action` form token. Unrecognised tokens yield `None`.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "approve" => Some(Self::Approve),
            "reject" => Some(Self::Reject),
            _ => None,
        }
    }

    /// Status the car ends up in
    #[must_use]
    pub const fn target_status(self) -> CarStatus {
        match self {
            Self::Approve => CarStatus::Approved,
            Self::Reject => CarStatus::Rejected,
        }
    }
}

/// Everything the moderation page shows.
#[derive(Clone, Debug)]
pub struct PendingCars {
    /// Cars awaiting a decision, newest first
    pub pending_cars: Vec<car::Model>,
}

/// Lists every car still awaiting a decision.
#[instrument(skip(db))]
pub async fn pending_cars<C>(db: &C) -> Result<PendingCars>
where
    C: ConnectionTrait,
{
    let pending_cars = Car::find()
        .filter(car::Column::Status.eq(CarStatus::Pending))
        .order_by_desc(car::Column::CreatedDate)
        .order_by_desc(car::Column::Id)
        .all(db)
        .await?;
    debug!("{} cars pending moderation", pending_cars.len());
    Ok(PendingCars { pending_cars })
}

/// Applies a moderation decision to one car.
///
/// `car_id` is the raw form value and `action` the raw action token. An
/// unrecognised or missing action leaves the car untouched. The read and the
/// write are separate statements, so concurrent decisions on the same car are
/// last-write-wins.
///
/// # Errors
/// Returns `Error::CarLookup` when `car_id` is missing, not an integer, or names
/// no car, and `Error::Database` if the store fails.
#[instrument(skip(db))]
pub async fn moderate_car<C>(
    db: &C,
    car_id: Option<&str>,
    action: Option<&str>,
) -> Result<car::Model>
where
    C: ConnectionTrait,
{
    let raw_id = car_id.unwrap_or_default();
    let lookup_failed = || Error::CarLookup {
        car_id: raw_id.to_string(),
    };
    let id: i64 = raw_id.trim().parse().map_err(|_| lookup_failed())?;
    let car = Car::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(lookup_failed)?;

    let Some(action) = action.and_then(ModerationAction::parse) else {
        debug!("Unrecognised moderation action {:?} for car {}", action, id);
        return Ok(car);
    };

    let previous = car.status;
    let mut active: car::ActiveModel = car.into();
    active.status = Set(action.target_status());
    let updated = active.update(db).await?;
    info!(
        "Car {} moved from {} to {}",
        updated.id, previous, updated.status
    );
    Ok(updated)
}
