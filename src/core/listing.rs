//! Public listing of approved cars.
//!
//! The listing is paginated and only ever contains `Approved` cars; its filter
//! dropdowns are built from approved cars as well.

use crate::{
    core::{
        options::distinct_values,
        pagination::{Page, fetch_page},
    },
    entities::{Car, CarStatus, car},
    errors::Result,
};
use sea_orm::{QueryOrder, prelude::*};
use tracing::{debug, instrument};

/// Number of cars on one listing page.
pub const CARS_PER_PAGE: u64 = 4;

/// Everything the listing page shows.
#[derive(Clone, Debug)]
pub struct CarListing {
    /// The requested page of approved cars, newest first
    pub cars: Page<car::Model>,
    /// Distinct models among approved cars
    pub model_search: Vec<String>,
    /// Distinct cities among approved cars
    pub city_search: Vec<String>,
    /// Distinct years among approved cars
    pub year_search: Vec<i32>,
    /// Distinct body styles among approved cars
    pub body_style_search: Vec<String>,
}

/// Builds one page of the public listing.
///
/// `raw_page` is the `page` query value as received. It is never rejected; see
/// [`crate::core::pagination::resolve_page_number`] for how it is interpreted.
#[instrument(skip(db))]
pub async fn list_approved_cars<C>(db: &C, raw_page: Option<&str>) -> Result<CarListing>
where
    C: ConnectionTrait,
{
    let approved = Car::find()
        .filter(car::Column::Status.eq(CarStatus::Approved))
        .order_by_desc(car::Column::CreatedDate)
        .order_by_desc(car::Column::Id);
    let cars = fetch_page(db, approved, CARS_PER_PAGE, raw_page).await?;
    debug!(
        "Listing page {}/{} with {} cars",
        cars.number,
        cars.num_pages,
        cars.items.len()
    );

    let scope = Some(CarStatus::Approved);
    Ok(CarListing {
        cars,
        model_search: distinct_values(db, car::Column::Model, scope).await?,
        city_search: distinct_values(db, car::Column::City, scope).await?,
        year_search: distinct_values(db, car::Column::Year, scope).await?,
        body_style_search: distinct_values(db, car::Column::BodyStyle, scope).await?,
    })
}
