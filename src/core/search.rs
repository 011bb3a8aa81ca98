//! Car search across every listing, whatever its status.
//!
//! Each filter is applied only when its parameter is present and non-empty; all
//! applied filters must match. Malformed numbers switch their filter off instead
//! of failing the search.

use crate::{
    core::options::distinct_values,
    entities::{Car, car},
    errors::Result,
};
use sea_orm::{
    QueryOrder,
    prelude::*,
    sea_query::{Alias, Expr, Func, SimpleExpr},
};
use serde::Deserialize;
use tracing::{debug, instrument};

/// Optional search parameters, exactly as received in the query string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SearchFilters {
    /// Case-insensitive substring of the description
    pub keyword: Option<String>,
    /// Case-insensitive exact model
    pub model: Option<String>,
    /// Case-insensitive exact city
    pub city: Option<String>,
    /// Exact model year
    pub year: Option<String>,
    /// Case-insensitive exact body style
    pub body_style: Option<String>,
    /// Lower price bound, only honoured together with `max_price`
    pub min_price: Option<String>,
    /// Upper price bound; its presence switches the price range on
    pub max_price: Option<String>,
}

fn provided(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

fn parse_price(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|p| p.is_finite())
}

impl SearchFilters {
    /// Inclusive `(min, max)` price bounds, if the range is active.
    ///
    /// The range is driven by `max_price` alone: a lone `min_price` is ignored.
    #[must_use]
    pub fn price_range(&self) -> Option<(Option<f64>, f64)> {
        let max = parse_price(provided(self.max_price.as_ref())?)?;
        let min = provided(self.min_price.as_ref()).and_then(parse_price);
        Some((min, max))
    }

    /// Requested model year, if present and an integer.
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        provided(self.year.as_ref()).and_then(|y| y.trim().parse().ok())
    }

    fn apply(&self, mut query: Select<Car>) -> Select<Car> {
        if let Some(keyword) = provided(self.keyword.as_ref()) {
            query = query.filter(icontains(car::Column::Description, keyword));
        }
        if let Some(model) = provided(self.model.as_ref()) {
            query = query.filter(iexact(car::Column::Model, model));
        }
        if let Some(city) = provided(self.city.as_ref()) {
            query = query.filter(iexact(car::Column::City, city));
        }
        if let Some(year) = self.year() {
            query = query.filter(car::Column::Year.eq(year));
        }
        if let Some(body_style) = provided(self.body_style.as_ref()) {
            query = query.filter(iexact(car::Column::BodyStyle, body_style));
        }
        if let Some((min, max)) = self.price_range() {
            if let Some(min) = min {
                query = query.filter(car::Column::Price.gte(min));
            }
            query = query.filter(car::Column::Price.lte(max));
        }
        query
    }
}

/// SQL `lower()`. The column and the user's value are both folded by the
/// database, so a value identical to the stored text always matches. SQLite
/// folds ASCII letters only.
fn lower<T: Into<SimpleExpr>>(expr: T) -> SimpleExpr {
    Func::lower(expr).into()
}

fn lower_column(column: car::Column) -> SimpleExpr {
    lower(Expr::col((Car, column)))
}

fn iexact(column: car::Column, value: &str) -> SimpleExpr {
    lower_column(column).eq(lower(Expr::val(value)))
}

/// `instr(lower(column), lower(value)) > 0`; the value is matched literally, so
/// `%` and `_` need no escaping.
fn icontains(column: car::Column, value: &str) -> SimpleExpr {
    Expr::expr(
        Func::cust(Alias::new("instr"))
            .arg(lower_column(column))
            .arg(lower(Expr::val(value))),
    )
    .gt(0)
}

/// Everything the search page shows.
#[derive(Clone, Debug)]
pub struct SearchResults {
    /// Matching cars of any status, newest first
    pub cars: Vec<car::Model>,
    /// Distinct models across all cars
    pub model_search: Vec<String>,
    /// Distinct cities across all cars
    pub city_search: Vec<String>,
    /// Distinct years across all cars
    pub year_search: Vec<i32>,
    /// Distinct body styles across all cars
    pub body_style_search: Vec<String>,
    /// Distinct transmissions across all cars
    pub transmission_search: Vec<String>,
}

/// Runs a search over all listings.
///
/// Filter dropdowns are computed over every car, not only approved ones.
#[instrument(skip(db))]
pub async fn search_cars<C>(db: &C, filters: &SearchFilters) -> Result<SearchResults>
where
    C: ConnectionTrait,
{
    let query = Car::find()
        .order_by_desc(car::Column::CreatedDate)
        .order_by_desc(car::Column::Id);
    let cars = filters.apply(query).all(db).await?;
    debug!("Search matched {} cars", cars.len());

    Ok(SearchResults {
        cars,
        model_search: distinct_values(db, car::Column::Model, None).await?,
        city_search: distinct_values(db, car::Column::City, None).await?,
        year_search: distinct_values(db, car::Column::Year, None).await?,
        body_style_search: distinct_values(db, car::Column::BodyStyle, None).await?,
        transmission_search: distinct_values(db, car::Column::Transmission, None).await?,
    })
}
