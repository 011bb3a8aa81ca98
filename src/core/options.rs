//! Distinct-value lists used to populate the filter dropdowns.

use crate::{
    entities::{Car, CarStatus, car},
    errors::Result,
};
use sea_orm::{QueryOrder, QuerySelect, TryGetableMany, prelude::*};

/// Returns the distinct values of `column`, sorted ascending.
///
/// With `scope` set, only cars in that status contribute values.
pub async fn distinct_values<C, T>(
    db: &C,
    column: car::Column,
    scope: Option<CarStatus>,
) -> Result<Vec<T>>
where
    C: ConnectionTrait,
    T: TryGetableMany,
{
    let mut query = Car::find()
        .select_only()
        .column(column)
        .distinct()
        .order_by_asc(column);
    if let Some(status) = scope {
        query = query.filter(car::Column::Status.eq(status));
    }
    query.into_tuple::<T>().all(db).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_distinct_values_sorted_and_deduplicated() -> Result<()> {
        let db = setup_test_db().await?;
        create_custom_car(&db, "Golf", CarStatus::Approved, 1).await?;
        create_custom_car(&db, "Civic", CarStatus::Approved, 2).await?;
        create_custom_car(&db, "Golf", CarStatus::Pending, 3).await?;
        create_custom_car(&db, "Accord", CarStatus::Rejected, 4).await?;

        let all: Vec<String> = distinct_values(&db, car::Column::Model, None).await?;
        assert_eq!(all, vec!["Accord", "Civic", "Golf"]);

        let approved: Vec<String> =
            distinct_values(&db, car::Column::Model, Some(CarStatus::Approved)).await?;
        assert_eq!(approved, vec!["Civic", "Golf"]);

        let years: Vec<i32> = distinct_values(&db, car::Column::Year, None).await?;
        assert_eq!(years, vec![2018]);
        Ok(())
    }
}
