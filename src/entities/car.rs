//! Car entity - Represents a single car listing submitted for sale.
//!
//! A listing is created as `Pending` and becomes visible on the public listing
//! page only after a staff member marks it `Approved`. Rejected listings are kept
//! but never shown outside search results.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Moderation state of a listing, stored as its variant name.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum CarStatus {
    /// Awaiting a staff decision
    #[default]
    #[sea_orm(string_value = "Pending")]
    Pending,
    /// Visible on the public listing
    #[sea_orm(string_value = "Approved")]
    Approved,
    /// Turned down by staff
    #[sea_orm(string_value = "Rejected")]
    Rejected,
}

impl CarStatus {
    /// Stored and displayed name of the status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for CarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Car database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cars")]
pub struct Model {
    /// Unique identifier for the listing
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Model name (e.g., "Civic", "Corolla")
    pub model: String,
    /// City where the car is offered
    pub city: String,
    /// Model year
    pub year: i32,
    /// Body style (e.g., "Sedan", "SUV")
    pub body_style: String,
    /// Transmission type (e.g., "Automatic", "Manual")
    pub transmission: String,
    /// Asking price
    pub price: f64,
    /// Free-text description, searched by keyword
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Moderation state
    pub status: CarStatus,
    /// When the listing was submitted; never changes afterwards
    pub created_date: DateTimeUtc,
}

/// `Car` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
