//! Entity module - Contains the SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod car;

pub use car::{CarStatus, Column as CarColumn, Entity as Car, Model as CarModel};
