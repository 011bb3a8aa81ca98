//! Unified error type for the car listings service.
//!
//! Every layer returns [`Result`]; the web layer turns an [`Error`] into an HTTP
//! response (see `web::error`).

use thiserror::Error;

/// All failures the service can report.
#[derive(Debug, Error)]
pub enum Error {
    /// Settings file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Any failure reported by the data store
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Listener or file I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rejected input when creating a listing
    #[error("Validation error: {message}")]
    Validation {
        /// Which field was rejected and why
        message: String,
    },

    /// Detail lookup for an identifier that does not exist
    #[error("Car not found: {id}")]
    CarNotFound {
        /// The identifier that was requested
        id: String,
    },

    /// Moderation submitted for a car that could not be loaded
    #[error("Car lookup failed for car_id {car_id:?}")]
    CarLookup {
        /// The raw `car_id` form value
        car_id: String,
    },

    /// No valid credentials on a staff-only request
    #[error("Authentication required")]
    Unauthenticated,

    /// Authenticated caller is not a staff member
    #[error("Access denied: staff membership required")]
    AccessDenied,
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
