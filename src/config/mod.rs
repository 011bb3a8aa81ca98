/// Database connection and table creation
pub mod database;

/// Environment and `tracing` setup for the binary
pub mod logging;

/// Settings loaded from config.toml
pub mod settings;

/// Users allowed to authenticate, and which of them are staff
pub mod users;
