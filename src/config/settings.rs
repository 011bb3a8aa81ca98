//! Application settings loaded from config.toml.
//!
//! The file is optional: when it does not exist every section takes its default.
//! A file that exists but cannot be parsed is a configuration error.

use crate::{
    config::users::UserConfig,
    core::car::NewCar,
    entities::CarStatus,
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Used when `CONFIG_PATH` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Used when `[server] bind` is not set.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8000";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Users who may sign requests with a bearer token
    #[serde(default)]
    pub users: Vec<UserConfig>,
    /// Listings inserted into an empty database at startup
    #[serde(default)]
    pub cars: Vec<CarConfig>,
}

/// HTTP server settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// A seed listing
#[derive(Debug, Clone, Deserialize)]
pub struct CarConfig {
    /// Listing attributes
    #[serde(flatten)]
    pub car: NewCar,
    /// Initial status, `Pending` unless given
    #[serde(default)]
    pub status: CarStatus,
}

/// Loads configuration from a TOML file.
///
/// # Errors
/// Returns `Error::Config` if the file exists but cannot be read, the TOML
/// syntax is invalid, or required fields are missing.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    if !path.exists() {
        info!("No configuration file at {:?}, using defaults", path);
        return Ok(Config::default());
    }
    debug!("Loading configuration from {:?}", path);

    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path:?}: {e}"),
    })?;
    parse_config(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config file {path:?}: {e}"),
    })
}

fn parse_config(contents: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

/// Loads configuration from `CONFIG_PATH`, or ./config.toml when unset.
pub fn load_default_config() -> Result<Config> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_config(path)
}
