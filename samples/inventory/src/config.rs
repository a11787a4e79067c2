//! Application configuration management.
//!
//! Configuration is read once at startup from environment variables (and
//! from a `.env` file when one is present). Every setting has a default, so
//! only malformed values are errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use inventory::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("Warehouse data: {}", config.warehouse_path.display());
//! ```

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Environment variable naming the warehouse stock file.
pub const WAREHOUSE_PATH_KEY: &str = "INVENTORY_WAREHOUSE_PATH";
/// Environment variable naming the storefront listings file.
pub const STOREFRONT_PATH_KEY: &str = "INVENTORY_STOREFRONT_PATH";
/// Environment variable naming the catalogue file.
pub const CATALOGUE_PATH_KEY: &str = "INVENTORY_CATALOGUE_PATH";
/// Environment variable holding the oversell tolerance.
pub const TOLERANCE_KEY: &str = "INVENTORY_TOLERANCE";

const DEFAULT_TOLERANCE: u32 = 2;

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has a value that cannot be used.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// Settings for one reconciliation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON file with warehouse stock records.
    pub warehouse_path: PathBuf,
    /// JSON file with storefront listings.
    pub storefront_path: PathBuf,
    /// JSON file with the SKUs of the catalogue.
    pub catalogue_path: PathBuf,
    /// How many units a listing may advertise beyond the stock on hand.
    pub tolerance: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            warehouse_path: PathBuf::from("data/warehouse.json"),
            storefront_path: PathBuf::from("data/storefront.json"),
            catalogue_path: PathBuf::from("data/catalogue.json"),
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `INVENTORY_WAREHOUSE_PATH` (default: `data/warehouse.json`)
    /// - `INVENTORY_STOREFRONT_PATH` (default: `data/storefront.json`)
    /// - `INVENTORY_CATALOGUE_PATH` (default: `data/catalogue.json`)
    /// - `INVENTORY_TOLERANCE` (default: 2)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set to a value
    /// that cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the tolerance is not a
    /// non-negative integer.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let path_or = |key: &str, default: PathBuf| lookup(key).map_or(default, PathBuf::from);

        let tolerance = lookup(TOLERANCE_KEY).map_or(Ok(defaults.tolerance), |value| {
            value.trim().parse().map_err(|error: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    key: TOLERANCE_KEY.to_string(),
                    message: error.to_string(),
                }
            })
        })?;

        Ok(Self {
            warehouse_path: path_or(WAREHOUSE_PATH_KEY, defaults.warehouse_path),
            storefront_path: path_or(STOREFRONT_PATH_KEY, defaults.storefront_path),
            catalogue_path: path_or(CATALOGUE_PATH_KEY, defaults.catalogue_path),
            tolerance,
        })
    }
}
