//! Input records and their loaders.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Stock held by the warehouse for one SKU.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StockRecord {
    pub sku: String,
    pub quantity: u32,
}

/// A storefront listing for one SKU.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Listing {
    pub sku: String,
    pub price_cents: u64,
    pub advertised_quantity: u32,
}

/// Errors raised while loading input files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads a JSON array of records from `path`.
///
/// # Errors
///
/// Returns [`LoadError::Read`] if the file cannot be read and
/// [`LoadError::Parse`] if it is not a JSON array of `T`.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json(path, &text)
}

/// Parses a JSON array of records; `origin` names the source in errors.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] if `text` is not a JSON array of `T`.
pub fn parse_json<T: DeserializeOwned>(origin: &Path, text: &str) -> Result<Vec<T>, LoadError> {
    serde_json::from_str(text).map_err(|source| LoadError::Parse {
        path: origin.to_path_buf(),
        source,
    })
}
