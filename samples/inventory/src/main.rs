//! Inventory reconciliation sample application.
//!
//! Reads a catalogue, warehouse stock and storefront listings from JSON
//! files, reconciles them SKU by SKU and prints a summary.
//!
//! # Configuration
//!
//! - `INVENTORY_CATALOGUE_PATH`, `INVENTORY_WAREHOUSE_PATH`,
//!   `INVENTORY_STOREFRONT_PATH`: input files (default `data/*.json`)
//! - `INVENTORY_TOLERANCE`: units a listing may advertise beyond stock
//!   before it is flagged (default 2)
//! - `RUST_LOG`: log filter (default `info,inventory=debug`)

use std::process::ExitCode;

use inventory::config::AppConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,inventory=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => {
            tracing::info!(
                "Configuration loaded: catalogue={}, tolerance={}",
                config.catalogue_path.display(),
                config.tolerance
            );
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load configuration from environment: {e}");
            tracing::info!("Using default configuration");
            AppConfig::default()
        }
    };

    match inventory::run(&config) {
        Ok(summary) => {
            print!("{summary}");
            if summary.blocked.is_empty() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            }
        }
        Err(error) => {
            tracing::error!("Reconciliation failed: {error}");
            ExitCode::FAILURE
        }
    }
}
