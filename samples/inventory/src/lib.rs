//! Inventory reconciliation built on `lambars-can`.
//!
//! A catalogue of SKUs is aligned against warehouse stock and storefront
//! listings. Every SKU ends up in one of four shapes, and [`Can`] carries
//! that shape through reconciliation into the final [`Summary`].
//!
//! [`Can`]: lambars_can::control::Can
//! [`Summary`]: report::Summary

pub mod config;
pub mod reconcile;
pub mod records;
pub mod report;

use config::AppConfig;
use reconcile::{ReconcileError, align, reconcile};
use records::{Listing, StockRecord, load_json};
use report::Summary;

/// Loads the configured files and reconciles every catalogue SKU.
///
/// # Errors
///
/// Returns [`ReconcileError`] if an input file cannot be loaded or holds a
/// duplicate SKU.
pub fn run(config: &AppConfig) -> Result<Summary, ReconcileError> {
    let catalogue: Vec<String> = load_json(&config.catalogue_path)?;
    let stock: Vec<StockRecord> = load_json(&config.warehouse_path)?;
    let listings: Vec<Listing> = load_json(&config.storefront_path)?;
    tracing::info!(
        skus = catalogue.len(),
        stock_records = stock.len(),
        listings = listings.len(),
        "loaded inputs"
    );

    let summary: Summary = align(&catalogue, stock, listings)?
        .into_iter()
        .map(|(sku, alignment)| {
            let outcome = reconcile(alignment, config.tolerance);
            if let Some(findings) = outcome.left_value() {
                tracing::debug!(%sku, findings = findings.len(), "SKU needs attention");
            }
            (sku, outcome)
        })
        .collect();

    tracing::info!(
        clean = summary.clean.len(),
        flagged = summary.flagged.len(),
        blocked = summary.blocked.len(),
        discontinued = summary.discontinued.len(),
        "reconciliation finished"
    );
    Ok(summary)
}
