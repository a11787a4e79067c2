//! End-to-end reconciliation over the bundled data files.

use std::path::PathBuf;

use inventory::config::AppConfig;
use inventory::reconcile::{Finding, ReconcileError, reconcile};
use inventory::records::{Listing, StockRecord};
use inventory::run;
use lambars_can::control::Can;
use proptest::prelude::*;
use rstest::rstest;

fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

fn bundled_config(tolerance: u32) -> AppConfig {
    AppConfig {
        warehouse_path: data_file("warehouse.json"),
        storefront_path: data_file("storefront.json"),
        catalogue_path: data_file("catalogue.json"),
        tolerance,
    }
}

#[rstest]
fn bundled_data_covers_every_shape() {
    let summary = run(&bundled_config(2)).unwrap();

    assert_eq!(summary.discontinued, vec!["SKU-005".to_string()]);
    assert_eq!(
        summary.clean.iter().map(|r| r.sku.as_str()).collect::<Vec<_>>(),
        vec!["SKU-001"]
    );
    assert_eq!(summary.flagged.len(), 1);
    assert_eq!(summary.flagged[0].0.sku, "SKU-002");
    assert_eq!(summary.flagged[0].0.sellable, 3);

    let blocked: Vec<&str> = summary.blocked.iter().map(|(sku, _)| sku.as_str()).collect();
    assert_eq!(blocked, vec!["SKU-003", "SKU-004", "SKU-006"]);
    assert_eq!(
        summary.blocked[2].1,
        vec![Finding::Unpriced {
            sku: "SKU-006".to_string()
        }]
    );
    assert_eq!(summary.sellable_units(), 43);
}

#[rstest]
fn generous_tolerance_clears_the_oversold_warning() {
    let summary = run(&bundled_config(10)).unwrap();
    assert!(summary.flagged.is_empty());
    assert_eq!(summary.clean.len(), 2);
}

#[rstest]
fn missing_input_file_is_reported() {
    let mut config = bundled_config(2);
    config.warehouse_path = data_file("does-not-exist.json");
    let error = run(&config).unwrap_err();
    assert!(matches!(error, ReconcileError::Load(_)));
    assert!(error.to_string().contains("does-not-exist.json"));
}

proptest! {
    #[test]
    fn a_reconciled_sku_never_sells_more_than_is_on_hand(
        quantity in 0_u32..1_000,
        advertised in 0_u32..1_000,
        price in 1_u64..10_000,
        tolerance in 0_u32..10,
    ) {
        let alignment = Can::Both(
            StockRecord { sku: "P".to_string(), quantity },
            Listing { sku: "P".to_string(), price_cents: price, advertised_quantity: advertised },
        );
        let outcome = reconcile(alignment, tolerance);

        prop_assert!(!outcome.is_left());
        if let Some(reconciled) = outcome.right_value() {
            prop_assert!(reconciled.sellable <= quantity);
        }
        prop_assert_eq!(outcome.is_both(), advertised > quantity + tolerance);
    }
}
