//! Aligning catalogue SKUs with warehouse stock and storefront listings.
//!
//! Each SKU is aligned into a `Can<StockRecord, Listing>`:
//!
//! | Alignment | Meaning |
//! |---|---|
//! | `None` | absent everywhere, the SKU is discontinued |
//! | `Left(stock)` | stocked but not listed |
//! | `Right(listing)` | listed but not stocked, so every sale oversells |
//! | `Both(stock, listing)` | ready to reconcile |
//!
//! Reconciling turns the alignment into a `Can<Vec<Finding>, Reconciled>`.
//! Checks on a `Both` alignment are chained with `flat_map`, so findings
//! from every check accumulate next to the reconciled record, while a
//! blocking finding drops the record altogether.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use lambars_can::control::Can;
use lambars_can::typeclass::Semigroup;
use thiserror::Error;

use crate::records::{Listing, LoadError, StockRecord};

/// How one SKU lines up across the two sources.
pub type Alignment = Can<StockRecord, Listing>;

/// The result of reconciling one SKU.
pub type Outcome = Can<Vec<Finding>, Reconciled>;

/// Errors raised by a reconciliation run.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("SKU {sku} appears more than once in the {origin}")]
    DuplicateSku { sku: String, origin: &'static str },
}

/// Something a person should look at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Finding {
    /// Stock exists but nothing lists it.
    Unlisted { sku: String, quantity: u32 },
    /// A listing exists but the warehouse holds nothing.
    NotStocked { sku: String, advertised: u32 },
    /// The listing advertises more than the stock on hand plus tolerance.
    Oversold {
        sku: String,
        advertised: u32,
        on_hand: u32,
    },
    /// The listing has no price and cannot be sold.
    Unpriced { sku: String },
}

impl fmt::Display for Finding {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlisted { sku, quantity } => {
                write!(formatter, "{sku}: {quantity} units in stock but not listed")
            }
            Self::NotStocked { sku, advertised } => {
                write!(formatter, "{sku}: {advertised} units listed but none in stock")
            }
            Self::Oversold {
                sku,
                advertised,
                on_hand,
            } => write!(
                formatter,
                "{sku}: listing advertises {advertised} units, only {on_hand} on hand"
            ),
            Self::Unpriced { sku } => write!(formatter, "{sku}: listing has no price"),
        }
    }
}

/// A SKU that can be sold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reconciled {
    pub sku: String,
    pub sellable: u32,
    pub price_cents: u64,
}

fn index_by_sku<T>(
    records: Vec<T>,
    origin: &'static str,
    sku_of: impl Fn(&T) -> &str,
) -> Result<HashMap<String, T>, ReconcileError> {
    let mut index = HashMap::with_capacity(records.len());
    for record in records {
        match index.entry(sku_of(&record).to_string()) {
            Entry::Occupied(entry) => {
                return Err(ReconcileError::DuplicateSku {
                    sku: entry.key().clone(),
                    origin,
                });
            }
            Entry::Vacant(entry) => {
                entry.insert(record);
            }
        }
    }
    Ok(index)
}

/// Aligns every catalogue SKU with its stock record and listing.
///
/// Records whose SKU is not in the catalogue are ignored.
///
/// # Errors
///
/// Returns [`ReconcileError::DuplicateSku`] if a SKU appears twice in the
/// stock records or twice in the listings.
pub fn align(
    catalogue: &[String],
    stock: Vec<StockRecord>,
    listings: Vec<Listing>,
) -> Result<Vec<(String, Alignment)>, ReconcileError> {
    let mut stock = index_by_sku(stock, "warehouse stock", |record| &record.sku)?;
    let mut listings = index_by_sku(listings, "storefront listings", |listing| &listing.sku)?;

    let aligned = catalogue
        .iter()
        .map(|sku| {
            let alignment = Can::from_options(stock.remove(sku), listings.remove(sku));
            tracing::debug!(%sku, shape = shape_name(&alignment), "aligned SKU");
            (sku.clone(), alignment)
        })
        .collect();

    for sku in stock.keys().chain(listings.keys()) {
        tracing::warn!(%sku, "ignoring SKU missing from the catalogue");
    }

    Ok(aligned)
}

const fn shape_name<A, B>(value: &Can<A, B>) -> &'static str {
    match value {
        Can::None => "none",
        Can::Left(_) => "stock only",
        Can::Right(_) => "listing only",
        Can::Both(_, _) => "both",
    }
}

fn check_quantity(stock: StockRecord, listing: Listing, tolerance: u32) -> Can<Vec<Finding>, (StockRecord, Listing)> {
    if listing.advertised_quantity > stock.quantity.saturating_add(tolerance) {
        let finding = Finding::Oversold {
            sku: stock.sku.clone(),
            advertised: listing.advertised_quantity,
            on_hand: stock.quantity,
        };
        Can::Both(vec![finding], (stock, listing))
    } else {
        Can::Right((stock, listing))
    }
}

fn check_price(stock: StockRecord, listing: Listing) -> Can<Vec<Finding>, (StockRecord, Listing)> {
    if listing.price_cents == 0 {
        Can::Left(vec![Finding::Unpriced { sku: listing.sku }])
    } else {
        Can::Right((stock, listing))
    }
}

/// Reconciles one aligned SKU.
///
/// `None` stays `None`. A one-sided alignment becomes a single finding.
/// A `Both` alignment runs every check; the result is `Right` when nothing
/// was found, `Both` when only warnings were found, and `Left` when a check
/// blocked the sale.
pub fn reconcile(alignment: Alignment, tolerance: u32) -> Outcome {
    alignment.fold(
        || Can::None,
        |stock| {
            Can::Left(vec![Finding::Unlisted {
                sku: stock.sku,
                quantity: stock.quantity,
            }])
        },
        |listing| {
            Can::Left(vec![Finding::NotStocked {
                sku: listing.sku,
                advertised: listing.advertised_quantity,
            }])
        },
        |stock, listing| {
            check_quantity(stock, listing, tolerance)
                .flat_map(Semigroup::combine, |(stock, listing)| check_price(stock, listing))
                .map(|(stock, listing)| Reconciled {
                    sellable: stock.quantity.min(listing.advertised_quantity),
                    price_cents: listing.price_cents,
                    sku: stock.sku,
                })
        },
    )
}
