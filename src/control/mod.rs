//! Sum types for modeling optional, disjoint and combined values.
//!
//! This module provides the data types of the library:
//!
//! - [`Can`]: nothing, a left value, a right value, or both
//! - [`Ior`]: a left value, a right value, or both (never empty)
//! - [`Either`]: exactly one of a left or a right value
//! - [`Validated`]: a valid value or an invalid payload
//! - [`Eval`]: a memoised lazy value, used by right folds
//!
//! All of them are immutable: every operation consumes or borrows a value
//! and returns a new one.
//!
//! # Examples
//!
//! ## Aligning two optional values
//!
//! ```rust
//! use lambars_can::control::Can;
//!
//! assert_eq!(Can::from_options(Some(1), Some("a")), Can::Both(1, "a"));
//! assert_eq!(Can::from_options(None::<i32>, Some("a")), Can::Right("a"));
//! assert_eq!(Can::<i32, &str>::from_options(None, None), Can::None);
//! ```
//!
//! ## Accumulating left values while binding
//!
//! ```rust
//! use lambars_can::control::Can;
//!
//! let warnings: Can<Vec<&str>, i32> = Can::Both(vec!["rounded"], 41);
//! let result = warnings.flat_map(
//!     |mut first, second| { first.extend(second); first },
//!     |value| Can::Both(vec!["clamped"], value + 1),
//! );
//! assert_eq!(result, Can::Both(vec!["rounded", "clamped"], 42));
//! ```
//!
//! ## Stack-safe recursion
//!
//! ```rust
//! use lambars_can::control::{Can, Either};
//!
//! let counted: Can<(), u64> = Can::tail_rec_m(
//!     0_u64,
//!     |(), ()| (),
//!     |count| {
//!         if count < 100_000 {
//!             Can::Right(Either::Left(count + 1))
//!         } else {
//!             Can::Right(Either::Right(count))
//!         }
//!     },
//! );
//! assert_eq!(counted, Can::Right(100_000));
//! ```

mod can;
mod either;
mod eval;
mod ior;
mod validated;

pub use can::{Can, OptionCanExt};
pub use either::Either;
pub use eval::Eval;
pub use ior::Ior;
pub use validated::Validated;
