//! # lambars-can
//!
//! Small immutable sum types for Rust, with lawful functional combinators.
//!
//! ## Overview
//!
//! The centre of this library is [`Can<A, B>`](control::Can), a four-case union
//! that holds nothing, a left value, a right value, or both. Around it sit the
//! sibling types it converts to and from:
//!
//! - **Either**: exactly one of two values
//! - **Ior**: a left value, a right value, or both (a `Can` that is never empty)
//! - **Validated**: a valid value or an invalid payload
//! - **Eval**: a memoised lazy value used for right folds
//!
//! and the type classes they implement: Functor, Applicative, Monad, Foldable,
//! Traversable, Bifunctor, Semigroup and Monoid.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: The sum types (`Can`, `Ior`, `Either`, `Validated`, `Eval`)
//! - `serde`: `Serialize`/`Deserialize` for the sum types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambars_can::prelude::*;
//!
//! let warehouse = Some(12);
//! let storefront: Option<u32> = None;
//!
//! let aligned = Can::from_options(warehouse, storefront);
//! assert_eq!(aligned, Can::Left(12));
//!
//! let described = aligned.fold(
//!     || "unknown".to_string(),
//!     |stock| format!("{stock} unlisted"),
//!     |listed| format!("{listed} oversold"),
//!     |stock, listed| format!("{stock}/{listed}"),
//! );
//! assert_eq!(described, "12 unlisted");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lambars_can::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;
