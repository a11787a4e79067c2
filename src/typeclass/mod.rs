//! Type class traits for the `Can` family.
//!
//! The traits here give `Can`, [`Ior`](crate::control::Ior) and
//! [`Validated`](crate::control::Validated) the same vocabulary as the
//! standard containers:
//!
//! - [`Functor`]: Mapping over the right value
//! - [`Applicative`]: Lifting values and combining independent computations
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Foldable`]: Folding over the right value
//! - [`Traversable`]: Traversing the right value with `Option` or `Result`
//! - [`Bifunctor`]: Mapping over both type parameters
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate them,
//! so that `Functor` and `Monad` can be written once for every container.
//! Two-parameter types fix their left type and vary the right one.
//!
//! ## Right Bias and Left Accumulation
//!
//! `Can` and `Ior` can hold a left value next to the right one. Their
//! `Applicative` and `Monad` instances need to merge left values when two
//! computations both produce one, so they require the left type to be a
//! [`Semigroup`].
//!
//! # Examples
//!
//! ```rust
//! use lambars_can::control::Can;
//! use lambars_can::typeclass::{Functor, Monad, Semigroup};
//!
//! let warning: Can<String, i32> = Can::Both("rounded;".to_string(), 10);
//! let result = Monad::flat_map(warning.fmap(|value| value + 1), |value| {
//!     Can::Both("clamped;".to_string(), value.min(5))
//! });
//! assert_eq!(result, Can::Both("rounded;clamped;".to_string(), 5));
//! ```
//!
//! ```rust
//! use lambars_can::typeclass::{Monoid, Semigroup, Sum};
//!
//! let numbers = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
//! assert_eq!(Sum::combine_all(numbers), Sum::new(6));
//! ```

mod applicative;
mod bifunctor;
mod foldable;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;
mod traversable;
mod wrappers;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use traversable::Traversable;
pub use wrappers::{Bounded, Max, Min, Product, Sum};
