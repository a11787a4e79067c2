//! Monad type class - sequencing computations that depend on each other.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Method Resolution
//!
//! `Can` and `Ior` have an inherent `flat_map` that takes an explicit combine
//! function for left values, and inherent methods win over trait methods.
//! Call the trait version as `Monad::flat_map(value, f)` or through
//! [`Monad::and_then`], which has no inherent counterpart.
//!
//! # Examples
//!
//! ```rust
//! use lambars_can::control::Can;
//! use lambars_can::typeclass::Monad;
//!
//! fn halve(n: i32) -> Can<String, i32> {
//!     if n % 2 == 0 {
//!         Can::Right(n / 2)
//!     } else {
//!         Can::Both(format!("{n} rounded down;"), n / 2)
//!     }
//! }
//!
//! let result = Can::<String, i32>::Right(14).and_then(halve).and_then(halve);
//! assert_eq!(result, Can::Both("7 rounded down;".to_string(), 3));
//! ```

use super::applicative::Applicative;

/// A type class for applicatives whose computations can depend on earlier
/// results.
pub trait Monad: Applicative {
    /// Feeds the held value to `function` and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences `next` after `self`, discarding the held value.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        Self::and_then(self, function)
    }
}

impl<T, E: Clone> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        Self::and_then(self, function)
    }
}

// =============================================================================
// Can Family Implementations
// =============================================================================

#[cfg(feature = "control")]
mod control_instances {
    use super::Monad;
    use crate::control::{Can, Ior};
    use crate::typeclass::Semigroup;

    /// Left values are merged with [`Semigroup::combine`].
    impl<A: Semigroup + Clone, T> Monad for Can<A, T> {
        #[inline]
        fn flat_map<B, F>(self, function: F) -> Can<A, B>
        where
            F: FnOnce(T) -> Can<A, B>,
        {
            Can::flat_map(self, Semigroup::combine, function)
        }
    }

    /// Left values are merged with [`Semigroup::combine`].
    impl<A: Semigroup + Clone, T> Monad for Ior<A, T> {
        #[inline]
        fn flat_map<B, F>(self, function: F) -> Ior<A, B>
        where
            F: FnOnce(T) -> Ior<A, B>,
        {
            Ior::flat_map(self, Semigroup::combine, function)
        }
    }
}
