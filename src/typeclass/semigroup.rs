//! Semigroup type class - types with an associative binary operation.
//!
//! A type `T` is a semigroup if there is a function
//! `combine: (T, T) -> T` that is associative.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! Semigroups are how `Can` and `Ior` merge left values: when a bound
//! computation reports another left value, the two are combined.
//!
//! # Examples
//!
//! ```rust
//! use lambars_can::control::Can;
//! use lambars_can::typeclass::{Semigroup, Sum};
//!
//! let warehouse: Can<Vec<&str>, Sum<i32>> = Can::Left(vec!["late"]);
//! let storefront: Can<Vec<&str>, Sum<i32>> = Can::Both(vec!["priced"], Sum::new(3));
//! assert_eq!(
//!     warehouse.combine(storefront),
//!     Can::Both(vec!["late", "priced"], Sum::new(3))
//! );
//! ```

use std::ops::{Add, Mul};

use super::wrappers::{Max, Min, Product, Sum};

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
///
/// # Examples
///
/// ```rust
/// use lambars_can::typeclass::Semigroup;
///
/// let a = String::from("foo");
/// let b = String::from("bar");
/// assert_eq!(a.combine(b), "foobar");
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_can::typeclass::Semigroup;
    ///
    /// let a = vec![1];
    /// let b = vec![2];
    /// assert_eq!(a.combine_ref(&b), vec![1, 2]);
    /// assert_eq!(a, vec![1]);
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines a value with itself `count` times.
    ///
    /// # Panics
    ///
    /// Panics if `count` is 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_can::typeclass::Semigroup;
    ///
    /// assert_eq!(String::from("ab").combine_n(3), "ababab");
    /// ```
    #[must_use]
    fn combine_n(self, count: usize) -> Self
    where
        Self: Clone,
    {
        assert!(count > 0, "combine_n requires count > 0");

        let mut result = self.clone();
        for _ in 1..count {
            result = result.combine(self.clone());
        }
        result
    }

    /// Reduces all elements of an iterator, or `None` when it is empty.
    ///
    /// For a version with a fallback, see
    /// [`Monoid::combine_all`](super::Monoid::combine_all).
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = String::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Vec::with_capacity(self.len() + other.len());
        result.extend(self.iter().cloned());
        result.extend(other.iter().cloned());
        result
    }
}

/// `None` is absorbed: `Some(a).combine(None)` is `Some(a)`.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

/// The first error wins.
impl<T: Semigroup, E> Semigroup for Result<T, E> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Ok(left), Ok(right)) => Ok(left.combine(right)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

// =============================================================================
// Numeric Wrapper Implementations
// =============================================================================

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Sum(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Product(self.0 * other.0)
    }
}

impl<A: Ord> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        Max(std::cmp::max(self.0, other.0))
    }
}

impl<A: Ord> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        Min(std::cmp::min(self.0, other.0))
    }
}

// =============================================================================
// Can Family Implementations
// =============================================================================

#[cfg(feature = "control")]
mod control_instances {
    use super::Semigroup;
    use crate::control::{Can, Ior};

    /// Each side is combined independently; `Can::None` is the identity.
    ///
    /// A side present in only one operand is kept as is, so
    /// `Left(a).combine(Right(b))` is `Both(a, b)`.
    impl<A: Semigroup, B: Semigroup> Semigroup for Can<A, B> {
        fn combine(self, other: Self) -> Self {
            let (left, right) = self.pad();
            let (other_left, other_right) = other.pad();
            Can::from_options(left.combine(other_left), right.combine(other_right))
        }
    }

    /// Each side is combined independently, like `Can` without the empty case.
    impl<A: Semigroup, B: Semigroup> Semigroup for Ior<A, B> {
        fn combine(self, other: Self) -> Self {
            match (self, other) {
                (Ior::Left(a), Ior::Left(c)) => Ior::Left(a.combine(c)),
                (Ior::Right(b), Ior::Right(d)) => Ior::Right(b.combine(d)),
                (Ior::Left(a), Ior::Right(d)) => Ior::Both(a, d),
                (Ior::Right(b), Ior::Left(c)) => Ior::Both(c, b),
                (Ior::Left(a), Ior::Both(c, d)) => Ior::Both(a.combine(c), d),
                (Ior::Right(b), Ior::Both(c, d)) => Ior::Both(c, b.combine(d)),
                (Ior::Both(a, b), Ior::Left(c)) => Ior::Both(a.combine(c), b),
                (Ior::Both(a, b), Ior::Right(d)) => Ior::Both(a, b.combine(d)),
                (Ior::Both(a, b), Ior::Both(c, d)) => Ior::Both(a.combine(c), b.combine(d)),
            }
        }
    }
}
