//! Foldable type class - reducing a structure to a summary value.
//!
//! `Can`, `Ior` and `Validated` hold at most one right value, so folding them
//! visits that value or nothing. The left value is never visited; use
//! [`Can::bifold_left`](crate::control::Can::bifold_left) to fold both sides.
//!
//! Note that [`Foldable::is_empty`] asks whether there is nothing to fold.
//! For `Can` that is true of `Left` as well as `None`, unlike the inherent
//! [`Can::is_empty`](crate::control::Can::is_empty), which only matches
//! `None`.
//!
//! # Examples
//!
//! ```rust
//! use lambars_can::control::Can;
//! use lambars_can::typeclass::{Foldable, Sum};
//!
//! let readings: Vec<Can<&str, u32>> = vec![
//!     Can::Right(4),
//!     Can::Left("sensor offline"),
//!     Can::Both("estimated", 6),
//! ];
//! let total: Sum<u32> = readings
//!     .into_iter()
//!     .map(|reading| reading.fold_map(Sum::new))
//!     .fold(Sum::new(0), |acc, next| Sum::new(acc.0 + next.0));
//! assert_eq!(total, Sum::new(10));
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// A type class for structures that can be folded to a single value.
pub trait Foldable: TypeConstructor {
    /// Folds from the left.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from the right.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps every element into a monoid and combines the results.
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns `true` when there is nothing to fold.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Counts the elements.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects the elements into a `Vec`.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Returns the first element matching `predicate`.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.to_list().into_iter().find(|element| predicate(element))
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(element) => function(init, element),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(element) => function(element, init),
            None => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}

impl<T, E> Foldable for Result<T, E> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.ok().fold_left(init, function)
    }

    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.ok().fold_right(init, function)
    }
}

impl<T> Foldable for Vec<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn to_list(self) -> Self {
        self
    }
}

// =============================================================================
// Can Family Implementations
// =============================================================================

#[cfg(feature = "control")]
mod control_instances {
    use super::Foldable;
    use crate::control::{Can, Ior, Validated};

    /// Visits the right value of `Right` and `Both`.
    impl<A, T> Foldable for Can<A, T> {
        fn fold_left<B, F>(self, init: B, function: F) -> B
        where
            F: FnMut(B, T) -> B,
        {
            self.into_right().fold_left(init, function)
        }

        fn fold_right<B, F>(self, init: B, function: F) -> B
        where
            F: FnMut(T, B) -> B,
        {
            self.into_right().fold_right(init, function)
        }

        #[inline]
        fn is_empty(&self) -> bool {
            self.right_value().is_none()
        }

        #[inline]
        fn length(&self) -> usize {
            usize::from(self.right_value().is_some())
        }
    }

    impl<A, T> Foldable for Ior<A, T> {
        fn fold_left<B, F>(self, init: B, function: F) -> B
        where
            F: FnMut(B, T) -> B,
        {
            self.pad().1.fold_left(init, function)
        }

        fn fold_right<B, F>(self, init: B, function: F) -> B
        where
            F: FnMut(T, B) -> B,
        {
            self.pad().1.fold_right(init, function)
        }

        #[inline]
        fn is_empty(&self) -> bool {
            self.right_value().is_none()
        }
    }

    impl<E, T> Foldable for Validated<E, T> {
        fn fold_left<B, F>(self, init: B, function: F) -> B
        where
            F: FnMut(B, T) -> B,
        {
            self.to_result().fold_left(init, function)
        }

        fn fold_right<B, F>(self, init: B, function: F) -> B
        where
            F: FnMut(T, B) -> B,
        {
            self.to_result().fold_right(init, function)
        }

        #[inline]
        fn is_empty(&self) -> bool {
            self.is_invalid()
        }
    }
}
