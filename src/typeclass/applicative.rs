//! Applicative type class - lifting values and combining independent effects.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! Self::pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! Self::pure(f).apply(Self::pure(x)) == Self::pure(f(x))
//! ```
//!
//! For `Can` and `Ior`, `pure` is `Right` and combining two values behaves
//! like binding one after the other: the first `None` or `Left` stops the
//! computation, and left values of two `Both` are merged with
//! [`Semigroup::combine`].
//!
//! # Examples
//!
//! ```rust
//! use lambars_can::control::Can;
//! use lambars_can::typeclass::Applicative;
//!
//! let price: Can<Vec<&str>, u32> = Can::Both(vec!["estimated"], 12);
//! let quantity: Can<Vec<&str>, u32> = Can::Both(vec!["partial"], 3);
//! assert_eq!(
//!     price.map2(quantity, |p, q| p * q),
//!     Can::Both(vec!["estimated", "partial"], 36)
//! );
//! ```

use super::functor::Functor;

/// A type class for functors that can lift values and combine independent
/// computations.
pub trait Applicative: Functor {
    /// Lifts a value into the container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_can::typeclass::Applicative;
    ///
    /// let lifted: Option<i32> = <Option<()>>::pure(42);
    /// assert_eq!(lifted, Some(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two computations with a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three computations with a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs the two held values.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a held function to a held value.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.zip(other).map(|(a, b)| function(a, b))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Some(a), Some(b), Some(c)) => Some(function(a, b, c)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}

impl<T, E: Clone> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Ok(a), Ok(b)) => Ok(function(a, b)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Result<B, E>,
        third: Result<C, E>,
        function: F,
    ) -> Result<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Ok(a), Ok(b), Ok(c)) => Ok(function(a, b, c)),
            (Err(error), _, _) | (_, Err(error), _) | (_, _, Err(error)) => Err(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<B, E>) -> Result<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}

// =============================================================================
// Can Family Implementations
// =============================================================================

#[cfg(feature = "control")]
mod control_instances {
    use super::Applicative;
    use crate::control::{Can, Ior};
    use crate::typeclass::Semigroup;

    impl<A: Semigroup + Clone, T> Applicative for Can<A, T> {
        #[inline]
        fn pure<B>(value: B) -> Can<A, B> {
            Can::Right(value)
        }

        fn map2<B, C, F>(self, other: Can<A, B>, function: F) -> Can<A, C>
        where
            F: FnOnce(T, B) -> C,
        {
            match self {
                Self::None => Can::None,
                Self::Left(a) => Can::Left(a),
                Self::Right(t) => other.map(|b| function(t, b)),
                Self::Both(a, t) => match other {
                    Can::None => Can::None,
                    Can::Left(other_left) => Can::Left(a.combine(other_left)),
                    Can::Right(b) => Can::Both(a, function(t, b)),
                    Can::Both(other_left, b) => Can::Both(a.combine(other_left), function(t, b)),
                },
            }
        }

        fn map3<B, C, D, F>(self, second: Can<A, B>, third: Can<A, C>, function: F) -> Can<A, D>
        where
            F: FnOnce(T, B, C) -> D,
        {
            self.map2(second, |t, b| (t, b))
                .map2(third, |(t, b), c| function(t, b, c))
        }

        #[inline]
        fn apply<B, Output>(self, other: Can<A, B>) -> Can<A, Output>
        where
            T: FnOnce(B) -> Output,
        {
            self.map2(other, |function, b| function(b))
        }
    }

    impl<A: Semigroup + Clone, T> Applicative for Ior<A, T> {
        #[inline]
        fn pure<B>(value: B) -> Ior<A, B> {
            Ior::Right(value)
        }

        fn map2<B, C, F>(self, other: Ior<A, B>, function: F) -> Ior<A, C>
        where
            F: FnOnce(T, B) -> C,
        {
            self.flat_map(Semigroup::combine, |t| other.map(|b| function(t, b)))
        }

        fn map3<B, C, D, F>(self, second: Ior<A, B>, third: Ior<A, C>, function: F) -> Ior<A, D>
        where
            F: FnOnce(T, B, C) -> D,
        {
            self.map2(second, |t, b| (t, b))
                .map2(third, |(t, b), c| function(t, b, c))
        }

        #[inline]
        fn apply<B, Output>(self, other: Ior<A, B>) -> Ior<A, Output>
        where
            T: FnOnce(B) -> Output,
        {
            self.map2(other, |function, b| function(b))
        }
    }
}
