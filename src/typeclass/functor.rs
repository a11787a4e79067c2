//! Functor type class - mapping over the value a container holds.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! Two-parameter types map their right value only; the left value is carried
//! along untouched. Use [`Bifunctor`](super::Bifunctor) to reach the left side.
//!
//! # Examples
//!
//! ```rust
//! use lambars_can::control::Can;
//! use lambars_can::typeclass::Functor;
//!
//! let both: Can<&str, i32> = Can::Both("note", 20);
//! assert_eq!(both.fmap(|n| n * 2), Can::Both("note", 40));
//!
//! let left: Can<&str, i32> = Can::Left("note");
//! assert_eq!(left.fmap(|n| n * 2), Can::Left("note"));
//! ```

use super::higher::TypeConstructor;

/// A type class for containers whose value can be transformed.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the held value.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies `function` to a reference to the held value.
    ///
    /// Everything outside the held value is cloned into the result.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the held value with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_can::typeclass::Functor;
    ///
    /// assert_eq!(Some(1).replace("x"), Some("x"));
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the held value.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<T, E: Clone> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Result<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function).map_err(Clone::clone)
    }
}

// =============================================================================
// Can Family Implementations
// =============================================================================

#[cfg(feature = "control")]
mod control_instances {
    use super::Functor;
    use crate::control::{Can, Either, Ior, Validated};

    impl<A: Clone, T> Functor for Can<A, T> {
        #[inline]
        fn fmap<B, F>(self, function: F) -> Can<A, B>
        where
            F: FnOnce(T) -> B,
        {
            self.map(function)
        }

        fn fmap_ref<B, F>(&self, function: F) -> Can<A, B>
        where
            F: FnOnce(&T) -> B,
        {
            match self {
                Can::None => Can::None,
                Can::Left(a) => Can::Left(a.clone()),
                Can::Right(t) => Can::Right(function(t)),
                Can::Both(a, t) => Can::Both(a.clone(), function(t)),
            }
        }
    }

    impl<A: Clone, T> Functor for Ior<A, T> {
        #[inline]
        fn fmap<B, F>(self, function: F) -> Ior<A, B>
        where
            F: FnOnce(T) -> B,
        {
            self.map(function)
        }

        fn fmap_ref<B, F>(&self, function: F) -> Ior<A, B>
        where
            F: FnOnce(&T) -> B,
        {
            match self {
                Ior::Left(a) => Ior::Left(a.clone()),
                Ior::Right(t) => Ior::Right(function(t)),
                Ior::Both(a, t) => Ior::Both(a.clone(), function(t)),
            }
        }
    }

    impl<E: Clone, T> Functor for Validated<E, T> {
        #[inline]
        fn fmap<B, F>(self, function: F) -> Validated<E, B>
        where
            F: FnOnce(T) -> B,
        {
            self.map(function)
        }

        fn fmap_ref<B, F>(&self, function: F) -> Validated<E, B>
        where
            F: FnOnce(&T) -> B,
        {
            match self {
                Validated::Invalid(error) => Validated::Invalid(error.clone()),
                Validated::Valid(value) => Validated::Valid(function(value)),
            }
        }
    }

    impl<L: Clone, T> Functor for Either<L, T> {
        #[inline]
        fn fmap<B, F>(self, function: F) -> Either<L, B>
        where
            F: FnOnce(T) -> B,
        {
            self.map_right(function)
        }

        fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
        where
            F: FnOnce(&T) -> B,
        {
            match self {
                Either::Left(l) => Either::Left(l.clone()),
                Either::Right(t) => Either::Right(function(t)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(2), Some(4))]
    #[case(None, None)]
    fn option_fmap_doubles(#[case] value: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(value.fmap(|n| n * 2), expected);
    }

    #[rstest]
    fn result_fmap_ref_clones_the_error() {
        let failure: Result<i32, String> = Err("bad".to_string());
        assert_eq!(failure.fmap_ref(|n| n + 1), Err("bad".to_string()));
        assert_eq!(Ok::<i32, String>(1).fmap_ref(|n| n + 1), Ok(2));
    }

    #[rstest]
    fn void_keeps_the_shape() {
        assert_eq!(Some(3).void(), Some(()));
        assert_eq!(None::<i32>.void(), None);
    }

    #[cfg(feature = "control")]
    mod can_family {
        use super::*;
        use crate::control::{Can, Either, Ior, Validated};

        #[rstest]
        #[case(Can::None, Can::None)]
        #[case(Can::Left("l".to_string()), Can::Left("l".to_string()))]
        #[case(Can::Right(2), Can::Right(3))]
        #[case(Can::Both("l".to_string(), 2), Can::Both("l".to_string(), 3))]
        fn can_fmap_ref_matches_fmap(#[case] value: Can<String, i32>, #[case] expected: Can<String, i32>) {
            assert_eq!(value.fmap_ref(|n| n + 1), expected);
            assert_eq!(value.fmap(|n| n + 1), expected);
        }

        #[rstest]
        fn can_replace_keeps_the_left_value() {
            let value: Can<&str, i32> = Can::Both("l", 1);
            assert_eq!(value.replace('x'), Can::Both("l", 'x'));
        }

        #[rstest]
        fn siblings_map_the_right_side() {
            assert_eq!(Ior::<&str, i32>::Both("l", 1).fmap_ref(|n| n * 10), Ior::Both("l", 10));
            assert_eq!(Validated::<&str, i32>::Invalid("e").fmap(|n| n * 10), Validated::Invalid("e"));
            assert_eq!(Either::<&str, i32>::Right(1).fmap(|n| n * 10), Either::Right(10));
        }
    }
}
