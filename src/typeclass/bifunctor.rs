//! Bifunctor type class - mapping over both type parameters.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! x.bimap(|a| a, |b| b) == x
//! ```
//!
//! ## Composition
//!
//! ```text
//! x.bimap(|a| f2(f1(a)), |b| g2(g1(b))) == x.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## Consistency
//!
//! ```text
//! x.bimap(f, g) == x.first(f).second(g)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_can::control::Can;
//! use lambars_can::typeclass::Bifunctor;
//!
//! let both: Can<i32, &str> = Can::Both(404, "missing");
//! assert_eq!(both.first(|code| code / 100), Can::Both(4, "missing"));
//!
//! let right: Can<i32, &str> = Can::Right("found");
//! assert_eq!(right.second(str::len), Can::Right(5));
//! ```

/// A type class for types with two parameters that can both be mapped.
///
/// `Target<C, D>` is the same type with its parameters replaced, so that
/// `Result<T, E>` can expose its error as the first parameter.
pub trait Bifunctor<A, B> {
    /// The same type constructor applied to `C` and `D`.
    type Target<C, D>;

    /// Maps both parameters.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Maps the first parameter only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Maps the second parameter only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }

    /// Maps both parameters through references.
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;

    /// Maps the first parameter through a reference, cloning the second.
    #[inline]
    fn first_ref<C, F>(&self, function: F) -> Self::Target<C, B>
    where
        B: Clone,
        F: FnOnce(&A) -> C,
    {
        self.bimap_ref(function, B::clone)
    }

    /// Maps the second parameter through a reference, cloning the first.
    #[inline]
    fn second_ref<D, G>(&self, function: G) -> Self::Target<A, D>
    where
        A: Clone,
        G: FnOnce(&B) -> D,
    {
        self.bimap_ref(A::clone, function)
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

/// The error is the first parameter.
impl<T, E> Bifunctor<E, T> for Result<T, E> {
    type Target<C, D> = Result<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Result<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        self.map(second_function).map_err(first_function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Result<D, C>
    where
        F: FnOnce(&E) -> C,
        G: FnOnce(&T) -> D,
    {
        self.as_ref().map(second_function).map_err(first_function)
    }
}

impl<A, B> Bifunctor<A, B> for (A, B) {
    type Target<C, D> = (C, D);

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> (C, D)
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        (first_function(self.0), second_function(self.1))
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> (C, D)
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D,
    {
        (first_function(&self.0), second_function(&self.1))
    }
}

// =============================================================================
// Can Family Implementations
// =============================================================================

#[cfg(feature = "control")]
mod control_instances {
    use super::Bifunctor;
    use crate::control::{Can, Either, Ior, Validated};

    impl<A, B> Bifunctor<A, B> for Can<A, B> {
        type Target<C, D> = Can<C, D>;

        #[inline]
        fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Can<C, D>
        where
            F: FnOnce(A) -> C,
            G: FnOnce(B) -> D,
        {
            Can::bimap(self, first_function, second_function)
        }

        #[inline]
        fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Can<C, D>
        where
            F: FnOnce(&A) -> C,
            G: FnOnce(&B) -> D,
        {
            self.as_ref().bimap(first_function, second_function)
        }
    }

    impl<A, B> Bifunctor<A, B> for Ior<A, B> {
        type Target<C, D> = Ior<C, D>;

        #[inline]
        fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Ior<C, D>
        where
            F: FnOnce(A) -> C,
            G: FnOnce(B) -> D,
        {
            Ior::bimap(self, first_function, second_function)
        }

        fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Ior<C, D>
        where
            F: FnOnce(&A) -> C,
            G: FnOnce(&B) -> D,
        {
            match self {
                Self::Left(a) => Ior::Left(first_function(a)),
                Self::Right(b) => Ior::Right(second_function(b)),
                Self::Both(a, b) => Ior::Both(first_function(a), second_function(b)),
            }
        }
    }

    impl<E, A> Bifunctor<E, A> for Validated<E, A> {
        type Target<C, D> = Validated<C, D>;

        #[inline]
        fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Validated<C, D>
        where
            F: FnOnce(E) -> C,
            G: FnOnce(A) -> D,
        {
            Validated::bimap(self, first_function, second_function)
        }

        fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Validated<C, D>
        where
            F: FnOnce(&E) -> C,
            G: FnOnce(&A) -> D,
        {
            match self {
                Self::Invalid(error) => Validated::Invalid(first_function(error)),
                Self::Valid(value) => Validated::Valid(second_function(value)),
            }
        }
    }

    impl<L, R> Bifunctor<L, R> for Either<L, R> {
        type Target<C, D> = Either<C, D>;

        #[inline]
        fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Either<C, D>
        where
            F: FnOnce(L) -> C,
            G: FnOnce(R) -> D,
        {
            Either::bimap(self, first_function, second_function)
        }

        fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Either<C, D>
        where
            F: FnOnce(&L) -> C,
            G: FnOnce(&R) -> D,
        {
            match self {
                Self::Left(left) => Either::Left(first_function(left)),
                Self::Right(right) => Either::Right(second_function(right)),
            }
        }
    }
}
