//! Traversable type class - running an effect over the held value and
//! turning the structure inside out.
//!
//! Only `Option` and `Result` are supported as effects, which covers the
//! usual "validate the right value" use:
//!
//! ```rust
//! use lambars_can::control::Can;
//! use lambars_can::typeclass::Traversable;
//!
//! let raw: Can<&str, &str> = Can::Both("imported", "42");
//! let parsed: Result<Can<&str, u32>, _> = raw.traverse_result(|text| text.parse::<u32>());
//! assert_eq!(parsed, Ok(Can::Both("imported", 42)));
//!
//! let missing: Can<&str, &str> = Can::Left("imported");
//! let parsed: Result<Can<&str, u32>, std::num::ParseIntError> =
//!     missing.traverse_result(|text| text.parse::<u32>());
//! assert_eq!(parsed, Ok(Can::Left("imported")));
//! ```

use super::foldable::Foldable;
use super::functor::Functor;
use super::higher::TypeConstructor;

/// A type class for structures that can be traversed with an effect.
///
/// # Laws
///
/// ## Identity
///
/// ```text
/// fa.traverse_option(Some) == Some(fa)
/// ```
pub trait Traversable: Functor + Foldable {
    /// Applies `function` to every element, failing if any call yields `None`.
    fn traverse_option<B, F>(self, function: F) -> Option<Self::WithType<B>>
    where
        F: FnMut(Self::Inner) -> Option<B>;

    /// Applies `function` to every element, stopping at the first error.
    fn traverse_result<B, E, F>(self, function: F) -> Result<Self::WithType<B>, E>
    where
        F: FnMut(Self::Inner) -> Result<B, E>;

    /// Turns a structure of options into an optional structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_can::control::Can;
    /// use lambars_can::typeclass::Traversable;
    ///
    /// let counted: Can<&str, Option<i32>> = Can::Both("estimate", Some(2));
    /// assert_eq!(counted.sequence_option(), Some(Can::Both("estimate", 2)));
    ///
    /// let missing: Can<&str, Option<i32>> = Can::Right(None);
    /// assert_eq!(missing.sequence_option(), None);
    /// ```
    fn sequence_option(self) -> Option<Self::WithType<<Self::Inner as TypeConstructor>::Inner>>
    where
        Self: Sized,
        Self::Inner: TypeConstructor + Into<Option<<Self::Inner as TypeConstructor>::Inner>>,
    {
        self.traverse_option(Into::into)
    }

    /// Turns a structure of results into a result of a structure.
    fn sequence_result<E>(
        self,
    ) -> Result<Self::WithType<<Self::Inner as TypeConstructor>::Inner>, E>
    where
        Self: Sized,
        Self::Inner: TypeConstructor + Into<Result<<Self::Inner as TypeConstructor>::Inner, E>>,
    {
        self.traverse_result(Into::into)
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl<A> Traversable for Option<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Option<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        match self {
            Some(element) => function(element).map(Some),
            None => Some(None),
        }
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Option<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        self.map(&mut function).transpose()
    }
}

impl<T, E: Clone> Traversable for Result<T, E> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Result<B, E>>
    where
        F: FnMut(T) -> Option<B>,
    {
        match self {
            Ok(element) => function(element).map(Ok),
            Err(error) => Some(Err(error)),
        }
    }

    fn traverse_result<B, E2, F>(self, mut function: F) -> Result<Result<B, E>, E2>
    where
        F: FnMut(T) -> Result<B, E2>,
    {
        match self {
            Ok(element) => function(element).map(Ok),
            Err(error) => Ok(Err(error)),
        }
    }
}

// =============================================================================
// Can Family Implementations
// =============================================================================

#[cfg(feature = "control")]
mod control_instances {
    use super::Traversable;
    use crate::control::{Can, Ior};

    /// `None` and `Left` are returned unchanged inside the effect.
    impl<A: Clone, T> Traversable for Can<A, T> {
        fn traverse_option<B, F>(self, mut function: F) -> Option<Can<A, B>>
        where
            F: FnMut(T) -> Option<B>,
        {
            match self {
                Self::None => Some(Can::None),
                Self::Left(a) => Some(Can::Left(a)),
                Self::Right(t) => function(t).map(Can::Right),
                Self::Both(a, t) => function(t).map(|b| Can::Both(a, b)),
            }
        }

        fn traverse_result<B, E, F>(self, mut function: F) -> Result<Can<A, B>, E>
        where
            F: FnMut(T) -> Result<B, E>,
        {
            match self {
                Self::None => Ok(Can::None),
                Self::Left(a) => Ok(Can::Left(a)),
                Self::Right(t) => function(t).map(Can::Right),
                Self::Both(a, t) => function(t).map(|b| Can::Both(a, b)),
            }
        }
    }

    impl<A: Clone, T> Traversable for Ior<A, T> {
        fn traverse_option<B, F>(self, mut function: F) -> Option<Ior<A, B>>
        where
            F: FnMut(T) -> Option<B>,
        {
            match self {
                Self::Left(a) => Some(Ior::Left(a)),
                Self::Right(t) => function(t).map(Ior::Right),
                Self::Both(a, t) => function(t).map(|b| Ior::Both(a, b)),
            }
        }

        fn traverse_result<B, E, F>(self, mut function: F) -> Result<Ior<A, B>, E>
        where
            F: FnMut(T) -> Result<B, E>,
        {
            match self {
                Self::Left(a) => Ok(Ior::Left(a)),
                Self::Right(t) => function(t).map(Ior::Right),
                Self::Both(a, t) => function(t).map(|b| Ior::Both(a, b)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_traverse_result_propagates_the_error() {
        let parsed: Result<Option<i32>, _> = Some("x").traverse_result(str::parse::<i32>);
        assert!(parsed.is_err());
        assert_eq!(None::<&str>.traverse_result(str::parse::<i32>), Ok(None));
    }

    #[rstest]
    fn result_sequence_option_flips_layers() {
        let value: Result<Option<i32>, String> = Ok(Some(3));
        assert_eq!(value.sequence_option(), Some(Ok(3)));
    }

    #[cfg(feature = "control")]
    mod can_family {
        use super::*;
        use crate::control::{Can, Ior};

        fn positive(n: i32) -> Option<i32> {
            (n > 0).then_some(n)
        }

        #[rstest]
        #[case(Can::None, Some(Can::None))]
        #[case(Can::Left("l"), Some(Can::Left("l")))]
        #[case(Can::Right(1), Some(Can::Right(1)))]
        #[case(Can::Right(-1), None)]
        #[case(Can::Both("l", 2), Some(Can::Both("l", 2)))]
        #[case(Can::Both("l", -2), None)]
        fn can_traverse_option(
            #[case] value: Can<&'static str, i32>,
            #[case] expected: Option<Can<&'static str, i32>>,
        ) {
            assert_eq!(value.traverse_option(positive), expected);
        }

        #[rstest]
        fn can_sequence_result_pulls_the_error_out() {
            let value: Can<&str, Result<i32, String>> = Can::Both("l", Err("bad".to_string()));
            assert_eq!(value.sequence_result(), Err::<Can<&str, i32>, String>("bad".to_string()));
        }

        #[rstest]
        fn ior_sequence_option_keeps_left() {
            let value: Ior<&str, Option<i32>> = Ior::Left("l");
            assert_eq!(value.sequence_option(), Some(Ior::Left("l")));
        }
    }
}
