//! Either type - exactly one of two values.
//!
//! `Either<L, R>` is the disjoint sibling of [`Can`](super::Can) and
//! [`Ior`](super::Ior): it never holds both values and is never empty. In
//! this library it also serves as the step type of
//! [`Can::tail_rec_m`](super::Can::tail_rec_m), where `Left` means
//! "continue with this seed" and `Right` means "done".
//!
//! # Examples
//!
//! ```rust
//! use lambars_can::control::Either;
//!
//! let parsed: Either<String, i32> = "42"
//!     .parse::<i32>()
//!     .map_err(|error| error.to_string())
//!     .into();
//! assert_eq!(parsed, Either::Right(42));
//!
//! let described = parsed.fold(|error| error, |number| format!("got {number}"));
//! assert_eq!(described, "got 42");
//! ```

use std::fmt;

/// A value that is either `Left(L)` or `Right(R)`.
///
/// By convention `Left` carries failure or "not yet" and `Right` carries
/// success or "done". Operations that pick a side are right-biased.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant.
    Left(L),
    /// The right variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_can::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(left.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Applies a function to the right value, leaving a left value untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_can::control::Either;
    ///
    /// let right: Either<i32, &str> = Either::Right("hello");
    /// assert_eq!(right.map_right(str::len), Either::Right(5));
    /// ```
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies `left_function` or `right_function` depending on the variant.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Eliminates the either by applying one of two functions.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Converts into a pair of options, exactly one of which is `Some`.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Left(value) => (Some(value), None),
            Self::Right(value) => (None, Some(value)),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Either::Left(1), true, false)]
    #[case(Either::Right("one"), false, true)]
    fn predicates_follow_variant(
        #[case] value: Either<i32, &str>,
        #[case] expected_left: bool,
        #[case] expected_right: bool,
    ) {
        assert_eq!(value.is_left(), expected_left);
        assert_eq!(value.is_right(), expected_right);
    }

    #[rstest]
    fn into_options_places_value_on_its_side() {
        let left: Either<i32, &str> = Either::Left(1);
        let right: Either<i32, &str> = Either::Right("r");
        assert_eq!(left.into_options(), (Some(1), None));
        assert_eq!(right.into_options(), (None, Some("r")));
    }

    #[rstest]
    fn result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        assert_eq!(either, Either::Right(42));
        let back: Result<i32, String> = either.into();
        assert_eq!(back, Ok(42));

        let err: Result<i32, String> = Err("boom".to_string());
        let either: Either<String, i32> = err.into();
        assert_eq!(either, Either::Left("boom".to_string()));
    }

    #[rstest]
    fn display_names_the_variant() {
        let left: Either<i32, &str> = Either::Left(42);
        let right: Either<i32, &str> = Either::Right("hello");
        assert_eq!(left.to_string(), "Left(42)");
        assert_eq!(right.to_string(), "Right(hello)");
    }
}
