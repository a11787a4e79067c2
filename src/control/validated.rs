//! Validated type - a valid value or an invalid payload.
//!
//! `Validated<E, A>` has the same shape as [`Either`], but its intent is
//! validation: `Invalid(e)` describes what went wrong and `Valid(a)` carries
//! the accepted value. Independent validations can be combined with
//! [`Validated::zip_with`], which accumulates every invalid payload instead
//! of stopping at the first one.
//!
//! [`Can::to_validated`](super::Can::to_validated) projects a `Can` onto
//! this type, keeping only the right value of `Both`.
//!
//! # Examples
//!
//! ```rust
//! use lambars_can::control::Validated;
//!
//! fn non_empty(field: &str, value: &str) -> Validated<Vec<String>, String> {
//!     if value.is_empty() {
//!         Validated::invalid(vec![format!("{field} is empty")])
//!     } else {
//!         Validated::valid(value.to_string())
//!     }
//! }
//!
//! let combined = non_empty("name", "").zip_with(
//!     non_empty("email", ""),
//!     |mut first, second| { first.extend(second); first },
//!     |name, email| format!("{name} <{email}>"),
//! );
//! assert_eq!(
//!     combined,
//!     Validated::Invalid(vec!["name is empty".to_string(), "email is empty".to_string()])
//! );
//! ```

use std::fmt;

use super::either::Either;

/// Either an invalid payload `E` or a valid value `A`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validated<E, A> {
    /// The validation failed with this payload.
    Invalid(E),
    /// The validation succeeded with this value.
    Valid(A),
}

impl<E, A> Validated<E, A> {
    /// Wraps an accepted value.
    #[inline]
    pub const fn valid(value: A) -> Self {
        Self::Valid(value)
    }

    /// Wraps a failure payload.
    #[inline]
    pub const fn invalid(error: E) -> Self {
        Self::Invalid(error)
    }

    /// Returns `true` for `Valid`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` for `Invalid`.
    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Eliminates the value with one function per variant.
    #[inline]
    pub fn fold<T, F, G>(self, if_invalid: F, if_valid: G) -> T
    where
        F: FnOnce(E) -> T,
        G: FnOnce(A) -> T,
    {
        match self {
            Self::Invalid(error) => if_invalid(error),
            Self::Valid(value) => if_valid(value),
        }
    }

    /// Transforms the valid value.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Validated<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Invalid(error) => Validated::Invalid(error),
            Self::Valid(value) => Validated::Valid(function(value)),
        }
    }

    /// Transforms the invalid payload.
    #[inline]
    pub fn map_invalid<F2, F>(self, function: F) -> Validated<F2, A>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Self::Invalid(error) => Validated::Invalid(function(error)),
            Self::Valid(value) => Validated::Valid(value),
        }
    }

    /// Transforms whichever side is present.
    #[inline]
    pub fn bimap<F2, B, F, G>(self, invalid_function: F, valid_function: G) -> Validated<F2, B>
    where
        F: FnOnce(E) -> F2,
        G: FnOnce(A) -> B,
    {
        match self {
            Self::Invalid(error) => Validated::Invalid(invalid_function(error)),
            Self::Valid(value) => Validated::Valid(valid_function(value)),
        }
    }

    /// Combines two independent validations.
    ///
    /// Both valid: `function` joins the values. Otherwise every invalid
    /// payload is kept, merged with `combine` when both sides failed.
    pub fn zip_with<B, C, M, F>(
        self,
        other: Validated<E, B>,
        combine: M,
        function: F,
    ) -> Validated<E, C>
    where
        M: FnOnce(E, E) -> E,
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Valid(a), Validated::Valid(b)) => Validated::Valid(function(a, b)),
            (Self::Invalid(first), Validated::Invalid(second)) => {
                Validated::Invalid(combine(first, second))
            }
            (Self::Invalid(error), Validated::Valid(_))
            | (Self::Valid(_), Validated::Invalid(error)) => Validated::Invalid(error),
        }
    }

    /// Converts to an [`Either`]: `Invalid` to `Left`, `Valid` to `Right`.
    #[inline]
    pub fn to_either(self) -> Either<E, A> {
        self.fold(Either::Left, Either::Right)
    }

    /// Converts to a `Result`: `Invalid` to `Err`, `Valid` to `Ok`.
    #[inline]
    pub fn to_result(self) -> Result<A, E> {
        self.fold(Err, Ok)
    }
}

impl<E, A> From<Result<A, E>> for Validated<E, A> {
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::Invalid(error),
        }
    }
}

impl<E, A> From<Either<E, A>> for Validated<E, A> {
    #[inline]
    fn from(either: Either<E, A>) -> Self {
        either.fold(Self::Invalid, Self::Valid)
    }
}

impl<E: fmt::Display, A: fmt::Display> fmt::Display for Validated<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(error) => write!(formatter, "Invalid({error})"),
            Self::Valid(value) => write!(formatter, "Valid({value})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn zip_with_accumulates_both_failures() {
        let first: Validated<Vec<i32>, i32> = Validated::invalid(vec![1]);
        let second: Validated<Vec<i32>, i32> = Validated::invalid(vec![2]);
        let result = first.zip_with(
            second,
            |mut left, right| {
                left.extend(right);
                left
            },
            |a, b| a + b,
        );
        assert_eq!(result, Validated::Invalid(vec![1, 2]));
    }

    #[rstest]
    #[case(Validated::Valid(1), Validated::Valid(2), Validated::Valid(3))]
    #[case(Validated::Invalid("a"), Validated::Valid(2), Validated::Invalid("a"))]
    #[case(Validated::Valid(1), Validated::Invalid("b"), Validated::Invalid("b"))]
    fn zip_with_single_failure_or_success(
        #[case] first: Validated<&'static str, i32>,
        #[case] second: Validated<&'static str, i32>,
        #[case] expected: Validated<&'static str, i32>,
    ) {
        assert_eq!(first.zip_with(second, |left, _| left, |a, b| a + b), expected);
    }

    #[rstest]
    fn conversions_preserve_the_side() {
        let invalid: Validated<&str, i32> = Validated::invalid("bad");
        assert_eq!(invalid.to_either(), Either::Left("bad"));
        assert_eq!(invalid.to_result(), Err("bad"));

        let valid: Validated<&str, i32> = Result::<i32, &str>::Ok(4).into();
        assert_eq!(valid, Validated::Valid(4));
        assert_eq!(Validated::from(Either::<&str, i32>::Left("x")), Validated::Invalid("x"));
    }

    #[rstest]
    fn display_names_the_variant() {
        assert_eq!(Validated::<&str, i32>::Valid(1).to_string(), "Valid(1)");
        assert_eq!(Validated::<&str, i32>::Invalid("no").to_string(), "Invalid(no)");
    }
}
