//! Ior type - an inclusive-or of two values.
//!
//! `Ior<A, B>` holds a left value, a right value, or both. It is
//! [`Can`](super::Can) without the empty case, which makes
//! `Option<Ior<A, B>>` and `Can<A, B>` isomorphic.
//!
//! Like [`Can`](super::Can), `Ior` is right-biased: `map` and `flat_map`
//! act on the right value, and binding through a `Both` merges left values
//! with a caller-supplied combine function.
//!
//! # Examples
//!
//! ```rust
//! use lambars_can::control::Ior;
//!
//! let both: Ior<Vec<&str>, i32> = Ior::Both(vec!["approximate"], 10);
//! let result = both.flat_map(
//!     |mut first, second| { first.extend(second); first },
//!     |value| Ior::Both(vec!["clamped"], value * 2),
//! );
//! assert_eq!(result, Ior::Both(vec!["approximate", "clamped"], 20));
//! ```

use std::fmt;

use super::either::Either;

/// A left value, a right value, or both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ior<A, B> {
    /// Only a left value.
    Left(A),
    /// Only a right value.
    Right(B),
    /// Both a left and a right value.
    Both(A, B),
}

impl<A, B> Ior<A, B> {
    /// Creates an `Ior` holding only a left value.
    #[inline]
    pub const fn left(value: A) -> Self {
        Self::Left(value)
    }

    /// Creates an `Ior` holding only a right value.
    #[inline]
    pub const fn right(value: B) -> Self {
        Self::Right(value)
    }

    /// Creates an `Ior` holding both values.
    #[inline]
    pub const fn both(left: A, right: B) -> Self {
        Self::Both(left, right)
    }

    /// Builds an `Ior` from two options; `None` if both are absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_can::control::Ior;
    ///
    /// assert_eq!(Ior::from_options(Some(1), Some('x')), Some(Ior::Both(1, 'x')));
    /// assert_eq!(Ior::from_options(None::<i32>, Some('x')), Some(Ior::Right('x')));
    /// assert_eq!(Ior::<i32, char>::from_options(None, None), None);
    /// ```
    #[inline]
    pub fn from_options(left: Option<A>, right: Option<B>) -> Option<Self> {
        match (left, right) {
            (Some(a), Some(b)) => Some(Self::Both(a, b)),
            (None, Some(b)) => Some(Self::Right(b)),
            (Some(a), None) => Some(Self::Left(a)),
            (None, None) => None,
        }
    }

    /// Returns `true` for `Left`.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` for `Right`.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns `true` for `Both`.
    #[inline]
    pub const fn is_both(&self) -> bool {
        matches!(self, Self::Both(_, _))
    }

    /// Borrows the left value of `Left` or `Both`.
    #[inline]
    pub const fn left_value(&self) -> Option<&A> {
        match self {
            Self::Left(a) | Self::Both(a, _) => Some(a),
            Self::Right(_) => None,
        }
    }

    /// Borrows the right value of `Right` or `Both`.
    #[inline]
    pub const fn right_value(&self) -> Option<&B> {
        match self {
            Self::Right(b) | Self::Both(_, b) => Some(b),
            Self::Left(_) => None,
        }
    }

    /// Eliminates the `Ior`, running exactly one of the three functions.
    #[inline]
    pub fn fold<C, L, R, T>(self, if_left: L, if_right: R, if_both: T) -> C
    where
        L: FnOnce(A) -> C,
        R: FnOnce(B) -> C,
        T: FnOnce(A, B) -> C,
    {
        match self {
            Self::Left(a) => if_left(a),
            Self::Right(b) => if_right(b),
            Self::Both(a, b) => if_both(a, b),
        }
    }

    /// Transforms the right value.
    #[inline]
    pub fn map<C, F>(self, function: F) -> Ior<A, C>
    where
        F: FnOnce(B) -> C,
    {
        match self {
            Self::Left(a) => Ior::Left(a),
            Self::Right(b) => Ior::Right(function(b)),
            Self::Both(a, b) => Ior::Both(a, function(b)),
        }
    }

    /// Transforms the left value.
    #[inline]
    pub fn map_left<C, F>(self, function: F) -> Ior<C, B>
    where
        F: FnOnce(A) -> C,
    {
        match self {
            Self::Left(a) => Ior::Left(function(a)),
            Self::Right(b) => Ior::Right(b),
            Self::Both(a, b) => Ior::Both(function(a), b),
        }
    }

    /// Transforms both values in one pass.
    #[inline]
    pub fn bimap<C, D, F, G>(self, left_function: F, right_function: G) -> Ior<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        match self {
            Self::Left(a) => Ior::Left(left_function(a)),
            Self::Right(b) => Ior::Right(right_function(b)),
            Self::Both(a, b) => Ior::Both(left_function(a), right_function(b)),
        }
    }

    /// Exchanges the left and right roles.
    #[inline]
    pub fn swap(self) -> Ior<B, A> {
        match self {
            Self::Left(a) => Ior::Right(a),
            Self::Right(b) => Ior::Left(b),
            Self::Both(a, b) => Ior::Both(b, a),
        }
    }

    /// Projects to a pair of options, at least one of which is `Some`.
    #[inline]
    pub fn pad(self) -> (Option<A>, Option<B>) {
        match self {
            Self::Left(a) => (Some(a), None),
            Self::Right(b) => (None, Some(b)),
            Self::Both(a, b) => (Some(a), Some(b)),
        }
    }

    /// Binds the right value, merging left values with `combine`.
    ///
    /// `Left` short-circuits. For `Both(a, b)`, the left value of `function(b)`
    /// is merged into `a`; a `Right(c)` result keeps `a` as `Both(a, c)`.
    pub fn flat_map<C, M, F>(self, combine: M, function: F) -> Ior<A, C>
    where
        M: FnOnce(A, A) -> A,
        F: FnOnce(B) -> Ior<A, C>,
    {
        match self {
            Self::Left(a) => Ior::Left(a),
            Self::Right(b) => function(b),
            Self::Both(a, b) => match function(b) {
                Ior::Left(other) => Ior::Left(combine(a, other)),
                Ior::Right(c) => Ior::Both(a, c),
                Ior::Both(other, c) => Ior::Both(combine(a, other), c),
            },
        }
    }

    /// Converts to an [`Either`], keeping the right value of `Both`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_can::control::{Either, Ior};
    ///
    /// let both: Ior<&str, i32> = Ior::Both("dropped", 1);
    /// assert_eq!(both.to_either(), Either::Right(1));
    /// ```
    #[inline]
    pub fn to_either(self) -> Either<A, B> {
        match self {
            Self::Left(a) => Either::Left(a),
            Self::Right(b) | Self::Both(_, b) => Either::Right(b),
        }
    }
}

impl<A, B> From<Either<A, B>> for Ior<A, B> {
    #[inline]
    fn from(either: Either<A, B>) -> Self {
        either.fold(Self::Left, Self::Right)
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Ior<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(a) => write!(formatter, "Left({a})"),
            Self::Right(b) => write!(formatter, "Right({b})"),
            Self::Both(a, b) => write!(formatter, "Both({a}, {b})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn concat(first: String, second: String) -> String {
        first + &second
    }

    #[rstest]
    #[case(Ior::Left(1), (true, false, false))]
    #[case(Ior::Right('r'), (false, true, false))]
    #[case(Ior::Both(1, 'r'), (false, false, true))]
    fn predicates_are_exclusive(#[case] value: Ior<i32, char>, #[case] expected: (bool, bool, bool)) {
        assert_eq!((value.is_left(), value.is_right(), value.is_both()), expected);
    }

    #[rstest]
    fn flat_map_on_left_short_circuits() {
        let value: Ior<String, i32> = Ior::Left("e".to_string());
        let result = value.flat_map(concat, |n| Ior::Right(n + 1));
        assert_eq!(result, Ior::Left("e".to_string()));
    }

    #[rstest]
    #[case(Ior::Left("b".to_string()), Ior::Left("ab".to_string()))]
    #[case(Ior::Right(2), Ior::Both("a".to_string(), 2))]
    #[case(Ior::Both("b".to_string(), 2), Ior::Both("ab".to_string(), 2))]
    fn flat_map_on_both_merges_left_values(
        #[case] bound: Ior<String, i32>,
        #[case] expected: Ior<String, i32>,
    ) {
        let value: Ior<String, i32> = Ior::Both("a".to_string(), 1);
        assert_eq!(value.flat_map(concat, |_| bound), expected);
    }

    #[rstest]
    fn swap_and_pad_agree() {
        let value: Ior<i32, char> = Ior::Both(1, 'x');
        assert_eq!(value.swap(), Ior::Both('x', 1));
        assert_eq!(value.pad(), (Some(1), Some('x')));
        assert_eq!(Ior::<i32, char>::Right('x').pad(), (None, Some('x')));
    }

    #[rstest]
    fn from_either_is_injective() {
        assert_eq!(Ior::from(Either::<i32, char>::Left(1)), Ior::Left(1));
        assert_eq!(Ior::from(Either::<i32, char>::Right('x')), Ior::Right('x'));
    }

    #[rstest]
    fn display_renders_both_payloads() {
        let value: Ior<i32, &str> = Ior::Both(1, "x");
        assert_eq!(value.to_string(), "Both(1, x)");
    }
}
