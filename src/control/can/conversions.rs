//! Conversions between `Can` and its sibling types.
//!
//! Lossless projections (`pad`, `unwrap`, `swap`) are total. Projections onto
//! types without an empty case (`to_ior`, `to_either`, `to_validated`) take a
//! fallback for `Can::None`, and collapse `Both` onto its right value where
//! the target cannot hold two values.

use super::Can;
use crate::control::either::Either;
use crate::control::ior::Ior;
use crate::control::validated::Validated;

impl<A, B> Can<A, B> {
    /// Exchanges the left and right roles.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_can::control::Can;
    ///
    /// assert_eq!(Can::<i32, char>::Left(1).swap(), Can::Right(1));
    /// assert_eq!(Can::<i32, char>::Both(1, 'b').swap(), Can::Both('b', 1));
    /// ```
    #[inline]
    pub fn swap(self) -> Can<B, A> {
        match self {
            Self::None => Can::None,
            Self::Left(a) => Can::Right(a),
            Self::Right(b) => Can::Left(b),
            Self::Both(a, b) => Can::Both(b, a),
        }
    }

    /// Projects to a pair of independent options.
    ///
    /// Total and lossless: [`Can::from_options`] rebuilds the original value.
    #[inline]
    pub fn pad(self) -> (Option<A>, Option<B>) {
        match self {
            Self::None => (None, None),
            Self::Left(a) => (Some(a), None),
            Self::Right(b) => (None, Some(b)),
            Self::Both(a, b) => (Some(a), Some(b)),
        }
    }

    /// Projects to an optional [`Ior`].
    ///
    /// This is the witness of `Can<A, B> ≅ Option<Ior<A, B>>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_can::control::{Can, Ior};
    ///
    /// assert_eq!(Can::<i32, char>::None.unwrap(), None);
    /// assert_eq!(Can::<i32, char>::Both(1, 'b').unwrap(), Some(Ior::Both(1, 'b')));
    /// ```
    #[inline]
    pub fn unwrap(self) -> Option<Ior<A, B>> {
        match self {
            Self::None => None,
            Self::Left(a) => Some(Ior::Left(a)),
            Self::Right(b) => Some(Ior::Right(b)),
            Self::Both(a, b) => Some(Ior::Both(a, b)),
        }
    }

    /// Converts to an [`Ior`], using `if_none` for the empty case.
    #[inline]
    pub fn to_ior<F>(self, if_none: F) -> Ior<A, B>
    where
        F: FnOnce() -> Ior<A, B>,
    {
        self.unwrap().unwrap_or_else(if_none)
    }

    /// Converts to a [`Validated`], using `if_none` for the empty case.
    ///
    /// `Left` becomes `Invalid`. `Right` and `Both` become `Valid` with the
    /// right value; the left value of `Both` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_can::control::{Can, Validated};
    ///
    /// let both: Can<i32, &str> = Can::Both(1, "x");
    /// assert_eq!(both.to_validated(|| Validated::Invalid(0)), Validated::Valid("x"));
    ///
    /// let empty: Can<i32, &str> = Can::None;
    /// assert_eq!(empty.to_validated(|| Validated::Invalid(0)), Validated::Invalid(0));
    /// ```
    pub fn to_validated<F>(self, if_none: F) -> Validated<A, B>
    where
        F: FnOnce() -> Validated<A, B>,
    {
        match self {
            Self::None => if_none(),
            Self::Left(a) => Validated::Invalid(a),
            Self::Right(b) | Self::Both(_, b) => Validated::Valid(b),
        }
    }

    /// Converts to an [`Either`], using `if_none` for the empty case.
    ///
    /// `Both` keeps only its right value.
    pub fn to_either<F>(self, if_none: F) -> Either<A, B>
    where
        F: FnOnce() -> Either<A, B>,
    {
        match self {
            Self::None => if_none(),
            Self::Left(a) => Either::Left(a),
            Self::Right(b) | Self::Both(_, b) => Either::Right(b),
        }
    }

    /// Lifts an optional left value: `Some(a)` to `Left(a)`, `None` to `None`.
    #[inline]
    pub fn left_can(value: Option<A>) -> Self {
        value.map_or(Self::None, Self::Left)
    }

    /// Lifts an optional right value: `Some(b)` to `Right(b)`, `None` to `None`.
    #[inline]
    pub fn right_can(value: Option<B>) -> Self {
        value.map_or(Self::None, Self::Right)
    }
}

/// Lifts an `Option` into a one-sided [`Can`].
///
/// # Examples
///
/// ```rust
/// use lambars_can::control::{Can, OptionCanExt};
///
/// assert_eq!(Some(3).left_can::<&str>(), Can::Left(3));
/// assert_eq!(Some("b").right_can::<i32>(), Can::Right("b"));
/// assert_eq!(None::<i32>.left_can::<&str>(), Can::None);
/// ```
pub trait OptionCanExt<T> {
    /// `Some(a)` becomes `Left(a)`, `None` becomes `None`.
    fn left_can<B>(self) -> Can<T, B>;

    /// `Some(b)` becomes `Right(b)`, `None` becomes `None`.
    fn right_can<A>(self) -> Can<A, T>;
}

impl<T> OptionCanExt<T> for Option<T> {
    #[inline]
    fn left_can<B>(self) -> Can<T, B> {
        Can::left_can(self)
    }

    #[inline]
    fn right_can<A>(self) -> Can<A, T> {
        Can::right_can(self)
    }
}

impl<A, B> From<Ior<A, B>> for Can<A, B> {
    #[inline]
    fn from(ior: Ior<A, B>) -> Self {
        ior.fold(Self::Left, Self::Right, Self::Both)
    }
}

impl<A, B> From<Option<Ior<A, B>>> for Can<A, B> {
    #[inline]
    fn from(value: Option<Ior<A, B>>) -> Self {
        value.map_or(Self::None, Self::from)
    }
}

impl<A, B> From<Can<A, B>> for Option<Ior<A, B>> {
    #[inline]
    fn from(can: Can<A, B>) -> Self {
        can.unwrap()
    }
}

impl<A, B> From<Either<A, B>> for Can<A, B> {
    #[inline]
    fn from(either: Either<A, B>) -> Self {
        let (left, right) = either.into_options();
        Self::from_options(left, right)
    }
}

impl<A, B> From<(Option<A>, Option<B>)> for Can<A, B> {
    #[inline]
    fn from((left, right): (Option<A>, Option<B>)) -> Self {
        Self::from_options(left, right)
    }
}

impl<A, B> From<Can<A, B>> for (Option<A>, Option<B>) {
    #[inline]
    fn from(can: Can<A, B>) -> Self {
        can.pad()
    }
}
