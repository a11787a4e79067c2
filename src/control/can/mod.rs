//! Can type - nothing, a left value, a right value, or both.
//!
//! `Can<A, B>` extends [`Ior`](super::Ior) with an empty case, so that it
//! can describe the alignment of two independent optional values:
//!
//! | Variant | Left present | Right present |
//! |---|---|---|
//! | `None` | no | no |
//! | `Left(a)` | yes | no |
//! | `Right(b)` | no | yes |
//! | `Both(a, b)` | yes | yes |
//!
//! Every operation is total and right-biased: `map`, `flat_map` and the
//! right folds work on the right value, and the left value rides along
//! (or is merged, when binding through `Both`).
//!
//! # Examples
//!
//! ```rust
//! use lambars_can::control::Can;
//!
//! let value: Can<&str, i32> = Can::Both("note", 20);
//!
//! assert_eq!(value.map(|n| n + 1), Can::Both("note", 21));
//! assert_eq!(value.filter(|n| *n > 100), Can::Left("note"));
//! assert_eq!(value.swap(), Can::Both(20, "note"));
//! assert_eq!(value.pad(), (Some("note"), Some(20)));
//! ```

mod conversions;
mod recursion;

use std::fmt;

use super::eval::Eval;

pub use conversions::OptionCanExt;

/// A value that holds nothing, a left value, a right value, or both.
///
/// See the [module documentation](self) for an overview.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Can<A, B> {
    /// Neither value is present.
    None,
    /// Only a left value is present.
    Left(A),
    /// Only a right value is present.
    Right(B),
    /// Both values are present.
    Both(A, B),
}

impl<A, B> Default for Can<A, B> {
    /// Returns `Can::None`.
    fn default() -> Self {
        Self::None
    }
}

// =============================================================================
// Construction & Classification
// =============================================================================

impl<A, B> Can<A, B> {
    /// Creates an empty `Can`.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Creates a `Can` holding only a left value.
    #[inline]
    pub const fn left(value: A) -> Self {
        Self::Left(value)
    }

    /// Creates a `Can` holding only a right value.
    #[inline]
    pub const fn right(value: B) -> Self {
        Self::Right(value)
    }

    /// Creates a `Can` holding both values.
    #[inline]
    pub const fn both(left: A, right: B) -> Self {
        Self::Both(left, right)
    }

    /// Builds a `Can` from two possibly absent values.
    ///
    /// Each argument may be a bare value or an `Option`. The result is `Both`
    /// when both are present, `Right` when only the right one is, `Left` when
    /// only the left one is, and `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_can::control::Can;
    ///
    /// type Pair = Can<&'static str, &'static str>;
    ///
    /// assert_eq!(Pair::from_nullables("a", "b"), Can::Both("a", "b"));
    /// assert_eq!(Pair::from_nullables(None, "b"), Can::Right("b"));
    /// assert_eq!(Pair::from_nullables("a", None), Can::Left("a"));
    /// assert_eq!(Pair::from_nullables(None, None), Can::None);
    /// ```
    ///
    /// An `Option` argument is itself a bare value of type `Option<_>`, so
    /// the payload types must be known at the call site.
    pub fn from_nullables(left: impl Into<Option<A>>, right: impl Into<Option<B>>) -> Self {
        match (left.into(), right.into()) {
            (Some(a), Some(b)) => Self::Both(a, b),
            (_, Some(b)) => Self::Right(b),
            (Some(a), _) => Self::Left(a),
            (None, None) => Self::None,
        }
    }

    /// Builds a `Can` from two options.
    ///
    /// Same result as [`Can::from_nullables`].
    #[inline]
    pub fn from_options(left: Option<A>, right: Option<B>) -> Self {
        Self::from_nullables(left, right)
    }

    /// Returns `true` for `None`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::None)
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

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Borrows the left value of `Left` or `Both`.
    #[inline]
    pub const fn left_value(&self) -> Option<&A> {
        match self {
            Self::Left(a) | Self::Both(a, _) => Some(a),
            Self::None | Self::Right(_) => None,
        }
    }

    /// Borrows the right value of `Right` or `Both`.
    #[inline]
    pub const fn right_value(&self) -> Option<&B> {
        match self {
            Self::Right(b) | Self::Both(_, b) => Some(b),
            Self::None | Self::Left(_) => None,
        }
    }

    /// Consumes the `Can`, returning the left value if present.
    #[inline]
    pub fn into_left(self) -> Option<A> {
        self.pad().0
    }

    /// Consumes the `Can`, returning the right value if present.
    #[inline]
    pub fn into_right(self) -> Option<B> {
        self.pad().1
    }

    /// Borrows both payloads, producing a `Can` of references.
    #[inline]
    pub const fn as_ref(&self) -> Can<&A, &B> {
        match self {
            Self::None => Can::None,
            Self::Left(a) => Can::Left(a),
            Self::Right(b) => Can::Right(b),
            Self::Both(a, b) => Can::Both(a, b),
        }
    }

    /// Returns the right value, or computes a fallback.
    #[inline]
    pub fn get_or_else<F>(self, default: F) -> B
    where
        F: FnOnce() -> B,
    {
        self.into_right().unwrap_or_else(default)
    }

    /// Returns `true` if a right value is present and satisfies `predicate`.
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&B) -> bool,
    {
        self.right_value().is_some_and(predicate)
    }

    /// Returns `true` if no right value is present or it satisfies `predicate`.
    #[inline]
    pub fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&B) -> bool,
    {
        self.right_value().is_none_or(predicate)
    }

    /// Returns `true` if the right value equals `element`.
    #[inline]
    pub fn contains(&self, element: &B) -> bool
    where
        B: PartialEq,
    {
        self.exists(|value| value == element)
    }

    // =========================================================================
    // Structural Elimination
    // =========================================================================

    /// Eliminates the `Can`, running exactly one of the four functions.
    ///
    /// Every other operation on `Can` can be written in terms of `fold`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_can::control::Can;
    ///
    /// let describe = |value: Can<i32, &str>| {
    ///     value.fold(
    ///         || "nothing".to_string(),
    ///         |a| format!("left {a}"),
    ///         |b| format!("right {b}"),
    ///         |a, b| format!("both {a} {b}"),
    ///     )
    /// };
    ///
    /// assert_eq!(describe(Can::None), "nothing");
    /// assert_eq!(describe(Can::Left(1)), "left 1");
    /// assert_eq!(describe(Can::Right("x")), "right x");
    /// assert_eq!(describe(Can::Both(1, "x")), "both 1 x");
    /// ```
    #[inline]
    pub fn fold<C, N, L, R, T>(self, if_none: N, if_left: L, if_right: R, if_both: T) -> C
    where
        N: FnOnce() -> C,
        L: FnOnce(A) -> C,
        R: FnOnce(B) -> C,
        T: FnOnce(A, B) -> C,
    {
        match self {
            Self::None => if_none(),
            Self::Left(a) => if_left(a),
            Self::Right(b) => if_right(b),
            Self::Both(a, b) => if_both(a, b),
        }
    }

    /// Eliminates a borrowed `Can` without consuming it.
    #[inline]
    pub fn fold_ref<C, N, L, R, T>(&self, if_none: N, if_left: L, if_right: R, if_both: T) -> C
    where
        N: FnOnce() -> C,
        L: FnOnce(&A) -> C,
        R: FnOnce(&B) -> C,
        T: FnOnce(&A, &B) -> C,
    {
        self.as_ref().fold(if_none, if_left, if_right, if_both)
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Transforms the right value of `Right` or `Both`.
    #[inline]
    pub fn map<C, F>(self, function: F) -> Can<A, C>
    where
        F: FnOnce(B) -> C,
    {
        match self {
            Self::None => Can::None,
            Self::Left(a) => Can::Left(a),
            Self::Right(b) => Can::Right(function(b)),
            Self::Both(a, b) => Can::Both(a, function(b)),
        }
    }

    /// Transforms the left value of `Left` or `Both`.
    #[inline]
    pub fn map_left<C, F>(self, function: F) -> Can<C, B>
    where
        F: FnOnce(A) -> C,
    {
        match self {
            Self::None => Can::None,
            Self::Left(a) => Can::Left(function(a)),
            Self::Right(b) => Can::Right(b),
            Self::Both(a, b) => Can::Both(function(a), b),
        }
    }

    /// Transforms both values in a single pass.
    ///
    /// Equivalent to `map_left(left_function).map(right_function)`.
    #[inline]
    pub fn bimap<C, D, F, G>(self, left_function: F, right_function: G) -> Can<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        match self {
            Self::None => Can::None,
            Self::Left(a) => Can::Left(left_function(a)),
            Self::Right(b) => Can::Right(right_function(b)),
            Self::Both(a, b) => Can::Both(left_function(a), right_function(b)),
        }
    }

    /// Transforms the right value, dropping it when `function` returns `None`.
    ///
    /// The left value is kept, so `Both(a, b)` degrades to `Left(a)` and
    /// `Right(b)` degrades to `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_can::control::Can;
    ///
    /// let parse = |text: &str| text.parse::<i32>().ok();
    ///
    /// assert_eq!(Can::<char, &str>::Both('a', "7").map_not_null(parse), Can::Both('a', 7));
    /// assert_eq!(Can::<char, &str>::Both('a', "x").map_not_null(parse), Can::Left('a'));
    /// assert_eq!(Can::<char, &str>::Right("x").map_not_null(parse), Can::None);
    /// ```
    #[inline]
    pub fn map_not_null<C, F>(self, function: F) -> Can<A, C>
    where
        F: FnOnce(B) -> Option<C>,
    {
        let (left, right) = self.pad();
        Can::from_options(left, right.and_then(function))
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Keeps the right value only if it satisfies `predicate`.
    ///
    /// The left value is never touched.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&B) -> bool,
    {
        let (left, right) = self.pad();
        Self::from_options(left, right.filter(predicate))
    }

    /// Keeps the right value only if it does not satisfy `predicate`.
    #[inline]
    pub fn filter_not<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&B) -> bool,
    {
        self.filter(|value| !predicate(value))
    }

    /// Keeps the left value only if it satisfies `predicate`.
    ///
    /// The right value is never touched.
    #[inline]
    pub fn filter_left<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        let (left, right) = self.pad();
        Self::from_options(left.filter(predicate), right)
    }

    /// Keeps the left value only if it does not satisfy `predicate`.
    #[inline]
    pub fn filter_not_left<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        self.filter_left(|value| !predicate(value))
    }

    // =========================================================================
    // Folding
    // =========================================================================

    /// Folds the right value into `seed`.
    ///
    /// `None` and `Left` return `seed` unchanged.
    #[inline]
    pub fn fold_left<C, F>(self, seed: C, function: F) -> C
    where
        F: FnOnce(C, B) -> C,
    {
        match self.into_right() {
            Some(b) => function(seed, b),
            None => seed,
        }
    }

    /// Folds the right value into a lazy seed.
    ///
    /// The seed is handed to `function` unevaluated; whether it is ever
    /// forced is up to `function` and the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_can::control::{Can, Eval};
    ///
    /// let value: Can<(), i32> = Can::Right(2);
    /// let total = value.fold_right(Eval::later(|| 40), |b, rest| rest.map(move |r| r + b));
    /// assert_eq!(total.value(), 42);
    /// ```
    #[inline]
    pub fn fold_right<'a, C, F>(self, seed: Eval<'a, C>, function: F) -> Eval<'a, C>
    where
        F: FnOnce(B, Eval<'a, C>) -> Eval<'a, C>,
    {
        match self.into_right() {
            Some(b) => function(b, seed),
            None => seed,
        }
    }

    /// Folds the left value, then the right value, into `seed`.
    #[inline]
    pub fn bifold_left<C, F, G>(self, seed: C, left_function: F, right_function: G) -> C
    where
        F: FnOnce(C, A) -> C,
        G: FnOnce(C, B) -> C,
    {
        match self {
            Self::None => seed,
            Self::Left(a) => left_function(seed, a),
            Self::Right(b) => right_function(seed, b),
            Self::Both(a, b) => right_function(left_function(seed, a), b),
        }
    }

    /// Folds right to left into a lazy seed.
    ///
    /// For `Both(a, b)` the right value is combined with the seed first and
    /// the left value wraps the (still unevaluated) result.
    pub fn bifold_right<'a, C, F, G>(
        self,
        seed: Eval<'a, C>,
        left_function: F,
        right_function: G,
    ) -> Eval<'a, C>
    where
        F: FnOnce(A, Eval<'a, C>) -> Eval<'a, C>,
        G: FnOnce(B, Eval<'a, C>) -> Eval<'a, C> + 'a,
        B: 'a,
        C: 'static,
    {
        match self {
            Self::None => seed,
            Self::Left(a) => left_function(a, seed),
            Self::Right(b) => right_function(b, seed),
            Self::Both(a, b) => left_function(a, Eval::defer(move || right_function(b, seed))),
        }
    }

    // =========================================================================
    // Monadic Binding
    // =========================================================================

    /// Binds the right value, merging left values with `combine`.
    ///
    /// `None` and `Left` short-circuit; `Right(b)` becomes `function(b)`.
    /// For `Both(a, b)` the result of `function(b)` is resolved as follows:
    ///
    /// | `function(b)` | result |
    /// |---|---|
    /// | `None` | `None` |
    /// | `Left(a2)` | `Left(combine(a, a2))` |
    /// | `Right(c)` | `Both(a, c)` |
    /// | `Both(a2, c)` | `Both(combine(a, a2), c)` |
    ///
    /// `combine` should be associative for the monad laws to hold.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_can::control::Can;
    ///
    /// let value: Can<i32, &str> = Can::Both(1, "x");
    /// assert_eq!(value.flat_map(|a, b| a + b, |_| Can::<i32, &str>::Left(2)), Can::Left(3));
    /// ```
    pub fn flat_map<C, M, F>(self, combine: M, function: F) -> Can<A, C>
    where
        M: FnOnce(A, A) -> A,
        F: FnOnce(B) -> Can<A, C>,
    {
        match self {
            Self::None => Can::None,
            Self::Left(a) => Can::Left(a),
            Self::Right(b) => function(b),
            Self::Both(a, b) => match function(b) {
                Can::None => Can::None,
                Can::Left(other) => Can::Left(combine(a, other)),
                Can::Right(c) => Can::Both(a, c),
                Can::Both(other, c) => Can::Both(combine(a, other), c),
            },
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Renders the value with explicit renderers for each payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_can::control::Can;
    ///
    /// let value: Can<i32, Vec<u8>> = Can::Both(7, vec![1, 2]);
    /// let shown = value.show(|a| format!("#{a}"), |b| format!("{} bytes", b.len()));
    /// assert_eq!(shown, "Both(#7, 2 bytes)");
    /// ```
    pub fn show<L, R>(&self, render_left: L, render_right: R) -> String
    where
        L: FnOnce(&A) -> String,
        R: FnOnce(&B) -> String,
    {
        match self {
            Self::None => "None".to_string(),
            Self::Left(a) => format!("Left({})", render_left(a)),
            Self::Right(b) => format!("Right({})", render_right(b)),
            Self::Both(a, b) => format!("Both({}, {})", render_left(a), render_right(b)),
        }
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Can<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => formatter.write_str("None"),
            Self::Left(a) => write!(formatter, "Left({a})"),
            Self::Right(b) => write!(formatter, "Right({b})"),
            Self::Both(a, b) => write!(formatter, "Both({a}, {b})"),
        }
    }
}

static_assertions::assert_impl_all!(Can<i32, String>: Send, Sync, Clone);
