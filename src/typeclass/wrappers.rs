//! Newtype wrappers that pick a `Semigroup`/`Monoid` for a numeric type.
//!
//! The same number can be combined by addition ([`Sum`]), multiplication
//! ([`Product`]), or by keeping the larger ([`Max`]) or smaller ([`Min`])
//! value. [`Bounded`] supplies the identities `Max` and `Min` need to be
//! monoids.
//!
//! These wrappers are convenient left types for `Can` and `Ior`: a
//! `Can<Sum<u32>, T>` counts the warnings gathered along a chain of binds.

macro_rules! newtype_wrapper {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name<A>(pub A);

        impl<A> $name<A> {
            /// Wraps `value`.
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            /// Consumes the wrapper and returns the inner value.
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }

            /// Borrows the inner value.
            #[inline]
            pub const fn as_inner(&self) -> &A {
                &self.0
            }
        }

        impl<A> From<A> for $name<A> {
            fn from(value: A) -> Self {
                Self::new(value)
            }
        }
    };
}

newtype_wrapper!(
    /// Combines by addition; the identity is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_can::typeclass::{Monoid, Semigroup, Sum};
    ///
    /// assert_eq!(Sum::new(3).combine(Sum::new(5)), Sum::new(8));
    /// assert_eq!(Sum::<i32>::empty(), Sum::new(0));
    /// ```
    Sum
);

newtype_wrapper!(
    /// Combines by multiplication; the identity is one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_can::typeclass::{Monoid, Product, Semigroup};
    ///
    /// assert_eq!(Product::new(3).combine(Product::new(5)), Product::new(15));
    /// assert_eq!(Product::<i32>::empty(), Product::new(1));
    /// ```
    Product
);

newtype_wrapper!(
    /// Keeps the larger value; the identity is [`Bounded::MIN_VALUE`].
    Max
);

newtype_wrapper!(
    /// Keeps the smaller value; the identity is [`Bounded::MAX_VALUE`].
    Min
);

impl<A: Default> Default for Sum<A> {
    fn default() -> Self {
        Self(A::default())
    }
}

// =============================================================================
// Bounded Trait
// =============================================================================

/// Types with a smallest and a largest value.
///
/// # Examples
///
/// ```rust
/// use lambars_can::typeclass::Bounded;
///
/// assert_eq!(<u8 as Bounded>::MIN_VALUE, 0);
/// assert_eq!(<u8 as Bounded>::MAX_VALUE, 255);
/// ```
pub trait Bounded {
    /// The smallest value of the type.
    const MIN_VALUE: Self;
    /// The largest value of the type.
    const MAX_VALUE: Self;
}

macro_rules! bounded_by_consts {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Bounded for $ty {
                const MIN_VALUE: Self = <$ty>::MIN;
                const MAX_VALUE: Self = <$ty>::MAX;
            }
        )*
    };
}

bounded_by_consts!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char);

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}
