//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! In addition to associativity, for all `a`:
//!
//! ```text
//! Self::empty().combine(a) == a
//! a.combine(Self::empty()) == a
//! ```
//!
//! `Can::None` is the identity of `Can`, which is what makes a list of
//! partial observations foldable with [`Monoid::combine_all`].
//!
//! # Examples
//!
//! ```rust
//! use lambars_can::control::Can;
//! use lambars_can::typeclass::{Monoid, Sum};
//!
//! let observations: Vec<Can<String, Sum<u32>>> = vec![
//!     Can::Right(Sum(2)),
//!     Can::None,
//!     Can::Left("recount".to_string()),
//!     Can::Right(Sum(3)),
//! ];
//! assert_eq!(
//!     Can::combine_all(observations),
//!     Can::Both("recount".to_string(), Sum(5))
//! );
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Bounded, Max, Min, Product, Sum};

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use lambars_can::typeclass::{Monoid, Semigroup};
///
/// let s = String::from("hello");
/// assert_eq!(String::empty().combine(s.clone()), s);
/// assert_eq!(s.clone().combine(String::empty()), s);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines every element of an iterator, starting from [`Monoid::empty`].
    ///
    /// Unlike [`Semigroup::reduce_all`], an empty iterator yields the
    /// identity element.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

// =============================================================================
// Numeric Wrapper Implementations
// =============================================================================

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! product_monoid {
    ($one:expr => $($ty:ty),*) => {
        $(
            impl Monoid for Product<$ty> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

product_monoid!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
product_monoid!(1.0 => f32, f64);

impl<A: Ord + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }
}

impl<A: Ord + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::MAX_VALUE)
    }
}

// =============================================================================
// Can Implementation
// =============================================================================

/// `Can::None` is the identity.
#[cfg(feature = "control")]
impl<A: Semigroup, B: Semigroup> Monoid for crate::control::Can<A, B> {
    fn empty() -> Self {
        Self::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn combine_all_on_empty_iterator_is_identity() {
        assert_eq!(String::combine_all(Vec::<String>::new()), "");
        assert_eq!(Sum::<i32>::combine_all(Vec::new()), Sum(0));
        assert_eq!(Product::<i32>::combine_all(Vec::new()), Product(1));
    }

    #[rstest]
    fn combine_all_folds_in_order() {
        let parts = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(String::combine_all(parts), "abc");
    }

    #[rstest]
    fn max_and_min_use_bounds_as_identity() {
        assert_eq!(Max::<u8>::empty(), Max(0));
        assert_eq!(Min::<u8>::empty(), Min(255));
        assert_eq!(Max::combine_all(vec![Max(3), Max(9), Max(1)]), Max(9));
    }

    #[rstest]
    fn is_empty_value_detects_identity() {
        assert!(Vec::<i32>::empty().is_empty_value());
        assert!(!Sum(1).is_empty_value());
    }

    #[cfg(feature = "control")]
    #[rstest]
    #[case(crate::control::Can::None)]
    #[case(crate::control::Can::Left("a".to_string()))]
    #[case(crate::control::Can::Right(Sum(1)))]
    #[case(crate::control::Can::Both("a".to_string(), Sum(1)))]
    fn can_none_is_a_two_sided_identity(#[case] value: crate::control::Can<String, Sum<i32>>) {
        use crate::control::Can;
        let empty = Can::<String, Sum<i32>>::empty();
        assert_eq!(empty.clone().combine(value.clone()), value);
        assert_eq!(value.clone().combine(empty), value);
    }
}
