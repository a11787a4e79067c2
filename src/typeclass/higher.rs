//! Higher-kinded type emulation through Generic Associated Types.

/// A type that abstracts over its "inner" type.
///
/// `Inner` is the type the container holds, and `WithType<B>` is the same
/// container holding `B` instead. For two-parameter types the first
/// parameter stays fixed:
///
/// - `Option<A>::WithType<B>` is `Option<B>`
/// - `Result<T, E>::WithType<B>` is `Result<B, E>`
/// - `Can<A, T>::WithType<B>` is `Can<A, B>`
///
/// # Examples
///
/// ```rust
/// use lambars_can::control::Can;
/// use lambars_can::typeclass::TypeConstructor;
///
/// fn assert_inner<T: TypeConstructor<Inner = char>>() {}
/// assert_inner::<Can<i32, char>>();
/// ```
pub trait TypeConstructor {
    /// The type of the value held by the container.
    type Inner;

    /// The same container holding `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

// =============================================================================
// Can Family Implementations
// =============================================================================

#[cfg(feature = "control")]
mod control_instances {
    use super::TypeConstructor;
    use crate::control::{Can, Either, Ior, Validated};

    impl<A, T> TypeConstructor for Can<A, T> {
        type Inner = T;
        type WithType<B> = Can<A, B>;
    }

    impl<A, T> TypeConstructor for Ior<A, T> {
        type Inner = T;
        type WithType<B> = Ior<A, B>;
    }

    impl<E, T> TypeConstructor for Validated<E, T> {
        type Inner = T;
        type WithType<B> = Validated<E, B>;
    }

    impl<L, T> TypeConstructor for Either<L, T> {
        type Inner = T;
        type WithType<B> = Either<L, B>;
    }
}
