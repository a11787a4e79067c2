//! Stack-safe monadic recursion for `Can`.

use super::Can;
use crate::control::either::Either;

impl<A, B> Can<A, B> {
    /// Runs `step` repeatedly until it produces a final right value.
    ///
    /// Each step returns a `Can<A, Either<S, B>>`. A right value of
    /// `Either::Left(seed)` asks for another step with `seed`; `Either::Right(b)`
    /// finishes. Left values met along the way are merged with `combine`
    /// exactly as [`Can::flat_map`] would merge them, and a step that yields
    /// `None` or `Left` ends the recursion right there.
    ///
    /// The recursion runs as a loop, so the number of steps is not limited by
    /// the call stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_can::control::{Can, Either};
    ///
    /// // Counts to three, leaving a note at every step.
    /// let result: Can<String, u32> = Can::tail_rec_m(
    ///     0,
    ///     |mut first, second: String| { first.push_str(&second); first },
    ///     |n: u32| {
    ///         if n < 3 {
    ///             Can::Both(n.to_string(), Either::Left(n + 1))
    ///         } else {
    ///             Can::Right(Either::Right(n))
    ///         }
    ///     },
    /// );
    /// assert_eq!(result, Can::Both("012".to_string(), 3));
    /// ```
    pub fn tail_rec_m<S, M, F>(seed: S, mut combine: M, mut step: F) -> Self
    where
        M: FnMut(A, A) -> A,
        F: FnMut(S) -> Can<A, Either<S, B>>,
    {
        let mut current = step(seed);
        loop {
            current = match current {
                Can::None => return Self::None,
                Can::Left(a) => return Self::Left(a),
                Can::Right(Either::Right(b)) => return Self::Right(b),
                Can::Both(a, Either::Right(b)) => return Self::Both(a, b),
                Can::Right(Either::Left(next)) => step(next),
                Can::Both(accumulated, Either::Left(next)) => match step(next) {
                    Can::None => return Self::None,
                    Can::Left(other) => return Self::Left(combine(accumulated, other)),
                    Can::Right(resume) => Can::Both(accumulated, resume),
                    Can::Both(other, resume) => Can::Both(combine(accumulated, other), resume),
                },
            };
        }
    }
}
