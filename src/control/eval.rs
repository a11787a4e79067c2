//! Memoised lazy values for right folds.
//!
//! `Eval<'a, T>` holds either a value that is already known or a closure that
//! computes it on first demand. The closure runs at most once; the result is
//! cached for every later access.
//!
//! Right folds over [`Can`](super::Can) thread an `Eval` seed through the
//! fold so that the seed (and anything built on it) is only computed if the
//! caller actually asks for the result.
//!
//! # Examples
//!
//! ```rust
//! use lambars_can::control::Eval;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let seed = Eval::later(|| {
//!     calls.set(calls.get() + 1);
//!     10
//! });
//! let doubled = seed.map(|value| value * 2);
//!
//! assert_eq!(calls.get(), 0);
//! assert_eq!(*doubled.force(), 20);
//! assert_eq!(*doubled.force(), 20);
//! assert_eq!(calls.get(), 1);
//! ```

use std::any::Any;
use std::cell::{Ref, RefCell};
use std::fmt;
use std::marker::PhantomData;

type Erased = Box<dyn Any>;
type Thunk<'a> = Box<dyn FnOnce() -> Erased + 'a>;
type Continuation<'a> = Box<dyn FnOnce(Erased) -> Node<'a> + 'a>;

// Values are erased so that a chain of differently typed steps can be run
// from a single loop.
enum Node<'a> {
    Now(Erased),
    Later(Thunk<'a>),
    Bind(Box<Node<'a>>, Continuation<'a>),
}

/// A lazily evaluated, memoised value.
///
/// The lifetime `'a` bounds whatever the pending closures borrow. The value
/// type itself must be `'static`.
///
/// Evaluation runs `map`, `flat_map` and `defer` layers from a loop with an
/// explicit continuation stack, so chains of any depth can be forced.
///
/// `Eval` is single-threaded: it uses a `RefCell` internally and is not `Sync`.
pub struct Eval<'a, T> {
    // `None` once an evaluation has panicked.
    state: RefCell<Option<Node<'a>>>,
    marker: PhantomData<T>,
}

fn unerase<T: 'static>(value: Erased) -> T {
    match value.downcast::<T>() {
        Ok(value) => *value,
        Err(_) => unreachable!("Eval produced a value of an unexpected type"),
    }
}

fn poisoned<'a>() -> Node<'a> {
    Node::Later(Box::new(|| -> Erased { panic!("Eval instance has been poisoned") }))
}

fn evaluate<'a>(node: Node<'a>) -> Erased {
    let mut continuations: Vec<Continuation<'a>> = Vec::new();
    let mut current = node;
    loop {
        current = match current {
            Node::Now(value) => match continuations.pop() {
                Some(continuation) => continuation(value),
                None => return value,
            },
            Node::Later(thunk) => Node::Now(thunk()),
            Node::Bind(source, continuation) => {
                continuations.push(continuation);
                *source
            }
        };
    }
}

impl<'a, T: 'static> Eval<'a, T> {
    const fn from_node(node: Node<'a>) -> Self {
        Self {
            state: RefCell::new(Some(node)),
            marker: PhantomData,
        }
    }

    fn into_node(mut self) -> Node<'a> {
        self.state.get_mut().take().unwrap_or_else(poisoned)
    }

    /// Wraps a value that is already computed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_can::control::Eval;
    ///
    /// let eval = Eval::now(42);
    /// assert!(eval.is_evaluated());
    /// assert_eq!(eval.value(), 42);
    /// ```
    #[inline]
    pub fn now(value: T) -> Self {
        Self::from_node(Node::Now(Box::new(value)))
    }

    /// Suspends a computation until the value is first demanded.
    #[inline]
    pub fn later<F>(thunk: F) -> Self
    where
        F: FnOnce() -> T + 'a,
    {
        Self::from_node(Node::Later(Box::new(move || -> Erased { Box::new(thunk()) })))
    }

    /// Suspends the construction of another `Eval`.
    ///
    /// Nothing runs until the result is demanded; then the produced `Eval`
    /// is evaluated in turn.
    #[inline]
    pub fn defer<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Self + 'a,
    {
        Self::from_node(Node::Bind(
            Box::new(Node::Now(Box::new(()))),
            Box::new(move |_| thunk().into_node()),
        ))
    }

    /// Returns `true` once the value has been computed.
    pub fn is_evaluated(&self) -> bool {
        matches!(&*self.state.borrow(), Some(Node::Now(_)))
    }

    /// Evaluates the value if needed and borrows it.
    ///
    /// # Panics
    ///
    /// Panics if an earlier evaluation of this value panicked.
    pub fn force(&self) -> Ref<'_, T> {
        if !self.is_evaluated() {
            let mut state = self.state.borrow_mut();
            if let Some(node) = state.take() {
                *state = Some(Node::Now(evaluate(node)));
            }
        }

        Ref::map(self.state.borrow(), |state| match state {
            Some(Node::Now(value)) => value
                .downcast_ref::<T>()
                .unwrap_or_else(|| unreachable!("Eval produced a value of an unexpected type")),
            Some(_) | None => panic!("Eval instance has been poisoned"),
        })
    }

    /// Evaluates the value if needed and takes it out.
    ///
    /// # Panics
    ///
    /// Panics if an earlier evaluation of this value panicked.
    pub fn value(self) -> T {
        unerase(evaluate(self.into_node()))
    }

    /// Transforms the value lazily.
    ///
    /// Neither this value nor `function` is evaluated until the result is
    /// demanded.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Eval<'a, U>
    where
        F: FnOnce(T) -> U + 'a,
        U: 'static,
    {
        Eval::from_node(Node::Bind(
            Box::new(self.into_node()),
            Box::new(move |value| Node::Now(Box::new(function(unerase::<T>(value))))),
        ))
    }

    /// Chains a lazy computation that depends on this value.
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Eval<'a, U>
    where
        F: FnOnce(T) -> Eval<'a, U> + 'a,
        U: 'static,
    {
        Eval::from_node(Node::Bind(
            Box::new(self.into_node()),
            Box::new(move |value| function(unerase::<T>(value)).into_node()),
        ))
    }
}

impl<T> Drop for Eval<'_, T> {
    // Unevaluated chains are taken apart one layer at a time.
    fn drop(&mut self) {
        let mut pending: Vec<Node<'_>> = self.state.get_mut().take().into_iter().collect();
        while let Some(node) = pending.pop() {
            if let Node::Bind(source, _) = node {
                pending.push(*source);
            }
        }
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for Eval<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            Some(Node::Now(value)) => match value.downcast_ref::<T>() {
                Some(value) => formatter.debug_tuple("Eval").field(value).finish(),
                None => formatter.write_str("Eval(<unknown>)"),
            },
            Some(_) => formatter.write_str("Eval(<pending>)"),
            None => formatter.write_str("Eval(<poisoned>)"),
        }
    }
}

static_assertions::assert_not_impl_any!(Eval<'static, i32>: Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn later_is_not_evaluated_until_forced() {
        let calls = Cell::new(0);
        let eval = Eval::later(|| {
            calls.set(calls.get() + 1);
            "ready"
        });

        assert!(!eval.is_evaluated());
        assert_eq!(calls.get(), 0);
        assert_eq!(*eval.force(), "ready");
        assert!(eval.is_evaluated());
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn force_memoises_the_result() {
        let calls = Cell::new(0);
        let eval = Eval::later(|| {
            calls.set(calls.get() + 1);
            vec![1, 2, 3]
        });

        assert_eq!(eval.force().len(), 3);
        assert_eq!(eval.force().len(), 3);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn defer_postpones_construction() {
        let built = Cell::new(false);
        let eval = Eval::defer(|| {
            built.set(true);
            Eval::now(5)
        });

        assert!(!built.get());
        assert_eq!(eval.value(), 5);
        assert!(built.get());
    }

    #[rstest]
    fn flat_map_chains_lazily() {
        let eval = Eval::now(3).flat_map(|value| Eval::later(move || value * 7));
        assert!(!eval.is_evaluated());
        assert_eq!(eval.value(), 21);
    }

    #[rstest]
    fn debug_shows_pending_and_evaluated_states() {
        let eval = Eval::later(|| 1);
        assert_eq!(format!("{eval:?}"), "Eval(<pending>)");
        let _ = eval.force();
        assert_eq!(format!("{eval:?}"), "Eval(1)");
    }

    #[rstest]
    fn panicking_thunk_poisons_the_cell() {
        let eval: Eval<'static, i32> = Eval::later(|| panic!("boom"));
        let first = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ = eval.force();
        }));
        assert!(first.is_err());
        assert_eq!(format!("{eval:?}"), "Eval(<poisoned>)");
    }

    #[rstest]
    fn deep_map_chain_is_evaluated_iteratively() {
        let eval = (0..200_000).fold(Eval::now(0_u64), |eval, step| eval.map(move |total| total + step));
        assert_eq!(eval.value(), 19_999_900_000);
    }

    #[rstest]
    fn deep_defer_chain_is_evaluated_iteratively() {
        fn count_down(n: u32) -> Eval<'static, u32> {
            if n == 0 {
                Eval::now(0)
            } else {
                Eval::defer(move || count_down(n - 1)).map(|depth| depth + 1)
            }
        }
        assert_eq!(*count_down(100_000).force(), 100_000);
    }

    #[rstest]
    fn deep_unevaluated_chain_drops_without_forcing() {
        let calls = Cell::new(0);
        let eval = (0..200_000).fold(
            Eval::later(|| {
                calls.set(calls.get() + 1);
                0_u32
            }),
            |eval, _| eval.flat_map(|n| Eval::now(n + 1)),
        );
        drop(eval);
        assert_eq!(calls.get(), 0);
    }
}
