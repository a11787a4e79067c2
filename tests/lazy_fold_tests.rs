#![cfg(feature = "control")]
//! Tests for the folding family of `Can` and the lazy `Eval` seed.

use std::cell::Cell;

use lambars_can::control::{Can, Eval};
use rstest::rstest;

// =============================================================================
// Strict folds
// =============================================================================

#[rstest]
#[case(Can::None, 10)]
#[case(Can::Left(100), 10)]
#[case(Can::Right(5), 15)]
#[case(Can::Both(100, 5), 15)]
fn fold_left_visits_only_the_right_value(#[case] value: Can<i32, i32>, #[case] expected: i32) {
    assert_eq!(value.fold_left(10, |seed, b| seed + b), expected);
}

#[rstest]
#[case(Can::None, "")]
#[case(Can::Left('a'), "a")]
#[case(Can::Right('b'), "b")]
#[case(Can::Both('a', 'b'), "ab")]
fn bifold_left_visits_left_before_right(#[case] value: Can<char, char>, #[case] expected: &str) {
    let folded = value.bifold_left(
        String::new(),
        |mut seed, a| {
            seed.push(a);
            seed
        },
        |mut seed, b| {
            seed.push(b);
            seed
        },
    );
    assert_eq!(folded, expected);
}

// =============================================================================
// Lazy folds
// =============================================================================

#[rstest]
fn fold_right_does_not_force_an_unused_seed() {
    let forced = Cell::new(false);
    let seed = Eval::later(|| {
        forced.set(true);
        0
    });

    let value: Can<(), i32> = Can::Right(7);
    let result = value.fold_right(seed, |b, _ignored| Eval::now(b));

    assert_eq!(result.value(), 7);
    assert!(!forced.get());
}

#[rstest]
fn fold_right_on_left_returns_the_seed_untouched() {
    let value: Can<&str, i32> = Can::Left("l");
    let seed = Eval::later(|| 3);
    let result = value.fold_right(seed, |b, rest| rest.map(move |r| r + b));
    assert!(!result.is_evaluated());
    assert_eq!(result.value(), 3);
}

#[rstest]
#[case(Can::None, "|")]
#[case(Can::Left('a'), "a|")]
#[case(Can::Right('b'), "b|")]
#[case(Can::Both('a', 'b'), "ab|")]
fn bifold_right_wraps_right_inside_left(#[case] value: Can<char, char>, #[case] expected: &str) {
    let folded = value.bifold_right(
        Eval::now("|".to_string()),
        |a, rest| rest.map(move |r| format!("{a}{r}")),
        |b, rest| rest.map(move |r| format!("{b}{r}")),
    );
    assert_eq!(folded.value(), expected);
}

#[rstest]
fn bifold_right_defers_the_right_step() {
    let right_calls = Cell::new(0);
    let value: Can<i32, i32> = Can::Both(1, 2);

    let folded = value.bifold_right(
        Eval::now(0),
        |a, _rest| Eval::now(a),
        |b, rest| {
            right_calls.set(right_calls.get() + 1);
            rest.map(move |r| r + b)
        },
    );

    assert_eq!(folded.value(), 1);
    assert_eq!(right_calls.get(), 0);
}

#[rstest]
fn eval_memoises_the_first_result() {
    let calls = Cell::new(0);
    let eval = Eval::later(|| {
        calls.set(calls.get() + 1);
        "computed"
    });
    assert_eq!(*eval.force(), "computed");
    assert_eq!(*eval.force(), "computed");
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn fold_right_threads_one_seed_through_a_long_sequence() {
    let total = (0..200_000_i64)
        .map(Can::<(), i64>::Right)
        .fold(Eval::now(0_i64), |seed, value| {
            value.fold_right(seed, |b, rest| rest.map(move |r| r + b))
        });
    assert!(!total.is_evaluated());
    assert_eq!(total.value(), 19_999_900_000);
}

#[rstest]
fn bifold_right_threads_one_seed_through_a_long_sequence() {
    let folded = (0..100_000_u64)
        .map(|n| Can::Both(n, 1_u64))
        .fold(Eval::now(0_u64), |seed, value| {
            value.bifold_right(
                seed,
                |a, rest| rest.map(move |r| r + a),
                |b, rest| rest.map(move |r| r + b),
            )
        });
    assert_eq!(folded.value(), 4_999_950_000 + 100_000);
}
