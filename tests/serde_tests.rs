#![cfg(all(feature = "serde", feature = "control"))]

//! Integration tests for serde support.
//!
//! Every sum type serializes with serde's externally tagged enum layout, so
//! `Can::Both(1, "x")` becomes `{"Both":[1,"x"]}` and `Can::None` becomes
//! the bare string `"None"`.

use lambars_can::control::{Can, Either, Ior, Validated};
use lambars_can::typeclass::Sum;
use rstest::rstest;

// =============================================================================
// Can
// =============================================================================

#[rstest]
#[case(Can::None, r#""None""#)]
#[case(Can::Left(1), r#"{"Left":1}"#)]
#[case(Can::Right("x".to_string()), r#"{"Right":"x"}"#)]
#[case(Can::Both(1, "x".to_string()), r#"{"Both":[1,"x"]}"#)]
fn can_uses_externally_tagged_layout(#[case] value: Can<i32, String>, #[case] expected: &str) {
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, expected);

    let restored: Can<i32, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, value);
}

#[rstest]
fn can_rejects_unknown_variants() {
    let result = serde_json::from_str::<Can<i32, String>>(r#"{"Neither":1}"#);
    assert!(result.is_err());
}

#[rstest]
fn can_nested_in_collections() {
    let values: Vec<Can<String, Sum<u32>>> = vec![
        Can::Right(Sum(1)),
        Can::Both("late".to_string(), Sum(2)),
    ];
    let json = serde_json::to_string(&values).unwrap();
    assert_eq!(json, r#"[{"Right":1},{"Both":["late",2]}]"#);

    let restored: Vec<Can<String, Sum<u32>>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, values);
}

// =============================================================================
// Siblings
// =============================================================================

#[rstest]
fn ior_json_roundtrip() {
    let value: Ior<String, i32> = Ior::Both("warning".to_string(), 3);
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, r#"{"Both":["warning",3]}"#);

    let restored: Ior<String, i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, value);
}

#[rstest]
fn validated_json_roundtrip() {
    let invalid: Validated<Vec<String>, i32> = Validated::Invalid(vec!["empty".to_string()]);
    let json = serde_json::to_string(&invalid).unwrap();
    assert_eq!(json, r#"{"Invalid":["empty"]}"#);

    let restored: Validated<Vec<String>, i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, invalid);
}

#[rstest]
fn either_json_roundtrip() {
    let left: Either<String, i32> = Either::Left("error".to_string());
    let right: Either<String, i32> = Either::Right(42);

    let left_json = serde_json::to_string(&left).unwrap();
    let right_json = serde_json::to_string(&right).unwrap();

    assert_eq!(serde_json::from_str::<Either<String, i32>>(&left_json).unwrap(), left);
    assert_eq!(serde_json::from_str::<Either<String, i32>>(&right_json).unwrap(), right);
}
