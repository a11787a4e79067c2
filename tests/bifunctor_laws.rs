#![cfg(all(feature = "typeclass", feature = "control"))]
//! Property-based tests for Bifunctor laws.
//!
//! - **Identity Law**: `bf.bimap(|x| x, |y| y) == bf`
//! - **Composition Law**: `bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)`
//! - **first/second Consistency Law**: `bf.bimap(f, g) == bf.first(f).second(g)`

use lambars_can::control::{Can, Ior, Validated};
use lambars_can::typeclass::Bifunctor;
use proptest::prelude::*;

fn can_strategy() -> impl Strategy<Value = Can<i32, String>> {
    prop_oneof![
        Just(Can::None),
        any::<i32>().prop_map(Can::Left),
        any::<String>().prop_map(Can::Right),
        (any::<i32>(), any::<String>()).prop_map(|(a, b)| Can::Both(a, b)),
    ]
}

fn ior_strategy() -> impl Strategy<Value = Ior<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Ior::Left),
        any::<String>().prop_map(Ior::Right),
        (any::<i32>(), any::<String>()).prop_map(|(a, b)| Ior::Both(a, b)),
    ]
}

fn validated_strategy() -> impl Strategy<Value = Validated<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Validated::Invalid),
        any::<String>().prop_map(Validated::Valid),
    ]
}

proptest! {
    #[test]
    fn prop_can_identity_law(value in can_strategy()) {
        prop_assert_eq!(Bifunctor::bimap(value.clone(), |x| x, |y| y), value);
    }

    #[test]
    fn prop_can_composition_law(value in can_strategy()) {
        let f1 = |x: i32| x.wrapping_add(1);
        let f2 = |x: i32| x.wrapping_mul(2);
        let g1 = |s: String| s.len();
        let g2 = |n: usize| n.wrapping_add(10);

        let left = Bifunctor::bimap(value.clone(), |x| f2(f1(x)), |s| g2(g1(s)));
        let right = Bifunctor::bimap(Bifunctor::bimap(value, f1, g1), f2, g2);

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_can_first_second_consistency(value in can_strategy()) {
        let f = |x: i32| x.wrapping_mul(2);
        let g = |s: String| s.len();

        let by_bimap = Bifunctor::bimap(value.clone(), f, g);
        let by_first_second = value.clone().first(f).second(g);
        let by_second_first = value.second(g).first(f);

        prop_assert_eq!(by_bimap.clone(), by_first_second);
        prop_assert_eq!(by_bimap, by_second_first);
    }

    #[test]
    fn prop_can_bimap_ref_agrees_with_bimap(value in can_strategy()) {
        let by_ref = value.bimap_ref(|x| x.wrapping_sub(3), String::len);
        let by_value = Bifunctor::bimap(value, |x| x.wrapping_sub(3), |s| s.len());
        prop_assert_eq!(by_ref, by_value);
    }

    #[test]
    fn prop_can_swap_commutes_with_bimap(value in can_strategy()) {
        let f = |x: i32| x.wrapping_add(7);
        let g = |s: String| s.len();
        let swapped_then_mapped = value.clone().swap().bimap(g, f);
        let mapped_then_swapped = value.bimap(f, g).swap();
        prop_assert_eq!(swapped_then_mapped, mapped_then_swapped);
    }

    #[test]
    fn prop_ior_identity_law(value in ior_strategy()) {
        prop_assert_eq!(Bifunctor::bimap(value.clone(), |x| x, |y| y), value);
    }

    #[test]
    fn prop_ior_first_second_consistency(value in ior_strategy()) {
        let f = |x: i32| x.wrapping_mul(2);
        let g = |s: String| s.len();
        prop_assert_eq!(Bifunctor::bimap(value.clone(), f, g), value.first(f).second(g));
    }

    #[test]
    fn prop_validated_identity_law(value in validated_strategy()) {
        prop_assert_eq!(Bifunctor::bimap(value.clone(), |x| x, |y| y), value);
    }

    #[test]
    fn prop_validated_first_second_consistency(value in validated_strategy()) {
        let f = |x: i32| x.wrapping_mul(2);
        let g = |s: String| s.len();
        prop_assert_eq!(Bifunctor::bimap(value.clone(), f, g), value.first(f).second(g));
    }

    #[test]
    fn prop_result_identity_law(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        prop_assert_eq!(value.clone().bimap(|e| e, |x| x), value);
    }
}
