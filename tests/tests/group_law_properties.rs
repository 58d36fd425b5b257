//! Property-based tests for the curve group law
//!
//! Exercises the abelian-group axioms on a small hand-checkable curve,
//! where every element is a multiple of the base point.

use num_bigint::BigInt;
use proptest::prelude::*;

use ffcrypt_algorithms::ec::Point;
use ffcrypt_tests::toy_group;

// The toy subgroup has order 19, so scalars in [0, 19) cover every element.
fn element(k: u32) -> Point {
    let group = toy_group();
    group
        .generator()
        .mul(&BigInt::from(k))
        .expect("scalar multiply on the toy curve")
}

proptest! {
    #[test]
    fn addition_is_closed(k1 in 0u32..19, k2 in 0u32..19) {
        let group = toy_group();
        let sum = element(k1).add(&element(k2)).unwrap();
        // The sum is k1 + k2 times the base point.
        let expected = group
            .generator()
            .mul(&BigInt::from((k1 + k2) % 19))
            .unwrap();
        prop_assert_eq!(sum, expected);
    }

    #[test]
    fn addition_commutes(k1 in 0u32..19, k2 in 0u32..19) {
        let p = element(k1);
        let q = element(k2);
        prop_assert_eq!(p.add(&q).unwrap(), q.add(&p).unwrap());
    }

    #[test]
    fn addition_associates(k1 in 0u32..19, k2 in 0u32..19, k3 in 0u32..19) {
        let p = element(k1);
        let q = element(k2);
        let r = element(k3);
        let left = p.add(&q).unwrap().add(&r).unwrap();
        let right = p.add(&q.add(&r).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn identity_is_neutral(k in 0u32..19) {
        let group = toy_group();
        let p = element(k);
        prop_assert_eq!(p.add(&group.identity()).unwrap(), p.clone());
        prop_assert_eq!(group.identity().add(&p).unwrap(), p);
    }

    #[test]
    fn negation_gives_inverse(k in 0u32..19) {
        let group = toy_group();
        let p = element(k);
        prop_assert_eq!(p.add(&p.negate()).unwrap(), group.identity());
    }

    #[test]
    fn scalar_multiplication_distributes(k1 in 0u32..19, k2 in 0u32..19) {
        let group = toy_group();
        let combined = group
            .generator()
            .mul(&BigInt::from(k1 + k2))
            .unwrap();
        let split = element(k1).add(&element(k2)).unwrap();
        prop_assert_eq!(combined, split);
    }

    #[test]
    fn scalar_multiplication_matches_repeated_addition(k in 0u32..40) {
        let group = toy_group();
        let by_mul = group.generator().mul(&BigInt::from(k)).unwrap();
        let mut by_add = group.identity();
        for _ in 0..k {
            by_add = by_add.add(group.generator()).unwrap();
        }
        prop_assert_eq!(by_mul, by_add);
    }
}
