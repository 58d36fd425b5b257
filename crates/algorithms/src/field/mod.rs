//! Modular arithmetic over a prime field
//!
//! Helpers shared by the curve group: canonical reduction of signed
//! intermediate values, modular inverse, and modular negation. Modular
//! exponentiation is `BigUint::modpow` and is used directly by callers.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Reduce a signed value into the canonical range `[0, p)`.
pub fn reduce(value: &BigInt, p: &BigUint) -> BigUint {
    let modulus = BigInt::from(p.clone());
    value
        .mod_floor(&modulus)
        .to_biguint()
        .expect("mod_floor with a positive modulus is non-negative")
}

/// Modular inverse of `a` modulo `m`, or `None` when `gcd(a, m) != 1`.
///
/// Extended Euclidean algorithm over signed integers; the caller decides
/// whether a missing inverse is an error (a non-prime modulus) or expected.
pub fn inverse(a: &BigInt, m: &BigUint) -> Option<BigUint> {
    let modulus = BigInt::from(m.clone());
    if modulus <= BigInt::one() {
        return None;
    }

    let (mut r0, mut r1) = (a.mod_floor(&modulus), modulus.clone());
    let (mut s0, mut s1) = (BigInt::one(), BigInt::zero());
    while !r1.is_zero() {
        let q = &r0 / &r1;
        let r2 = &r0 - &q * &r1;
        r0 = std::mem::replace(&mut r1, r2);
        let s2 = &s0 - &q * &s1;
        s0 = std::mem::replace(&mut s1, s2);
    }

    if !r0.is_one() {
        return None;
    }
    Some(reduce(&s0, m))
}

/// Modular negation of a canonical element: `-a mod p`.
///
/// `a` must already lie in `[0, p)`.
pub fn negate(a: &BigUint, p: &BigUint) -> BigUint {
    if a.is_zero() {
        BigUint::zero()
    } else {
        p - a
    }
}
