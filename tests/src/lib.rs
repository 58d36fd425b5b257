//! Testing utilities for the ffcrypt library
//!
//! Shared fixtures used by the integration and property tests: a small
//! curve group whose arithmetic can be checked by hand, and deterministic
//! [`DomainParameterSource`] implementations.

use num_bigint::BigUint;

use ffcrypt_algorithms::ec::CurveGroup;
use ffcrypt_api::{DomainParameterSource, Error, Result};
use ffcrypt_params::TOY_P17;

/// The curve `y^2 = x^3 + 2x + 2` over `F_17` with base point `(5, 1)`,
/// which generates a subgroup of order 19.
pub fn toy_group() -> CurveGroup {
    CurveGroup::from_named(&TOY_P17).expect("toy curve constants are valid")
}

/// A parameter source that always hands out the same small group
/// `(p = 23, g = 5)`.
pub struct FixedSource;

impl DomainParameterSource for FixedSource {
    fn generate_prime(&mut self, _bits: u64) -> Result<BigUint> {
        Ok(BigUint::from(23u32))
    }

    fn find_primitive_root(&mut self, _p: &BigUint) -> Result<BigUint> {
        Ok(BigUint::from(5u32))
    }
}

/// A parameter source whose prime search always fails.
pub struct FailingSource;

impl DomainParameterSource for FailingSource {
    fn generate_prime(&mut self, _bits: u64) -> Result<BigUint> {
        Err(Error::Other {
            context: "failing source",
            message: "prime search exhausted its candidate budget".to_string(),
        })
    }

    fn find_primitive_root(&mut self, _p: &BigUint) -> Result<BigUint> {
        Err(Error::Other {
            context: "failing source",
            message: "no primitive root found".to_string(),
        })
    }
}
