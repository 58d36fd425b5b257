//! Trait definition for domain-parameter collaborators
//!
//! Prime generation and primitive-root search are slow, externally provided
//! operations. This library only consumes them; implementations live with
//! the caller, which also owns any retry or timeout policy.

use crate::Result;
use num_bigint::BigUint;

/// Supplier of Diffie-Hellman domain parameters.
///
/// A call may block for a long time (prime search); this layer imposes no
/// cancellation contract. Failures surface to the caller unretried.
pub trait DomainParameterSource {
    /// Produce a prime of the requested bit size.
    fn generate_prime(&mut self, bits: u64) -> Result<BigUint>;

    /// Find a primitive root modulo `p`, i.e. a generator of the full
    /// multiplicative group.
    fn find_primitive_root(&mut self, p: &BigUint) -> Result<BigUint>;
}
