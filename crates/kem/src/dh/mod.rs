//! Classic Diffie-Hellman key agreement over the multiplicative group of a
//! prime field
//!
//! Both parties share public domain parameters `(p, g)`, generate an
//! ephemeral keypair `(a, g^a mod p)`, exchange public values, and converge
//! on `g^(a*b) mod p` by commutativity of modular exponentiation. Prime and
//! primitive-root generation are delegated to a [`DomainParameterSource`]
//! collaborator.

use std::fmt;

use num_bigint::{BigUint, RandBigInt};
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::Error as KemError;
use ffcrypt_api::{
    DomainParameterSource, Error as ApiError, KeyAgreement, Result as ApiResult,
};
use ffcrypt_params::dh::{DH_MODP_2048_PRIME, DH_RFC3526_GENERATOR};

/// Classic Diffie-Hellman key agreement
pub struct DiffieHellman;

/// Public Diffie-Hellman domain parameters `(p, g)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DhParameters {
    p: BigUint,
    g: BigUint,
}

/// Public key `g^a mod p`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DhPublicKey(BigUint);

/// Secret exponent
#[derive(Clone)]
pub struct DhSecretKey(BigUint);

/// Shared secret `g^(a*b) mod p`
#[derive(Clone)]
pub struct DhSharedSecret(BigUint);

/// An ephemeral keypair under fixed domain parameters
#[derive(Clone)]
pub struct DhKeyPair {
    public: DhPublicKey,
    secret: DhSecretKey,
}

impl DhParameters {
    /// Create parameters from an externally validated prime and generator.
    pub fn new(p: BigUint, g: BigUint) -> ApiResult<Self> {
        if p < BigUint::from(5u32) {
            return Err(ApiError::from(KemError::InvalidParameter {
                name: "p",
                reason: "modulus must be at least 5",
            }));
        }
        if g <= BigUint::from(1u32) || g >= p {
            return Err(ApiError::from(KemError::InvalidParameter {
                name: "g",
                reason: "generator must lie strictly between 1 and p",
            }));
        }
        Ok(DhParameters { p, g })
    }

    /// Generate fresh parameters through a domain-parameter collaborator:
    /// a prime of `bits` bits, then a primitive root modulo that prime.
    ///
    /// Collaborator failures surface unretried; retry policy belongs to the
    /// collaborator.
    pub fn generate<S: DomainParameterSource>(source: &mut S, bits: u64) -> ApiResult<Self> {
        let p = source.generate_prime(bits).map_err(|e| {
            ApiError::from(KemError::ParameterGeneration {
                step: "prime generation",
                details: e.to_string(),
            })
        })?;
        let g = source.find_primitive_root(&p).map_err(|e| {
            ApiError::from(KemError::ParameterGeneration {
                step: "primitive root search",
                details: e.to_string(),
            })
        })?;
        Self::new(p, g)
    }

    /// The RFC 3526 MODP Group 14 parameters (2048-bit modulus, generator 2).
    pub fn modp_2048() -> Self {
        let p = BigUint::parse_bytes(DH_MODP_2048_PRIME.as_bytes(), 16)
            .expect("RFC 3526 constant must be valid hex");
        DhParameters {
            p,
            g: BigUint::from(DH_RFC3526_GENERATOR),
        }
    }

    /// The prime modulus `p`.
    pub fn prime(&self) -> &BigUint {
        &self.p
    }

    /// The generator `g`.
    pub fn generator(&self) -> &BigUint {
        &self.g
    }
}

impl DhPublicKey {
    /// Wrap a public value received from a peer.
    pub fn new(value: BigUint) -> Self {
        DhPublicKey(value)
    }

    /// The public value as an integer.
    pub fn as_uint(&self) -> &BigUint {
        &self.0
    }

    /// Export the public value as big-endian bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_bytes_be()
    }
}

impl DhSecretKey {
    /// Wrap a secret exponent.
    pub fn new(value: BigUint) -> Self {
        DhSecretKey(value)
    }

    /// The secret exponent as an integer (internal use only).
    pub(crate) fn as_uint(&self) -> &BigUint {
        &self.0
    }

    /// Export the secret exponent as big-endian bytes with zeroization.
    pub fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.to_bytes_be())
    }
}

// Redacted Debug so secrets never reach log output
impl fmt::Debug for DhSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DhSecretKey(<redacted>)")
    }
}

impl Zeroize for DhSecretKey {
    fn zeroize(&mut self) {
        // BigUint offers no in-place scrub; dropping the limbs is the best
        // available hygiene.
        self.0.set_zero();
    }
}

impl Drop for DhSecretKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for DhSecretKey {}

impl DhSharedSecret {
    /// The shared secret as an integer.
    pub fn as_uint(&self) -> &BigUint {
        &self.0
    }

    /// Export the shared secret as big-endian bytes with zeroization.
    ///
    /// Feed this into a KDF; do not use the raw value as a session key.
    pub fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.to_bytes_be())
    }
}

impl fmt::Debug for DhSharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DhSharedSecret(<redacted>)")
    }
}

impl PartialEq for DhSharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.0
            .to_bytes_be()
            .ct_eq(&other.0.to_bytes_be())
            .into()
    }
}

impl Eq for DhSharedSecret {}

impl Zeroize for DhSharedSecret {
    fn zeroize(&mut self) {
        self.0.set_zero();
    }
}

impl Drop for DhSharedSecret {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for DhSharedSecret {}

impl DhKeyPair {
    /// Derive the keypair fixed by an existing secret exponent:
    /// `public = g^secret mod p`.
    pub fn from_secret(secret: DhSecretKey, params: &DhParameters) -> ApiResult<Self> {
        if secret.0.is_zero() || secret.0 >= params.p {
            return Err(ApiError::from(KemError::InvalidKey {
                key_type: "DH secret key",
                reason: "secret exponent must lie in [1, p-1]",
            }));
        }
        let public = params.g.modpow(&secret.0, &params.p);
        Ok(DhKeyPair {
            public: DhPublicKey(public),
            secret,
        })
    }

    /// The public half.
    pub fn public(&self) -> &DhPublicKey {
        &self.public
    }

    /// The secret half.
    pub fn secret(&self) -> &DhSecretKey {
        &self.secret
    }
}

/// Generate an ephemeral keypair: secret exponent uniform in `[2, p-2]`,
/// public value `g^secret mod p`.
pub fn generate_keypair<R: CryptoRng + RngCore>(
    rng: &mut R,
    params: &DhParameters,
) -> ApiResult<DhKeyPair> {
    let two = BigUint::from(2u32);
    let upper = &params.p - 1u32; // exclusive, so the draw covers [2, p-2]
    let secret = rng.gen_biguint_range(&two, &upper);
    DhKeyPair::from_secret(DhSecretKey(secret), params)
}

/// Derive the shared secret `peer_public^secret mod p`.
///
/// Both parties call this with their own secret and the peer's public value
/// and obtain the same integer.
pub fn shared_secret(
    peer_public: &DhPublicKey,
    secret: &DhSecretKey,
    modulus: &BigUint,
) -> ApiResult<DhSharedSecret> {
    if modulus < &BigUint::from(2u32) {
        return Err(ApiError::from(KemError::InvalidParameter {
            name: "p",
            reason: "modulus must be at least 2",
        }));
    }
    if peer_public.0.is_zero() || &peer_public.0 >= modulus {
        return Err(ApiError::from(KemError::InvalidKey {
            key_type: "DH public key",
            reason: "public value must lie in [1, p-1]",
        }));
    }
    if secret.0.is_zero() {
        return Err(ApiError::from(KemError::InvalidKey {
            key_type: "DH secret key",
            reason: "secret exponent must be nonzero",
        }));
    }
    Ok(DhSharedSecret(peer_public.0.modpow(&secret.0, modulus)))
}

impl KeyAgreement for DiffieHellman {
    type PublicKey = DhPublicKey;
    type SecretKey = DhSecretKey;
    type SharedSecret = DhSharedSecret;
    type Parameters = DhParameters;
    type KeyPair = DhKeyPair;

    fn name() -> &'static str {
        "DH"
    }

    fn keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
        params: &Self::Parameters,
    ) -> ApiResult<Self::KeyPair> {
        generate_keypair(rng, params)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.public.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.secret.clone()
    }

    fn shared_secret(
        secret_key: &Self::SecretKey,
        peer_public: &Self::PublicKey,
        params: &Self::Parameters,
    ) -> ApiResult<Self::SharedSecret> {
        shared_secret(peer_public, secret_key, params.prime())
    }
}

#[cfg(test)]
mod tests;
