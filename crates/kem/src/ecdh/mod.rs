//! Elliptic-curve Diffie-Hellman key agreement
//!
//! The curve analog of the classic exchange: under a fixed [`CurveGroup`],
//! each party generates `(d, d*G)`, exchanges public points, and computes
//! `d * Q_peer`. Both land on the same point, and its x-coordinate is the
//! shared secret.

use std::fmt;

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::Error as KemError;
use ffcrypt_algorithms::ec::{CurveGroup, Point};
use ffcrypt_api::{Error as ApiError, KeyAgreement, Result as ApiResult};

/// Elliptic-curve Diffie-Hellman key agreement
pub struct EcdhExchange;

/// Public key: a validated non-identity point on the agreed curve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcdhPublicKey(Point);

/// Secret scalar
#[derive(Clone)]
pub struct EcdhSecretKey(BigUint);

/// Shared secret: the x-coordinate of the derived point
#[derive(Clone)]
pub struct EcdhSharedSecret(BigUint);

/// An ephemeral keypair under a fixed curve group
#[derive(Clone)]
pub struct EcdhKeyPair {
    public: EcdhPublicKey,
    secret: EcdhSecretKey,
}

impl EcdhPublicKey {
    /// Wrap a public point received from a peer, rejecting the identity.
    pub fn new(point: Point) -> ApiResult<Self> {
        if point.is_identity() {
            return Err(ApiError::from(KemError::InvalidKey {
                key_type: "ECDH public key",
                reason: "public key cannot be the identity point",
            }));
        }
        Ok(EcdhPublicKey(point))
    }

    /// The public point.
    pub fn point(&self) -> &Point {
        &self.0
    }
}

impl EcdhSecretKey {
    /// Wrap a secret scalar.
    pub fn new(value: BigUint) -> Self {
        EcdhSecretKey(value)
    }

    /// The secret scalar (internal use only).
    pub(crate) fn as_uint(&self) -> &BigUint {
        &self.0
    }

    /// Export the secret scalar as big-endian bytes with zeroization.
    pub fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.to_bytes_be())
    }
}

impl fmt::Debug for EcdhSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EcdhSecretKey(<redacted>)")
    }
}

impl Zeroize for EcdhSecretKey {
    fn zeroize(&mut self) {
        self.0.set_zero();
    }
}

impl Drop for EcdhSecretKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for EcdhSecretKey {}

impl EcdhSharedSecret {
    /// The shared secret as an integer.
    pub fn as_uint(&self) -> &BigUint {
        &self.0
    }

    /// Export the shared secret as big-endian bytes with zeroization.
    ///
    /// Feed this into a KDF; do not use the raw x-coordinate as a session
    /// key.
    pub fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.to_bytes_be())
    }

    /// Export the shared secret as big-endian bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_bytes_be()
    }
}

impl fmt::Debug for EcdhSharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EcdhSharedSecret(<redacted>)")
    }
}

impl PartialEq for EcdhSharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.0
            .to_bytes_be()
            .ct_eq(&other.0.to_bytes_be())
            .into()
    }
}

impl Eq for EcdhSharedSecret {}

impl Zeroize for EcdhSharedSecret {
    fn zeroize(&mut self) {
        self.0.set_zero();
    }
}

impl Drop for EcdhSharedSecret {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for EcdhSharedSecret {}

impl EcdhKeyPair {
    /// The public half.
    pub fn public(&self) -> &EcdhPublicKey {
        &self.public
    }

    /// The secret half.
    pub fn secret(&self) -> &EcdhSecretKey {
        &self.secret
    }
}

/// Generate an ephemeral keypair: scalar uniform in `[1, q-1]`, public
/// point `d * G`.
pub fn generate_keypair<R: CryptoRng + RngCore>(
    rng: &mut R,
    group: &CurveGroup,
) -> ApiResult<EcdhKeyPair> {
    let (secret, public) = group
        .generate_keypair(rng)
        .map_err(|e| ApiError::from(KemError::from(e)))?;
    let public = EcdhPublicKey::new(public)?;
    Ok(EcdhKeyPair {
        public,
        secret: EcdhSecretKey(secret),
    })
}

/// Derive the shared secret `x(d * Q_peer)`.
pub fn shared_secret(
    secret: &EcdhSecretKey,
    peer_public: &EcdhPublicKey,
    group: &CurveGroup,
) -> ApiResult<EcdhSharedSecret> {
    if peer_public.0.curve() != group.params() {
        return Err(ApiError::from(KemError::InvalidKey {
            key_type: "ECDH public key",
            reason: "peer key lies on a different curve",
        }));
    }
    if secret.0.is_zero() {
        return Err(ApiError::from(KemError::InvalidKey {
            key_type: "ECDH secret key",
            reason: "secret scalar must be nonzero",
        }));
    }

    let shared_point = peer_public
        .0
        .mul(&BigInt::from(secret.0.clone()))
        .map_err(|e| ApiError::from(KemError::from(e)))?;

    match shared_point.x() {
        // A degenerate result would hand both parties a known value
        None => Err(ApiError::from(KemError::InvalidKey {
            key_type: "ECDH public key",
            reason: "agreement produced the identity point",
        })),
        Some(x) => Ok(EcdhSharedSecret(x.clone())),
    }
}

impl KeyAgreement for EcdhExchange {
    type PublicKey = EcdhPublicKey;
    type SecretKey = EcdhSecretKey;
    type SharedSecret = EcdhSharedSecret;
    type Parameters = CurveGroup;
    type KeyPair = EcdhKeyPair;

    fn name() -> &'static str {
        "ECDH"
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
        shared_secret(secret_key, peer_public, params)
    }
}
