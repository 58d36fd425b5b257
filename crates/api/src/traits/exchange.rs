//! Trait definition for key-agreement schemes with enhanced type safety
//!
//! A key-agreement scheme lets two parties independently derive the same
//! shared secret from their own secret key and the peer's public key.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for key-agreement schemes with domain-specific types.
///
/// # Security Design
///
/// Secret material is constrained to types implementing `Zeroize` so that
/// implementations can guarantee cleanup of key bytes on drop.
pub trait KeyAgreement {
    /// Public key type. Not secret, but must be validated when imported.
    type PublicKey: Clone;

    /// Secret key type.
    ///
    /// # Security Note
    /// Implements `Zeroize` for secure memory cleanup.
    type SecretKey: Zeroize + Clone;

    /// Shared secret type.
    ///
    /// # Security Note
    /// - Implements `Zeroize` for secure memory cleanup.
    /// - Should be fed into a KDF rather than used directly as a session key.
    type SharedSecret: Zeroize;

    /// Public domain parameters both parties agree on out-of-band.
    type Parameters: Clone;

    /// Keypair type for efficient storage of related keys.
    type KeyPair: Clone;

    /// Returns the scheme name.
    fn name() -> &'static str;

    /// Generate a new keypair under the given domain parameters.
    ///
    /// # Security Requirements
    /// Must use the provided CSPRNG for all randomness and draw the secret
    /// exponent uniformly from the full range the parameters admit.
    fn keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
        params: &Self::Parameters,
    ) -> Result<Self::KeyPair>;

    /// Extract the public half of a keypair.
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract the secret half of a keypair.
    ///
    /// # Security Note
    /// The returned secret key should be protected and zeroized after use.
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Derive the shared secret from our secret key and the peer's public key.
    ///
    /// Both parties converge on the same value; the implementation must
    /// validate the peer key and reject degenerate results.
    fn shared_secret(
        secret_key: &Self::SecretKey,
        peer_public: &Self::PublicKey,
        params: &Self::Parameters,
    ) -> Result<Self::SharedSecret>;
}
