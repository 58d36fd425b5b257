//! Key-agreement constructions
//!
//! This crate implements the key-agreement schemes of ffcrypt on top of the
//! arithmetic in `ffcrypt-algorithms`: classic Diffie-Hellman over the
//! multiplicative group of a prime field, and its elliptic-curve analog over
//! a short-Weierstrass curve group.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod dh;
pub mod ecdh;
pub mod error;

// Re-exports
pub use dh::{DhKeyPair, DhParameters, DiffieHellman};
pub use ecdh::{EcdhExchange, EcdhKeyPair};
