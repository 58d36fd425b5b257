//! # ffcrypt
//!
//! A pure Rust library for finite-field key agreement over
//! arbitrary-precision integers.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ffcrypt = "0.1"
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`api`]: Shared error type and the key-agreement traits
//! - [`params`]: Named curve and modular-group constants
//! - [`algorithms`]: Short-Weierstrass curve-group arithmetic
//! - [`kem`]: Diffie-Hellman and elliptic-curve Diffie-Hellman
//!
//! ## Example
//!
//! ```
//! use ffcrypt::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let curve = ffcrypt::algorithms::ec::secp256k1();
//! let alice = EcdhExchange::keypair(&mut OsRng, &curve)?;
//! let bob = EcdhExchange::keypair(&mut OsRng, &curve)?;
//!
//! let alice_view = EcdhExchange::shared_secret(
//!     &EcdhExchange::secret_key(&alice),
//!     &EcdhExchange::public_key(&bob),
//!     &curve,
//! )?;
//! let bob_view = EcdhExchange::shared_secret(
//!     &EcdhExchange::secret_key(&bob),
//!     &EcdhExchange::public_key(&alice),
//!     &curve,
//! )?;
//! assert_eq!(alice_view, bob_view);
//! # Ok::<(), ffcrypt::api::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub use ffcrypt_algorithms as algorithms;
pub use ffcrypt_api as api;
pub use ffcrypt_kem as kem;
pub use ffcrypt_params as params;

/// Common imports for ffcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{DomainParameterSource, KeyAgreement};

    // Re-export the curve group and point types
    pub use crate::algorithms::ec::{CurveGroup, CurveParams, Point};

    // Re-export the key-agreement schemes
    pub use crate::kem::{DhKeyPair, DhParameters, DiffieHellman, EcdhExchange, EcdhKeyPair};
}
