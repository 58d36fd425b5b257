//! Group arithmetic over arbitrary-precision prime fields
//!
//! This crate implements the computational core of ffcrypt: modular
//! arithmetic helpers over `BigUint`/`BigInt` and the short-Weierstrass
//! elliptic-curve point group, including the double-and-add scalar
//! multiplication used by the key-agreement constructions in `ffcrypt-kem`.
//!
//! All operations are pure transformations on immutable values; nothing in
//! this crate holds shared mutable state, so values may be used freely
//! across threads.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Modular arithmetic over a prime field
pub mod field;

// Elliptic-curve group
pub mod ec;
pub use ec::{Coordinates, CurveGroup, CurveParams, Point};
