//! Domain-parameter constants for the ffcrypt library
//!
//! Named curve parameters and Diffie-Hellman group constants. Values are
//! stored as big-endian hex strings so the algorithm crates can parse them
//! into arbitrary-precision integers without this crate carrying a bigint
//! dependency.

pub mod curves;
pub mod dh;

pub use curves::{WeierstrassParams, SECP256K1, TOY_P17};
