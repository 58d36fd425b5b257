//! Constants for short-Weierstrass curve groups
//!
//! Each record fixes a curve `y^2 = x^3 + a*x + b (mod p)` together with a
//! base point of order `n`. All values are big-endian hex.

/// Domain parameters for a short-Weierstrass curve over a prime field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeierstrassParams {
    /// Curve name
    pub name: &'static str,
    /// Field prime p
    pub p: &'static str,
    /// Coefficient a
    pub a: &'static str,
    /// Coefficient b
    pub b: &'static str,
    /// Base point x-coordinate
    pub g_x: &'static str,
    /// Base point y-coordinate
    pub g_y: &'static str,
    /// Order n of the base point
    pub n: &'static str,
}

/// secp256k1 (SEC 2, version 2.0)
pub const SECP256K1: WeierstrassParams = WeierstrassParams {
    name: "secp256k1",
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F",
    a: "0",
    b: "7",
    g_x: "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
    g_y: "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
    n: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
};

/// Toy curve over F_17 with a base point of prime order 19.
///
/// Far too small for real use; intended for documentation and tests where
/// group elements must stay human-checkable.
pub const TOY_P17: WeierstrassParams = WeierstrassParams {
    name: "toy-p17",
    p: "11",
    a: "2",
    b: "2",
    g_x: "5",
    g_y: "1",
    n: "13",
};
