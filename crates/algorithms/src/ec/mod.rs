//! Short-Weierstrass elliptic-curve group over a prime field
//!
//! Implements the abelian group law on the points of a curve
//! `y^2 = x^3 + a*x + b (mod p)` in affine coordinates over
//! arbitrary-precision integers, with scalar multiplication by
//! least-significant-bit-first double-and-add.
//!
//! The point at infinity is an explicit variant of [`Coordinates`], never a
//! sentinel coordinate pair, so `(0, 0)` on a curve that happens to contain
//! it is an ordinary affine point. Curve parameters are shared between
//! points through an `Arc` and compared by value.

use std::fmt;
use std::sync::Arc;

use num_bigint::{BigInt, BigUint, RandBigInt, Sign};
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

use crate::error::{validate, Error, Result};
use crate::field;

use ffcrypt_params::WeierstrassParams;

/// Domain parameters of a short-Weierstrass curve: coefficients `a`, `b`,
/// field prime `p`, and the order `q` of the working subgroup.
///
/// Equality is structural over all four fields. Primality of `p` is the
/// caller's responsibility; a composite modulus surfaces later as
/// [`Error::NonInvertibleElement`] instead of corrupting results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveParams {
    /// Coefficient `a` of the curve equation
    pub a: BigUint,
    /// Coefficient `b` of the curve equation
    pub b: BigUint,
    /// Field prime `p`
    pub p: BigUint,
    /// Order `q` of the working subgroup
    pub q: BigUint,
}

impl CurveParams {
    /// Create curve parameters, normalizing `a` and `b` into `[0, p)`.
    pub fn new(a: BigUint, b: BigUint, p: BigUint, q: BigUint) -> Result<Self> {
        validate::parameter(p >= BigUint::from(2u32), "p", "field modulus must be at least 2")?;
        // q >= 2 keeps the keypair sampling range [1, q) non-empty
        validate::parameter(
            q >= BigUint::from(2u32),
            "q",
            "subgroup order must be at least 2",
        )?;
        Ok(CurveParams {
            a: &a % &p,
            b: &b % &p,
            p,
            q,
        })
    }
}

impl fmt::Display for CurveParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "y^2 = x^3 + {}x + {} over F_{} (order {})",
            self.a, self.b, self.p, self.q
        )
    }
}

/// Position of a point: the group identity or an affine coordinate pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coordinates {
    /// The point at infinity (group identity)
    Identity,
    /// A finite point `(x, y)` with canonical coordinates in `[0, p)`
    Affine {
        /// x-coordinate
        x: BigUint,
        /// y-coordinate
        y: BigUint,
    },
}

/// A point on a short-Weierstrass curve.
///
/// Immutable value object; every operation returns a new point. Many points
/// share one [`CurveParams`] allocation, and two points are equal iff their
/// curves are equal by value and their coordinates match (or both are the
/// identity).
#[derive(Debug, Clone)]
pub struct Point {
    curve: Arc<CurveParams>,
    coords: Coordinates,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.curve == other.curve && self.coords == other.coords
    }
}

impl Eq for Point {}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coords {
            Coordinates::Identity => write!(f, "(infinity)"),
            Coordinates::Affine { x, y } => write!(f, "({};{})", x, y),
        }
    }
}

impl Point {
    /// Create a finite point from canonical coordinates, validating that
    /// they satisfy the curve equation.
    pub fn new(x: BigUint, y: BigUint, curve: Arc<CurveParams>) -> Result<Self> {
        validate::parameter(x < curve.p && y < curve.p, "coordinates", "must lie in [0, p)")?;
        if !satisfies_equation(&x, &y, &curve) {
            return Err(Error::param("point", "coordinates are not on the curve"));
        }
        Ok(Point {
            curve,
            coords: Coordinates::Affine { x, y },
        })
    }

    /// The identity (point at infinity) of the given curve's group.
    pub fn identity(curve: Arc<CurveParams>) -> Self {
        Point {
            curve,
            coords: Coordinates::Identity,
        }
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> bool {
        matches!(self.coords, Coordinates::Identity)
    }

    /// The curve this point lies on.
    pub fn curve(&self) -> &Arc<CurveParams> {
        &self.curve
    }

    /// Coordinates of this point.
    pub fn coordinates(&self) -> &Coordinates {
        &self.coords
    }

    /// x-coordinate, or `None` for the identity.
    pub fn x(&self) -> Option<&BigUint> {
        match &self.coords {
            Coordinates::Identity => None,
            Coordinates::Affine { x, .. } => Some(x),
        }
    }

    /// y-coordinate, or `None` for the identity.
    pub fn y(&self) -> Option<&BigUint> {
        match &self.coords {
            Coordinates::Identity => None,
            Coordinates::Affine { y, .. } => Some(y),
        }
    }

    /// Additive inverse: `(x, -y mod p)`; the identity negates to itself.
    pub fn negate(&self) -> Self {
        match &self.coords {
            Coordinates::Identity => self.clone(),
            Coordinates::Affine { x, y } => Point {
                curve: Arc::clone(&self.curve),
                coords: Coordinates::Affine {
                    x: x.clone(),
                    y: field::negate(y, &self.curve.p),
                },
            },
        }
    }

    /// The group law.
    ///
    /// Case dispatch, in order: curve mismatch is rejected; the identity
    /// absorbs; mutually inverse points sum to the identity; a zero-ordinate
    /// pair sums to the identity (2-torsion, checked before the doubling
    /// case); equal points use the tangent slope; distinct points use the
    /// chord slope. A missing modular inverse while computing the slope
    /// surfaces as [`Error::NonInvertibleElement`].
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.curve != other.curve {
            return Err(Error::CurveMismatch {
                operation: "point addition",
            });
        }

        let (x1, y1) = match &self.coords {
            Coordinates::Identity => return Ok(other.clone()),
            Coordinates::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match &other.coords {
            Coordinates::Identity => return Ok(self.clone()),
            Coordinates::Affine { x, y } => (x, y),
        };

        if x1 == x2 && y1 != y2 {
            return Ok(Self::identity(Arc::clone(&self.curve)));
        }
        if y1 == y2 && y1.is_zero() {
            return Ok(Self::identity(Arc::clone(&self.curve)));
        }

        let p = &self.curve.p;
        let (x1, y1) = (BigInt::from(x1.clone()), BigInt::from(y1.clone()));
        let (x2, y2) = (BigInt::from(x2.clone()), BigInt::from(y2.clone()));

        let slope = if self.coords == other.coords {
            // Tangent: (3x^2 + a) / 2y
            let numerator = BigInt::from(3) * &x1 * &x1 + BigInt::from(self.curve.a.clone());
            let denominator = BigInt::from(2) * &y1;
            let inv = field::inverse(&denominator, p).ok_or(Error::NonInvertibleElement {
                context: "point doubling slope",
            })?;
            field::reduce(&(numerator * BigInt::from(inv)), p)
        } else {
            // Chord: (y1 - y2) / (x1 - x2)
            let numerator = &y1 - &y2;
            let denominator = &x1 - &x2;
            let inv = field::inverse(&denominator, p).ok_or(Error::NonInvertibleElement {
                context: "point addition slope",
            })?;
            field::reduce(&(numerator * BigInt::from(inv)), p)
        };

        let slope = BigInt::from(slope);
        let x_r = field::reduce(&(&slope * &slope - &x1 - &x2), p);
        let y_r = field::reduce(&(&slope * (&x1 - BigInt::from(x_r.clone())) - &y1), p);

        Ok(Point {
            curve: Arc::clone(&self.curve),
            coords: Coordinates::Affine { x: x_r, y: y_r },
        })
    }

    /// Double this point: `2P`.
    pub fn double(&self) -> Result<Self> {
        self.add(self)
    }

    /// Scalar multiplication `k * P` by double-and-add.
    ///
    /// Bits of `k` are consumed least-significant first; the accumulator
    /// starts at the identity and the addend at `P`, and the addend is
    /// doubled unconditionally after every bit. Negative scalars are
    /// rejected; `k = 0` yields the identity for any point.
    pub fn mul(&self, k: &BigInt) -> Result<Self> {
        if k.sign() == Sign::Minus {
            return Err(Error::InvalidScalar {
                context: "scalar multiplication",
                reason: "scalar must be non-negative; negate the point instead",
            });
        }

        let magnitude = k.magnitude();
        let mut result = Self::identity(Arc::clone(&self.curve));
        let mut addend = self.clone();
        for bit in 0..magnitude.bits() {
            if magnitude.bit(bit) {
                result = result.add(&addend)?;
            }
            addend = addend.add(&addend)?;
        }
        Ok(result)
    }
}

/// Check that `(x, y)` satisfies `y^2 = x^3 + a*x + b (mod p)`.
fn satisfies_equation(x: &BigUint, y: &BigUint, curve: &CurveParams) -> bool {
    let lhs = (y * y) % &curve.p;
    let rhs = (x * x * x + &curve.a * x + &curve.b) % &curve.p;
    lhs == rhs
}

/// A curve group fixed by its parameters and a base point.
///
/// This is the working object for key agreement: it owns the shared
/// [`CurveParams`] allocation and the generator, and samples scalars from
/// `[1, q-1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveGroup {
    params: Arc<CurveParams>,
    generator: Point,
}

impl CurveGroup {
    /// Create a group from parameters and base-point coordinates.
    pub fn new(params: CurveParams, g_x: BigUint, g_y: BigUint) -> Result<Self> {
        let params = Arc::new(params);
        let generator = Point::new(g_x, g_y, Arc::clone(&params))?;
        Ok(CurveGroup { params, generator })
    }

    /// Create a group from a named-parameter record.
    pub fn from_named(record: &WeierstrassParams) -> Result<Self> {
        let parse = |name: &'static str, hex: &str| -> Result<BigUint> {
            BigUint::parse_bytes(hex.as_bytes(), 16)
                .ok_or_else(|| Error::param(name, "malformed hex constant"))
        };
        let params = CurveParams::new(
            parse("a", record.a)?,
            parse("b", record.b)?,
            parse("p", record.p)?,
            parse("n", record.n)?,
        )?;
        Self::new(params, parse("g_x", record.g_x)?, parse("g_y", record.g_y)?)
    }

    /// The shared curve parameters.
    pub fn params(&self) -> &Arc<CurveParams> {
        &self.params
    }

    /// The base point `G`.
    pub fn generator(&self) -> &Point {
        &self.generator
    }

    /// The identity point of this group.
    pub fn identity(&self) -> Point {
        Point::identity(Arc::clone(&self.params))
    }

    /// Construct a validated point on this curve.
    pub fn point(&self, x: BigUint, y: BigUint) -> Result<Point> {
        Point::new(x, y, Arc::clone(&self.params))
    }

    /// Generate a keypair: a secret scalar uniform in `[1, q-1]` and the
    /// public point `d * G`.
    pub fn generate_keypair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> Result<(BigUint, Point)> {
        let d = rng.gen_biguint_range(&BigUint::one(), &self.params.q);
        let public = self.generator.mul(&BigInt::from(d.clone()))?;
        Ok((d, public))
    }
}

/// The secp256k1 group with its standard base point.
pub fn secp256k1() -> CurveGroup {
    CurveGroup::from_named(&ffcrypt_params::SECP256K1)
        .expect("standard curve constants must be valid")
}
