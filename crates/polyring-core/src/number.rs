//! Coefficient kinds and arithmetic
//!
//! A polynomial's coefficients are drawn from exactly one of four kinds:
//! exact rationals, a finite field of prime order, IEEE doubles, or complex
//! doubles. The [`Coefficient`] enum tags the value with its kind and every
//! operation dispatches with a single match; mixing kinds is a
//! [`MathError::KindMismatch`], never a coercion.

pub mod galois;
pub mod integer;
pub mod primes;

pub use galois::GaloisField;

use crate::error::{MathError, MathResult};
use num_bigint::BigInt;
use num_complex::Complex64;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Absolute tolerance under which an inexact (Real/Complex) coefficient is
/// treated as structurally zero.
pub const STRUCTURAL_ZERO_TOLERANCE: f64 = 1e-4;

/// Tag identifying a coefficient kind
///
/// The finite-field variant carries its modulus, so two fields of different
/// order are different kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoefficientKind {
    Rational,
    Galois(u64),
    Real,
    Complex,
}

impl CoefficientKind {
    /// Whether zero testing on this kind is exact rather than tolerant.
    pub fn is_exact(&self) -> bool {
        matches!(self, CoefficientKind::Rational | CoefficientKind::Galois(_))
    }
}

impl fmt::Display for CoefficientKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CoefficientKind::Rational => write!(f, "Rational"),
            CoefficientKind::Galois(p) => write!(f, "GF({})", p),
            CoefficientKind::Real => write!(f, "Real"),
            CoefficientKind::Complex => write!(f, "Complex"),
        }
    }
}

/// A coefficient value tagged with its kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Coefficient {
    Rational(BigRational),
    Galois(GaloisField),
    Real(f64),
    Complex(Complex64),
}

impl Coefficient {
    /// Exact fraction `numerator / denominator`.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` for a zero denominator.
    pub fn rational(numerator: i64, denominator: i64) -> MathResult<Self> {
        if denominator == 0 {
            return Err(MathError::DivisionByZero);
        }
        Ok(Coefficient::Rational(BigRational::new(
            BigInt::from(numerator),
            BigInt::from(denominator),
        )))
    }

    /// Exact integer as a rational coefficient.
    pub fn integer(value: i64) -> Self {
        Coefficient::Rational(BigRational::from_integer(BigInt::from(value)))
    }

    /// Finite-field element `value mod prime`.
    pub fn galois(value: i64, prime: u64) -> MathResult<Self> {
        Ok(Coefficient::Galois(GaloisField::new(value, prime)?))
    }

    pub fn real(value: f64) -> Self {
        Coefficient::Real(value)
    }

    pub fn complex(re: f64, im: f64) -> Self {
        Coefficient::Complex(Complex64::new(re, im))
    }

    /// The additive identity of the given kind.
    pub fn zero(kind: CoefficientKind) -> MathResult<Self> {
        match kind {
            CoefficientKind::Rational => Ok(Coefficient::Rational(BigRational::zero())),
            CoefficientKind::Galois(p) => Self::galois(0, p),
            CoefficientKind::Real => Ok(Coefficient::Real(0.0)),
            CoefficientKind::Complex => Ok(Coefficient::Complex(Complex64::zero())),
        }
    }

    /// The image of a machine integer in the given kind.
    pub fn integer_in(value: i64, kind: CoefficientKind) -> MathResult<Self> {
        match kind {
            CoefficientKind::Rational => Ok(Self::integer(value)),
            CoefficientKind::Galois(p) => Self::galois(value, p),
            CoefficientKind::Real => Ok(Coefficient::Real(value as f64)),
            CoefficientKind::Complex => Ok(Coefficient::complex(value as f64, 0.0)),
        }
    }

    /// The multiplicative identity of the given kind.
    pub fn one(kind: CoefficientKind) -> MathResult<Self> {
        match kind {
            CoefficientKind::Rational => Ok(Coefficient::Rational(BigRational::one())),
            CoefficientKind::Galois(p) => Self::galois(1, p),
            CoefficientKind::Real => Ok(Coefficient::Real(1.0)),
            CoefficientKind::Complex => Ok(Coefficient::Complex(Complex64::one())),
        }
    }

    pub fn kind(&self) -> CoefficientKind {
        match self {
            Coefficient::Rational(_) => CoefficientKind::Rational,
            Coefficient::Galois(g) => CoefficientKind::Galois(g.prime()),
            Coefficient::Real(_) => CoefficientKind::Real,
            Coefficient::Complex(_) => CoefficientKind::Complex,
        }
    }

    /// Structural zero test: exact for Rational and Galois, within
    /// [`STRUCTURAL_ZERO_TOLERANCE`] for Real and Complex.
    pub fn is_zero(&self) -> bool {
        match self {
            Coefficient::Rational(r) => r.is_zero(),
            Coefficient::Galois(g) => g.is_zero(),
            Coefficient::Real(x) => x.abs() < STRUCTURAL_ZERO_TOLERANCE,
            Coefficient::Complex(z) => z.norm() < STRUCTURAL_ZERO_TOLERANCE,
        }
    }

    pub fn is_one(&self) -> bool {
        match self {
            Coefficient::Rational(r) => r.is_one(),
            Coefficient::Galois(g) => g.value() == 1,
            Coefficient::Real(x) => (x - 1.0).abs() < STRUCTURAL_ZERO_TOLERANCE,
            Coefficient::Complex(z) => (z - Complex64::one()).norm() < STRUCTURAL_ZERO_TOLERANCE,
        }
    }

    fn mismatch(&self, other: &Self, operation: &str) -> MathError {
        MathError::KindMismatch {
            operation: operation.to_string(),
            left: self.kind(),
            right: other.kind(),
        }
    }

    pub fn add(&self, other: &Self) -> MathResult<Self> {
        match (self, other) {
            (Coefficient::Rational(a), Coefficient::Rational(b)) => {
                Ok(Coefficient::Rational(a + b))
            }
            (Coefficient::Galois(a), Coefficient::Galois(b)) => Ok(Coefficient::Galois(a.add(b)?)),
            (Coefficient::Real(a), Coefficient::Real(b)) => Ok(Coefficient::Real(a + b)),
            (Coefficient::Complex(a), Coefficient::Complex(b)) => Ok(Coefficient::Complex(a + b)),
            _ => Err(self.mismatch(other, "Coefficient::add")),
        }
    }

    pub fn sub(&self, other: &Self) -> MathResult<Self> {
        self.add(&other.neg())
    }

    pub fn neg(&self) -> Self {
        match self {
            Coefficient::Rational(r) => Coefficient::Rational(-r),
            Coefficient::Galois(g) => Coefficient::Galois(g.neg()),
            Coefficient::Real(x) => Coefficient::Real(-x),
            Coefficient::Complex(z) => Coefficient::Complex(-z),
        }
    }

    pub fn mul(&self, other: &Self) -> MathResult<Self> {
        match (self, other) {
            (Coefficient::Rational(a), Coefficient::Rational(b)) => {
                Ok(Coefficient::Rational(a * b))
            }
            (Coefficient::Galois(a), Coefficient::Galois(b)) => Ok(Coefficient::Galois(a.mul(b)?)),
            (Coefficient::Real(a), Coefficient::Real(b)) => Ok(Coefficient::Real(a * b)),
            (Coefficient::Complex(a), Coefficient::Complex(b)) => Ok(Coefficient::Complex(a * b)),
            _ => Err(self.mismatch(other, "Coefficient::mul")),
        }
    }

    pub fn div(&self, other: &Self) -> MathResult<Self> {
        if other.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        match (self, other) {
            (Coefficient::Rational(a), Coefficient::Rational(b)) => {
                Ok(Coefficient::Rational(a / b))
            }
            (Coefficient::Galois(a), Coefficient::Galois(b)) => Ok(Coefficient::Galois(a.div(b)?)),
            (Coefficient::Real(a), Coefficient::Real(b)) => Ok(Coefficient::Real(a / b)),
            (Coefficient::Complex(a), Coefficient::Complex(b)) => Ok(Coefficient::Complex(a / b)),
            _ => Err(self.mismatch(other, "Coefficient::div")),
        }
    }

    /// Multiplicative inverse.
    pub fn inverse(&self) -> MathResult<Self> {
        Self::one(self.kind())?.div(self)
    }

    /// Raise to an integer power by square-and-multiply.
    ///
    /// A negative exponent inverts first, which fails on zero.
    pub fn pow(&self, exponent: i64) -> MathResult<Self> {
        let (mut base, mut exponent) = if exponent < 0 {
            (self.inverse()?, exponent.unsigned_abs())
        } else {
            (self.clone(), exponent as u64)
        };
        let mut result = Self::one(self.kind())?;
        while exponent > 0 {
            if exponent % 2 == 1 {
                result = result.mul(&base)?;
            }
            base = base.mul(&base)?;
            exponent /= 2;
        }
        Ok(result)
    }

    /// Re-embed this coefficient into another kind.
    ///
    /// The embedding matrix is closed and explicit: rationals widen to
    /// floats, floats widen to complex, exact values reduce modulo a prime,
    /// and narrowing directions succeed only when nothing is lost (a complex
    /// with negligible imaginary part may become real; a float becomes the
    /// rational that rounds it at four decimals, the precision of the
    /// structural-zero tolerance).
    pub fn embed_into(&self, kind: CoefficientKind) -> MathResult<Self> {
        if self.kind() == kind {
            return Ok(self.clone());
        }
        match (self, kind) {
            (Coefficient::Rational(_), CoefficientKind::Rational)
            | (Coefficient::Real(_), CoefficientKind::Real) => Ok(self.clone()),
            (Coefficient::Rational(r), CoefficientKind::Real) => {
                Ok(Coefficient::Real(rational_to_f64(r)?))
            }
            (Coefficient::Rational(r), CoefficientKind::Complex) => {
                Ok(Coefficient::complex(rational_to_f64(r)?, 0.0))
            }
            (Coefficient::Rational(r), CoefficientKind::Galois(p)) => {
                Ok(Coefficient::Galois(rational_to_galois(r, p)?))
            }
            (Coefficient::Real(x), CoefficientKind::Complex) => {
                Ok(Coefficient::complex(*x, 0.0))
            }
            (Coefficient::Real(x), CoefficientKind::Rational) => {
                Ok(Coefficient::Rational(f64_to_rational(*x)?))
            }
            (Coefficient::Real(x), CoefficientKind::Galois(p)) => {
                Ok(Coefficient::Galois(rational_to_galois(&f64_to_rational(*x)?, p)?))
            }
            (Coefficient::Complex(z), target) => {
                if z.im.abs() >= STRUCTURAL_ZERO_TOLERANCE {
                    return Err(MathError::Domain {
                        operation: "Coefficient::embed_into".to_string(),
                        reason: format!("{} has a non-negligible imaginary part", z),
                    });
                }
                Coefficient::Real(z.re).embed_into(target)
            }
            (Coefficient::Galois(g), CoefficientKind::Rational) => {
                Ok(Coefficient::integer(g.value() as i64))
            }
            (Coefficient::Galois(g), CoefficientKind::Real) => {
                Ok(Coefficient::Real(g.value() as f64))
            }
            (Coefficient::Galois(g), CoefficientKind::Complex) => {
                Ok(Coefficient::complex(g.value() as f64, 0.0))
            }
            (Coefficient::Galois(g), CoefficientKind::Galois(q)) => Err(MathError::Domain {
                operation: "Coefficient::embed_into".to_string(),
                reason: format!(
                    "no canonical map from GF({}) to GF({})",
                    g.prime(),
                    q
                ),
            }),
        }
    }
}

fn rational_to_f64(r: &BigRational) -> MathResult<f64> {
    r.to_f64().ok_or_else(|| MathError::Domain {
        operation: "Coefficient::embed_into".to_string(),
        reason: "rational does not fit in an IEEE double".to_string(),
    })
}

fn f64_to_rational(x: f64) -> MathResult<BigRational> {
    if !x.is_finite() {
        return Err(MathError::Domain {
            operation: "Coefficient::embed_into".to_string(),
            reason: format!("{} is not finite", x),
        });
    }
    let scaled = (x * 1e4).round();
    Ok(BigRational::new(
        BigInt::from(scaled as i64),
        BigInt::from(10_000),
    ))
}

fn rational_to_galois(r: &BigRational, prime: u64) -> MathResult<GaloisField> {
    let p = BigInt::from(prime);
    let numerator = r.numer().mod_floor(&p).to_i64().ok_or_else(|| MathError::Domain {
        operation: "Coefficient::embed_into".to_string(),
        reason: "numerator does not reduce modulo p".to_string(),
    })?;
    let denominator = r.denom().mod_floor(&p).to_i64().ok_or_else(|| MathError::Domain {
        operation: "Coefficient::embed_into".to_string(),
        reason: "denominator does not reduce modulo p".to_string(),
    })?;
    let numerator = GaloisField::new(numerator, prime)?;
    let denominator = GaloisField::new(denominator, prime)?;
    numerator.div(&denominator)
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Coefficient::Rational(r) => write!(f, "{}", r),
            Coefficient::Galois(g) => write!(f, "{}", g),
            Coefficient::Real(x) => write!(f, "{}", x),
            Coefficient::Complex(z) => write!(f, "{}", z),
        }
    }
}
