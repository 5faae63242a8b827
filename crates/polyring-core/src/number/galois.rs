//! Finite-field coefficients
//!
//! Integers modulo a prime, with the modulus validated against the
//! process-wide prime table. Elements of different moduli never mix; every
//! binary operation checks the primes and surfaces a kind mismatch.

use crate::error::{MathError, MathResult};
use crate::number::integer::extended_euclid;
use crate::number::primes::is_known_prime;
use crate::number::CoefficientKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An element of the field of integers modulo a prime
///
/// The value is always held in `[0, p)`. Supported primes are those in the
/// prime table (all primes up to 1000 by default; see
/// [`extend_primes_up_to`](crate::number::primes::extend_primes_up_to)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GaloisField {
    value: u64,
    prime: u64,
}

impl GaloisField {
    /// Create `value mod prime`.
    ///
    /// Negative inputs are normalized into `[0, p)`.
    ///
    /// # Errors
    ///
    /// Returns a domain error when `prime` is not in the prime table.
    pub fn new(value: i64, prime: u64) -> MathResult<Self> {
        if !is_known_prime(prime) {
            return Err(MathError::Domain {
                operation: "GaloisField::new".to_string(),
                reason: format!("{} is not a known prime", prime),
            });
        }
        Ok(Self {
            value: value.rem_euclid(prime as i64) as u64,
            prime,
        })
    }

    /// The residue in `[0, p)`.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// The field's modulus.
    pub fn prime(&self) -> u64 {
        self.prime
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// All `p` elements of the field, in residue order.
    pub fn elements(prime: u64) -> MathResult<Vec<Self>> {
        if !is_known_prime(prime) {
            return Err(MathError::Domain {
                operation: "GaloisField::elements".to_string(),
                reason: format!("{} is not a known prime", prime),
            });
        }
        Ok((0..prime).map(|value| Self { value, prime }).collect())
    }

    fn check_same_prime(&self, other: &Self, operation: &str) -> MathResult<()> {
        if self.prime != other.prime {
            return Err(MathError::KindMismatch {
                operation: operation.to_string(),
                left: CoefficientKind::Galois(self.prime),
                right: CoefficientKind::Galois(other.prime),
            });
        }
        Ok(())
    }

    pub fn add(&self, other: &Self) -> MathResult<Self> {
        self.check_same_prime(other, "GaloisField::add")?;
        Ok(Self {
            value: (self.value + other.value) % self.prime,
            prime: self.prime,
        })
    }

    pub fn sub(&self, other: &Self) -> MathResult<Self> {
        self.check_same_prime(other, "GaloisField::sub")?;
        Ok(self.add(&other.neg())?)
    }

    pub fn neg(&self) -> Self {
        Self {
            value: (self.prime - self.value) % self.prime,
            prime: self.prime,
        }
    }

    pub fn mul(&self, other: &Self) -> MathResult<Self> {
        self.check_same_prime(other, "GaloisField::mul")?;
        let product = (self.value as u128 * other.value as u128) % self.prime as u128;
        Ok(Self {
            value: product as u64,
            prime: self.prime,
        })
    }

    /// Multiplicative inverse via the extended Euclidean algorithm mod p.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` for the zero element.
    pub fn inverse(&self) -> MathResult<Self> {
        if self.value == 0 {
            return Err(MathError::DivisionByZero);
        }
        let (_, x, _) = extended_euclid(self.value as i64, self.prime as i64);
        Ok(Self {
            value: x.rem_euclid(self.prime as i64) as u64,
            prime: self.prime,
        })
    }

    pub fn div(&self, other: &Self) -> MathResult<Self> {
        self.check_same_prime(other, "GaloisField::div")?;
        self.mul(&other.inverse()?)
    }

    /// Raise to an integer power by square-and-multiply.
    ///
    /// Negative exponents invert first.
    pub fn pow(&self, exponent: i64) -> MathResult<Self> {
        let (mut base, mut exponent) = if exponent < 0 {
            (self.inverse()?, exponent.unsigned_abs())
        } else {
            (*self, exponent as u64)
        };
        let mut result = Self {
            value: 1 % self.prime,
            prime: self.prime,
        };
        while exponent > 0 {
            if exponent % 2 == 1 {
                result = result.mul(&base)?;
            }
            base = base.mul(&base)?;
            exponent /= 2;
        }
        Ok(result)
    }
}

impl fmt::Display for GaloisField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]{}", self.value, to_subscript(self.prime))
    }
}

fn to_subscript(number: u64) -> String {
    const SUBSCRIPTS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];
    number
        .to_string()
        .chars()
        .map(|digit| SUBSCRIPTS[digit as usize - '0' as usize])
        .collect()
}
