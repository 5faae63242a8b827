//! Rational functions
//!
//! Fractions of polynomials over one coefficient kind. Arithmetic follows
//! the classical rules on (numerator, denominator) pairs; `reduce` divides
//! both sides by their polynomial gcd. Values are immutable: `reduce`
//! returns a reduced copy.

use crate::algebra::gcd::polynomial_gcd;
use crate::algebra::groebner::polynomial_reduce;
use crate::error::{MathError, MathResult};
use crate::number::CoefficientKind;
use crate::polynomial::{MonomialOrder, Polynomial, Variable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A rational function p/q with polynomial numerator and denominator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RationalFunction {
    numerator: Polynomial,
    denominator: Polynomial,
}

impl RationalFunction {
    /// Build `numerator / denominator`.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` for a zero denominator and a kind mismatch
    /// when the two sides are over different kinds.
    pub fn new(numerator: Polynomial, denominator: Polynomial) -> MathResult<Self> {
        if denominator.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        if let (Some(left), Some(right)) = (numerator.kind(), denominator.kind()) {
            if left != right {
                return Err(MathError::KindMismatch {
                    operation: "RationalFunction::new".to_string(),
                    left,
                    right,
                });
            }
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// A polynomial as a rational function with denominator one.
    pub fn from_polynomial(polynomial: Polynomial) -> MathResult<Self> {
        let kind = polynomial.kind().unwrap_or(CoefficientKind::Rational);
        Self::new(polynomial, Polynomial::one_of(kind)?)
    }

    pub fn numerator(&self) -> &Polynomial {
        &self.numerator
    }

    pub fn denominator(&self) -> &Polynomial {
        &self.denominator
    }

    /// The coefficient kind; the denominator is non-zero, so it always has
    /// one.
    pub fn kind(&self) -> CoefficientKind {
        self.denominator
            .kind()
            .expect("a non-zero polynomial has a definite kind")
    }

    /// The variables of numerator and denominator, sorted.
    pub fn variables(&self) -> Vec<Variable> {
        let set: BTreeSet<Variable> = self
            .numerator
            .variables()
            .into_iter()
            .chain(self.denominator.variables())
            .collect();
        set.into_iter().collect()
    }

    pub fn add(&self, other: &Self) -> MathResult<Self> {
        // a/b + c/d = (ad + cb)/bd
        let numerator = self
            .numerator
            .mul(&other.denominator)?
            .add(&other.numerator.mul(&self.denominator)?)?;
        Self::new(numerator, self.denominator.mul(&other.denominator)?)
    }

    pub fn sub(&self, other: &Self) -> MathResult<Self> {
        self.add(&other.neg())
    }

    pub fn neg(&self) -> Self {
        Self {
            numerator: self.numerator.neg(),
            denominator: self.denominator.clone(),
        }
    }

    pub fn mul(&self, other: &Self) -> MathResult<Self> {
        Self::new(
            self.numerator.mul(&other.numerator)?,
            self.denominator.mul(&other.denominator)?,
        )
    }

    /// (a/b)/(c/d) = ad/bc; fails when `other` is zero.
    pub fn div(&self, other: &Self) -> MathResult<Self> {
        Self::new(
            self.numerator.mul(&other.denominator)?,
            self.denominator.mul(&other.numerator)?,
        )
    }

    /// Raise to an integer power; negative exponents invert first.
    pub fn pow(&self, exponent: i64) -> MathResult<Self> {
        let (base, exponent) = if exponent < 0 {
            let one = Self::new(
                Polynomial::one_of(self.kind())?,
                Polynomial::one_of(self.kind())?,
            )?;
            (one.div(self)?, exponent.unsigned_abs() as u32)
        } else {
            (self.clone(), exponent as u32)
        };
        Self::new(
            base.numerator.pow(exponent)?,
            base.denominator.pow(exponent)?,
        )
    }

    /// Divide numerator and denominator by their polynomial gcd.
    pub fn reduce(&self) -> MathResult<Self> {
        let divisor = polynomial_gcd(&[self.numerator.clone(), self.denominator.clone()])?;
        let permutation = self.variables();
        let (numerator_quotients, _) = polynomial_reduce(
            &self.numerator,
            &[divisor.clone()],
            &permutation,
            MonomialOrder::Lex,
        )?;
        let (denominator_quotients, _) = polynomial_reduce(
            &self.denominator,
            &[divisor],
            &permutation,
            MonomialOrder::Lex,
        )?;
        Self::new(
            numerator_quotients
                .into_iter()
                .next()
                .unwrap_or_else(Polynomial::zero),
            denominator_quotients
                .into_iter()
                .next()
                .unwrap_or_else(Polynomial::zero),
        )
    }
}

impl PartialEq for RationalFunction {
    /// a/b = c/d iff ad − cb = 0.
    fn eq(&self, other: &Self) -> bool {
        match self.sub(other) {
            Ok(difference) => difference.numerator.is_zero(),
            Err(_) => false,
        }
    }
}

impl fmt::Display for RationalFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})/({})", self.numerator, self.denominator)
    }
}
