//! Sparse multivariate polynomials
//!
//! A polynomial is a map from monomial to coefficient, all coefficients of
//! one kind. Construction canonicalizes: structurally zero coefficients are
//! stripped (exactly for the exact kinds, within tolerance for Real and
//! Complex), so the zero polynomial is always the empty map. Polynomials are
//! value objects; every operation returns a fresh polynomial.

pub mod factory;
pub mod monomial;
pub mod ordering;

pub use monomial::{Monomial, Variable};
pub use ordering::{leading_coefficient, leading_monomial, leading_term, MonomialOrder};

use crate::error::{MathError, MathResult};
use crate::number::{Coefficient, CoefficientKind};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A sparse multivariate polynomial over one coefficient kind
///
/// The kind is `None` only for a zero polynomial synthesized from nothing;
/// such a kindless zero is compatible with every kind and adopts the other
/// operand's kind in arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polynomial {
    #[serde(with = "terms_serde")]
    terms: BTreeMap<Monomial, Coefficient>,
    kind: Option<CoefficientKind>,
}

impl Polynomial {
    /// Build a polynomial from a term map.
    ///
    /// Structural zeros are stripped. When `kind` is `None` it is inferred
    /// from the first coefficient.
    ///
    /// # Errors
    ///
    /// Returns a kind mismatch when the coefficients do not all share one
    /// kind (including finite fields of different primes).
    pub fn new(
        terms: BTreeMap<Monomial, Coefficient>,
        kind: Option<CoefficientKind>,
    ) -> MathResult<Self> {
        let kind = kind.or_else(|| terms.values().next().map(|c| c.kind()));
        if let Some(expected) = kind {
            for coefficient in terms.values() {
                if coefficient.kind() != expected {
                    return Err(MathError::KindMismatch {
                        operation: "Polynomial::new".to_string(),
                        left: expected,
                        right: coefficient.kind(),
                    });
                }
            }
        }
        Ok(Self::build(terms, kind))
    }

    /// Internal constructor for already kind-checked terms.
    fn build(terms: BTreeMap<Monomial, Coefficient>, kind: Option<CoefficientKind>) -> Self {
        Self {
            terms: terms.into_iter().filter(|(_, c)| !c.is_zero()).collect(),
            kind,
        }
    }

    /// The zero polynomial of no particular kind.
    pub fn zero() -> Self {
        Self {
            terms: BTreeMap::new(),
            kind: None,
        }
    }

    /// The zero polynomial of a definite kind.
    pub fn zero_of(kind: CoefficientKind) -> Self {
        Self {
            terms: BTreeMap::new(),
            kind: Some(kind),
        }
    }

    /// The single-term polynomial `coefficient · monomial`.
    pub fn term(monomial: Monomial, coefficient: Coefficient) -> Self {
        let kind = Some(coefficient.kind());
        let mut terms = BTreeMap::new();
        terms.insert(monomial, coefficient);
        Self::build(terms, kind)
    }

    /// The constant polynomial.
    pub fn constant(coefficient: Coefficient) -> Self {
        Self::term(Monomial::constant(), coefficient)
    }

    /// The multiplicative identity over `kind`.
    pub fn one_of(kind: CoefficientKind) -> MathResult<Self> {
        Ok(Self::constant(Coefficient::one(kind)?))
    }

    pub fn kind(&self) -> Option<CoefficientKind> {
        self.kind
    }

    pub fn terms(&self) -> &BTreeMap<Monomial, Coefficient> {
        &self.terms
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// The variables appearing in the polynomial, sorted.
    pub fn variables(&self) -> Vec<Variable> {
        let mut set = BTreeSet::new();
        for monomial in self.terms.keys() {
            set.extend(monomial.variables());
        }
        set.into_iter().collect()
    }

    /// Total degree: the maximal monomial degree, or −1 for zero.
    pub fn total_degree(&self) -> i64 {
        self.terms
            .keys()
            .map(|m| m.degree() as i64)
            .max()
            .unwrap_or(-1)
    }

    fn merged_kind(
        &self,
        other: &Self,
        operation: &str,
    ) -> MathResult<Option<CoefficientKind>> {
        match (self.kind, other.kind) {
            (Some(a), Some(b)) if a == b => Ok(Some(a)),
            (Some(a), Some(b)) => Err(MathError::KindMismatch {
                operation: operation.to_string(),
                left: a,
                right: b,
            }),
            (Some(a), None) => Ok(Some(a)),
            (None, b) => Ok(b),
        }
    }

    pub fn add(&self, other: &Self) -> MathResult<Self> {
        let kind = self.merged_kind(other, "Polynomial::add")?;
        let mut terms = self.terms.clone();
        for (monomial, coefficient) in &other.terms {
            match terms.get_mut(monomial) {
                Some(existing) => *existing = existing.add(coefficient)?,
                None => {
                    terms.insert(monomial.clone(), coefficient.clone());
                }
            }
        }
        Ok(Self::build(terms, kind))
    }

    pub fn sub(&self, other: &Self) -> MathResult<Self> {
        self.add(&other.neg())
    }

    pub fn neg(&self) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|(m, c)| (m.clone(), c.neg()))
                .collect(),
            kind: self.kind,
        }
    }

    pub fn mul(&self, other: &Self) -> MathResult<Self> {
        let kind = self.merged_kind(other, "Polynomial::mul")?;
        let mut terms: BTreeMap<Monomial, Coefficient> = BTreeMap::new();
        for (m1, c1) in &self.terms {
            for (m2, c2) in &other.terms {
                let monomial = m1.mul(m2);
                let coefficient = c1.mul(c2)?;
                match terms.get_mut(&monomial) {
                    Some(existing) => *existing = existing.add(&coefficient)?,
                    None => {
                        terms.insert(monomial, coefficient);
                    }
                }
            }
        }
        Ok(Self::build(terms, kind))
    }

    /// Add a same-kind scalar, treated as a constant polynomial.
    pub fn scalar_add(&self, scalar: &Coefficient) -> MathResult<Self> {
        self.add(&Self::constant(scalar.clone()))
    }

    /// Multiply by a same-kind scalar.
    pub fn scalar_mul(&self, scalar: &Coefficient) -> MathResult<Self> {
        self.mul(&Self::constant(scalar.clone()))
    }

    /// Raise to a non-negative integer power by square-and-multiply.
    pub fn pow(&self, exponent: u32) -> MathResult<Self> {
        let kind = self.kind.ok_or_else(|| MathError::Domain {
            operation: "Polynomial::pow".to_string(),
            reason: "cannot exponentiate a polynomial of unknown kind".to_string(),
        });
        if exponent == 0 {
            return Self::one_of(kind?);
        }
        if self.is_zero() {
            return Ok(self.clone());
        }
        let mut result = Self::one_of(kind?)?;
        let mut base = self.clone();
        let mut exponent = exponent;
        while exponent > 0 {
            if exponent % 2 == 1 {
                result = result.mul(&base)?;
            }
            base = base.mul(&base)?;
            exponent /= 2;
        }
        Ok(result)
    }

    /// Evaluate at a point given as a variable → coefficient map.
    ///
    /// # Errors
    ///
    /// Returns a domain error when the point is missing one of the
    /// polynomial's variables, and a kind mismatch when point values are of
    /// a different kind than the coefficients.
    pub fn evaluate(&self, point: &BTreeMap<Variable, Coefficient>) -> MathResult<Coefficient> {
        let kind = match self.kind {
            Some(kind) => kind,
            None => return Ok(Coefficient::integer(0)),
        };
        let mut result = Coefficient::zero(kind)?;
        for (monomial, coefficient) in &self.terms {
            let mut term = coefficient.clone();
            for (var, exponent) in monomial.exponents() {
                let value = point.get(var).ok_or_else(|| MathError::Domain {
                    operation: "Polynomial::evaluate".to_string(),
                    reason: format!("evaluation point is missing variable {}", var),
                })?;
                term = term.mul(&value.pow(*exponent as i64)?)?;
            }
            result = result.add(&term)?;
        }
        Ok(result)
    }

    /// Substitute a single variable by a constant, leaving the others
    /// symbolic.
    pub fn substitute(&self, var: &Variable, value: &Coefficient) -> MathResult<Self> {
        let mut result = Self {
            terms: BTreeMap::new(),
            kind: self.kind,
        };
        for (monomial, coefficient) in &self.terms {
            let exponent = monomial.exponent(var);
            let contribution = if exponent == 0 {
                Self::term(monomial.clone(), coefficient.clone())
            } else {
                let remaining = monomial
                    .checked_div(&Monomial::from_pairs(&[(*var, exponent)]))
                    .unwrap_or_else(Monomial::constant);
                let scaled = coefficient.mul(&value.pow(exponent as i64)?)?;
                Self::term(remaining, scaled)
            };
            result = result.add(&contribution)?;
        }
        Ok(result)
    }

    /// Formal derivative of the given order with respect to `var`.
    ///
    /// Order zero returns the polynomial unchanged.
    pub fn derivative(&self, var: &Variable, order: u32) -> MathResult<Self> {
        let kind = match self.kind {
            Some(kind) => kind,
            None => return Ok(self.clone()),
        };
        let mut current = self.clone();
        for _ in 0..order {
            let mut terms: BTreeMap<Monomial, Coefficient> = BTreeMap::new();
            for (monomial, coefficient) in &current.terms {
                let exponent = monomial.exponent(var);
                if exponent == 0 {
                    continue;
                }
                let scaled =
                    coefficient.mul(&Coefficient::integer_in(exponent as i64, kind)?)?;
                let lowered = monomial
                    .checked_div(&Monomial::variable(*var))
                    .unwrap_or_else(Monomial::constant);
                match terms.get_mut(&lowered) {
                    Some(existing) => *existing = existing.add(&scaled)?,
                    None => {
                        terms.insert(lowered, scaled);
                    }
                }
            }
            current = Self::build(terms, Some(kind));
        }
        Ok(current)
    }
}

impl PartialEq for Polynomial {
    /// Two polynomials are equal when their difference is (structurally)
    /// zero; polynomials of incompatible kinds are unequal.
    fn eq(&self, other: &Self) -> bool {
        match self.sub(other) {
            Ok(difference) => difference.is_zero(),
            Err(_) => false,
        }
    }
}

impl std::ops::Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(self)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }

        let max_exponent =
            |m: &Monomial| m.exponents().map(|(_, e)| *e).max().unwrap_or(0);
        let mut sorted: Vec<(&Monomial, &Coefficient)> = self.terms.iter().collect();
        sorted.sort_by(|(a, _), (b, _)| {
            (b.degree(), max_exponent(b)).cmp(&(a.degree(), max_exponent(a)))
        });

        for (i, (monomial, coefficient)) in sorted.into_iter().enumerate() {
            let (negative, magnitude) = match coefficient {
                Coefficient::Rational(r) => {
                    use num_traits::Signed;
                    (r.is_negative(), Coefficient::Rational(r.abs()))
                }
                Coefficient::Real(x) => (*x < 0.0, Coefficient::Real(x.abs())),
                other => (false, other.clone()),
            };

            if i == 0 {
                if negative {
                    write!(f, "-")?;
                }
            } else if negative {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }

            let suppress_unit = magnitude.is_one()
                && !monomial.is_constant()
                && matches!(
                    coefficient,
                    Coefficient::Rational(_) | Coefficient::Real(_)
                );
            if !suppress_unit {
                write!(f, "{}", magnitude)?;
            }
            if !monomial.is_constant() {
                write!(f, "{}", monomial)?;
            }
        }
        Ok(())
    }
}

/// Serialize the term map as a sequence of pairs so struct-keyed maps stay
/// representable in formats with string-only keys.
mod terms_serde {
    use super::*;
    use serde::ser::SerializeSeq;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        terms: &BTreeMap<Monomial, Coefficient>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(terms.len()))?;
        for pair in terms {
            seq.serialize_element(&pair)?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<Monomial, Coefficient>, D::Error> {
        let pairs = Vec::<(Monomial, Coefficient)>::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polynomial::factory::define_variable;

    fn var(name: char) -> Variable {
        Variable::new(name).unwrap()
    }

    fn x() -> Polynomial {
        define_variable(var('x'), CoefficientKind::Rational).unwrap()
    }

    fn y() -> Polynomial {
        define_variable(var('y'), CoefficientKind::Rational).unwrap()
    }

    #[test]
    fn test_zero_canonicalization() {
        let p = Polynomial::term(Monomial::variable(var('x')), Coefficient::integer(0));
        assert!(p.is_zero());
        assert_eq!(p.total_degree(), -1);
        assert_eq!(p.kind(), Some(CoefficientKind::Rational));
    }

    #[test]
    fn test_add_cancels() {
        let p = x().add(&y()).unwrap();
        let q = p.sub(&x()).unwrap();
        assert_eq!(q, y());
        assert!(p.sub(&p).unwrap().is_zero());
    }

    #[test]
    fn test_kindless_zero_adopts_kind() {
        let z = Polynomial::zero();
        let p = z.add(&x()).unwrap();
        assert_eq!(p, x());
        assert_eq!(p.kind(), Some(CoefficientKind::Rational));
    }

    #[test]
    fn test_kind_mismatch() {
        let over_q = x();
        let over_gf =
            define_variable(var('x'), CoefficientKind::Galois(5)).unwrap();
        assert!(over_q.add(&over_gf).is_err());
        assert!(over_q.mul(&over_gf).is_err());
        assert!(over_q
            .scalar_mul(&Coefficient::galois(2, 5).unwrap())
            .is_err());
    }

    #[test]
    fn test_mul_distributes() {
        let p = x().add(&y()).unwrap();
        let q = x().sub(&y()).unwrap();
        let product = p.mul(&q).unwrap();
        let expected = x()
            .pow(2)
            .unwrap()
            .sub(&y().pow(2).unwrap())
            .unwrap();
        assert_eq!(product, expected);
    }

    #[test]
    fn test_pow() {
        let p = x().add(&Polynomial::constant(Coefficient::integer(1))).unwrap();
        let cube = p.pow(3).unwrap();
        // (x+1)³ = x³ + 3x² + 3x + 1
        let mut point = BTreeMap::new();
        point.insert(var('x'), Coefficient::integer(2));
        assert_eq!(cube.evaluate(&point).unwrap(), Coefficient::integer(27));
        assert_eq!(p.pow(0).unwrap(), Polynomial::constant(Coefficient::integer(1)));
    }

    #[test]
    fn test_evaluate_missing_variable() {
        let p = x().mul(&y()).unwrap();
        let mut point = BTreeMap::new();
        point.insert(var('x'), Coefficient::integer(3));
        assert!(p.evaluate(&point).is_err());
    }

    #[test]
    fn test_substitute() {
        // f = x²y + 3x
        let f = x()
            .pow(2)
            .unwrap()
            .mul(&y())
            .unwrap()
            .add(&x().scalar_mul(&Coefficient::integer(3)).unwrap())
            .unwrap();
        let g = f.substitute(&var('x'), &Coefficient::integer(2)).unwrap();
        // 4y + 6
        let expected = y()
            .scalar_mul(&Coefficient::integer(4))
            .unwrap()
            .scalar_add(&Coefficient::integer(6))
            .unwrap();
        assert_eq!(g, expected);
        assert_eq!(g.variables(), vec![var('y')]);
    }

    #[test]
    fn test_derivative() {
        // f = x³ + x²y²
        let f = x()
            .pow(3)
            .unwrap()
            .add(&x().pow(2).unwrap().mul(&y().pow(2).unwrap()).unwrap())
            .unwrap();
        let df = f.derivative(&var('x'), 1).unwrap();
        // 3x² + 2xy²
        let expected = x()
            .pow(2)
            .unwrap()
            .scalar_mul(&Coefficient::integer(3))
            .unwrap()
            .add(
                &x()
                    .mul(&y().pow(2).unwrap())
                    .unwrap()
                    .scalar_mul(&Coefficient::integer(2))
                    .unwrap(),
            )
            .unwrap();
        assert_eq!(df, expected);

        let d0 = f.derivative(&var('x'), 0).unwrap();
        assert_eq!(d0, f);

        let dz = f.derivative(&var('z'), 1).unwrap();
        assert!(dz.is_zero());
    }

    #[test]
    fn test_total_degree() {
        assert_eq!(Polynomial::zero().total_degree(), -1);
        assert_eq!(x().total_degree(), 1);
        let f = x().pow(2).unwrap().mul(&y().pow(3).unwrap()).unwrap();
        assert_eq!(f.total_degree(), 5);
    }

    #[test]
    fn test_display() {
        let f = x()
            .pow(2)
            .unwrap()
            .sub(&y())
            .unwrap()
            .scalar_add(&Coefficient::integer(1))
            .unwrap();
        assert_eq!(f.to_string(), "x² - y + 1");
        assert_eq!(Polynomial::zero().to_string(), "0");
    }

    #[test]
    fn test_tolerant_float_equality() {
        let a = Polynomial::term(Monomial::variable(var('x')), Coefficient::real(1.0));
        let b = Polynomial::term(Monomial::variable(var('x')), Coefficient::real(1.00001));
        assert_eq!(a, b);
    }

    #[test]
    fn test_serde_round_trip() {
        let f = x().pow(2).unwrap().sub(&y()).unwrap();
        let json = serde_json::to_string(&f).unwrap();
        let back: Polynomial = serde_json::from_str(&json).unwrap();
        assert_eq!(f, back);
    }
}
