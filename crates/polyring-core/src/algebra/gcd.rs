//! Polynomial GCD, LCM, and square-free part
//!
//! Multivariate lcm by saturation and elimination: with t ranked highest in
//! lex, the elimination ideal of `{t·f, (1 − t)·g}` is generated by
//! lcm(f, g). The gcd is then the quotient of f·g by the lcm. Both are
//! defined up to a unit; the normalization here fixes the unit the same way
//! for every caller.

use crate::algebra::groebner::{get_groebner_basis, polynomial_reduce};
use crate::algebra::ideal::Ideal;
use crate::error::{MathError, MathResult};
use crate::number::integer::{integer_gcd, integer_lcm};
use crate::number::{Coefficient, CoefficientKind};
use crate::polynomial::ordering::leading_coefficient;
use crate::polynomial::{Monomial, MonomialOrder, Polynomial, Variable};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;
use std::collections::BTreeSet;

/// lcm(f, g) via saturation: eliminate t from `{t·f, (1 − t)·g}`.
fn pairwise_lcm(f: &Polynomial, g: &Polynomial) -> MathResult<Polynomial> {
    if f.is_zero() || g.is_zero() {
        return Ok(Polynomial::zero());
    }
    let kind = f
        .kind()
        .expect("a non-zero polynomial has a definite kind");

    let t = Polynomial::term(
        Monomial::variable(Variable::saturation()),
        Coefficient::one(kind)?,
    );
    let one_minus_t = Polynomial::one_of(kind)?.sub(&t)?;

    let variables: BTreeSet<Variable> = f
        .variables()
        .into_iter()
        .chain(g.variables())
        .collect();
    let mut permutation = vec![Variable::saturation()];
    permutation.extend(variables.iter().copied());

    let generators = [t.mul(f)?, one_minus_t.mul(g)?];
    let basis = get_groebner_basis(&generators, &permutation, MonomialOrder::Lex, true)?;

    let remaining: Vec<Variable> = variables.into_iter().collect();
    Ideal::elimination_ideal(&basis, &remaining)
        .into_iter()
        .next()
        .ok_or_else(|| MathError::Domain {
            operation: "polynomial_lcm".to_string(),
            reason: "saturation produced an empty elimination ideal".to_string(),
        })
}

/// gcd(f, g) as the quotient of f·g by lcm(f, g).
fn pairwise_gcd(f: &Polynomial, g: &Polynomial) -> MathResult<Polynomial> {
    if f.is_zero() {
        return Ok(g.clone());
    }
    if g.is_zero() {
        return Ok(f.clone());
    }
    let lcm = pairwise_lcm(f, g)?;
    let variables: BTreeSet<Variable> = f
        .variables()
        .into_iter()
        .chain(g.variables())
        .collect();
    let permutation: Vec<Variable> = variables.into_iter().collect();
    let (quotients, _) =
        polynomial_reduce(&f.mul(g)?, &[lcm], &permutation, MonomialOrder::Lex)?;
    Ok(quotients.into_iter().next().unwrap_or_else(Polynomial::zero))
}

/// Greatest common divisor of the given polynomials, normalized monic under
/// graded lex.
///
/// # Errors
///
/// Returns a shape error for an empty argument list and a kind mismatch
/// when the polynomials are not all over the same kind.
pub fn polynomial_gcd(polynomials: &[Polynomial]) -> MathResult<Polynomial> {
    let (first, rest) = polynomials.split_first().ok_or_else(|| MathError::Shape {
        operation: "polynomial_gcd".to_string(),
        reason: "at least one polynomial required".to_string(),
    })?;
    let mut result = first.clone();
    for next in rest {
        result = pairwise_gcd(&result, next)?;
    }
    normalize_coefficients(&result, false)
}

/// Least common multiple of the given polynomials.
///
/// The result is rescaled so that its graded-lex leading coefficient is the
/// product of the operands' leading coefficients.
///
/// # Errors
///
/// Returns a shape error for an empty argument list and a kind mismatch
/// when the polynomials are not all over the same kind.
pub fn polynomial_lcm(polynomials: &[Polynomial]) -> MathResult<Polynomial> {
    let (first, rest) = polynomials.split_first().ok_or_else(|| MathError::Shape {
        operation: "polynomial_lcm".to_string(),
        reason: "at least one polynomial required".to_string(),
    })?;
    let mut result = first.clone();
    let mut target_lead =
        leading_coefficient(&result, &result.variables(), MonomialOrder::GradedLex);
    for next in rest {
        result = pairwise_lcm(&result, next)?;
        target_lead = match (
            target_lead,
            leading_coefficient(next, &next.variables(), MonomialOrder::GradedLex),
        ) {
            (Some(a), Some(b)) => Some(a.mul(&b)?),
            _ => None,
        };
    }

    let current_lead =
        leading_coefficient(&result, &result.variables(), MonomialOrder::GradedLex);
    match (target_lead, current_lead) {
        (Some(target), Some(current)) => result.scalar_mul(&target.div(&current)?),
        // Some operand was zero, so the lcm is zero.
        _ => Ok(Polynomial::zero()),
    }
}

/// Normalize the unit factor of a polynomial.
///
/// For the rational kind with `to_integers` the result has relatively prime
/// integer coefficients and a positive graded-lex leading coefficient;
/// otherwise the graded-lex leading term is made monic. The zero polynomial
/// is returned unchanged.
pub fn normalize_coefficients(f: &Polynomial, to_integers: bool) -> MathResult<Polynomial> {
    let variables = f.variables();
    let Some(lead) = leading_coefficient(f, &variables, MonomialOrder::GradedLex) else {
        return Ok(f.clone());
    };

    if f.kind() == Some(CoefficientKind::Rational) && to_integers {
        let mut denominators: Vec<BigInt> = Vec::new();
        let mut numerators: Vec<BigInt> = Vec::new();
        for coefficient in f.terms().values() {
            if let Coefficient::Rational(r) = coefficient {
                denominators.push(r.denom().clone());
                numerators.push(r.numer().clone());
            }
        }
        let scale = BigRational::new(integer_lcm(&denominators)?, integer_gcd(&numerators)?);
        let scaled = f.scalar_mul(&Coefficient::Rational(scale))?;
        let negative = matches!(&lead, Coefficient::Rational(r) if r.is_negative());
        Ok(if negative { scaled.neg() } else { scaled })
    } else {
        f.scalar_mul(&lead.inverse()?)
    }
}

/// The square-free part of f: the product of its distinct irreducible
/// factors, computed as f divided by gcd(f, ∂f/∂x₁, …, ∂f/∂xₙ).
///
/// # Errors
///
/// Returns a domain error over a finite field (positive characteristic).
pub fn square_free_part(f: &Polynomial) -> MathResult<Polynomial> {
    if matches!(f.kind(), Some(CoefficientKind::Galois(_))) {
        return Err(MathError::Domain {
            operation: "square_free_part".to_string(),
            reason: "the coefficient field must have characteristic 0".to_string(),
        });
    }
    if f.is_zero() {
        return Ok(f.clone());
    }

    let variables = f.variables();
    let mut gradient: Vec<Polynomial> = variables
        .iter()
        .map(|var| f.derivative(var, 1))
        .collect::<MathResult<_>>()?;
    gradient.push(f.clone());

    let divisor = polynomial_gcd(&gradient)?;
    let (quotients, _) =
        polynomial_reduce(f, &[divisor], &variables, MonomialOrder::Lex)?;
    normalize_coefficients(
        &quotients.into_iter().next().unwrap_or_else(Polynomial::zero),
        false,
    )
}
