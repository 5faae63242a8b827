//! Buchberger's algorithm
//!
//! Basis extension by S-polynomial remainders with the two classical
//! pair-skipping criteria, followed by reduction to a minimal and fully
//! reduced (optionally monic) basis.

use super::reduction::polynomial_reduce;
use super::s_polynomial::s_polynomial;
use crate::error::MathResult;
use crate::polynomial::ordering::{leading_coefficient, leading_monomial, MonomialOrder};
use crate::polynomial::{Monomial, Polynomial, Variable};

/// Extend a generating set to a Gröbner basis.
///
/// Repeats passes over all unordered pairs, appending every non-zero
/// S-polynomial remainder, until a pass adds nothing. S-polynomials are
/// reduced against the pass-initial basis. Termination follows from the
/// ascending chain of leading-term ideals.
pub fn extend_to_groebner_basis(
    basis: &[Polynomial],
    permutation: &[Variable],
    order: MonomialOrder,
) -> MathResult<Vec<Polynomial>> {
    let mut current: Vec<Polynomial> = basis.to_vec();
    loop {
        let mut extended = current.clone();
        for i in 0..current.len() {
            for j in (i + 1)..current.len() {
                let leads = leading_monomial(&current[i], permutation, order)
                    .zip(leading_monomial(&current[j], permutation, order));
                let Some((lead_i, lead_j)) = leads else {
                    continue;
                };
                if lcm_criterion(&lead_i, &lead_j)
                    || chain_criterion(&lead_i, &lead_j, j, &current, permutation, order)
                {
                    continue;
                }
                let s = s_polynomial(&current[i], &current[j], permutation, order)?;
                let (_, remainder) = polynomial_reduce(&s, &current, permutation, order)?;
                if !remainder.is_zero() {
                    extended.push(remainder);
                }
            }
        }

        if extended.len() == current.len() {
            return Ok(extended);
        }
        current = extended;
    }
}

/// Skip a pair whose leading monomials are coprime: their S-polynomial
/// always reduces to zero.
fn lcm_criterion(alpha: &Monomial, beta: &Monomial) -> bool {
    alpha.lcm(beta) == alpha.mul(beta)
}

/// Skip the pair (i, j) when some later basis element's leading term
/// divides lcm(LT i, LT j).
///
/// Only indices k > j are scanned, which is weaker than the symmetric
/// Buchberger criterion; redundant pairs may still be processed, but the
/// computed ideal is the same.
fn chain_criterion(
    lead_i: &Monomial,
    lead_j: &Monomial,
    j: usize,
    basis: &[Polynomial],
    permutation: &[Variable],
    order: MonomialOrder,
) -> bool {
    let lcm = lead_i.lcm(lead_j);
    basis[j + 1..].iter().any(|g| {
        leading_monomial(g, permutation, order)
            .is_some_and(|lead_k| lcm.checked_div(&lead_k).is_some())
    })
}

/// Whether the leading term of `f` is divisible by the leading term of some
/// element of `basis`.
fn is_in_leading_term_ideal(
    f: &Polynomial,
    basis: &[Polynomial],
    permutation: &[Variable],
    order: MonomialOrder,
) -> bool {
    let Some(lead) = leading_monomial(f, permutation, order) else {
        return false;
    };
    basis.iter().any(|g| {
        leading_monomial(g, permutation, order)
            .is_some_and(|lead_g| lead.checked_div(&lead_g).is_some())
    })
}

/// Reduce a Gröbner basis to a minimal, fully reduced basis.
///
/// First drops every element whose leading term lies in the leading-term
/// ideal of the rest, then repeatedly replaces each element by its normal
/// form modulo the others until a full pass changes nothing. With
/// `normalize` each element is finally divided by its leading coefficient.
pub fn reduce_groebner_basis(
    basis: &[Polynomial],
    permutation: &[Variable],
    order: MonomialOrder,
    normalize: bool,
) -> MathResult<Vec<Polynomial>> {
    let mut minimal: Vec<Polynomial> = basis.to_vec();
    for g in basis {
        if let Some(position) = minimal.iter().position(|h| h == g) {
            minimal.remove(position);
            if !is_in_leading_term_ideal(g, &minimal, permutation, order) {
                minimal.push(g.clone());
            }
        }
    }

    let size = minimal.len();
    let mut unchanged = 0;
    while unchanged < size {
        unchanged = 0;
        for i in 0..minimal.len() {
            let mut others = minimal.clone();
            others.remove(i);
            let (_, reduced) = polynomial_reduce(&minimal[i], &others, permutation, order)?;
            let stable = reduced == minimal[i];
            minimal[i] = reduced;
            if stable {
                unchanged += 1;
            }
        }
    }
    minimal.retain(|g| !g.is_zero());

    if normalize {
        for g in minimal.iter_mut() {
            if let Some(lead) = leading_coefficient(g, permutation, order) {
                *g = g.scalar_mul(&lead.inverse()?)?;
            }
        }
    }

    Ok(minimal)
}

/// The reduced Gröbner basis of the ideal generated by `basis`, under the
/// given order and variable permutation.
///
/// # Examples
///
/// ```
/// use polyring_core::prelude::*;
///
/// let x = define_variable(Variable::new('x')?, CoefficientKind::Rational)?;
/// let y = define_variable(Variable::new('y')?, CoefficientKind::Rational)?;
/// let circle = x.pow(2)?.add(&y.pow(2)?)?.scalar_add(&Coefficient::integer(-1))?;
/// let line = x.sub(&y)?;
///
/// let permutation = [Variable::new('x')?, Variable::new('y')?];
/// let basis = get_groebner_basis(&[circle, line], &permutation, MonomialOrder::Lex, true)?;
/// assert_eq!(basis.len(), 2);
/// # Ok::<(), polyring_core::MathError>(())
/// ```
pub fn get_groebner_basis(
    basis: &[Polynomial],
    permutation: &[Variable],
    order: MonomialOrder,
    normalize: bool,
) -> MathResult<Vec<Polynomial>> {
    let extended = extend_to_groebner_basis(basis, permutation, order)?;
    reduce_groebner_basis(&extended, permutation, order, normalize)
}
