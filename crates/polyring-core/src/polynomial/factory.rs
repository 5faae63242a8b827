//! Polynomial constructors
//!
//! Entry points for building the polynomials users start from: single
//! variables, constants, the classical symmetric polynomials, and the
//! explicit embedding of a polynomial into another coefficient kind.

use super::monomial::{Monomial, Variable};
use super::Polynomial;
use crate::error::{MathError, MathResult};
use crate::number::{Coefficient, CoefficientKind};
use std::collections::BTreeMap;

/// The polynomial `1 · var` over the given kind.
pub fn define_variable(var: Variable, kind: CoefficientKind) -> MathResult<Polynomial> {
    Ok(Polynomial::term(
        Monomial::variable(var),
        Coefficient::one(kind)?,
    ))
}

/// The elementary symmetric polynomial e_k in the given variables.
///
/// By convention e_k = 0 for k ≤ 0 and for k greater than the number of
/// variables.
pub fn elementary_symmetric(
    degree: i64,
    variables: &[Variable],
    kind: CoefficientKind,
) -> MathResult<Polynomial> {
    let n = variables.len();
    if degree <= 0 || degree as usize > n {
        return Ok(Polynomial::zero_of(kind));
    }

    let mut terms = BTreeMap::new();
    for subset in index_combinations(n, degree as usize) {
        let monomial = Monomial::from_pairs(
            &subset
                .iter()
                .map(|&i| (variables[i], 1))
                .collect::<Vec<_>>(),
        );
        terms.insert(monomial, Coefficient::one(kind)?);
    }
    Polynomial::new(terms, Some(kind))
}

/// The power sum polynomial p_k = x₁ᵏ + … + xₙᵏ.
///
/// # Errors
///
/// Returns a domain error for k ≤ 0.
pub fn power_sum(
    degree: i64,
    variables: &[Variable],
    kind: CoefficientKind,
) -> MathResult<Polynomial> {
    if degree <= 0 {
        return Err(MathError::Domain {
            operation: "power_sum".to_string(),
            reason: "degree of a power sum must be positive".to_string(),
        });
    }

    let mut terms = BTreeMap::new();
    for var in variables {
        terms.insert(
            Monomial::from_pairs(&[(*var, degree as u32)]),
            Coefficient::one(kind)?,
        );
    }
    Polynomial::new(terms, Some(kind))
}

/// Embed a polynomial into another coefficient kind, coefficient by
/// coefficient.
///
/// The embedding matrix is the closed one of
/// [`Coefficient::embed_into`]; directions that lose information fail with
/// a domain error.
pub fn embed(f: &Polynomial, kind: CoefficientKind) -> MathResult<Polynomial> {
    if f.kind() == Some(kind) {
        return Ok(f.clone());
    }
    let mut terms = BTreeMap::new();
    for (monomial, coefficient) in f.terms() {
        terms.insert(monomial.clone(), coefficient.embed_into(kind)?);
    }
    Polynomial::new(terms, Some(kind))
}

/// All k-element subsets of `0..n`, each in increasing order.
fn index_combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut result = Vec::new();
    let mut current = Vec::with_capacity(k);
    fn walk(start: usize, n: usize, k: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in start..n {
            current.push(i);
            walk(i + 1, n, k, current, out);
            current.pop();
        }
    }
    walk(0, n, k, &mut current, &mut result);
    result
}
