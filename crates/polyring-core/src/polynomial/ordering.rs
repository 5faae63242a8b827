//! Monomial orderings
//!
//! Lexicographic and graded lexicographic orders, both parameterized by a
//! variable permutation: the sequence in which variables are compared. The
//! permutation is what elimination theory manipulates: ranking a saturation
//! variable first makes lex elimination project it away.

use super::monomial::{Monomial, Variable};
use super::Polynomial;
use crate::number::Coefficient;
use std::cmp::Ordering;

/// Monomial ordering types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonomialOrder {
    /// Lexicographic: at the first variable of the permutation where the
    /// exponents differ, the larger exponent wins.
    Lex,

    /// Graded lexicographic: compare total degrees first, break ties
    /// lexicographically.
    GradedLex,
}

impl MonomialOrder {
    /// Compare two monomials under this order and variable permutation.
    ///
    /// Variables absent from the permutation contribute exponent zero.
    pub fn compare(
        &self,
        alpha: &Monomial,
        beta: &Monomial,
        permutation: &[Variable],
    ) -> Ordering {
        match self {
            MonomialOrder::Lex => compare_lex(alpha, beta, permutation),
            MonomialOrder::GradedLex => match alpha.degree().cmp(&beta.degree()) {
                Ordering::Equal => compare_lex(alpha, beta, permutation),
                other => other,
            },
        }
    }
}

fn compare_lex(alpha: &Monomial, beta: &Monomial, permutation: &[Variable]) -> Ordering {
    for var in permutation {
        match alpha.exponent(var).cmp(&beta.exponent(var)) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// The greatest term of `f` under the order, or `None` for the zero
/// polynomial ("leading term undefined").
pub fn leading_term<'a>(
    f: &'a Polynomial,
    permutation: &[Variable],
    order: MonomialOrder,
) -> Option<(&'a Monomial, &'a Coefficient)> {
    f.terms()
        .iter()
        .max_by(|(a, _), (b, _)| order.compare(a, b, permutation))
}

/// The leading monomial of `f`, or `None` for the zero polynomial.
pub fn leading_monomial(
    f: &Polynomial,
    permutation: &[Variable],
    order: MonomialOrder,
) -> Option<Monomial> {
    leading_term(f, permutation, order).map(|(m, _)| m.clone())
}

/// The leading coefficient of `f`, or `None` for the zero polynomial.
pub fn leading_coefficient(
    f: &Polynomial,
    permutation: &[Variable],
    order: MonomialOrder,
) -> Option<Coefficient> {
    leading_term(f, permutation, order).map(|(_, c)| c.clone())
}
