//! Multivariate polynomial division
//!
//! The division algorithm for multivariate polynomials: divide a polynomial
//! by an ordered list of divisors, producing one quotient per divisor and a
//! remainder none of whose terms is divisible by any divisor's leading term.

use crate::error::MathResult;
use crate::polynomial::ordering::{leading_term, MonomialOrder};
use crate::polynomial::{Monomial, Polynomial, Variable};
use crate::number::Coefficient;

/// Divide `f` by the ordered list `basis`.
///
/// Returns `(quotients, remainder)` with
/// `f = Σ quotientsᵢ · basisᵢ + remainder` and no term of the remainder
/// divisible by the leading term of any divisor.
///
/// The *first* divisor in index order whose leading term divides wins each
/// round; that tie-break is part of the contract, and the result depends on
/// the order of `basis`. Non-divisibility of a monomial pair is an `Option`
/// miss here, never an error; a leading term no divisor matches moves to the
/// remainder.
pub fn polynomial_reduce(
    f: &Polynomial,
    basis: &[Polynomial],
    permutation: &[Variable],
    order: MonomialOrder,
) -> MathResult<(Vec<Polynomial>, Polynomial)> {
    let zero = || match f.kind() {
        Some(kind) => Polynomial::zero_of(kind),
        None => Polynomial::zero(),
    };
    let mut quotients = vec![zero(); basis.len()];
    let mut remainder = zero();
    let mut p = f.clone();

    // Leading terms of the divisors are fixed for the whole division.
    let divisor_leads: Vec<Option<(Monomial, Coefficient)>> = basis
        .iter()
        .map(|g| leading_term(g, permutation, order).map(|(m, c)| (m.clone(), c.clone())))
        .collect();

    loop {
        let lead =
            leading_term(&p, permutation, order).map(|(m, c)| (m.clone(), c.clone()));
        let Some((p_monomial, p_coefficient)) = lead else {
            break;
        };

        let mut divided = false;
        for (i, g) in basis.iter().enumerate() {
            let Some((g_monomial, g_coefficient)) = &divisor_leads[i] else {
                continue;
            };
            if let Some(ratio) = p_monomial.checked_div(g_monomial) {
                let coefficient = p_coefficient.div(g_coefficient)?;
                let term = Polynomial::term(ratio, coefficient);
                // A quotient term that collapses to structural zero (inexact
                // kinds) cannot make progress; fall through to the next
                // divisor instead of looping.
                if term.is_zero() {
                    continue;
                }
                quotients[i] = quotients[i].add(&term)?;
                p = p.sub(&term.mul(g)?)?;
                divided = true;
                break;
            }
        }

        if !divided {
            let term = Polynomial::term(p_monomial, p_coefficient);
            remainder = remainder.add(&term)?;
            p = p.sub(&term)?;
        }
    }

    Ok((quotients, remainder))
}

/// The remainder of dividing `f` by `basis`: the normal form of `f` when
/// `basis` is a Gröbner basis.
pub fn normal_form(
    f: &Polynomial,
    basis: &[Polynomial],
    permutation: &[Variable],
    order: MonomialOrder,
) -> MathResult<Polynomial> {
    Ok(polynomial_reduce(f, basis, permutation, order)?.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::{Coefficient, CoefficientKind};
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

    fn check_division_identity(
        f: &Polynomial,
        basis: &[Polynomial],
        permutation: &[Variable],
    ) {
        let (quotients, remainder) =
            polynomial_reduce(f, basis, permutation, MonomialOrder::Lex).unwrap();
        let mut recombined = remainder.clone();
        for (quotient, divisor) in quotients.iter().zip(basis) {
            recombined = recombined.add(&quotient.mul(divisor).unwrap()).unwrap();
        }
        assert_eq!(&recombined, f);
    }

    #[test]
    fn test_division_identity() {
        // f = x²y + xy² + y², divided by [xy - 1, y² - 1]
        let f = x()
            .pow(2)
            .unwrap()
            .mul(&y())
            .unwrap()
            .add(&x().mul(&y().pow(2).unwrap()).unwrap())
            .unwrap()
            .add(&y().pow(2).unwrap())
            .unwrap();
        let g1 = x()
            .mul(&y())
            .unwrap()
            .scalar_add(&Coefficient::integer(-1))
            .unwrap();
        let g2 = y()
            .pow(2)
            .unwrap()
            .scalar_add(&Coefficient::integer(-1))
            .unwrap();
        let basis = [g1, g2];
        let permutation = [var('x'), var('y')];

        check_division_identity(&f, &basis, &permutation);

        // The textbook remainder for this division is x + y + 1.
        let (_, remainder) =
            polynomial_reduce(&f, &basis, &permutation, MonomialOrder::Lex).unwrap();
        let expected = x()
            .add(&y())
            .unwrap()
            .scalar_add(&Coefficient::integer(1))
            .unwrap();
        assert_eq!(remainder, expected);
    }

    #[test]
    fn test_divisor_order_matters() {
        // Same dividend, divisors swapped: remainder changes (documented
        // behavior of the first-divisor-wins tie-break).
        let f = x()
            .pow(2)
            .unwrap()
            .mul(&y())
            .unwrap()
            .add(&x().mul(&y().pow(2).unwrap()).unwrap())
            .unwrap()
            .add(&y().pow(2).unwrap())
            .unwrap();
        let g1 = x()
            .mul(&y())
            .unwrap()
            .scalar_add(&Coefficient::integer(-1))
            .unwrap();
        let g2 = y()
            .pow(2)
            .unwrap()
            .scalar_add(&Coefficient::integer(-1))
            .unwrap();
        let permutation = [var('x'), var('y')];

        let (_, r12) =
            polynomial_reduce(&f, &[g1.clone(), g2.clone()], &permutation, MonomialOrder::Lex)
                .unwrap();
        let (_, r21) =
            polynomial_reduce(&f, &[g2.clone(), g1.clone()], &permutation, MonomialOrder::Lex)
                .unwrap();
        assert_ne!(r12, r21);
        check_division_identity(&f, &[g2, g1], &permutation);
    }

    #[test]
    fn test_remainder_not_divisible_by_leading_terms() {
        let f = x().pow(3).unwrap().add(&y().pow(3).unwrap()).unwrap();
        let g = x().sub(&y()).unwrap();
        let permutation = [var('x'), var('y')];
        let (_, remainder) =
            polynomial_reduce(&f, &[g.clone()], &permutation, MonomialOrder::Lex).unwrap();
        let lead = crate::polynomial::ordering::leading_monomial(
            &g,
            &permutation,
            MonomialOrder::Lex,
        )
        .unwrap();
        for monomial in remainder.terms().keys() {
            assert!(monomial.checked_div(&lead).is_none());
        }
    }

    #[test]
    fn test_zero_dividend() {
        let basis = [x()];
        let permutation = [var('x')];
        let (quotients, remainder) =
            polynomial_reduce(&Polynomial::zero(), &basis, &permutation, MonomialOrder::Lex)
                .unwrap();
        assert!(remainder.is_zero());
        assert!(quotients[0].is_zero());
    }

    #[test]
    fn test_zero_divisor_is_skipped() {
        let f = x().pow(2).unwrap();
        let basis = [Polynomial::zero(), x()];
        let permutation = [var('x')];
        let (quotients, remainder) =
            polynomial_reduce(&f, &basis, &permutation, MonomialOrder::Lex).unwrap();
        assert!(remainder.is_zero());
        assert!(quotients[0].is_zero());
        assert_eq!(quotients[1], x());
    }
}
