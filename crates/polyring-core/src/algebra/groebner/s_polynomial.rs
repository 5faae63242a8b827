//! S-polynomial computation
//!
//! The S-polynomial of two polynomials cancels their leading terms:
//! `S(f, g) = (lcm(LT f, LT g)/LT f)·(1/LC f)·f − (lcm/LT g)·(1/LC g)·g`.
//! Buchberger's algorithm extends a basis by the non-zero normal forms of
//! these combinations.

use crate::error::MathResult;
use crate::number::Coefficient;
use crate::polynomial::ordering::{leading_term, MonomialOrder};
use crate::polynomial::{Polynomial, Variable};

/// The S-polynomial of `f` and `g` under the given order.
///
/// Zero for a zero input (there is no leading term to cancel).
pub fn s_polynomial(
    f: &Polynomial,
    g: &Polynomial,
    permutation: &[Variable],
    order: MonomialOrder,
) -> MathResult<Polynomial> {
    let Some((f_lead, g_lead)) = leading_term(f, permutation, order)
        .zip(leading_term(g, permutation, order))
    else {
        return Ok(Polynomial::zero());
    };

    let (f_monomial, f_coefficient) = f_lead;
    let (g_monomial, g_coefficient) = g_lead;
    let lcm = f_monomial.lcm(g_monomial);
    let one = Coefficient::one(f_coefficient.kind())?;

    let f_factor = Polynomial::term(
        lcm.checked_div(f_monomial)
            .expect("lcm is divisible by both of its arguments"),
        one.div(f_coefficient)?,
    );
    let g_factor = Polynomial::term(
        lcm.checked_div(g_monomial)
            .expect("lcm is divisible by both of its arguments"),
        one.div(g_coefficient)?,
    );

    f_factor.mul(f)?.sub(&g_factor.mul(g)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::{Coefficient, CoefficientKind};
    use crate::polynomial::factory::define_variable;
    use crate::polynomial::ordering::leading_monomial;
    use crate::polynomial::Monomial;

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
    fn test_leading_terms_cancel() {
        // f = x³ - 2xy, g = x²y - 2y² + x, the running example of
        // Buchberger expositions.
        let f = x()
            .pow(3)
            .unwrap()
            .sub(
                &x()
                    .mul(&y())
                    .unwrap()
                    .scalar_mul(&Coefficient::integer(2))
                    .unwrap(),
            )
            .unwrap();
        let g = x()
            .pow(2)
            .unwrap()
            .mul(&y())
            .unwrap()
            .sub(&y().pow(2).unwrap().scalar_mul(&Coefficient::integer(2)).unwrap())
            .unwrap()
            .add(&x())
            .unwrap();
        let permutation = [var('x'), var('y')];
        let order = MonomialOrder::GradedLex;

        let s = s_polynomial(&f, &g, &permutation, order).unwrap();
        // S(f, g) = -x² for graded lex with x > y.
        let expected = x().pow(2).unwrap().neg();
        assert_eq!(s, expected);

        // The common leading monomial x³y is gone.
        let lead = leading_monomial(&s, &permutation, order).unwrap();
        assert_ne!(lead, Monomial::from_pairs(&[(var('x'), 3), (var('y'), 1)]));
    }

    #[test]
    fn test_s_polynomial_of_identical_is_zero() {
        let f = x().pow(2).unwrap().add(&y()).unwrap();
        let permutation = [var('x'), var('y')];
        let s = s_polynomial(&f, &f, &permutation, MonomialOrder::Lex).unwrap();
        assert!(s.is_zero());
    }

    #[test]
    fn test_s_polynomial_with_zero() {
        let f = x();
        let permutation = [var('x')];
        let s =
            s_polynomial(&f, &Polynomial::zero(), &permutation, MonomialOrder::Lex).unwrap();
        assert!(s.is_zero());
    }
}
