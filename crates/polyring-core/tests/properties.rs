//! Property tests for the algebraic laws of monomials, polynomials, and the
//! division algorithm, over the exact rational kind.

use polyring_core::prelude::*;
use proptest::prelude::*;
use std::collections::BTreeMap;

fn var(name: char) -> Variable {
    Variable::new(name).unwrap()
}

fn arb_monomial() -> impl Strategy<Value = Monomial> {
    proptest::collection::vec(0u32..4, 3).prop_map(|exponents| {
        Monomial::from_pairs(&[
            (var('x'), exponents[0]),
            (var('y'), exponents[1]),
            (var('z'), exponents[2]),
        ])
    })
}

fn arb_coefficient() -> impl Strategy<Value = Coefficient> {
    (-6i64..=6, 1i64..=4)
        .prop_map(|(numerator, denominator)| {
            Coefficient::rational(numerator, denominator).unwrap()
        })
}

fn arb_polynomial() -> impl Strategy<Value = Polynomial> {
    proptest::collection::vec((arb_monomial(), arb_coefficient()), 0..4).prop_map(|terms| {
        let mut map: BTreeMap<Monomial, Coefficient> = BTreeMap::new();
        for (monomial, coefficient) in terms {
            let entry = map
                .remove(&monomial)
                .map(|existing| existing.add(&coefficient).unwrap())
                .unwrap_or(coefficient);
            map.insert(monomial, entry);
        }
        Polynomial::new(map, Some(CoefficientKind::Rational)).unwrap()
    })
}

proptest! {
    #[test]
    fn monomial_multiplication_is_commutative(a in arb_monomial(), b in arb_monomial()) {
        prop_assert_eq!(a.mul(&b), b.mul(&a));
    }

    #[test]
    fn monomial_multiplication_is_associative(
        a in arb_monomial(),
        b in arb_monomial(),
        c in arb_monomial(),
    ) {
        prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
    }

    #[test]
    fn constant_monomial_is_identity(a in arb_monomial()) {
        prop_assert_eq!(a.mul(&Monomial::constant()), a);
    }

    #[test]
    fn monomial_product_quotient_round_trip(a in arb_monomial(), b in arb_monomial()) {
        let quotient = a.mul(&b).checked_div(&a);
        prop_assert_eq!(quotient, Some(b));
    }

    #[test]
    fn monomial_lcm_gcd_duality(a in arb_monomial(), b in arb_monomial()) {
        prop_assert_eq!(a.lcm(&b).mul(&a.gcd(&b)), a.mul(&b));
    }

    #[test]
    fn polynomial_addition_is_commutative(f in arb_polynomial(), g in arb_polynomial()) {
        prop_assert_eq!(f.add(&g).unwrap(), g.add(&f).unwrap());
    }

    #[test]
    fn polynomial_multiplication_is_commutative(f in arb_polynomial(), g in arb_polynomial()) {
        prop_assert_eq!(f.mul(&g).unwrap(), g.mul(&f).unwrap());
    }

    #[test]
    fn multiplication_distributes_over_addition(
        f in arb_polynomial(),
        g in arb_polynomial(),
        h in arb_polynomial(),
    ) {
        let left = f.add(&g).unwrap().mul(&h).unwrap();
        let right = f.mul(&h).unwrap().add(&g.mul(&h).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn power_exponents_add(f in arb_polynomial(), m in 0u32..3, n in 0u32..3) {
        prop_assume!(!f.is_zero());
        let left = f.pow(m).unwrap().mul(&f.pow(n).unwrap()).unwrap();
        let right = f.pow(m + n).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn subtraction_of_self_is_zero(f in arb_polynomial()) {
        prop_assert!(f.sub(&f).unwrap().is_zero());
    }

    #[test]
    fn division_recombines_and_reduces(
        f in arb_polynomial(),
        g1 in arb_polynomial(),
        g2 in arb_polynomial(),
    ) {
        prop_assume!(!g1.is_zero() && !g2.is_zero());
        let permutation = [var('x'), var('y'), var('z')];
        let basis = [g1, g2];
        let (quotients, remainder) =
            polynomial_reduce(&f, &basis, &permutation, MonomialOrder::Lex).unwrap();

        // f = Σ qᵢ gᵢ + r
        let mut recombined = remainder.clone();
        for (quotient, divisor) in quotients.iter().zip(basis.iter()) {
            recombined = recombined.add(&quotient.mul(divisor).unwrap()).unwrap();
        }
        prop_assert_eq!(&recombined, &f);

        // No term of r is divisible by a divisor's leading monomial.
        for divisor in &basis {
            let lead = leading_monomial(divisor, &permutation, MonomialOrder::Lex).unwrap();
            for monomial in remainder.terms().keys() {
                prop_assert!(monomial.checked_div(&lead).is_none());
            }
        }
    }

    #[test]
    fn graded_lex_respects_multiplication(
        a in arb_monomial(),
        b in arb_monomial(),
        c in arb_monomial(),
    ) {
        // A monomial order is compatible with multiplication.
        let permutation = [var('x'), var('y'), var('z')];
        let before = MonomialOrder::GradedLex.compare(&a, &b, &permutation);
        let after =
            MonomialOrder::GradedLex.compare(&a.mul(&c), &b.mul(&c), &permutation);
        prop_assert_eq!(before, after);
    }
}
