//! Implicitization of parametric varieties
//!
//! Given coordinates expressed as polynomial or rational functions of
//! parameters, compute the implicit equations of the image variety: build
//! the graph ideal, rank parameters (and the saturation variable, for the
//! rational case) above the coordinates in lex, and keep the basis elements
//! that only mention coordinates.

use crate::algebra::gcd::normalize_coefficients;
use crate::algebra::groebner::get_groebner_basis;
use crate::algebra::ideal::Ideal;
use crate::algebra::rational_function::RationalFunction;
use crate::error::{MathError, MathResult};
use crate::number::{Coefficient, CoefficientKind};
use crate::polynomial::factory::define_variable;
use crate::polynomial::{Monomial, MonomialOrder, Polynomial, Variable};
use std::collections::{BTreeMap, BTreeSet};

fn reject_positive_characteristic(
    kind: CoefficientKind,
    operation: &str,
) -> MathResult<CoefficientKind> {
    if matches!(kind, CoefficientKind::Galois(_)) {
        return Err(MathError::Domain {
            operation: operation.to_string(),
            reason: "the coefficient field must have characteristic 0".to_string(),
        });
    }
    Ok(kind)
}

/// Implicit equations of the variety parameterized by polynomials.
///
/// For `{x: u·v, y: v, z: u²}` the result is `[y²z − x²]`. Output
/// polynomials are normalized to relatively prime integer coefficients with
/// positive graded-lex leading coefficient (rational kind), or monic
/// otherwise.
///
/// # Errors
///
/// Returns a domain error over a finite field.
pub fn polynomial_implicitization(
    map: &BTreeMap<Variable, Polynomial>,
) -> MathResult<Vec<Polynomial>> {
    let Some(kind) = map.values().find_map(|f| f.kind()) else {
        return Ok(vec![Polynomial::zero()]);
    };
    let kind = reject_positive_characteristic(kind, "polynomial_implicitization")?;

    let parameters: BTreeSet<Variable> =
        map.values().flat_map(|f| f.variables()).collect();
    let coordinates: Vec<Variable> = map.keys().copied().collect();

    let mut generators = Vec::new();
    for (coordinate, f) in map {
        let x = define_variable(*coordinate, kind)?;
        generators.push(f.sub(&x)?);
    }

    let mut permutation: Vec<Variable> = parameters.into_iter().collect();
    permutation.extend(coordinates.iter().copied());

    let basis = get_groebner_basis(&generators, &permutation, MonomialOrder::Lex, true)?;
    Ideal::elimination_ideal(&basis, &coordinates)
        .iter()
        .map(|h| normalize_coefficients(h, true))
        .collect()
}

/// Implicit equations of the variety parameterized by rational functions.
///
/// For `{x: (1 − t²)/(1 + t²), y: 2t/(1 + t²)}` the result is
/// `[x² + y² − 1]`. The graph ideal is saturated by the product of the
/// denominators via the reserved variable, ranked highest.
///
/// # Errors
///
/// Returns a domain error over a finite field.
pub fn rational_implicitization(
    map: &BTreeMap<Variable, RationalFunction>,
) -> MathResult<Vec<Polynomial>> {
    let Some(first) = map.values().next() else {
        return Ok(vec![Polynomial::zero()]);
    };
    let kind = reject_positive_characteristic(first.kind(), "rational_implicitization")?;

    let parameters: BTreeSet<Variable> =
        map.values().flat_map(|f| f.variables()).collect();
    let coordinates: Vec<Variable> = map.keys().copied().collect();

    let mut generators = Vec::new();
    let mut denominator_product = Polynomial::term(
        Monomial::variable(Variable::saturation()),
        Coefficient::one(kind)?,
    );
    for (coordinate, f) in map {
        let x = define_variable(*coordinate, kind)?;
        generators.push(f.numerator().sub(&x.mul(f.denominator())?)?);
        denominator_product = denominator_product.mul(f.denominator())?;
    }
    // 1 − t·∏qᵢ forces every denominator to stay invertible.
    generators.push(Polynomial::one_of(kind)?.sub(&denominator_product)?);

    let mut permutation = vec![Variable::saturation()];
    permutation.extend(parameters.iter().copied());
    permutation.extend(coordinates.iter().copied());

    let basis = get_groebner_basis(&generators, &permutation, MonomialOrder::Lex, true)?;
    Ideal::elimination_ideal(&basis, &coordinates)
        .iter()
        .map(|h| normalize_coefficients(h, true))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: char) -> Variable {
        Variable::new(name).unwrap()
    }

    fn variable(name: char) -> Polynomial {
        define_variable(var(name), CoefficientKind::Rational).unwrap()
    }

    #[test]
    fn test_whitney_umbrella() {
        // x = uv, y = v, z = u² gives y²z - x².
        let u = variable('u');
        let v = variable('v');
        let mut map = BTreeMap::new();
        map.insert(var('x'), u.mul(&v).unwrap());
        map.insert(var('y'), v.clone());
        map.insert(var('z'), u.pow(2).unwrap());

        let implicit = polynomial_implicitization(&map).unwrap();

        let expected = variable('y')
            .pow(2)
            .unwrap()
            .mul(&variable('z'))
            .unwrap()
            .sub(&variable('x').pow(2).unwrap())
            .unwrap();
        assert_eq!(implicit.len(), 1);
        assert_eq!(implicit[0], expected);
    }

    #[test]
    fn test_parabola() {
        // x = t, y = t² gives y - x².
        let t = variable('t');
        let mut map = BTreeMap::new();
        map.insert(var('x'), t.clone());
        map.insert(var('y'), t.pow(2).unwrap());

        let implicit = polynomial_implicitization(&map).unwrap();
        // Normalization makes the graded-lex leading coefficient positive,
        // so the curve comes out as x² - y.
        let expected = variable('x').pow(2).unwrap().sub(&variable('y')).unwrap();
        assert!(implicit.contains(&expected));
    }

    #[test]
    fn test_substituting_back_vanishes() {
        let u = variable('u');
        let v = variable('v');
        let mut map = BTreeMap::new();
        map.insert(var('x'), u.mul(&v).unwrap());
        map.insert(var('y'), v.clone());
        map.insert(var('z'), u.pow(2).unwrap());

        for implicit in polynomial_implicitization(&map).unwrap() {
            let mut substituted = implicit;
            for (coordinate, value) in &map {
                // Replace each coordinate variable by its parameterization.
                let mut acc = Polynomial::zero();
                for (monomial, coefficient) in substituted.terms() {
                    let exponent = monomial.exponent(coordinate);
                    let rest = monomial
                        .checked_div(&Monomial::from_pairs(&[(*coordinate, exponent)]))
                        .unwrap_or_else(Monomial::constant);
                    let term = Polynomial::term(rest, coefficient.clone())
                        .mul(&value.pow(exponent).unwrap())
                        .unwrap();
                    acc = acc.add(&term).unwrap();
                }
                substituted = acc;
            }
            assert!(substituted.is_zero());
        }
    }

    #[test]
    fn test_circle_from_stereographic_projection() {
        // x = (1 - t²)/(1 + t²), y = 2t/(1 + t²) gives x² + y² - 1.
        let t = variable('t');
        let one_plus_t2 = t
            .pow(2)
            .unwrap()
            .scalar_add(&Coefficient::integer(1))
            .unwrap();
        let one_minus_t2 = Polynomial::constant(Coefficient::integer(1))
            .sub(&t.pow(2).unwrap())
            .unwrap();
        let two_t = t.scalar_mul(&Coefficient::integer(2)).unwrap();

        let mut map = BTreeMap::new();
        map.insert(
            var('x'),
            RationalFunction::new(one_minus_t2, one_plus_t2.clone()).unwrap(),
        );
        map.insert(
            var('y'),
            RationalFunction::new(two_t, one_plus_t2).unwrap(),
        );

        let implicit = rational_implicitization(&map).unwrap();

        let expected = variable('x')
            .pow(2)
            .unwrap()
            .add(&variable('y').pow(2).unwrap())
            .unwrap()
            .scalar_add(&Coefficient::integer(-1))
            .unwrap();
        assert_eq!(implicit.len(), 1);
        assert_eq!(implicit[0], expected);
    }

    #[test]
    fn test_empty_map() {
        let empty: BTreeMap<Variable, Polynomial> = BTreeMap::new();
        let implicit = polynomial_implicitization(&empty).unwrap();
        assert_eq!(implicit, vec![Polynomial::zero()]);
    }

    #[test]
    fn test_rejects_finite_fields() {
        let x = define_variable(var('u'), CoefficientKind::Galois(5)).unwrap();
        let mut map = BTreeMap::new();
        map.insert(var('x'), x);
        assert!(polynomial_implicitization(&map).is_err());
    }
}
