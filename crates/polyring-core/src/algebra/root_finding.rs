//! Univariate root finding
//!
//! Kind-dispatched: exact rational roots by the rational-root theorem,
//! finite-field roots by brute force over the residues, complex roots by
//! Durand–Kerner fixed-point iteration started at the roots of unity, and
//! real roots as the projection of the complex ones.

use crate::error::{MathError, MathResult};
use crate::number::integer::{divisors, integer_lcm};
use crate::number::{Coefficient, CoefficientKind, GaloisField};
use crate::polynomial::factory::embed;
use crate::polynomial::{Polynomial, Variable};
use num_bigint::BigInt;
use num_complex::Complex64;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive};
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::f64::consts::PI;

/// Residual tolerance of the Durand–Kerner iteration, also used when
/// snapping near-real and near-imaginary roots.
pub const DURAND_KERNER_TOLERANCE: f64 = 1e-6;

const DURAND_KERNER_ITERATIONS: usize = 1000;

/// All roots of a univariate polynomial, in its own coefficient kind.
///
/// Over the rationals only rational roots are reported; over a finite field
/// all of them; over the reals and complexes the numerically approximated
/// ones (non-convergence after the iteration cap is tolerated silently).
///
/// # Examples
///
/// ```
/// use polyring_core::prelude::*;
///
/// let x = define_variable(Variable::new('x')?, CoefficientKind::Rational)?;
/// let f = x.pow(2)?.scalar_add(&Coefficient::integer(-1))?;
/// let roots = find_roots(&f)?;
/// assert_eq!(roots.len(), 2);
/// # Ok::<(), polyring_core::MathError>(())
/// ```
///
/// # Errors
///
/// Returns a domain error for a multivariate or zero polynomial.
pub fn find_roots(f: &Polynomial) -> MathResult<Vec<Coefficient>> {
    let variables = f.variables();
    if variables.len() > 1 {
        return Err(MathError::Domain {
            operation: "find_roots".to_string(),
            reason: "the polynomial must be univariate".to_string(),
        });
    }
    match f.kind() {
        None => Err(MathError::Domain {
            operation: "find_roots".to_string(),
            reason: "the zero polynomial vanishes everywhere".to_string(),
        }),
        Some(CoefficientKind::Rational) => rational_roots(f),
        Some(CoefficientKind::Galois(prime)) => galois_roots(f, prime),
        Some(CoefficientKind::Real) => {
            let roots = complex_roots(&embed(f, CoefficientKind::Complex)?)?;
            Ok(roots
                .into_iter()
                .filter(|root| root.im.abs() < DURAND_KERNER_TOLERANCE)
                .map(|root| Coefficient::real(root.re))
                .collect())
        }
        Some(CoefficientKind::Complex) => Ok(complex_roots(f)?
            .into_iter()
            .map(Coefficient::Complex)
            .collect()),
    }
}

/// Rational roots by the rational-root theorem: after clearing
/// denominators, every rational root is ±q/p with q dividing the trailing
/// coefficient and p dividing the leading one.
fn rational_roots(f: &Polynomial) -> MathResult<Vec<Coefficient>> {
    let Some(var) = f.variables().into_iter().next() else {
        // A non-zero constant has no roots.
        return Ok(Vec::new());
    };

    // Clear denominators to integer coefficients.
    let denominators: Vec<BigInt> = f
        .terms()
        .values()
        .filter_map(|c| match c {
            Coefficient::Rational(r) => Some(r.denom().clone()),
            _ => None,
        })
        .collect();
    let clearing = integer_lcm(&denominators)?;
    let g = f.scalar_mul(&Coefficient::Rational(BigRational::from_integer(clearing)))?;

    let leading = coefficient_at_extreme_degree(&g, &var, true)?;
    let trailing = coefficient_at_extreme_degree(&g, &var, false)?;

    let mut candidates: BTreeSet<BigRational> = BTreeSet::new();
    candidates.insert(BigRational::from_integer(BigInt::from(0)));
    for q in divisors(trailing)? {
        for p in divisors(leading)? {
            let positive = BigRational::new(BigInt::from(q), BigInt::from(p));
            candidates.insert(-positive.clone());
            candidates.insert(positive);
        }
    }

    let mut roots = Vec::new();
    for candidate in candidates {
        let mut point = BTreeMap::new();
        point.insert(var, Coefficient::Rational(candidate.clone()));
        if g.evaluate(&point)?.is_zero() {
            roots.push(Coefficient::Rational(candidate));
        }
    }
    Ok(roots)
}

/// The |coefficient| of the highest-degree (or lowest-degree non-zero) term
/// of an integer-coefficient univariate polynomial, as a u64.
fn coefficient_at_extreme_degree(
    g: &Polynomial,
    var: &Variable,
    highest: bool,
) -> MathResult<u64> {
    let term = if highest {
        g.terms().iter().max_by_key(|(m, _)| m.exponent(var))
    } else {
        g.terms().iter().min_by_key(|(m, _)| m.exponent(var))
    };
    let Some((_, Coefficient::Rational(r))) = term else {
        return Err(MathError::Domain {
            operation: "find_roots".to_string(),
            reason: "rational root search requires rational coefficients".to_string(),
        });
    };
    r.numer().abs().to_u64().ok_or_else(|| MathError::Domain {
        operation: "find_roots".to_string(),
        reason: "coefficient too large to enumerate divisors".to_string(),
    })
}

/// Finite-field roots by brute force over all residues.
fn galois_roots(f: &Polynomial, prime: u64) -> MathResult<Vec<Coefficient>> {
    let Some(var) = f.variables().into_iter().next() else {
        return Ok(Vec::new());
    };
    let mut roots = Vec::new();
    for element in GaloisField::elements(prime)? {
        let mut point = BTreeMap::new();
        point.insert(var, Coefficient::Galois(element));
        if f.evaluate(&point)?.is_zero() {
            roots.push(Coefficient::Galois(element));
        }
    }
    Ok(roots)
}

/// Durand–Kerner iteration over a complex-kind polynomial.
///
/// Starts from the n-th roots of unity, iterates
/// `zᵢ ← zᵢ − f(zᵢ)/∏_{j≠i}(zᵢ − zⱼ)` until every residual is below
/// tolerance or the cap is reached, then snaps near-zero real and imaginary
/// parts and keeps a bookkeeping root at zero when f(0) is negligible.
fn complex_roots(f: &Polynomial) -> MathResult<Vec<Complex64>> {
    let degree = f.total_degree();
    if degree < 1 {
        return Ok(Vec::new());
    }
    let degree = degree as usize;
    let Some(var) = f.variables().into_iter().next() else {
        return Ok(Vec::new());
    };

    let evaluate = |z: Complex64| -> MathResult<Complex64> {
        let mut point = BTreeMap::new();
        point.insert(var, Coefficient::Complex(z));
        match f.evaluate(&point)? {
            Coefficient::Complex(value) => Ok(value),
            other => Err(MathError::KindMismatch {
                operation: "find_roots".to_string(),
                left: CoefficientKind::Complex,
                right: other.kind(),
            }),
        }
    };

    let mut iterates: Vec<Complex64> = (0..degree)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / degree as f64;
            Complex64::new(angle.cos(), angle.sin())
        })
        .collect();

    for _ in 0..DURAND_KERNER_ITERATIONS {
        let mut next = Vec::with_capacity(degree);
        for i in 0..degree {
            let numerator = evaluate(iterates[i])?;
            let mut denominator = Complex64::new(1.0, 0.0);
            for j in 0..degree {
                if j != i {
                    denominator *= iterates[i] - iterates[j];
                }
            }
            next.push(iterates[i] - numerator / denominator);
        }
        iterates = next;

        let mut converged = true;
        for iterate in &iterates {
            if evaluate(*iterate)?.norm() >= DURAND_KERNER_TOLERANCE {
                converged = false;
                break;
            }
        }
        if converged {
            break;
        }
    }

    let mut roots = Vec::new();
    if evaluate(Complex64::new(0.0, 0.0))?.norm() < DURAND_KERNER_TOLERANCE {
        roots.push(Complex64::new(0.0, 0.0));
    }
    for mut root in iterates {
        if root.im.abs() > DURAND_KERNER_TOLERANCE || root.re.abs() > DURAND_KERNER_TOLERANCE {
            if root.im.abs() < DURAND_KERNER_TOLERANCE {
                root.im = 0.0;
            }
            if root.re.abs() < DURAND_KERNER_TOLERANCE {
                root.re = 0.0;
            }
            roots.push(root);
        }
    }
    Ok(roots)
}
