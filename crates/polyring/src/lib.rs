//! Polyring: multivariate polynomial algebra
//!
//! Polyring is a polynomial algebra library built around Gröbner bases:
//! exact arithmetic over rationals and finite fields (plus floating real
//! and complex coefficients), Buchberger's algorithm with reduced bases,
//! and the classical applications: ideal arithmetic and elimination,
//! implicitization of parametric varieties, polynomial gcd/lcm, square-free
//! decomposition, root finding, and zero-dimensional system solving.
//!
//! # Quick Start
//!
//! ```rust
//! use polyring::prelude::*;
//!
//! // Work in ℚ[x, y].
//! let x = define_variable(Variable::new('x')?, CoefficientKind::Rational)?;
//! let y = define_variable(Variable::new('y')?, CoefficientKind::Rational)?;
//!
//! // I = ⟨x² + y² - 2, x - y⟩ has the two points (±1, ±1).
//! let circle = x.pow(2)?.add(&y.pow(2)?)?.scalar_add(&Coefficient::integer(-2))?;
//! let line = x.sub(&y)?;
//!
//! match solve_system(&[circle, line], None)? {
//!     SystemSolution::Finite(solutions) => assert_eq!(solutions.len(), 2),
//!     other => panic!("unexpected outcome {:?}", other),
//! }
//! # Ok::<(), polyring::MathError>(())
//! ```

pub use polyring_core as core;

// Re-export the arbitrary-precision arithmetic crates so downstream users
// can build coefficients without adding their own dependency lines.
pub use num_bigint;
pub use num_rational;

pub use polyring_core::{
    characteristic_equations, define_variable, elementary_symmetric, embed,
    extend_primes_up_to, find_roots, get_groebner_basis, is_known_prime, normal_form,
    normalize_coefficients, polynomial_gcd, polynomial_implicitization, polynomial_lcm,
    polynomial_reduce, power_sum, rational_implicitization, s_polynomial, solve_system,
    square_free_part, Coefficient, CoefficientKind, GaloisField, Ideal, MathError,
    MathResult, Monomial, MonomialOrder, Polynomial, RationalFunction, SystemSolution,
    Variable,
};

/// Convenience prelude for common imports
pub mod prelude {
    pub use polyring_core::prelude::*;
}
