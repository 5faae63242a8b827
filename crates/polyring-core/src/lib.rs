//! Core engine for Polyring
//!
//! A multivariate polynomial algebra kernel: exact coefficient arithmetic
//! over rationals, finite fields, reals and complexes; sparse polynomials
//! with lex and graded-lex monomial orders; Buchberger's algorithm with
//! reduced bases; and the classical clients of the normal-form machinery:
//! ideal arithmetic, elimination, implicitization, polynomial gcd/lcm,
//! square-free decomposition, univariate root finding, and the solver for
//! zero-dimensional polynomial systems.
//!
//! The kernel is single-threaded and synchronous; every value is immutable
//! and every operation returns a fresh value. The only process-wide state
//! is the table of primes a finite-field modulus is validated against.

pub mod algebra;
pub mod error;
pub mod number;
pub mod polynomial;

// Curated re-exports (no wildcards for maintainability)

// Core types
pub use error::{MathError, MathResult};
pub use number::{Coefficient, CoefficientKind, GaloisField};
pub use polynomial::{Monomial, MonomialOrder, Polynomial, Variable};

// Polynomial construction and leading-term extraction
pub use polynomial::factory::{define_variable, elementary_symmetric, embed, power_sum};
pub use polynomial::ordering::{leading_coefficient, leading_monomial, leading_term};

// The Gröbner engine
pub use algebra::groebner::{
    extend_to_groebner_basis, get_groebner_basis, normal_form, polynomial_reduce,
    reduce_groebner_basis, s_polynomial,
};

// Clients of the engine
pub use algebra::gcd::{
    normalize_coefficients, polynomial_gcd, polynomial_lcm, square_free_part,
};
pub use algebra::ideal::Ideal;
pub use algebra::rational_function::RationalFunction;
pub use algebra::root_finding::find_roots;
pub use algebra::solvers::{characteristic_equations, solve_system, SystemSolution};
pub use algebra::varieties::{polynomial_implicitization, rational_implicitization};

// Prime table management
pub use number::primes::{extend_primes_up_to, is_known_prime};

/// Convenience prelude for common imports
///
/// Import with `use polyring_core::prelude::*;` to access the types and
/// functions typical computations need.
pub mod prelude {
    pub use crate::algebra::{
        characteristic_equations, find_roots, get_groebner_basis, normal_form,
        normalize_coefficients, polynomial_gcd, polynomial_implicitization,
        polynomial_lcm, polynomial_reduce, rational_implicitization, s_polynomial,
        solve_system, square_free_part, Ideal, RationalFunction, SystemSolution,
    };
    pub use crate::error::{MathError, MathResult};
    pub use crate::number::{Coefficient, CoefficientKind, GaloisField};
    pub use crate::polynomial::factory::{
        define_variable, elementary_symmetric, embed, power_sum,
    };
    pub use crate::polynomial::ordering::{
        leading_coefficient, leading_monomial, leading_term,
    };
    pub use crate::polynomial::{Monomial, MonomialOrder, Polynomial, Variable};
}
