//! Algebraic algorithms over polynomials
//!
//! The Gröbner engine and everything built on its normal-form machinery:
//! ideals and their arithmetic, polynomial gcd/lcm and square-free parts,
//! rational functions, implicitization of parametric varieties, univariate
//! root finding, and the polynomial system solver.

pub mod gcd;
pub mod groebner;
pub mod ideal;
pub mod rational_function;
pub mod root_finding;
pub mod solvers;
pub mod varieties;

pub use gcd::{normalize_coefficients, polynomial_gcd, polynomial_lcm, square_free_part};
pub use groebner::{
    extend_to_groebner_basis, get_groebner_basis, normal_form, polynomial_reduce,
    reduce_groebner_basis, s_polynomial,
};
pub use ideal::Ideal;
pub use rational_function::RationalFunction;
pub use root_finding::find_roots;
pub use solvers::{characteristic_equations, solve_system, SystemSolution};
pub use varieties::{polynomial_implicitization, rational_implicitization};
