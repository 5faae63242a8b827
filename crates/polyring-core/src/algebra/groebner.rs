//! Gröbner basis computation
//!
//! Multivariate polynomial division, S-polynomials, and Buchberger's
//! algorithm with the lcm and chain pair-selection criteria, plus reduction
//! of the result to a minimal (optionally monic) basis. Everything is
//! parameterized by a monomial order and a variable permutation; elimination
//! theory works by ranking the variables to be eliminated first under lex.

mod buchberger;
mod reduction;
mod s_polynomial;

pub use buchberger::{extend_to_groebner_basis, get_groebner_basis, reduce_groebner_basis};
pub use reduction::{normal_form, polynomial_reduce};
pub use s_polynomial::s_polynomial;
