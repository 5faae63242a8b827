//! Error types for algebraic operations
//!
//! This module defines the error types for operations that can fail due to
//! domain restrictions, coefficient-kind mismatches, or malformed arguments.

use crate::number::CoefficientKind;
use std::fmt;

/// Error type for the polynomial algebra engine
///
/// Represents the conditions under which an algebraic operation is refused:
/// the operation does not apply to its input (domain), the operands live over
/// different coefficient kinds, a division hit a zero divisor, or the
/// arguments have the wrong shape (for example an empty variadic GCD).
///
/// Monomial non-divisibility is deliberately *not* represented here: it is a
/// control signal inside the division algorithm and surfaces as `Option`,
/// never as an error.
#[derive(Debug, Clone, PartialEq)]
pub enum MathError {
    /// Operation not valid for the given input
    ///
    /// # Examples
    ///
    /// - constructing a finite-field element over a non-prime modulus
    /// - square-free part over positive characteristic
    /// - root finding on a multivariate polynomial
    Domain {
        operation: String,
        reason: String,
    },

    /// Arithmetic between values of different coefficient kinds
    ///
    /// Raised for mixed-kind polynomial arithmetic and for finite-field
    /// operands with different primes.
    KindMismatch {
        operation: String,
        left: CoefficientKind,
        right: CoefficientKind,
    },

    /// Division by zero
    ///
    /// # Examples
    ///
    /// - a rational coefficient divided by zero
    /// - the inverse of 0 in a finite field
    /// - a rational function with zero denominator
    DivisionByZero,

    /// Malformed argument list
    ///
    /// # Examples
    ///
    /// - variadic GCD/LCM of an empty slice
    /// - an evaluation point missing one of the polynomial's variables
    Shape {
        operation: String,
        reason: String,
    },
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MathError::Domain { operation, reason } => {
                write!(f, "Domain error in {}: {}", operation, reason)
            }
            MathError::KindMismatch { operation, left, right } => {
                write!(
                    f,
                    "Kind mismatch in {}: {} vs {}",
                    operation, left, right
                )
            }
            MathError::DivisionByZero => {
                write!(f, "Division by zero")
            }
            MathError::Shape { operation, reason } => {
                write!(f, "Malformed arguments to {}: {}", operation, reason)
            }
        }
    }
}

impl std::error::Error for MathError {}

/// Type alias for algebraic operations that can fail
pub type MathResult<T> = Result<T, MathError>;
