//! Integer utilities
//!
//! Variadic gcd/lcm folds over big integers, the extended Euclidean
//! algorithm, and divisor enumeration. The Euclidean machinery itself comes
//! from `num-integer`; this module adds the variadic shapes and the
//! square-root-bounded divisor walk the root finder needs.

use crate::error::{MathError, MathResult};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Signed;

/// Greatest common divisor of the given integers, always non-negative.
///
/// # Errors
///
/// Returns a shape error when `values` is empty.
pub fn integer_gcd(values: &[BigInt]) -> MathResult<BigInt> {
    let (first, rest) = values.split_first().ok_or_else(|| MathError::Shape {
        operation: "integer_gcd".to_string(),
        reason: "at least one integer required".to_string(),
    })?;
    let mut result = first.clone();
    for value in rest {
        result = result.gcd(value);
    }
    Ok(result.abs())
}

/// Least common multiple of the given integers, always non-negative.
///
/// # Errors
///
/// Returns a shape error when `values` is empty.
pub fn integer_lcm(values: &[BigInt]) -> MathResult<BigInt> {
    let (first, rest) = values.split_first().ok_or_else(|| MathError::Shape {
        operation: "integer_lcm".to_string(),
        reason: "at least one integer required".to_string(),
    })?;
    let mut result = first.clone();
    for value in rest {
        result = result.lcm(value);
    }
    Ok(result.abs())
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` with `g = gcd(a, b)` and `a*x + b*y = g`.
pub fn extended_euclid(a: i64, b: i64) -> (i64, i64, i64) {
    let result = a.extended_gcd(&b);
    (result.gcd, result.x, result.y)
}

/// Divisors of `n` in increasing order, found by trial division up to √n.
///
/// # Errors
///
/// Returns a domain error for `n = 0`.
pub fn divisors(n: u64) -> MathResult<Vec<u64>> {
    if n == 0 {
        return Err(MathError::Domain {
            operation: "divisors".to_string(),
            reason: "argument must be a positive integer".to_string(),
        });
    }

    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut i = 1u64;
    while i * i <= n {
        if n % i == 0 {
            small.push(i);
            large.push(n / i);
        }
        i += 1;
    }
    if small.last() == large.last() {
        large.pop();
    }
    large.reverse();
    small.extend(large);
    Ok(small)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_gcd() {
        let values = vec![BigInt::from(12), BigInt::from(-18), BigInt::from(30)];
        assert_eq!(integer_gcd(&values).unwrap(), BigInt::from(6));
        assert!(integer_gcd(&[]).is_err());
    }

    #[test]
    fn test_integer_lcm() {
        let values = vec![BigInt::from(4), BigInt::from(6)];
        assert_eq!(integer_lcm(&values).unwrap(), BigInt::from(12));
        assert!(integer_lcm(&[]).is_err());
    }

    #[test]
    fn test_extended_euclid() {
        let (g, x, y) = extended_euclid(240, 46);
        assert_eq!(g, 2);
        assert_eq!(240 * x + 46 * y, 2);
    }

    #[test]
    fn test_divisors() {
        assert_eq!(divisors(1).unwrap(), vec![1]);
        assert_eq!(divisors(12).unwrap(), vec![1, 2, 3, 4, 6, 12]);
        assert_eq!(divisors(16).unwrap(), vec![1, 2, 4, 8, 16]);
        assert!(divisors(0).is_err());
    }
}
