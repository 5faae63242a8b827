//! Monomials over named variables
//!
//! A monomial like x²y³z is an immutable map from variable to positive
//! exponent; the empty map is the constant monomial 1. Division is partial
//! and returns `None` when any exponent would go negative; callers branch
//! on the option instead of catching anything.

use crate::error::{MathError, MathResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single-character variable name
///
/// The allowed alphabet is Latin `A`–`Z`, `a`–`z` and the lowercase Greek
/// letters `α`–`ω` (including the final sigma `ς`). The underscore is
/// reserved as the saturation variable used internally by intersection and
/// lcm computations; it is only constructible through
/// [`Variable::saturation`] so it can never clash with user input.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Variable(char);

const SATURATION_NAME: char = '_';

impl Variable {
    /// Create a variable from its name.
    ///
    /// # Errors
    ///
    /// Returns a domain error for characters outside the supported alphabet
    /// and for the reserved underscore.
    pub fn new(name: char) -> MathResult<Self> {
        if Self::is_allowed(name) {
            Ok(Variable(name))
        } else {
            Err(MathError::Domain {
                operation: "Variable::new".to_string(),
                reason: format!("the variable {:?} is not supported", name),
            })
        }
    }

    /// The reserved saturation variable `_`, ranked highest by the callers
    /// that introduce it.
    pub fn saturation() -> Self {
        Variable(SATURATION_NAME)
    }

    pub fn name(&self) -> char {
        self.0
    }

    pub fn is_saturation(&self) -> bool {
        self.0 == SATURATION_NAME
    }

    fn is_allowed(name: char) -> bool {
        name.is_ascii_alphabetic() || ('α'..='ω').contains(&name)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product of variable powers, such as x²y³z
///
/// Variables with exponent zero are absent from the map, so equality and
/// hashing depend only on the non-trivial exponents.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Monomial {
    exponents: BTreeMap<Variable, u32>,
}

impl Monomial {
    /// Build a monomial, dropping zero exponents.
    pub fn new(exponents: BTreeMap<Variable, u32>) -> Self {
        Self {
            exponents: exponents.into_iter().filter(|(_, e)| *e != 0).collect(),
        }
    }

    /// The constant monomial 1.
    pub fn constant() -> Self {
        Self::default()
    }

    /// The monomial consisting of a single variable to the first power.
    pub fn variable(var: Variable) -> Self {
        let mut exponents = BTreeMap::new();
        exponents.insert(var, 1);
        Self { exponents }
    }

    /// Convenience constructor from (variable, exponent) pairs.
    pub fn from_pairs(pairs: &[(Variable, u32)]) -> Self {
        Self::new(pairs.iter().copied().collect())
    }

    pub fn is_constant(&self) -> bool {
        self.exponents.is_empty()
    }

    /// The exponent of `var`, zero when absent.
    pub fn exponent(&self, var: &Variable) -> u32 {
        self.exponents.get(var).copied().unwrap_or(0)
    }

    /// Iterate over (variable, exponent) pairs in variable order.
    pub fn exponents(&self) -> impl Iterator<Item = (&Variable, &u32)> {
        self.exponents.iter()
    }

    /// The variables of the monomial in sorted order.
    pub fn variables(&self) -> Vec<Variable> {
        self.exponents.keys().copied().collect()
    }

    /// Total degree: the sum of all exponents.
    pub fn degree(&self) -> u32 {
        self.exponents.values().sum()
    }

    /// Product of two monomials (exponents add).
    pub fn mul(&self, other: &Self) -> Self {
        let mut exponents = self.exponents.clone();
        for (var, exp) in &other.exponents {
            *exponents.entry(*var).or_insert(0) += exp;
        }
        Self { exponents }
    }

    /// Quotient of two monomials, or `None` when `other` does not divide
    /// `self` (some exponent would go negative).
    pub fn checked_div(&self, other: &Self) -> Option<Self> {
        let mut exponents = self.exponents.clone();
        for (var, exp) in &other.exponents {
            match exponents.get_mut(var) {
                Some(current) if *current >= *exp => *current -= exp,
                _ => return None,
            }
        }
        Some(Self::new(exponents))
    }

    /// Whether `self` divides `other`.
    pub fn divides(&self, other: &Self) -> bool {
        self.exponents
            .iter()
            .all(|(var, exp)| other.exponent(var) >= *exp)
    }

    /// Least common multiple: the pointwise maximum of exponents.
    pub fn lcm(&self, other: &Self) -> Self {
        let mut exponents = self.exponents.clone();
        for (var, exp) in &other.exponents {
            let entry = exponents.entry(*var).or_insert(0);
            *entry = (*entry).max(*exp);
        }
        Self { exponents }
    }

    /// Greatest common divisor: the pointwise minimum of exponents.
    pub fn gcd(&self, other: &Self) -> Self {
        let exponents = self
            .exponents
            .iter()
            .filter_map(|(var, exp)| {
                let shared = (*exp).min(other.exponent(var));
                (shared != 0).then_some((*var, shared))
            })
            .collect();
        Self { exponents }
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.exponents.is_empty() {
            return write!(f, "1");
        }
        for (var, exp) in &self.exponents {
            if *exp == 1 {
                write!(f, "{}", var)?;
            } else {
                write!(f, "{}{}", var, to_superscript(*exp))?;
            }
        }
        Ok(())
    }
}

fn to_superscript(number: u32) -> String {
    const SUPERSCRIPTS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    number
        .to_string()
        .chars()
        .map(|digit| SUPERSCRIPTS[digit as usize - '0' as usize])
        .collect()
}
