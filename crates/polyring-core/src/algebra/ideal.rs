//! Polynomial ideals
//!
//! An ideal is held by a list of generators over one coefficient kind. The
//! reduced lex Gröbner basis over the ideal's own variables is computed at
//! most once, on first use, behind a compute-once cell; membership,
//! equality, and containment all go through it. Sum and product are
//! generator-level; intersection introduces the reserved saturation variable
//! ranked highest in lex and eliminates it again.

use crate::algebra::groebner::{get_groebner_basis, normal_form};
use crate::error::{MathError, MathResult};
use crate::number::{Coefficient, CoefficientKind};
use crate::polynomial::{Monomial, MonomialOrder, Polynomial, Variable};
use once_cell::sync::OnceCell;
use std::collections::BTreeSet;
use std::fmt;

/// An ideal of a polynomial ring in finitely many variables
#[derive(Debug, Clone)]
pub struct Ideal {
    generators: Vec<Polynomial>,
    variables: Vec<Variable>,
    kind: Option<CoefficientKind>,
    basis: OnceCell<Vec<Polynomial>>,
}

impl Ideal {
    /// Build an ideal from its generators.
    ///
    /// Duplicate generators are dropped; the variable set is the sorted
    /// union of the generators' variables. No generators yields the zero
    /// ideal.
    ///
    /// # Errors
    ///
    /// Returns a kind mismatch when the generators are not all over the
    /// same coefficient kind.
    pub fn new(generators: Vec<Polynomial>) -> MathResult<Self> {
        let mut kind = None;
        for generator in &generators {
            match (kind, generator.kind()) {
                (None, g) => kind = g,
                (Some(expected), Some(found)) if expected != found => {
                    return Err(MathError::KindMismatch {
                        operation: "Ideal::new".to_string(),
                        left: expected,
                        right: found,
                    });
                }
                _ => {}
            }
        }

        let mut deduped: Vec<Polynomial> = Vec::new();
        for generator in generators {
            if !deduped.contains(&generator) {
                deduped.push(generator);
            }
        }
        if deduped.is_empty() {
            deduped.push(Polynomial::zero());
        }

        let mut variables = BTreeSet::new();
        for generator in &deduped {
            variables.extend(generator.variables());
        }

        Ok(Self {
            generators: deduped,
            variables: variables.into_iter().collect(),
            kind,
            basis: OnceCell::new(),
        })
    }

    pub fn generators(&self) -> &[Polynomial] {
        &self.generators
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn kind(&self) -> Option<CoefficientKind> {
        self.kind
    }

    /// The reduced lex Gröbner basis over the ideal's own variables,
    /// computed on first use and cached.
    pub fn groebner_basis(&self) -> MathResult<&[Polynomial]> {
        self.basis
            .get_or_try_init(|| {
                get_groebner_basis(
                    &self.generators,
                    &self.variables,
                    MonomialOrder::Lex,
                    true,
                )
            })
            .map(|basis| basis.as_slice())
    }

    /// A reduced Gröbner basis under an arbitrary order and permutation,
    /// computed fresh (the cache only holds the lex basis over the ideal's
    /// variables).
    pub fn calculate_groebner_basis(
        &self,
        permutation: &[Variable],
        order: MonomialOrder,
    ) -> MathResult<Vec<Polynomial>> {
        get_groebner_basis(&self.generators, permutation, order, true)
    }

    fn check_same_kind(&self, other: &Self, operation: &str) -> MathResult<()> {
        if let (Some(left), Some(right)) = (self.kind, other.kind) {
            if left != right {
                return Err(MathError::KindMismatch {
                    operation: operation.to_string(),
                    left,
                    right,
                });
            }
        }
        Ok(())
    }

    /// Ideal membership: `f ∈ I` iff the normal form of `f` modulo the
    /// reduced lex basis is zero.
    pub fn contains(&self, f: &Polynomial) -> MathResult<bool> {
        if let (Some(left), Some(right)) = (self.kind, f.kind()) {
            if left != right {
                return Err(MathError::KindMismatch {
                    operation: "Ideal::contains".to_string(),
                    left,
                    right,
                });
            }
        }
        let basis = self.groebner_basis()?;
        // Reduce under the union of variable sets so a polynomial in
        // variables outside the ideal still has a well-defined leading term.
        let mut permutation: BTreeSet<Variable> = self.variables.iter().copied().collect();
        permutation.extend(f.variables());
        let permutation: Vec<Variable> = permutation.into_iter().collect();
        let remainder = normal_form(f, basis, &permutation, MonomialOrder::Lex)?;
        Ok(remainder.is_zero())
    }

    /// Algebraic sum `I + J`: generated by the union of the generators.
    pub fn sum(&self, other: &Self) -> MathResult<Self> {
        self.check_same_kind(other, "Ideal::sum")?;
        let mut generators = self.generators.clone();
        generators.extend(other.generators.iter().cloned());
        Self::new(generators)
    }

    /// Algebraic product `I · J`: generated by all pairwise products.
    pub fn product(&self, other: &Self) -> MathResult<Self> {
        self.check_same_kind(other, "Ideal::product")?;
        let mut generators = Vec::new();
        for f in &self.generators {
            for g in &other.generators {
                generators.push(f.mul(g)?);
            }
        }
        Self::new(generators)
    }

    /// Intersection `I ∩ J` by saturation: with a fresh variable t ranked
    /// highest in lex, eliminate t from `{t·f} ∪ {(1 − t)·g}`.
    pub fn intersection(&self, other: &Self) -> MathResult<Self> {
        self.check_same_kind(other, "Ideal::intersection")?;
        let kind = match self.kind.or(other.kind) {
            Some(kind) => kind,
            // Both are the kindless zero ideal.
            None => return Self::new(Vec::new()),
        };

        let t = Polynomial::term(
            Monomial::variable(Variable::saturation()),
            Coefficient::one(kind)?,
        );
        let one_minus_t = Polynomial::one_of(kind)?.sub(&t)?;

        let mut generators = Vec::new();
        for f in &self.generators {
            generators.push(t.mul(f)?);
        }
        for g in &other.generators {
            generators.push(one_minus_t.mul(g)?);
        }

        let variables: BTreeSet<Variable> = self
            .variables
            .iter()
            .chain(other.variables.iter())
            .copied()
            .collect();
        let mut permutation = vec![Variable::saturation()];
        permutation.extend(variables.iter().copied());

        let basis = get_groebner_basis(&generators, &permutation, MonomialOrder::Lex, true)?;
        let remaining: Vec<Variable> = variables.into_iter().collect();
        Self::new(Self::elimination_ideal(&basis, &remaining))
    }

    /// The subset of `basis` involving only the given variables.
    ///
    /// For a lex basis computed with the eliminated variables ranked
    /// highest, this is the elimination ideal's basis.
    pub fn elimination_ideal(basis: &[Polynomial], variables: &[Variable]) -> Vec<Polynomial> {
        let keep: BTreeSet<Variable> = variables.iter().copied().collect();
        basis
            .iter()
            .filter(|f| f.variables().iter().all(|v| keep.contains(v)))
            .cloned()
            .collect()
    }

    /// Whether every generator of `self` lies in `other`.
    pub fn is_subset(&self, other: &Self) -> MathResult<bool> {
        self.check_same_kind(other, "Ideal::is_subset")?;
        for generator in &self.generators {
            if !other.contains(generator)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Two ideals are equal iff their reduced lex Gröbner bases coincide as
    /// sets.
    pub fn equals(&self, other: &Self) -> MathResult<bool> {
        self.check_same_kind(other, "Ideal::equals")?;
        let ours = self.groebner_basis()?;
        let theirs = other.groebner_basis()?;
        if ours.len() != theirs.len() {
            return Ok(false);
        }
        Ok(ours.iter().all(|f| theirs.contains(f)))
    }
}

impl PartialEq for Ideal {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other).unwrap_or(false)
    }
}

impl fmt::Display for Ideal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "⟨")?;
        for (i, generator) in self.generators.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", generator)?;
        }
        write!(f, "⟩")
    }
}
