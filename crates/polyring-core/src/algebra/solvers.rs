//! Polynomial system solving
//!
//! A lex Gröbner basis triangularizes a zero-dimensional system; the solver
//! peels univariate elements, finds their roots, substitutes back, and
//! recurses. Finite-field systems are solved by exhaustive search instead.
//! Solver outcomes are values, not errors: inconsistency, infinitely many
//! solutions, and an empty solution list are all ordinary returns.

use crate::algebra::groebner::get_groebner_basis;
use crate::algebra::root_finding::find_roots;
use crate::error::{MathError, MathResult};
use crate::number::{Coefficient, CoefficientKind, GaloisField};
use crate::polynomial::factory::embed;
use crate::polynomial::{MonomialOrder, Polynomial, Variable};
use std::collections::{BTreeMap, BTreeSet};

/// The outcome of solving a polynomial system
///
/// An empty `Finite` list means the search exhausted every branch without
/// finding a solution in the coefficient field.
#[derive(Debug, Clone, PartialEq)]
pub enum SystemSolution {
    /// The ideal is the whole ring (the basis is {1}); by the
    /// Nullstellensatz the system has no solution over any extension.
    Inconsistent,
    /// A positive-dimensional solution set was detected.
    InfinitelyMany,
    /// All solutions found, one variable → value map per solution.
    Finite(Vec<BTreeMap<Variable, Coefficient>>),
}

/// Solve a polynomial system, optionally re-embedding the triangularized
/// basis into a target kind first.
///
/// The zero-dimensionality test is the heuristic "some univariate element
/// exists at every elimination level of the lex basis"; for
/// positive-dimensional ideals the `InfinitelyMany` answer is sound but the
/// detection is incomplete.
///
/// # Errors
///
/// Returns a shape error for an empty system and propagates kind mismatches
/// from the basis computation.
pub fn solve_system(
    system: &[Polynomial],
    target: Option<CoefficientKind>,
) -> MathResult<SystemSolution> {
    if system.is_empty() {
        return Err(MathError::Shape {
            operation: "solve_system".to_string(),
            reason: "at least one polynomial required".to_string(),
        });
    }

    let system_kind = system.iter().find_map(|f| f.kind());
    let kind = target.or(system_kind);

    let variables = sorted_variables(system);
    let mut basis =
        get_groebner_basis(system, &variables, MonomialOrder::Lex, true)?;
    if let Some(target_kind) = target {
        if Some(target_kind) != system_kind {
            basis = basis
                .iter()
                .map(|g| embed(g, target_kind))
                .collect::<MathResult<_>>()?;
        }
    }

    // Hilbert Nullstellensatz: 1 ∈ I means no solutions anywhere.
    if basis.len() == 1 {
        if let Some(k) = basis[0].kind() {
            if basis[0] == Polynomial::one_of(k)? {
                return Ok(SystemSolution::Inconsistent);
            }
        }
    }

    match kind {
        Some(CoefficientKind::Galois(prime)) => {
            brute_force_galois(&basis, &variables, prime)
        }
        _ => recursive_solver(&basis),
    }
}

/// Exhaustive search of the finite Cartesian product of field elements.
fn brute_force_galois(
    basis: &[Polynomial],
    variables: &[Variable],
    prime: u64,
) -> MathResult<SystemSolution> {
    let elements = GaloisField::elements(prime)?;
    let mut solutions = Vec::new();
    let mut indices = vec![0usize; variables.len()];

    loop {
        let point: BTreeMap<Variable, Coefficient> = variables
            .iter()
            .zip(&indices)
            .map(|(var, &i)| (*var, Coefficient::Galois(elements[i])))
            .collect();

        let mut vanishes = true;
        for f in basis {
            if !f.evaluate(&point)?.is_zero() {
                vanishes = false;
                break;
            }
        }
        if vanishes {
            solutions.push(point);
        }

        // Odometer step over the Cartesian product.
        let mut position = 0;
        loop {
            if position == indices.len() {
                return Ok(SystemSolution::Finite(solutions));
            }
            indices[position] += 1;
            if indices[position] < elements.len() {
                break;
            }
            indices[position] = 0;
            position += 1;
        }
    }
}

/// Back-substitution over a lex basis: pick a univariate element, branch on
/// its roots, substitute, recurse on the non-zero residuals.
fn recursive_solver(system: &[Polynomial]) -> MathResult<SystemSolution> {
    if system.is_empty() {
        return Ok(SystemSolution::Finite(Vec::new()));
    }

    let has_nonzero_constant = system
        .iter()
        .any(|f| f.variables().is_empty() && !f.is_zero());
    if has_nonzero_constant {
        return Ok(SystemSolution::Finite(Vec::new()));
    }

    let Some(pivot) = system.iter().find(|f| f.variables().len() == 1) else {
        return Ok(SystemSolution::InfinitelyMany);
    };
    let var = pivot.variables()[0];

    let roots = find_roots(pivot)?;
    if roots.is_empty() {
        return Ok(SystemSolution::Finite(Vec::new()));
    }

    let mut solutions = Vec::new();
    for root in roots {
        let mut residual = Vec::new();
        for f in system {
            let substituted = f.substitute(&var, &root)?;
            if !substituted.is_zero() {
                residual.push(substituted);
            }
        }

        if residual.is_empty() {
            let mut solution = BTreeMap::new();
            solution.insert(var, root);
            solutions.push(solution);
            continue;
        }

        match recursive_solver(&residual)? {
            SystemSolution::InfinitelyMany => return Ok(SystemSolution::InfinitelyMany),
            SystemSolution::Finite(extensions) => {
                for mut extension in extensions {
                    extension.insert(var, root.clone());
                    solutions.push(extension);
                }
            }
            SystemSolution::Inconsistent => {}
        }
    }
    Ok(SystemSolution::Finite(solutions))
}

/// For each variable, the univariate polynomial it must satisfy: the
/// univariate element of a lex basis computed with that variable ranked
/// last.
///
/// Returns `None` when some variable has no univariate element (the
/// projection is positive-dimensional).
pub fn characteristic_equations(
    system: &[Polynomial],
) -> MathResult<Option<BTreeMap<Variable, Polynomial>>> {
    let variables = sorted_variables(system);
    let mut equations = BTreeMap::new();
    for var in &variables {
        let mut permutation: Vec<Variable> =
            variables.iter().filter(|v| *v != var).copied().collect();
        permutation.push(*var);

        let basis = get_groebner_basis(system, &permutation, MonomialOrder::Lex, true)?;
        let Some(equation) = basis.iter().find(|g| g.variables() == [*var]) else {
            return Ok(None);
        };
        equations.insert(*var, equation.clone());
    }
    Ok(Some(equations))
}

fn sorted_variables(system: &[Polynomial]) -> Vec<Variable> {
    let set: BTreeSet<Variable> = system.iter().flat_map(|f| f.variables()).collect();
    set.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polynomial::factory::define_variable;

    fn var(name: char) -> Variable {
        Variable::new(name).unwrap()
    }

    fn x() -> Polynomial {
        define_variable(var('x'), CoefficientKind::Rational).unwrap()
    }

    fn y() -> Polynomial {
        define_variable(var('y'), CoefficientKind::Rational).unwrap()
    }

    #[test]
    fn test_linear_system() {
        // x + y = 3, x - y = 1 → x = 2, y = 1
        let f1 = x()
            .add(&y())
            .unwrap()
            .scalar_add(&Coefficient::integer(-3))
            .unwrap();
        let f2 = x()
            .sub(&y())
            .unwrap()
            .scalar_add(&Coefficient::integer(-1))
            .unwrap();

        let SystemSolution::Finite(solutions) = solve_system(&[f1, f2], None).unwrap() else {
            panic!("expected finite solutions");
        };
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0][&var('x')], Coefficient::integer(2));
        assert_eq!(solutions[0][&var('y')], Coefficient::integer(1));
    }

    #[test]
    fn test_circle_and_line() {
        // x² + y² = 2, x - y = 0 → (1, 1) and (-1, -1)
        let f1 = x()
            .pow(2)
            .unwrap()
            .add(&y().pow(2).unwrap())
            .unwrap()
            .scalar_add(&Coefficient::integer(-2))
            .unwrap();
        let f2 = x().sub(&y()).unwrap();

        let SystemSolution::Finite(mut solutions) =
            solve_system(&[f1, f2], None).unwrap()
        else {
            panic!("expected finite solutions");
        };
        solutions.sort_by_key(|s| format!("{}", s[&var('x')]));
        assert_eq!(solutions.len(), 2);
        assert_eq!(solutions[0][&var('x')], Coefficient::integer(-1));
        assert_eq!(solutions[0][&var('y')], Coefficient::integer(-1));
        assert_eq!(solutions[1][&var('x')], Coefficient::integer(1));
        assert_eq!(solutions[1][&var('y')], Coefficient::integer(1));
    }

    #[test]
    fn test_inconsistent_system() {
        // x = 0 and x = 1
        let f1 = x();
        let f2 = x().scalar_add(&Coefficient::integer(-1)).unwrap();
        assert_eq!(
            solve_system(&[f1, f2], None).unwrap(),
            SystemSolution::Inconsistent
        );
    }

    #[test]
    fn test_positive_dimensional_system() {
        // A single curve in two variables has infinitely many points.
        let f = x().sub(&y()).unwrap();
        assert_eq!(
            solve_system(&[f], None).unwrap(),
            SystemSolution::InfinitelyMany
        );
    }

    #[test]
    fn test_no_rational_solutions() {
        // x² = 2 has no rational roots.
        let f = x()
            .pow(2)
            .unwrap()
            .scalar_add(&Coefficient::integer(-2))
            .unwrap();
        assert_eq!(
            solve_system(&[f], None).unwrap(),
            SystemSolution::Finite(Vec::new())
        );
    }

    #[test]
    fn test_finite_field_system() {
        // x² + y² = 0 over GF(5), x = y: solutions where 2x² = 0 → x = 0.
        let kind = CoefficientKind::Galois(5);
        let xg = define_variable(var('x'), kind).unwrap();
        let yg = define_variable(var('y'), kind).unwrap();
        let f1 = xg.pow(2).unwrap().add(&yg.pow(2).unwrap()).unwrap();
        let f2 = xg.sub(&yg).unwrap();

        let SystemSolution::Finite(solutions) = solve_system(&[f1, f2], None).unwrap() else {
            panic!("expected finite solutions");
        };
        assert_eq!(solutions.len(), 1);
        assert_eq!(
            solutions[0][&var('x')],
            Coefficient::galois(0, 5).unwrap()
        );
    }

    #[test]
    fn test_re_embedding_into_finite_field() {
        // x² + 1 = 0 has no rational solutions but two in GF(5).
        let f = x()
            .pow(2)
            .unwrap()
            .scalar_add(&Coefficient::integer(1))
            .unwrap();
        let SystemSolution::Finite(solutions) =
            solve_system(&[f], Some(CoefficientKind::Galois(5))).unwrap()
        else {
            panic!("expected finite solutions");
        };
        let values: BTreeSet<u64> = solutions
            .iter()
            .map(|s| match &s[&var('x')] {
                Coefficient::Galois(g) => g.value(),
                _ => panic!("expected finite-field value"),
            })
            .collect();
        assert_eq!(values, BTreeSet::from([2, 3]));
    }

    #[test]
    fn test_characteristic_equations() {
        // x - y, y² - 1: both variables satisfy v² - 1.
        let f1 = x().sub(&y()).unwrap();
        let f2 = y()
            .pow(2)
            .unwrap()
            .scalar_add(&Coefficient::integer(-1))
            .unwrap();
        let equations = characteristic_equations(&[f1, f2]).unwrap().unwrap();

        let expected_x = x()
            .pow(2)
            .unwrap()
            .scalar_add(&Coefficient::integer(-1))
            .unwrap();
        let expected_y = y()
            .pow(2)
            .unwrap()
            .scalar_add(&Coefficient::integer(-1))
            .unwrap();
        assert_eq!(equations[&var('x')], expected_x);
        assert_eq!(equations[&var('y')], expected_y);
    }

    #[test]
    fn test_characteristic_equations_positive_dimensional() {
        let f = x().sub(&y()).unwrap();
        assert!(characteristic_equations(&[f]).unwrap().is_none());
    }
}
