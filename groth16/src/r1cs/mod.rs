//! Rank-1 constraint systems.
//!
//! Variable `0` is the constant `ONE`, variables `1..=num_inputs` form the
//! primary input and the remaining ones the auxiliary input. Assignments
//! handed to this module never contain the constant.

use crate::errors::{Result, SnarkError};
use zsl_algebra::prelude::*;

/// QAP instance and witness maps.
pub mod qap;

/// `coeff * x_index`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct LinearTerm<S: Scalar> {
    /// The variable index, `0` standing for the constant `ONE`.
    pub index: usize,
    /// The coefficient.
    pub coeff: S,
}

/// A sum of linear terms.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct LinearCombination<S: Scalar> {
    /// The terms.
    pub terms: Vec<LinearTerm<S>>,
}

impl<S: Scalar> LinearCombination<S> {
    /// The empty combination.
    pub fn new() -> Self {
        Self { terms: vec![] }
    }

    /// Append `coeff * x_index`.
    pub fn add_term(&mut self, index: usize, coeff: S) {
        self.terms.push(LinearTerm { index, coeff });
    }

    /// Builder version of [`add_term`](Self::add_term).
    pub fn with_term(mut self, index: usize, coeff: S) -> Self {
        self.add_term(index, coeff);
        self
    }

    /// Evaluate against an assignment of variables `1..`.
    pub fn evaluate(&self, assignment: &[S]) -> Result<S> {
        let mut acc = S::zero();
        for term in self.terms.iter() {
            let value = if term.index == 0 {
                S::one()
            } else {
                *assignment
                    .get(term.index - 1)
                    .ok_or(SnarkError::InvalidConstraintSystem)?
            };
            acc.add_assign(&value.mul(&term.coeff));
        }
        Ok(acc)
    }

    fn is_valid(&self, num_variables: usize) -> bool {
        self.terms.iter().all(|t| t.index <= num_variables)
    }
}

impl<S: Scalar> From<LinearTerm<S>> for LinearCombination<S> {
    fn from(term: LinearTerm<S>) -> Self {
        Self { terms: vec![term] }
    }
}

/// The constraint `<a, x> * <b, x> = <c, x>`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct R1CSConstraint<S: Scalar> {
    /// The left factor.
    pub a: LinearCombination<S>,
    /// The right factor.
    pub b: LinearCombination<S>,
    /// The product.
    pub c: LinearCombination<S>,
}

impl<S: Scalar> R1CSConstraint<S> {
    /// Build a constraint.
    pub fn new(a: LinearCombination<S>, b: LinearCombination<S>, c: LinearCombination<S>) -> Self {
        Self { a, b, c }
    }

    fn is_satisfied(&self, assignment: &[S]) -> Result<bool> {
        let a = self.a.evaluate(assignment)?;
        let b = self.b.evaluate(assignment)?;
        let c = self.c.evaluate(assignment)?;
        Ok(a.mul(&b) == c)
    }
}

/// A list of constraints over `1 + primary_input_size + auxiliary_input_size`
/// variables.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct R1CSConstraintSystem<S: Scalar> {
    /// The number of primary variables.
    pub primary_input_size: usize,
    /// The number of auxiliary variables.
    pub auxiliary_input_size: usize,
    /// The constraints.
    pub constraints: Vec<R1CSConstraint<S>>,
}

impl<S: Scalar> R1CSConstraintSystem<S> {
    /// An empty system with the given variable layout.
    pub fn new(primary_input_size: usize, auxiliary_input_size: usize) -> Self {
        Self {
            primary_input_size,
            auxiliary_input_size,
            constraints: vec![],
        }
    }

    /// Append a constraint.
    pub fn add_constraint(&mut self, constraint: R1CSConstraint<S>) {
        self.constraints.push(constraint);
    }

    /// The number of primary variables.
    pub fn num_inputs(&self) -> usize {
        self.primary_input_size
    }

    /// The number of variables, the constant `ONE` excluded.
    pub fn num_variables(&self) -> usize {
        self.primary_input_size + self.auxiliary_input_size
    }

    /// The number of constraints.
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Check that every term refers to an existing variable.
    pub fn is_valid(&self) -> bool {
        let n = self.num_variables();
        self.constraints
            .iter()
            .all(|c| c.a.is_valid(n) && c.b.is_valid(n) && c.c.is_valid(n))
    }

    /// Check the assignment against every constraint.
    ///
    /// Returns `false` when the input lengths do not match the layout.
    pub fn is_satisfied(&self, primary_input: &[S], auxiliary_input: &[S]) -> bool {
        if primary_input.len() != self.primary_input_size
            || auxiliary_input.len() != self.auxiliary_input_size
        {
            return false;
        }

        let full: Vec<S> = primary_input
            .iter()
            .chain(auxiliary_input.iter())
            .copied()
            .collect();
        self.constraints
            .iter()
            .all(|c| c.is_satisfied(&full).unwrap_or(false))
    }

    /// Exchange `a` and `b` in every constraint when `b` touches more
    /// variables than `a`, so that fewer second-group bases are non-zero.
    pub fn swap_ab_if_beneficial(&mut self) {
        let n = self.num_variables() + 1;
        let mut touched_by_a = vec![false; n];
        let mut touched_by_b = vec![false; n];

        for c in self.constraints.iter() {
            for t in c.a.terms.iter().filter(|t| t.index < n) {
                touched_by_a[t.index] = true;
            }
            for t in c.b.terms.iter().filter(|t| t.index < n) {
                touched_by_b[t.index] = true;
            }
        }

        let non_zero_a = touched_by_a.iter().filter(|x| **x).count();
        let non_zero_b = touched_by_b.iter().filter(|x| **x).count();

        if non_zero_b > non_zero_a {
            for c in self.constraints.iter_mut() {
                ark_std::mem::swap(&mut c.a, &mut c.b);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::{LinearCombination, R1CSConstraint, R1CSConstraintSystem};
    use zsl_algebra::{bn254::BN254Scalar, prelude::*};

    type F = BN254Scalar;

    fn lc(terms: &[(usize, u32)]) -> LinearCombination<F> {
        terms
            .iter()
            .fold(LinearCombination::new(), |lc, (i, c)| lc.with_term(*i, F::from(*c)))
    }

    // x1 = y (primary), x2 = x: x * x = y, (x + 1) * 1 = x + 1
    fn square_system() -> R1CSConstraintSystem<F> {
        let mut cs = R1CSConstraintSystem::new(1, 1);
        cs.add_constraint(R1CSConstraint::new(lc(&[(2, 1)]), lc(&[(2, 1)]), lc(&[(1, 1)])));
        cs.add_constraint(R1CSConstraint::new(
            lc(&[(2, 1), (0, 1)]),
            lc(&[(0, 1)]),
            lc(&[(0, 1), (2, 1)]),
        ));
        cs
    }

    #[test]
    fn layout() {
        let cs = square_system();
        assert_eq!(cs.num_inputs(), 1);
        assert_eq!(cs.num_variables(), 2);
        assert_eq!(cs.num_constraints(), 2);
        assert!(cs.is_valid());

        let mut bad = cs.clone();
        bad.add_constraint(R1CSConstraint::new(lc(&[(3, 1)]), lc(&[]), lc(&[])));
        assert!(!bad.is_valid());
        assert!(!bad.is_satisfied(&[F::from(4u32)], &[F::from(2u32)]));
    }

    #[test]
    fn satisfaction() {
        let cs = square_system();
        assert!(cs.is_satisfied(&[F::from(4u32)], &[F::from(2u32)]));
        assert!(!cs.is_satisfied(&[F::from(5u32)], &[F::from(2u32)]));
        assert!(!cs.is_satisfied(&[F::from(4u32)], &[]));
        assert!(!cs.is_satisfied(&[], &[F::from(2u32)]));
    }

    #[test]
    fn evaluate_linear_combination() {
        let l = lc(&[(0, 3), (1, 2), (2, 5)]);
        assert_eq!(
            l.evaluate(&[F::from(10u32), F::from(100u32)]).unwrap(),
            F::from(523u32)
        );
        assert!(l.evaluate(&[F::one()]).is_err());
        assert_eq!(LinearCombination::<F>::new().evaluate(&[]).unwrap(), F::zero());
    }

    #[test]
    fn swap_ab() {
        let mut cs = R1CSConstraintSystem::<F>::new(0, 3);
        cs.add_constraint(R1CSConstraint::new(
            lc(&[(1, 1)]),
            lc(&[(1, 1), (2, 1), (3, 1)]),
            lc(&[(3, 1)]),
        ));
        let original = cs.clone();
        cs.swap_ab_if_beneficial();
        assert_eq!(cs.constraints[0].a, original.constraints[0].b);
        assert_eq!(cs.constraints[0].b, original.constraints[0].a);

        // already beneficial
        let mut again = cs.clone();
        again.swap_ab_if_beneficial();
        assert_eq!(again, cs);

        // 1 * (1 - 1 + 7) = 7
        let assignment = [F::one(), F::one().neg(), F::from(7u32)];
        assert!(cs.is_satisfied(&[], &assignment));
    }
}
