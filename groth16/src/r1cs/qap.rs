use crate::domain::{get_evaluation_domain, EvaluationDomain, GeneralEvaluationDomain};
use crate::errors::{Result, SnarkError};
use crate::r1cs::R1CSConstraintSystem;
use ark_std::{end_timer, start_timer};
use zeroize::{Zeroize, ZeroizeOnDrop};
use zsl_algebra::{cfg_iter, cfg_iter_mut, prelude::*};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The domain of the QAP of `cs`.
///
/// Besides one point per constraint it holds `num_inputs + 1` points for the
/// constraints `x_i * 0 = 0`, `i = 0..=num_inputs`, which keep the polynomials
/// of the constant and of the primary variables linearly independent.
pub fn qap_domain<S: Scalar>(cs: &R1CSConstraintSystem<S>) -> Result<GeneralEvaluationDomain<S>> {
    get_evaluation_domain(cs.num_constraints() + cs.num_inputs() + 1)
}

/// The QAP polynomials of a constraint system evaluated at a point `t`.
///
/// `t` is usually secret, so every evaluation is zeroized on drop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QapInstanceEvaluation<S: Scalar> {
    /// The QAP domain.
    pub domain: GeneralEvaluationDomain<S>,
    /// The number of variables, the constant excluded.
    pub num_variables: usize,
    /// The domain size.
    pub degree: usize,
    /// The number of primary variables.
    pub num_inputs: usize,
    /// The evaluation point.
    pub t: S,
    /// `A_i(t)` for `i = 0..=num_variables`.
    pub at: Vec<S>,
    /// `B_i(t)` for `i = 0..=num_variables`.
    pub bt: Vec<S>,
    /// `C_i(t)` for `i = 0..=num_variables`.
    pub ct: Vec<S>,
    /// `t^i` for `i = 0..=degree`.
    pub ht: Vec<S>,
    /// `Z(t)`.
    pub zt: S,
}

/// The witness of a QAP: the assignment and the coefficients of `H`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QapWitness<S: Scalar> {
    /// The number of variables, the constant excluded.
    pub num_variables: usize,
    /// The domain size.
    pub degree: usize,
    /// The number of primary variables.
    pub num_inputs: usize,
    /// Multiple of `Z` added to `A`.
    pub d1: S,
    /// Multiple of `Z` added to `B`.
    pub d2: S,
    /// Multiple of `Z` added to `C`.
    pub d3: S,
    /// The primary input followed by the auxiliary input.
    pub coefficients_for_abcs: Vec<S>,
    /// The `degree + 1` coefficients of `H`.
    pub coefficients_for_h: Vec<S>,
}

impl<S: Scalar> Zeroize for QapInstanceEvaluation<S> {
    fn zeroize(&mut self) {
        self.t.zeroize();
        self.at.zeroize();
        self.bt.zeroize();
        self.ct.zeroize();
        self.ht.zeroize();
        self.zt.zeroize();
    }
}

impl<S: Scalar> Drop for QapInstanceEvaluation<S> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<S: Scalar> ZeroizeOnDrop for QapInstanceEvaluation<S> {}

impl<S: Scalar> QapInstanceEvaluation<S> {
    /// Check `A(t) * B(t) - C(t) = H(t) * Z(t)` for the witness.
    pub fn is_satisfied(&self, witness: &QapWitness<S>) -> bool {
        if self.num_variables != witness.num_variables
            || self.degree != witness.degree
            || self.num_inputs != witness.num_inputs
            || self.at.len() != self.num_variables + 1
            || self.bt.len() != self.num_variables + 1
            || self.ct.len() != self.num_variables + 1
            || self.ht.len() != self.degree + 1
            || witness.coefficients_for_abcs.len() != self.num_variables
            || witness.coefficients_for_h.len() != self.degree + 1
        {
            return false;
        }

        if self.zt != self.domain.compute_vanishing_polynomial(&self.t) {
            return false;
        }

        let eval = |polys: &[S], d: &S| -> S {
            let sum: S = witness
                .coefficients_for_abcs
                .iter()
                .zip(polys[1..].iter())
                .map(|(x, p)| x.mul(p))
                .sum();
            polys[0].add(&sum).add(&d.mul(&self.zt))
        };

        let ans_a = eval(&self.at, &witness.d1);
        let ans_b = eval(&self.bt, &witness.d2);
        let ans_c = eval(&self.ct, &witness.d3);
        let ans_h: S = witness
            .coefficients_for_h
            .iter()
            .zip(self.ht.iter())
            .map(|(h, t)| h.mul(t))
            .sum();

        ans_a.mul(&ans_b).sub(&ans_c) == ans_h.mul(&self.zt)
    }
}

/// Evaluate the QAP polynomials of `cs` at `t`.
pub fn instance_map_with_evaluation<S: Scalar>(
    cs: &R1CSConstraintSystem<S>,
    t: &S,
) -> Result<QapInstanceEvaluation<S>> {
    let domain = qap_domain(cs)?;
    let degree = domain.size();
    let num_variables = cs.num_variables();
    let num_inputs = cs.num_inputs();
    let num_constraints = cs.num_constraints();

    let instance_time = start_timer!(|| format!("QAP instance map, domain size {}", degree));

    let mut at = vec![S::zero(); num_variables + 1];
    let mut bt = vec![S::zero(); num_variables + 1];
    let mut ct = vec![S::zero(); num_variables + 1];

    let u = domain.evaluate_all_lagrange_coefficients(t);

    for i in 0..=num_inputs {
        at[i] = u[num_constraints + i];
    }

    for (c, u_i) in cs.constraints.iter().zip(u.iter()) {
        for (lc, polys) in [(&c.a, &mut at), (&c.b, &mut bt), (&c.c, &mut ct)] {
            for term in lc.terms.iter() {
                polys
                    .get_mut(term.index)
                    .ok_or(SnarkError::InvalidConstraintSystem)?
                    .add_assign(&u_i.mul(&term.coeff));
            }
        }
    }

    let mut ht = Vec::with_capacity(degree + 1);
    let mut ti = S::one();
    for _ in 0..=degree {
        ht.push(ti);
        ti.mul_assign(t);
    }

    let zt = domain.compute_vanishing_polynomial(t);

    end_timer!(instance_time);

    Ok(QapInstanceEvaluation {
        domain,
        num_variables,
        degree,
        num_inputs,
        t: *t,
        at,
        bt,
        ct,
        ht,
        zt,
    })
}

/// Compute the coefficients of `H` for the assignment.
///
/// `H = (A * B - C) / Z` with `A`, `B`, `C` interpolated from the
/// assignment, shifted by `d2 * A + d1 * B + d1 * d2 * Z - d3` so that it
/// matches `A + d1 * Z`, `B + d2 * Z` and `C + d3 * Z`. The assignment is
/// not checked against the constraints.
pub fn witness_map<S: Scalar>(
    cs: &R1CSConstraintSystem<S>,
    primary_input: &[S],
    auxiliary_input: &[S],
    d1: &S,
    d2: &S,
    d3: &S,
) -> Result<QapWitness<S>> {
    if primary_input.len() != cs.num_inputs()
        || primary_input.len() + auxiliary_input.len() != cs.num_variables()
    {
        return Err(SnarkError::InvalidAssignmentLength);
    }

    let domain = qap_domain(cs)?;
    let m = domain.size();
    let num_constraints = cs.num_constraints();
    let witness_time = start_timer!(|| format!("QAP witness map, domain size {}", m));

    let full: Vec<S> = primary_input
        .iter()
        .chain(auxiliary_input.iter())
        .copied()
        .collect();

    let evaluate_time = start_timer!(|| "Evaluate A and B on the domain");
    let mut a = vec![S::zero(); m];
    let mut b = vec![S::zero(); m];
    let a_evals = cfg_iter!(cs.constraints)
        .map(|c| c.a.evaluate(&full))
        .collect::<Result<Vec<S>>>()?;
    let b_evals = cfg_iter!(cs.constraints)
        .map(|c| c.b.evaluate(&full))
        .collect::<Result<Vec<S>>>()?;
    a[..num_constraints].copy_from_slice(&a_evals);
    b[..num_constraints].copy_from_slice(&b_evals);
    a[num_constraints] = S::one();
    a[num_constraints + 1..=num_constraints + cs.num_inputs()].copy_from_slice(primary_input);
    end_timer!(evaluate_time);

    let interpolate_time = start_timer!(|| "Interpolate A and B");
    domain.ifft(&mut a)?;
    domain.ifft(&mut b)?;
    end_timer!(interpolate_time);

    let mut coefficients_for_h = vec![S::zero(); m + 1];
    cfg_iter_mut!(coefficients_for_h[..m])
        .zip(cfg_iter!(a))
        .zip(cfg_iter!(b))
        .for_each(|((h, a), b)| *h = d2.mul(a).add(&d1.mul(b)));
    coefficients_for_h[0].sub_assign(d3);
    domain.add_poly_z(&d1.mul(d2), &mut coefficients_for_h)?;

    let g = S::multiplicative_generator();

    let coset_time = start_timer!(|| "Evaluate A, B and C on the coset");
    domain.coset_fft(&mut a, &g)?;
    domain.coset_fft(&mut b, &g)?;

    let mut c = vec![S::zero(); m];
    let c_evals = cfg_iter!(cs.constraints)
        .map(|c| c.c.evaluate(&full))
        .collect::<Result<Vec<S>>>()?;
    c[..num_constraints].copy_from_slice(&c_evals);
    domain.ifft(&mut c)?;
    domain.coset_fft(&mut c, &g)?;
    end_timer!(coset_time);

    let quotient_time = start_timer!(|| "Compute (A * B - C) / Z");
    let mut h_tmp = a;
    cfg_iter_mut!(h_tmp)
        .zip(cfg_iter!(b))
        .zip(cfg_iter!(c))
        .for_each(|((h, b), c)| *h = h.mul(b).sub(c));
    domain.divide_by_z_on_coset(&mut h_tmp)?;
    domain.icoset_fft(&mut h_tmp, &g)?;
    cfg_iter_mut!(coefficients_for_h[..m])
        .zip(cfg_iter!(h_tmp))
        .for_each(|(h, t)| h.add_assign(t));
    end_timer!(quotient_time);

    end_timer!(witness_time);

    Ok(QapWitness {
        num_variables: cs.num_variables(),
        degree: m,
        num_inputs: cs.num_inputs(),
        d1: *d1,
        d2: *d2,
        d3: *d3,
        coefficients_for_abcs: full,
        coefficients_for_h,
    })
}
