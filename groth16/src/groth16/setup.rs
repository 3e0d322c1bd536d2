use crate::domain::EvaluationDomain;
use crate::errors::{Result, SnarkError};
use crate::groth16::{
    helpers::{AccumulationVector, KnowledgeCommitment},
    keys::{Keypair, ProvingKey, VerificationKey},
    params::PublicParams,
};
use crate::r1cs::{
    qap::{instance_map_with_evaluation, qap_domain},
    R1CSConstraintSystem,
};
use ark_std::{end_timer, start_timer};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};
use zsl_algebra::{cfg_iter, fixed_base::FixedBaseMSM, prelude::*};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The secret values of a setup. Overwritten with zeros on drop.
#[derive(Zeroize)]
struct Trapdoor<S: Scalar> {
    tau: S,
    alpha: S,
    beta: S,
    gamma: S,
    delta: S,
}

impl<S: Scalar> Trapdoor<S> {
    fn sample<R, F>(prng: &mut R, tau_ok: F) -> Self
    where
        R: CryptoRng + RngCore,
        F: Fn(&S) -> bool,
    {
        let nonzero = |prng: &mut R| loop {
            let x = S::random(prng);
            if !x.is_zero() {
                break x;
            }
        };

        let tau = loop {
            let x = S::random(prng);
            if tau_ok(&x) {
                break x;
            }
        };

        Self {
            tau,
            alpha: S::random(prng),
            beta: S::random(prng),
            gamma: nonzero(prng),
            delta: nonzero(prng),
        }
    }
}

impl<S: Scalar> Drop for Trapdoor<S> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<S: Scalar> ZeroizeOnDrop for Trapdoor<S> {}

/// Run the trusted setup for `cs`.
///
/// The constraint system is copied into the proving key after
/// [`R1CSConstraintSystem::swap_ab_if_beneficial`]. The trapdoor is sampled
/// from `prng`; it and every scalar derived from it are erased before
/// returning.
pub fn generator<P: Pairing, R: CryptoRng + RngCore>(
    pp: &PublicParams<P>,
    cs: &R1CSConstraintSystem<P::ScalarField>,
    prng: &mut R,
) -> Result<Keypair<P>> {
    let generator_time = start_timer!(|| "Groth16 generator");

    if !cs.is_valid() {
        return Err(SnarkError::InvalidConstraintSystem);
    }
    pp.check_qap_size(cs.num_constraints() + cs.num_inputs() + 1)?;

    let mut cs = cs.clone();
    cs.swap_ab_if_beneficial();

    let domain = qap_domain(&cs)?;
    // tau must lie outside the domain for Z(tau) / delta to hide anything
    let td = Trapdoor::<P::ScalarField>::sample(prng, |t| {
        !domain.compute_vanishing_polynomial(t).is_zero()
    });

    let qap = instance_map_with_evaluation(&cs, &td.tau)?;
    let num_inputs = qap.num_inputs;
    let degree = qap.degree;

    let scalars_time = start_timer!(|| "Compute the query scalars");
    let gamma_inv = Zeroizing::new(td.gamma.inv()?);
    let delta_inv = Zeroizing::new(td.delta.inv()?);

    // beta * A_i(tau) + alpha * B_i(tau) + C_i(tau)
    let abc: Zeroizing<Vec<P::ScalarField>> = Zeroizing::new(
        cfg_iter!(qap.at)
            .zip(cfg_iter!(qap.bt))
            .zip(cfg_iter!(qap.ct))
            .map(|((a, b), c)| td.beta.mul(a).add(&td.alpha.mul(b)).add(c))
            .collect(),
    );

    let ic: Zeroizing<Vec<P::ScalarField>> = Zeroizing::new(
        abc[..=num_inputs]
            .iter()
            .map(|x| x.mul(&*gamma_inv))
            .collect(),
    );
    let lt: Zeroizing<Vec<P::ScalarField>> = Zeroizing::new(
        abc[num_inputs + 1..]
            .iter()
            .map(|x| x.mul(&*delta_inv))
            .collect(),
    );

    let zt_over_delta = Zeroizing::new(qap.zt.mul(&*delta_inv));
    let ht: Zeroizing<Vec<P::ScalarField>> = Zeroizing::new(
        qap.ht[..degree - 1]
            .iter()
            .map(|x| x.mul(&*zt_over_delta))
            .collect(),
    );

    let mut at = Zeroizing::new(qap.at.clone());
    let mut bt = Zeroizing::new(qap.bt.clone());
    at[0].add_assign(&td.alpha);
    bt[0].add_assign(&td.beta);
    end_timer!(scalars_time);

    let g1_count = at.len() + bt.len() + ht.len() + lt.len() + ic.len();
    let g1_table = FixedBaseMSM::new(&pp.g1, g1_count);
    let g2_table = FixedBaseMSM::new(&pp.g2, bt.len());

    let a_time = start_timer!(|| "Compute the A-query");
    let a_query = g1_table.batch_mul(&at);
    end_timer!(a_time);

    let b_time = start_timer!(|| "Compute the B-query");
    let b_query = g2_table
        .batch_mul(&bt)
        .into_iter()
        .zip(g1_table.batch_mul(&bt))
        .map(|(g, h)| KnowledgeCommitment { g, h })
        .collect();
    end_timer!(b_time);

    let h_time = start_timer!(|| "Compute the H-query");
    let h_query = g1_table.batch_mul(&ht);
    end_timer!(h_time);

    let l_time = start_timer!(|| "Compute the L-query");
    let l_query = g1_table.batch_mul(&lt);
    end_timer!(l_time);

    let vk_time = start_timer!(|| "Compute the verification key");
    let encoded_ic = g1_table.batch_mul(&ic);
    let encoded_ic_query = AccumulationVector::new(encoded_ic[0], encoded_ic[1..].to_vec());

    let alpha_g1 = g1_table.mul(&td.alpha);
    let beta_g2 = g2_table.mul(&td.beta);
    let vk = VerificationKey {
        alpha_g1_beta_g2: P::pairing(&alpha_g1, &beta_g2),
        gamma_g2: g2_table.mul(&td.gamma),
        delta_g2: g2_table.mul(&td.delta),
        encoded_ic_query,
    };
    end_timer!(vk_time);

    let pk = ProvingKey {
        delta_g1: g1_table.mul(&td.delta),
        delta_g2: vk.delta_g2,
        a_query,
        b_query,
        h_query,
        l_query,
        constraint_system: cs,
    };

    pk.print_size();
    vk.print_size();
    end_timer!(generator_time);

    Ok(Keypair { pk, vk })
}

#[cfg(test)]
mod test {
    use super::{generator, Trapdoor};
    use crate::errors::SnarkError;
    use crate::groth16::init_public_params;
    use crate::r1cs::{LinearCombination, R1CSConstraint, R1CSConstraintSystem};
    use zeroize::{Zeroize, ZeroizeOnDrop};
    use zsl_algebra::bn254::{BN254PairingEngine, BN254Scalar};
    use zsl_algebra::prelude::*;

    type F = BN254Scalar;

    #[test]
    fn key_shapes() {
        let mut prng = test_rng();
        let pp = init_public_params::<BN254PairingEngine>();
        let v = |i: usize| LinearCombination::new().with_term(i, F::one());

        // 2 inputs, 3 auxiliary variables, 3 constraints: domain of 8 points
        let mut cs = R1CSConstraintSystem::<F>::new(2, 3);
        cs.add_constraint(R1CSConstraint::new(v(1), v(2), v(3)));
        cs.add_constraint(R1CSConstraint::new(v(3), v(3), v(4)));
        cs.add_constraint(R1CSConstraint::new(v(4), v(0), v(5)));

        let keypair = generator(&pp, &cs, &mut prng).unwrap();
        let pk = &keypair.pk;
        assert_eq!(pk.a_query.len(), 6);
        assert_eq!(pk.b_query.len(), 6);
        assert_eq!(pk.h_query.len(), 7);
        assert_eq!(pk.l_query.len(), 3);
        assert_eq!(pk.delta_g2, keypair.vk.delta_g2);
        assert_eq!(pk.g1_size(), 1 + 6 + 6 + 7 + 3);
        assert_eq!(pk.g2_size(), 7);

        let vk = &keypair.vk;
        assert_eq!(vk.num_inputs(), 2);
        assert_eq!(vk.encoded_ic_query.domain_size() + 1, cs.num_inputs() + 1);
        assert_eq!(vk.g1_size(), 3);
        assert!(!vk.encoded_ic_query.is_fully_accumulated());
    }

    #[test]
    fn sparse_sizes() {
        let mut prng = test_rng();
        let pp = init_public_params::<BN254PairingEngine>();
        let v = |i: usize| LinearCombination::new().with_term(i, F::one());

        // variables 1, 4 and 5 never appear in B
        let mut cs = R1CSConstraintSystem::<F>::new(2, 3);
        cs.add_constraint(R1CSConstraint::new(v(1), v(2), v(3)));
        cs.add_constraint(R1CSConstraint::new(v(3), v(3), v(4)));
        cs.add_constraint(R1CSConstraint::new(v(4), v(0), v(5)));

        let pk = generator(&pp, &cs, &mut prng).unwrap().pk;
        assert_eq!(pk.constraint_system, cs);
        for i in [1, 4, 5] {
            assert!(pk.b_query[i].g.is_identity());
            assert!(pk.b_query[i].h.is_identity());
        }
        assert_eq!(pk.g2_size(), 7);
        assert_eq!(pk.g2_sparse_size(), 4);
        assert_eq!(pk.g1_size(), 23);
        assert_eq!(pk.g1_sparse_size(), 20);

        let dense = |i: usize| {
            LinearCombination::new()
                .with_term(i, F::one())
                .with_term(1, F::one())
                .with_term(4, F::one())
                .with_term(5, F::one())
        };
        // A and B are swapped; variables 2 and 3 end up outside B
        let mut cs = R1CSConstraintSystem::<F>::new(2, 3);
        cs.add_constraint(R1CSConstraint::new(dense(1), dense(2), v(3)));
        let pk = generator(&pp, &cs, &mut prng).unwrap().pk;
        assert_eq!(pk.g2_sparse_size(), pk.g2_size() - 2);
        assert_eq!(pk.g1_sparse_size(), pk.g1_size() - 2);
    }

    #[test]
    fn swapped_copy_is_kept() {
        let mut prng = test_rng();
        let pp = init_public_params::<BN254PairingEngine>();

        let mut cs = R1CSConstraintSystem::<F>::new(0, 3);
        cs.add_constraint(R1CSConstraint::new(
            LinearCombination::new().with_term(1, F::one()),
            LinearCombination::new()
                .with_term(1, F::one())
                .with_term(2, F::one())
                .with_term(3, F::one()),
            LinearCombination::new().with_term(3, F::one()),
        ));

        let keypair = generator(&pp, &cs, &mut prng).unwrap();
        let mut swapped = cs.clone();
        swapped.swap_ab_if_beneficial();
        assert_ne!(swapped, cs);
        assert_eq!(keypair.pk.constraint_system, swapped);
    }

    #[test]
    fn invalid_system_is_rejected() {
        let mut prng = test_rng();
        let pp = init_public_params::<BN254PairingEngine>();

        let mut cs = R1CSConstraintSystem::<F>::new(1, 1);
        cs.add_constraint(R1CSConstraint::new(
            LinearCombination::new().with_term(3, F::one()),
            LinearCombination::new(),
            LinearCombination::new(),
        ));
        assert_eq!(
            generator(&pp, &cs, &mut prng),
            Err(SnarkError::InvalidConstraintSystem)
        );
    }

    #[test]
    fn trapdoor_is_erased() {
        fn zeroized_on_drop<T: ZeroizeOnDrop>(_: &T) {}

        let mut prng = test_rng();
        let mut td = Trapdoor::<F>::sample(&mut prng, |t| !t.is_zero());
        zeroized_on_drop(&td);
        assert!(!td.gamma.is_zero());
        assert!(!td.delta.is_zero());

        td.zeroize();
        for x in [td.tau, td.alpha, td.beta, td.gamma, td.delta] {
            assert!(x.is_zero());
        }
    }

    #[test]
    fn empty_system() {
        let mut prng = test_rng();
        let pp = init_public_params::<BN254PairingEngine>();
        let cs = R1CSConstraintSystem::<F>::new(0, 0);
        let keypair = generator(&pp, &cs, &mut prng).unwrap();
        assert!(keypair.pk.h_query.is_empty());
        assert_eq!(keypair.pk.a_query.len(), 1);
        assert_eq!(keypair.vk.num_inputs(), 0);
    }
}
