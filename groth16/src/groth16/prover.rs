use crate::errors::{Result, SnarkError};
use crate::groth16::{
    keys::{check_assignment, Proof, ProvingKey},
    params::PublicParams,
};
use crate::r1cs::qap::witness_map;
use ark_std::{end_timer, iter::once, start_timer};
use zeroize::Zeroizing;
use zsl_algebra::prelude::*;

/// Prove that the full assignment `primary_input ++ auxiliary_input`
/// satisfies the constraint system of `pk`.
///
/// Satisfaction is not checked; an unsatisfying assignment yields a proof
/// that does not verify. The blinding scalars are erased before returning.
///
/// # Example
///
/// ```
/// use zsl_algebra::bn254::{BN254PairingEngine, BN254Scalar};
/// use zsl_algebra::prelude::*;
/// use zsl_groth16::groth16::{generator, init_public_params, prover, verifier_strong_ic};
/// use zsl_groth16::r1cs::{LinearCombination, R1CSConstraint, R1CSConstraintSystem};
///
/// let mut prng = test_rng();
/// let pp = init_public_params::<BN254PairingEngine>();
///
/// // x * x = y with y public
/// let x = LinearCombination::new().with_term(2, BN254Scalar::one());
/// let y = LinearCombination::new().with_term(1, BN254Scalar::one());
/// let mut cs = R1CSConstraintSystem::new(1, 1);
/// cs.add_constraint(R1CSConstraint::new(x.clone(), x, y));
///
/// let keypair = generator(&pp, &cs, &mut prng).unwrap();
/// let primary = [BN254Scalar::from(9u32)];
/// let auxiliary = [BN254Scalar::from(3u32)];
/// let proof = prover(&pp, &keypair.pk, &primary, &auxiliary, &mut prng).unwrap();
/// assert!(verifier_strong_ic(&keypair.vk, &primary, &proof).unwrap());
/// ```
pub fn prover<P: Pairing, R: CryptoRng + RngCore>(
    pp: &PublicParams<P>,
    pk: &ProvingKey<P>,
    primary_input: &[P::ScalarField],
    auxiliary_input: &[P::ScalarField],
    prng: &mut R,
) -> Result<Proof<P>> {
    let prover_time = start_timer!(|| "Groth16 prover");

    check_assignment(pk, primary_input, auxiliary_input)?;
    let cs = &pk.constraint_system;
    pp.check_qap_size(cs.num_constraints() + cs.num_inputs() + 1)?;

    let zero = P::ScalarField::zero();
    let qap_wit = witness_map(cs, primary_input, auxiliary_input, &zero, &zero, &zero)?;

    // H has degree at most m - 2
    let h_len = qap_wit.degree - 1;
    if pk.h_query.len() != h_len {
        return Err(SnarkError::Message(
            "proving key does not match its constraint system".into(),
        ));
    }

    let r = Zeroizing::new(P::ScalarField::random(prng));
    let s = Zeroizing::new(P::ScalarField::random(prng));
    let rs = Zeroizing::new((*r).mul(&*s));

    let one = P::ScalarField::one();
    let const_padded: Vec<&P::ScalarField> = once(&one)
        .chain(qap_wit.coefficients_for_abcs.iter())
        .collect();

    let a_time = start_timer!(|| "Compute evaluation to A-query");
    let a_bases: Vec<&P::G1> = pk.a_query.iter().collect();
    let evaluation_at = P::G1::multi_exp(&const_padded, &a_bases);
    end_timer!(a_time);

    let b_time = start_timer!(|| "Compute evaluation to B-query");
    let b_g2_bases: Vec<&P::G2> = pk.b_query.iter().map(|kc| &kc.g).collect();
    let b_g1_bases: Vec<&P::G1> = pk.b_query.iter().map(|kc| &kc.h).collect();
    let evaluation_bt_g2 = P::G2::multi_exp(&const_padded, &b_g2_bases);
    let evaluation_bt_g1 = P::G1::multi_exp(&const_padded, &b_g1_bases);
    end_timer!(b_time);

    let h_time = start_timer!(|| "Compute evaluation to H-query");
    let h_scalars: Vec<&P::ScalarField> = qap_wit.coefficients_for_h[..h_len].iter().collect();
    let h_bases: Vec<&P::G1> = pk.h_query.iter().collect();
    let evaluation_ht = P::G1::multi_exp(&h_scalars, &h_bases);
    end_timer!(h_time);

    let l_time = start_timer!(|| "Compute evaluation to L-query");
    let l_scalars: Vec<&P::ScalarField> = qap_wit.coefficients_for_abcs[cs.num_inputs()..]
        .iter()
        .collect();
    let l_bases: Vec<&P::G1> = pk.l_query.iter().collect();
    let evaluation_lt = P::G1::multi_exp(&l_scalars, &l_bases);
    end_timer!(l_time);

    let g_a = evaluation_at.add(&pk.delta_g1.mul(&*r));
    let g1_b = evaluation_bt_g1.add(&pk.delta_g1.mul(&*s));
    let g_b = evaluation_bt_g2.add(&pk.delta_g2.mul(&*s));
    let g_c = evaluation_ht
        .add(&evaluation_lt)
        .add(&g_a.mul(&*s))
        .add(&g1_b.mul(&*r))
        .sub(&pk.delta_g1.mul(&*rs));

    end_timer!(prover_time);

    Ok(Proof { g_a, g_b, g_c })
}
