use crate::errors::{Result, SnarkError};
use crate::groth16::keys::{ProcessedVerificationKey, Proof, VerificationKey};
use ark_std::{end_timer, start_timer};
use zsl_algebra::prelude::*;

/// Precompute the Miller-loop lines of `-gamma` and `-delta`.
pub fn verifier_process_vk<P: Pairing>(vk: &VerificationKey<P>) -> ProcessedVerificationKey<P> {
    let process_time = start_timer!(|| "Groth16 process verification key");
    let pvk = ProcessedVerificationKey {
        vk_alpha_g1_beta_g2: vk.alpha_g1_beta_g2,
        vk_gamma_g2_precomp: P::prepare_g2(&vk.gamma_g2.neg()),
        vk_delta_g2_precomp: P::prepare_g2(&vk.delta_g2.neg()),
        encoded_ic_query: vk.encoded_ic_query.clone(),
    };
    end_timer!(process_time);
    pvk
}

/// Verify with a processed key, accepting a primary input shorter than the
/// key's; the missing values are taken to be zero.
///
/// Returns `Ok(false)` for a proof that does not verify, including one whose
/// elements are off the curve or outside the prime-order subgroups.
pub fn online_verifier_weak_ic<P: Pairing>(
    pvk: &ProcessedVerificationKey<P>,
    primary_input: &[P::ScalarField],
    proof: &Proof<P>,
) -> Result<bool> {
    let verify_time = start_timer!(|| "Groth16 online verifier");

    let max = pvk.encoded_ic_query.domain_size();
    if primary_input.len() > max {
        return Err(SnarkError::PrimaryInputTooLong {
            max,
            actual: primary_input.len(),
        });
    }

    let accumulated = pvk.encoded_ic_query.accumulate_chunk(primary_input, 0)?;

    if !proof.is_well_formed() {
        end_timer!(verify_time);
        return Ok(false);
    }

    let proof_g_b_precomp = P::prepare_g2(&proof.g_b);
    let lhs = P::product_of_pairings_prepared(
        &[proof.g_a, accumulated.first, proof.g_c],
        &[
            &proof_g_b_precomp,
            &pvk.vk_gamma_g2_precomp,
            &pvk.vk_delta_g2_precomp,
        ],
    );

    end_timer!(verify_time);
    Ok(lhs == pvk.vk_alpha_g1_beta_g2)
}

/// Verify with a processed key; the primary input must have exactly the
/// key's length.
pub fn online_verifier_strong_ic<P: Pairing>(
    pvk: &ProcessedVerificationKey<P>,
    primary_input: &[P::ScalarField],
    proof: &Proof<P>,
) -> Result<bool> {
    let expected = pvk.encoded_ic_query.domain_size();
    if primary_input.len() != expected {
        return Err(SnarkError::PrimaryInputLengthMismatch {
            expected,
            actual: primary_input.len(),
        });
    }
    online_verifier_weak_ic(pvk, primary_input, proof)
}

/// [`online_verifier_weak_ic`] after processing `vk`.
pub fn verifier_weak_ic<P: Pairing>(
    vk: &VerificationKey<P>,
    primary_input: &[P::ScalarField],
    proof: &Proof<P>,
) -> Result<bool> {
    let pvk = verifier_process_vk(vk);
    online_verifier_weak_ic(&pvk, primary_input, proof)
}

/// [`online_verifier_strong_ic`] after processing `vk`.
pub fn verifier_strong_ic<P: Pairing>(
    vk: &VerificationKey<P>,
    primary_input: &[P::ScalarField],
    proof: &Proof<P>,
) -> Result<bool> {
    let pvk = verifier_process_vk(vk);
    online_verifier_strong_ic(&pvk, primary_input, proof)
}

/// A first-group point in affine coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Affine<F: Scalar> {
    x: F,
    y: F,
    infinity: bool,
}

impl<F: Scalar> Affine<F> {
    fn identity() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
            infinity: true,
        }
    }

    fn from_group<G: CurveGroup<BaseType = F>>(g: &G) -> Self {
        if g.is_identity() {
            Self::identity()
        } else {
            Self {
                x: g.get_x(),
                y: g.get_y(),
                infinity: false,
            }
        }
    }

    fn into_group<G: CurveGroup<BaseType = F>>(self) -> G {
        if self.infinity {
            G::get_identity()
        } else {
            G::new(&self.x, &self.y)
        }
    }

    /// Tangent rule on `y^2 = x^3 + a x + b`.
    fn double(&self, a: &F) -> Result<Self> {
        if self.infinity || self.y.is_zero() {
            return Ok(Self::identity());
        }
        let x_sq = self.x.square();
        let num = x_sq.add(&x_sq).add(&x_sq).add(a);
        let lambda = num.mul(&self.y.add(&self.y).inv()?);
        let x3 = lambda.square().sub(&self.x).sub(&self.x);
        let y3 = lambda.mul(&self.x.sub(&x3)).sub(&self.y);
        Ok(Self {
            x: x3,
            y: y3,
            infinity: false,
        })
    }

    /// Chord rule.
    fn add(&self, other: &Self, a: &F) -> Result<Self> {
        if self.infinity {
            return Ok(*other);
        }
        if other.infinity {
            return Ok(*self);
        }
        if self.x == other.x {
            return if self.y == other.y {
                self.double(a)
            } else {
                Ok(Self::identity())
            };
        }
        let lambda = other
            .y
            .sub(&self.y)
            .mul(&other.x.sub(&self.x).inv()?);
        let x3 = lambda.square().sub(&self.x).sub(&other.x);
        let y3 = lambda.mul(&self.x.sub(&x3)).sub(&self.y);
        Ok(Self {
            x: x3,
            y: y3,
            infinity: false,
        })
    }

    /// Double-and-add from the most significant bit.
    fn mul<S: Scalar>(&self, scalar: &S, a: &F) -> Result<Self> {
        let limbs = scalar.get_little_endian_u64();
        let mut acc = Self::identity();
        for i in (0..limbs.len() * 64).rev() {
            acc = acc.double(a)?;
            if (limbs[i / 64] >> (i % 64)) & 1 == 1 {
                acc = acc.add(self, a)?;
            }
        }
        Ok(acc)
    }
}

/// Weak input consistency check that accumulates the input in affine
/// coordinates with explicit chord-and-tangent formulas and evaluates each
/// pairing separately. For cross-checking the other verifiers.
pub fn affine_verifier_weak_ic<P>(
    vk: &VerificationKey<P>,
    primary_input: &[P::ScalarField],
    proof: &Proof<P>,
) -> Result<bool>
where
    P: Pairing,
    P::G1: CurveGroup,
{
    let verify_time = start_timer!(|| "Groth16 affine verifier");

    let ic = &vk.encoded_ic_query;
    let max = ic.domain_size();
    if primary_input.len() > max {
        return Err(SnarkError::PrimaryInputTooLong {
            max,
            actual: primary_input.len(),
        });
    }

    if !proof.is_well_formed() {
        end_timer!(verify_time);
        return Ok(false);
    }

    let a = <P::G1 as CurveGroup>::curve_coeff_a();
    let mut acc = Affine::from_group(&ic.first);
    for (x, base) in primary_input.iter().zip(ic.rest.iter()) {
        let term = Affine::from_group(base).mul(x, &a)?;
        acc = acc.add(&term, &a)?;
    }
    let acc: P::G1 = acc.into_group();

    let lhs = P::pairing(&proof.g_a, &proof.g_b);
    let rhs = vk
        .alpha_g1_beta_g2
        .add(&P::pairing(&acc, &vk.gamma_g2))
        .add(&P::pairing(&proof.g_c, &vk.delta_g2));

    end_timer!(verify_time);
    Ok(lhs == rhs)
}

#[cfg(test)]
mod test {
    use super::Affine;
    use zsl_algebra::bn254::{BN254Scalar, BN254G1};
    use zsl_algebra::prelude::*;

    #[test]
    fn affine_arithmetic_matches_group() {
        let mut prng = test_rng();
        let a = BN254G1::curve_coeff_a();
        let p = BN254G1::random(&mut prng);
        let q = BN254G1::random(&mut prng);
        let ap = Affine::from_group(&p);
        let aq = Affine::from_group(&q);

        let sum: BN254G1 = ap.add(&aq, &a).unwrap().into_group();
        assert_eq!(sum, p.add(&q));

        let double: BN254G1 = ap.add(&ap, &a).unwrap().into_group();
        assert_eq!(double, p.double());

        let zero: BN254G1 = ap.add(&Affine::from_group(&p.neg()), &a).unwrap().into_group();
        assert!(zero.is_identity());

        let id = Affine::from_group(&BN254G1::get_identity());
        assert_eq!(id.add(&ap, &a).unwrap(), ap);
        assert_eq!(ap.add(&id, &a).unwrap(), ap);

        let s = BN254Scalar::random(&mut prng);
        let prod: BN254G1 = ap.mul(&s, &a).unwrap().into_group();
        assert_eq!(prod, p.mul(&s));

        let none: BN254G1 = ap.mul(&BN254Scalar::zero(), &a).unwrap().into_group();
        assert!(none.is_identity());
    }
}
