use crate::bn254::{BN254Fq, BN254Scalar};
use crate::prelude::*;
use ark_bn254::{g1::Config as G1Config, G1Affine, G1Projective};
use ark_ec::{
    short_weierstrass::SWCurveConfig, AffineRepr, CurveGroup as ArkCurveGroup, Group as ArkGroup,
    VariableBaseMSM,
};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Compress, Validate};

/// The wrapped struct for ark_bn254::G1Projective
#[derive(Copy, Default, Clone, PartialEq, Eq)]
pub struct BN254G1(pub(crate) G1Projective);

impl_group_wrapper!(BN254G1, G1Affine, BN254Scalar);

impl Group for BN254G1 {
    type ScalarType = BN254Scalar;
    const COMPRESSED_LEN: usize = 32;

    #[inline]
    fn double(&self) -> Self {
        Self(self.0.double())
    }

    #[inline]
    fn get_identity() -> Self {
        Self(G1Projective::zero())
    }

    #[inline]
    fn get_base() -> Self {
        Self(G1Projective::generator())
    }

    #[inline]
    fn random<R: CryptoRng + RngCore>(prng: &mut R) -> Self {
        Self(G1Projective::rand(prng))
    }

    #[inline]
    fn to_compressed_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::COMPRESSED_LEN);
        // writing into a Vec cannot fail
        let _ = self
            .0
            .into_affine()
            .serialize_with_mode(&mut buf, Compress::Yes);
        buf
    }

    #[inline]
    fn from_compressed_bytes(bytes: &[u8]) -> Result<Self> {
        let affine = G1Affine::deserialize_with_mode(bytes, Compress::Yes, Validate::Yes)
            .map_err(|_| AlgebraError::DeserializationError)?;
        Ok(Self(affine.into_group()))
    }

    #[inline]
    fn is_well_formed(&self) -> bool {
        let affine = self.0.into_affine();
        affine.infinity
            || (affine.is_on_curve() && affine.is_in_correct_subgroup_assuming_on_curve())
    }

    #[inline]
    fn multi_exp(scalars: &[&Self::ScalarType], points: &[&Self]) -> Self {
        let scalars_raw: Vec<_> = scalars.iter().map(|r| r.0).collect();
        let points_raw = G1Projective::normalize_batch(
            &points.iter().map(|r| r.0).collect::<Vec<G1Projective>>(),
        );
        Self(G1Projective::msm_unchecked(&points_raw, &scalars_raw))
    }
}

impl CurveGroup for BN254G1 {
    type BaseType = BN254Fq;

    #[inline]
    fn get_x(&self) -> BN254Fq {
        BN254Fq(self.0.into_affine().x)
    }

    #[inline]
    fn get_y(&self) -> BN254Fq {
        BN254Fq(self.0.into_affine().y)
    }

    /// `(0, 0)` is read as the point at infinity.
    fn new(x: &BN254Fq, y: &BN254Fq) -> Self {
        if x.is_zero() && y.is_zero() {
            Self(G1Projective::zero())
        } else {
            Self(G1Affine::new_unchecked(x.0, y.0).into_group())
        }
    }

    #[inline]
    fn curve_coeff_a() -> BN254Fq {
        BN254Fq(G1Config::COEFF_A)
    }
}
