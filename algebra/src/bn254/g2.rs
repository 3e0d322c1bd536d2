use crate::bn254::BN254Scalar;
use crate::prelude::*;
use ark_bn254::{G2Affine, G2Projective};
use ark_ec::{AffineRepr, CurveGroup as ArkCurveGroup, Group as ArkGroup, VariableBaseMSM};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Compress, Validate};

/// The wrapped struct for `ark_bn254::G2Projective`
#[derive(Copy, Default, Clone, PartialEq, Eq)]
pub struct BN254G2(pub(crate) G2Projective);

impl_group_wrapper!(BN254G2, G2Affine, BN254Scalar);

impl Group for BN254G2 {
    type ScalarType = BN254Scalar;
    const COMPRESSED_LEN: usize = 64;

    #[inline]
    fn double(&self) -> Self {
        Self(self.0.double())
    }

    #[inline]
    fn get_identity() -> Self {
        Self(G2Projective::zero())
    }

    #[inline]
    fn get_base() -> Self {
        Self(G2Projective::generator())
    }

    #[inline]
    fn random<R: CryptoRng + RngCore>(prng: &mut R) -> Self {
        Self(G2Projective::rand(prng))
    }

    #[inline]
    fn to_compressed_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::COMPRESSED_LEN);
        let _ = self
            .0
            .into_affine()
            .serialize_with_mode(&mut buf, Compress::Yes);
        buf
    }

    #[inline]
    fn from_compressed_bytes(bytes: &[u8]) -> Result<Self> {
        let affine = G2Affine::deserialize_with_mode(bytes, Compress::Yes, Validate::Yes)
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
        let points_raw = G2Projective::normalize_batch(
            &points.iter().map(|r| r.0).collect::<Vec<G2Projective>>(),
        );
        Self(G2Projective::msm_unchecked(&points_raw, &scalars_raw))
    }
}
