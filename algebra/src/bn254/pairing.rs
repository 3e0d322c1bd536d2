use crate::bn254::{BN254Gt, BN254Scalar, BN254G1, BN254G2};
use crate::prelude::*;
use ark_bn254::Bn254;
use ark_ec::{pairing::Pairing as ArkPairing, CurveGroup as ArkCurveGroup};
use serde::{Deserializer, Serializer};

/// The pairing engine for BN254
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BN254PairingEngine;

/// A BN254 G2 element together with its precomputed Miller-loop lines.
///
/// Equality and serialization only look at the point; the lines are
/// recomputed on deserialization.
#[derive(Clone)]
pub struct BN254G2Prepared {
    point: BN254G2,
    prepared: <Bn254 as ArkPairing>::G2Prepared,
}

impl BN254G2Prepared {
    /// Return the point the lines were computed from.
    pub fn point(&self) -> &BN254G2 {
        &self.point
    }
}

impl From<BN254G2> for BN254G2Prepared {
    fn from(point: BN254G2) -> Self {
        Self {
            point,
            prepared: point.0.into_affine().into(),
        }
    }
}

impl ark_std::fmt::Debug for BN254G2Prepared {
    fn fmt(&self, f: &mut Formatter<'_>) -> ark_std::fmt::Result {
        f.debug_tuple("BN254G2Prepared").field(&self.point).finish()
    }
}

impl PartialEq for BN254G2Prepared {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

impl Eq for BN254G2Prepared {}

impl serde::Serialize for BN254G2Prepared {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serde::Serialize::serialize(&self.point, serializer)
    }
}

impl<'de> serde::Deserialize<'de> for BN254G2Prepared {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(<BN254G2 as serde::Deserialize>::deserialize(deserializer)?.into())
    }
}

impl Pairing for BN254PairingEngine {
    type ScalarField = BN254Scalar;
    type G1 = BN254G1;
    type G2 = BN254G2;
    type Gt = BN254Gt;
    type G2Prepared = BN254G2Prepared;

    #[inline]
    fn pairing(a: &Self::G1, b: &Self::G2) -> Self::Gt {
        BN254Gt(Bn254::pairing(a.0, b.0).0)
    }

    #[inline]
    fn prepare_g2(b: &Self::G2) -> Self::G2Prepared {
        BN254G2Prepared::from(*b)
    }

    #[inline]
    fn product_of_pairings_prepared(a: &[Self::G1], b: &[&Self::G2Prepared]) -> Self::Gt {
        let c1 = a.iter().map(|x| x.0.into_affine());
        let c2 = b.iter().map(|x| x.prepared.clone());
        BN254Gt(Bn254::multi_pairing(c1, c2).0)
    }
}
