use crate::bn254::{BN254PairingEngine, BN254Scalar, BN254G1, BN254G2};
use crate::prelude::*;
use ark_bn254::{Fq12, Fr};
use ark_ff::{Field, PrimeField};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Compress, Validate};

/// The wrapped struct for `ark_bn254::Fq12`, which is the pairing result.
///
/// The group law is written additively to fit [`Group`]: `add` is the
/// multiplication in `Fq12` and `mul` by a scalar is an exponentiation.
#[derive(Copy, Default, Clone, PartialEq, Eq, Debug)]
pub struct BN254Gt(pub(crate) Fq12);

impl Neg for BN254Gt {
    type Output = Self;

    fn neg(self) -> Self::Output {
        // elements of the cyclotomic subgroup are inverted by conjugation
        let mut v = self.0;
        v.conjugate_in_place();
        Self(v)
    }
}

impl<'a> Add<&'a BN254Gt> for BN254Gt {
    type Output = BN254Gt;

    #[inline]
    fn add(self, rhs: &'a BN254Gt) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl<'a> Sub<&'a BN254Gt> for BN254Gt {
    type Output = BN254Gt;

    #[inline]
    fn sub(self, rhs: &'a BN254Gt) -> Self::Output {
        self.add(&rhs.neg())
    }
}

impl<'a> Mul<&'a BN254Scalar> for BN254Gt {
    type Output = BN254Gt;

    #[inline]
    fn mul(self, rhs: &'a BN254Scalar) -> Self::Output {
        Self(self.0.pow(rhs.0.into_bigint()))
    }
}

impl<'a> MulAssign<&'a BN254Scalar> for BN254Gt {
    #[inline]
    fn mul_assign(&mut self, rhs: &'a BN254Scalar) {
        *self = self.mul(rhs)
    }
}

impl<'a> AddAssign<&'a BN254Gt> for BN254Gt {
    #[inline]
    fn add_assign(&mut self, rhs: &'a BN254Gt) {
        self.0 *= rhs.0
    }
}

impl<'a> SubAssign<&'a BN254Gt> for BN254Gt {
    #[inline]
    fn sub_assign(&mut self, rhs: &'a BN254Gt) {
        *self = self.sub(rhs)
    }
}

impl Group for BN254Gt {
    type ScalarType = BN254Scalar;

    const COMPRESSED_LEN: usize = 384;

    #[inline]
    fn double(&self) -> Self {
        Self(self.0.square())
    }

    #[inline]
    fn get_identity() -> Self {
        Self(Fq12::one())
    }

    #[inline]
    fn get_base() -> Self {
        BN254PairingEngine::pairing(&BN254G1::get_base(), &BN254G2::get_base())
    }

    #[inline]
    fn random<R: CryptoRng + RngCore>(prng: &mut R) -> Self {
        Self::get_base().mul(&BN254Scalar::random(prng))
    }

    #[inline]
    fn to_compressed_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::COMPRESSED_LEN);
        let _ = self.0.serialize_with_mode(&mut buf, Compress::Yes);
        buf
    }

    #[inline]
    fn from_compressed_bytes(bytes: &[u8]) -> Result<Self> {
        let res = Fq12::deserialize_with_mode(bytes, Compress::Yes, Validate::Yes)
            .map_err(|_| AlgebraError::DeserializationError)?;
        Ok(Self(res))
    }

    /// Membership in the order-`r` subgroup of `Fq12^*`.
    #[inline]
    fn is_well_formed(&self) -> bool {
        !self.0.is_zero() && self.0.pow(Fr::MODULUS) == Fq12::one()
    }
}
