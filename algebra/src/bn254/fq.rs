use crate::bn254::BN254_SCALAR_LEN;
use crate::prelude::*;
use ark_bn254::Fq;
use ark_ff::{BigInteger, Field, PrimeField};
use ark_std::{result::Result as StdResult, str::FromStr};

/// The wrapped struct for `ark_bn254::Fq`, the base field of the curve.
#[derive(Copy, Clone, PartialEq, Eq, Default, PartialOrd, Ord, Hash)]
pub struct BN254Fq(pub(crate) Fq);

impl_field_wrapper!(BN254Fq, Fq);
impl_prime_scalar!(BN254Fq, Fq, BN254_SCALAR_LEN);

impl FromStr for BN254Fq {
    type Err = AlgebraError;

    fn from_str(string: &str) -> StdResult<Self, AlgebraError> {
        let res = Fq::from_str(string).map_err(|_| AlgebraError::DeserializationError)?;
        Ok(Self(res))
    }
}
