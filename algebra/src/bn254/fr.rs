use crate::bn254::BN254_SCALAR_LEN;
use crate::prelude::*;
use ark_bn254::Fr;
use ark_ff::{BigInteger, Field, PrimeField};
use ark_std::{result::Result as StdResult, str::FromStr};

/// The wrapped struct for `ark_bn254::Fr`
#[derive(Copy, Clone, PartialEq, Eq, Default, PartialOrd, Ord, Hash)]
pub struct BN254Scalar(pub(crate) Fr);

impl_field_wrapper!(BN254Scalar, Fr);
impl_prime_scalar!(BN254Scalar, Fr, BN254_SCALAR_LEN);

impl FromStr for BN254Scalar {
    type Err = AlgebraError;

    fn from_str(string: &str) -> StdResult<Self, AlgebraError> {
        let res = Fr::from_str(string).map_err(|_| AlgebraError::DeserializationError)?;
        Ok(Self(res))
    }
}
