use crate::prelude::*;
use ark_std::fmt::Debug;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// The trait for scalars
pub trait Scalar:
    Copy
    + Default
    + Debug
    + PartialEq
    + Eq
    + Serialize
    + for<'de> Deserialize<'de>
    + Into<BigUint>
    + for<'a> From<&'a BigUint>
    + Clone
    + One
    + Zero
    + Sized
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Sum<Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + for<'a> MulAssign<&'a Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> Sum<&'a Self>
    + From<u32>
    + From<u64>
    + Neg<Output = Self>
    + Zeroize
    + Sync
    + Send
{
    /// Return a random scalar
    fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self;

    /// Return multiplicative generator of order r,
    /// which is also required to be a quadratic nonresidue
    fn multiplicative_generator() -> Self;

    /// Return the largest `s` such that `2^s` divides `r - 1`.
    fn two_adicity() -> u32;

    /// Return a primitive `2^s`-th root of unity, `s` being [`Scalar::two_adicity`].
    fn two_adic_root_of_unity() -> Self;

    /// Return the capacity.
    fn capacity() -> usize;

    /// Return the number of bits of the modulus.
    fn num_bits() -> usize {
        Self::capacity() + 1
    }

    /// Return the field size as a BigUint
    fn get_field_size_biguint() -> BigUint;

    /// Return a representation of the scalar as a vector of u64 in the little-endian order
    fn get_little_endian_u64(&self) -> Vec<u64>;

    /// Return the len of the byte representation
    fn bytes_len() -> usize;

    /// Convert to bytes
    fn to_bytes(&self) -> Vec<u8>;

    /// Convert from bytes
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Return the modular inverse of the scalar if it exists
    fn inv(&self) -> Result<Self>;

    /// Return the square of the field element
    fn square(&self) -> Self;

    /// exponent form: least significant limb first, with u64 limbs
    fn pow(&self, exponent: &[u64]) -> Self {
        let mut base = *self;
        let mut result = Self::one();
        for exp_u64 in exponent {
            let mut e = *exp_u64;
            for _ in 0..64 {
                if e % 2 == 1 {
                    result.mul_assign(&base);
                }
                base = base.mul(&base);
                e >>= 1;
            }
        }
        result
    }

    /// Convert into BigUint, often for debug.
    fn into_biguint(self) -> BigUint {
        self.into()
    }
}

/// The trait for group elements
pub trait Group:
    Debug
    + Default
    + Copy
    + Sized
    + PartialEq
    + Eq
    + Clone
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Mul<&'a Self::ScalarType, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + Serialize
    + Neg<Output = Self>
    + for<'de> Deserialize<'de>
    + ZslFromToBytes
    + Sync
    + Send
{
    /// The scalar type
    type ScalarType: Scalar;

    /// The number of bytes for a compressed representation of a group element
    const COMPRESSED_LEN: usize;

    /// Return the doubling of the group element
    fn double(&self) -> Self;

    /// Return the identity element (i.e., 0 * G)
    fn get_identity() -> Self;

    /// Return the base element (i.e., 1 * G)
    fn get_base() -> Self;

    /// Return a random element
    fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self;

    /// Convert to bytes in the compressed representation
    fn to_compressed_bytes(&self) -> Vec<u8>;

    /// Convert from bytes in the compressed representation
    fn from_compressed_bytes(bytes: &[u8]) -> Result<Self>;

    /// Check that the element lies on the curve and in the prime-order subgroup.
    fn is_well_formed(&self) -> bool;

    /// Check if the element is the identity.
    fn is_identity(&self) -> bool {
        *self == Self::get_identity()
    }

    /// Compute the multiscalar multiplication; extra scalars or points are ignored.
    #[inline]
    fn multi_exp(scalars: &[&Self::ScalarType], points: &[&Self]) -> Self {
        scalars
            .iter()
            .zip(points.iter())
            .fold(Self::get_identity(), |acc, (s, p)| acc.add(&p.mul(s)))
    }
}

/// The trait for a pair of groups for pairing
pub trait Pairing: Copy + Clone + Debug + Default + PartialEq + Eq + Send + Sync + 'static {
    /// The scalar type
    type ScalarField: Scalar;

    /// The first group
    type G1: Group<ScalarType = Self::ScalarField>;

    /// The second group
    type G2: Group<ScalarType = Self::ScalarField>;

    /// The target group
    type Gt: Group<ScalarType = Self::ScalarField>;

    /// An element of the second group with its Miller-loop lines precomputed
    type G2Prepared: Clone
        + Debug
        + PartialEq
        + Eq
        + Serialize
        + for<'de> Deserialize<'de>
        + Send
        + Sync;

    /// The pairing operation
    fn pairing(a: &Self::G1, b: &Self::G2) -> Self::Gt;

    /// Precompute the Miller-loop lines of a second group element
    fn prepare_g2(b: &Self::G2) -> Self::G2Prepared;

    /// The product of pairing operation against precomputed second group elements
    fn product_of_pairings_prepared(a: &[Self::G1], b: &[&Self::G2Prepared]) -> Self::Gt;
}

/// The trait for get x-coordinate and y-coordinate.
pub trait CurveGroup: Group {
    /// The scalar type
    type BaseType: Scalar;

    /// Get the x-coordinate of the affine representation.
    fn get_x(&self) -> Self::BaseType;

    /// Get the y-coordinate of the affine representation.
    fn get_y(&self) -> Self::BaseType;

    /// Construct from x and y coordinates.
    fn new(x: &Self::BaseType, y: &Self::BaseType) -> Self;

    /// The coefficient `a` of the short Weierstrass equation `y^2 = x^3 + a x + b`.
    fn curve_coeff_a() -> Self::BaseType;
}
