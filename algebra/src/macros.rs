/// Arithmetic, conversion and formatting boilerplate shared by the field wrappers.
macro_rules! impl_field_wrapper {
    ($t:ident, $inner:ty) => {
        impl ark_std::fmt::Debug for $t {
            fn fmt(&self, f: &mut ark_std::fmt::Formatter<'_>) -> ark_std::fmt::Result {
                let v: num_bigint::BigUint = self.0.into_bigint().into();
                <num_bigint::BigUint as ark_std::fmt::Debug>::fmt(&v, f)
            }
        }

        impl From<$t> for num_bigint::BigUint {
            #[inline]
            fn from(val: $t) -> Self {
                val.0.into_bigint().into()
            }
        }

        impl<'a> From<&'a num_bigint::BigUint> for $t {
            #[inline]
            fn from(src: &num_bigint::BigUint) -> Self {
                Self(<$inner>::from(src.clone()))
            }
        }

        impl From<u32> for $t {
            #[inline]
            fn from(value: u32) -> Self {
                Self::from(value as u64)
            }
        }

        impl From<u64> for $t {
            #[inline]
            fn from(value: u64) -> Self {
                Self(<$inner>::from(value))
            }
        }

        impl One for $t {
            #[inline]
            fn one() -> Self {
                Self(<$inner>::one())
            }
        }

        impl Zero for $t {
            #[inline]
            fn zero() -> Self {
                Self(<$inner>::zero())
            }

            #[inline]
            fn is_zero(&self) -> bool {
                self.0.is_zero()
            }
        }

        impl Add for $t {
            type Output = $t;

            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $t {
            type Output = $t;

            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul for $t {
            type Output = $t;

            #[inline]
            fn mul(self, rhs: Self) -> Self::Output {
                Self(self.0 * rhs.0)
            }
        }

        impl<'a> Add<&'a $t> for $t {
            type Output = $t;

            #[inline]
            fn add(self, rhs: &Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl<'a> Sub<&'a $t> for $t {
            type Output = $t;

            #[inline]
            fn sub(self, rhs: &Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl<'a> Mul<&'a $t> for $t {
            type Output = $t;

            #[inline]
            fn mul(self, rhs: &Self) -> Self::Output {
                Self(self.0 * rhs.0)
            }
        }

        impl<'a> AddAssign<&'a $t> for $t {
            #[inline]
            fn add_assign(&mut self, rhs: &Self) {
                self.0 += rhs.0;
            }
        }

        impl<'a> SubAssign<&'a $t> for $t {
            #[inline]
            fn sub_assign(&mut self, rhs: &Self) {
                self.0 -= rhs.0;
            }
        }

        impl<'a> MulAssign<&'a $t> for $t {
            #[inline]
            fn mul_assign(&mut self, rhs: &Self) {
                self.0 *= rhs.0;
            }
        }

        impl Neg for $t {
            type Output = $t;

            #[inline]
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl zeroize::Zeroize for $t {
            #[inline]
            fn zeroize(&mut self) {
                zeroize::Zeroize::zeroize(&mut self.0);
            }
        }

        impl Sum<$t> for $t {
            #[inline]
            fn sum<I: Iterator<Item = $t>>(iter: I) -> Self {
                iter.fold(Self::zero(), Add::add)
            }
        }

        impl<'a> Sum<&'a $t> for $t {
            #[inline]
            fn sum<I: Iterator<Item = &'a $t>>(iter: I) -> Self {
                iter.fold(Self::zero(), Add::add)
            }
        }
    };
}

/// Group-law operator impls for a wrapper around an arkworks projective point.
macro_rules! impl_group_wrapper {
    ($t:ident, $affine:ty, $scalar:ty) => {
        impl ark_std::fmt::Debug for $t {
            fn fmt(&self, f: &mut ark_std::fmt::Formatter<'_>) -> ark_std::fmt::Result {
                <$affine as ark_std::fmt::Display>::fmt(&self.0.into_affine(), f)
            }
        }

        impl<'a> Add<&'a $t> for $t {
            type Output = $t;

            #[inline]
            fn add(self, rhs: &Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl<'a> Sub<&'a $t> for $t {
            type Output = $t;

            #[inline]
            fn sub(self, rhs: &Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl<'a> Mul<&'a $scalar> for $t {
            type Output = $t;

            #[inline]
            fn mul(self, rhs: &$scalar) -> Self::Output {
                Self(self.0 * rhs.0)
            }
        }

        impl<'a> AddAssign<&'a $t> for $t {
            #[inline]
            fn add_assign(&mut self, rhs: &'a $t) {
                self.0 += rhs.0
            }
        }

        impl<'a> SubAssign<&'a $t> for $t {
            #[inline]
            fn sub_assign(&mut self, rhs: &'a $t) {
                self.0 -= rhs.0
            }
        }

        impl<'a> MulAssign<&'a $scalar> for $t {
            #[inline]
            fn mul_assign(&mut self, rhs: &'a $scalar) {
                self.0 *= rhs.0
            }
        }

        impl Neg for $t {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self(-self.0)
            }
        }
    };
}

/// `Scalar` for a wrapper around an arkworks prime field of `$len` bytes.
macro_rules! impl_prime_scalar {
    ($t:ident, $inner:ty, $len:expr) => {
        impl Scalar for $t {
            #[inline]
            fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
                Self(<$inner as UniformRand>::rand(rng))
            }

            #[inline]
            fn multiplicative_generator() -> Self {
                Self(<$inner as ark_ff::FftField>::GENERATOR)
            }

            #[inline]
            fn two_adicity() -> u32 {
                <$inner as ark_ff::FftField>::TWO_ADICITY
            }

            #[inline]
            fn two_adic_root_of_unity() -> Self {
                Self(<$inner as ark_ff::FftField>::TWO_ADIC_ROOT_OF_UNITY)
            }

            #[inline]
            fn capacity() -> usize {
                (<$inner as ark_ff::PrimeField>::MODULUS_BIT_SIZE - 1) as usize
            }

            #[inline]
            fn get_field_size_biguint() -> num_bigint::BigUint {
                <$inner as ark_ff::PrimeField>::MODULUS.into()
            }

            #[inline]
            fn get_little_endian_u64(&self) -> Vec<u64> {
                self.0.into_bigint().0.to_vec()
            }

            #[inline]
            fn bytes_len() -> usize {
                $len
            }

            #[inline]
            fn to_bytes(&self) -> Vec<u8> {
                self.0.into_bigint().to_bytes_le()
            }

            #[inline]
            fn from_bytes(bytes: &[u8]) -> Result<Self> {
                if bytes.len() > Self::bytes_len() {
                    return Err(AlgebraError::DeserializationError);
                }
                let mut array = vec![0u8; Self::bytes_len()];
                array[0..bytes.len()].copy_from_slice(bytes);
                let f = <$inner as ark_serialize::CanonicalDeserialize>::deserialize_compressed(
                    array.as_slice(),
                )
                .map_err(|_| AlgebraError::DeserializationError)?;
                Ok(Self(f))
            }

            #[inline]
            fn inv(&self) -> Result<Self> {
                self.0
                    .inverse()
                    .map(Self)
                    .ok_or(AlgebraError::GroupInversionError)
            }

            #[inline]
            fn square(&self) -> Self {
                Self(self.0.square())
            }

            #[inline]
            fn pow(&self, exponent: &[u64]) -> Self {
                Self(self.0.pow(exponent))
            }
        }
    };
}
