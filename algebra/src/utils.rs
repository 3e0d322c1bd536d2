use crate::prelude::*;
use base64::alphabet::URL_SAFE;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

const BASE64_PADDING_CONFIG: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

const BASE64_ENGINE: GeneralPurpose = GeneralPurpose::new(&URL_SAFE, BASE64_PADDING_CONFIG);

/// Convert the input into the base64 encoding
pub fn b64enc<T: ?Sized + AsRef<[u8]>>(input: &T) -> String {
    BASE64_ENGINE.encode(input)
}

/// Reconstruct from the base64 encoding
pub fn b64dec<T: ?Sized + AsRef<[u8]>>(input: &T) -> Result<Vec<u8>> {
    BASE64_ENGINE
        .decode(input)
        .map_err(|_| AlgebraError::DeserializationError)
}

/// Return `floor(log2(n))`; `n` must be positive.
pub fn log2_floor(n: usize) -> u32 {
    debug_assert!(n > 0);
    usize::BITS - 1 - n.leading_zeros()
}

/// Invert every non-zero element in place with a single field inversion.
/// Zero entries are left untouched.
pub fn batch_inversion<S: Scalar>(v: &mut [S]) {
    let mut prod = Vec::with_capacity(v.len());
    let mut acc = S::one();
    for f in v.iter().filter(|f| !f.is_zero()) {
        acc.mul_assign(f);
        prod.push(acc);
    }

    // acc is a product of non-zero elements, so it is invertible
    let mut inv = match acc.inv() {
        Ok(inv) => inv,
        Err(_) => return,
    };

    for (f, s) in v
        .iter_mut()
        .rev()
        .filter(|f| !f.is_zero())
        .zip(prod.into_iter().rev().skip(1).chain(Some(S::one())))
    {
        let new_inv = inv.mul(&*f);
        *f = inv.mul(&s);
        inv = new_inv;
    }
}

#[cfg(test)]
mod test {
    use crate::bn254::BN254Scalar;
    use crate::prelude::*;

    #[test]
    fn test_log2() {
        assert_eq!(super::log2_floor(1), 0);
        assert_eq!(super::log2_floor(2), 1);
        assert_eq!(super::log2_floor(7), 2);
        assert_eq!(super::log2_floor(8), 3);
    }

    #[test]
    fn test_batch_inversion() {
        let mut prng = test_rng();
        let mut v: Vec<BN254Scalar> = (0..20).map(|_| BN254Scalar::random(&mut prng)).collect();
        v[3] = BN254Scalar::zero();
        v[11] = BN254Scalar::zero();

        let expected: Vec<BN254Scalar> = v
            .iter()
            .map(|x| {
                if x.is_zero() {
                    BN254Scalar::zero()
                } else {
                    x.inv().unwrap()
                }
            })
            .collect();

        super::batch_inversion(&mut v);
        assert_eq!(v, expected);
    }

    #[test]
    fn test_b64() {
        let bytes = vec![0u8, 1, 2, 250, 255];
        let encoded = super::b64enc(&bytes);
        assert_eq!(super::b64dec(&encoded).unwrap(), bytes);
        assert!(super::b64dec("*not base64*").is_err());
    }
}
