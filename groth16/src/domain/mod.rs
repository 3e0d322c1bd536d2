use crate::errors::{Result, SnarkError};
use ark_std::fmt::Debug;
use zsl_algebra::{cfg_iter_mut, prelude::*};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

mod extended_radix2;
mod fft;
mod radix2;

pub use extended_radix2::ExtendedRadix2Domain;
pub use radix2::Radix2Domain;

/// A set of `m` field points supporting interpolation and evaluation in
/// `O(m log m)`, together with the vanishing polynomial `Z` of that set.
///
/// Every vector handed to a transform has exactly [`size`](Self::size)
/// entries; [`add_poly_z`](Self::add_poly_z) takes `size + 1` coefficients.
pub trait EvaluationDomain<S: Scalar>: Clone + Debug + Send + Sync {
    /// The number of points.
    fn size(&self) -> usize;

    /// Coefficients to evaluations at the domain points.
    fn fft(&self, a: &mut [S]) -> Result<()>;

    /// Evaluations at the domain points to coefficients.
    fn ifft(&self, a: &mut [S]) -> Result<()>;

    /// Coefficients to evaluations at the coset `g * domain`.
    fn coset_fft(&self, a: &mut [S], g: &S) -> Result<()> {
        check_len(self.size(), a.len())?;
        distribute_powers(a, g);
        self.fft(a)
    }

    /// Evaluations at the coset `g * domain` to coefficients.
    fn icoset_fft(&self, a: &mut [S], g: &S) -> Result<()> {
        self.ifft(a)?;
        let g_inv = g.inv().map_err(|_| SnarkError::DivisionByZero)?;
        distribute_powers(a, &g_inv);
        Ok(())
    }

    /// The evaluations at `t` of the Lagrange basis of the domain.
    fn evaluate_all_lagrange_coefficients(&self, t: &S) -> Vec<S>;

    /// The `idx`-th domain point.
    fn get_element(&self, idx: usize) -> S;

    /// Evaluate the vanishing polynomial `Z` at `t`.
    fn compute_vanishing_polynomial(&self, t: &S) -> S;

    /// Add `coeff * Z` to the polynomial whose `size + 1` coefficients are `h`.
    fn add_poly_z(&self, coeff: &S, h: &mut [S]) -> Result<()>;

    /// Divide evaluations over the coset by the multiplicative generator
    /// by the evaluations of `Z` there.
    fn divide_by_z_on_coset(&self, p: &mut [S]) -> Result<()>;
}

pub(crate) fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        Err(SnarkError::DomainSizeMismatch { expected, actual })
    } else {
        Ok(())
    }
}

/// Multiply `a[i]` by `g^i`.
fn distribute_powers<S: Scalar>(a: &mut [S], g: &S) {
    #[cfg(feature = "parallel")]
    {
        let chunk = ark_std::cmp::max(a.len() / rayon::current_num_threads(), 1);
        a.par_chunks_mut(chunk).enumerate().for_each(|(c, part)| {
            let mut pow = g.pow(&[(c * chunk) as u64]);
            for x in part.iter_mut() {
                x.mul_assign(&pow);
                pow.mul_assign(g);
            }
        });
    }
    #[cfg(not(feature = "parallel"))]
    {
        let mut pow = S::one();
        for x in a.iter_mut() {
            x.mul_assign(&pow);
            pow.mul_assign(g);
        }
    }
}

/// Multiply every entry by `c`.
pub(crate) fn scale<S: Scalar>(a: &mut [S], c: &S) {
    cfg_iter_mut!(a).for_each(|x| x.mul_assign(c));
}

/// The evaluation domain picked for a given problem size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeneralEvaluationDomain<S: Scalar> {
    /// A multiplicative subgroup of order `2^k`, `k <= s`.
    Radix2(Radix2Domain<S>),
    /// The subgroup of order `2^s` together with one of its cosets.
    ExtendedRadix2(ExtendedRadix2Domain<S>),
}

/// Return the smallest supported domain with at least `min_size` points.
///
/// The size is rounded up to a power of two `2^k`. The radix-2 domain serves
/// `k <= s`, `s` being the two-adicity of the field, and the extended radix-2
/// domain serves `k = s + 1`. Sizes `0` and `1` give the one-point domain.
pub fn get_evaluation_domain<S: Scalar>(min_size: usize) -> Result<GeneralEvaluationDomain<S>> {
    let m = min_size
        .max(1)
        .checked_next_power_of_two()
        .ok_or(SnarkError::DomainTooLarge(min_size))?;
    let log_m = log2_floor(m);
    let s = S::two_adicity();

    if log_m <= s {
        Ok(GeneralEvaluationDomain::Radix2(Radix2Domain::new(m)?))
    } else if log_m == s + 1 {
        Ok(GeneralEvaluationDomain::ExtendedRadix2(
            ExtendedRadix2Domain::new(m)?,
        ))
    } else {
        Err(SnarkError::DomainTooLarge(min_size))
    }
}

macro_rules! dispatch {
    ($self:ident, $d:ident => $e:expr) => {
        match $self {
            GeneralEvaluationDomain::Radix2($d) => $e,
            GeneralEvaluationDomain::ExtendedRadix2($d) => $e,
        }
    };
}

impl<S: Scalar> EvaluationDomain<S> for GeneralEvaluationDomain<S> {
    fn size(&self) -> usize {
        dispatch!(self, d => d.size())
    }

    fn fft(&self, a: &mut [S]) -> Result<()> {
        dispatch!(self, d => d.fft(a))
    }

    fn ifft(&self, a: &mut [S]) -> Result<()> {
        dispatch!(self, d => d.ifft(a))
    }

    fn coset_fft(&self, a: &mut [S], g: &S) -> Result<()> {
        dispatch!(self, d => d.coset_fft(a, g))
    }

    fn icoset_fft(&self, a: &mut [S], g: &S) -> Result<()> {
        dispatch!(self, d => d.icoset_fft(a, g))
    }

    fn evaluate_all_lagrange_coefficients(&self, t: &S) -> Vec<S> {
        dispatch!(self, d => d.evaluate_all_lagrange_coefficients(t))
    }

    fn get_element(&self, idx: usize) -> S {
        dispatch!(self, d => d.get_element(idx))
    }

    fn compute_vanishing_polynomial(&self, t: &S) -> S {
        dispatch!(self, d => d.compute_vanishing_polynomial(t))
    }

    fn add_poly_z(&self, coeff: &S, h: &mut [S]) -> Result<()> {
        dispatch!(self, d => d.add_poly_z(coeff, h))
    }

    fn divide_by_z_on_coset(&self, p: &mut [S]) -> Result<()> {
        dispatch!(self, d => d.divide_by_z_on_coset(p))
    }
}

#[cfg(test)]
mod test {
    use super::{get_evaluation_domain, EvaluationDomain, GeneralEvaluationDomain};
    use crate::errors::SnarkError;
    use zsl_algebra::{bn254::BN254Scalar, prelude::*};

    type F = BN254Scalar;

    #[test]
    fn domain_selection() {
        for (min, size) in [(0, 1), (1, 1), (2, 2), (3, 4), (5, 8), (1000, 1024)] {
            let domain = get_evaluation_domain::<F>(min).unwrap();
            assert_eq!(domain.size(), size);
            assert!(matches!(domain, GeneralEvaluationDomain::Radix2(_)));
        }

        let s = F::two_adicity();
        let domain = get_evaluation_domain::<F>((1 << s) + 1).unwrap();
        assert_eq!(domain.size(), 1 << (s + 1));
        assert!(matches!(domain, GeneralEvaluationDomain::ExtendedRadix2(_)));

        let too_large = (1 << (s + 1)) + 1;
        assert_eq!(
            get_evaluation_domain::<F>(too_large),
            Err(SnarkError::DomainTooLarge(too_large))
        );
        assert_eq!(
            get_evaluation_domain::<F>(usize::MAX),
            Err(SnarkError::DomainTooLarge(usize::MAX))
        );
    }

    #[test]
    fn coset_transforms_through_dispatch() {
        let mut prng = test_rng();
        let domain = get_evaluation_domain::<F>(20).unwrap();
        let g = F::random(&mut prng);
        let coefs: Vec<F> = (0..domain.size()).map(|_| F::random(&mut prng)).collect();

        let mut v = coefs.clone();
        domain.coset_fft(&mut v, &g).unwrap();
        domain.icoset_fft(&mut v, &g).unwrap();
        assert_eq!(v, coefs);
    }
}
