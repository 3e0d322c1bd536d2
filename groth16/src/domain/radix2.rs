use crate::domain::{check_len, fft::best_fft, EvaluationDomain};
use crate::errors::{Result, SnarkError};
use zsl_algebra::{cfg_iter_mut, prelude::*};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The multiplicative subgroup of order `m = 2^k` of the scalar field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Radix2Domain<S: Scalar> {
    m: usize,
    log_m: u32,
    omega: S,
    omega_inv: S,
    m_inv: S,
}

/// Return a primitive `2^log_m`-th root of unity, if the field has one.
pub(crate) fn root_of_unity<S: Scalar>(log_m: u32) -> Option<S> {
    let s = S::two_adicity();
    if log_m > s {
        return None;
    }
    let mut omega = S::two_adic_root_of_unity();
    for _ in log_m..s {
        omega = omega.square();
    }
    Some(omega)
}

impl<S: Scalar> Radix2Domain<S> {
    /// Build the domain of size `m`, a power of two not exceeding `2^s`.
    pub fn new(m: usize) -> Result<Self> {
        if m == 0 || !m.is_power_of_two() {
            return Err(SnarkError::InvalidDomainSize(m));
        }
        let log_m = log2_floor(m);
        let omega: S = root_of_unity(log_m).ok_or(SnarkError::DomainTooLarge(m))?;
        let omega_inv = omega.inv()?;
        let m_inv = S::from(m as u64).inv()?;

        Ok(Self {
            m,
            log_m,
            omega,
            omega_inv,
            m_inv,
        })
    }

    /// The generator of the domain.
    pub fn group_gen(&self) -> S {
        self.omega
    }
}

impl<S: Scalar> EvaluationDomain<S> for Radix2Domain<S> {
    fn size(&self) -> usize {
        self.m
    }

    fn fft(&self, a: &mut [S]) -> Result<()> {
        check_len(self.m, a.len())?;
        best_fft(a, &self.omega, self.log_m);
        Ok(())
    }

    fn ifft(&self, a: &mut [S]) -> Result<()> {
        check_len(self.m, a.len())?;
        best_fft(a, &self.omega_inv, self.log_m);
        let m_inv = self.m_inv;
        cfg_iter_mut!(a).for_each(|x| x.mul_assign(&m_inv));
        Ok(())
    }

    fn evaluate_all_lagrange_coefficients(&self, t: &S) -> Vec<S> {
        let m = self.m;
        if m == 1 {
            return vec![S::one()];
        }

        let z = self.compute_vanishing_polynomial(t);
        if z.is_zero() {
            // t is a domain point: L_i(t) is the indicator of that point
            let mut u = vec![S::zero(); m];
            let mut omega_i = S::one();
            for u_i in u.iter_mut() {
                if omega_i == *t {
                    *u_i = S::one();
                    break;
                }
                omega_i.mul_assign(&self.omega);
            }
            return u;
        }

        // L_i(t) = Z(t) / m * omega^i / (t - omega^i)
        let mut denoms = Vec::with_capacity(m);
        let mut numers = Vec::with_capacity(m);
        let mut l = z.mul(&self.m_inv);
        let mut r = S::one();
        for _ in 0..m {
            denoms.push(t.sub(&r));
            numers.push(l);
            l.mul_assign(&self.omega);
            r.mul_assign(&self.omega);
        }
        batch_inversion(&mut denoms);

        numers
            .iter()
            .zip(denoms.iter())
            .map(|(n, d)| n.mul(d))
            .collect()
    }

    fn get_element(&self, idx: usize) -> S {
        self.omega.pow(&[idx as u64])
    }

    fn compute_vanishing_polynomial(&self, t: &S) -> S {
        t.pow(&[self.m as u64]).sub(&S::one())
    }

    fn add_poly_z(&self, coeff: &S, h: &mut [S]) -> Result<()> {
        check_len(self.m + 1, h.len())?;
        h[self.m].add_assign(coeff);
        h[0].sub_assign(coeff);
        Ok(())
    }

    fn divide_by_z_on_coset(&self, p: &mut [S]) -> Result<()> {
        check_len(self.m, p.len())?;
        let coset = S::multiplicative_generator();
        let z_inv = self
            .compute_vanishing_polynomial(&coset)
            .inv()
            .map_err(|_| SnarkError::DivisionByZero)?;
        cfg_iter_mut!(p).for_each(|x| x.mul_assign(&z_inv));
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::Radix2Domain;
    use crate::domain::EvaluationDomain;
    use crate::errors::SnarkError;
    use zsl_algebra::{bn254::BN254Scalar, prelude::*};

    type F = BN254Scalar;

    fn eval(coefs: &[F], x: &F) -> F {
        coefs.iter().rev().fold(F::zero(), |acc, c| acc.mul(x).add(c))
    }

    #[test]
    fn construction() {
        assert!(Radix2Domain::<F>::new(1).is_ok());
        assert!(Radix2Domain::<F>::new(1 << 28).is_ok());
        assert_eq!(
            Radix2Domain::<F>::new(1 << 29),
            Err(SnarkError::DomainTooLarge(1 << 29))
        );
        assert_eq!(
            Radix2Domain::<F>::new(12),
            Err(SnarkError::InvalidDomainSize(12))
        );
        assert_eq!(
            Radix2Domain::<F>::new(0),
            Err(SnarkError::InvalidDomainSize(0))
        );
    }

    #[test]
    fn fft_round_trip() {
        let mut prng = test_rng();
        for log_m in 0..7 {
            let m = 1 << log_m;
            let domain = Radix2Domain::<F>::new(m).unwrap();
            let coefs: Vec<F> = (0..m).map(|_| F::random(&mut prng)).collect();

            let mut v = coefs.clone();
            domain.fft(&mut v).unwrap();
            for (i, e) in v.iter().enumerate() {
                assert_eq!(*e, eval(&coefs, &domain.get_element(i)));
            }
            domain.ifft(&mut v).unwrap();
            assert_eq!(v, coefs);

            let g = F::multiplicative_generator();
            domain.coset_fft(&mut v, &g).unwrap();
            for (i, e) in v.iter().enumerate() {
                assert_eq!(*e, eval(&coefs, &g.mul(&domain.get_element(i))));
            }
            domain.icoset_fft(&mut v, &g).unwrap();
            assert_eq!(v, coefs);
        }
    }

    #[test]
    fn wrong_length_is_rejected() {
        let domain = Radix2Domain::<F>::new(8).unwrap();
        let mut v = vec![F::one(); 7];
        assert_eq!(
            domain.fft(&mut v),
            Err(SnarkError::DomainSizeMismatch {
                expected: 8,
                actual: 7
            })
        );
        assert!(domain.ifft(&mut v).is_err());
        assert!(domain.divide_by_z_on_coset(&mut v).is_err());
        assert!(domain.add_poly_z(&F::one(), &mut v).is_err());
    }

    #[test]
    fn vanishing_polynomial() {
        let domain = Radix2Domain::<F>::new(16).unwrap();
        for i in 0..16 {
            assert!(domain
                .compute_vanishing_polynomial(&domain.get_element(i))
                .is_zero());
        }
        assert_eq!(domain.get_element(16), F::one());
        let g = F::multiplicative_generator();
        assert!(!domain.compute_vanishing_polynomial(&g).is_zero());
    }

    #[test]
    fn lagrange_coefficients() {
        let mut prng = test_rng();
        let domain = Radix2Domain::<F>::new(8).unwrap();
        let coefs: Vec<F> = (0..8).map(|_| F::random(&mut prng)).collect();
        let mut evals = coefs.clone();
        domain.fft(&mut evals).unwrap();

        let t = F::random(&mut prng);
        let u = domain.evaluate_all_lagrange_coefficients(&t);
        let interpolated: F = u.iter().zip(evals.iter()).map(|(l, e)| l.mul(e)).sum();
        assert_eq!(interpolated, eval(&coefs, &t));

        let u = domain.evaluate_all_lagrange_coefficients(&domain.get_element(3));
        for (i, l) in u.iter().enumerate() {
            assert_eq!(*l, if i == 3 { F::one() } else { F::zero() });
        }

        let single = Radix2Domain::<F>::new(1).unwrap();
        assert_eq!(single.evaluate_all_lagrange_coefficients(&t), vec![F::one()]);
    }

    #[test]
    fn add_poly_z_keeps_domain_evaluations() {
        let mut prng = test_rng();
        let domain = Radix2Domain::<F>::new(4).unwrap();
        let mut h: Vec<F> = (0..5).map(|_| F::random(&mut prng)).collect();
        let before: Vec<F> = (0..4).map(|i| eval(&h, &domain.get_element(i))).collect();

        let c = F::random(&mut prng);
        let t = F::random(&mut prng);
        let at_t = eval(&h, &t);
        domain.add_poly_z(&c, &mut h).unwrap();

        let after: Vec<F> = (0..4).map(|i| eval(&h, &domain.get_element(i))).collect();
        assert_eq!(before, after);
        assert_eq!(
            eval(&h, &t),
            at_t.add(&c.mul(&domain.compute_vanishing_polynomial(&t)))
        );
    }

    #[test]
    fn divide_by_z_on_coset() {
        let mut prng = test_rng();
        let domain = Radix2Domain::<F>::new(8).unwrap();
        let g = F::multiplicative_generator();
        let z = domain.compute_vanishing_polynomial(&g);

        let p: Vec<F> = (0..8).map(|_| F::random(&mut prng)).collect();
        let mut q = p.clone();
        domain.divide_by_z_on_coset(&mut q).unwrap();
        for (a, b) in p.iter().zip(q.iter()) {
            assert_eq!(b.mul(&z), *a);
        }
    }
}
