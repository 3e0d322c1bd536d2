use crate::domain::{
    check_len, fft::best_fft, radix2::root_of_unity, scale, EvaluationDomain, Radix2Domain,
};
use crate::errors::{Result, SnarkError};
use zsl_algebra::prelude::*;

/// A radix-2 subgroup `H` of order `small_m` together with its coset
/// `shift * H`, where `shift` is the square of the multiplicative generator.
///
/// This doubles the largest domain the field supports: with `small_m = 2^s`
/// it serves problems of size `2^(s + 1)`. Points `0..small_m` are `omega^i`,
/// points `small_m..m` are `shift * omega^i`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtendedRadix2Domain<S: Scalar> {
    m: usize,
    small_m: usize,
    log_small_m: u32,
    small_domain: Radix2Domain<S>,
    omega: S,
    omega_inv: S,
    shift: S,
    shift_inv: S,
    shift_to_small_m: S,
    // 1 / (shift^small_m - 1)
    denom_inv: S,
}

impl<S: Scalar> ExtendedRadix2Domain<S> {
    /// Build the domain of size `m`, a power of two in `2..=2^(s + 1)`.
    pub fn new(m: usize) -> Result<Self> {
        if m < 2 || !m.is_power_of_two() {
            return Err(SnarkError::InvalidDomainSize(m));
        }
        let small_m = m / 2;
        let log_small_m = log2_floor(small_m);
        let omega: S = root_of_unity(log_small_m).ok_or(SnarkError::DomainTooLarge(m))?;
        let small_domain = Radix2Domain::new(small_m)?;

        let g = S::multiplicative_generator();
        let shift = g.square();
        let shift_to_small_m = shift.pow(&[small_m as u64]);
        // fails when the coset coincides with the subgroup
        let denom_inv = shift_to_small_m
            .sub(&S::one())
            .inv()
            .map_err(|_| SnarkError::DomainTooLarge(m))?;

        Ok(Self {
            m,
            small_m,
            log_small_m,
            small_domain,
            omega,
            omega_inv: omega.inv()?,
            shift,
            shift_inv: shift.inv()?,
            shift_to_small_m,
            denom_inv,
        })
    }

    /// The coset shift.
    pub fn shift(&self) -> S {
        self.shift
    }
}

impl<S: Scalar> EvaluationDomain<S> for ExtendedRadix2Domain<S> {
    fn size(&self) -> usize {
        self.m
    }

    fn fft(&self, a: &mut [S]) -> Result<()> {
        check_len(self.m, a.len())?;
        let small_m = self.small_m;

        // reduce modulo x^small_m - 1 and x^small_m - shift^small_m, the
        // latter rescaled onto H
        let mut a0 = Vec::with_capacity(small_m);
        let mut a1 = Vec::with_capacity(small_m);
        let mut shift_i = S::one();
        for i in 0..small_m {
            let hi = a[small_m + i];
            a0.push(a[i].add(&hi));
            a1.push(shift_i.mul(&a[i].add(&self.shift_to_small_m.mul(&hi))));
            shift_i.mul_assign(&self.shift);
        }

        best_fft(&mut a0, &self.omega, self.log_small_m);
        best_fft(&mut a1, &self.omega, self.log_small_m);

        a[..small_m].copy_from_slice(&a0);
        a[small_m..].copy_from_slice(&a1);
        Ok(())
    }

    fn ifft(&self, a: &mut [S]) -> Result<()> {
        check_len(self.m, a.len())?;
        let small_m = self.small_m;

        let mut a0 = a[..small_m].to_vec();
        let mut a1 = a[small_m..].to_vec();
        best_fft(&mut a0, &self.omega_inv, self.log_small_m);
        best_fft(&mut a1, &self.omega_inv, self.log_small_m);

        // a0 = small_m * (lo + hi), a1[i] = small_m * shift^i * (lo + S * hi)
        let one_minus_s = S::one().sub(&self.shift_to_small_m);
        let sconst = S::from(small_m as u64)
            .mul(&one_minus_s)
            .inv()
            .map_err(|_| SnarkError::DivisionByZero)?;
        let neg_s = self.shift_to_small_m.neg();

        let mut shift_inv_i = S::one();
        for i in 0..small_m {
            let a1_i = shift_inv_i.mul(&a1[i]);
            a[i] = sconst.mul(&neg_s.mul(&a0[i]).add(&a1_i));
            a[small_m + i] = sconst.mul(&a0[i].sub(&a1_i));
            shift_inv_i.mul_assign(&self.shift_inv);
        }
        Ok(())
    }

    fn evaluate_all_lagrange_coefficients(&self, t: &S) -> Vec<S> {
        let t0 = self.small_domain.evaluate_all_lagrange_coefficients(t);
        let t1 = self
            .small_domain
            .evaluate_all_lagrange_coefficients(&t.mul(&self.shift_inv));

        let t_to_small_m = t.pow(&[self.small_m as u64]);
        let t0_coeff = t_to_small_m
            .sub(&self.shift_to_small_m)
            .mul(&self.denom_inv.neg());
        let t1_coeff = t_to_small_m.sub(&S::one()).mul(&self.denom_inv);

        t0.iter()
            .map(|x| x.mul(&t0_coeff))
            .chain(t1.iter().map(|x| x.mul(&t1_coeff)))
            .collect()
    }

    fn get_element(&self, idx: usize) -> S {
        if idx < self.small_m {
            self.omega.pow(&[idx as u64])
        } else {
            self.shift
                .mul(&self.omega.pow(&[(idx - self.small_m) as u64]))
        }
    }

    fn compute_vanishing_polynomial(&self, t: &S) -> S {
        let t_to_small_m = t.pow(&[self.small_m as u64]);
        t_to_small_m
            .sub(&S::one())
            .mul(&t_to_small_m.sub(&self.shift_to_small_m))
    }

    fn add_poly_z(&self, coeff: &S, h: &mut [S]) -> Result<()> {
        check_len(self.m + 1, h.len())?;
        // Z = x^m - (S + 1) x^small_m + S
        let s = self.shift_to_small_m;
        h[self.m].add_assign(coeff);
        h[self.small_m].sub_assign(&coeff.mul(&s.add(&S::one())));
        h[0].add_assign(&coeff.mul(&s));
        Ok(())
    }

    fn divide_by_z_on_coset(&self, p: &mut [S]) -> Result<()> {
        check_len(self.m, p.len())?;
        let coset = S::multiplicative_generator();
        let s = self.shift_to_small_m;
        let coset_to_small_m = coset.pow(&[self.small_m as u64]);
        let shifted = coset_to_small_m.mul(&s);

        let z0 = coset_to_small_m
            .sub(&S::one())
            .mul(&coset_to_small_m.sub(&s));
        let z1 = shifted.sub(&S::one()).mul(&shifted.sub(&s));
        let z0_inv = z0.inv().map_err(|_| SnarkError::DivisionByZero)?;
        let z1_inv = z1.inv().map_err(|_| SnarkError::DivisionByZero)?;

        let (lo, hi) = p.split_at_mut(self.small_m);
        scale(lo, &z0_inv);
        scale(hi, &z1_inv);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::ExtendedRadix2Domain;
    use crate::domain::EvaluationDomain;
    use crate::errors::SnarkError;
    use zsl_algebra::{bn254::BN254Scalar, prelude::*};

    type F = BN254Scalar;

    fn eval(coefs: &[F], x: &F) -> F {
        coefs.iter().rev().fold(F::zero(), |acc, c| acc.mul(x).add(c))
    }

    #[test]
    fn construction() {
        assert_eq!(
            ExtendedRadix2Domain::<F>::new(1),
            Err(SnarkError::InvalidDomainSize(1))
        );
        assert!(ExtendedRadix2Domain::<F>::new(2).is_ok());
        assert!(ExtendedRadix2Domain::<F>::new(1 << 29).is_ok());
        assert_eq!(
            ExtendedRadix2Domain::<F>::new(1 << 30),
            Err(SnarkError::DomainTooLarge(1 << 30))
        );
    }

    #[test]
    fn points_are_distinct() {
        let domain = ExtendedRadix2Domain::<F>::new(16).unwrap();
        let points: Vec<F> = (0..16).map(|i| domain.get_element(i)).collect();
        for i in 0..16 {
            for j in 0..i {
                assert_ne!(points[i], points[j]);
            }
            assert!(domain.compute_vanishing_polynomial(&points[i]).is_zero());
        }
        let g = F::multiplicative_generator();
        assert!(!domain.compute_vanishing_polynomial(&g).is_zero());
    }

    #[test]
    fn fft_round_trip() {
        let mut prng = test_rng();
        for log_m in 1..6 {
            let m = 1 << log_m;
            let domain = ExtendedRadix2Domain::<F>::new(m).unwrap();
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
    fn lagrange_coefficients() {
        let mut prng = test_rng();
        let domain = ExtendedRadix2Domain::<F>::new(8).unwrap();
        let coefs: Vec<F> = (0..8).map(|_| F::random(&mut prng)).collect();
        let mut evals = coefs.clone();
        domain.fft(&mut evals).unwrap();

        let t = F::random(&mut prng);
        let u = domain.evaluate_all_lagrange_coefficients(&t);
        assert_eq!(u.len(), 8);
        let interpolated: F = u.iter().zip(evals.iter()).map(|(l, e)| l.mul(e)).sum();
        assert_eq!(interpolated, eval(&coefs, &t));

        for k in [1, 6] {
            let u = domain.evaluate_all_lagrange_coefficients(&domain.get_element(k));
            for (i, l) in u.iter().enumerate() {
                assert_eq!(*l, if i == k { F::one() } else { F::zero() });
            }
        }
    }

    #[test]
    fn add_poly_z_and_division() {
        let mut prng = test_rng();
        let domain = ExtendedRadix2Domain::<F>::new(8).unwrap();

        let mut h: Vec<F> = (0..9).map(|_| F::random(&mut prng)).collect();
        let c = F::random(&mut prng);
        let t = F::random(&mut prng);
        let at_t = eval(&h, &t);
        domain.add_poly_z(&c, &mut h).unwrap();
        assert_eq!(
            eval(&h, &t),
            at_t.add(&c.mul(&domain.compute_vanishing_polynomial(&t)))
        );

        let g = F::multiplicative_generator();
        let p: Vec<F> = (0..8).map(|_| F::random(&mut prng)).collect();
        let mut q = p.clone();
        domain.divide_by_z_on_coset(&mut q).unwrap();
        for i in 0..8 {
            let z = domain.compute_vanishing_polynomial(&g.mul(&domain.get_element(i)));
            assert_eq!(q[i].mul(&z), p[i]);
        }
    }

    #[test]
    fn quotient_on_coset() {
        let mut prng = test_rng();
        let g = F::multiplicative_generator();
        for m in [8, 16] {
            let domain = ExtendedRadix2Domain::<F>::new(m).unwrap();

            // A * B - C vanishes on the domain
            let mut a: Vec<F> = (0..m).map(|_| F::random(&mut prng)).collect();
            let mut b: Vec<F> = (0..m).map(|_| F::random(&mut prng)).collect();
            let mut c: Vec<F> = a.iter().zip(b.iter()).map(|(x, y)| x.mul(y)).collect();
            domain.ifft(&mut a).unwrap();
            domain.ifft(&mut b).unwrap();
            domain.ifft(&mut c).unwrap();
            let (a_coefs, b_coefs, c_coefs) = (a.clone(), b.clone(), c.clone());

            domain.coset_fft(&mut a, &g).unwrap();
            domain.coset_fft(&mut b, &g).unwrap();
            domain.coset_fft(&mut c, &g).unwrap();
            let mut h: Vec<F> = a
                .iter()
                .zip(b.iter())
                .zip(c.iter())
                .map(|((x, y), z)| x.mul(y).sub(z))
                .collect();
            domain.divide_by_z_on_coset(&mut h).unwrap();
            domain.icoset_fft(&mut h, &g).unwrap();

            // H has degree at most m - 2
            assert!(h[m - 1].is_zero());

            let t = F::random(&mut prng);
            let lhs = eval(&h, &t).mul(&domain.compute_vanishing_polynomial(&t));
            let rhs = eval(&a_coefs, &t)
                .mul(&eval(&b_coefs, &t))
                .sub(&eval(&c_coefs, &t));
            assert_eq!(lhs, rhs);
        }
    }
}
