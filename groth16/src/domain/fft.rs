use zsl_algebra::prelude::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[inline]
fn bitreverse(mut n: usize, l: u32) -> usize {
    let mut r = 0;
    for _ in 0..l {
        r = (r << 1) | (n & 1);
        n >>= 1;
    }
    r
}

/// In-place radix-2 FFT of `a` (of length `2^log_n`) at the powers of `omega`,
/// a primitive `2^log_n`-th root of unity. No scaling is applied.
pub(crate) fn best_fft<S: Scalar>(a: &mut [S], omega: &S, log_n: u32) {
    #[cfg(feature = "parallel")]
    {
        let log_cpus = log2_floor(rayon::current_num_threads());
        if log_n > log_cpus {
            parallel_fft(a, omega, log_n, log_cpus);
            return;
        }
    }
    serial_fft(a, omega, log_n);
}

pub(crate) fn serial_fft<S: Scalar>(a: &mut [S], omega: &S, log_n: u32) {
    let n = a.len();
    debug_assert_eq!(n, 1 << log_n);

    for k in 0..n {
        let rk = bitreverse(k, log_n);
        if k < rk {
            a.swap(rk, k);
        }
    }

    let mut m = 1;
    for _ in 0..log_n {
        let w_m = omega.pow(&[(n / (2 * m)) as u64]);

        let mut k = 0;
        while k < n {
            let mut w = S::one();
            for j in 0..m {
                let t = a[k + j + m].mul(&w);
                a[k + j + m] = a[k + j].sub(&t);
                a[k + j].add_assign(&t);
                w.mul_assign(&w_m);
            }
            k += 2 * m;
        }

        m *= 2;
    }
}

/// Split the transform into `2^log_cpus` interleaved sub-transforms, run them
/// on the rayon pool and gather the outputs.
#[cfg(feature = "parallel")]
fn parallel_fft<S: Scalar>(a: &mut [S], omega: &S, log_n: u32, log_cpus: u32) {
    debug_assert!(log_n >= log_cpus);

    let num_cpus = 1 << log_cpus;
    let log_new_n = log_n - log_cpus;
    let new_n = 1 << log_new_n;
    let mut tmp = vec![vec![S::zero(); new_n]; num_cpus];
    let new_omega = omega.pow(&[num_cpus as u64]);

    let src: &[S] = a;
    tmp.par_iter_mut().enumerate().for_each(|(j, tmp)| {
        let omega_j = omega.pow(&[j as u64]);
        let omega_step = omega.pow(&[(j as u64) << log_new_n]);

        let mut elt = S::one();
        for (i, t_i) in tmp.iter_mut().enumerate() {
            for s in 0..num_cpus {
                let idx = (i + (s << log_new_n)) % (1 << log_n);
                t_i.add_assign(&src[idx].mul(&elt));
                elt.mul_assign(&omega_step);
            }
            elt.mul_assign(&omega_j);
        }

        serial_fft(tmp, &new_omega, log_new_n);
    });

    let mask = num_cpus - 1;
    a.par_iter_mut()
        .enumerate()
        .for_each(|(idx, a)| *a = tmp[idx & mask][idx >> log_cpus]);
}
