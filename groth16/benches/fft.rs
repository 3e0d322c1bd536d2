use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use zsl_algebra::{bn254::BN254Scalar, prelude::*};
use zsl_groth16::domain::{get_evaluation_domain, EvaluationDomain, ExtendedRadix2Domain};

fn bench_radix2(c: &mut Criterion) {
    let mut prng = test_rng();
    let mut group = c.benchmark_group("radix-2 domain");
    group.sample_size(10);

    for log_n in [12, 14, 16] {
        let n = 1usize << log_n;
        let domain = get_evaluation_domain::<BN254Scalar>(n).unwrap();
        let coefs: Vec<BN254Scalar> = (0..n).map(|_| BN254Scalar::random(&mut prng)).collect();
        let g = BN254Scalar::multiplicative_generator();

        group.bench_with_input(BenchmarkId::new("fft", n), &coefs, |b, coefs| {
            b.iter(|| {
                let mut v = coefs.clone();
                domain.fft(&mut v).unwrap();
                v
            })
        });
        group.bench_with_input(BenchmarkId::new("coset round trip", n), &coefs, |b, coefs| {
            b.iter(|| {
                let mut v = coefs.clone();
                domain.coset_fft(&mut v, &g).unwrap();
                domain.icoset_fft(&mut v, &g).unwrap();
                v
            })
        });
    }
    group.finish();
}

fn bench_extended_radix2(c: &mut Criterion) {
    let mut prng = test_rng();
    let mut group = c.benchmark_group("extended radix-2 domain");
    group.sample_size(10);

    let n = 1usize << 14;
    let domain = ExtendedRadix2Domain::<BN254Scalar>::new(n).unwrap();
    let coefs: Vec<BN254Scalar> = (0..n).map(|_| BN254Scalar::random(&mut prng)).collect();

    group.bench_function("fft round trip, 16384 points", |b| {
        b.iter(|| {
            let mut v = coefs.clone();
            domain.fft(&mut v).unwrap();
            domain.ifft(&mut v).unwrap();
            v
        })
    });
    group.finish();
}

criterion_group!(benches, bench_radix2, bench_extended_radix2);
criterion_main!(benches);
