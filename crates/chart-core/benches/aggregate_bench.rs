use scrollchart_core::{chunk_values, Reduction};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};

fn gen_values(n: usize) -> Vec<f64> {
    let mut v = Vec::with_capacity(n);
    let mut price = 100.0f64;
    for i in 0..n {
        price += if i % 3 == 0 { -0.4 } else { 0.3 };
        v.push(price);
    }
    v
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_values");
    for &n in &[50_000usize, 100_000usize] {
        let data = gen_values(n);
        for &bucket in &[5usize, 10usize, 20usize] {
            for reduction in [Reduction::Mean, Reduction::Rms] {
                group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_b{bucket}_{reduction:?}")), &bucket, |b, &bk| {
                    b.iter_batched(
                        || data.clone(),
                        |d| { let _ = black_box(chunk_values(&d, bk, &reduction)); },
                        BatchSize::SmallInput,
                    );
                });
            }
        }
    }
    group.finish();
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
