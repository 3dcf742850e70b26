use scrollchart_core::pipeline::{RegressionConfig, SimplifyConfig};
use scrollchart_core::{Interpolation, Pipeline, PipelineConfig, Result, Series, Size, SimplifyStrategy};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_series(n: usize) -> Series {
    let data = (0..n).map(|i| (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001)).collect();
    Series::new(data)
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_run");
    for &n in &[10_000usize, 50_000usize] {
        group.bench_function(format!("xy_{n}"), |b| {
            let series = build_series(n);
            let pipeline = Pipeline::new(PipelineConfig {
                size: Size::new(800.0, 500.0),
                regression: Some(RegressionConfig { extra_points: 20 }),
                simplify: Some(SimplifyConfig { strategy: SimplifyStrategy::VisvalingamWhyatt, tolerance: 1.0 }),
                interpolation: Interpolation::CatmullRom { alpha: 0.5 },
                ..PipelineConfig::default()
            });
            b.iter(|| -> Result<()> {
                let polyline = pipeline.run(&series)?;
                black_box(polyline);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
