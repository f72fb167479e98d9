//! Benchmarks for the critter pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use critter::{generate, RenderOptions, Seed, SvgRenderer};

// -- Generation benchmarks --

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");

    group.bench_function("generate_single", |b| {
        b.iter(|| generate(black_box(Seed::new(42))))
    });

    group.bench_function("generate_batch_100", |b| {
        b.iter(|| {
            for seed in 0..100u64 {
                generate(black_box(Seed::new(seed)));
            }
        })
    });

    group.finish();
}

// -- Rendering benchmarks --

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    let tree = generate(Seed::new(42));

    group.bench_function("render_static", |b| {
        b.iter(|| SvgRenderer::new(RenderOptions::default()).render(black_box(&tree)))
    });

    group.bench_function("render_animated", |b| {
        b.iter(|| {
            SvgRenderer::new(RenderOptions {
                animate: true,
                ..RenderOptions::default()
            })
            .render(black_box(&tree))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_generation, bench_rendering);
criterion_main!(benches);
