//! Benchmarks for section aggregation and stress analysis

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use section_solver::prelude::*;

/// Stack of horizontal plates approximating a tall welded box wall.
fn create_plate_stack(count: usize) -> Vec<Shape> {
    (0..count)
        .map(|i| Shape::from(Plate::new(400.0, 10.0, 0.0, 10.0 * i as f64)))
        .collect()
}

/// Plate stack with a concrete slab on top, for the homogenized path.
fn create_composite_stack(count: usize) -> Vec<Shape> {
    let mut shapes = create_plate_stack(count);
    let top = 10.0 * count as f64;
    shapes.push(Shape::from(Trapezoid::new(
        1500.0,
        1200.0,
        250.0,
        0.0,
        top - 5.0,
    )));
    shapes
}

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    for &count in &[10, 100, 500] {
        let shapes = create_plate_stack(count);
        group.bench_function(format!("plain_{count}"), |b| {
            b.iter(|| aggregate(black_box(&shapes), false, None).unwrap())
        });
    }

    let composite = create_composite_stack(100);
    let n = modular_ratio(25.0, DEFAULT_E_STEEL);
    group.bench_function("homogenized_101", |b| {
        b.iter(|| aggregate(black_box(&composite), true, Some(n)).unwrap())
    });

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let shapes = create_composite_stack(100);
    let n = modular_ratio(25.0, DEFAULT_E_STEEL);
    let props = aggregate(&shapes, true, Some(n)).unwrap();

    c.bench_function("stress_analysis_101", |b| {
        b.iter(|| analyze_stress(black_box(&shapes), &props, -1.0e6, 500.0e6).unwrap())
    });

    let stress = analyze_stress(&shapes, &props, -1.0e6, 500.0e6).unwrap();
    c.bench_function("classification_101", |b| {
        b.iter(|| classify(black_box(&shapes), stress.neutral_axis, 355.0))
    });
}

criterion_group!(benches, bench_aggregation, bench_pipeline);
criterion_main!(benches);
