// benches/traversal_bench.rs
//! Benchmarks for traversal and program interpretation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use docgrid::{
    layout_direct, layout_program, par_traverse, run, traverse, Arrangement, Document, Fallible,
    Identity, PureBuilder, PureInterpreter,
};

/// Create a balanced tree alternating horizontal and vertical levels
fn create_sample_document(depth: usize, breadth: usize) -> Document<u64> {
    fn build(level: usize, max_depth: usize, breadth: usize, next: &mut u64) -> Document<u64> {
        if level == max_depth {
            *next += 1;
            return Document::Leaf(*next);
        }
        let children = (0..breadth)
            .map(|_| build(level + 1, max_depth, breadth, next))
            .collect();
        if level % 2 == 0 {
            Document::Horizontal(children)
        } else {
            Document::Vertical(children)
        }
    }

    let mut next = 0;
    build(0, depth, breadth, &mut next)
}

fn checked_square(value: u64) -> Result<u64, String> {
    value
        .checked_mul(value)
        .ok_or_else(|| format!("{} overflows", value))
}

fn bench_traverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("traverse");

    for depth in [4, 6, 8] {
        let doc = create_sample_document(depth, 4);

        group.bench_with_input(BenchmarkId::new("identity", depth), &doc, |b, doc| {
            b.iter(|| traverse::<Identity, _, _, _>(black_box(doc.clone()), |v| v + 1))
        });

        group.bench_with_input(BenchmarkId::new("fallible", depth), &doc, |b, doc| {
            b.iter(|| traverse::<Fallible<String>, _, _, _>(black_box(doc.clone()), checked_square))
        });

        group.bench_with_input(BenchmarkId::new("parallel", depth), &doc, |b, doc| {
            b.iter(|| {
                par_traverse::<Fallible<String>, _, _, _>(black_box(doc.clone()), checked_square)
            })
        });
    }

    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");

    for size in [16usize, 128, 1024, 16384] {
        let tail: Vec<usize> = (1..size).collect();

        group.bench_with_input(BenchmarkId::new("staged", size), &tail, |b, tail| {
            b.iter(|| run(layout_program(0, black_box(tail.clone())), &PureInterpreter))
        });

        group.bench_with_input(BenchmarkId::new("direct", size), &tail, |b, tail| {
            b.iter(|| layout_direct(&PureBuilder, 0, black_box(tail.clone())))
        });

        group.bench_with_input(BenchmarkId::new("arrange_grid", size), &size, |b, &size| {
            b.iter(|| Document::arrange(0..black_box(size), Arrangement::Grid { columns: 8 }))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_traverse, bench_layout);
criterion_main!(benches);
