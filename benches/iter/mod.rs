use std::hint::black_box;

use avlset::AvlTree;
use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};

use crate::Lfsr;

#[derive(Debug)]
struct BenchName {
    bench_name: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench_name), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("iter");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    // Generate the tree.
    let mut rand = Lfsr::default();
    let mut t = AvlTree::default();

    for _i in 0..n_values {
        t.insert(rand.next());
    }

    bench_in_order(n_values, g, &t);
    bench_breadth_first(n_values, g, &t);
}

fn bench_in_order<M>(n_values: usize, g: &mut BenchmarkGroup<'_, M>, t: &AvlTree<u16>)
where
    M: Measurement,
{
    let bench_name = BenchName {
        n_values,
        bench_name: "in_order",
    };

    g.throughput(Throughput::Elements(n_values as _));
    // Values per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| {
            for v in t.iter() {
                black_box(v);
            }
        })
    });
}

fn bench_breadth_first<M>(n_values: usize, g: &mut BenchmarkGroup<'_, M>, t: &AvlTree<u16>)
where
    M: Measurement,
{
    let bench_name = BenchName {
        n_values,
        bench_name: "breadth_first",
    };

    g.throughput(Throughput::Elements(n_values as _));
    // Values per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| {
            for v in t.iter_breadth_first() {
                black_box(v);
            }
        })
    });
}
