use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use seqcut_core::{
    count::{cumulative_cut_count, subrange_count},
    enumerate_cuts, enumerate_cuts_upto, enumerate_subrange_recuts, enumerate_tilings,
};

#[inline]
fn seq_of(n: usize) -> Vec<u64> {
    (0..n as u64).collect()
}

/// Drain an iterator, touching every item so nothing is optimized away.
#[inline]
fn drain<I: Iterator>(it: I) -> usize {
    it.map(black_box).count()
}

fn bench_cuts(c: &mut Criterion) {
    let mut group = c.benchmark_group("cuts_upto");
    for &(n, max_cuts) in &[(20usize, 2usize), (50, 3), (100, 3), (200, 2)] {
        let seq = seq_of(n);
        if let Some(total) = cumulative_cut_count(n, max_cuts).and_then(|t| u64::try_from(t).ok()) {
            group.throughput(Throughput::Elements(total));
        }
        group.bench_with_input(
            BenchmarkId::new("enumerate_cuts_upto", format!("n{n}_k{max_cuts}")),
            &seq,
            |b, s| b.iter(|| drain(enumerate_cuts_upto(black_box(s), max_cuts))),
        );
        group.bench_with_input(
            BenchmarkId::new("enumerate_cuts", format!("n{n}_k{max_cuts}")),
            &seq,
            |b, s| b.iter(|| drain(enumerate_cuts(black_box(s), max_cuts))),
        );
    }
    group.finish();
}

fn bench_subranges(c: &mut Criterion) {
    let mut group = c.benchmark_group("subrange_recuts");
    for &n in &[10usize, 100, 300] {
        let seq = seq_of(n);
        if let Some(total) = subrange_count(n).and_then(|t| u64::try_from(t).ok()) {
            group.throughput(Throughput::Elements(total));
        }
        group.bench_with_input(BenchmarkId::from_parameter(n), &seq, |b, s| {
            b.iter(|| drain(enumerate_subrange_recuts(black_box(s))));
        });
    }
    group.finish();
}

fn bench_tilings(c: &mut Criterion) {
    let mut group = c.benchmark_group("tilings");
    for &n in &[100usize, 1_000, 10_000] {
        let seq = seq_of(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &seq, |b, s| {
            b.iter(|| drain(enumerate_tilings(black_box(s))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cuts, bench_subranges, bench_tilings);
criterion_main!(benches);
