use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lnds::partition_unsorted;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition_unsorted");
    let mut rng = StdRng::seed_from_u64(12345);

    for &size in &[1_000, 10_000, 100_000] {
        let sorted: Vec<u64> = (0..size).collect();
        let reversed: Vec<u64> = (0..size).rev().collect();
        let random: Vec<u64> = (0..size).map(|_| rng.gen()).collect();
        let few_distinct: Vec<u64> = (0..size).map(|_| rng.gen_range(0..8)).collect();
        let nearly_sorted: Vec<u64> = (0..size)
            .map(|i| if i % 100 == 0 { rng.gen_range(0..size) } else { i })
            .collect();

        for (name, input) in [
            ("sorted", &sorted),
            ("reversed", &reversed),
            ("random", &random),
            ("few_distinct", &few_distinct),
            ("nearly_sorted", &nearly_sorted),
        ] {
            group.bench_with_input(BenchmarkId::new(name, size), input, |b, input| {
                b.iter(|| partition_unsorted(black_box(input)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_partition);
criterion_main!(benches);
