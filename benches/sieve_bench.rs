use criterion::{black_box, criterion_group, criterion_main, Criterion};
use segsieve::{count_primes, gap_table, nth_prime, segmented_sieve, simple_sieve};

fn bench_simple_sieve_1m(c: &mut Criterion) {
    c.bench_function("simple_sieve(1_000_000)", |b| {
        b.iter(|| simple_sieve(black_box(1_000_000u32)));
    });
}

fn bench_segmented_sieve_1m(c: &mut Criterion) {
    c.bench_function("segmented_sieve(1_000_000)", |b| {
        b.iter(|| segmented_sieve(black_box(1_000_000u32)));
    });
}

fn bench_count_primes_10m(c: &mut Criterion) {
    c.bench_function("count_primes(10_000_000)", |b| {
        b.iter(|| count_primes(black_box(10_000_000u32)));
    });
}

fn bench_nth_prime_100k(c: &mut Criterion) {
    c.bench_function("nth_prime(100_000)", |b| {
        b.iter(|| nth_prime::<u32>(black_box(100_000)));
    });
}

fn bench_gap_table_u16(c: &mut Criterion) {
    c.bench_function("gap_table::<u16>()", |b| {
        b.iter(|| gap_table::<u16>().count());
    });
}

criterion_group!(
    benches,
    bench_simple_sieve_1m,
    bench_segmented_sieve_1m,
    bench_count_primes_10m,
    bench_nth_prime_100k,
    bench_gap_table_u16,
);
criterion_main!(benches);
