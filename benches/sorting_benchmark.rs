use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::Rng;
use ranksort::prelude::*;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hint::black_box;

const ALPHABET: &str = "qazwsxedcrfvtgbyhnujmikolp0192837465";

fn naive_cmp(ranks: &HashMap<char, usize>, a: &str, b: &str) -> Ordering {
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            return ranks[&ca].cmp(&ranks[&cb]);
        }
    }
    a.len().cmp(&b.len())
}

fn random_codes(count: usize, prefix: &str) -> Vec<String> {
    let mut rng = rand::rng();
    let symbols: Vec<char> = ALPHABET.chars().collect();
    (0..count)
        .map(|_| {
            let len = rng.random_range(4..16);
            let tail: String = (0..len)
                .map(|_| symbols[rng.random_range(0..symbols.len())])
                .collect();
            format!("{prefix}{tail}")
        })
        .collect()
}

fn bench_random_codes(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random Codes");
    group.sample_size(10);

    let codes = random_codes(10_000, "");
    let ranks: HashMap<char, usize> = ALPHABET.chars().enumerate().map(|(i, c)| (c, i)).collect();

    group.bench_function("rank_sort_mut", |b| {
        b.iter_batched(
            || codes.clone(),
            |mut data| rank_sort_mut(black_box(&mut data), ALPHABET).unwrap(),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("sort_by (naive rank map)", |b| {
        b.iter_batched(
            || codes.clone(),
            |mut data| data.sort_by(|a, b| naive_cmp(&ranks, a, b)),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_long_prefix(c: &mut Criterion) {
    let mut group = c.benchmark_group("Long Common Prefix");
    group.sample_size(10);

    let codes = random_codes(10_000, "warehouse9zone3shelf1bin");
    let ranks: HashMap<char, usize> = ALPHABET.chars().enumerate().map(|(i, c)| (c, i)).collect();

    group.bench_function("rank_sort_mut", |b| {
        b.iter_batched(
            || codes.clone(),
            |mut data| rank_sort_mut(black_box(&mut data), ALPHABET).unwrap(),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("sort_by (naive rank map)", |b| {
        b.iter_batched(
            || codes.clone(),
            |mut data| data.sort_by(|a, b| naive_cmp(&ranks, a, b)),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_random_codes, bench_long_prefix);
criterion_main!(benches);
