use rand::Rng;
use ranksort::prelude::*;
use std::cmp::Ordering;
use std::time::Instant;

#[test]
fn test_sort_200k() {
    let count = 200_000;
    let alphabet = "mnbvcxzlkjhgfdsapoiuytrewq";
    let symbols: Vec<char> = alphabet.chars().collect();

    println!("Generating {} random codes...", count);
    let mut rng = rand::rng();
    let codes: Vec<String> = (0..count)
        .map(|_| {
            let len = rng.random_range(2..12);
            (0..len)
                .map(|_| symbols[rng.random_range(0..symbols.len())])
                .collect()
        })
        .collect();

    println!("Sorting {} codes...", count);
    let start = Instant::now();
    let indices = rank_sort(&codes, alphabet).unwrap();
    let duration = start.elapsed();
    println!("Sorted {} codes in {:?}", count, duration);

    assert_eq!(indices.len(), count);

    // Adjacent-pair verification against the public comparator.
    let table = RankTable::new(alphabet);
    for i in 0..count - 1 {
        let a = &codes[indices[i]];
        let b = &codes[indices[i + 1]];
        assert_ne!(
            compare_codes(&table, a, b),
            Ordering::Greater,
            "sort failed at index {}: {:?} > {:?}",
            i,
            a,
            b
        );
    }

    // The result must be a permutation: every index exactly once.
    let mut seen = vec![false; count];
    for &index in &indices {
        assert!(!seen[index], "index {} appears twice", index);
        seen[index] = true;
    }
}
