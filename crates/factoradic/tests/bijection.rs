//! Properties of the index → permutation mapping.

use std::collections::HashSet;

use chimes_factoradic::{MAX_BELLS, build, expand, factorial, nth_permutation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn is_permutation_of_identifiers(perm: &[u8], bells: usize) -> bool {
    let mut seen = vec![false; bells + 1];
    for &id in perm {
        let id = usize::from(id);
        if id > bells || seen[id] {
            return false;
        }
        seen[id] = true;
    }
    perm.len() == bells + 1
}

#[test]
fn digit_invariant_holds_for_every_bell_count() {
    let mut rng = StdRng::seed_from_u64(7);
    for bells in 1..=MAX_BELLS {
        for _ in 0..200 {
            let n: u64 = rng.random();
            let digits = expand(n, bells).unwrap();
            assert_eq!(digits.len(), bells);
            for (i, &d) in (1..).zip(&digits) {
                assert!(
                    usize::from(d) < i,
                    "digit {d} at position {i} for n={n}, bells={bells}"
                );
            }
        }
    }
}

#[test]
fn build_yields_valid_permutations() {
    let mut rng = StdRng::seed_from_u64(11);
    for bells in 1..=MAX_BELLS {
        for _ in 0..200 {
            let n: u64 = rng.random();
            let perm = nth_permutation(n, bells).unwrap();
            assert!(
                is_permutation_of_identifiers(&perm, bells),
                "not a permutation: {perm:?} (n={n}, bells={bells})"
            );
        }
    }
}

#[test]
fn exhaustively_injective_for_small_bell_counts() {
    for bells in 1..=7usize {
        let cycle = factorial(bells as u64).unwrap();
        let distinct: HashSet<Vec<u8>> = (0..cycle)
            .map(|n| nth_permutation(n, bells).unwrap())
            .collect();
        assert_eq!(distinct.len() as u64, cycle, "bells = {bells}");
    }
}

#[test]
fn sampled_injective_for_ten_bells() {
    let cycle = factorial(10).unwrap();
    let mut rng = StdRng::seed_from_u64(2000);
    let mut indices: HashSet<u64> = HashSet::new();
    while indices.len() < 50_000 {
        indices.insert(rng.random_range(0..cycle));
    }
    let distinct: HashSet<Vec<u8>> = indices
        .iter()
        .map(|&n| nth_permutation(n, 10).unwrap())
        .collect();
    assert_eq!(distinct.len(), indices.len());
}

#[test]
fn cycle_repeats_after_bells_factorial() {
    let cycle = factorial(10).unwrap();
    for n in [0, 1, 365, 8971] {
        assert_eq!(
            nth_permutation(n, 10).unwrap(),
            nth_permutation(n + cycle, 10).unwrap()
        );
    }
}

#[test]
fn every_valid_digit_sequence_builds() {
    // All 4! digit sequences for four bells, enumerated directly.
    let mut count = 0;
    for d2 in 0..2u8 {
        for d3 in 0..3u8 {
            for d4 in 0..4u8 {
                let perm = build(&[0, d2, d3, d4], 4).unwrap();
                assert!(is_permutation_of_identifiers(&perm, 4));
                count += 1;
            }
        }
    }
    assert_eq!(count, 24);
}
