// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use rand::{SeedableRng, rngs::StdRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashMap;
use seqkit::{error::RangeError, prelude::*};
use std::{
    collections::{BTreeMap, HashMap, VecDeque},
    rc::Rc,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Pearson's chi-square statistic of `counts` against a uniform expectation.
fn chi_square(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum()
}

#[test]
fn test_in_range_scenarios() {
    let data = [10, 20, 30];
    assert!(data.in_range(2));
    assert!(!data.in_range(3));
    assert!(!data.in_range(-1));

    let absent: Option<Vec<i32>> = None;
    assert!(!absent.in_range(0));

    let dq: VecDeque<u8> = VecDeque::from(vec![1]);
    assert!(dq.in_range(0u16));
    assert!(!dq.in_range(1i32));
}

#[test]
fn test_get_or_default_scenarios() {
    let map: HashMap<&str, i32> = [("a", 1)].into_iter().collect();
    assert_eq!(map.get_or_default("a"), 1);
    assert_eq!(map.get_or_default("b"), 0);

    let mut fx: FxHashMap<String, Vec<u32>> = FxHashMap::default();
    fx.insert("xs".to_string(), vec![1, 2, 3]);
    assert_eq!(fx.get_or_default("xs").len(), 3);
    assert!(fx.get_or_default("ys").is_empty());

    let absent: Option<BTreeMap<u32, u32>> = None;
    assert_eq!(absent.get_or_default(&1), 0);
}

#[test]
fn test_prune_nulls_scenarios() {
    init_tracing();

    let mut items = vec![Some(1), None, Some(2), None, Some(3)];
    assert_eq!(items.prune_nulls(), 2);
    assert_eq!(items, vec![Some(1), Some(2), Some(3)]);
    assert_eq!(items.prune_nulls(), 0);

    let a = Rc::new(1);
    let b = Rc::new(2);
    let mut registry = vec![Rc::downgrade(&a), Rc::downgrade(&b)];
    drop(a);
    assert_eq!(registry.prune_nulls(), 1);
    assert_eq!(registry[0].upgrade().map(|v| *v), Some(2));
}

#[test]
fn test_true_for_all_scenarios() {
    let empty: Vec<i32> = Vec::new();
    assert!(empty.true_for_all(|_| false));
    assert!([2, 4, 6].true_for_all(|x| x % 2 == 0));
    assert!(![2, 3].true_for_all(|x| x % 2 == 0));
}

#[test]
fn test_not_found_and_insertion_sentinels() {
    let data = [1, 3, 5];
    assert_eq!(data.index_of(&4).to_signed_index::<i32>(), Some(-1));
    assert_eq!(data.index_of(&5).to_signed_index::<i32>(), Some(2));
    assert_eq!(data.binary_search_value(&4).to_signed_index::<i64>(), Some(!2));
    assert_eq!(data.binary_search_value(&0).to_signed_index::<i64>(), Some(-1));
}

#[test]
fn test_range_errors_are_reported() {
    let mut data = [1, 2, 3];
    let err = data.clear_range(2, 2).unwrap_err();
    assert_eq!(
        err,
        SequenceError::OutOfRange(RangeError {
            start: 2,
            count: 2,
            len: 3
        })
    );
    assert_eq!(data, [1, 2, 3]);

    let mut dst = [0; 2];
    assert!(matches!(
        data.copy_range_to(0, &mut dst, 1, 2),
        Err(SequenceError::DestinationOutOfRange(_))
    ));
    assert_eq!(dst, [0, 0]);
}

#[test]
fn test_sorting_with_comparers() {
    let mut words = vec!["pear", "fig", "banana", "kiwi"];
    words.sort_with(&|a: &&str, b: &&str| a.len().cmp(&b.len()).then(a.cmp(b)));
    assert_eq!(words, ["fig", "kiwi", "pear", "banana"]);

    words.sort_with(&Reversed(NaturalOrder));
    assert_eq!(words, ["pear", "kiwi", "fig", "banana"]);
    assert_eq!(
        words.binary_search_with(&"fig", &Reversed(NaturalOrder)),
        Ok(2)
    );
}

#[test]
fn test_pick_random_is_uniform() {
    const BUCKETS: usize = 6;
    const DRAWS: u64 = 60_000;

    let faces: Vec<usize> = (0..BUCKETS).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);
    let mut counts = [0u64; BUCKETS];
    for _ in 0..DRAWS {
        let face = *faces.pick_random(&mut rng).unwrap();
        counts[face] += 1;
    }

    // 5 degrees of freedom; 30.0 is far beyond the 0.001 critical value.
    let stat = chi_square(&counts);
    assert!(stat < 30.0, "chi-square {stat} for counts {counts:?}");
}

#[test]
fn test_pick_random_covers_every_element() {
    let data = ['a', 'b', 'c', 'd'];
    let mut rng = StdRng::seed_from_u64(99);
    let mut seen = [false; 4];
    for _ in 0..1_000 {
        let picked = data.pick_random(&mut rng).unwrap();
        seen[data.index_of(picked).unwrap()] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn test_pick_random_through_engine_adapter() {
    let mut draws = 0;
    let mut engine = EngineRandom::new(|min, max| {
        draws += 1;
        (min + max) / 2
    });
    let data = vec![10, 20, 30, 40];
    assert_eq!(data.pick_random(&mut engine), Some(&30));
    assert_eq!(data.as_read_only().pick_random(&mut engine), Some(&30));
    drop(engine);
    assert_eq!(draws, 2);
}

#[cfg(feature = "shared-rng")]
#[test]
fn test_shared_source_from_many_threads() {
    let data: Vec<u32> = (0..16).collect();
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..250 {
                    let picked = data.pick_random_shared().unwrap();
                    assert!(*picked < 16);
                }
            });
        }
    });
    assert_eq!(Vec::<u32>::new().pick_random_shared_or_default(), 0);
}
