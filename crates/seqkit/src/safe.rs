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

//! # Total Convenience Operations
//!
//! Operations that never fail, whatever the input: an absent collection, an
//! empty one, a negative index or an index wider than `usize` all produce a
//! neutral answer (`false`, `None`, `Default::default()`) instead of an
//! error or a panic.
//!
//! - `SafeCollectionExt` (every `Collection`): `in_range`,
//!   `is_absent_or_empty`, `len_or_zero`.
//! - `SafeSequenceExt` (every `Sequence`): `pick_random` and friends, drawing
//!   positions from an injected `RandomSource`.
//!
//! ## Usage
//!
//! ```rust
//! use rand::{SeedableRng, rngs::StdRng};
//! use seqkit::prelude::*;
//!
//! let data = [10, 20, 30];
//! assert!(data.in_range(2));
//! assert!(!data.in_range(3));
//! assert!(!data.in_range(-1));
//! assert!(!None::<&[i32]>.in_range(0));
//!
//! let mut rng = StdRng::seed_from_u64(5);
//! let picked = data.pick_random(&mut rng).unwrap();
//! assert!(data.contains(picked));
//! assert_eq!(Vec::<i32>::new().pick_random_or_default(&mut rng), 0);
//! ```

use num_traits::PrimInt;
use seqkit_core::{
    num::index::to_index,
    seq::{Collection, Sequence},
};
use seqkit_rand::RandomSource;

#[cfg(feature = "shared-rng")]
use seqkit_rand::SharedRandom;

/// Absent-tolerant queries over any `Collection`.
pub trait SafeCollectionExt: Collection {
    /// Returns `true` if the collection is present and `0 <= index < len`.
    ///
    /// `index` may be any primitive integer. Negative indices, indices that
    /// do not fit into `usize`, and absent collections all yield `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seqkit::prelude::*;
    /// # use std::collections::HashSet;
    /// let set: HashSet<u8> = [1, 2].into_iter().collect();
    /// assert!(set.in_range(1u64));
    /// assert!(!set.in_range(2i8));
    /// ```
    ///
    /// Fractional indices are rejected at compile time:
    ///
    /// ```compile_fail
    /// # use seqkit::prelude::*;
    /// let _ = [10, 20, 30].in_range(-0.5f64);
    /// ```
    #[inline]
    fn in_range<I>(&self, index: I) -> bool
    where
        I: PrimInt,
    {
        match (self.present_len(), to_index(index)) {
            (Some(len), Some(index)) => index < len,
            _ => false,
        }
    }

    /// Returns `true` if the collection is absent or holds no elements.
    #[inline]
    fn is_absent_or_empty(&self) -> bool {
        self.present_len().is_none_or(|len| len == 0)
    }

    /// Returns the number of elements, treating an absent collection as empty.
    #[inline]
    fn len_or_zero(&self) -> usize {
        self.present_len().unwrap_or(0)
    }
}

impl<C> SafeCollectionExt for C where C: Collection + ?Sized {}

/// Random element selection over any `Sequence`.
pub trait SafeSequenceExt: Sequence {
    /// Returns an element chosen uniformly at random using `source`.
    ///
    /// Returns `None` if the sequence is absent or empty; `source` is not
    /// consulted in that case.
    #[inline]
    fn pick_random<R>(&self, source: &mut R) -> Option<&Self::Item>
    where
        R: RandomSource + ?Sized,
    {
        let len = self.present_len().filter(|&len| len > 0)?;
        self.element(source.next_index(len))
    }

    /// Returns a clone of an element chosen uniformly at random using
    /// `source`, or `Self::Item::default()` if the sequence is absent or empty.
    #[inline]
    fn pick_random_or_default<R>(&self, source: &mut R) -> Self::Item
    where
        R: RandomSource + ?Sized,
        Self::Item: Clone + Default,
    {
        self.pick_random(source).cloned().unwrap_or_default()
    }

    /// Returns an element chosen uniformly at random from the process-wide
    /// source, or `None` if the sequence is absent or empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seqkit::prelude::*;
    /// let colors = vec!["red", "green", "blue"];
    /// let picked = colors.pick_random_shared().unwrap();
    /// assert!(colors.contains(picked));
    /// ```
    #[cfg(feature = "shared-rng")]
    #[inline]
    fn pick_random_shared(&self) -> Option<&Self::Item> {
        self.pick_random(&mut SharedRandom)
    }

    /// Like `pick_random_shared`, but returns `Self::Item::default()` if the
    /// sequence is absent or empty.
    #[cfg(feature = "shared-rng")]
    #[inline]
    fn pick_random_shared_or_default(&self) -> Self::Item
    where
        Self::Item: Clone + Default,
    {
        self.pick_random_or_default(&mut SharedRandom)
    }
}

impl<S> SafeSequenceExt for S where S: Sequence + ?Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use rand_chacha::ChaCha8Rng;
    use seqkit_rand::EngineRandom;
    use std::collections::{BTreeMap, VecDeque};

    #[test]
    fn test_in_range_bounds() {
        let data = [10, 20, 30];
        assert!(data.in_range(0));
        assert!(data.in_range(2));
        assert!(!data.in_range(3));
        assert!(!data.in_range(-1));
        assert!(!data.in_range(i64::MIN));
        assert!(!data.in_range(u128::MAX));
    }

    #[test]
    fn test_in_range_negative_of_every_signed_width_is_false() {
        let data = [10, 20, 30];
        assert!(!data.in_range(-1i8));
        assert!(!data.in_range(-1i16));
        assert!(!data.in_range(-1i32));
        assert!(!data.in_range(-1i64));
        assert!(!data.in_range(-1i128));
        assert!(!data.in_range(-1isize));
        assert!(data.in_range(0i8));
        assert!(data.in_range(2u128));
        assert!(!data.in_range(3usize));
    }

    #[test]
    fn test_in_range_absent_is_false() {
        let absent: Option<Vec<i32>> = None;
        assert!(!absent.in_range(0));
        assert!(!None::<&[u8]>.in_range(0usize));
    }

    #[test]
    fn test_in_range_counted_collections() {
        let mut map = BTreeMap::new();
        map.insert("k", 1);
        assert!(map.in_range(0));
        assert!(!map.in_range(1));
    }

    #[test]
    fn test_is_absent_or_empty() {
        let empty: Vec<u8> = Vec::new();
        let absent: Option<&Vec<u8>> = None;
        let present = Some(vec![1]);

        assert!(empty.is_absent_or_empty());
        assert!(absent.is_absent_or_empty());
        assert!(!present.is_absent_or_empty());
        assert!(![1, 2].is_absent_or_empty());
    }

    #[test]
    fn test_len_or_zero() {
        let absent: Option<[u8; 2]> = None;
        assert_eq!(absent.len_or_zero(), 0);
        assert_eq!(Some([1u8, 2]).len_or_zero(), 2);
    }

    #[test]
    fn test_pick_random_returns_member() {
        let data = vec![3, 1, 4, 1, 5, 9];
        let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
        for _ in 0..200 {
            let picked = data.pick_random(&mut rng).unwrap();
            assert!(data.contains(picked));
        }
    }

    #[test]
    fn test_pick_random_empty_or_absent() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let empty: [u8; 0] = [];
        let absent: Option<Vec<String>> = None;

        assert_eq!(empty.pick_random(&mut rng), None);
        assert_eq!(absent.pick_random(&mut rng), None);
        assert_eq!(absent.pick_random_or_default(&mut rng), String::new());
    }

    #[test]
    fn test_pick_random_skips_source_when_empty() {
        let mut calls = 0;
        let mut engine = EngineRandom::new(|min, _max| {
            calls += 1;
            min
        });
        let empty: Vec<i32> = Vec::new();

        assert_eq!(empty.pick_random(&mut engine), None);
        drop(engine);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_pick_random_with_engine_source() {
        let data = VecDeque::from(vec!['a', 'b', 'c']);
        let mut last = EngineRandom::new(|_min, max| max - 1);
        assert_eq!(data.pick_random(&mut last), Some(&'c'));
        assert_eq!(data.pick_random_or_default(&mut last), 'c');
    }

    #[test]
    fn test_pick_random_single_element() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!([42].pick_random(&mut rng), Some(&42));
    }

    #[cfg(feature = "shared-rng")]
    #[test]
    fn test_pick_random_shared() {
        let data = [1, 2, 3];
        let picked = data.pick_random_shared().unwrap();
        assert!(data.contains(picked));

        let empty: Vec<u64> = Vec::new();
        assert_eq!(empty.pick_random_shared(), None);
        assert_eq!(empty.pick_random_shared_or_default(), 0);
    }
}
