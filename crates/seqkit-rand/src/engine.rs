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

//! Adapter for host engines that own their randomness.
//!
//! Interactive runtimes typically expose a single integer primitive,
//! `range(min, max_exclusive) -> i32`, backed by their own generator so that
//! replays and networked simulations stay in sync. `EngineRandom` turns such
//! a primitive into a `RandomSource`, which makes every sequence helper use
//! the engine's randomness instead of the process-wide one.

use crate::source::RandomSource;

/// A `RandomSource` backed by a host's `range(min, max_exclusive)` primitive.
///
/// Bounds larger than `i32::MAX` are clamped to what the host can express,
/// and host results outside the requested range are clamped back into it
/// (debug builds assert instead).
///
/// Because of the first clamp, a sequence longer than `i32::MAX` elements is
/// only sampled over its first `i32::MAX` positions: elements at index
/// `i32::MAX` and above are never picked, so selection over such a sequence
/// is not uniform. Use a `rand` generator for sequences of that size.
///
/// # Examples
///
/// ```rust
/// # use seqkit_rand::{EngineRandom, RandomSource};
/// let mut calls = Vec::new();
/// let mut engine = EngineRandom::new(|min, max| {
///     calls.push((min, max));
///     max - 1
/// });
/// assert_eq!(engine.next_index(4), 3);
/// drop(engine);
/// assert_eq!(calls, vec![(0, 4)]);
/// ```
pub struct EngineRandom<F> {
    range: F,
}

impl<F> EngineRandom<F>
where
    F: FnMut(i32, i32) -> i32,
{
    /// Wraps the host's `range(min, max_exclusive)` primitive.
    #[inline]
    pub fn new(range: F) -> Self {
        Self { range }
    }

    /// Returns the wrapped primitive.
    #[inline]
    pub fn into_inner(self) -> F {
        self.range
    }
}

impl<F> RandomSource for EngineRandom<F>
where
    F: FnMut(i32, i32) -> i32,
{
    #[inline]
    fn next_index(&mut self, upper: usize) -> usize {
        debug_assert!(
            upper > 0,
            "called `EngineRandom::next_index` with an empty range"
        );

        let max_exclusive = i32::try_from(upper).unwrap_or(i32::MAX);
        let drawn = (self.range)(0, max_exclusive);
        debug_assert!(
            (0..max_exclusive).contains(&drawn),
            "host range primitive returned {} outside of [0, {})",
            drawn,
            max_exclusive
        );

        clamp_drawn(drawn, upper)
    }
}

/// Maps a host result into `[0, upper)`: negative results become `0`, results
/// past the end become `upper - 1`.
#[inline]
fn clamp_drawn(drawn: i32, upper: usize) -> usize {
    usize::try_from(drawn)
        .unwrap_or(0)
        .min(upper.saturating_sub(1))
}

impl<F> std::fmt::Debug for EngineRandom<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineRandom").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn test_forwards_zero_and_len_as_bounds() {
        let mut seen = Vec::new();
        let mut engine = EngineRandom::new(|min, max| {
            seen.push((min, max));
            min
        });

        assert_eq!(engine.next_index(3), 0);
        assert_eq!(engine.next_index(10), 0);
        drop(engine);
        assert_eq!(seen, vec![(0, 3), (0, 10)]);
    }

    #[test]
    fn test_engine_backed_by_seeded_rng_stays_in_bounds() {
        let mut host_rng = StdRng::seed_from_u64(2024);
        let mut engine = EngineRandom::new(move |min, max| host_rng.random_range(min..max));

        for _ in 0..1_000 {
            assert!(engine.next_index(5) < 5);
        }
    }

    #[test]
    fn test_oversized_upper_is_clamped_to_host_range() {
        let mut engine = EngineRandom::new(|_min, max| {
            assert_eq!(max, i32::MAX);
            max - 1
        });
        let upper = (i32::MAX as usize) + 10;
        assert_eq!(engine.next_index(upper), (i32::MAX as usize) - 1);
    }

    #[test]
    fn test_into_inner_returns_primitive() {
        let engine = EngineRandom::new(|min: i32, _max: i32| min + 1);
        let mut f = engine.into_inner();
        assert_eq!(f(1, 5), 2);
    }

    #[test]
    fn test_debug_is_opaque() {
        let engine = EngineRandom::new(|min, _max| min);
        assert_eq!(format!("{:?}", engine), "EngineRandom { .. }");
    }

    #[test]
    fn test_clamp_drawn_keeps_results_in_range() {
        assert_eq!(clamp_drawn(2, 4), 2);
        assert_eq!(clamp_drawn(4, 4), 3);
        assert_eq!(clamp_drawn(i32::MAX, 4), 3);
        assert_eq!(clamp_drawn(-3, 4), 0);
        assert_eq!(clamp_drawn(i32::MIN, 1), 0);
        assert_eq!(clamp_drawn(7, 1), 0);
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn test_misbehaving_host_is_clamped() {
        let mut too_high = EngineRandom::new(|_min, max| max + 5);
        assert_eq!(too_high.next_index(4), 3);

        let mut negative = EngineRandom::new(|_min, _max| -3);
        assert_eq!(negative.next_index(4), 0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "outside of [0, 4)")]
    fn test_misbehaving_host_trips_debug_assertion() {
        let mut too_high = EngineRandom::new(|_min, max| max + 5);
        too_high.next_index(4);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "outside of [0, 4)")]
    fn test_negative_host_result_trips_debug_assertion() {
        let mut negative = EngineRandom::new(|_min, _max| -3);
        negative.next_index(4);
    }
}
