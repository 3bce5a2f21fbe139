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

use rand::{Rng, RngCore};

/// A source of uniformly distributed indices.
///
/// This is the only randomness the sequence helpers need: a position drawn
/// uniformly from `[0, upper)`.
///
/// Every `rand::RngCore` implements this trait, so seeded generators can be
/// passed directly where reproducibility matters.
///
/// # Examples
///
/// ```rust
/// # use rand::{SeedableRng, rngs::StdRng};
/// # use seqkit_rand::RandomSource;
/// let mut rng = StdRng::seed_from_u64(7);
/// for _ in 0..100 {
///     assert!(rng.next_index(3) < 3);
/// }
/// ```
pub trait RandomSource {
    /// Returns an index drawn uniformly from `[0, upper)`.
    ///
    /// # Panics
    ///
    /// Callers must pass `upper > 0`. Implementations backed by `rand` panic
    /// on an empty range.
    fn next_index(&mut self, upper: usize) -> usize;
}

impl<R> RandomSource for R
where
    R: RngCore + ?Sized,
{
    #[inline]
    fn next_index(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use rand_chacha::ChaCha8Rng;

    fn draw<R: RandomSource + ?Sized>(source: &mut R, upper: usize, n: usize) -> Vec<usize> {
        (0..n).map(|_| source.next_index(upper)).collect()
    }

    #[test]
    fn test_std_rng_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
        assert!(draw(&mut rng, 7, 1_000).iter().all(|&i| i < 7));
    }

    #[test]
    fn test_upper_one_always_yields_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert!(draw(&mut rng, 1, 64).iter().all(|&i| i == 0));
    }

    #[test]
    fn test_same_seed_same_indices() {
        let mut a = ChaCha8Rng::seed_from_u64(123456);
        let mut b = ChaCha8Rng::seed_from_u64(123456);
        assert_eq!(draw(&mut a, 100, 32), draw(&mut b, 100, 32));
    }

    #[test]
    fn test_trait_object_rng_is_a_source() {
        let mut rng = StdRng::seed_from_u64(9);
        let dyn_rng: &mut dyn RngCore = &mut rng;
        assert!(draw(dyn_rng, 5, 100).iter().all(|&i| i < 5));
    }

    #[test]
    fn test_every_index_is_reachable() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; 4];
        for i in draw(&mut rng, 4, 400) {
            seen[i] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
