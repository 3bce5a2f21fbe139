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

//! Process-wide random source.
//!
//! One `StdRng` lives for the lifetime of the process. It is created lazily
//! from operating-system entropy on first use and sits behind a mutex, so
//! concurrent callers are serialized rather than racing on generator state.
//! A panic while the lock is held does not disable the source: the poisoned
//! guard is recovered, since a generator has no invariant a panic can break.

use crate::source::RandomSource;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

static SHARED_RNG: LazyLock<Mutex<StdRng>> = LazyLock::new(|| {
    tracing::debug!("seeding process-wide random source from OS entropy");
    Mutex::new(StdRng::from_os_rng())
});

#[inline]
fn lock() -> MutexGuard<'static, StdRng> {
    SHARED_RNG.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A zero-sized handle to the process-wide random generator.
///
/// Every `SharedRandom` value refers to the same generator, so handles can be
/// created freely wherever a `RandomSource` is needed.
///
/// # Examples
///
/// ```rust
/// # use seqkit_rand::{RandomSource, SharedRandom};
/// let mut source = SharedRandom;
/// assert!(source.next_index(6) < 6);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SharedRandom;

impl SharedRandom {
    /// Replaces the process-wide generator with one seeded from `seed`.
    ///
    /// Draws made after this call are reproducible as long as no other
    /// thread draws from the shared source in between.
    pub fn reseed(seed: u64) {
        *lock() = StdRng::seed_from_u64(seed);
        tracing::debug!(seed, "reseeded process-wide random source");
    }

    /// Runs `f` with exclusive access to the process-wide generator.
    ///
    /// Use this to make several draws atomically with respect to other
    /// threads. `f` must not use `SharedRandom` itself, or it deadlocks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rand::Rng;
    /// # use seqkit_rand::SharedRandom;
    /// let (a, b) = SharedRandom::with(|rng| (rng.random_range(0..10), rng.random_range(0..10)));
    /// assert!(a < 10 && b < 10);
    /// ```
    pub fn with<T, F>(f: F) -> T
    where
        F: FnOnce(&mut StdRng) -> T,
    {
        f(&mut lock())
    }
}

impl RandomSource for SharedRandom {
    #[inline]
    fn next_index(&mut self, upper: usize) -> usize {
        lock().random_range(0..upper)
    }
}
