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

//! # Seqkit Rand
//!
//! The randomness capability consumed by seqkit's random-selection helpers.
//! Instead of one implicit global generator, every call site receives a
//! `RandomSource`, and each host decides where its randomness comes from.
//!
//! ## Sources
//!
//! - Any `rand::RngCore` (`StdRng`, `ThreadRng`, `ChaCha8Rng`,
//!   `&mut dyn RngCore`, ...) is a `RandomSource` out of the box.
//! - `SharedRandom` (feature `shared-rng`, on by default) is a handle to one
//!   process-wide `StdRng`, seeded from the operating system on first use,
//!   guarded by a mutex and safe to use from any thread.
//! - `EngineRandom` adapts a host engine's own `range(min, max_exclusive)`
//!   primitive, for real-time hosts that own their randomness.
//!
//! ## Usage
//!
//! ```rust
//! use rand::{SeedableRng, rngs::StdRng};
//! use seqkit_rand::{EngineRandom, RandomSource};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! assert!(rng.next_index(10) < 10);
//!
//! // A host engine that always returns the lower bound.
//! let mut engine = EngineRandom::new(|min, _max| min);
//! assert_eq!(engine.next_index(10), 0);
//! ```

pub mod engine;
#[cfg(feature = "shared-rng")]
pub mod shared;
pub mod source;

pub use engine::EngineRandom;
#[cfg(feature = "shared-rng")]
pub use shared::SharedRandom;
pub use source::RandomSource;
