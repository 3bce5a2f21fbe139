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

//! # Seqkit
//!
//! Safe, predictable extension methods over slices, vectors and maps, built
//! for hosts that want total functions: an absent collection, an empty one
//! or an out-of-range index yields a neutral answer instead of a panic.
//!
//! ## Modules
//!
//! - `array`: `ArrayExt`, the classic array algorithm surface (clear, the
//!   `find` family, index searches, reverse, sort, binary search, read-only
//!   view, range copy) delegating to the standard slice primitives.
//! - `safe`: `SafeCollectionExt` (`in_range`, `is_absent_or_empty`,
//!   `len_or_zero`) and `SafeSequenceExt` (`pick_random` and friends).
//! - `map`: `MapExt`, lookups that fall back to a default value.
//! - `nulls`: `Nullable` and `PruneNulls`, in-place compaction of null
//!   entries from growable sequences.
//! - `comparer`: the `Comparer` strategy used by sorting and searching.
//! - `read_only`: the `ReadOnly` slice view.
//! - `error`: `SequenceError` and `RangeError`.
//!
//! The underlying collection abstractions live in `seqkit_core` and the
//! randomness capability in `seqkit_rand`; both are re-exported.
//!
//! ## Features
//!
//! - `shared-rng` (default): the process-wide `SharedRandom` source and the
//!   `pick_random_shared*` helpers.
//! - `smallvec` (default): `Collection`, `Sequence` and `PruneNulls` for
//!   `smallvec::SmallVec`.
//!
//! ## Usage
//!
//! ```rust
//! use rand::{SeedableRng, rngs::StdRng};
//! use seqkit::prelude::*;
//! use std::collections::HashMap;
//!
//! let mut spawn_points = vec![Some("north"), None, Some("east"), None];
//! assert_eq!(spawn_points.prune_nulls(), 2);
//!
//! let mut rng = StdRng::seed_from_u64(11);
//! let picked = spawn_points.pick_random(&mut rng).unwrap();
//! assert!(picked.is_some());
//!
//! let weights: HashMap<&str, u32> = [("north", 3)].into_iter().collect();
//! assert_eq!(weights.get_or_default("east"), 0);
//! assert!(!spawn_points.in_range(-1));
//! ```

pub mod array;
pub mod comparer;
pub mod error;
pub mod map;
pub mod nulls;
pub mod read_only;
pub mod safe;

pub use seqkit_core;
pub use seqkit_rand;

/// Everything needed to call the extension methods.
pub mod prelude {
    pub use crate::{
        array::ArrayExt,
        comparer::{Comparer, NaturalOrder, Reversed},
        error::SequenceError,
        map::MapExt,
        nulls::{Nullable, PruneNulls},
        read_only::ReadOnly,
        safe::{SafeCollectionExt, SafeSequenceExt},
    };
    pub use seqkit_core::{
        num::index::ToSignedIndex,
        seq::{Collection, Sequence},
    };
    #[cfg(feature = "shared-rng")]
    pub use seqkit_rand::SharedRandom;
    pub use seqkit_rand::{EngineRandom, RandomSource};
}
