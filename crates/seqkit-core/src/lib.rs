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

//! # Seqkit Core
//!
//! Foundational abstractions for the seqkit extension traits. This crate
//! defines what a "collection that may be absent" is, how to walk it by
//! index, and how Rust-native index results map onto the signed sentinels
//! that hosts coming from managed runtimes expect.
//!
//! ## Modules
//!
//! - `seq`: The `Collection` (length only) and `Sequence` (length plus
//!   indexed access) traits, implemented for slices, arrays, `Vec`,
//!   `VecDeque`, hash/btree maps and sets, `SmallVec` (feature `smallvec`),
//!   references, and `Option<_>` of any of these where `None` is an absent
//!   collection. `SeqIter` iterates any `Sequence`, yielding nothing for an
//!   absent one.
//! - `num`: The `MinusOne` constant trait for signed integers and the
//!   `ToSignedIndex` conversion from `Option<usize>` / binary-search results
//!   to `-1` and bitwise-complement sentinels.
//!
//! ## Purpose
//!
//! Higher-level crates express "total functions over optional input" against
//! these traits instead of sprinkling `Option` checks through every call site.

pub mod num;
pub mod seq;
