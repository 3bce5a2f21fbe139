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

//! # Signed Index Sentinels
//!
//! Rust expresses "no such position" as `None` and a binary-search miss as
//! `Err(insertion_point)`. Hosts that exchange indices with managed runtimes
//! expect a signed integer instead: `-1` for "not found" and the bitwise
//! complement of the insertion point for a binary-search miss. This module
//! performs both conversions, and the reverse direction for incoming indices.
//!
//! ## Usage
//!
//! ```rust
//! use seqkit_core::num::index::{to_index, ToSignedIndex};
//!
//! assert_eq!(None::<usize>.to_signed_index::<i32>(), Some(-1));
//! assert_eq!(Some(4usize).to_signed_index::<i32>(), Some(4));
//! assert_eq!(Err::<usize, usize>(2).to_signed_index::<i32>(), Some(!2));
//!
//! assert_eq!(to_index(3i32), Some(3));
//! assert_eq!(to_index(-1i32), None);
//! ```

use crate::num::constants::MinusOne;
use num_traits::{PrimInt, Signed};

/// Converts any primitive integer into a `usize` position.
///
/// Returns `None` for negative values and for values that do not fit into
/// `usize`. Never panics.
///
/// # Examples
///
/// ```rust
/// # use seqkit_core::num::index::to_index;
/// assert_eq!(to_index(0u8), Some(0));
/// assert_eq!(to_index(-5i64), None);
/// assert_eq!(to_index(u128::MAX), None);
/// ```
///
/// Floating-point values are not indices:
///
/// ```compile_fail
/// # use seqkit_core::num::index::to_index;
/// let _ = to_index(-0.5f64);
/// ```
#[inline]
pub fn to_index<I>(index: I) -> Option<usize>
where
    I: PrimInt,
{
    num_traits::ToPrimitive::to_usize(&index)
}

/// Conversion of Rust-native index results into signed sentinel indices.
pub trait ToSignedIndex {
    /// Returns the signed index, or `None` if the position does not fit into `T`.
    fn to_signed_index<T>(self) -> Option<T>
    where
        T: PrimInt + Signed + MinusOne;
}

impl ToSignedIndex for Option<usize> {
    /// `None` becomes `-1`, `Some(i)` becomes `i`.
    #[inline]
    fn to_signed_index<T>(self) -> Option<T>
    where
        T: PrimInt + Signed + MinusOne,
    {
        match self {
            None => Some(T::MINUS_ONE),
            Some(index) => num_traits::cast::<usize, T>(index),
        }
    }
}

impl ToSignedIndex for Result<usize, usize> {
    /// `Ok(i)` becomes `i`, `Err(i)` becomes `!i` (always negative).
    #[inline]
    fn to_signed_index<T>(self) -> Option<T>
    where
        T: PrimInt + Signed + MinusOne,
    {
        match self {
            Ok(index) => num_traits::cast::<usize, T>(index),
            Err(insertion_point) => num_traits::cast::<usize, T>(insertion_point).map(|v| !v),
        }
    }
}
