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

//! # Present-or-Absent Collections
//!
//! Two small traits describe everything the convenience layer needs to know
//! about a container:
//!
//! - `Collection`: how many elements it holds, or that it is absent.
//! - `Sequence`: additionally, positional access to its elements.
//!
//! `None` of an `Option<S>` is the absent collection. It reports no length
//! and no elements, which lets callers treat "no collection at all" and
//! "empty collection" uniformly without branching at every call site.
//!
//! ## Implementations
//!
//! | Type                                   | `Collection` | `Sequence` |
//! |----------------------------------------|:------------:|:----------:|
//! | `[T]`, `[T; N]`, `Vec<T>`, `Box<[T]>`   | yes          | yes        |
//! | `VecDeque<T>`                          | yes          | yes        |
//! | `SmallVec<A>` (feature `smallvec`)     | yes          | yes        |
//! | `HashMap`, `HashSet`, `BTreeMap`, `BTreeSet` | yes    | no         |
//! | `&S`, `&mut S`, `Box<S>`               | as `S`       | as `S`     |
//! | `Option<S>`                            | as `S`, `None` is absent | as `S`, `None` is absent |
//!
//! ## Usage
//!
//! ```rust
//! use seqkit_core::seq::{Collection, Sequence};
//!
//! let present: Option<Vec<i32>> = Some(vec![1, 2, 3]);
//! let absent: Option<Vec<i32>> = None;
//!
//! assert_eq!(present.present_len(), Some(3));
//! assert_eq!(absent.present_len(), None);
//! assert_eq!(present.element(1), Some(&2));
//! assert_eq!(absent.element(0), None);
//! ```

pub mod iter;

use self::iter::SeqIter;
use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    hash::BuildHasher,
};

/// A container with a length that may be absent altogether.
pub trait Collection {
    /// Returns the number of elements, or `None` if the collection is absent.
    fn present_len(&self) -> Option<usize>;
}

/// A `Collection` whose elements can be addressed by position.
///
/// # Examples
///
/// ```rust
/// # use seqkit_core::seq::Sequence;
/// let data = [10, 20, 30];
/// assert_eq!(data.element(2), Some(&30));
/// assert_eq!(data.element(3), None);
/// assert_eq!(data.iter_elements().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
/// ```
pub trait Sequence: Collection {
    /// The element type.
    type Item;

    /// Returns the element at `index`, or `None` if the sequence is absent or
    /// `index` is out of bounds.
    fn element(&self, index: usize) -> Option<&Self::Item>;

    /// Returns an iterator over the elements in order. An absent sequence
    /// yields nothing.
    #[inline]
    fn iter_elements(&self) -> SeqIter<'_, Self> {
        SeqIter::over(self)
    }
}

impl<T> Collection for [T] {
    #[inline]
    fn present_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    #[inline]
    fn element(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T, const N: usize> Collection for [T; N] {
    #[inline]
    fn present_len(&self) -> Option<usize> {
        Some(N)
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    #[inline]
    fn element(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> Collection for Vec<T> {
    #[inline]
    fn present_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn element(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> Collection for VecDeque<T> {
    #[inline]
    fn present_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn element(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

#[cfg(feature = "smallvec")]
impl<A> Collection for smallvec::SmallVec<A>
where
    A: smallvec::Array,
{
    #[inline]
    fn present_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

#[cfg(feature = "smallvec")]
impl<A> Sequence for smallvec::SmallVec<A>
where
    A: smallvec::Array,
{
    type Item = A::Item;

    #[inline]
    fn element(&self, index: usize) -> Option<&A::Item> {
        self.get(index)
    }
}

impl<K, V, S> Collection for HashMap<K, V, S>
where
    S: BuildHasher,
{
    #[inline]
    fn present_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T, S> Collection for HashSet<T, S>
where
    S: BuildHasher,
{
    #[inline]
    fn present_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    #[inline]
    fn present_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> Collection for BTreeSet<T> {
    #[inline]
    fn present_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<S> Collection for &S
where
    S: Collection + ?Sized,
{
    #[inline]
    fn present_len(&self) -> Option<usize> {
        (**self).present_len()
    }
}

impl<S> Sequence for &S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    #[inline]
    fn element(&self, index: usize) -> Option<&S::Item> {
        (**self).element(index)
    }
}

impl<S> Collection for &mut S
where
    S: Collection + ?Sized,
{
    #[inline]
    fn present_len(&self) -> Option<usize> {
        (**self).present_len()
    }
}

impl<S> Sequence for &mut S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    #[inline]
    fn element(&self, index: usize) -> Option<&S::Item> {
        (**self).element(index)
    }
}

impl<S> Collection for Box<S>
where
    S: Collection + ?Sized,
{
    #[inline]
    fn present_len(&self) -> Option<usize> {
        (**self).present_len()
    }
}

impl<S> Sequence for Box<S>
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    #[inline]
    fn element(&self, index: usize) -> Option<&S::Item> {
        (**self).element(index)
    }
}

impl<S> Collection for Option<S>
where
    S: Collection,
{
    #[inline]
    fn present_len(&self) -> Option<usize> {
        self.as_ref().and_then(Collection::present_len)
    }
}

impl<S> Sequence for Option<S>
where
    S: Sequence,
{
    type Item = S::Item;

    #[inline]
    fn element(&self, index: usize) -> Option<&S::Item> {
        self.as_ref()?.element(index)
    }
}
