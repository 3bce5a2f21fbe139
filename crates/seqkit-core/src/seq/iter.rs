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

//! # Positional Sequence Iterator
//!
//! `SeqIter` walks any `Sequence` front to back (or back to front) through
//! its positional accessor. It unifies iteration over sequences that may be
//! absent: wrapping `None`, or a sequence that reports itself absent, behaves
//! as an empty iterator.
//!
//! ## Highlights
//!
//! - Exact `size_hint`, `ExactSizeIterator`, `DoubleEndedIterator` and
//!   `FusedIterator`.
//! - Works for non-contiguous sequences such as `VecDeque`.
//! - `Clone`, so a partially consumed iterator can be forked.
//!
//! ## Usage
//!
//! ```rust
//! use seqkit_core::seq::iter::SeqIter;
//!
//! let data = vec![1, 2, 3];
//! let present = SeqIter::new(Some(&data));
//! let absent: SeqIter<'_, Vec<i32>> = SeqIter::new(None);
//!
//! assert_eq!(present.copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(absent.count(), 0);
//! ```

use crate::seq::Sequence;
use std::iter::FusedIterator;

/// An iterator over the elements of a sequence that may be absent.
#[derive(Debug)]
pub struct SeqIter<'a, S>
where
    S: ?Sized,
{
    inner: Option<&'a S>,
    front: usize,
    back: usize,
}

impl<'a, S> SeqIter<'a, S>
where
    S: Sequence + ?Sized,
{
    /// Creates a new `SeqIter` from an optional sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seqkit_core::seq::iter::SeqIter;
    /// let data = [4, 5];
    /// let mut it = SeqIter::new(Some(&data));
    /// assert_eq!(it.next(), Some(&4));
    /// assert_eq!(it.next_back(), Some(&5));
    /// assert_eq!(it.next(), None);
    /// ```
    #[inline]
    pub fn new(inner: Option<&'a S>) -> Self {
        let back = inner.and_then(|s| s.present_len()).unwrap_or(0);
        Self {
            inner,
            front: 0,
            back,
        }
    }

    /// Creates a new `SeqIter` over a sequence that is statically present.
    #[inline]
    pub fn over(seq: &'a S) -> Self {
        Self::new(Some(seq))
    }
}

impl<S> Clone for SeqIter<'_, S>
where
    S: ?Sized,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: self.inner,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, S> Iterator for SeqIter<'a, S>
where
    S: Sequence + ?Sized,
{
    type Item = &'a S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.inner?.element(self.front)?;
        self.front += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<S> DoubleEndedIterator for SeqIter<'_, S>
where
    S: Sequence + ?Sized,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.inner?.element(self.back - 1)?;
        self.back -= 1;
        Some(item)
    }
}

impl<S> ExactSizeIterator for SeqIter<'_, S>
where
    S: Sequence + ?Sized,
{
    #[inline]
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<S> FusedIterator for SeqIter<'_, S> where S: Sequence + ?Sized {}
