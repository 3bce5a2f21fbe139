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

//! # Delegating Sequence Algorithms
//!
//! `ArrayExt` exposes the classic array algorithm surface (clear, the
//! `find` family, index searches, reverse, sort, binary search, read-only
//! view and range copy) as methods on any slice, and through deref on
//! `Vec<T>`, arrays and boxed slices. Each method forwards to the standard
//! slice or iterator primitive and keeps its complexity.
//!
//! ## Failure model
//!
//! - Ranges are checked: `clear_range`, `copy_range_to` and
//!   `copy_range_within` return `SequenceError` instead of panicking when a
//!   range does not fit.
//! - Null sequences, null callbacks and elements without an ordering cannot
//!   be expressed: receivers are references, callbacks are closures, and the
//!   ordering is a trait bound (`T: Ord`) or an explicit `Comparer`.
//! - "Not found" is `None`. The `*_or_default` variants return
//!   `T::default()` instead; `seqkit_core::num::index::ToSignedIndex`
//!   converts index results into `-1` sentinels where a host needs them.
//!
//! ## Usage
//!
//! ```rust
//! use seqkit::prelude::*;
//!
//! let mut scores = vec![40, 10, 30, 20];
//!
//! assert!(scores.exists(|&s| s > 35));
//! assert_eq!(scores.find_first_index(|&s| s < 25), Some(1));
//! assert_eq!(scores.find_all(|&s| s >= 30), vec![40, 30]);
//!
//! scores.sort_natural();
//! assert_eq!(scores, [10, 20, 30, 40]);
//! assert_eq!(scores.binary_search_value(&30), Ok(2));
//!
//! scores.clear_range(1, 2).unwrap();
//! assert_eq!(scores, [10, 0, 0, 40]);
//! ```

use crate::{
    comparer::Comparer,
    error::{RangeError, SequenceError},
    read_only::ReadOnly,
};

/// Extension methods mirroring the classic array algorithms.
pub trait ArrayExt<T> {
    /// Sets every element to `T::default()`.
    fn clear_all(&mut self)
    where
        T: Default;

    /// Sets `count` elements starting at `from` to `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::OutOfRange` if `from + count` exceeds the
    /// length (or overflows). The sequence is left untouched in that case.
    fn clear_range(&mut self, from: usize, count: usize) -> Result<(), SequenceError>
    where
        T: Default;

    /// Returns `true` if any element matches `pred`.
    fn exists<P>(&self, pred: P) -> bool
    where
        P: FnMut(&T) -> bool;

    /// Returns the first element matching `pred`.
    fn find_first<P>(&self, pred: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool;

    /// Returns a clone of the first element matching `pred`, or `T::default()`.
    fn find_first_or_default<P>(&self, pred: P) -> T
    where
        P: FnMut(&T) -> bool,
        T: Clone + Default;

    /// Returns clones of all elements matching `pred`, in order.
    fn find_all<P>(&self, pred: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
        T: Clone;

    /// Returns the position of the first element matching `pred`.
    fn find_first_index<P>(&self, pred: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool;

    /// Returns the position of the last element matching `pred`.
    fn find_last_index<P>(&self, pred: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool;

    /// Returns the last element matching `pred`.
    fn find_last<P>(&self, pred: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool;

    /// Returns a clone of the last element matching `pred`, or `T::default()`.
    fn find_last_or_default<P>(&self, pred: P) -> T
    where
        P: FnMut(&T) -> bool,
        T: Clone + Default;

    /// Calls `action` once for every element, in order.
    fn for_each_item<A>(&self, action: A)
    where
        A: FnMut(&T);

    /// Returns the position of the first element equal to `value`.
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Returns the position of the last element equal to `value`.
    fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Reverses the order of the elements in place.
    fn reverse_all(&mut self);

    /// Sorts the elements in place by their natural order.
    ///
    /// The sort is not stable: equal elements may be reordered.
    fn sort_natural(&mut self)
    where
        T: Ord;

    /// Sorts the elements in place with `comparer`.
    ///
    /// The sort is not stable.
    ///
    /// # Panics
    ///
    /// May panic if `comparer` does not implement a total order.
    fn sort_with<C>(&mut self, comparer: &C)
    where
        C: Comparer<T> + ?Sized;

    /// Returns `true` if every element matches `pred`.
    ///
    /// An empty sequence matches any predicate.
    fn true_for_all<P>(&self, pred: P) -> bool
    where
        P: FnMut(&T) -> bool;

    /// Binary-searches a sequence sorted by natural order for `value`.
    ///
    /// Returns `Ok(index)` of a matching element, or `Err(index)` of the
    /// position where `value` could be inserted to keep the order. If the
    /// sequence is not sorted the result is unspecified.
    fn binary_search_value(&self, value: &T) -> Result<usize, usize>
    where
        T: Ord;

    /// Binary-searches a sequence sorted by `comparer` for `value`.
    ///
    /// Same contract as `binary_search_value`, with the sequence ordered by
    /// `comparer` instead of `Ord`.
    fn binary_search_with<C>(&self, value: &T, comparer: &C) -> Result<usize, usize>
    where
        C: Comparer<T> + ?Sized;

    /// Returns a read-only view of the sequence.
    fn as_read_only(&self) -> ReadOnly<'_, T>;

    /// Copies `length` elements starting at `source_index` into `destination`
    /// starting at `destination_index`.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::SourceOutOfRange` or
    /// `SequenceError::DestinationOutOfRange` if either range does not fit.
    /// Nothing is copied in that case.
    fn copy_range_to(
        &self,
        source_index: usize,
        destination: &mut [T],
        destination_index: usize,
        length: usize,
    ) -> Result<(), SequenceError>
    where
        T: Clone;

    /// Copies `length` elements starting at `source_index` to
    /// `destination_index` within the same sequence. Overlapping ranges are
    /// handled as if the source were copied to a buffer first.
    ///
    /// # Errors
    ///
    /// Same as `copy_range_to`, with both ranges checked against this sequence.
    fn copy_range_within(
        &mut self,
        source_index: usize,
        destination_index: usize,
        length: usize,
    ) -> Result<(), SequenceError>
    where
        T: Copy;
}

impl<T> ArrayExt<T> for [T] {
    #[inline]
    fn clear_all(&mut self)
    where
        T: Default,
    {
        self.fill_with(T::default);
    }

    #[inline]
    fn clear_range(&mut self, from: usize, count: usize) -> Result<(), SequenceError>
    where
        T: Default,
    {
        let range = RangeError::check(from, count, self.len())?;
        self[range].fill_with(T::default);
        Ok(())
    }

    #[inline]
    fn exists<P>(&self, pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(pred)
    }

    #[inline]
    fn find_first<P>(&self, mut pred: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|item| pred(*item))
    }

    #[inline]
    fn find_first_or_default<P>(&self, pred: P) -> T
    where
        P: FnMut(&T) -> bool,
        T: Clone + Default,
    {
        self.find_first(pred).cloned().unwrap_or_default()
    }

    #[inline]
    fn find_all<P>(&self, mut pred: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
        T: Clone,
    {
        self.iter().filter(|item| pred(*item)).cloned().collect()
    }

    #[inline]
    fn find_first_index<P>(&self, pred: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(pred)
    }

    #[inline]
    fn find_last_index<P>(&self, pred: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().rposition(pred)
    }

    #[inline]
    fn find_last<P>(&self, mut pred: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().rfind(|item| pred(*item))
    }

    #[inline]
    fn find_last_or_default<P>(&self, pred: P) -> T
    where
        P: FnMut(&T) -> bool,
        T: Clone + Default,
    {
        self.find_last(pred).cloned().unwrap_or_default()
    }

    #[inline]
    fn for_each_item<A>(&self, action: A)
    where
        A: FnMut(&T),
    {
        self.iter().for_each(action);
    }

    #[inline]
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    #[inline]
    fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().rposition(|item| item == value)
    }

    #[inline]
    fn reverse_all(&mut self) {
        self.reverse();
    }

    #[inline]
    fn sort_natural(&mut self)
    where
        T: Ord,
    {
        self.sort_unstable();
    }

    #[inline]
    fn sort_with<C>(&mut self, comparer: &C)
    where
        C: Comparer<T> + ?Sized,
    {
        self.sort_unstable_by(|a, b| comparer.compare(a, b));
    }

    #[inline]
    fn true_for_all<P>(&self, pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(pred)
    }

    #[inline]
    fn binary_search_value(&self, value: &T) -> Result<usize, usize>
    where
        T: Ord,
    {
        self.binary_search(value)
    }

    #[inline]
    fn binary_search_with<C>(&self, value: &T, comparer: &C) -> Result<usize, usize>
    where
        C: Comparer<T> + ?Sized,
    {
        self.binary_search_by(|probe| comparer.compare(probe, value))
    }

    #[inline]
    fn as_read_only(&self) -> ReadOnly<'_, T> {
        ReadOnly::new(self)
    }

    fn copy_range_to(
        &self,
        source_index: usize,
        destination: &mut [T],
        destination_index: usize,
        length: usize,
    ) -> Result<(), SequenceError>
    where
        T: Clone,
    {
        let source = RangeError::check(source_index, length, self.len())
            .map_err(SequenceError::SourceOutOfRange)?;
        let target = RangeError::check(destination_index, length, destination.len())
            .map_err(SequenceError::DestinationOutOfRange)?;

        destination[target].clone_from_slice(&self[source]);
        Ok(())
    }

    fn copy_range_within(
        &mut self,
        source_index: usize,
        destination_index: usize,
        length: usize,
    ) -> Result<(), SequenceError>
    where
        T: Copy,
    {
        let source = RangeError::check(source_index, length, self.len())
            .map_err(SequenceError::SourceOutOfRange)?;
        RangeError::check(destination_index, length, self.len())
            .map_err(SequenceError::DestinationOutOfRange)?;

        self.copy_within(source, destination_index);
        Ok(())
    }
}
