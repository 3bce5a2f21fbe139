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

//! In-place removal of null entries from growable sequences.
//!
//! A "null" is whatever a `Nullable` type says it is: `None`, a null raw
//! pointer, or a weak handle whose target has already been dropped. The last
//! case is what real-time hosts accumulate in object registries once the
//! objects are destroyed.
//!
//! `prune_nulls` is a single compacting pass: survivors keep their relative
//! order, no auxiliary buffer is allocated, and a second call is a no-op.

use std::{collections::VecDeque, rc, sync};

/// A value that may represent "nothing".
pub trait Nullable {
    /// Returns `true` if the value is null.
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T> Nullable for *const T
where
    T: ?Sized,
{
    #[inline]
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T> Nullable for *mut T
where
    T: ?Sized,
{
    #[inline]
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

impl<T> Nullable for rc::Weak<T>
where
    T: ?Sized,
{
    /// A weak handle is null once its target has been dropped.
    #[inline]
    fn is_null(&self) -> bool {
        self.strong_count() == 0
    }
}

impl<T> Nullable for sync::Weak<T>
where
    T: ?Sized,
{
    /// A weak handle is null once its target has been dropped.
    #[inline]
    fn is_null(&self) -> bool {
        self.strong_count() == 0
    }
}

/// Removes null entries from a growable sequence in place.
///
/// # Examples
///
/// ```rust
/// # use seqkit::prelude::*;
/// let mut items = vec![Some(1), None, Some(2), None, Some(3)];
/// assert_eq!(items.prune_nulls(), 2);
/// assert_eq!(items, vec![Some(1), Some(2), Some(3)]);
/// assert_eq!(items.prune_nulls(), 0);
/// ```
pub trait PruneNulls {
    /// Removes every null entry, keeping the order of the remaining ones.
    /// Returns the number of removed entries.
    fn prune_nulls(&mut self) -> usize;
}

#[inline]
fn trace_pruned(removed: usize, remaining: usize) {
    if removed > 0 {
        tracing::trace!(removed, remaining, "pruned null entries");
    }
}

impl<T> PruneNulls for Vec<T>
where
    T: Nullable,
{
    fn prune_nulls(&mut self) -> usize {
        let before = self.len();
        self.retain(|item| !item.is_null());
        let removed = before - self.len();
        trace_pruned(removed, self.len());
        removed
    }
}

impl<T> PruneNulls for VecDeque<T>
where
    T: Nullable,
{
    fn prune_nulls(&mut self) -> usize {
        let before = self.len();
        self.retain(|item| !item.is_null());
        let removed = before - self.len();
        trace_pruned(removed, self.len());
        removed
    }
}

#[cfg(feature = "smallvec")]
impl<A> PruneNulls for smallvec::SmallVec<A>
where
    A: smallvec::Array,
    A::Item: Nullable,
{
    fn prune_nulls(&mut self) -> usize {
        let before = self.len();
        self.retain(|item| !item.is_null());
        let removed = before - self.len();
        trace_pruned(removed, self.len());
        removed
    }
}

impl<P> PruneNulls for Option<P>
where
    P: PruneNulls,
{
    /// An absent sequence has nothing to prune.
    #[inline]
    fn prune_nulls(&mut self) -> usize {
        self.as_mut().map_or(0, PruneNulls::prune_nulls)
    }
}

impl<P> PruneNulls for &mut P
where
    P: PruneNulls + ?Sized,
{
    #[inline]
    fn prune_nulls(&mut self) -> usize {
        (**self).prune_nulls()
    }
}
