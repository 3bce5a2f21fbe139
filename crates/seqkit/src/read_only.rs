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

//! Read-only views over slices.
//!
//! `ReadOnly` wraps a shared slice and exposes positional access, searching
//! and iteration, but no way to reach a mutable reference or to reorder the
//! underlying storage. Handing out a `ReadOnly` instead of a `&[T]` makes the
//! intent explicit at API boundaries and keeps the view usable with the
//! convenience layer (`in_range`, `pick_random`, ...).

use seqkit_core::seq::{Collection, Sequence};
use std::ops::Index;

/// A read-only view over a slice.
///
/// # Examples
///
/// ```rust
/// use seqkit::prelude::*;
///
/// let data = vec![3, 1, 2];
/// let view = data.as_read_only();
///
/// assert_eq!(view.len(), 3);
/// assert_eq!(view[1], 1);
/// assert!(view.contains(&2));
/// assert_eq!(view.iter().sum::<i32>(), 6);
/// ```
pub struct ReadOnly<'a, T> {
    items: &'a [T],
}

impl<'a, T> ReadOnly<'a, T> {
    /// Creates a read-only view over `items`.
    #[inline]
    pub const fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    /// Returns the number of elements in the view.
    #[inline]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the view contains no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the element at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.items.get(index)
    }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.items.iter()
    }

    /// Returns `true` if the view contains an element equal to `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(value)
    }

    /// Returns the position of the first element equal to `value`.
    #[inline]
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|item| item == value)
    }

    /// Copies the viewed elements into a new `Vec`.
    #[inline]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.to_vec()
    }
}

impl<T> Clone for ReadOnly<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ReadOnly<'_, T> {}

impl<T> std::fmt::Debug for ReadOnly<'_, T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items).finish()
    }
}

impl<T> PartialEq for ReadOnly<'_, T>
where
    T: PartialEq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T> Eq for ReadOnly<'_, T> where T: Eq {}

impl<T> Index<usize> for ReadOnly<'_, T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> From<&'a [T]> for ReadOnly<'a, T> {
    #[inline]
    fn from(items: &'a [T]) -> Self {
        Self::new(items)
    }
}

impl<'a, T> IntoIterator for ReadOnly<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &ReadOnly<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Collection for ReadOnly<'_, T> {
    #[inline]
    fn present_len(&self) -> Option<usize> {
        Some(self.items.len())
    }
}

impl<T> Sequence for ReadOnly<'_, T> {
    type Item = T;

    #[inline]
    fn element(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_reflects_slice() {
        let data = [10, 20, 30];
        let view = ReadOnly::new(&data);

        assert_eq!(view.len(), 3);
        assert!(!view.is_empty());
        assert_eq!(view.get(2), Some(&30));
        assert_eq!(view.get(3), None);
        assert_eq!(view[0], 10);
    }

    #[test]
    fn test_empty_view() {
        let view: ReadOnly<'_, u8> = ReadOnly::new(&[]);
        assert!(view.is_empty());
        assert_eq!(view.iter().next(), None);
    }

    #[test]
    fn test_search_helpers() {
        let data = ["a", "b", "a"];
        let view = ReadOnly::from(&data[..]);

        assert!(view.contains(&"b"));
        assert!(!view.contains(&"z"));
        assert_eq!(view.index_of(&"a"), Some(0));
        assert_eq!(view.index_of(&"z"), None);
    }

    #[test]
    fn test_iteration_and_copy_semantics() {
        let data = vec![1, 2, 3];
        let view = ReadOnly::new(&data);
        let copy = view;

        let doubled: Vec<i32> = view.into_iter().map(|x| x * 2).collect();
        assert_eq!(doubled, vec![2, 4, 6]);
        assert_eq!((&copy).into_iter().count(), 3);
        assert_eq!(copy.to_vec(), data);
        assert_eq!(view, copy);
    }

    #[test]
    fn test_view_is_a_sequence() {
        let data = [7, 8];
        let view = ReadOnly::new(&data);
        assert_eq!(view.present_len(), Some(2));
        assert_eq!(view.element(1), Some(&8));
        assert_eq!(view.iter_elements().count(), 2);
    }

    #[test]
    fn test_debug_lists_elements() {
        let data = [1, 2];
        assert_eq!(format!("{:?}", ReadOnly::new(&data)), "[1, 2]");
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds_panics() {
        let data = [1];
        let view = ReadOnly::new(&data);
        let _ = view[1];
    }
}
