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

//! Non-failing lookups on mappings.
//!
//! `MapExt` adds lookups that never fail on a missing key: `get_or_default`
//! clones the value or returns the value type's default, and `get_or` falls
//! back to a caller-supplied value. Both work on `HashMap` (any hasher),
//! `BTreeMap`, references to them, and `Option<_>` of them where `None` is an
//! absent mapping that contains no keys.

use std::{
    borrow::Borrow,
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

/// Lookups that fall back to a default value instead of failing.
///
/// `Q` is the borrowed key type, as in `HashMap::get`.
///
/// # Examples
///
/// ```rust
/// # use seqkit::prelude::*;
/// # use std::collections::HashMap;
/// let mut stock: HashMap<String, u32> = HashMap::new();
/// stock.insert("apples".to_string(), 3);
///
/// assert_eq!(stock.get_or_default("apples"), 3);
/// assert_eq!(stock.get_or_default("pears"), 0);
/// assert_eq!(*stock.get_or("pears", &7), 7);
/// ```
pub trait MapExt<Q>
where
    Q: ?Sized,
{
    /// The value type of the mapping.
    type Value;

    /// Returns a reference to the value for `key`, if present.
    fn lookup(&self, key: &Q) -> Option<&Self::Value>;

    /// Returns a clone of the value for `key`, or `Self::Value::default()`.
    #[inline]
    fn get_or_default(&self, key: &Q) -> Self::Value
    where
        Self::Value: Clone + Default,
    {
        self.lookup(key).cloned().unwrap_or_default()
    }

    /// Returns the value for `key`, or `fallback` if the key is missing.
    #[inline]
    fn get_or<'a>(&'a self, key: &Q, fallback: &'a Self::Value) -> &'a Self::Value {
        self.lookup(key).unwrap_or(fallback)
    }
}

impl<K, V, S, Q> MapExt<Q> for HashMap<K, V, S>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    type Value = V;

    #[inline]
    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, Q> MapExt<Q> for BTreeMap<K, V>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    type Value = V;

    #[inline]
    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<M, Q> MapExt<Q> for &M
where
    M: MapExt<Q> + ?Sized,
    Q: ?Sized,
{
    type Value = M::Value;

    #[inline]
    fn lookup(&self, key: &Q) -> Option<&M::Value> {
        (**self).lookup(key)
    }
}

impl<M, Q> MapExt<Q> for Option<M>
where
    M: MapExt<Q>,
    Q: ?Sized,
{
    type Value = M::Value;

    #[inline]
    fn lookup(&self, key: &Q) -> Option<&M::Value> {
        self.as_ref()?.lookup(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    #[test]
    fn test_get_or_default_present_and_missing() {
        let map: HashMap<&str, i32> = [("a", 1)].into_iter().collect();
        assert_eq!(map.get_or_default("a"), 1);
        assert_eq!(map.get_or_default("b"), 0);
    }

    #[test]
    fn test_get_or_default_string_values() {
        let mut map: BTreeMap<u32, String> = BTreeMap::new();
        map.insert(1, "one".to_string());

        assert_eq!(map.get_or_default(&1), "one");
        assert_eq!(map.get_or_default(&2), "");
    }

    #[test]
    fn test_get_or_default_with_custom_hasher() {
        let mut map: FxHashMap<u64, Vec<u8>> = FxHashMap::default();
        map.insert(7, vec![1, 2]);

        assert_eq!(map.get_or_default(&7), vec![1, 2]);
        assert!(map.get_or_default(&8).is_empty());
    }

    #[test]
    fn test_get_or_falls_back() {
        let map: HashMap<String, f64> = [("pi".to_string(), 2.5)].into_iter().collect();
        let fallback = -1.0;

        assert_eq!(*map.get_or("pi", &fallback), 2.5);
        assert_eq!(*map.get_or("tau", &fallback), -1.0);
    }

    #[test]
    fn test_absent_map_has_no_keys() {
        let absent: Option<HashMap<&str, i32>> = None;
        assert_eq!(absent.lookup("a"), None);
        assert_eq!(absent.get_or_default("a"), 0);

        let present = Some(BTreeMap::from([("a", 5)]));
        assert_eq!(present.get_or_default("a"), 5);
    }

    #[test]
    fn test_lookup_through_reference() {
        let map = BTreeMap::from([(1u8, 'x')]);
        let by_ref = &map;
        assert_eq!(MapExt::lookup(&by_ref, &1u8), Some(&'x'));
        assert_eq!(by_ref.get_or_default(&2u8), '\0');
    }
}
