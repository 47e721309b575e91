//! Equality bucketing.
//!
//! [`Lookup`] groups values under keys using a caller-supplied [`Equality`].
//! Buckets keep the order in which their key was first seen, and members keep
//! source order. [`SeenSet`] is the membership-only variant used by the set
//! operators.
//!
//! Both index by `Equality::hash` and resolve collisions with
//! `Equality::equals`, so they work for contracts that are not the key type's
//! own `Eq`/`Hash`.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::equality::{DefaultEquality, Equality};

/// A key and the members that share it, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grouping<K, V> {
    pub key: K,
    pub members: Vec<V>,
}

impl<K, V> Grouping<K, V> {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Ordered key → members index.
pub struct Lookup<K, V, E = DefaultEquality> {
    eq: E,
    slots: HashMap<u64, Vec<usize>>,
    groups: Vec<Grouping<K, V>>,
}

impl<K, V> Lookup<K, V, DefaultEquality> {
    pub fn new() -> Self {
        Self::with_equality(DefaultEquality)
    }
}

impl<K, V> Default for Lookup<K, V, DefaultEquality> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, E> Lookup<K, V, E> {
    pub fn with_equality(eq: E) -> Self {
        Self {
            eq,
            slots: HashMap::new(),
            groups: Vec::new(),
        }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Buckets in first-seen key order.
    pub fn groups(&self) -> &[Grouping<K, V>] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<Grouping<K, V>> {
        self.groups
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.iter().map(|g| &g.key)
    }
}

impl<K, V, E: Equality<K>> Lookup<K, V, E> {
    fn position(&self, hash: u64, key: &K) -> Option<usize> {
        self.slots
            .get(&hash)?
            .iter()
            .copied()
            .find(|&i| self.eq.equals(&self.groups[i].key, key))
    }

    /// Append `value` to the bucket for `key`, opening a new bucket if needed.
    pub fn push(&mut self, key: K, value: V) {
        let hash = self.eq.hash(&key);
        match self.position(hash, &key) {
            Some(i) => self.groups[i].members.push(value),
            None => {
                self.slots.entry(hash).or_default().push(self.groups.len());
                self.groups.push(Grouping {
                    key,
                    members: vec![value],
                });
            }
        }
    }

    /// Members stored under `key`; empty when the key was never seen.
    pub fn get(&self, key: &K) -> &[V] {
        match self.position(self.eq.hash(key), key) {
            Some(i) => &self.groups[i].members,
            None => &[],
        }
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Index of the bucket for `key` within [`Lookup::groups`].
    pub fn find(&self, key: &K) -> Option<usize> {
        self.position(self.eq.hash(key), key)
    }
}

impl<K, V, E> IntoIterator for Lookup<K, V, E> {
    type Item = Grouping<K, V>;
    type IntoIter = std::vec::IntoIter<Grouping<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Membership set under an [`Equality`].
pub struct SeenSet<T, E> {
    eq: E,
    slots: HashMap<u64, Vec<T>>,
    len: usize,
}

impl<T, E: Equality<T>> SeenSet<T, E> {
    pub fn new(eq: E) -> Self {
        Self {
            eq,
            slots: HashMap::new(),
            len: 0,
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.slots
            .get(&self.eq.hash(value))
            .is_some_and(|bucket| bucket.iter().any(|v| self.eq.equals(v, value)))
    }

    /// Record `value`. Returns `false` if an equal value was already present.
    pub fn insert(&mut self, value: T) -> bool {
        let bucket = self.slots.entry(self.eq.hash(&value)).or_default();
        if bucket.iter().any(|v| self.eq.equals(v, &value)) {
            return false;
        }
        bucket.push(value);
        self.len += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equality::equality_fn;

    #[test]
    fn lookup_keeps_first_seen_key_order() {
        let mut l = Lookup::new();
        for w in ["abc", "hello", "def", "there", "four"] {
            l.push(w.len(), w.chars().next().unwrap());
        }
        let got: Vec<_> = l.groups().iter().map(|g| (g.key, g.members.clone())).collect();
        assert_eq!(
            got,
            vec![(3, vec!['a', 'd']), (5, vec!['h', 't']), (4, vec!['f'])]
        );
    }

    #[test]
    fn lookup_get_returns_empty_for_unknown_key() {
        let mut l = Lookup::new();
        l.push("a", 1);
        assert_eq!(l.get(&"a"), &[1]);
        assert!(l.get(&"zzz").is_empty());
        assert!(!l.contains_key(&"zzz"));
    }

    #[test]
    fn lookup_resolves_hash_collisions_with_equals() {
        // every key hashes to the same slot
        let eq = equality_fn(|a: &i32, b: &i32| a == b, |_: &i32| 7);
        let mut l = Lookup::with_equality(eq);
        l.push(1, "one");
        l.push(2, "two");
        l.push(1, "uno");
        assert_eq!(l.len(), 2);
        assert_eq!(l.get(&1), &["one", "uno"]);
        assert_eq!(l.get(&2), &["two"]);
    }

    #[test]
    fn seen_set_insert_reports_novelty() {
        let mut s = SeenSet::new(DefaultEquality);
        assert!(s.insert(3));
        assert!(!s.insert(3));
        assert!(s.insert(4));
        assert!(s.contains(&4));
        assert_eq!(s.len(), 2);
    }
}
