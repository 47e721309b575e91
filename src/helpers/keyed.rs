//! Key-based grouping and keyed collections.
//!
//! ## Available operations
//! - [`Seq::group_by`] / [`Seq::group_by_with`] - lazy grouping, one result per bucket
//! - [`Seq::to_lookup`] - eager key → members index
//! - [`Seq::to_map`] / [`Seq::to_map_opt`] - eager unique-key map, fails on duplicates
//!
//! ## Example
//! ```
//! use ironseq::*;
//!
//! let words = from_vec(vec!["abc", "hello", "def", "there", "four"]);
//! let groups = words.group_by(
//!     |w: &&str| w.len(),
//!     |w: &&str| w.chars().next().unwrap_or_default(),
//!     |len, firsts| {
//!         let firsts: Vec<String> = firsts.iter().map(char::to_string).collect();
//!         format!("{len}:{}", firsts.join(";"))
//!     },
//! );
//! assert_eq!(groups.to_vec(), vec!["3:a;d", "5:h;t", "4:f"]);
//! ```

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use crate::bucket::{Grouping, Lookup};
use crate::equality::{DefaultEquality, Equality};
use crate::error::{QueryError, Result};
use crate::{Seq, Sequence};

impl<S: Sequence> Seq<S> {
    /// Group elements by `key`, projecting each with `element`, and emit
    /// `result(key, members)` once per bucket in first-seen key order.
    ///
    /// Buckets are built from the whole source on the first pull.
    #[allow(clippy::type_complexity)]
    pub fn group_by<K, V, FK, FE, FR, O>(
        self,
        key: FK,
        element: FE,
        result: FR,
    ) -> Seq<GroupBy<S, FK, FE, FR, DefaultEquality>>
    where
        K: Eq + Hash,
        FK: Fn(&S::Item) -> K,
        FE: Fn(&S::Item) -> V,
        FR: Fn(K, Vec<V>) -> O,
    {
        self.group_by_with(key, element, result, DefaultEquality)
    }

    /// [`Seq::group_by`] with keys compared by `eq`.
    #[allow(clippy::type_complexity)]
    pub fn group_by_with<K, V, FK, FE, FR, O, E>(
        self,
        key: FK,
        element: FE,
        result: FR,
        eq: E,
    ) -> Seq<GroupBy<S, FK, FE, FR, E>>
    where
        FK: Fn(&S::Item) -> K,
        FE: Fn(&S::Item) -> V,
        FR: Fn(K, Vec<V>) -> O,
        E: Equality<K>,
    {
        Seq::new(GroupBy {
            source: self.inner,
            key: Arc::new(key),
            element: Arc::new(element),
            result: Arc::new(result),
            eq: Arc::new(eq),
        })
    }

    /// Read the whole source into a key → members index.
    pub fn to_lookup<K, V, FK, FE>(&self, key: FK, element: FE) -> Lookup<K, V>
    where
        K: Eq + Hash,
        FK: Fn(&S::Item) -> K,
        FE: Fn(&S::Item) -> V,
    {
        let mut lookup = Lookup::new();
        for item in self.inner.cursor() {
            lookup.push(key(&item), element(&item));
        }
        lookup
    }

    /// Read the whole source into a map with unique keys.
    ///
    /// # Errors
    /// [`QueryError::DuplicateKey`] as soon as a second element produces a key
    /// already in the map.
    pub fn to_map<K, V, FK, FE>(&self, key: FK, element: FE) -> Result<HashMap<K, V>>
    where
        K: Eq + Hash + Debug,
        FK: Fn(&S::Item) -> K,
        FE: Fn(&S::Item) -> V,
    {
        self.to_map_opt(|item| Some(key(item)), element)
    }

    /// [`Seq::to_map`] for key selectors that may produce no key.
    ///
    /// # Errors
    /// [`QueryError::DuplicateKey`] for a repeated key or for an element whose
    /// key is `None`.
    pub fn to_map_opt<K, V, FK, FE>(&self, key: FK, element: FE) -> Result<HashMap<K, V>>
    where
        K: Eq + Hash + Debug,
        FK: Fn(&S::Item) -> Option<K>,
        FE: Fn(&S::Item) -> V,
    {
        let mut map = HashMap::new();
        for item in self.inner.cursor() {
            let Some(k) = key(&item) else {
                return Err(QueryError::duplicate_key("to_map", "<none>".to_string()));
            };
            if map.contains_key(&k) {
                return Err(QueryError::duplicate_key("to_map", format!("{k:?}")));
            }
            map.insert(k, element(&item));
        }
        Ok(map)
    }
}

pub struct GroupBy<S, FK, FE, FR, E> {
    source: S,
    key: Arc<FK>,
    element: Arc<FE>,
    result: Arc<FR>,
    eq: Arc<E>,
}

pub struct GroupByCursor<C, K, V, FK, FE, FR, E> {
    pending: Option<C>,
    groups: std::vec::IntoIter<Grouping<K, V>>,
    key: Arc<FK>,
    element: Arc<FE>,
    result: Arc<FR>,
    eq: Arc<E>,
}

impl<S, K, V, FK, FE, FR, O, E> Sequence for GroupBy<S, FK, FE, FR, E>
where
    S: Sequence,
    FK: Fn(&S::Item) -> K,
    FE: Fn(&S::Item) -> V,
    FR: Fn(K, Vec<V>) -> O,
    E: Equality<K>,
{
    type Item = O;
    type Cursor = GroupByCursor<S::Cursor, K, V, FK, FE, FR, E>;

    fn cursor(&self) -> Self::Cursor {
        GroupByCursor {
            pending: Some(self.source.cursor()),
            groups: Vec::new().into_iter(),
            key: Arc::clone(&self.key),
            element: Arc::clone(&self.element),
            result: Arc::clone(&self.result),
            eq: Arc::clone(&self.eq),
        }
    }
}

impl<C, K, V, FK, FE, FR, O, E> Iterator for GroupByCursor<C, K, V, FK, FE, FR, E>
where
    C: Iterator,
    FK: Fn(&C::Item) -> K,
    FE: Fn(&C::Item) -> V,
    FR: Fn(K, Vec<V>) -> O,
    E: Equality<K>,
{
    type Item = O;

    fn next(&mut self) -> Option<O> {
        if let Some(source) = self.pending.take() {
            let mut buckets = Lookup::with_equality(Arc::clone(&self.eq));
            for item in source {
                buckets.push((self.key)(&item), (self.element)(&item));
            }
            tracing::trace!(groups = buckets.len(), "group_by: buckets built");
            self.groups = buckets.into_groups().into_iter();
        }
        let group = self.groups.next()?;
        Some((self.result)(group.key, group.members))
    }
}
