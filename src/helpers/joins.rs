//! Inner equi-join.
//!
//! The join builds a key → members [`Lookup`] over the whole inner sequence on
//! the first pull, then walks the outer sequence once. For each outer element
//! it emits one result per inner element with an equal key.
//!
//! ## Available operations
//! - [`Seq::join`] - join on keys compared with their own `Eq`/`Hash`
//! - [`Seq::join_with`] - join on keys compared with an explicit [`Equality`]
//!
//! ### Notes
//! - Output order is outer source order, then inner source order within one outer element.
//! - Outer elements without a match produce nothing.
//!
//! ## Examples
//! ```
//! use ironseq::*;
//!
//! let outer = from_vec(vec![5, 3, 7]);
//! let inner = from_vec(vec!["bee", "giraffe", "tiger", "badger", "ox", "cat", "dog"]);
//!
//! let joined = outer.join(inner, |x: &usize| *x, |y: &&str| y.len(), |x, y| format!("{x}:{y}"));
//! assert_eq!(
//!     joined.to_vec(),
//!     vec!["5:tiger", "3:bee", "3:cat", "3:dog", "7:giraffe"]
//! );
//! ```

use std::hash::Hash;
use std::sync::Arc;

use crate::bucket::Lookup;
use crate::equality::{DefaultEquality, Equality};
use crate::{Seq, Sequence};

impl<S: Sequence> Seq<S> {
    /// Inner join with `inner`, matching `outer_key(o) == inner_key(i)`.
    ///
    /// # Example
    /// ```
    /// use ironseq::*;
    ///
    /// let users = from_vec(vec![(1u32, "alice"), (2, "bob")]);
    /// let scores = from_vec(vec![(1u32, 95u32), (3, 92), (1, 80)]);
    ///
    /// let joined = users.join(scores, |u: &(u32, &str)| u.0, |s: &(u32, u32)| s.0, |u, s| (u.1, s.1));
    /// assert_eq!(joined.to_vec(), vec![("alice", 95), ("alice", 80)]);
    /// ```
    #[allow(clippy::type_complexity)]
    pub fn join<SI, K, FO, FI, FR, O>(
        self,
        inner: SI,
        outer_key: FO,
        inner_key: FI,
        result: FR,
    ) -> Seq<Join<S, SI, FO, FI, FR, DefaultEquality>>
    where
        SI: Sequence,
        K: Eq + Hash,
        FO: Fn(&S::Item) -> K,
        FI: Fn(&SI::Item) -> K,
        FR: Fn(&S::Item, &SI::Item) -> O,
    {
        self.join_with(inner, outer_key, inner_key, result, DefaultEquality)
    }

    /// Inner join comparing keys with `eq`.
    #[allow(clippy::type_complexity)]
    pub fn join_with<SI, K, FO, FI, FR, O, E>(
        self,
        inner: SI,
        outer_key: FO,
        inner_key: FI,
        result: FR,
        eq: E,
    ) -> Seq<Join<S, SI, FO, FI, FR, E>>
    where
        SI: Sequence,
        FO: Fn(&S::Item) -> K,
        FI: Fn(&SI::Item) -> K,
        FR: Fn(&S::Item, &SI::Item) -> O,
        E: Equality<K>,
    {
        Seq::new(Join {
            outer: self.inner,
            inner,
            outer_key: Arc::new(outer_key),
            inner_key: Arc::new(inner_key),
            result: Arc::new(result),
            eq: Arc::new(eq),
        })
    }
}

pub struct Join<SO, SI, FO, FI, FR, E> {
    outer: SO,
    inner: SI,
    outer_key: Arc<FO>,
    inner_key: Arc<FI>,
    result: Arc<FR>,
    eq: Arc<E>,
}

pub struct JoinCursor<CO: Iterator, CI: Iterator, K, FO, FI, FR, E> {
    outer: CO,
    pending_inner: Option<CI>,
    index: Lookup<K, CI::Item, Arc<E>>,
    outer_key: Arc<FO>,
    inner_key: Arc<FI>,
    result: Arc<FR>,
    // outer element being expanded, its bucket, and the next member to pair it with
    current: Option<(CO::Item, usize, usize)>,
}

impl<SO, SI, K, FO, FI, FR, O, E> Sequence for Join<SO, SI, FO, FI, FR, E>
where
    SO: Sequence,
    SI: Sequence,
    FO: Fn(&SO::Item) -> K,
    FI: Fn(&SI::Item) -> K,
    FR: Fn(&SO::Item, &SI::Item) -> O,
    E: Equality<K>,
{
    type Item = O;
    type Cursor = JoinCursor<SO::Cursor, SI::Cursor, K, FO, FI, FR, E>;

    fn cursor(&self) -> Self::Cursor {
        JoinCursor {
            outer: self.outer.cursor(),
            pending_inner: Some(self.inner.cursor()),
            index: Lookup::with_equality(Arc::clone(&self.eq)),
            outer_key: Arc::clone(&self.outer_key),
            inner_key: Arc::clone(&self.inner_key),
            result: Arc::clone(&self.result),
            current: None,
        }
    }
}

impl<CO, CI, K, FO, FI, FR, O, E> Iterator for JoinCursor<CO, CI, K, FO, FI, FR, E>
where
    CO: Iterator,
    CI: Iterator,
    FO: Fn(&CO::Item) -> K,
    FI: Fn(&CI::Item) -> K,
    FR: Fn(&CO::Item, &CI::Item) -> O,
    E: Equality<K>,
{
    type Item = O;

    fn next(&mut self) -> Option<O> {
        if let Some(inner) = self.pending_inner.take() {
            let mut rows = 0usize;
            for item in inner {
                self.index.push((self.inner_key)(&item), item);
                rows += 1;
            }
            tracing::trace!(rows, keys = self.index.len(), "join: inner index built");
        }
        loop {
            if let Some((outer, group, pos)) = self.current.as_mut() {
                let matched = self
                    .index
                    .groups()
                    .get(*group)
                    .and_then(|g| g.members.get(*pos));
                if let Some(inner) = matched {
                    *pos += 1;
                    return Some((self.result)(&*outer, inner));
                }
                self.current = None;
            }
            let outer = self.outer.next()?;
            if let Some(group) = self.index.find(&(self.outer_key)(&outer)) {
                self.current = Some((outer, group, 0));
            }
        }
    }
}
