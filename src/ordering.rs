//! The ordering engine.
//!
//! [`Seq::order_by`] turns a query into an [`OrderedSeq`]: an immutable handle
//! over the shared source and the comparer composed so far.
//! [`OrderedSeq::then_by`] returns a *new* handle with one more tie-break step
//! layered on; the handle it was called on stays usable and unchanged, and no earlier
//! step is re-evaluated or re-validated.
//!
//! Iterating snapshots the whole source, then repeatedly removes the first
//! minimal element under the composed comparer. Elements that compare equal on
//! every step therefore come out in source order (the sort is stable).
//!
//! ```
//! use ironseq::*;
//!
//! let fruits = from_vec(vec!["grape", "passionfruit", "banana", "mango", "orange", "raspberry", "apple", "blueberry"]);
//! let by_len = fruits.order_by(|f: &&str| f.len(), NaturalOrder);
//! let by_len_then_name = by_len.then_by(|f: &&str| *f, NaturalOrder);
//!
//! assert_eq!(
//!     by_len_then_name.to_vec(),
//!     vec!["apple", "grape", "mango", "banana", "orange", "blueberry", "raspberry", "passionfruit"]
//! );
//! // the first handle is untouched by `then_by`
//! assert_eq!(by_len.to_vec()[..3], ["grape", "mango", "apple"]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::compare::{ByKey, Comparer, Compose, Dir};
use crate::{Seq, Sequence};

impl<S: Sequence> Seq<S> {
    /// Order ascending by `key`, comparing keys with `comparer`.
    pub fn order_by<K, F, C>(self, key: F, comparer: C) -> OrderedSeq<S, ByKey<F, C>>
    where
        F: Fn(&S::Item) -> K,
        C: Comparer<K>,
    {
        self.order_by_dir(key, comparer, Dir::Asc)
    }

    /// Order descending by `key`.
    pub fn order_by_descending<K, F, C>(self, key: F, comparer: C) -> OrderedSeq<S, ByKey<F, C>>
    where
        F: Fn(&S::Item) -> K,
        C: Comparer<K>,
    {
        self.order_by_dir(key, comparer, Dir::Desc)
    }

    pub fn order_by_dir<K, F, C>(self, key: F, comparer: C, dir: Dir) -> OrderedSeq<S, ByKey<F, C>>
    where
        F: Fn(&S::Item) -> K,
        C: Comparer<K>,
    {
        self.order_with(ByKey::new(key, comparer, dir))
    }

    /// Order by an element comparer built elsewhere (for example with [`crate::compose`]).
    pub fn order_with<C>(self, comparer: C) -> OrderedSeq<S, C>
    where
        C: Comparer<S::Item>,
    {
        OrderedSeq {
            source: Arc::new(self.inner),
            comparer: Arc::new(comparer),
            steps: 1,
        }
    }
}

/// An ordering handle: shared source plus the composed comparer.
pub struct OrderedSeq<S, C> {
    source: Arc<S>,
    comparer: Arc<C>,
    steps: usize,
}

impl<S, C> Clone for OrderedSeq<S, C> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            comparer: Arc::clone(&self.comparer),
            steps: self.steps,
        }
    }
}

impl<S, C> fmt::Debug for OrderedSeq<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedSeq")
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}

impl<S: Sequence, C: Comparer<S::Item>> OrderedSeq<S, C> {
    /// Break ties ascending by `key`.
    pub fn then_by<K, F, C2>(&self, key: F, comparer: C2) -> OrderedSeq<S, Compose<C, ByKey<F, C2>>>
    where
        F: Fn(&S::Item) -> K,
        C2: Comparer<K>,
    {
        self.then_by_dir(key, comparer, Dir::Asc)
    }

    /// Break ties descending by `key`.
    pub fn then_by_descending<K, F, C2>(
        &self,
        key: F,
        comparer: C2,
    ) -> OrderedSeq<S, Compose<C, ByKey<F, C2>>>
    where
        F: Fn(&S::Item) -> K,
        C2: Comparer<K>,
    {
        self.then_by_dir(key, comparer, Dir::Desc)
    }

    pub fn then_by_dir<K, F, C2>(
        &self,
        key: F,
        comparer: C2,
        dir: Dir,
    ) -> OrderedSeq<S, Compose<C, ByKey<F, C2>>>
    where
        F: Fn(&S::Item) -> K,
        C2: Comparer<K>,
    {
        self.then_with(ByKey::new(key, comparer, dir))
    }

    /// Break ties with an arbitrary element comparer.
    pub fn then_with<C2>(&self, comparer: C2) -> OrderedSeq<S, Compose<C, C2>>
    where
        C2: Comparer<S::Item>,
    {
        OrderedSeq {
            source: Arc::clone(&self.source),
            comparer: Arc::new(Compose::shared(Arc::clone(&self.comparer), comparer)),
            steps: self.steps + 1,
        }
    }

    /// The composed comparer of this handle.
    pub fn comparer(&self) -> &C {
        &self.comparer
    }

    /// Number of ordering steps composed so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Continue the pipeline with the sorted output.
    pub fn into_seq(self) -> Seq<Self> {
        Seq::new(self)
    }

    /// Sort and collect.
    pub fn to_vec(&self) -> Vec<S::Item> {
        self.cursor().collect()
    }
}

impl<S: Sequence, C: Comparer<S::Item>> Sequence for OrderedSeq<S, C> {
    type Item = S::Item;
    type Cursor = SortCursor<S::Cursor, C>;

    fn cursor(&self) -> Self::Cursor {
        SortCursor {
            pending: Some(self.source.cursor()),
            items: Vec::new(),
            comparer: Arc::clone(&self.comparer),
            steps: self.steps,
        }
    }
}

/// Selection-sort cursor. Snapshots the source on the first pull.
pub struct SortCursor<I: Iterator, C> {
    pending: Option<I>,
    items: Vec<I::Item>,
    comparer: Arc<C>,
    steps: usize,
}

impl<I, C> Iterator for SortCursor<I, C>
where
    I: Iterator,
    C: Comparer<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(source) = self.pending.take() {
            self.items = source.collect();
            tracing::trace!(len = self.items.len(), steps = self.steps, "order_by: source snapshot");
        }
        if self.items.is_empty() {
            return None;
        }
        let mut min = 0;
        for i in 1..self.items.len() {
            // strict `Less` keeps the earliest of equal elements
            if self.comparer.compare(&self.items[i], &self.items[min]) == Ordering::Less {
                min = i;
            }
        }
        Some(self.items.remove(min))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.pending {
            Some(source) => source.size_hint(),
            None => (self.items.len(), Some(self.items.len())),
        }
    }
}
