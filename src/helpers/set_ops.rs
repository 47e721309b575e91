//! Set-style operators under an [`Equality`] contract.
//!
//! ## Available operations
//! - [`Seq::union`] - first, then second, skipping anything already emitted
//! - [`Seq::except`] - elements of the first sequence absent from the second
//! - [`Seq::intersect`] - elements of the first, once per match in the second
//! - [`Seq::distinct`] - each equivalence class once
//!
//! ### Notes
//! - `except` keeps duplicates from the first sequence; it only filters.
//! - `intersect` does not deduplicate. An element matching `k` elements of the
//!   second sequence is emitted `k` times, and the second sequence is re-scanned
//!   with a fresh cursor for every element of the first.
//!
//! ```
//! use ironseq::*;
//!
//! let out = from_vec(vec![1, 2, 3, 3, 4]).except(from_vec(vec![1, 2, 2, 5]), DefaultEquality);
//! assert_eq!(out.to_vec(), vec![3, 3, 4]);
//! ```

use std::sync::Arc;

use crate::bucket::SeenSet;
use crate::equality::Equality;
use crate::{Seq, Sequence};

impl<S: Sequence> Seq<S> {
    /// Elements of `self` then `second`, each at most once.
    ///
    /// One seen-set spans both inputs, so a value present in both is emitted
    /// at its first position in `self`.
    pub fn union<S2, E>(self, second: S2, eq: E) -> Seq<Union<S, S2, E>>
    where
        S2: Sequence<Item = S::Item>,
        S::Item: Clone,
        E: Equality<S::Item>,
    {
        Seq::new(Union {
            first: self.inner,
            second,
            eq: Arc::new(eq),
        })
    }

    /// Elements of `self` that have no equal in `second`.
    ///
    /// `second` is read in full on the first pull, before any element of `self`.
    pub fn except<S2, E>(self, second: S2, eq: E) -> Seq<Except<S, S2, E>>
    where
        S2: Sequence<Item = S::Item>,
        E: Equality<S::Item>,
    {
        Seq::new(Except {
            first: self.inner,
            second,
            eq: Arc::new(eq),
        })
    }

    /// For every element of `self`, one copy per equal element of `second`.
    pub fn intersect<S2, E>(self, second: S2, eq: E) -> Seq<Intersect<S, S2, E>>
    where
        S2: Sequence<Item = S::Item>,
        S::Item: Clone,
        E: Equality<S::Item>,
    {
        Seq::new(Intersect {
            first: self.inner,
            second: Arc::new(second),
            eq: Arc::new(eq),
        })
    }

    /// The distinct elements of `self`, in first-seen order.
    pub fn distinct<E>(self, eq: E) -> Seq<Distinct<S, E>>
    where
        S::Item: Clone,
        E: Equality<S::Item>,
    {
        Seq::new(Distinct {
            source: self.inner,
            eq: Arc::new(eq),
        })
    }
}

/* ===================== Union ===================== */

pub struct Union<S1, S2, E> {
    pub(crate) first: S1,
    pub(crate) second: S2,
    pub(crate) eq: Arc<E>,
}

pub struct UnionCursor<C1, C2, T, E> {
    first: Option<C1>,
    second: C2,
    seen: SeenSet<T, Arc<E>>,
}

impl<S1, S2, E> Sequence for Union<S1, S2, E>
where
    S1: Sequence,
    S2: Sequence<Item = S1::Item>,
    S1::Item: Clone,
    E: Equality<S1::Item>,
{
    type Item = S1::Item;
    type Cursor = UnionCursor<S1::Cursor, S2::Cursor, S1::Item, E>;

    fn cursor(&self) -> Self::Cursor {
        UnionCursor {
            first: Some(self.first.cursor()),
            second: self.second.cursor(),
            seen: SeenSet::new(Arc::clone(&self.eq)),
        }
    }
}

impl<C1, C2, T, E> Iterator for UnionCursor<C1, C2, T, E>
where
    C1: Iterator<Item = T>,
    C2: Iterator<Item = T>,
    T: Clone,
    E: Equality<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if let Some(first) = self.first.as_mut() {
            for item in first.by_ref() {
                if self.seen.insert(item.clone()) {
                    return Some(item);
                }
            }
            self.first = None;
        }
        for item in self.second.by_ref() {
            if self.seen.insert(item.clone()) {
                return Some(item);
            }
        }
        None
    }
}

/* ===================== Except ===================== */

pub struct Except<S1, S2, E> {
    pub(crate) first: S1,
    pub(crate) second: S2,
    pub(crate) eq: Arc<E>,
}

pub struct ExceptCursor<C1, C2, T, E> {
    first: C1,
    pending: Option<C2>,
    excluded: SeenSet<T, Arc<E>>,
}

impl<S1, S2, E> Sequence for Except<S1, S2, E>
where
    S1: Sequence,
    S2: Sequence<Item = S1::Item>,
    E: Equality<S1::Item>,
{
    type Item = S1::Item;
    type Cursor = ExceptCursor<S1::Cursor, S2::Cursor, S1::Item, E>;

    fn cursor(&self) -> Self::Cursor {
        ExceptCursor {
            first: self.first.cursor(),
            pending: Some(self.second.cursor()),
            excluded: SeenSet::new(Arc::clone(&self.eq)),
        }
    }
}

impl<C1, C2, T, E> Iterator for ExceptCursor<C1, C2, T, E>
where
    C1: Iterator<Item = T>,
    C2: Iterator<Item = T>,
    E: Equality<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if let Some(second) = self.pending.take() {
            for item in second {
                self.excluded.insert(item);
            }
            tracing::trace!(excluded = self.excluded.len(), "except: exclusion set built");
        }
        let excluded = &self.excluded;
        self.first.by_ref().find(|item| !excluded.contains(item))
    }
}

/* ===================== Intersect ===================== */

pub struct Intersect<S1, S2, E> {
    pub(crate) first: S1,
    pub(crate) second: Arc<S2>,
    pub(crate) eq: Arc<E>,
}

pub struct IntersectCursor<C1, S2: Sequence, T, E> {
    first: C1,
    second: Arc<S2>,
    eq: Arc<E>,
    // the current element of the first sequence and the pass over `second` matching it
    current: Option<(T, S2::Cursor)>,
}

impl<S1, S2, E> Sequence for Intersect<S1, S2, E>
where
    S1: Sequence,
    S2: Sequence<Item = S1::Item>,
    S1::Item: Clone,
    E: Equality<S1::Item>,
{
    type Item = S1::Item;
    type Cursor = IntersectCursor<S1::Cursor, S2, S1::Item, E>;

    fn cursor(&self) -> Self::Cursor {
        IntersectCursor {
            first: self.first.cursor(),
            second: Arc::clone(&self.second),
            eq: Arc::clone(&self.eq),
            current: None,
        }
    }
}

impl<C1, S2, T, E> Iterator for IntersectCursor<C1, S2, T, E>
where
    C1: Iterator<Item = T>,
    S2: Sequence<Item = T>,
    T: Clone,
    E: Equality<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if let Some((item, scan)) = self.current.as_mut() {
                let eq = &self.eq;
                if scan.any(|other| eq.equals(item, &other)) {
                    return Some(item.clone());
                }
                self.current = None;
            }
            let item = self.first.next()?;
            self.current = Some((item, self.second.cursor()));
        }
    }
}

/* ===================== Distinct ===================== */

pub struct Distinct<S, E> {
    pub(crate) source: S,
    pub(crate) eq: Arc<E>,
}

pub struct DistinctCursor<C, T, E> {
    source: C,
    seen: SeenSet<T, Arc<E>>,
}

impl<S, E> Sequence for Distinct<S, E>
where
    S: Sequence,
    S::Item: Clone,
    E: Equality<S::Item>,
{
    type Item = S::Item;
    type Cursor = DistinctCursor<S::Cursor, S::Item, E>;

    fn cursor(&self) -> Self::Cursor {
        DistinctCursor {
            source: self.source.cursor(),
            seen: SeenSet::new(Arc::clone(&self.eq)),
        }
    }
}

impl<C, T, E> Iterator for DistinctCursor<C, T, E>
where
    C: Iterator<Item = T>,
    T: Clone,
    E: Equality<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let seen = &mut self.seen;
        self.source.by_ref().find(|item| seen.insert(item.clone()))
    }
}
