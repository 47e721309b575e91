use std::sync::Arc;

use crate::collection::{Filter, FlatMap, Map};
use crate::{Seq, Sequence};

impl<S: Sequence> Seq<S> {
    pub fn map<O, F>(self, f: F) -> Seq<Map<S, F>>
    where
        F: Fn(S::Item) -> O,
    {
        Seq::new(Map {
            source: self.inner,
            f: Arc::new(f),
        })
    }

    pub fn filter<P>(self, pred: P) -> Seq<Filter<S, P>>
    where
        P: Fn(&S::Item) -> bool,
    {
        Seq::new(Filter {
            source: self.inner,
            pred: Arc::new(pred),
        })
    }

    pub fn flat_map<I, F>(self, f: F) -> Seq<FlatMap<S, F>>
    where
        F: Fn(S::Item) -> I,
        I: IntoIterator,
    {
        Seq::new(FlatMap {
            source: self.inner,
            f: Arc::new(f),
        })
    }

    /// Borrow this query so it can feed another operator and still be reused.
    pub fn by_ref(&self) -> Seq<&S> {
        Seq::new(&self.inner)
    }
}

impl<S: Sequence> Seq<S> {
    /// Run one pass and collect it.
    pub fn to_vec(&self) -> Vec<S::Item> {
        self.inner.cursor().collect()
    }

    /// Run one pass and count the elements.
    pub fn count(&self) -> usize {
        self.inner.cursor().count()
    }
}
