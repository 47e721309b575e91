use std::fmt;
use std::sync::Arc;

use crate::sequence::{Borrowed, FromFn, Sequence, Source};

/// A lazily evaluated query over a [`Sequence`].
///
/// Operators consume a `Seq` and wrap its sequence in a new one; no element
/// is pulled until a cursor is advanced. Iterating `&seq` starts a fresh pass.
#[derive(Clone)]
pub struct Seq<S> {
    pub(crate) inner: S,
}

impl<S> Seq<S> {
    pub fn new(inner: S) -> Self {
        Seq { inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    pub fn as_inner(&self) -> &S {
        &self.inner
    }
}

impl<S> fmt::Debug for Seq<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seq")
            .field("sequence", &std::any::type_name::<S>())
            .finish()
    }
}

impl<S: Sequence> Sequence for Seq<S> {
    type Item = S::Item;
    type Cursor = S::Cursor;

    fn cursor(&self) -> Self::Cursor {
        self.inner.cursor()
    }
}

impl<'a, S: Sequence> IntoIterator for &'a Seq<S> {
    type Item = S::Item;
    type IntoIter = S::Cursor;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.cursor()
    }
}

/// Query an owned vector. Elements are cloned out on every pass.
pub fn from_vec<T: Clone>(data: Vec<T>) -> Seq<Source<T>> {
    Seq::new(Source::new(data))
}

/// Query a borrowed slice without copying it up front.
pub fn from_slice<T: Clone>(data: &[T]) -> Seq<Borrowed<'_, T>> {
    Seq::new(Borrowed::new(data))
}

/// Query a factory closure; it is called again for every pass.
///
/// ```
/// use ironseq::{from_fn, Sequence};
///
/// let evens = from_fn(|| 0u64..).filter(|n: &u64| n % 2 == 0);
/// assert_eq!(evens.cursor().take(3).collect::<Vec<_>>(), vec![0, 2, 4]);
/// ```
pub fn from_fn<F, I>(make: F) -> Seq<FromFn<F>>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    Seq::new(FromFn::new(make))
}

/* ===================== Stateless operators ===================== */

/// Element-wise transform.
pub struct Map<S, F> {
    pub(crate) source: S,
    pub(crate) f: Arc<F>,
}

pub struct MapCursor<C, F> {
    inner: C,
    f: Arc<F>,
}

impl<S, F, O> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> O,
{
    type Item = O;
    type Cursor = MapCursor<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        MapCursor {
            inner: self.source.cursor(),
            f: Arc::clone(&self.f),
        }
    }
}

impl<C, F, O> Iterator for MapCursor<C, F>
where
    C: Iterator,
    F: Fn(C::Item) -> O,
{
    type Item = O;

    fn next(&mut self) -> Option<O> {
        self.inner.next().map(|x| (self.f)(x))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Element-wise filter.
pub struct Filter<S, P> {
    pub(crate) source: S,
    pub(crate) pred: Arc<P>,
}

pub struct FilterCursor<C, P> {
    inner: C,
    pred: Arc<P>,
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor = FilterCursor<S::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        FilterCursor {
            inner: self.source.cursor(),
            pred: Arc::clone(&self.pred),
        }
    }
}

impl<C, P> Iterator for FilterCursor<C, P>
where
    C: Iterator,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        let pred = &self.pred;
        self.inner.by_ref().find(|x| pred(x))
    }
}

/// Flattening transform.
pub struct FlatMap<S, F> {
    pub(crate) source: S,
    pub(crate) f: Arc<F>,
}

pub struct FlatMapCursor<C, F, I> {
    inner: C,
    f: Arc<F>,
    current: Option<I>,
}

impl<S, F, I> Sequence for FlatMap<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> I,
    I: IntoIterator,
{
    type Item = I::Item;
    type Cursor = FlatMapCursor<S::Cursor, F, I::IntoIter>;

    fn cursor(&self) -> Self::Cursor {
        FlatMapCursor {
            inner: self.source.cursor(),
            f: Arc::clone(&self.f),
            current: None,
        }
    }
}

impl<C, F, I, J> Iterator for FlatMapCursor<C, F, J>
where
    C: Iterator,
    F: Fn(C::Item) -> I,
    I: IntoIterator<IntoIter = J>,
    J: Iterator,
{
    type Item = J::Item;

    fn next(&mut self) -> Option<J::Item> {
        loop {
            if let Some(item) = self.current.as_mut().and_then(Iterator::next) {
                return Some(item);
            }
            let outer = self.inner.next()?;
            self.current = Some((self.f)(outer).into_iter());
        }
    }
}
