//! The sequence capability every operator consumes and produces.
//!
//! A [`Sequence`] hands out fresh forward cursors. Each call to
//! [`Sequence::cursor`] restarts the pipeline from its sources; nothing is
//! cached between cursors. Cursors are plain [`Iterator`]s, so "get next" is
//! [`Iterator::next`] and it pulls only as many source elements as it needs.

use std::sync::Arc;

/// A restartable, possibly infinite source of elements.
pub trait Sequence {
    /// Element type produced by this sequence.
    type Item;
    /// Forward-only cursor over one pass of the sequence.
    type Cursor: Iterator<Item = Self::Item>;

    /// Start a new pass over the sequence.
    fn cursor(&self) -> Self::Cursor;
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;
    type Cursor = S::Cursor;

    fn cursor(&self) -> Self::Cursor {
        (**self).cursor()
    }
}

impl<S: Sequence + ?Sized> Sequence for Arc<S> {
    type Item = S::Item;
    type Cursor = S::Cursor;

    fn cursor(&self) -> Self::Cursor {
        (**self).cursor()
    }
}

/* ===================== Owned buffer ===================== */

/// An in-memory buffer shared between all cursors. Elements are cloned out.
#[derive(Debug)]
pub struct Source<T> {
    data: Arc<[T]>,
}

impl<T> Clone for Source<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }
}

impl<T> Source<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data: data.into() }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T: Clone> Sequence for Source<T> {
    type Item = T;
    type Cursor = SourceCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        SourceCursor {
            data: Arc::clone(&self.data),
            pos: 0,
        }
    }
}

/// Cursor over a [`Source`].
#[derive(Debug)]
pub struct SourceCursor<T> {
    data: Arc<[T]>,
    pos: usize,
}

impl<T: Clone> Iterator for SourceCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.data.get(self.pos)?.clone();
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.data.len().saturating_sub(self.pos);
        (rest, Some(rest))
    }
}

/* ===================== Borrowed slice ===================== */

/// A borrowed slice; cursors clone elements out of it.
#[derive(Debug)]
pub struct Borrowed<'a, T> {
    data: &'a [T],
}

impl<T> Clone for Borrowed<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Borrowed<'_, T> {}

impl<'a, T> Borrowed<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        Self { data }
    }
}

impl<'a, T: Clone> Sequence for Borrowed<'a, T> {
    type Item = T;
    type Cursor = std::iter::Cloned<std::slice::Iter<'a, T>>;

    fn cursor(&self) -> Self::Cursor {
        self.data.iter().cloned()
    }
}

/* ===================== Generator ===================== */

/// A sequence backed by a factory closure, re-invoked for every cursor.
///
/// This is the way to express infinite or computed sources:
/// `FromFn::new(|| 0u64..)` never ends, and operators over it stay lazy.
#[derive(Clone, Debug)]
pub struct FromFn<F> {
    make: F,
}

impl<F> FromFn<F> {
    pub fn new(make: F) -> Self {
        Self { make }
    }
}

impl<F, I> Sequence for FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    type Item = I::Item;
    type Cursor = I::IntoIter;

    fn cursor(&self) -> Self::Cursor {
        (self.make)().into_iter()
    }
}
