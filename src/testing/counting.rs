//! A source that counts the elements its cursors hand out.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::Sequence;

/// An in-memory sequence with a shared pull counter.
///
/// Clones share both the data and the counter, so a test can keep one clone
/// and hand the other to a query.
#[derive(Debug)]
pub struct CountingSource<T> {
    data: Arc<[T]>,
    pulled: Arc<AtomicUsize>,
    passes: Arc<AtomicUsize>,
}

impl<T> Clone for CountingSource<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
            pulled: Arc::clone(&self.pulled),
            passes: Arc::clone(&self.passes),
        }
    }
}

impl<T> CountingSource<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            data: data.into(),
            pulled: Arc::new(AtomicUsize::new(0)),
            passes: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Elements handed out so far, over all cursors.
    pub fn pulled(&self) -> usize {
        self.pulled.load(Ordering::SeqCst)
    }

    /// Cursors started so far.
    pub fn passes(&self) -> usize {
        self.passes.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.pulled.store(0, Ordering::SeqCst);
        self.passes.store(0, Ordering::SeqCst);
    }
}

impl<T: Clone> Sequence for CountingSource<T> {
    type Item = T;
    type Cursor = CountingCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        self.passes.fetch_add(1, Ordering::SeqCst);
        CountingCursor {
            data: Arc::clone(&self.data),
            pos: 0,
            pulled: Arc::clone(&self.pulled),
        }
    }
}

pub struct CountingCursor<T> {
    data: Arc<[T]>,
    pos: usize,
    pulled: Arc<AtomicUsize>,
}

impl<T: Clone> Iterator for CountingCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.data.get(self.pos)?.clone();
        self.pos += 1;
        self.pulled.fetch_add(1, Ordering::SeqCst);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.data.len() - self.pos;
        (left, Some(left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_counter() {
        let a = CountingSource::new(vec!['x', 'y']);
        let b = a.clone();
        let _ = b.cursor().next();
        let _ = b.cursor().count();
        assert_eq!(a.pulled(), 3);
        assert_eq!(a.passes(), 2);
        a.reset();
        assert_eq!(b.pulled(), 0);
    }
}
