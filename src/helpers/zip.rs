use std::sync::Arc;

use crate::{Seq, Sequence};

impl<S: Sequence> Seq<S> {
    /// Pair elements positionally and combine them; stops with the shorter input.
    ///
    /// ```
    /// use ironseq::*;
    ///
    /// let sums = from_vec(vec![1, 2, 3, 4, 5, 9]).zip(from_vec(vec![6, 7, 8, 9, 10]), |a, b| a + b);
    /// assert_eq!(sums.to_vec(), vec![7, 9, 11, 13, 15]);
    /// ```
    pub fn zip<S2, F, O>(self, second: S2, combine: F) -> Seq<Zip<S, S2, F>>
    where
        S2: Sequence,
        F: Fn(S::Item, S2::Item) -> O,
    {
        Seq::new(Zip {
            first: self.inner,
            second,
            combine: Arc::new(combine),
        })
    }
}

pub struct Zip<S1, S2, F> {
    first: S1,
    second: S2,
    combine: Arc<F>,
}

pub struct ZipCursor<C1, C2, F> {
    first: C1,
    second: C2,
    combine: Arc<F>,
}

impl<S1, S2, F, O> Sequence for Zip<S1, S2, F>
where
    S1: Sequence,
    S2: Sequence,
    F: Fn(S1::Item, S2::Item) -> O,
{
    type Item = O;
    type Cursor = ZipCursor<S1::Cursor, S2::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        ZipCursor {
            first: self.first.cursor(),
            second: self.second.cursor(),
            combine: Arc::clone(&self.combine),
        }
    }
}

impl<C1, C2, F, O> Iterator for ZipCursor<C1, C2, F>
where
    C1: Iterator,
    C2: Iterator,
    F: Fn(C1::Item, C2::Item) -> O,
{
    type Item = O;

    fn next(&mut self) -> Option<O> {
        // the second cursor is not advanced once the first is exhausted
        let a = self.first.next()?;
        let b = self.second.next()?;
        Some((self.combine)(a, b))
    }
}
