//! Eager, scalar-producing operators.
//!
//! These consume the source immediately. `all`, `any` and `first` stop at the
//! first element that decides the answer.

use crate::error::{QueryError, Result};
use crate::{Seq, Sequence};

impl<S: Sequence> Seq<S> {
    /// Left fold from `seed`.
    ///
    /// ```
    /// use ironseq::*;
    ///
    /// let evens = from_vec(vec![4, 8, 8, 3, 9, 0, 7, 8, 2])
    ///     .aggregate(0, |total, n| if n % 2 == 0 { total + 1 } else { total });
    /// assert_eq!(evens, 6);
    /// ```
    pub fn aggregate<A, F>(&self, seed: A, f: F) -> A
    where
        F: Fn(A, S::Item) -> A,
    {
        self.inner.cursor().fold(seed, f)
    }

    /// `true` unless some element fails `pred`. Empty sources give `true`.
    pub fn all<P>(&self, pred: P) -> bool
    where
        P: Fn(&S::Item) -> bool,
    {
        self.inner.cursor().all(|x| pred(&x))
    }

    /// `true` once some element satisfies `pred`. Empty sources give `false`.
    pub fn any<P>(&self, pred: P) -> bool
    where
        P: Fn(&S::Item) -> bool,
    {
        self.inner.cursor().any(|x| pred(&x))
    }

    /// The first element satisfying `pred`.
    ///
    /// # Errors
    /// [`QueryError::NotFound`] if the source ends without a match.
    pub fn first<P>(&self, pred: P) -> Result<S::Item>
    where
        P: Fn(&S::Item) -> bool,
    {
        self.inner
            .cursor()
            .find(|x| pred(x))
            .ok_or_else(|| QueryError::not_found("first"))
    }
}
