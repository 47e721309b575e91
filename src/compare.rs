//! Comparer contract and the comparator composer.
//!
//! A [`Comparer`] is a three-way comparison. [`by_key`] lifts a key comparer
//! onto elements through a selector, [`compose`] chains two element comparers
//! so the second only breaks ties left by the first. Chaining is associative:
//! `compose(compose(a, b), c)` and `compose(a, compose(b, c))` order every
//! input the same way.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Three-way comparison over `K`. Must be consistent and transitive.
pub trait Comparer<K: ?Sized> {
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

impl<K: ?Sized, F> Comparer<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

/// The key type's `Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> Comparer<K> for NaturalOrder {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Orders `f64` with [`f64::total_cmp`], so NaN has a fixed place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TotalOrderF64;

impl Comparer<f64> for TotalOrderF64 {
    #[inline]
    fn compare(&self, a: &f64, b: &f64) -> Ordering {
        a.total_cmp(b)
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Dir {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl Dir {
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Reverses `ordering` for `Desc`, passes it through for `Asc`.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/* ===================== ByKey ===================== */

/// One ordering step: select a key, compare keys, apply a direction.
#[derive(Clone)]
pub struct ByKey<F, C> {
    selector: F,
    comparer: C,
    dir: Dir,
}

impl<F, C> ByKey<F, C> {
    pub fn new(selector: F, comparer: C, dir: Dir) -> Self {
        Self {
            selector,
            comparer,
            dir,
        }
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }
}

impl<F, C> fmt::Debug for ByKey<F, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByKey").field("dir", &self.dir).finish_non_exhaustive()
    }
}

impl<T, K, F, C> Comparer<T> for ByKey<F, C>
where
    F: Fn(&T) -> K,
    C: Comparer<K>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        let ka = (self.selector)(a);
        let kb = (self.selector)(b);
        self.dir.apply(self.comparer.compare(&ka, &kb))
    }
}

/// Lift a key comparer to an ascending element comparer.
pub fn by_key<F, C>(selector: F, comparer: C) -> ByKey<F, C> {
    ByKey::new(selector, comparer, Dir::Asc)
}

/* ===================== Compose ===================== */

/// `primary`, falling back to `secondary` on ties.
///
/// The primary half sits behind an `Arc` so extending an ordering can share
/// the comparer built so far instead of copying it.
pub struct Compose<P, S> {
    primary: Arc<P>,
    secondary: S,
}

impl<P, S: Clone> Clone for Compose<P, S> {
    fn clone(&self) -> Self {
        Self {
            primary: Arc::clone(&self.primary),
            secondary: self.secondary.clone(),
        }
    }
}

impl<P, S> Compose<P, S> {
    pub(crate) fn shared(primary: Arc<P>, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P, S> fmt::Debug for Compose<P, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compose").finish_non_exhaustive()
    }
}

impl<T: ?Sized, P, S> Comparer<T> for Compose<P, S>
where
    P: Comparer<T>,
    S: Comparer<T>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match self.primary.compare(a, b) {
            Ordering::Equal => self.secondary.compare(a, b),
            decided => decided,
        }
    }
}

/// Combine two element comparers with lexicographic tie-breaking.
pub fn compose<P, S>(primary: P, secondary: S) -> Compose<P, S> {
    Compose::shared(Arc::new(primary), secondary)
}

/// Reverses another comparer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reversed<C>(pub C);

impl<K: ?Sized, C: Comparer<K>> Comparer<K> for Reversed<C> {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self.0.compare(a, b).reverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Fruit {
        name: &'static str,
        len: usize,
    }

    fn fruit(name: &'static str) -> Fruit {
        Fruit {
            name,
            len: name.len(),
        }
    }

    #[test]
    fn dir_apply() {
        assert_eq!(Dir::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Dir::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Dir::Desc.apply(Ordering::Equal), Ordering::Equal);
        assert_eq!(Dir::Desc.to_string(), "desc");
    }

    #[test]
    fn by_key_applies_selector_and_direction() {
        let asc = by_key(|f: &Fruit| f.len, NaturalOrder);
        let desc = ByKey::new(|f: &Fruit| f.len, NaturalOrder, Dir::Desc);
        let (a, b) = (fruit("fig"), fruit("mango"));

        assert_eq!(asc.compare(&a, &b), Ordering::Less);
        assert_eq!(desc.compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn compose_only_consults_secondary_on_ties() {
        let cmp = compose(
            by_key(|f: &Fruit| f.len, NaturalOrder),
            by_key(|f: &Fruit| f.name, NaturalOrder),
        );
        assert_eq!(cmp.compare(&fruit("grape"), &fruit("apple")), Ordering::Greater);
        assert_eq!(cmp.compare(&fruit("fig"), &fruit("apple")), Ordering::Less);
        assert_eq!(cmp.compare(&fruit("kiwi"), &fruit("kiwi")), Ordering::Equal);
    }

    #[test]
    fn compose_nesting_does_not_matter() {
        let first = |a: &(i32, i32, i32), b: &(i32, i32, i32)| a.0.cmp(&b.0);
        let second = |a: &(i32, i32, i32), b: &(i32, i32, i32)| b.1.cmp(&a.1);
        let third = |a: &(i32, i32, i32), b: &(i32, i32, i32)| a.2.cmp(&b.2);

        let left = compose(compose(first, second), third);
        let right = compose(first, compose(second, third));

        let xs = [(1, 2, 3), (1, 2, 4), (1, 3, 0), (0, 9, 9), (1, 2, 3)];
        for a in &xs {
            for b in &xs {
                assert_eq!(left.compare(a, b), right.compare(a, b), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn total_order_places_nan_last() {
        assert_eq!(TotalOrderF64.compare(&1.0, &f64::NAN), Ordering::Less);
        assert_eq!(Reversed(TotalOrderF64).compare(&1.0, &2.0), Ordering::Greater);
    }
}
