//! Equality contracts used for bucketing and deduplication.
//!
//! An [`Equality`] pairs an equivalence test with a hash that agrees with it:
//! `equals(a, b)` must imply `hash(a) == hash(b)`.

use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;

/// Caller-supplied equals + hash contract.
pub trait Equality<T: ?Sized> {
    fn equals(&self, a: &T, b: &T) -> bool;
    fn hash(&self, value: &T) -> u64;
}

impl<T: ?Sized, E: Equality<T> + ?Sized> Equality<T> for Arc<E> {
    fn equals(&self, a: &T, b: &T) -> bool {
        (**self).equals(a, b)
    }

    fn hash(&self, value: &T) -> u64 {
        (**self).hash(value)
    }
}

impl<T: ?Sized, E: Equality<T> + ?Sized> Equality<T> for &E {
    fn equals(&self, a: &T, b: &T) -> bool {
        (**self).equals(a, b)
    }

    fn hash(&self, value: &T) -> u64 {
        (**self).hash(value)
    }
}

fn hash_of<K: Hash + ?Sized>(value: &K) -> u64 {
    let mut h = DefaultHasher::new();
    value.hash(&mut h);
    h.finish()
}

/// The type's own `Eq` + `Hash`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultEquality;

impl<T: Eq + Hash + ?Sized> Equality<T> for DefaultEquality {
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }

    fn hash(&self, value: &T) -> u64 {
        hash_of(value)
    }
}

/// Compares elements by a projected key.
///
/// ```
/// use ironseq::{Equality, EqualityBy};
///
/// let by_lower = EqualityBy::new(|s: &String| s.to_lowercase());
/// assert!(by_lower.equals(&"Ana".to_string(), &"ana".to_string()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EqualityBy<F> {
    key: F,
}

impl<F> EqualityBy<F> {
    pub fn new(key: F) -> Self {
        Self { key }
    }
}

impl<T, K, F> Equality<T> for EqualityBy<F>
where
    F: Fn(&T) -> K,
    K: Eq + Hash,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        (self.key)(a) == (self.key)(b)
    }

    fn hash(&self, value: &T) -> u64 {
        hash_of(&(self.key)(value))
    }
}

/// An equality built from two closures. Keeping them consistent is the caller's job.
#[derive(Debug, Clone, Copy)]
pub struct FnEquality<Q, H> {
    eq: Q,
    hash: H,
}

/// Build an [`Equality`] from an equals closure and a matching hash closure.
pub fn equality_fn<T, Q, H>(eq: Q, hash: H) -> FnEquality<Q, H>
where
    T: ?Sized,
    Q: Fn(&T, &T) -> bool,
    H: Fn(&T) -> u64,
{
    FnEquality { eq, hash }
}

impl<T, Q, H> Equality<T> for FnEquality<Q, H>
where
    T: ?Sized,
    Q: Fn(&T, &T) -> bool,
    H: Fn(&T) -> u64,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        (self.eq)(a, b)
    }

    fn hash(&self, value: &T) -> u64 {
        (self.hash)(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_equality_agrees_with_eq() {
        let e = DefaultEquality;
        assert!(Equality::<str>::equals(&e, "abc", "abc"));
        assert_eq!(Equality::<str>::hash(&e, "abc"), Equality::<str>::hash(&e, "abc"));
        assert!(!Equality::<i32>::equals(&e, &1, &2));
    }

    #[test]
    fn fn_equality_uses_both_closures() {
        let mod10 = equality_fn(|a: &i32, b: &i32| a % 10 == b % 10, |a: &i32| (a % 10) as u64);
        assert!(mod10.equals(&13, &23));
        assert_eq!(mod10.hash(&13), mod10.hash(&23));
    }
}
