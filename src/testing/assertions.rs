//! Assertion functions for testing query outputs.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::Sequence;
use crate::bucket::Grouping;

/// Assert that two collections are equal in order and content.
///
/// # Panics
///
/// Panics if the collections differ in length or content.
///
/// # Example
///
/// ```
/// use ironseq::testing::assert_collections_equal;
///
/// assert_collections_equal(&[1, 2, 3], &[1, 2, 3]);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert_eq!(
            a, e,
            "Collection mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that two collections hold the same elements with the same
/// multiplicities, ignoring order.
///
/// # Panics
///
/// Panics if some element occurs a different number of times on each side.
///
/// # Example
///
/// ```
/// use ironseq::testing::assert_collections_unordered_equal;
///
/// assert_collections_unordered_equal(&[3, 1, 3], &[3, 3, 1]);
/// ```
pub fn assert_collections_unordered_equal<T: Debug + Eq + Hash>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );

    let mut counts: HashMap<&T, isize> = HashMap::new();
    for e in expected {
        *counts.entry(e).or_default() += 1;
    }
    for a in actual {
        *counts.entry(a).or_default() -= 1;
    }
    let off: Vec<_> = counts.into_iter().filter(|(_, n)| *n != 0).collect();
    assert!(
        off.is_empty(),
        "Collection content mismatch (element, expected minus actual): {off:?}\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );
}

/// Run one full pass of `seq` and compare it with `expected`, in order.
///
/// # Panics
///
/// Panics on the first difference.
pub fn assert_seq_yields<S>(seq: &S, expected: &[S::Item])
where
    S: Sequence,
    S::Item: Debug + PartialEq,
{
    let actual: Vec<S::Item> = seq.cursor().collect();
    assert_collections_equal(&actual, expected);
}

/// Assert that two independent passes over `seq` produce the same output.
///
/// # Panics
///
/// Panics if the passes differ.
pub fn assert_restartable<S>(seq: &S)
where
    S: Sequence,
    S::Item: Debug + PartialEq,
{
    let first: Vec<S::Item> = seq.cursor().collect();
    let second: Vec<S::Item> = seq.cursor().collect();
    assert_eq!(first, second, "a second pass produced different output");
}

/// Assert grouped output: keys in order, members in order.
///
/// # Panics
///
/// Panics on any key or member difference.
///
/// # Example
///
/// ```
/// use ironseq::Grouping;
/// use ironseq::testing::assert_groups_equal;
///
/// let actual = vec![Grouping { key: 3, members: vec!['a', 'd'] }];
/// assert_groups_equal(&actual, &[(3, vec!['a', 'd'])]);
/// ```
pub fn assert_groups_equal<K, V>(actual: &[Grouping<K, V>], expected: &[(K, Vec<V>)])
where
    K: Debug + PartialEq,
    V: Debug + PartialEq,
{
    assert_eq!(
        actual.len(),
        expected.len(),
        "Group count mismatch:\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );
    for (i, (g, (k, members))) in actual.iter().zip(expected).enumerate() {
        assert_eq!(&g.key, k, "Key mismatch at group {i}");
        assert_collections_equal(&g.members, members);
    }
}
