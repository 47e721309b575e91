//! Eagerly validated entry points for pipelines assembled at runtime.
//!
//! The fluent [`Seq`] API takes its sequences and closures by value, so they
//! cannot be missing. When a pipeline is put together from optional pieces
//! (a selector looked up in a registry, a comparer from configuration), use
//! these functions instead: every required argument is an `Option`, and a
//! `None` fails with [`QueryError::InvalidArgument`] right here, before any
//! source is touched and whether or not the result is ever iterated.
//!
//! ```
//! use ironseq::{checked, from_vec, QueryError};
//!
//! let source = from_vec(vec![1, 2, 3]);
//! let err = checked::filter(Some(source), None::<fn(&i32) -> bool>).unwrap_err();
//! assert!(matches!(err, QueryError::InvalidArgument { argument: "predicate", .. }));
//! ```
//!
//! [`QueryError::InvalidArgument`]: crate::QueryError::InvalidArgument

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::collection::{Filter, FlatMap, Map};
use crate::compare::{ByKey, Comparer, Compose, Dir};
use crate::equality::Equality;
use crate::error::{Result, required};
use crate::helpers::joins::Join;
use crate::helpers::keyed::GroupBy;
use crate::helpers::set_ops::{Distinct, Except, Intersect, Union};
use crate::helpers::zip::Zip;
use crate::ordering::OrderedSeq;
use crate::{Seq, Sequence};

/* ---------------- single-pass ---------------- */

pub fn map<S, O, F>(source: Option<S>, f: Option<F>) -> Result<Seq<Map<S, F>>>
where
    S: Sequence,
    F: Fn(S::Item) -> O,
{
    let source = required(source, "map", "source")?;
    let f = required(f, "map", "selector")?;
    Ok(Seq::new(source).map(f))
}

pub fn filter<S, P>(source: Option<S>, pred: Option<P>) -> Result<Seq<Filter<S, P>>>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    let source = required(source, "filter", "source")?;
    let pred = required(pred, "filter", "predicate")?;
    Ok(Seq::new(source).filter(pred))
}

pub fn flat_map<S, I, F>(source: Option<S>, f: Option<F>) -> Result<Seq<FlatMap<S, F>>>
where
    S: Sequence,
    F: Fn(S::Item) -> I,
    I: IntoIterator,
{
    let source = required(source, "flat_map", "source")?;
    let f = required(f, "flat_map", "selector")?;
    Ok(Seq::new(source).flat_map(f))
}

/* ---------------- set operators ---------------- */

pub fn union<S1, S2, E>(
    first: Option<S1>,
    second: Option<S2>,
    eq: Option<E>,
) -> Result<Seq<Union<S1, S2, E>>>
where
    S1: Sequence,
    S2: Sequence<Item = S1::Item>,
    S1::Item: Clone,
    E: Equality<S1::Item>,
{
    let first = required(first, "union", "first")?;
    let second = required(second, "union", "second")?;
    let eq = required(eq, "union", "equality")?;
    Ok(Seq::new(first).union(second, eq))
}

pub fn except<S1, S2, E>(
    first: Option<S1>,
    second: Option<S2>,
    eq: Option<E>,
) -> Result<Seq<Except<S1, S2, E>>>
where
    S1: Sequence,
    S2: Sequence<Item = S1::Item>,
    E: Equality<S1::Item>,
{
    let first = required(first, "except", "first")?;
    let second = required(second, "except", "second")?;
    let eq = required(eq, "except", "equality")?;
    Ok(Seq::new(first).except(second, eq))
}

pub fn intersect<S1, S2, E>(
    first: Option<S1>,
    second: Option<S2>,
    eq: Option<E>,
) -> Result<Seq<Intersect<S1, S2, E>>>
where
    S1: Sequence,
    S2: Sequence<Item = S1::Item>,
    S1::Item: Clone,
    E: Equality<S1::Item>,
{
    let first = required(first, "intersect", "first")?;
    let second = required(second, "intersect", "second")?;
    let eq = required(eq, "intersect", "equality")?;
    Ok(Seq::new(first).intersect(second, eq))
}

pub fn distinct<S, E>(source: Option<S>, eq: Option<E>) -> Result<Seq<Distinct<S, E>>>
where
    S: Sequence,
    S::Item: Clone,
    E: Equality<S::Item>,
{
    let source = required(source, "distinct", "source")?;
    let eq = required(eq, "distinct", "equality")?;
    Ok(Seq::new(source).distinct(eq))
}

/* ---------------- keyed ---------------- */

#[allow(clippy::type_complexity)]
pub fn join<SO, SI, K, FO, FI, FR, O, E>(
    outer: Option<SO>,
    inner: Option<SI>,
    outer_key: Option<FO>,
    inner_key: Option<FI>,
    result: Option<FR>,
    eq: Option<E>,
) -> Result<Seq<Join<SO, SI, FO, FI, FR, E>>>
where
    SO: Sequence,
    SI: Sequence,
    FO: Fn(&SO::Item) -> K,
    FI: Fn(&SI::Item) -> K,
    FR: Fn(&SO::Item, &SI::Item) -> O,
    E: Equality<K>,
{
    let outer = required(outer, "join", "outer")?;
    let inner = required(inner, "join", "inner")?;
    let outer_key = required(outer_key, "join", "outer_key")?;
    let inner_key = required(inner_key, "join", "inner_key")?;
    let result = required(result, "join", "result")?;
    let eq = required(eq, "join", "equality")?;
    Ok(Seq::new(outer).join_with(inner, outer_key, inner_key, result, eq))
}

#[allow(clippy::type_complexity)]
pub fn group_by<S, K, V, FK, FE, FR, O, E>(
    source: Option<S>,
    key: Option<FK>,
    element: Option<FE>,
    result: Option<FR>,
    eq: Option<E>,
) -> Result<Seq<GroupBy<S, FK, FE, FR, E>>>
where
    S: Sequence,
    FK: Fn(&S::Item) -> K,
    FE: Fn(&S::Item) -> V,
    FR: Fn(K, Vec<V>) -> O,
    E: Equality<K>,
{
    let source = required(source, "group_by", "source")?;
    let key = required(key, "group_by", "key")?;
    let element = required(element, "group_by", "element")?;
    let result = required(result, "group_by", "result")?;
    let eq = required(eq, "group_by", "equality")?;
    Ok(Seq::new(source).group_by_with(key, element, result, eq))
}

/// # Errors
/// `InvalidArgument` for a missing argument, `DuplicateKey` from the build itself.
pub fn to_map<S, K, V, FK, FE>(
    source: Option<S>,
    key: Option<FK>,
    element: Option<FE>,
) -> Result<HashMap<K, V>>
where
    S: Sequence,
    K: Eq + Hash + Debug,
    FK: Fn(&S::Item) -> K,
    FE: Fn(&S::Item) -> V,
{
    let source = required(source, "to_map", "source")?;
    let key = required(key, "to_map", "key")?;
    let element = required(element, "to_map", "element")?;
    Seq::new(source).to_map(key, element)
}

pub fn zip<S1, S2, F, O>(
    first: Option<S1>,
    second: Option<S2>,
    combine: Option<F>,
) -> Result<Seq<Zip<S1, S2, F>>>
where
    S1: Sequence,
    S2: Sequence,
    F: Fn(S1::Item, S2::Item) -> O,
{
    let first = required(first, "zip", "first")?;
    let second = required(second, "zip", "second")?;
    let combine = required(combine, "zip", "combiner")?;
    Ok(Seq::new(first).zip(second, combine))
}

/* ---------------- eager scalars ---------------- */

pub fn aggregate<S, A, F>(source: Option<S>, seed: A, f: Option<F>) -> Result<A>
where
    S: Sequence,
    F: Fn(A, S::Item) -> A,
{
    let source = required(source, "aggregate", "source")?;
    let f = required(f, "aggregate", "accumulator")?;
    Ok(Seq::new(source).aggregate(seed, f))
}

pub fn all<S, P>(source: Option<S>, pred: Option<P>) -> Result<bool>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    let source = required(source, "all", "source")?;
    let pred = required(pred, "all", "predicate")?;
    Ok(Seq::new(source).all(pred))
}

pub fn any<S, P>(source: Option<S>, pred: Option<P>) -> Result<bool>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    let source = required(source, "any", "source")?;
    let pred = required(pred, "any", "predicate")?;
    Ok(Seq::new(source).any(pred))
}

/// # Errors
/// `InvalidArgument` for a missing argument, `NotFound` when nothing matches.
pub fn first<S, P>(source: Option<S>, pred: Option<P>) -> Result<S::Item>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    let source = required(source, "first", "source")?;
    let pred = required(pred, "first", "predicate")?;
    Seq::new(source).first(pred)
}

/* ---------------- ordering ---------------- */

/// Start an ordering; each step is validated as it is added.
pub fn order_by<S, K, F, C>(
    source: Option<S>,
    key: Option<F>,
    comparer: Option<C>,
    dir: Dir,
) -> Result<OrderedSeq<S, ByKey<F, C>>>
where
    S: Sequence,
    F: Fn(&S::Item) -> K,
    C: Comparer<K>,
{
    let source = required(source, "order_by", "source")?;
    let key = required(key, "order_by", "key")?;
    let comparer = required(comparer, "order_by", "comparer")?;
    Ok(Seq::new(source).order_by_dir(key, comparer, dir))
}

/// Extend an ordering with one more tie-break step.
#[allow(clippy::type_complexity)]
pub fn then_by<S, C, K, F, C2>(
    ordered: Option<&OrderedSeq<S, C>>,
    key: Option<F>,
    comparer: Option<C2>,
    dir: Dir,
) -> Result<OrderedSeq<S, Compose<C, ByKey<F, C2>>>>
where
    S: Sequence,
    C: Comparer<S::Item>,
    F: Fn(&S::Item) -> K,
    C2: Comparer<K>,
{
    let ordered = required(ordered, "then_by", "source")?;
    let key = required(key, "then_by", "key")?;
    let comparer = required(comparer, "then_by", "comparer")?;
    Ok(ordered.then_by_dir(key, comparer, dir))
}
