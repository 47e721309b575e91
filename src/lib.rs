//! # ironseq
//!
//! A **lazy query library** over restartable sequences. Queries are built by
//! chaining operators on a [`Seq`]; nothing runs until a cursor is advanced,
//! and every new cursor replays the pipeline from its sources.
//!
//! ## Key Features
//!
//! - **Lazy, restartable pipelines** - operators wrap sequences, cursors pull on demand
//! - **Pluggable equality** - set operators, joins and grouping take an [`Equality`]
//! - **Composable ordering** - [`order_by`](Seq::order_by) then any number of
//!   [`then_by`](OrderedSeq::then_by) steps, each returning a new immutable handle
//! - **Stable sort** - elements equal on every key keep source order
//! - **Typed errors** - [`QueryError`] for missing arguments, duplicate keys and empty searches
//!
//! ## Quick Start
//!
//! ```
//! use ironseq::*;
//!
//! let people = from_vec(vec![
//!     ("Magnus", "Hedlund"),
//!     ("Terry", "Adams"),
//!     ("Charlotte", "Weiss"),
//! ]);
//! let pets = from_vec(vec![
//!     ("Daisy", "Magnus"),
//!     ("Barley", "Terry"),
//!     ("Boots", "Terry"),
//!     ("Whiskers", "Charlotte"),
//! ]);
//!
//! let owners = people.join(
//!     pets,
//!     |p: &(&str, &str)| p.0,
//!     |pet: &(&str, &str)| pet.1,
//!     |p, pet| format!("{} - {}", pet.0, p.1),
//! );
//! assert_eq!(
//!     owners.to_vec(),
//!     vec!["Daisy - Hedlund", "Barley - Adams", "Boots - Adams", "Whiskers - Weiss"]
//! );
//! ```
//!
//! ## Core Concepts
//!
//! ### Sequence
//!
//! A [`Sequence`] hands out fresh cursors ([`Iterator`]s). Sources are
//! [`from_vec`], [`from_slice`] and [`from_fn`]; any type implementing
//! [`Sequence`] can be wrapped with [`Seq::new`].
//!
//! ### Operators
//!
//! #### Element-wise
//! - [`map`](Seq::map), [`filter`](Seq::filter), [`flat_map`](Seq::flat_map)
//! - [`zip`](Seq::zip) - positional pairing, stops with the shorter input
//!
//! #### Set-style
//! - [`union`](Seq::union), [`except`](Seq::except),
//!   [`intersect`](Seq::intersect), [`distinct`](Seq::distinct)
//!
//! #### Keyed
//! - [`join`](Seq::join) - inner equi-join, outer order then inner order
//! - [`group_by`](Seq::group_by) - one result per key, first-seen order
//! - [`to_lookup`](Seq::to_lookup), [`to_map`](Seq::to_map)
//!
//! #### Eager
//! - [`aggregate`](Seq::aggregate), [`all`](Seq::all), [`any`](Seq::any),
//!   [`first`](Seq::first), [`to_vec`](Seq::to_vec), [`count`](Seq::count)
//!
//! ### Ordering
//!
//! [`Seq::order_by`] returns an [`OrderedSeq`]. Each `then_by` composes one
//! more tie-break [`Comparer`] onto a copy of the handle.
//!
//! ### Validation
//!
//! The [`checked`] module mirrors the operators with `Option` arguments and
//! reports a missing one as [`QueryError::InvalidArgument`] immediately.
//!
//! ## Logging
//!
//! Materializing operators emit `tracing` events at `trace` level when they
//! build their index; errors are logged at `debug` level where they are raised.
//!
//! ## Feature Flags
//!
//! - `serde` (default) - `Serialize`/`Deserialize` for [`Dir`] and [`Grouping`]
//!
//! ## Module Overview
//!
//! - [`sequence`] - the [`Sequence`] trait and built-in sources
//! - [`collection`] - the [`Seq`] query type and element-wise operators
//! - [`equality`] - equality contracts
//! - [`bucket`] - key bucketing ([`Lookup`], [`SeenSet`])
//! - [`compare`] - comparers and their composition
//! - [`ordering`] - the ordering engine
//! - [`checked`] - eagerly validated entry points
//! - [`testing`] - assertions and instrumented sources for tests

pub mod bucket;
pub mod checked;
pub mod collection;
pub mod compare;
pub mod equality;
pub mod error;
pub mod ordering;
pub mod sequence;
pub mod testing;
pub(crate) mod helpers;

/// Operator and cursor types named in operator return types.
pub mod ops {
    pub use crate::collection::{Filter, FilterCursor, FlatMap, FlatMapCursor, Map, MapCursor};
    pub use crate::helpers::joins::{Join, JoinCursor};
    pub use crate::helpers::keyed::{GroupBy, GroupByCursor};
    pub use crate::helpers::set_ops::{
        Distinct, DistinctCursor, Except, ExceptCursor, Intersect, IntersectCursor, Union,
        UnionCursor,
    };
    pub use crate::helpers::zip::{Zip, ZipCursor};
    pub use crate::ordering::SortCursor;
    pub use crate::sequence::SourceCursor;
}

pub use bucket::{Grouping, Lookup, SeenSet};
pub use collection::{Seq, from_fn, from_slice, from_vec};
pub use compare::{ByKey, Comparer, Compose, Dir, NaturalOrder, Reversed, TotalOrderF64, by_key, compose};
pub use equality::{DefaultEquality, Equality, EqualityBy, FnEquality, equality_fn};
pub use error::{QueryError, Result};
pub use ordering::OrderedSeq;
pub use sequence::{Borrowed, FromFn, Sequence, Source};
