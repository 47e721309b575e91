//! Testing utilities for ironseq queries.
//!
//! - **Assertions**: compare query output with expected results, or check
//!   that a query restarts cleanly
//! - **Instrumented sources**: [`CountingSource`] records how many elements
//!   have been pulled, for laziness and short-circuit checks
//!
//! # Quick Start
//!
//! ```
//! use ironseq::*;
//! use ironseq::testing::*;
//!
//! let source = CountingSource::new(vec![1, 2, 3, 4]);
//! let doubled = Seq::new(source.clone()).map(|x| x * 2);
//! assert_eq!(source.pulled(), 0);
//!
//! assert_seq_yields(&doubled, &[2, 4, 6, 8]);
//! assert_eq!(source.pulled(), 4);
//! ```

pub mod assertions;
pub mod counting;

pub use assertions::*;
pub use counting::*;
