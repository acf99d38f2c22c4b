//! # Lazyseq: Lazily-Evaluated Sequence Combinators
//!
//! Wrap any single-pass source of values and compose transformations without
//! allocating intermediates; nothing runs until a terminal operation demands
//! elements.
//!
//! ## Core Types
//!
//! - **[`Seq`]**: the sequence wrapper, with chainable transformations and
//!   eager terminals
//! - **[`Producer`]**: the capability a source needs: yield the next element
//!   or signal exhaustion via [`Pull`]
//!
//! ## Key Features
//!
//! - **Lazy**: transformations (`map`, `filter`, `chunk`, `window`, `tee`,
//!   ...) pull nothing until driven
//! - **Single-pass by construction**: adaptors own their upstream, so a
//!   partially consumed sequence can't be driven twice; `tee` is the explicit
//!   way to split
//! - **Eager terminals**: `collect`, `reduce`, `sum`, `min`/`max`, `take`,
//!   with exhaustion surfaced as a `Result`
//!
//! ## Example
//!
//! ```
//! use lazyseq::from_iter;
//!
//! let windows: Vec<_> = from_iter([1, 2, 3, 4])
//!     .map(|x| x * 10)
//!     .window(2)
//!     .collect();
//! assert_eq!(windows, vec![vec![10, 20], vec![20, 30], vec![30, 40]]);
//!
//! let total: i32 = from_iter(1..=100).filter(|x| x % 7 == 0).sum();
//! assert_eq!(total, 735);
//! ```
//!
//! ## Common Functions
//!
//! **Building sequences:**
//! - [`from_iter(iterable)`](from_iter) - wrap anything iterable
//! - [`from_fn(f)`](from_fn) - drive a closure, finite or unbounded
//! - [`once(value)`](once) / [`empty()`](empty) - trivial sequences
//!
//! **Standalone helpers:**
//! - [`chunk(iterable, n)`](chunk) / [`chunk_default(iterable, n, default)`](chunk_default)
//! - [`extract_ints(text)`](extract_ints) - pull every signed integer out of a string

pub mod adapt;
mod error;
mod extract;
mod iter;
pub mod prelude;
mod producer;
mod pull;
mod seq;
pub mod source;

pub use adapt::{chunk, chunk_default};
pub use error::Exhausted;
pub use extract::extract_ints;
pub use iter::SeqIter;
pub use producer::Producer;
pub use pull::Pull;
pub use seq::Seq;
pub use source::{empty, from_fn, from_iter, once};
