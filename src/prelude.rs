//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for quick access to the most common types
//! and functions.

// Core types
pub use crate::{Exhausted, Producer, Pull, Seq};

// Construction
pub use crate::source::{empty, from_fn, from_iter, once};

// Standalone helpers
pub use crate::adapt::{chunk, chunk_default};
pub use crate::extract::extract_ints;
