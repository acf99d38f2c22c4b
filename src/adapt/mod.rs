//! Lazy adaptors backing [`Seq`](crate::Seq)'s transformation methods.
//!
//! Each adaptor owns its upstream producer and holds whatever small buffer or
//! cursor state its operation needs. Nothing is pulled from upstream until the
//! adaptor itself is pulled.

mod accumulate;
mod chain;
mod chunk;
mod combo;
mod filter;
mod map;
mod materialize;
mod tee;
mod window;

pub use accumulate::{Accumulate, AccumulateFrom};
pub use chain::Chain;
pub use chunk::{chunk, chunk_default, Chunk, ChunkDefault};
pub use combo::{Combinations, CombinationsWithReplacement, Permutations};
pub use filter::{Compact, Filter};
pub use map::Map;
pub use materialize::Materialized;
pub use tee::Tee;
pub use window::Window;
