//! Error type for terminal operations that run out of elements.

/// The sequence had fewer elements than the operation required.
///
/// Returned by [`Seq::next`](crate::Seq::next), [`skip`](crate::Seq::skip),
/// [`nth`](crate::Seq::nth), [`take`](crate::Seq::take),
/// [`reduce`](crate::Seq::reduce), [`min`](crate::Seq::min), and
/// [`max`](crate::Seq::max). Whether exhaustion is an error or an expected
/// end-of-input condition is the caller's call; the wrapper never retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("sequence exhausted")]
pub struct Exhausted;
